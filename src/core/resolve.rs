//! Turn a CLI key (numeric id or display name) into a record id.
//!
//! Names are not unique, so a name matching several records is an error
//! listing the candidates rather than a silent pick of the first one.
//! A numeric key is tried as an id first, then as a name.

use crate::errors::{AppError, AppResult};
use crate::store::RecordStore;

fn resolve<T>(
    entity: &'static str,
    key: &str,
    by_id: impl Fn(i64) -> AppResult<Option<T>>,
    all: impl Fn() -> AppResult<Vec<T>>,
    id_name: impl Fn(&T) -> (i64, String),
) -> AppResult<i64> {
    let key = key.trim();

    if let Ok(id) = key.parse::<i64>()
        && by_id(id)?.is_some()
    {
        return Ok(id);
    }

    let wanted = key.to_lowercase();
    let items = all()?;
    let ids: Vec<i64> = items
        .iter()
        .map(&id_name)
        .filter(|(_, name)| name.trim().to_lowercase() == wanted)
        .map(|(id, _)| id)
        .collect();

    match ids.as_slice() {
        [] => Err(AppError::NotFound {
            entity,
            key: key.to_string(),
        }),
        [id] => Ok(*id),
        many => Err(AppError::AmbiguousName {
            entity,
            name: key.to_string(),
            ids: many
                .iter()
                .map(|i| i.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        }),
    }
}

pub fn resolve_project(store: &dyn RecordStore, key: &str) -> AppResult<i64> {
    resolve(
        "project",
        key,
        |id| store.project(id),
        || store.projects(),
        |p| (p.id, p.name.clone()),
    )
}

pub fn resolve_worker(store: &dyn RecordStore, key: &str) -> AppResult<i64> {
    resolve(
        "worker",
        key,
        |id| store.worker(id),
        || store.workers(),
        |w| (w.id, w.name.clone()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewProject, NewWorker};
    use crate::store::MemoryStore;

    #[test]
    fn resolves_ids_and_unique_names() {
        let mut store = MemoryStore::new();
        let a = store.insert_project(&NewProject::new("Portal 3", 1.0)).unwrap();
        store.insert_project(&NewProject::new("Garaje", 1.0)).unwrap();
        store.insert_project(&NewProject::new("garaje", 1.0)).unwrap();

        assert_eq!(resolve_project(&store, &a.to_string()).unwrap(), a);
        assert_eq!(resolve_project(&store, "portal 3").unwrap(), a);
        assert!(matches!(
            resolve_project(&store, "Garaje"),
            Err(AppError::AmbiguousName { .. })
        ));
        assert!(matches!(
            resolve_project(&store, "999"),
            Err(AppError::NotFound { .. })
        ));
    }

    #[test]
    fn resolves_workers_by_name() {
        let mut store = MemoryStore::new();
        let id = store
            .insert_worker(&NewWorker {
                name: "Ricardo".into(),
                national_id: Some("12345678Z".into()),
                role: None,
            })
            .unwrap();
        assert_eq!(resolve_worker(&store, "ricardo").unwrap(), id);
        assert!(matches!(
            resolve_worker(&store, "Naiara"),
            Err(AppError::NotFound { .. })
        ));
    }

    #[test]
    fn name_match_ignores_case_of_accented_letters() {
        let mut store = MemoryStore::new();
        let id = store
            .insert_worker(&NewWorker {
                name: "Ángel Núñez".into(),
                national_id: None,
                role: None,
            })
            .unwrap();
        assert_eq!(resolve_worker(&store, "ÁNGEL NÚÑEZ").unwrap(), id);
        assert_eq!(resolve_worker(&store, "ángel núñez").unwrap(), id);
    }

    #[test]
    fn numeric_key_falls_back_to_name() {
        let mut store = MemoryStore::new();
        let first = store.insert_project(&NewProject::new("Garaje", 1.0)).unwrap();
        let named = store.insert_project(&NewProject::new("2024", 1.0)).unwrap();

        // an existing id wins over a same-looking name
        assert_eq!(resolve_project(&store, &first.to_string()).unwrap(), first);
        assert_eq!(resolve_project(&store, "2024").unwrap(), named);
        assert!(matches!(
            resolve_project(&store, "2025"),
            Err(AppError::NotFound { .. })
        ));
    }

    #[test]
    fn unknown_worker_is_not_found() {
        let store = MemoryStore::new();
        assert!(matches!(
            resolve_worker(&store, "Naiara"),
            Err(AppError::NotFound { .. })
        ));
    }
}
