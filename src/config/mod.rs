use crate::core::scope::MonthMatch;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub month_match: MonthMatch,
    #[serde(default)]
    pub include_finished: bool,
    #[serde(default = "default_hours")]
    pub default_hours: f64,
    #[serde(default = "default_friday_hours")]
    pub friday_hours: f64,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_currency() -> String {
    "€".to_string()
}
fn default_hours() -> f64 {
    8.0
}
fn default_friday_hours() -> f64 {
    6.0
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    fn with_database(db_path: PathBuf) -> Self {
        Self {
            database: db_path.to_string_lossy().to_string(),
            currency: default_currency(),
            month_match: MonthMatch::default(),
            include_finished: false,
            default_hours: default_hours(),
            friday_hours: default_friday_hours(),
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("obralog")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".obralog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("obralog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("obralog.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> AppResult<Self> {
        let cfg: Config = serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("invalid configuration file: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> AppResult<()> {
        for (name, value) in [
            ("default_hours", self.default_hours),
            ("friday_hours", self.friday_hours),
        ] {
            if !value.is_finite() || value <= 0.0 || value > 24.0 {
                return Err(AppError::Config(format!(
                    "{name} must be between 0 and 24 hours (got {value})"
                )));
            }
        }
        Ok(())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Initialize configuration and database files.
    ///
    /// `custom_db` may be absolute or relative to the config directory. In
    /// test mode the configuration file is left untouched.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) => {
                let p = Path::new(name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => dir.join("obralog.sqlite"),
        };

        let config = if is_test {
            Self::with_database(db_path.clone())
        } else {
            fs::create_dir_all(&dir)?;
            let mut cfg = Self::load()?;
            cfg.database = db_path.to_string_lossy().to_string();
            fs::write(Self::config_file(), cfg.to_yaml()?).map_err(|_| AppError::ConfigSave)?;
            success(format!("Config file: {}", Self::config_file().display()));
            cfg
        };

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let cfg = Config::parse("database: /tmp/obras.sqlite\n").unwrap();
        assert_eq!(cfg.database, "/tmp/obras.sqlite");
        assert_eq!(cfg.currency, "€");
        assert_eq!(cfg.month_match, MonthMatch::MonthOnly);
        assert!(!cfg.include_finished);
        assert_eq!(cfg.default_hours, 8.0);
        assert_eq!(cfg.friday_hours, 6.0);

        let cfg = Config::parse("currency: EUR\n").unwrap();
        assert_eq!(
            cfg.database,
            Config::database_file().to_string_lossy().to_string()
        );
        assert_eq!(cfg.currency, "EUR");
        assert_eq!(cfg.default_hours, 8.0);
    }

    #[test]
    fn reads_month_and_year_mode() {
        let cfg = Config::parse(
            "database: x.sqlite\nmonth_match: month_and_year\ncurrency: EUR\n",
        )
        .unwrap();
        assert_eq!(cfg.month_match, MonthMatch::MonthAndYear);
        assert_eq!(cfg.currency, "EUR");
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            Config::parse("database: x\nmonth_match: weekly\n"),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            Config::parse("database: x\nfriday_hours: 30\n"),
            Err(AppError::Config(_))
        ));
    }
}
