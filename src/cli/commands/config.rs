use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{error, success, warning};
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", cfg.to_yaml()?);
        }

        if *edit_config {
            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            match Command::new(&editor_to_use).arg(&path).status() {
                Ok(s) if s.success() => {
                    success(format!(
                        "Configuration file edited successfully using '{}'",
                        editor_to_use
                    ));
                }
                Ok(_) | Err(_) => {
                    warning(format!(
                        "Editor '{}' not available, falling back to '{}'",
                        editor_to_use, default_editor
                    ));

                    match Command::new(&default_editor).arg(&path).status() {
                        Ok(s) if s.success() => {
                            success(format!(
                                "Configuration file edited successfully using fallback '{}'",
                                default_editor
                            ));
                        }
                        Ok(_) | Err(_) => {
                            error(format!(
                                "Failed to edit configuration file using fallback '{}'",
                                default_editor
                            ));
                        }
                    }
                }
            }

            // surface syntax errors right away instead of on the next command
            Config::load_from(&path)?;
        }
    }

    Ok(())
}
