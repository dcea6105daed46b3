use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
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
            let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
            println!("{}", yaml);
        }

        if *edit_config {
            if !path.exists() {
                cfg.save_to(&path)?;
            }

            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| "nano".to_string());
            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            let edited = Command::new(&editor_to_use)
                .arg(&path)
                .status()
                .map(|s| s.success())
                .unwrap_or(false);

            if edited {
                success(format!("Configuration file edited using '{}'", editor_to_use));
            } else {
                warning(format!(
                    "Editor '{}' not available, falling back to '{}'",
                    editor_to_use, default_editor
                ));
                let status = Command::new(&default_editor)
                    .arg(&path)
                    .status()
                    .map_err(|e| AppError::Config(e.to_string()))?;
                if !status.success() {
                    return Err(AppError::Config(format!(
                        "failed to edit configuration file using '{}'",
                        default_editor
                    )));
                }
            }

            // Reject an edit that no longer parses.
            Config::load_from(&path)?.offset()?;
        }
    }

    Ok(())
}
