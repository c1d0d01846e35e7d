//! Settings Command
//!
//! Manage notice settings.

use crate::config::settings::{Settings, VALID_KEYS};
use crate::error::{NoticeError, Result};
use crate::ui as output;

/// Settings command
#[derive(Debug)]
pub enum SettingsCommand {
    /// Set a setting value
    Set { key: String, value: String },
    /// Get a setting value
    Get { key: String },
    /// Show all settings
    Show,
    /// Reset setting to default
    Reset { key: String },
}

/// Run the settings command
pub fn run(command: SettingsCommand) -> Result<()> {
    match command {
        SettingsCommand::Set { key, value } => {
            let mut settings = Settings::load()?;
            settings.set(key.clone(), value.clone())?;
            output::success(&format!("Set {} = {}", key, value.trim()));
        }
        SettingsCommand::Get { key } => {
            let settings = Settings::load()?;
            match settings.get(&key) {
                Some(value) => {
                    println!("{} = {}", key, value);
                }
                None => {
                    return Err(NoticeError::ConfigError(format!(
                        "Setting '{}' not found. Valid settings: {}",
                        key,
                        VALID_KEYS.join(", ")
                    )));
                }
            }
        }
        SettingsCommand::Show => {
            let settings = Settings::load()?;
            show_all_settings(&settings);
        }
        SettingsCommand::Reset { key } => {
            let mut settings = Settings::load()?;
            settings.reset(&key)?;
            output::success(&format!("Reset {} to default", key));
        }
    }

    Ok(())
}

/// Show all settings
fn show_all_settings(settings: &Settings) {
    output::header("Current Settings");

    for (key, value) in settings.all() {
        if key == "fallback_version" && value.is_empty() {
            println!("  {}: (disabled)", key);
        } else {
            println!("  {}: {}", key, value);
        }
    }

    println!();
    output::info("Valid values:");
    println!("  comparison:   numeric, inequality");
    println!("  local_source: install-path, self-reported");
    println!("  tag_prefixes: comma list, e.g. client-,v");
}
