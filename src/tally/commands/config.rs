use crate::commands::{CmdMessage, CmdResult};
use crate::config::TallyConfig;
use crate::error::{Result, TallyError};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Show or change `<home>/config.json`.
///
/// An unreadable config file never blocks this command: it is reported as a
/// warning and defaults are shown, and `Set` overwrites it with a good file.
pub fn run(home: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut config = load_or_default(home, &mut result)?;

    match action {
        ConfigAction::ShowAll => return Ok(result.with_config(config)),
        ConfigAction::ShowKey(key) => match config.get(&key) {
            Some(val) => result.add_message(CmdMessage::info(val)),
            None => result.add_message(CmdMessage::error(format!("Unknown config key: {}", key))),
        },
        ConfigAction::Set(key, value) => {
            if let Err(e) = set_checked(&mut config, home, &key, &value) {
                result.add_message(CmdMessage::error(e));
                return Ok(result);
            }
            config.save(home)?;
            result.add_message(CmdMessage::success(set_message(&config, home, &key)));
            return Ok(result.with_config(config));
        }
    }
    Ok(result)
}

fn load_or_default(home: &Path, result: &mut CmdResult) -> Result<TallyConfig> {
    match TallyConfig::load(home) {
        Ok(config) => Ok(config),
        Err(TallyError::Config(msg)) => {
            result.add_message(CmdMessage::warning(format!(
                "Ignoring unreadable config ({}); using defaults",
                msg
            )));
            Ok(TallyConfig::default())
        }
        Err(e) => Err(e),
    }
}

/// `data-file` is resolved against `home`, the same way document lookup does,
/// and may not name a directory.
fn set_checked(
    config: &mut TallyConfig,
    home: &Path,
    key: &str,
    value: &str,
) -> std::result::Result<(), String> {
    if key == "data-file" {
        let target = home.join(value.trim());
        if !value.trim().is_empty() && target.is_dir() {
            return Err(format!(
                "data-file must be a file, but {} is a directory",
                target.display()
            ));
        }
    }
    config.set(key, value)
}

fn set_message(config: &TallyConfig, home: &Path, key: &str) -> String {
    let shown = config.get(key).unwrap_or_default();
    match (key, &config.data_file) {
        ("data-file", Some(path)) if path.is_relative() => format!(
            "{} set to {} ({})",
            key,
            shown,
            home.join(path).display()
        ),
        ("data-file", None) => format!("{} cleared; using articles.json", key),
        _ => format!("{} set to {}", key, shown),
    }
}
