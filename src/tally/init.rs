use crate::api::TallyApi;
use crate::config::TallyConfig;
use crate::error::{Result, TallyError};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Overrides the per-user home (config, logs, global articles document).
pub const HOME_ENV: &str = "TALLY_HOME";
pub const DATA_FILE_NAME: &str = "articles.json";

pub struct TallyContext {
    pub api: TallyApi<FileStore>,
    pub config: TallyConfig,
    pub home: PathBuf,
    pub data_file: PathBuf,
    /// Set when `config.json` could not be read and defaults are in use.
    pub config_warning: Option<String>,
}

/// The per-user tally directory: `$TALLY_HOME`, or the OS data directory.
pub fn tally_home() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "tally", "tally")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| TallyError::Config("could not determine a home directory".into()))
}

/// Picks the articles document.
///
/// Order: explicit override, then the configured `data_file` (relative paths
/// are taken from `home`), then `home/articles.json` for global use, then
/// `articles.json` in the working directory.
pub fn resolve_data_file(
    cwd: &Path,
    home: &Path,
    config: &TallyConfig,
    file_override: Option<&Path>,
    use_global: bool,
) -> PathBuf {
    if let Some(path) = file_override {
        return cwd.join(path);
    }
    if let Some(path) = &config.data_file {
        return home.join(path);
    }
    if use_global {
        home.join(DATA_FILE_NAME)
    } else {
        cwd.join(DATA_FILE_NAME)
    }
}

pub fn initialize(
    cwd: &Path,
    file_override: Option<&Path>,
    use_global: bool,
) -> Result<TallyContext> {
    initialize_in(tally_home()?, cwd, file_override, use_global)
}

/// Like [`initialize`], with the home directory already known.
///
/// A malformed `config.json` does not stop the ledger: defaults are used and
/// the problem is returned in `config_warning`.
pub fn initialize_in(
    home: PathBuf,
    cwd: &Path,
    file_override: Option<&Path>,
    use_global: bool,
) -> Result<TallyContext> {
    let (config, config_warning) = match TallyConfig::load(&home) {
        Ok(config) => (config, None),
        Err(TallyError::Config(msg)) => (TallyConfig::default(), Some(msg)),
        Err(e) => return Err(e),
    };
    let data_file = resolve_data_file(cwd, &home, &config, file_override, use_global);

    let store = FileStore::new(&data_file);
    let api = TallyApi::new(store, home.clone());

    Ok(TallyContext {
        api,
        config,
        home,
        data_file,
        config_warning,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dirs() -> (PathBuf, PathBuf) {
        (PathBuf::from("/work/shop"), PathBuf::from("/home/u/.tally"))
    }

    #[test]
    fn defaults_to_working_directory() {
        let (cwd, home) = dirs();
        let path = resolve_data_file(&cwd, &home, &TallyConfig::default(), None, false);
        assert_eq!(path, cwd.join("articles.json"));
    }

    #[test]
    fn global_uses_home() {
        let (cwd, home) = dirs();
        let path = resolve_data_file(&cwd, &home, &TallyConfig::default(), None, true);
        assert_eq!(path, home.join("articles.json"));
    }

    #[test]
    fn configured_file_beats_global() {
        let (cwd, home) = dirs();
        let config = TallyConfig {
            data_file: Some(PathBuf::from("stock/main.json")),
            ..Default::default()
        };
        let path = resolve_data_file(&cwd, &home, &config, None, true);
        assert_eq!(path, home.join("stock/main.json"));

        let config = TallyConfig {
            data_file: Some(PathBuf::from("/srv/ledger.json")),
            ..Default::default()
        };
        let path = resolve_data_file(&cwd, &home, &config, None, false);
        assert_eq!(path, PathBuf::from("/srv/ledger.json"));
    }

    #[test]
    fn override_beats_everything() {
        let (cwd, home) = dirs();
        let config = TallyConfig {
            data_file: Some(PathBuf::from("configured.json")),
            ..Default::default()
        };
        let path = resolve_data_file(&cwd, &home, &config, Some(Path::new("mine.json")), true);
        assert_eq!(path, cwd.join("mine.json"));
    }

    #[test]
    fn malformed_config_falls_back_to_defaults() {
        let home = tempfile::TempDir::new().unwrap();
        std::fs::write(home.path().join("config.json"), "not json").unwrap();
        let cwd = PathBuf::from("/work/shop");

        let ctx = initialize_in(home.path().to_path_buf(), &cwd, None, false).unwrap();
        assert_eq!(ctx.config, TallyConfig::default());
        assert_eq!(ctx.data_file, cwd.join("articles.json"));
        assert!(ctx.config_warning.unwrap().contains("config.json"));
    }

    #[test]
    fn readable_config_has_no_warning() {
        let home = tempfile::TempDir::new().unwrap();
        let ctx = initialize_in(home.path().to_path_buf(), Path::new("."), None, true).unwrap();
        assert!(ctx.config_warning.is_none());
        assert_eq!(ctx.data_file, home.path().join("articles.json"));
    }
}
