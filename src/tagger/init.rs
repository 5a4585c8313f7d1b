use crate::api::{TaggerApi, TaggerPaths};
use crate::config::TaggerConfig;
use crate::error::{Result, TaggerError};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::debug;

/// Overrides the configuration directory.
pub const ENV_CONFIG_DIR: &str = "TAGGER_CONFIG_DIR";
/// Overrides the database location unless `--db` is given.
pub const ENV_DB: &str = "TAGGER_DB";

const DB_FILENAME: &str = "tagger.json";

pub struct TaggerContext {
    pub api: TaggerApi<FileStore>,
    pub config: TaggerConfig,
    pub db_path: PathBuf,
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "tagger", "tagger")
        .ok_or_else(|| TaggerError::Config("Could not determine home directory".to_string()))
}

/// `TAGGER_CONFIG_DIR` when set, otherwise the platform config directory.
pub fn config_dir() -> Result<PathBuf> {
    match std::env::var_os(ENV_CONFIG_DIR) {
        Some(dir) => Ok(PathBuf::from(dir)),
        None => Ok(project_dirs()?.config_dir().to_path_buf()),
    }
}

/// Picks an explicit database path. Precedence: flag, environment, config.
/// `None` means the platform default applies.
pub fn choose_db_path(
    flag: Option<PathBuf>,
    env: Option<PathBuf>,
    config: &TaggerConfig,
) -> Option<PathBuf> {
    flag.or(env).or_else(|| config.database_path.clone())
}

/// Builds the CLI context: loads config, resolves the database, opens the store.
///
/// # Environment Variables
///
/// * `TAGGER_CONFIG_DIR` - directory holding `config.json`
/// * `TAGGER_DB` - database file, overridden by `db_override`
pub fn initialize(db_override: Option<PathBuf>) -> Result<TaggerContext> {
    let config_dir = config_dir()?;
    let config = TaggerConfig::load(&config_dir)?;

    let env_db = std::env::var_os(ENV_DB).map(PathBuf::from);
    let db_path = match choose_db_path(db_override, env_db, &config) {
        Some(path) => path,
        None => project_dirs()?.data_dir().join(DB_FILENAME),
    };
    debug!(config_dir = %config_dir.display(), db = %db_path.display(), "initialized");

    let store = FileStore::new(db_path.clone());
    let api = TaggerApi::new(store, TaggerPaths { config_dir });
    Ok(TaggerContext {
        api,
        config,
        db_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_db(path: &str) -> TaggerConfig {
        TaggerConfig {
            database_path: Some(PathBuf::from(path)),
            ..TaggerConfig::default()
        }
    }

    #[test]
    fn flag_wins() {
        let chosen = choose_db_path(
            Some(PathBuf::from("/flag.json")),
            Some(PathBuf::from("/env.json")),
            &config_with_db("/config.json"),
        );
        assert_eq!(chosen, Some(PathBuf::from("/flag.json")));
    }

    #[test]
    fn env_beats_config() {
        let chosen = choose_db_path(
            None,
            Some(PathBuf::from("/env.json")),
            &config_with_db("/config.json"),
        );
        assert_eq!(chosen, Some(PathBuf::from("/env.json")));
    }

    #[test]
    fn config_beats_default() {
        let chosen = choose_db_path(None, None, &config_with_db("/config.json"));
        assert_eq!(chosen, Some(PathBuf::from("/config.json")));
    }

    #[test]
    fn nothing_explicit_means_default() {
        assert_eq!(choose_db_path(None, None, &TaggerConfig::default()), None);
    }
}
