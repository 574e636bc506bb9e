use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. LASTSEEN_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.lastseen (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("LASTSEEN_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("lastseen"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".lastseen"));
    }

    bail!("Could not determine data directory: no HOME directory or XDG data directory found")
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Overrides the default `<data-dir>/lastseen.db` database location.
    #[serde(default)]
    pub database: Option<PathBuf>,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        Ok(config)
    }

    /// Database path for a given data directory, honoring the override.
    pub fn db_path(&self, data_dir: &Path) -> PathBuf {
        self.database
            .clone()
            .unwrap_or_else(|| data_dir.join("lastseen.db"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_config_is_default() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert!(config.database.is_none());
    }

    #[test]
    fn test_database_override() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "database = \"/srv/app/store.db\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(
            config.db_path(dir.path()),
            PathBuf::from("/srv/app/store.db")
        );
    }

    #[test]
    fn test_default_db_path_under_data_dir() {
        let config = Config::default();
        assert_eq!(
            config.db_path(Path::new("/tmp/data")),
            PathBuf::from("/tmp/data/lastseen.db")
        );
    }

    #[test]
    fn test_explicit_data_dir_wins() {
        let resolved = resolve_data_dir(Some("/tmp/explicit")).unwrap();
        assert_eq!(resolved, PathBuf::from("/tmp/explicit"));
    }
}
