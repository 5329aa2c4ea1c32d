use anyhow::Result;
use std::path::PathBuf;

const LENSWORK_DIR: &str = ".lenswork";
const DB_FILE: &str = "lenswork.db";
const CONFIG_FILE: &str = "config.toml";
const LOGS_DIR: &str = "logs";

/// Environment variable to override the Lenswork directory.
const LENSWORK_DIR_ENV: &str = "LENSWORK_DIR";

/// Resolve the Lenswork data directory.
/// Priority: LENSWORK_DIR env var > ~/.lenswork/
pub fn resolve_lenswork_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(LENSWORK_DIR_ENV)
        && !dir.trim().is_empty()
    {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|h| h.join(LENSWORK_DIR))
        .ok_or_else(|| anyhow::anyhow!("Failed to determine home directory"))
}

/// Ensure the Lenswork directory exists and return its path.
pub fn ensure_lenswork_dir() -> Result<PathBuf> {
    let dir = resolve_lenswork_dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the database path: ~/.lenswork/lenswork.db
pub fn database_path() -> Result<PathBuf> {
    Ok(resolve_lenswork_dir()?.join(DB_FILE))
}

/// Ensure the database path's directory exists and return the path.
pub fn ensure_database_path() -> Result<PathBuf> {
    Ok(ensure_lenswork_dir()?.join(DB_FILE))
}

/// Convenience helper returning the database path as a UTF-8 string.
pub fn ensure_database_path_string() -> Result<String> {
    Ok(ensure_database_path()?.to_string_lossy().into_owned())
}

/// Get the config file path: ~/.lenswork/config.toml
pub fn config_path() -> Result<PathBuf> {
    Ok(resolve_lenswork_dir()?.join(CONFIG_FILE))
}

/// Get the logs directory: ~/.lenswork/logs/
pub fn logs_dir() -> Result<PathBuf> {
    let dir = ensure_lenswork_dir()?.join(LOGS_DIR);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
