use crate::error::{NoticeError, Result};
use crate::project_identity;
use directories::{ProjectDirs, UserDirs};
use std::env;
use std::path::{Path, PathBuf};

pub fn expand_home(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_string_lossy();

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let user_dirs = UserDirs::new()
        .ok_or_else(|| NoticeError::PathError("Could not determine user home directory".to_string()))?;

    let home = user_dirs.home_dir();

    if path_str == "~" {
        return Ok(home.to_path_buf());
    }

    let stripped = path_str
        .strip_prefix("~/")
        .ok_or_else(|| NoticeError::PathError(format!("Invalid path format: {}", path_str)))?;

    Ok(home.join(stripped))
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "aegis", project_identity::STABLE_PROJECT_ID)
        .ok_or_else(|| NoticeError::PathError("Could not determine project directories".to_string()))
}

pub fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os(project_identity::env_key("CONFIG_DIR")) {
        return Ok(PathBuf::from(dir));
    }
    Ok(project_dirs()?.config_dir().to_path_buf())
}

pub fn state_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os(project_identity::env_key("STATE_DIR")) {
        return Ok(PathBuf::from(dir));
    }
    let dirs = project_dirs()?;
    // state_dir() is Linux-only; data_local_dir() covers macOS and Windows.
    Ok(dirs
        .state_dir()
        .unwrap_or_else(|| dirs.data_local_dir())
        .to_path_buf())
}

pub fn settings_file() -> Result<PathBuf> {
    Ok(config_dir()?.join("settings.json"))
}

pub fn store_file() -> Result<PathBuf> {
    Ok(state_dir()?.join("store.json"))
}

#[cfg(test)]
mod tests;
