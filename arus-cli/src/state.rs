use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// `$ARUS_HOME` if set, otherwise `~/.arus`
pub fn arus_home() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os("ARUS_HOME") {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".arus"))
}

pub fn ensure_arus_home() -> Result<PathBuf> {
    let dir = arus_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}
