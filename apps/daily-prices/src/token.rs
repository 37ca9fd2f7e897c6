//! FinMind token file (`~/.finMind`, JSON `{"token": "..."}`).

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::FinMindError;

/// Token file name in the home directory.
pub const TOKEN_FILE_NAME: &str = ".finMind";

#[derive(Deserialize)]
struct TokenFile {
    token: String,
}

/// `~/.finMind`.
pub fn default_token_path() -> Result<PathBuf, FinMindError> {
    dirs::home_dir()
        .map(|home| home.join(TOKEN_FILE_NAME))
        .ok_or(FinMindError::NoHomeDir)
}

/// Read the API token from a token file.
pub fn load_token(path: &Path) -> Result<String, FinMindError> {
    let display = path.display().to_string();
    if !path.exists() {
        return Err(FinMindError::TokenNotFound { path: display });
    }

    let content = std::fs::read_to_string(path).map_err(|source| FinMindError::TokenRead {
        path: display.clone(),
        source,
    })?;

    let file: TokenFile = serde_json::from_str(&content)
        .map_err(|source| FinMindError::TokenParse { path: display, source })?;

    Ok(file.token)
}
