//! Credential file loading.
//!
//! The vendor convention is a JSON dotfile in the home directory:
//!
//! ```json
//! { "api_key": "...", "secret_key": "..." }
//! ```
//!
//! The certificate scheme uses `person_id`, `password`, `cert_path` and an
//! optional `cert_password` instead. Unknown keys are ignored.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::{CredentialError, Credentials};

/// File name of the credential file inside the home directory.
pub const CREDENTIAL_FILE_NAME: &str = ".sinorc";

#[derive(Debug, Default, Deserialize)]
struct CredentialFile {
    #[serde(default)]
    api_key: Option<String>,
    #[serde(default)]
    secret_key: Option<String>,
    #[serde(default)]
    person_id: Option<String>,
    #[serde(default)]
    password: Option<String>,
    #[serde(default)]
    cert_path: Option<String>,
    #[serde(default)]
    cert_password: Option<String>,
}

/// `~/.sinorc`.
pub fn default_credential_path() -> Result<PathBuf, CredentialError> {
    dirs::home_dir()
        .map(|home| home.join(CREDENTIAL_FILE_NAME))
        .ok_or(CredentialError::NoHomeDir)
}

/// Read the credential file and pick a login scheme from it.
///
/// # Errors
///
/// `NotFound` when the file does not exist, `ReadError`/`ParseError` when it
/// cannot be read or is not JSON, and `MissingLoginParameters` when neither
/// scheme is complete.
pub fn load_credentials(path: &Path) -> Result<Credentials, CredentialError> {
    let display = path.display().to_string();

    if !path.exists() {
        return Err(CredentialError::NotFound { path: display });
    }

    let contents = std::fs::read_to_string(path).map_err(|source| CredentialError::ReadError {
        path: display.clone(),
        source,
    })?;

    let file: CredentialFile =
        serde_json::from_str(&contents).map_err(|source| CredentialError::ParseError {
            path: display,
            source,
        })?;

    Credentials::from_parts(
        file.api_key.as_deref(),
        file.secret_key.as_deref(),
        file.person_id.as_deref(),
        file.password.as_deref(),
        file.cert_path.as_deref(),
        file.cert_password.as_deref(),
    )
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_api_key_pair() {
        let file = write_file(r#"{"api_key": "KEY123456", "secret_key": "SECRET987"}"#);

        let credentials = load_credentials(file.path()).unwrap();

        assert_eq!(credentials, Credentials::api_key("KEY123456", "SECRET987"));
    }

    #[test]
    fn loads_certificate_scheme() {
        let file = write_file(
            r#"{"person_id": "A123456789", "password": "pw", "cert_path": "C:\\certs\\Sinopac.pfx"}"#,
        );

        let credentials = load_credentials(file.path()).unwrap();

        assert_eq!(
            credentials,
            Credentials::Certificate {
                person_id: "A123456789".to_string(),
                password: "pw".to_string(),
                cert_path: "C:/certs/Sinopac.pfx".to_string(),
                cert_password: "A123456789".to_string(),
            }
        );
    }

    #[test]
    fn extra_keys_are_ignored() {
        let file = write_file(r#"{"api_key": "k", "secret_key": "s", "comment": "paper"}"#);
        assert!(load_credentials(file.path()).is_ok());
    }

    #[test]
    fn missing_secret_is_missing_parameters() {
        let file = write_file(r#"{"api_key": "KEY123456"}"#);

        let err = load_credentials(file.path()).unwrap_err();

        assert!(matches!(err, CredentialError::MissingLoginParameters));
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CREDENTIAL_FILE_NAME);

        let err = load_credentials(&path).unwrap_err();

        assert!(matches!(err, CredentialError::NotFound { .. }));
    }

    #[test]
    fn invalid_json_is_parse_error() {
        let file = write_file("api_key = KEY");

        let err = load_credentials(file.path()).unwrap_err();

        assert!(matches!(err, CredentialError::ParseError { .. }));
    }

    #[test]
    fn default_path_is_in_home_dir() {
        if let Ok(path) = default_credential_path() {
            assert!(path.ends_with(CREDENTIAL_FILE_NAME));
        }
    }
}
