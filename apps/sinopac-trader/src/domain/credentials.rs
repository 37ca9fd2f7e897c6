//! Login credentials.
//!
//! The brokerage accepts two login schemes: an API key/secret pair, or a
//! person ID + password + CA certificate. [`Credentials::from_parts`] picks
//! exactly one of them from whatever fields the caller has.

use std::fmt;

use thiserror::Error;

/// Errors building or loading credentials.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// Neither login scheme has all of its fields.
    #[error(
        "missing login parameters: need api_key + secret_key, or person_id + password + cert_path"
    )]
    MissingLoginParameters,

    /// Credential file does not exist.
    #[error("credential file not found: {path}")]
    NotFound {
        /// Path that was checked.
        path: String,
    },

    /// Credential file could not be read.
    #[error("failed to read credential file '{path}': {source}")]
    ReadError {
        /// Path to the credential file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Credential file is not valid JSON.
    #[error("failed to parse credential file '{path}': {source}")]
    ParseError {
        /// Path to the credential file.
        path: String,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// The user's home directory could not be determined.
    #[error("cannot determine home directory")]
    NoHomeDir,
}

/// Credentials for one of the two login schemes.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// API key and secret key issued by the broker.
    ApiKey {
        /// API key.
        api_key: String,
        /// Secret key.
        secret_key: String,
    },
    /// Person ID, password and CA certificate.
    Certificate {
        /// National ID of the account owner.
        person_id: String,
        /// Login password.
        password: String,
        /// Path to the `.pfx` certificate, always with `/` separators.
        cert_path: String,
        /// Certificate password.
        cert_password: String,
    },
}

impl Credentials {
    /// API key/secret credentials.
    #[must_use]
    pub fn api_key(api_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self::ApiKey {
            api_key: api_key.into(),
            secret_key: secret_key.into(),
        }
    }

    /// Certificate credentials.
    ///
    /// The certificate password defaults to the person ID, and backslashes
    /// in the certificate path become forward slashes.
    #[must_use]
    pub fn certificate(
        person_id: impl Into<String>,
        password: impl Into<String>,
        cert_path: &str,
        cert_password: Option<String>,
    ) -> Self {
        let person_id = person_id.into();
        let cert_password = cert_password.unwrap_or_else(|| person_id.clone());
        Self::Certificate {
            person_id,
            password: password.into(),
            cert_path: cert_path.replace('\\', "/"),
            cert_password,
        }
    }

    /// Pick a login scheme from optional fields.
    ///
    /// The API key pair wins when both halves are present; otherwise the
    /// certificate scheme is used when person ID, password and certificate
    /// path are all present. Empty strings count as absent.
    pub fn from_parts(
        api_key: Option<&str>,
        secret_key: Option<&str>,
        person_id: Option<&str>,
        password: Option<&str>,
        cert_path: Option<&str>,
        cert_password: Option<&str>,
    ) -> Result<Self, CredentialError> {
        fn present(v: Option<&str>) -> Option<&str> {
            v.filter(|s| !s.is_empty())
        }

        if let (Some(key), Some(secret)) = (present(api_key), present(secret_key)) {
            return Ok(Self::api_key(key, secret));
        }

        match (present(person_id), present(password), present(cert_path)) {
            (Some(id), Some(pw), Some(path)) => Ok(Self::certificate(
                id,
                pw,
                path,
                present(cert_password).map(str::to_string),
            )),
            _ => Err(CredentialError::MissingLoginParameters),
        }
    }

    /// Short scheme name for logging.
    #[must_use]
    pub const fn scheme(&self) -> &'static str {
        match self {
            Self::ApiKey { .. } => "api_key",
            Self::Certificate { .. } => "certificate",
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApiKey { api_key, .. } => f
                .debug_struct("ApiKey")
                .field("api_key", &redact(api_key))
                .finish_non_exhaustive(),
            Self::Certificate {
                person_id,
                cert_path,
                ..
            } => f
                .debug_struct("Certificate")
                .field("person_id", &redact(person_id))
                .field("cert_path", cert_path)
                .finish_non_exhaustive(),
        }
    }
}

/// Keep the first four characters of an identifier.
fn redact(value: &str) -> String {
    let prefix: String = value.chars().take(4).collect();
    format!("{prefix}***")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_pair_takes_precedence() {
        let creds = Credentials::from_parts(
            Some("key"),
            Some("secret"),
            Some("A123456789"),
            Some("pw"),
            Some("C:/ekey/Sinopac.pfx"),
            None,
        )
        .unwrap();

        assert_eq!(creds, Credentials::api_key("key", "secret"));
        assert_eq!(creds.scheme(), "api_key");
    }

    #[test]
    fn certificate_scheme_defaults_password_to_person_id() {
        let creds = Credentials::from_parts(
            None,
            None,
            Some("A123456789"),
            Some("pw"),
            Some("/ekey/Sinopac.pfx"),
            None,
        )
        .unwrap();

        let Credentials::Certificate { cert_password, .. } = creds else {
            panic!("expected certificate credentials");
        };
        assert_eq!(cert_password, "A123456789");
    }

    #[test]
    fn certificate_path_uses_forward_slashes() {
        let creds = Credentials::certificate(
            "A123456789",
            "pw",
            r"c:\ekey\551\A123456789\S\Sinopac.pfx",
            Some("certpw".to_string()),
        );

        let Credentials::Certificate {
            cert_path,
            cert_password,
            ..
        } = creds
        else {
            panic!("expected certificate credentials");
        };
        assert_eq!(cert_path, "c:/ekey/551/A123456789/S/Sinopac.pfx");
        assert_eq!(cert_password, "certpw");
    }

    #[test]
    fn half_an_api_key_pair_falls_through_to_certificate() {
        let creds = Credentials::from_parts(
            Some("key"),
            None,
            Some("A123456789"),
            Some("pw"),
            Some("Sinopac.pfx"),
            None,
        )
        .unwrap();
        assert_eq!(creds.scheme(), "certificate");
    }

    #[test]
    fn missing_everything_is_an_error() {
        let err = Credentials::from_parts(None, Some("secret"), Some("id"), None, None, None)
            .unwrap_err();
        assert!(matches!(err, CredentialError::MissingLoginParameters));
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let err =
            Credentials::from_parts(Some(""), Some(""), None, None, None, None).unwrap_err();
        assert!(matches!(err, CredentialError::MissingLoginParameters));
    }

    #[test]
    fn empty_api_key_pair_falls_through_to_certificate() {
        let creds = Credentials::from_parts(
            Some(""),
            Some(""),
            Some("A123456789"),
            Some("pw"),
            Some("Sinopac.pfx"),
            Some(""),
        )
        .unwrap();

        assert_eq!(
            creds,
            Credentials::certificate("A123456789", "pw", "Sinopac.pfx", None)
        );
    }

    #[test]
    fn debug_output_hides_secrets() {
        let debug = format!("{:?}", Credentials::api_key("PKABCDEFG", "topsecret"));
        assert!(debug.contains("PKAB***"));
        assert!(!debug.contains("topsecret"));

        let debug = format!(
            "{:?}",
            Credentials::certificate("A123456789", "hunter2", "x.pfx", None)
        );
        assert!(!debug.contains("hunter2"));
        assert!(!debug.contains("A123456789"));
    }
}
