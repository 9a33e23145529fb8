//! Opaque API credential

use std::fmt;

/// An API key for a completion provider
///
/// The secret is only reachable through [`Credential::expose`]; `Debug` and
/// `Display` print a redacted placeholder so the value cannot leak into logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a secret. Empty strings are not credentials.
    pub fn new(secret: impl Into<String>) -> Option<Self> {
        let secret = secret.into();
        if secret.is_empty() {
            None
        } else {
            Some(Self(secret))
        }
    }

    /// Borrow the raw secret, e.g. for an `Authorization` header
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(****)")
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("****")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_secret_is_not_a_credential() {
        assert!(Credential::new("").is_none());
        assert!(Credential::new("sk-test").is_some());
    }

    #[test]
    fn test_secret_is_redacted() {
        let credential = Credential::new("sk-very-secret").unwrap();
        assert_eq!(format!("{credential:?}"), "Credential(****)");
        assert_eq!(credential.to_string(), "****");
        assert_eq!(credential.expose(), "sk-very-secret");
    }
}
