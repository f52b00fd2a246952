use std::fmt::{Debug, Formatter};

/// Credential that holds the access key pair for an S3-compatible store.
///
/// R2 API tokens come as an access key id plus a secret access key; there is
/// no session token component.
#[derive(Default, Clone)]
pub struct Credential {
    /// Access key id.
    pub access_key_id: String,
    /// Secret access key.
    pub secret_access_key: String,
}

impl Credential {
    /// Create a new credential from an access key pair.
    pub fn new(access_key_id: &str, secret_access_key: &str) -> Self {
        Self {
            access_key_id: access_key_id.to_string(),
            secret_access_key: secret_access_key.to_string(),
        }
    }

    /// Check that both halves of the key pair are present.
    pub fn is_valid(&self) -> bool {
        !self.access_key_id.is_empty() && !self.secret_access_key.is_empty()
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("access_key_id", &Redact(&self.access_key_id))
            .field("secret_access_key", &Redact(&self.secret_access_key))
            .finish()
    }
}

/// Redacts a string by replacing all but the first and last three characters
/// with asterisks.
///
/// Strings shorter than 12 characters are redacted entirely. This lets users
/// distinguish between different redacted values without leaking secret
/// material into logs.
struct Redact<'a>(&'a str);

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let length = self.0.len();
        if length == 0 {
            f.write_str("EMPTY")
        } else if length < 12 {
            f.write_str("***")
        } else {
            f.write_str(&self.0[..3])?;
            f.write_str("***")?;
            f.write_str(&self.0[length - 3..])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_is_valid() {
        assert!(Credential::new("access_key_id", "secret_access_key").is_valid());
        assert!(!Credential::new("", "secret_access_key").is_valid());
        assert!(!Credential::new("access_key_id", "").is_valid());
        assert!(!Credential::default().is_valid());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let cred = Credential::new("AKIDEXAMPLE", "wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY");
        let printed = format!("{cred:?}");

        assert!(!printed.contains("wJalrXUtnFEMI"));
        assert_eq!(
            printed,
            "Credential { access_key_id: ***, secret_access_key: wJa***KEY }"
        );
    }

    #[test]
    fn test_redact() {
        let cases = vec![
            ("Short", "***"),
            ("Hello World!", "Hel***ld!"),
            ("This is a longer string", "Thi***ing"),
            ("", "EMPTY"),
            ("HelloWorld", "***"),
        ];

        for (input, expected) in cases {
            assert_eq!(
                format!("{:?}", Redact(input)),
                expected,
                "Failed on input: {}",
                input
            );
        }
    }
}
