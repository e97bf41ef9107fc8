//! Bearer credentials parsed from the host's multi-token preference string.

use std::fmt;

/// An opaque bearer token for one workspace.
///
/// `Debug` and `Display` only show a short prefix so tokens never end up in
/// logs or error messages.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Credential(String);

impl Credential {
    /// Wraps a raw token after trimming surrounding whitespace.
    ///
    /// Returns `None` when nothing is left after trimming.
    pub fn new(raw: &str) -> Option<Self> {
        let token = raw.trim();
        if token.is_empty() {
            None
        } else {
            Some(Self(token.to_owned()))
        }
    }

    /// The raw token, for building the `Authorization` header.
    pub fn expose(&self) -> &str {
        &self.0
    }

    fn redacted(&self) -> String {
        let prefix: String = self.0.chars().take(6).collect();
        format!("{prefix}…")
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&self.redacted()).finish()
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.redacted())
    }
}

/// Splits a comma-separated token string into unique credentials.
///
/// Tokens are trimmed, empty entries are dropped, and duplicates are removed
/// keeping the first occurrence, so the result order follows the input.
pub fn parse_credentials(raw: &str) -> Vec<Credential> {
    let mut credentials: Vec<Credential> = Vec::new();
    for credential in raw.split(',').filter_map(Credential::new) {
        if !credentials.contains(&credential) {
            credentials.push(credential);
        }
    }
    credentials
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_trims_tokens() {
        let creds = parse_credentials(" secret_a , secret_b,secret_c ");
        let raw: Vec<&str> = creds.iter().map(Credential::expose).collect();
        assert_eq!(raw, vec!["secret_a", "secret_b", "secret_c"]);
    }

    #[test]
    fn drops_empty_entries() {
        let creds = parse_credentials(",secret_a,, ,");
        assert_eq!(creds.len(), 1);
        assert_eq!(creds[0].expose(), "secret_a");
    }

    #[test]
    fn deduplicates_after_trimming() {
        let creds = parse_credentials("secret_a, secret_a ,secret_b");
        assert_eq!(creds.len(), 2);
        assert_eq!(creds[0].expose(), "secret_a");
        assert_eq!(creds[1].expose(), "secret_b");
    }

    #[test]
    fn empty_string_yields_nothing() {
        assert!(parse_credentials("").is_empty());
        assert!(parse_credentials("   ").is_empty());
    }

    #[test]
    fn debug_does_not_leak_token() {
        let cred = Credential::new("secret_abcdefghijklmnop").expect("non-empty");
        let shown = format!("{cred:?} {cred}");
        assert!(!shown.contains("abcdefghijklmnop"));
        assert!(shown.contains("secret"));
    }
}
