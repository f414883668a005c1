//! Credentials for the content API: a bearer token plus the id of the
//! collection holding the catalog. Both come from the process environment;
//! if either is missing the site runs on mock data instead.
use std::env;

/// Environment variable holding the API access token.
pub const API_KEY_VAR: &str = "NOTION_API_KEY";
/// Environment variable holding the catalog collection id.
pub const DATABASE_ID_VAR: &str = "NOTION_DATABASE_ID";

/// Everything needed to talk to the content API
#[derive(Debug, Clone)]
pub struct Credentials {
    pub token: Token,
    pub database_id: String,
}

impl Credentials {
    /// Read credentials from the environment. `None` unless both values are
    /// present and non-empty.
    pub fn from_env() -> Option<Self> {
        let token = env::var(API_KEY_VAR).ok().filter(|v| !v.is_empty())?;
        let database_id = env::var(DATABASE_ID_VAR).ok().filter(|v| !v.is_empty())?;

        Some(Credentials {
            token: token.into(),
            database_id,
        })
    }
}

/// An API token, wrapped so we don't print it by accident
#[derive(Clone)]
pub struct Token(String);

impl Token {
    /// Masked form shown by diagnostics: the first four characters, then `...`
    pub fn masked_prefix(&self) -> String {
        format!("{}...", self.0.chars().take(4).collect::<String>())
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token (******)")
    }
}

impl From<String> for Token {
    fn from(value: String) -> Self {
        Token(value)
    }
}

impl From<&str> for Token {
    fn from(value: &str) -> Self {
        Token(value.to_owned())
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}
