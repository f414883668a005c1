//! Configuration and connectivity self-test backing the site's diagnostic
//! route.
use std::env;

use serde::{Deserialize, Serialize};

use crate::{
    auth::{API_KEY_VAR, DATABASE_ID_VAR},
    properties::{lenient, RichText},
    Client, Credentials, Result,
};

/// Catalog collection metadata. Fetched only by the self-test.
#[derive(Debug, Default, Deserialize)]
pub struct DatabaseMeta {
    #[serde(default, deserialize_with = "lenient")]
    pub title: Vec<RichText>,
}

impl DatabaseMeta {
    pub fn title_text(&self) -> String {
        self.title
            .first()
            .map(|r| r.plain_text.clone())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| "Unknown Database".to_owned())
    }
}

impl Client {
    /// Retrieve the catalog collection's metadata.
    pub fn database_meta(&self) -> Result<DatabaseMeta> {
        self.get(&format!("databases/{}", self.creds.database_id))
    }
}

/// Outcome of the self-test, shaped for the diagnostic route's JSON body.
/// Always constructed, never an error: the web layer serialises it as-is.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionReport {
    pub success: bool,
    pub api_key_set: bool,
    pub database_id_set: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Run the self-test against the process environment.
pub fn connection_report() -> ConnectionReport {
    report_for(
        env::var(API_KEY_VAR).ok().filter(|v| !v.is_empty()),
        env::var(DATABASE_ID_VAR).ok().filter(|v| !v.is_empty()),
    )
}

/// Run the self-test against explicit configuration values. With either
/// value absent the report says which, and no network call is made.
pub fn report_for(api_key: Option<String>, database_id: Option<String>) -> ConnectionReport {
    let (token, database_id) = match (api_key, database_id) {
        (Some(token), Some(database_id)) => (token, database_id),
        (api_key, database_id) => {
            return ConnectionReport {
                success: false,
                api_key_set: api_key.is_some(),
                database_id_set: database_id.is_some(),
                api_key_prefix: None,
                database_id: None,
                database_title: None,
                error: Some("api key or collection id is not set".to_owned()),
            }
        }
    };

    let creds = Credentials {
        token: token.into(),
        database_id,
    };
    let client = Client::new(creds.clone());

    match client.database_meta() {
        Ok(meta) => ConnectionReport {
            success: true,
            api_key_set: true,
            database_id_set: true,
            api_key_prefix: Some(creds.token.masked_prefix()),
            database_id: Some(creds.database_id),
            database_title: Some(meta.title_text()),
            error: None,
        },
        Err(e) => ConnectionReport {
            success: false,
            api_key_set: true,
            database_id_set: true,
            api_key_prefix: Some(creds.token.masked_prefix()),
            database_id: Some(creds.database_id),
            database_title: None,
            error: Some(e.to_string()),
        },
    }
}
