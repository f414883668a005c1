mod auth;
pub mod blocks;
pub mod catalog;
pub mod course;
pub mod diag;
pub mod mock;
pub mod properties;

pub use auth::{Credentials, Token, API_KEY_VAR, DATABASE_ID_VAR};
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

pub const NOTION_BASE: &str = "https://api.notion.com/v1/";

/// API version header sent with every request. The content API versions its
/// wire format with this header rather than the URL.
const NOTION_VERSION: &str = "2022-06-28";
const NOTION_VERSION_HEADER: &str = "Notion-Version";

/// A client, for reading the course catalog out of the Notion API
pub struct Client {
    pub creds: Credentials,
    http: reqwest::blocking::Client,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("http error: {}", .0)]
    HTTPError(#[from] reqwest::Error),

    #[error("api error ({}): {}: {}", .status, .code, .message)]
    APIError {
        status: u16,
        code: String,
        message: String,
    },

    #[error("serde error: {}", .0)]
    SerdeError(#[from] serde_json::Error),
}

/// Error body the API attaches to non-success responses.
#[derive(Debug, Default, Deserialize)]
struct APIErrorBody {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

impl Client {
    pub fn new(creds: Credentials) -> Self {
        Client {
            creds,
            http: reqwest::blocking::Client::new(),
        }
    }

    pub(crate) fn get<T: for<'a> Deserialize<'a>>(&self, url: &str) -> Result<T, Error> {
        let resp = self
            .http
            .get(format!("{}{}", NOTION_BASE, url))
            .bearer_auth(self.creds.token.as_ref())
            .header(NOTION_VERSION_HEADER, NOTION_VERSION)
            .send()?;
        self.read_json(resp)
    }

    pub(crate) fn post<T, B>(&self, url: &str, body: &B) -> Result<T, Error>
    where
        T: for<'a> Deserialize<'a>,
        B: Serialize,
    {
        let resp = self
            .http
            .post(format!("{}{}", NOTION_BASE, url))
            .bearer_auth(self.creds.token.as_ref())
            .header(NOTION_VERSION_HEADER, NOTION_VERSION)
            .json(body)
            .send()?;
        self.read_json(resp)
    }

    fn read_json<T: for<'a> Deserialize<'a>>(
        &self,
        resp: reqwest::blocking::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        if !status.is_success() {
            let body: APIErrorBody = resp.json().unwrap_or_default();
            return Err(Error::APIError {
                status: status.as_u16(),
                code: body.code,
                message: body.message,
            });
        }

        if log::log_enabled!(log::Level::Debug) {
            let s = resp.text()?;
            debug!("response: {}", s);
            Ok(serde_json::from_str(&s)?)
        } else {
            Ok(resp.json()?)
        }
    }
}
