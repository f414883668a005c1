//! Lenient decoding of the property tree attached to a catalog record.
//!
//! The API reports each property as an envelope keyed by the property's
//! type (`title`, `rich_text`, `select`, ...), and real catalogs are
//! partially populated and occasionally mis-shaped. Every field here
//! decodes independently: a sub-field that doesn't match its expected
//! shape collapses to its default instead of failing the record.
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Substitute `Default` for anything that fails to deserialize.
///
/// Combined with `#[serde(default)]`, this makes a field total: absent,
/// null, or mis-shaped input all land on the default value.
pub(crate) fn lenient<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: serde::de::DeserializeOwned + Default,
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// One run of formatted text. Only the flattened plain text matters here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RichText {
    #[serde(default, deserialize_with = "lenient")]
    pub plain_text: String,
}

/// A single- or multi-choice option.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SelectOption {
    #[serde(default, deserialize_with = "lenient")]
    pub name: String,
}

/// A file attachment: hosted by the CMS (`file`) or elsewhere (`external`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileRef {
    #[serde(default, deserialize_with = "lenient")]
    pub file: Option<FileLink>,
    #[serde(default, deserialize_with = "lenient")]
    pub external: Option<FileLink>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileLink {
    #[serde(default, deserialize_with = "lenient")]
    pub url: String,
}

/// The value envelope of one page property. Only the variant matching the
/// property's configured type is populated; the rest stay at their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertyValue {
    #[serde(default, deserialize_with = "lenient")]
    pub title: Vec<RichText>,
    #[serde(default, deserialize_with = "lenient")]
    pub rich_text: Vec<RichText>,
    #[serde(default, deserialize_with = "lenient")]
    pub select: Option<SelectOption>,
    #[serde(default, deserialize_with = "lenient")]
    pub multi_select: Vec<SelectOption>,
    #[serde(default, deserialize_with = "lenient")]
    pub files: Vec<FileRef>,
    #[serde(default, deserialize_with = "lenient")]
    pub number: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub url: Option<String>,
}

impl PropertyValue {
    /// First run of a `title` property. A present-but-empty run still wins.
    pub fn title_text(&self) -> Option<String> {
        self.title.first().map(|r| r.plain_text.clone())
    }

    /// First run of a `rich_text` property. A present-but-empty run still wins.
    pub fn rich_text_text(&self) -> Option<String> {
        self.rich_text.first().map(|r| r.plain_text.clone())
    }

    /// Name of the selected option, if one is set and non-empty.
    pub fn select_name(&self) -> Option<String> {
        self.select
            .as_ref()
            .map(|s| s.name.clone())
            .filter(|n| !n.is_empty())
    }

    /// URL of the first file attachment, preferring a hosted file over an
    /// external link. `None` when `files` is empty or the first attachment
    /// carries no usable URL.
    pub fn file_url(&self) -> Option<String> {
        let first = self.files.first()?;
        first
            .file
            .as_ref()
            .map(|l| l.url.clone())
            .filter(|u| !u.is_empty())
            .or_else(|| {
                first
                    .external
                    .as_ref()
                    .map(|l| l.url.clone())
                    .filter(|u| !u.is_empty())
            })
    }

    /// The direct `url` field, when set and non-empty.
    pub fn url_text(&self) -> Option<String> {
        self.url.clone().filter(|u| !u.is_empty())
    }
}

/// The full property tree of a record, keyed by property name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Properties(pub(crate) serde_json::Map<String, Value>);

impl Properties {
    /// Decode the named property. Absent or mis-shaped properties come back
    /// as an empty envelope, so every extraction falls through to defaults.
    pub fn get(&self, name: &str) -> PropertyValue {
        self.0
            .get(name)
            .cloned()
            .map(|v| serde_json::from_value(v).unwrap_or_default())
            .unwrap_or_default()
    }
}
