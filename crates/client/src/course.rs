//! The `Course` record and the normalisation from raw catalog entries.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    blocks::{self, Block},
    properties::{lenient, Properties},
    Client, Result,
};

const DEFAULT_TITLE: &str = "Untitled Course";
const DEFAULT_DESCRIPTION: &str = "No description available";
const DEFAULT_IMAGE: &str = "/placeholder.svg?height=600&width=1200";
const DEFAULT_DURATION: &str = "8 weeks";
const DEFAULT_PRICE: f64 = 199.0;

fn default_highlights() -> Vec<String> {
    [
        "Learn from industry experts",
        "Hands-on practical exercises",
        "Certificate of completion",
        "Access to exclusive community",
    ]
    .into_iter()
    .map(str::to_owned)
    .collect()
}

/// Whether enrollment for a course is still open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum CourseStatus {
    #[default]
    Active,
    Finished,
}

/// One course in the catalog, fully populated: normalisation guarantees a
/// value for every field no matter how partial the source record was.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub image: String,
    pub duration: String,
    pub status: CourseStatus,
    pub price: f64,
    pub highlights: Vec<String>,
    pub created: Option<DateTime<Utc>>,
}

/// A single catalog entry as returned by the content API, before
/// normalisation. Each field decodes independently of the others.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPage {
    #[serde(default, deserialize_with = "lenient")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient")]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient")]
    pub properties: Properties,
}

impl RawPage {
    /// Decode a record leniently: anything that doesn't match the envelope
    /// still yields a usable (defaulted) page.
    pub fn from_value(v: Value) -> Self {
        serde_json::from_value(v).unwrap_or_default()
    }
}

impl Course {
    /// Normalise a raw catalog entry into a complete `Course`.
    ///
    /// Total: for each field the alternatives are tried in a fixed order and
    /// the first present one wins; absent or mis-shaped input lands on the
    /// field's default. Never fails.
    pub fn normalize(page: &RawPage) -> Course {
        let props = &page.properties;

        // The title property has gone by two names in real catalogs.
        let title = props
            .get("Title")
            .title_text()
            .or_else(|| props.get("Name").title_text())
            .unwrap_or_else(|| DEFAULT_TITLE.to_owned());

        let description = props
            .get("Description")
            .rich_text_text()
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_owned());

        // An attachment wins over the direct URL field, and once an
        // attachment list is present the URL field is no longer consulted.
        let image_prop = props.get("Image");
        let image = if !image_prop.files.is_empty() {
            image_prop
                .file_url()
                .unwrap_or_else(|| DEFAULT_IMAGE.to_owned())
        } else {
            image_prop
                .url_text()
                .unwrap_or_else(|| DEFAULT_IMAGE.to_owned())
        };

        let duration_prop = props.get("Duration");
        let duration = duration_prop
            .rich_text_text()
            .or_else(|| duration_prop.select_name())
            .unwrap_or_else(|| DEFAULT_DURATION.to_owned());

        let status = match props.get("Status").select_name().as_deref() {
            Some("Finished") => CourseStatus::Finished,
            _ => CourseStatus::Active,
        };

        let price = props.get("Price").number.unwrap_or(DEFAULT_PRICE);

        let highlights_prop = props.get("Highlights");
        let highlights = if !highlights_prop.multi_select.is_empty() {
            highlights_prop
                .multi_select
                .iter()
                .map(|o| o.name.clone())
                .collect()
        } else if let Some(text) = highlights_prop
            .rich_text_text()
            .filter(|t| !t.is_empty())
        {
            // May legitimately come out empty if the text is all newlines.
            text.split('\n')
                .filter(|l| !l.is_empty())
                .map(str::to_owned)
                .collect()
        } else {
            default_highlights()
        };

        Course {
            id: page.id.clone(),
            title,
            long_description: description.clone(),
            description,
            image,
            duration,
            status,
            price,
            highlights,
            created: page.created_time,
        }
    }

    /// Normalise a raw entry together with its child content blocks: the
    /// concatenated paragraph text, when there is any, replaces the short
    /// description as `long_description`.
    pub fn normalize_detail(page: &RawPage, content: &[Block]) -> Course {
        let mut course = Self::normalize(page);
        if let Some(text) = blocks::paragraph_text(content) {
            course.long_description = text;
        }

        course
    }
}

#[derive(Deserialize)]
struct QueryResp {
    #[serde(default)]
    results: Vec<Value>,
}

impl Client {
    /// Query every record in the catalog collection, in source order.
    /// One malformed record doesn't spoil the rest.
    pub fn query_courses(&self) -> Result<Vec<RawPage>> {
        let resp: QueryResp = self.post(
            &format!("databases/{}/query", self.creds.database_id),
            &serde_json::json!({}),
        )?;

        Ok(resp.results.into_iter().map(RawPage::from_value).collect())
    }

    /// Retrieve a single catalog record by id.
    pub fn course_page(&self, id: &str) -> Result<RawPage> {
        let v: Value = self.get(&format!("pages/{}", id))?;
        Ok(RawPage::from_value(v))
    }
}
