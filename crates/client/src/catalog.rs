//! Read facade over the content API with mock-data fallback.
//!
//! Both read paths degrade rather than fail: a missing configuration, a
//! transport error, or an empty collection all fall back to the mock
//! dataset (list) or to absence (detail). Callers never see an error.
use log::{debug, error};

use crate::{course::Course, mock, Client, Credentials};

pub struct Catalog {
    client: Option<Client>,
    mocks: Vec<Course>,
}

impl Catalog {
    /// Build from the process environment. Missing credentials leave the
    /// catalog serving mock data only.
    pub fn from_env() -> Self {
        Self::new(Credentials::from_env().map(Client::new))
    }

    pub fn new(client: Option<Client>) -> Self {
        Self::with_mocks(client, mock::mock_courses())
    }

    /// Substitute the fallback dataset. Tests use this to observe the
    /// fallback paths without depending on the production mock set.
    pub fn with_mocks(client: Option<Client>, mocks: Vec<Course>) -> Self {
        Catalog { client, mocks }
    }

    /// Every course in the catalog, in source order, or the mock set when
    /// the source is unconfigured, unreachable, or empty.
    pub fn list_courses(&self) -> Vec<Course> {
        let Some(client) = &self.client else {
            debug!("api key or collection id not set, returning mock courses");
            return self.mocks.clone();
        };

        match client.query_courses() {
            Ok(pages) if !pages.is_empty() => {
                let courses: Vec<Course> = pages.iter().map(Course::normalize).collect();
                debug!("processed {} courses from the catalog", courses.len());
                courses
            }
            Ok(_) => {
                debug!("no records in the catalog collection, returning mock courses");
                self.mocks.clone()
            }
            Err(e) => {
                error!("error querying the catalog: {}", e);
                self.mocks.clone()
            }
        }
    }

    /// Look up one course by id. The mock set is checked first and an exact
    /// match short-circuits all network access. Absence is the only error
    /// signal.
    pub fn get_course(&self, id: &str) -> Option<Course> {
        if let Some(course) = self.mocks.iter().find(|c| c.id == id) {
            return Some(course.clone());
        }

        let client = self.client.as_ref()?;

        match client.course_page(id) {
            Ok(page) => {
                // A failed blocks fetch just leaves the short description.
                let content = client.page_blocks(id).unwrap_or_else(|e| {
                    debug!("error fetching content blocks for {}: {}", id, e);
                    Vec::new()
                });
                Some(Course::normalize_detail(&page, &content))
            }
            Err(e) => {
                error!("error fetching course {}: {}", id, e);
                self.list_courses().into_iter().find(|c| c.id == id)
            }
        }
    }
}
