//! Pagination envelope shared by list endpoints

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PAGE, DEFAULT_PER_PAGE};
use crate::errors::ValidationError;

fn default_page() -> u32 {
    DEFAULT_PAGE
}

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

/// One page of results plus cursor bookkeeping
///
/// `next_page` and `prev_page` are null at the respective boundary; the
/// service never wraps around.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedList<T> {
    pub data: Vec<T>,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    pub pages_count: u32,
    pub count: u32,
    pub total_count: u32,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_page: Option<u32>,
}

impl<T> PaginatedList<T> {
    /// Checks the envelope invariants after decoding
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.page < 1 {
            return Err(ValidationError::Field {
                field: "page",
                message: "must be 1 or greater".to_string(),
            });
        }
        if self.per_page < 1 {
            return Err(ValidationError::Field {
                field: "per_page",
                message: "must be 1 or greater".to_string(),
            });
        }
        Ok(())
    }

    pub fn has_next_page(&self) -> bool {
        self.next_page.is_some()
    }

    pub fn has_prev_page(&self) -> bool {
        self.prev_page.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn last_page_has_no_next() {
        let body = json!({
            "data": ["a", "b"],
            "per_page": 50,
            "pages_count": 2,
            "count": 2,
            "total_count": 52,
            "page": 2,
            "next_page": null,
            "prev_page": 1
        });
        let page: PaginatedList<String> = serde_json::from_value(body).unwrap();
        assert!(page.validate().is_ok());
        assert!(!page.has_next_page());
        assert_eq!(page.prev_page, Some(1));
    }

    #[test]
    fn first_page_has_no_prev() {
        let body = json!({
            "data": [],
            "pages_count": 1,
            "count": 0,
            "total_count": 0,
            "next_page": null,
            "prev_page": null
        });
        let page: PaginatedList<String> = serde_json::from_value(body).unwrap();
        assert_eq!(page.page, 1);
        assert_eq!(page.per_page, 50);
        assert!(!page.has_prev_page());
    }

    #[test]
    fn zero_page_fails_validation() {
        let body = json!({
            "data": [],
            "per_page": 50,
            "pages_count": 0,
            "count": 0,
            "total_count": 0,
            "page": 0
        });
        let page: PaginatedList<String> = serde_json::from_value(body).unwrap();
        assert!(matches!(
            page.validate().unwrap_err(),
            ValidationError::Field { field: "page", .. }
        ));
    }
}
