//! Response envelope shared by every API endpoint
//!
//! Every response is wrapped as `{ data, meta: { message, pagination } }`.
//! A single generic type models it for all resources.

use super::errors::ApiError;
use super::result::Result;
use serde::{Deserialize, Serialize};

/// Pagination metadata describing one page of search results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    /// 1-based page number
    pub page: u32,

    /// Requested page size
    pub page_size: u32,

    /// Total number of matching records
    pub total_count: u64,

    /// Total number of pages
    pub total_pages: u32,
}

impl PaginationMeta {
    /// Pagination for a search that has not run yet
    pub fn initial(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size,
            total_count: 0,
            total_pages: 1,
        }
    }

    /// Whether a page after this one exists
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether a page before this one exists
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

impl Default for PaginationMeta {
    fn default() -> Self {
        Self::initial(10)
    }
}

/// The `meta` block of the envelope
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseMeta {
    /// Server message, e.g. "Patient created"
    #[serde(default)]
    pub message: String,

    /// Present on search responses only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationMeta>,
}

/// Generic API response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Payload
    pub data: T,

    /// Message and pagination metadata
    #[serde(default)]
    pub meta: ResponseMeta,
}

/// One page of search results
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<T> {
    /// Records on this page
    pub items: Vec<T>,

    /// Pagination for this page
    pub pagination: PaginationMeta,
}

/// The outcome of a successful create call
#[derive(Debug, Clone, PartialEq)]
pub struct Created<T> {
    /// The created record as echoed by the server
    pub entity: T,

    /// Server message
    pub message: String,
}

impl<T> ApiResponse<Vec<T>> {
    /// Unwraps a create response: the first element of `data` plus the message
    ///
    /// # Errors
    ///
    /// Returns a decode error when `data` is empty.
    pub fn into_created(self) -> Result<Created<T>> {
        let message = self.meta.message;
        let entity = self.data.into_iter().next().ok_or_else(|| {
            ApiError::Decode("create response contained no records".to_string())
        })?;
        Ok(Created { entity, message })
    }

    /// Unwraps a search response into items and pagination
    ///
    /// # Errors
    ///
    /// Returns a decode error when the pagination block is missing.
    pub fn into_search_result(self) -> Result<SearchResult<T>> {
        let pagination = self.meta.pagination.ok_or_else(|| {
            ApiError::Decode("search response is missing meta.pagination".to_string())
        })?;
        Ok(SearchResult {
            items: self.data,
            pagination,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_envelope_unwraps() {
        let body = json!({
            "data": [1, 2],
            "meta": {
                "message": "ok",
                "pagination": {"page": 2, "page_size": 2, "total_count": 6, "total_pages": 3}
            }
        });
        let response: ApiResponse<Vec<u32>> = serde_json::from_value(body).unwrap();
        let result = response.into_search_result().unwrap();

        assert_eq!(result.items, vec![1, 2]);
        assert_eq!(result.pagination.page, 2);
        assert!(result.pagination.has_next());
        assert!(result.pagination.has_previous());
    }

    #[test]
    fn test_search_envelope_without_pagination_is_decode_error() {
        let response: ApiResponse<Vec<u32>> =
            serde_json::from_value(json!({"data": [], "meta": {"message": "ok"}})).unwrap();
        let err = response.into_search_result().unwrap_err();
        assert!(err.to_string().contains("pagination"));
    }

    #[test]
    fn test_create_envelope_takes_first_record() {
        let response: ApiResponse<Vec<String>> =
            serde_json::from_value(json!({"data": ["a", "b"], "meta": {"message": "created"}}))
                .unwrap();
        let created = response.into_created().unwrap();
        assert_eq!(created.entity, "a");
        assert_eq!(created.message, "created");
    }

    #[test]
    fn test_create_envelope_empty_data_fails() {
        let response: ApiResponse<Vec<u32>> =
            serde_json::from_value(json!({"data": []})).unwrap();
        assert!(response.into_created().is_err());
    }

    #[test]
    fn test_initial_pagination() {
        let p = PaginationMeta::initial(10);
        assert_eq!(p.page, 1);
        assert!(!p.has_next());
        assert!(!p.has_previous());
    }
}
