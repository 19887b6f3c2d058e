use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Envelope wrapping every successful API response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ApiResponseDto<T> {
    /// Human readable outcome of the request
    pub message: String,
    /// Payload of the response, `null` when the operation returns nothing
    pub data: Option<T>,
    /// HTTP status code of the response
    pub status: u16,
}

/// The response when an error occurs with an API request
///
/// `data` is only present for validation failures and maps each rejected field to the
/// messages describing why it was rejected.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub message: String,
    /// Field-keyed validation messages
    pub data: Option<BTreeMap<String, Vec<String>>>,
    /// HTTP status code of the response
    pub status: u16,
}

/// A single page of a listing endpoint
#[derive(Serialize, Deserialize, ToSchema)]
pub struct PageDto<T> {
    /// Total number of records across all pages
    pub count: u64,
    /// Requested page, starting at 1
    pub page: u64,
    /// Page size
    pub offset: u64,
    /// Number of pages needed to list every record
    pub pages: u64,
    /// Records in this page
    pub results: Vec<T>,
}
