use serde::Deserialize;
use utoipa::IntoParams;

use crate::{model::api::PageDto, server::error::pagination::PaginationError};

const DEFAULT_PAGE: u64 = 1;
const DEFAULT_OFFSET: u64 = 10;

/// Raw `?page=N&offset=M` query parameters.
///
/// Kept as strings so malformed values surface as a [`PaginationError`] in the response
/// envelope instead of an extractor rejection.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct PaginationParams {
    /// Page number starting at 1, defaults to 1
    pub page: Option<String>,
    /// Page size, defaults to 10
    pub offset: Option<String>,
}

/// Validated pagination request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page number
    pub page: u64,
    /// Page size
    pub offset: u64,
}

impl Pagination {
    /// Parses the query parameters, applying defaults for absent values.
    ///
    /// # Returns
    /// - `Ok(Pagination)` - Both values are positive integers
    /// - `Err(PaginationError::InvalidParameter)` - A value is not an integer, is not positive,
    ///   or the page starts beyond the last row the database can address
    pub fn from_params(params: &PaginationParams) -> Result<Self, PaginationError> {
        let pagination = Self {
            page: parse_positive("page", params.page.as_deref(), DEFAULT_PAGE)?,
            offset: parse_positive("offset", params.offset.as_deref(), DEFAULT_OFFSET)?,
        };

        match pagination.first_row() {
            Some(_) => Ok(pagination),
            None => Err(PaginationError::InvalidParameter {
                param: "page",
                value: pagination.page.to_string(),
            }),
        }
    }

    /// Index of the first row on this page, if it fits in a signed 64-bit SQL offset.
    fn first_row(&self) -> Option<u64> {
        self.page_index()
            .checked_mul(self.offset)
            .filter(|row| *row <= i64::MAX as u64)
    }

    /// Zero-based page index as used by the database paginator.
    pub fn page_index(&self) -> u64 {
        self.page - 1
    }

    /// Number of pages needed to list `count` records.
    pub fn pages(&self, count: u64) -> u64 {
        count.div_ceil(self.offset)
    }

    /// Wraps the records fetched for this page into the listing response body.
    pub fn into_page<T>(self, count: u64, results: Vec<T>) -> PageDto<T> {
        PageDto {
            count,
            page: self.page,
            offset: self.offset,
            pages: self.pages(count),
            results,
        }
    }
}

fn parse_positive(
    param: &'static str,
    value: Option<&str>,
    default: u64,
) -> Result<u64, PaginationError> {
    let Some(value) = value else {
        return Ok(default);
    };

    match value.trim().parse::<i64>() {
        Ok(parsed) if parsed > 0 => Ok(parsed as u64),
        _ => Err(PaginationError::InvalidParameter {
            param,
            value: value.to_string(),
        }),
    }
}
