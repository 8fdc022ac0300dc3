//! Pagination constants for list endpoints.

/// Number of items in every page returned by a list endpoint.
pub const PAGE_SIZE: u64 = 10;

/// Page served when the request omits `page` or sends something unusable.
pub const DEFAULT_PAGE_NUMBER: u64 = 1;
