//! Pagination response models.

use serde::Serialize;
use utoipa::ToSchema;

use crate::pagination::{total_pages, PageRequest};

/// Position of a returned page within the full result set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct PageInfo {
    /// Current page number
    #[schema(example = 1)]
    pub page: u64,
    /// Total number of pages
    #[schema(example = 3)]
    pub total_pages: u64,
}

impl PageInfo {
    pub fn new(request: PageRequest, total: u64) -> Self {
        Self {
            page: request.page(),
            total_pages: total_pages(total),
        }
    }
}
