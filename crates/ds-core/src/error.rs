//! Error types for navigator construction and configuration

use thiserror::Error;

use crate::navigation::{NavigatorId, PageId};

/// Errors that can occur while building or wiring a navigator
#[derive(Error, Debug)]
pub enum NavigatorError {
    #[error("navigator needs at least one page")]
    NoPages,

    #[error("page id list has {ids} entries but there are {pages} pages")]
    PageIdMismatch { ids: usize, pages: usize },

    #[error("duplicate page id `{0}`")]
    DuplicatePageId(PageId),

    #[error("no built-in page ids for {0} pages")]
    NoDefaultIds(usize),

    #[error("unknown page id `{0}`")]
    UnknownPageId(String),

    #[error("invalid swipe config: {0}")]
    InvalidConfig(String),

    #[error("navigation handle is already owned by navigator {0}")]
    HandleOccupied(NavigatorId),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NavigatorError {
    /// Whether the error concerns the page id list and can be recovered
    /// by substituting the built-in ids
    pub fn is_page_id_problem(&self) -> bool {
        matches!(
            self,
            NavigatorError::PageIdMismatch { .. }
                | NavigatorError::DuplicatePageId(_)
                | NavigatorError::NoDefaultIds(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, NavigatorError>;
