use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{NavigatorError, Result};

/// Identifier of a page slot in the swipe strip
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PageId {
    /// Tools and history
    Tools,
    /// Chat, the home page
    Chat,
    /// Discover feed
    Discover,
    /// Prediction markets
    Predictions,
}

impl PageId {
    /// Built-in page order
    pub const DEFAULT_ORDER: [PageId; 4] = [
        PageId::Tools,
        PageId::Chat,
        PageId::Discover,
        PageId::Predictions,
    ];

    /// The page shown when nothing else is known
    pub const HOME: PageId = PageId::Chat;

    pub fn as_str(&self) -> &'static str {
        match self {
            PageId::Tools => "tools",
            PageId::Chat => "chat",
            PageId::Discover => "discover",
            PageId::Predictions => "predictions",
        }
    }

    /// Human readable title
    pub fn title(&self) -> &'static str {
        match self {
            PageId::Tools => "Tools",
            PageId::Chat => "Chat",
            PageId::Discover => "Discover",
            PageId::Predictions => "Predictions",
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageId {
    type Err = NavigatorError;

    fn from_str(s: &str) -> Result<Self> {
        PageId::DEFAULT_ORDER
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| NavigatorError::UnknownPageId(s.to_string()))
    }
}

/// Ordered, validated set of pages
#[derive(Debug, Clone, PartialEq)]
pub struct PageSet {
    count: usize,
    ids: Vec<PageId>,
}

impl PageSet {
    /// Build a page set, rejecting id lists that don't line up with the pages
    pub fn new(count: usize, ids: Option<Vec<PageId>>) -> Result<Self> {
        if count == 0 {
            return Err(NavigatorError::NoPages);
        }

        let ids = match ids {
            Some(ids) => {
                if ids.len() != count {
                    return Err(NavigatorError::PageIdMismatch {
                        ids: ids.len(),
                        pages: count,
                    });
                }
                for (i, id) in ids.iter().enumerate() {
                    if ids[..i].contains(id) {
                        return Err(NavigatorError::DuplicatePageId(*id));
                    }
                }
                ids
            }
            None => {
                if count > PageId::DEFAULT_ORDER.len() {
                    return Err(NavigatorError::NoDefaultIds(count));
                }
                PageId::DEFAULT_ORDER[..count].to_vec()
            }
        };

        Ok(Self { count, ids })
    }

    /// Build a page set, substituting the full built-in id list when the
    /// supplied ids are unusable.
    ///
    /// The id list may then be longer or shorter than the page count;
    /// [`PageSet::id_at`] falls back to [`PageId::HOME`] for uncovered slots.
    pub fn with_fallback(count: usize, ids: Option<Vec<PageId>>) -> Result<Self> {
        match Self::new(count, ids) {
            Ok(set) => Ok(set),
            Err(err) if err.is_page_id_problem() => {
                warn!("{}; falling back to built-in page ids", err);
                Ok(Self {
                    count,
                    ids: PageId::DEFAULT_ORDER.to_vec(),
                })
            }
            Err(err) => Err(err),
        }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn ids(&self) -> &[PageId] {
        &self.ids
    }

    pub fn id_at(&self, index: usize) -> PageId {
        self.ids.get(index).copied().unwrap_or(PageId::HOME)
    }

    pub fn index_of(&self, id: PageId) -> Option<usize> {
        self.ids.iter().position(|p| *p == id).filter(|i| *i < self.count)
    }

    /// Clamp an arbitrary index into `[0, len - 1]`
    pub fn clamp(&self, index: usize) -> usize {
        index.min(self.count - 1)
    }
}
