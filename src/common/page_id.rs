//! Page identifier type.

use std::fmt;
use std::str::FromStr;

/// Identifies a page in a reference string.
///
/// Page ids are whatever small integers the user typed in; the simulator
/// never interprets them beyond equality.
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page_id = PageId::new(7);
/// assert_eq!(page_id.0, 7);
/// assert_eq!("7".parse::<PageId>().unwrap(), page_id);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub u32);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: u32) -> Self {
        PageId(id)
    }
}

impl From<u32> for PageId {
    fn from(id: u32) -> Self {
        PageId(id)
    }
}

impl FromStr for PageId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(PageId)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
