//! Page-window state for paginated collection reads.

use crate::opportunity::OpportunityRecord;

/// Fixed number of records requested per page.
pub const PAGE_SIZE: usize = 10;

/// Lifecycle of a page fetch.
///
/// `Loading` is re-entered whenever the page position changes, an
/// invalidation signal arrives, or the fetcher is first mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// The client-held, currently displayed subset of the opportunity collection.
///
/// Mutated only by the paginated fetcher and recreated wholesale on each
/// fetch completion; `items` are never partially merged. A failed fetch keeps
/// the last successfully loaded items so the view shows stale-but-valid data
/// instead of blanking.
#[derive(Debug, Clone, PartialEq)]
pub struct PageWindow {
    pub page_index: usize,
    pub items: Vec<OpportunityRecord>,
    pub phase: LoadPhase,
    pub error_message: Option<String>,
}

impl PageWindow {
    /// Returns an empty window at page 0, not yet loading.
    pub fn new() -> Self {
        Self {
            page_index: 0,
            items: Vec::new(),
            phase: LoadPhase::Idle,
            error_message: None,
        }
    }

    /// True while a fetch for this window is in flight.
    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    /// Request offset for the current page.
    pub fn offset(&self) -> usize {
        self.page_index * PAGE_SIZE
    }

    /// Heuristic "last page" signal: the service reports no total count, so a
    /// page holding fewer than [`PAGE_SIZE`] records is treated as the end.
    /// Views should disable the next-page affordance when this is true.
    pub fn is_last_page(&self) -> bool {
        self.phase == LoadPhase::Loaded && self.items.len() < PAGE_SIZE
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64) -> OpportunityRecord {
        OpportunityRecord {
            id,
            title: format!("opp-{id}"),
            market_description: "m".to_string(),
            tam_estimate: 1.0,
            growth_rate: 1.0,
            consumer_insight: "c".to_string(),
            hypothesis: "h".to_string(),
            user_id: 1,
        }
    }

    #[test]
    fn test_new_window_is_idle_at_page_zero() {
        let window = PageWindow::new();
        assert_eq!(window.page_index, 0);
        assert_eq!(window.phase, LoadPhase::Idle);
        assert!(!window.is_loading());
        assert!(window.items.is_empty());
    }

    #[test]
    fn test_offset_tracks_page_index() {
        let mut window = PageWindow::new();
        window.page_index = 3;
        assert_eq!(window.offset(), 30);
    }

    #[test]
    fn test_short_page_is_last_page() {
        let mut window = PageWindow::new();
        window.phase = LoadPhase::Loaded;
        window.items = (0..7).map(record).collect();
        assert!(window.is_last_page());
    }

    #[test]
    fn test_full_page_is_not_last_page() {
        let mut window = PageWindow::new();
        window.phase = LoadPhase::Loaded;
        window.items = (0..PAGE_SIZE as i64).map(record).collect();
        assert!(!window.is_last_page());
    }

    #[test]
    fn test_last_page_requires_a_completed_load() {
        let window = PageWindow::new();
        // Idle with zero items is not authoritative.
        assert!(!window.is_last_page());
    }
}
