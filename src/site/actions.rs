//! Semantic action IDs for the site's click targets.

use crate::pages::PageId;

// ── Navigation ───────────────────────────────────────────────
/// Open a page: `GO_PAGE_BASE + PageId::index()`. Shared by the navigation
/// bars and the in-page call-to-action buttons.
pub const GO_PAGE_BASE: u16 = 10; // +index 0..4

// ── Viewport ─────────────────────────────────────────────────
pub const SCROLL_UP: u16 = 30;
pub const SCROLL_DOWN: u16 = 31;
pub const SCROLL_TOP: u16 = 32;

pub fn go_to(page: PageId) -> u16 {
    GO_PAGE_BASE + page.index() as u16
}

/// Inverse of [`go_to`].
pub fn page_of(action_id: u16) -> Option<PageId> {
    action_id
        .checked_sub(GO_PAGE_BASE)
        .and_then(|i| PageId::from_index(i as usize))
}
