//! Session state: the active page and the content viewport.

use crate::pages::PageId;

/// Holds the page currently on screen.
///
/// Starts on [`PageId::Home`]; the only way to change it is [`select`](Self::select).
#[derive(Clone, Debug, PartialEq)]
pub struct ViewSelector {
    active: PageId,
}

impl ViewSelector {
    pub fn new() -> Self {
        Self {
            active: PageId::Home,
        }
    }

    pub fn active(&self) -> PageId {
        self.active
    }

    pub fn select(&mut self, page: PageId) {
        self.active = page;
    }

    /// Whether the navigation item for `page` is drawn as active.
    pub fn is_active(&self, page: PageId) -> bool {
        self.active == page
    }
}

/// Everything the renderer reads.
pub struct SiteState {
    pub nav: ViewSelector,
    /// Content scroll offset in visual rows.
    pub scroll: u16,
    /// Largest useful scroll offset, recorded by the last draw.
    pub scroll_limit: u16,
}

impl SiteState {
    pub fn new() -> Self {
        Self {
            nav: ViewSelector::new(),
            scroll: 0,
            scroll_limit: 0,
        }
    }

    /// Show `page`. Returns `false` when it was already showing, in which
    /// case nothing changes (the scroll position is kept).
    pub fn open(&mut self, page: PageId) -> bool {
        if self.nav.is_active(page) {
            return false;
        }
        self.nav.select(page);
        self.scroll = 0;
        true
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let target = (self.scroll as i32 + delta).clamp(0, self.scroll_limit as i32);
        self.scroll = target as u16;
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    /// Record the content height of the last frame, pulling the offset back in
    /// range if the viewport grew.
    pub fn set_scroll_limit(&mut self, limit: u16) {
        self.scroll_limit = limit;
        self.scroll = self.scroll.min(limit);
    }
}
