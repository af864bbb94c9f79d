//! The portfolio site: session state, input dispatch, and drawing.

pub mod actions;
pub mod render;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::style::Color;
use ratzilla::ratatui::Frame;
use tachyonfx::{fx, Duration, Effect, Interpolation};

use crate::content::Profile;
use crate::input::{ClickState, InputEvent};
use crate::pages::PageId;
use crate::time::FrameClock;

use actions::*;
use state::SiteState;

/// Length of the fade-in played when a page becomes active.
const FADE_IN_MS: u32 = 350;

/// Rows scrolled per tap on a scroll zone or footer button.
const TAP_SCROLL_ROWS: i32 = 3;

fn fade_in() -> Effect {
    fx::fade_from_fg(Color::Black, (FADE_IN_MS, Interpolation::QuadOut))
}

pub struct SiteApp {
    pub state: SiteState,
    profile: Profile,
    /// Fade-in of the page just opened, dropped once finished.
    transition: Option<Effect>,
    clock: FrameClock,
}

impl SiteApp {
    pub fn new(profile: Profile) -> Self {
        Self {
            state: SiteState::new(),
            profile,
            transition: Some(fade_in()),
            clock: FrameClock::new(),
        }
    }

    pub fn active_page(&self) -> PageId {
        self.state.nav.active()
    }

    /// Switch to `page`, replaying the fade-in when it actually changes.
    pub fn navigate(&mut self, page: PageId) {
        if self.state.open(page) {
            self.transition = Some(fade_in());
        }
    }

    /// Handle an input event. Returns true if the event was consumed.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key(c) => self.handle_key(*c),
            InputEvent::Click(id) => self.handle_click(*id),
        }
    }

    fn handle_key(&mut self, key: char) -> bool {
        let active = self.active_page();
        let target = match key {
            '1'..='5' => PageId::from_index(key as usize - '1' as usize),
            'h' => active.prev(),
            'l' => active.next(),
            '\n' => active.next_step(),
            'j' => {
                self.state.scroll_by(1);
                return true;
            }
            'k' => {
                self.state.scroll_by(-1);
                return true;
            }
            'g' => {
                self.state.scroll_to_top();
                return true;
            }
            _ => return false,
        };
        match target {
            Some(page) => {
                self.navigate(page);
                true
            }
            None => false,
        }
    }

    fn handle_click(&mut self, action_id: u16) -> bool {
        if let Some(page) = page_of(action_id) {
            self.navigate(page);
            return true;
        }
        match action_id {
            SCROLL_UP => {
                self.state.scroll_by(-TAP_SCROLL_ROWS);
                true
            }
            SCROLL_DOWN => {
                self.state.scroll_by(TAP_SCROLL_ROWS);
                true
            }
            SCROLL_TOP => {
                self.state.scroll_to_top();
                true
            }
            _ => false,
        }
    }

    /// Draw one frame. `now_ms` is a wall-clock timestamp used to advance the
    /// fade-in.
    pub fn draw(&mut self, f: &mut Frame, now_ms: f64, click_state: &Rc<RefCell<ClickState>>) {
        let area = f.area();
        {
            let mut cs = click_state.borrow_mut();
            cs.terminal_cols = area.width;
            cs.terminal_rows = area.height;
            cs.clear_targets();
        }

        let viewport = render::render(&self.state, &self.profile, f, area, click_state);
        self.state.set_scroll_limit(viewport.scroll_limit);

        let elapsed = self.clock.update(now_ms);
        let finished = match self.transition.as_mut() {
            Some(effect) => {
                effect.process(Duration::from_millis(elapsed), f.buffer_mut(), viewport.content);
                effect.done()
            }
            None => false,
        };
        if finished {
            self.transition = None;
        }
    }
}
