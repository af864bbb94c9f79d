//! Site shell rendering (read-only from state): header navigation, content
//! viewport, and the footer or mobile bottom bar.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::content::Profile;
use crate::input::{is_narrow_layout, ClickState};
use crate::pages::{self, Icon, ACCENT, NAVIGATION};
use crate::widgets::TabBar;

use super::actions::*;
use super::state::SiteState;

/// Geometry of the frame that the app needs after drawing.
pub struct Viewport {
    /// Content block area; the fade-in runs here.
    pub content: Rect,
    /// Largest scroll offset that still fills the content block.
    pub scroll_limit: u16,
}

pub fn render(
    state: &SiteState,
    profile: &Profile,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) -> Viewport {
    let is_narrow = is_narrow_layout(area.width);
    let bottom_height = if is_narrow { 3 } else { 1 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Header
            Constraint::Min(5),                // Content
            Constraint::Length(bottom_height), // Footer / bottom navigation
        ])
        .split(area);

    if is_narrow {
        render_compact_header(profile, f, chunks[0]);
    } else {
        render_header(state, profile, f, chunks[0], click_state);
    }
    let viewport = render_content(state, profile, f, chunks[1], is_narrow, click_state);
    if is_narrow {
        render_bottom_nav(state, f, chunks[2], click_state);
    } else {
        render_footer(state, viewport.scroll_limit, f, chunks[2], click_state);
    }
    viewport
}

fn nav_style(active: bool) -> Style {
    if active {
        Style::default()
            .fg(Color::Black)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}

fn owner_title(profile: &Profile) -> Span<'static> {
    Span::styled(
        format!(" {} {} ", Icon::Building2.glyph(), profile.name),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )
}

// ── Header ─────────────────────────────────────────────────────────────

fn render_header(
    state: &SiteState,
    profile: &Profile,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let bar = nav_tabs(state).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(owner_title(profile)),
    );
    let mut cs = click_state.borrow_mut();
    bar.render(f, area, &mut cs);
}

fn nav_tabs(state: &SiteState) -> TabBar<'static> {
    NAVIGATION.iter().fold(TabBar::new(" "), |bar, item| {
        bar.tab(
            format!("{} {}", item.icon.glyph(), item.label),
            nav_style(state.nav.is_active(item.page)),
            go_to(item.page),
        )
    })
}

fn render_compact_header(profile: &Profile, f: &mut Frame, area: Rect) {
    let widget = Paragraph::new(Line::from(owner_title(profile)))
        .block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .alignment(Alignment::Center);
    f.render_widget(widget, area);
}

// ── Content ────────────────────────────────────────────────────────────

fn render_content(
    state: &SiteState,
    profile: &Profile,
    f: &mut Frame,
    area: Rect,
    is_narrow: bool,
    click_state: &Rc<RefCell<ClickState>>,
) -> Viewport {
    let page = state.nav.active();
    let item = page.nav_item();
    let borders = if is_narrow {
        Borders::TOP | Borders::BOTTOM
    } else {
        Borders::ALL
    };
    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(ACCENT))
        .title(Span::styled(
            format!(" {} {} ", page.heading_icon().glyph(), item.label),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);

    let cl = pages::body(page, profile);
    let total_rows = Paragraph::new(cl.lines().to_vec())
        .wrap(Wrap { trim: false })
        .line_count(inner.width);
    let scroll_limit = (total_rows as u16).saturating_sub(inner.height);
    let scroll = state.scroll.min(scroll_limit);

    {
        let mut cs = click_state.borrow_mut();
        register_scroll_zones(&mut cs, inner);
        // Registered after the zones so call-to-action rows win
        cl.register_targets(area, &mut cs, 1, 1, scroll, inner.width);
    }

    let widget = Paragraph::new(cl.into_lines())
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(widget, area);

    Viewport {
        content: area,
        scroll_limit,
    }
}

/// Tapping the upper half of the content scrolls up, the lower half down.
fn register_scroll_zones(cs: &mut ClickState, inner: Rect) {
    if inner.height < 2 {
        return;
    }
    let upper = inner.height / 2;
    cs.add_click_target(Rect::new(inner.x, inner.y, inner.width, upper), SCROLL_UP);
    cs.add_click_target(
        Rect::new(inner.x, inner.y + upper, inner.width, inner.height - upper),
        SCROLL_DOWN,
    );
}

// ── Footer (wide) ──────────────────────────────────────────────────────

fn render_footer(
    state: &SiteState,
    scroll_limit: u16,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let enabled = Style::default().fg(ACCENT);
    let disabled = Style::default().fg(Color::DarkGray);
    let at_top = state.scroll == 0;
    let at_bottom = state.scroll >= scroll_limit;
    let buttons = TabBar::new(" ")
        .tab("▲ Вверх", if at_top { disabled } else { enabled }, SCROLL_UP)
        .tab("▼ Вниз", if at_bottom { disabled } else { enabled }, SCROLL_DOWN)
        .tab("⇞ В начало", if at_top { disabled } else { enabled }, SCROLL_TOP);

    let hint = footer_hint(area.width.saturating_sub(buttons.width()));
    let hint_width = Line::from(hint).width() as u16;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(hint_width)])
        .split(area);

    {
        let mut cs = click_state.borrow_mut();
        buttons.render(f, chunks[0], &mut cs);
    }
    if hint.is_empty() {
        return;
    }

    let widget = Paragraph::new(Line::from(Span::styled(
        hint,
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Right);
    f.render_widget(widget, chunks[1]);
}

const FULL_HINT: &str = " 1-5 разделы · ←→ соседние · Enter далее · j/k прокрутка ";
const SHORT_HINT: &str = " 1-5 · ←→ · Enter · j/k ";

/// Longest key hint that fits in `room` columns; empty when none does.
fn footer_hint(room: u16) -> &'static str {
    [FULL_HINT, SHORT_HINT]
        .into_iter()
        .find(|h| Line::from(*h).width() as u16 <= room)
        .unwrap_or("")
}

// ── Bottom navigation (narrow) ─────────────────────────────────────────

fn render_bottom_nav(
    state: &SiteState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, NAVIGATION.len() as u32); 5])
        .split(inner);

    let mut cs = click_state.borrow_mut();
    for (item, cell) in NAVIGATION.iter().zip(cells.iter()) {
        let style = if state.nav.is_active(item.page) {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let lines = vec![
            Line::from(Span::styled(item.icon.glyph(), style)),
            Line::from(Span::styled(fit_label(item.label, cell.width as usize), style)),
        ];
        f.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            *cell,
        );
        // Whole column including the border row is tappable
        cs.add_click_target(
            Rect::new(cell.x, area.y, cell.width, area.height),
            go_to(item.page),
        );
    }
}

/// Truncate `label` to `width` columns, marking the cut with `…`.
pub(crate) fn fit_label(label: &str, width: usize) -> String {
    let len = label.chars().count();
    if len <= width {
        return label.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = label.chars().take(width - 1).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_label_keeps_short_labels() {
        assert_eq!(fit_label("Резюме", 8), "Резюме");
        assert_eq!(fit_label("Главная", 7), "Главная");
    }

    #[test]
    fn fit_label_truncates_with_ellipsis() {
        assert_eq!(fit_label("Портфолио", 8), "Портфол…");
        assert_eq!(fit_label("Образование", 4), "Обр…");
        assert_eq!(fit_label("Достижения", 1), "…");
        assert_eq!(fit_label("Достижения", 0), "");
    }

    #[test]
    fn scroll_zones_split_content() {
        let mut cs = ClickState::new();
        register_scroll_zones(&mut cs, Rect::new(1, 4, 50, 10));
        assert_eq!(cs.hit_test(10, 4), Some(SCROLL_UP));
        assert_eq!(cs.hit_test(10, 8), Some(SCROLL_UP));
        assert_eq!(cs.hit_test(10, 9), Some(SCROLL_DOWN));
        assert_eq!(cs.hit_test(10, 13), Some(SCROLL_DOWN));
        assert_eq!(cs.hit_test(10, 14), None);
    }

    #[test]
    fn tiny_content_has_no_scroll_zones() {
        let mut cs = ClickState::new();
        register_scroll_zones(&mut cs, Rect::new(0, 0, 50, 1));
        assert!(cs.targets.is_empty());
    }

    #[test]
    fn header_tabs_fit_the_smallest_wide_layout() {
        use crate::input::NARROW_BREAKPOINT;
        let width = nav_tabs(&SiteState::new()).width();
        assert_eq!(width, 67);
        // Two border columns around the tab row
        assert!(width + 2 <= NARROW_BREAKPOINT);
    }

    #[test]
    fn footer_hint_shrinks_to_fit() {
        assert_eq!(footer_hint(100), FULL_HINT);
        assert_eq!(footer_hint(39), SHORT_HINT);
        assert_eq!(footer_hint(10), "");
    }

    #[test]
    fn nav_style_marks_active() {
        assert_eq!(nav_style(true).bg, Some(ACCENT));
        assert_eq!(nav_style(false).bg, None);
    }
}
