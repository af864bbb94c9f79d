//! Reusable clickable UI components.
//!
//! Each component renders its lines and registers the matching click targets,
//! so the visual output and the tap behaviour cannot drift apart.
//!
//! # Components
//!
//! - [`TabBar`] — Horizontal navigation row (rendering + click targets).
//! - [`ClickableList`] — Vertical list of lines with per-line click targets.

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::input::ClickState;

// ── TabBar ─────────────────────────────────────────────────────

/// A horizontal tab bar.
///
/// Renders tabs as one row of styled labels joined by a separator and
/// registers click targets at the positions the labels actually occupy
/// (Cyrillic labels and glyph prefixes have varying display widths).
///
/// # Example
/// ```ignore
/// TabBar::new(" │ ")
///     .tab("⌂ Главная", active_style, go_to(PageId::Home))
///     .tab("▤ Портфолио", idle_style, go_to(PageId::Portfolio))
///     .render(f, area, &mut cs);
/// ```
pub struct TabBar<'a> {
    tabs: Vec<(String, Style, u16)>,
    separator: &'a str,
    block: Option<Block<'a>>,
}

impl<'a> TabBar<'a> {
    pub fn new(separator: &'a str) -> Self {
        Self {
            tabs: Vec::new(),
            separator,
            block: None,
        }
    }

    /// Add a tab with its label, style, and action ID.
    pub fn tab(mut self, label: impl Into<String>, style: Style, action_id: u16) -> Self {
        self.tabs.push((label.into(), style, action_id));
        self
    }

    /// Wrap the tab bar in a [`Block`]. Click targets follow `Block::inner()`.
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Columns the tabs and separators occupy, borders excluded.
    pub fn width(&self) -> u16 {
        let sep_width = Line::from(self.separator).width() as u16;
        let gaps = (self.tabs.len() as u16).saturating_sub(1);
        self.tab_widths()
            .iter()
            .map(|&(w, _)| w)
            .sum::<u16>()
            + sep_width * gaps
    }

    /// Display widths of the padded labels, paired with their action IDs.
    fn tab_widths(&self) -> Vec<(u16, u16)> {
        self.tabs
            .iter()
            .map(|(label, _, action_id)| {
                let padded = format!(" {} ", label);
                (Line::from(padded.as_str()).width() as u16, *action_id)
            })
            .collect()
    }

    /// Render the tab bar and register click targets.
    pub fn render(self, f: &mut Frame, area: Rect, cs: &mut ClickState) {
        let tab_widths = self.tab_widths();
        let sep_width = Line::from(self.separator).width() as u16;

        let mut spans: Vec<Span> = Vec::new();
        for (i, (label, style, _)) in self.tabs.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(
                    self.separator,
                    Style::default().fg(Color::DarkGray),
                ));
            }
            spans.push(Span::styled(format!(" {} ", label), *style));
        }

        let inner = match &self.block {
            Some(block) => block.inner(area),
            None => area,
        };

        let line = Line::from(spans);
        let paragraph = match self.block {
            Some(block) => Paragraph::new(line).block(block),
            None => Paragraph::new(line),
        };
        f.render_widget(paragraph, area);

        // Inner x/width for horizontal accuracy, outer y/height for tap tolerance
        cs.register_tab_targets(
            &tab_widths,
            sep_width,
            inner.x,
            area.y,
            inner.width,
            area.height.max(1),
        );
    }
}

// ── ClickableList ──────────────────────────────────────────────

/// A builder that pairs rendered [`Line`]s with click actions.
///
/// Lines are annotated as clickable when they are added; a single call to
/// [`register_targets`](ClickableList::register_targets) after rendering puts
/// every target on the row its line actually landed on.
///
/// # Example
/// ```ignore
/// let mut cl = ClickableList::new();
/// cl.push(Line::from("Моя карьерная лестница"));
/// cl.push_clickable(Line::from("Далее: Образование"), go_to(PageId::Education));
/// cl.register_targets(area, &mut cs, 1, 1, scroll, inner_width);
/// ```
pub struct ClickableList<'a> {
    lines: Vec<Line<'a>>,
    /// `(line_index, action_id)` pairs; `line_index` indexes `lines`.
    actions: Vec<(u16, u16)>,
}

impl<'a> ClickableList<'a> {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Add a non-clickable line.
    pub fn push(&mut self, line: Line<'a>) {
        self.lines.push(line);
    }

    /// Add a clickable line bound to a semantic action ID.
    pub fn push_clickable(&mut self, line: Line<'a>, action_id: u16) {
        let idx = self.lines.len() as u16;
        self.actions.push((idx, action_id));
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[Line<'a>] {
        &self.lines
    }

    /// `(line_index, action_id)` for every clickable line, in insertion order.
    #[cfg(test)]
    pub fn targets(&self) -> &[(u16, u16)] {
        &self.actions
    }

    /// Consume the builder, returning the lines for rendering.
    pub fn into_lines(self) -> Vec<Line<'a>> {
        self.lines
    }

    /// Register click targets for all clickable lines.
    ///
    /// * `area` — the widget area (including borders).
    /// * `top_offset` / `bottom_offset` — rows taken by borders above / below content.
    /// * `scroll` — vertical scroll offset in visual rows.
    /// * `inner_width` — content width when the paragraph wraps; `0` means no
    ///   wrapping (one logical line per row).
    pub fn register_targets(
        &self,
        area: Rect,
        cs: &mut ClickState,
        top_offset: u16,
        bottom_offset: u16,
        scroll: u16,
        inner_width: u16,
    ) {
        let content_y = area.y + top_offset;
        let content_end = area.y + area.height.saturating_sub(bottom_offset);

        if inner_width == 0 {
            for &(line_idx, action_id) in &self.actions {
                if line_idx < scroll {
                    continue;
                }
                let row = content_y + (line_idx - scroll);
                if row >= content_end {
                    continue;
                }
                cs.add_row_target(area, row, action_id);
            }
            return;
        }

        let mut visual_starts: Vec<u16> = Vec::with_capacity(self.lines.len());
        let mut visual_heights: Vec<u16> = Vec::with_capacity(self.lines.len());
        let mut cumulative: u16 = 0;
        for line in &self.lines {
            visual_starts.push(cumulative);
            let h = visual_height(line, inner_width);
            visual_heights.push(h);
            cumulative = cumulative.saturating_add(h);
        }

        for &(line_idx, action_id) in &self.actions {
            let li = line_idx as usize;
            if li >= self.lines.len() {
                continue;
            }
            let vstart = visual_starts[li];

            // Every visual row of a wrapped clickable line is tappable.
            for r in 0..visual_heights[li] {
                let vr = vstart + r;
                if vr < scroll {
                    continue;
                }
                let screen_row = content_y + (vr - scroll);
                if screen_row >= content_end {
                    break;
                }
                cs.add_row_target(area, screen_row, action_id);
            }
        }
    }
}

/// Rows a single line occupies once word-wrapped to `width`.
fn visual_height(line: &Line, width: u16) -> u16 {
    let rows = Paragraph::new(line.clone())
        .wrap(Wrap { trim: false })
        .line_count(width);
    (rows as u16).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ClickState;

    // ── TabBar tests ───────────────────────────────────────────

    #[test]
    fn tab_widths_count_padding_and_cyrillic() {
        let bar = TabBar::new(" │ ")
            .tab("Главная", Style::default(), 10)
            .tab("⌂ Резюме", Style::default(), 13);
        // " Главная " = 9 cols, " ⌂ Резюме " = 10 cols
        assert_eq!(bar.tab_widths(), vec![(9, 10), (10, 13)]);
    }

    #[test]
    fn tab_bar_width_includes_separators() {
        let bar = TabBar::new(" │ ")
            .tab("Главная", Style::default(), 10)
            .tab("⌂ Резюме", Style::default(), 13);
        assert_eq!(bar.width(), 9 + 3 + 10);
        assert_eq!(TabBar::new(" ").width(), 0);
    }

    #[test]
    fn tab_bar_targets_cover_each_tab() {
        let bar = TabBar::new(" │ ")
            .tab("Главная", Style::default(), 10)
            .tab("Портфолио", Style::default(), 11);
        let widths = bar.tab_widths();
        let mut cs = ClickState::new();
        cs.register_tab_targets(&widths, 3, 0, 1, 80, 1);

        assert_eq!(cs.targets.len(), 2);
        assert_eq!(cs.hit_test(2, 1), Some(10));
        assert_eq!(cs.hit_test(15, 1), Some(11));
        assert_eq!(cs.hit_test(79, 1), Some(11));
    }

    // ── ClickableList tests ────────────────────────────────────

    #[test]
    fn clickable_list_basic() {
        let mut cl = ClickableList::new();
        cl.push(Line::from("header"));
        cl.push_clickable(Line::from("item 0"), 10);
        cl.push_clickable(Line::from("item 1"), 11);
        cl.push(Line::from("footer"));

        assert_eq!(cl.lines().len(), 4);
        assert_eq!(cl.targets(), &[(1, 10), (2, 11)]);

        // Borders::ALL → top_offset=1, bottom_offset=1
        let area = Rect::new(0, 5, 80, 10);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 1, 1, 0, 0);

        assert_eq!(cs.targets.len(), 2);
        assert_eq!(cs.hit_test(10, 7), Some(10));
        assert_eq!(cs.hit_test(10, 8), Some(11));
        assert_eq!(cs.hit_test(10, 6), None);
        assert_eq!(cs.hit_test(10, 9), None);
    }

    #[test]
    fn clickable_list_with_scroll() {
        let mut cl = ClickableList::new();
        for i in 0..4 {
            cl.push_clickable(Line::from(format!("item {}", i)), 100 + i as u16);
        }

        let area = Rect::new(0, 10, 80, 5);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 0, 1, 2, 0);

        assert_eq!(cs.targets.len(), 2);
        assert_eq!(cs.hit_test(10, 10), Some(102));
        assert_eq!(cs.hit_test(10, 11), Some(103));
        assert_eq!(cs.hit_test(10, 9), None);
    }

    #[test]
    fn clickable_list_clipped_by_area() {
        let mut cl = ClickableList::new();
        for i in 0..20 {
            cl.push_clickable(Line::from(format!("item {}", i)), 50 + i as u16);
        }

        // height=5 with top and bottom border → 3 content rows
        let area = Rect::new(0, 0, 80, 5);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 1, 1, 0, 0);

        assert_eq!(cs.targets.len(), 3);
        assert_eq!(cs.hit_test(10, 1), Some(50));
        assert_eq!(cs.hit_test(10, 3), Some(52));
        assert_eq!(cs.hit_test(10, 4), None);
    }

    #[test]
    fn clickable_list_empty() {
        let cl: ClickableList = ClickableList::new();
        let mut cs = ClickState::new();
        cl.register_targets(Rect::new(0, 0, 80, 10), &mut cs, 1, 1, 0, 0);
        assert!(cs.targets.is_empty());
        assert!(cl.into_lines().is_empty());
    }

    #[test]
    fn wrapped_line_pushes_later_targets_down() {
        let mut cl = ClickableList::new();
        // A single 20-char word in a 10-wide area breaks onto 2 rows
        cl.push(Line::from("12345678901234567890"));
        cl.push_clickable(Line::from("item0"), 10);

        let area = Rect::new(0, 0, 12, 10);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 0, 0, 0, 10);

        assert_eq!(cs.hit_test(5, 2), Some(10));
        assert_eq!(cs.hit_test(5, 0), None);
        assert_eq!(cs.hit_test(5, 1), None);
    }

    #[test]
    fn wrapped_clickable_line_covers_all_rows() {
        let mut cl = ClickableList::new();
        cl.push_clickable(Line::from("123456789012345678901234567890"), 42);

        let area = Rect::new(0, 0, 12, 10);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 0, 0, 0, 10);

        assert_eq!(cs.hit_test(5, 0), Some(42));
        assert_eq!(cs.hit_test(5, 1), Some(42));
        assert_eq!(cs.hit_test(5, 2), Some(42));
        assert_eq!(cs.hit_test(5, 3), None);
    }

    #[test]
    fn wrapped_targets_respect_scroll() {
        let mut cl = ClickableList::new();
        cl.push_clickable(Line::from("12345678901234567890"), 10);
        cl.push_clickable(Line::from("item1"), 11);

        let area = Rect::new(0, 0, 12, 10);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 0, 0, 1, 10);

        assert_eq!(cs.hit_test(5, 0), Some(10));
        assert_eq!(cs.hit_test(5, 1), Some(11));
    }

    #[test]
    fn empty_line_still_takes_a_row() {
        assert_eq!(visual_height(&Line::from(""), 10), 1);
        assert_eq!(visual_height(&Line::from("short"), 10), 1);
    }
}
