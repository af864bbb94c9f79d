//! Portfolio page: the four-stage career ladder.

use ratzilla::ratatui::style::{Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};

use crate::content::Profile;
use crate::widgets::ClickableList;

use super::{heading, muted, push_cta, PageId, ACCENT};

pub fn body(profile: &Profile) -> ClickableList<'_> {
    let portfolio = &profile.portfolio;
    let mut cl = ClickableList::new();

    cl.push(Line::from(""));
    cl.push(Line::from(Span::styled(
        format!(" {}", portfolio.heading),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )));

    for stage in &portfolio.stages {
        cl.push(Line::from(""));
        cl.push(heading(stage.icon, &stage.title));
        cl.push(muted(&stage.description));
    }
    cl.push(Line::from(""));

    push_cta(&mut cl, "Далее: Образование", PageId::Education, true);
    cl
}
