//! Home page: name, role, key facts, portrait, and entry points.

use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};

use crate::content::Profile;
use crate::widgets::ClickableList;

use super::{fact, muted, push_cta, Icon, PageId, ACCENT, MUTED};

pub fn body(profile: &Profile) -> ClickableList<'_> {
    let home = &profile.home;
    let mut cl = ClickableList::new();

    cl.push(Line::from(""));
    cl.push(Line::from(Span::styled(
        format!(" {}", profile.name),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    cl.push(Line::from(Span::styled(
        format!(" {}", home.role),
        Style::default().fg(MUTED),
    )));
    cl.push(Line::from(""));

    for f in &home.facts {
        cl.push(fact(f.icon, &f.text));
    }
    cl.push(Line::from(""));

    cl.push(Line::from(vec![
        Span::styled(
            format!(" {} ", Icon::UserCircle.glyph()),
            Style::default().fg(ACCENT),
        ),
        Span::styled(home.portrait.alt.as_str(), Style::default().fg(Color::White)),
    ]));
    cl.push(muted(&home.portrait.url));
    cl.push(Line::from(""));

    push_cta(&mut cl, "Портфолио", PageId::Portfolio, true);
    push_cta(&mut cl, "Резюме", PageId::Resume, false);

    cl
}
