//! Achievements page: certificate cards and the closing note.

use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};

use crate::content::Profile;
use crate::widgets::ClickableList;

use super::{heading, muted, rule, Icon, ACCENT};

pub fn body(profile: &Profile) -> ClickableList<'_> {
    let ach = &profile.achievements;
    let mut cl = ClickableList::new();

    cl.push(Line::from(""));
    for (i, entry) in ach.items.iter().enumerate() {
        if i > 0 {
            cl.push(rule());
        }
        cl.push(heading(Icon::Award, &entry.title));
        cl.push(muted(&entry.description));
        cl.push(Line::from(vec![
            Span::raw("     "),
            Span::styled(
                format!("{} ", Icon::FileText.glyph()),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                entry.image.as_str(),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]));
    }

    cl.push(Line::from(""));
    cl.push(Line::from(vec![
        Span::styled(
            format!(" {} ", Icon::Rocket.glyph()),
            Style::default().fg(ACCENT),
        ),
        Span::styled(
            ach.closing.title.as_str(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
    ]));
    cl.push(muted(&ach.closing.text));
    cl
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::plain_text;

    #[test]
    fn four_entries_in_input_order() {
        let p = Profile::embedded().unwrap();
        let cl = body(&p);
        let text = plain_text(&cl);
        assert_eq!(text.matches(Icon::Award.glyph()).count(), 4);

        let mut last = 0;
        for entry in &p.achievements.items {
            for field in [&entry.title, &entry.description, &entry.image] {
                assert!(!field.is_empty());
                assert!(text.contains(field.as_str()));
            }
            let pos = text.find(entry.title.as_str()).unwrap();
            assert!(pos >= last);
            last = pos;
        }
    }

    #[test]
    fn has_no_call_to_action() {
        let p = Profile::embedded().unwrap();
        assert!(body(&p).targets().is_empty());
    }
}
