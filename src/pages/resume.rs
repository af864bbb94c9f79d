//! Resume page.

use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};

use crate::content::Profile;
use crate::widgets::ClickableList;

use super::{heading, muted, push_cta, rule, Icon, PageId, ACCENT};

pub fn body(profile: &Profile) -> ClickableList<'_> {
    let resume = &profile.resume;
    let mut cl = ClickableList::new();

    cl.push(Line::from(""));
    cl.push(Line::from(vec![
        Span::styled(
            format!(" {} ", Icon::UserCircle.glyph()),
            Style::default().fg(ACCENT),
        ),
        Span::styled(
            profile.name.as_str(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    cl.push(Line::from(Span::styled(
        format!("   {}", resume.role),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )));
    cl.push(Line::from(""));

    cl.push(heading(Icon::MapPin, &resume.contacts.caption));
    push_values(&mut cl, &resume.contacts.values);
    cl.push(heading(Icon::Calendar, &resume.study_period.caption));
    push_values(&mut cl, &resume.study_period.values);

    cl.push(rule());
    cl.push(heading(Icon::Target, &resume.goals_heading));
    cl.push(muted(&resume.goals));

    cl.push(rule());
    cl.push(heading(Icon::BookOpen, &resume.skills_heading));
    for skill in &resume.skills {
        cl.push(Line::from(vec![
            Span::styled("   • ", Style::default().fg(ACCENT)),
            Span::styled(skill.as_str(), Style::default().fg(Color::White)),
        ]));
    }

    cl.push(rule());
    cl.push(heading(Icon::Sparkles, &resume.qualities_heading));
    cl.push(quality_chips(&resume.qualities));
    cl.push(Line::from(""));

    push_cta(&mut cl, "Далее: Достижения", PageId::Achievements, true);
    cl
}

fn push_values<'a>(cl: &mut ClickableList<'a>, values: &'a [String]) {
    for v in values {
        cl.push(muted(v));
    }
}

/// Qualities rendered as a wrapping row of tinted chips.
fn quality_chips(qualities: &[String]) -> Line<'_> {
    let chip = Style::default()
        .fg(ACCENT)
        .bg(Color::Rgb(20, 40, 48))
        .add_modifier(Modifier::BOLD);
    let mut spans = vec![Span::raw("   ")];
    for (i, q) in qualities.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!(" {} ", q), chip));
    }
    Line::from(spans)
}
