//! Education page: specialty, study terms, disciplines, and the
//! "Профессионалитет" programme.

use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};

use crate::content::{Captioned, Profile};
use crate::widgets::ClickableList;

use super::{fact, heading, muted, push_cta, rule, Icon, PageId, ACCENT, MUTED};

pub fn body(profile: &Profile) -> ClickableList<'_> {
    let edu = &profile.education;
    let mut cl = ClickableList::new();

    cl.push(Line::from(""));
    cl.push(heading(Icon::GraduationCap, &edu.level));
    cl.push(Line::from(Span::styled(
        format!("   {}", edu.specialty),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )));
    cl.push(Line::from(""));
    push_captioned(&mut cl, &edu.duration);
    push_captioned(&mut cl, &edu.forms);

    cl.push(rule());
    cl.push(heading(Icon::BookOpen, &edu.disciplines_heading));
    for d in &edu.disciplines {
        cl.push(fact(Icon::CheckCircle2, d));
    }

    let prog = &edu.programme;
    cl.push(rule());
    cl.push(heading(Icon::Award, &prog.title));
    cl.push(muted(&prog.intro));
    for adv in &prog.advantages {
        cl.push(fact(adv.icon, &adv.text));
    }
    cl.push(Line::from(""));
    cl.push(Line::from(vec![
        Span::raw("     "),
        Span::styled(
            prog.graduates_lead.as_str(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(prog.graduates.as_str(), Style::default().fg(Color::White)),
    ]));
    cl.push(Line::from(""));

    push_cta(&mut cl, "Далее: Резюме", PageId::Resume, true);
    cl
}

/// Muted caption followed by its values, one per line.
pub(crate) fn push_captioned<'a>(cl: &mut ClickableList<'a>, block: &'a Captioned) {
    cl.push(Line::from(Span::styled(
        format!("   {}", block.caption),
        Style::default().fg(MUTED),
    )));
    for v in &block.values {
        cl.push(Line::from(Span::styled(
            format!("     {}", v),
            Style::default().fg(Color::White),
        )));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::plain_text;

    #[test]
    fn all_disciplines_listed_in_order() {
        let p = Profile::embedded().unwrap();
        let text = plain_text(&body(&p));
        let mut last = 0;
        for d in &p.education.disciplines {
            let pos = text[last..]
                .find(d.as_str())
                .map(|i| i + last)
                .unwrap_or_else(|| panic!("missing discipline {}", d));
            last = pos + d.len();
        }
        assert_eq!(text.matches(Icon::CheckCircle2.glyph()).count(), 12);
    }

    #[test]
    fn shows_study_terms_and_programme() {
        let p = Profile::embedded().unwrap();
        let text = plain_text(&body(&p));
        assert!(text.contains("На базе основного общего: 3 года 6 месяцев"));
        assert!(text.contains("Очная, заочная"));
        assert!(text.contains("Программа «Профессионалитет»"));
        assert!(text.contains("Гарантированное трудоустройство"));
        assert!(text.contains("Выпускники специальности"));
    }
}
