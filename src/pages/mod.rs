//! Page catalogue: the closed set of views, the navigation table, and the
//! dispatch from a page to its content.

pub mod achievements;
pub mod education;
pub mod home;
pub mod portfolio;
pub mod resume;

use std::fmt;

use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use serde::Deserialize;

use crate::content::Profile;
use crate::site::actions::go_to;
use crate::widgets::ClickableList;

/// One of the five views of the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageId {
    Home,
    Portfolio,
    Education,
    Resume,
    Achievements,
}

impl PageId {
    /// All pages in navigation order.
    pub const ALL: [PageId; 5] = [
        PageId::Home,
        PageId::Portfolio,
        PageId::Education,
        PageId::Resume,
        PageId::Achievements,
    ];

    pub fn index(self) -> usize {
        match self {
            PageId::Home => 0,
            PageId::Portfolio => 1,
            PageId::Education => 2,
            PageId::Resume => 3,
            PageId::Achievements => 4,
        }
    }

    pub fn from_index(idx: usize) -> Option<PageId> {
        Self::ALL.get(idx).copied()
    }

    pub fn slug(self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::Portfolio => "portfolio",
            PageId::Education => "education",
            PageId::Resume => "resume",
            PageId::Achievements => "achievements",
        }
    }

    /// Previous page in navigation order, `None` on the first page.
    pub fn prev(self) -> Option<PageId> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    /// Next page in navigation order, `None` on the last page.
    pub fn next(self) -> Option<PageId> {
        Self::from_index(self.index() + 1)
    }

    /// Target of the "Далее" button at the bottom of the page.
    pub fn next_step(self) -> Option<PageId> {
        match self {
            PageId::Home => Some(PageId::Portfolio),
            PageId::Portfolio => Some(PageId::Education),
            PageId::Education => Some(PageId::Resume),
            PageId::Resume => Some(PageId::Achievements),
            PageId::Achievements => None,
        }
    }

    pub fn nav_item(self) -> &'static NavigationItem {
        &NAVIGATION[self.index()]
    }

    /// Icon in the content block title. Achievements get a trophy; every
    /// other page reuses its navigation icon.
    pub fn heading_icon(self) -> Icon {
        match self {
            PageId::Achievements => Icon::Trophy,
            _ => self.nav_item().icon,
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Icon identifiers used across the site, each drawn as a single glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Home,
    Briefcase,
    GraduationCap,
    FileText,
    Award,
    Building2,
    School,
    MapPin,
    Calendar,
    ArrowRight,
    Target,
    Wrench,
    TrendingUp,
    CheckCircle2,
    Lightbulb,
    Users,
    BriefcaseBusiness,
    UserCircle,
    BookOpen,
    Sparkles,
    Trophy,
    Rocket,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Home => "⌂",
            Icon::Briefcase => "▤",
            Icon::GraduationCap => "◆",
            Icon::FileText => "≡",
            Icon::Award => "✪",
            Icon::Building2 => "▙",
            Icon::School => "▟",
            Icon::MapPin => "◉",
            Icon::Calendar => "▦",
            Icon::ArrowRight => "→",
            Icon::Target => "◎",
            Icon::Wrench => "⚒",
            Icon::TrendingUp => "↗",
            Icon::CheckCircle2 => "✓",
            Icon::Lightbulb => "☼",
            Icon::Users => "☺",
            Icon::BriefcaseBusiness => "▧",
            Icon::UserCircle => "◍",
            Icon::BookOpen => "▯",
            Icon::Sparkles => "✧",
            Icon::Trophy => "♛",
            Icon::Rocket => "➚",
        }
    }
}

/// A navigation affordance: which page it opens, its label, and its icon.
#[derive(Debug)]
pub struct NavigationItem {
    pub page: PageId,
    pub label: &'static str,
    pub icon: Icon,
}

/// Navigation items in display order, one per [`PageId`].
pub const NAVIGATION: [NavigationItem; 5] = [
    NavigationItem { page: PageId::Home, label: "Главная", icon: Icon::Home },
    NavigationItem { page: PageId::Portfolio, label: "Портфолио", icon: Icon::Briefcase },
    NavigationItem { page: PageId::Education, label: "Образование", icon: Icon::GraduationCap },
    NavigationItem { page: PageId::Resume, label: "Резюме", icon: Icon::FileText },
    NavigationItem { page: PageId::Achievements, label: "Достижения", icon: Icon::Award },
];

/// Build the content of `page`. Exactly one view per page; no fallback.
pub fn body(page: PageId, profile: &Profile) -> ClickableList<'_> {
    match page {
        PageId::Home => home::body(profile),
        PageId::Portfolio => portfolio::body(profile),
        PageId::Education => education::body(profile),
        PageId::Resume => resume::body(profile),
        PageId::Achievements => achievements::body(profile),
    }
}

// ── Shared line builders ───────────────────────────────────────

pub(crate) const ACCENT: Color = Color::Cyan;
pub(crate) const MUTED: Color = Color::Gray;

/// Section heading: accent icon followed by a bold title.
pub(crate) fn heading<'a>(icon: Icon, title: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!(" {} ", icon.glyph()), Style::default().fg(ACCENT)),
        Span::styled(
            title,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

/// Icon-prefixed body line.
pub(crate) fn fact<'a>(icon: Icon, text: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("   {} ", icon.glyph()), Style::default().fg(ACCENT)),
        Span::styled(text, Style::default().fg(Color::White)),
    ])
}

/// Indented muted paragraph.
pub(crate) fn muted(text: &str) -> Line<'_> {
    Line::from(vec![
        Span::raw("     "),
        Span::styled(text, Style::default().fg(MUTED)),
    ])
}

/// Horizontal rule separating the cards of a page.
pub(crate) fn rule<'a>() -> Line<'a> {
    Line::from(Span::styled(
        " ────────────────────────────────",
        Style::default().fg(Color::DarkGray),
    ))
}

/// Clickable call-to-action that opens `target`.
pub(crate) fn push_cta(cl: &mut ClickableList, label: &str, target: PageId, primary: bool) {
    let style = if primary {
        Style::default()
            .fg(Color::Black)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(ACCENT)
            .add_modifier(Modifier::BOLD)
    };
    cl.push_clickable(
        Line::from(vec![
            Span::raw(" "),
            Span::styled(
                format!(" {} {} ", label, Icon::ArrowRight.glyph()),
                style,
            ),
        ]),
        go_to(target),
    );
}

/// Concatenated text of every line, for content assertions.
#[cfg(test)]
pub(crate) fn plain_text(cl: &ClickableList) -> String {
    cl.lines()
        .iter()
        .map(|l| {
            l.spans
                .iter()
                .map(|s| s.content.as_ref())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
