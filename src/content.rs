//! Profile content embedded at build time.
//!
//! Every literal shown by the site lives in `assets/profile.json`. It is
//! compiled into the binary and deserialized once at start-up; after that the
//! [`Profile`] is read-only.

use serde::Deserialize;

use crate::pages::Icon;

/// Raw JSON compiled into the binary.
const PROFILE_JSON: &str = include_str!("../assets/profile.json");

#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    /// Owner's full name, shown in the header and on the home and resume pages.
    pub name: String,
    pub home: Home,
    pub portfolio: Portfolio,
    pub education: Education,
    pub resume: Resume,
    pub achievements: Achievements,
}

/// A line of text prefixed with an icon.
#[derive(Debug, Clone, Deserialize)]
pub struct Fact {
    pub icon: Icon,
    pub text: String,
}

/// An externally hosted image. The URL is opaque: never fetched or validated here.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageRef {
    pub url: String,
    pub alt: String,
}

/// A caption over one or more values (e.g. "Период обучения" → start, end, year).
#[derive(Debug, Clone, Deserialize)]
pub struct Captioned {
    pub caption: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Home {
    pub role: String,
    pub facts: Vec<Fact>,
    pub portrait: ImageRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Portfolio {
    pub heading: String,
    pub stages: Vec<CareerStage>,
}

/// One rung of the career ladder.
#[derive(Debug, Clone, Deserialize)]
pub struct CareerStage {
    pub icon: Icon,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Education {
    pub level: String,
    pub specialty: String,
    pub duration: Captioned,
    pub forms: Captioned,
    pub disciplines_heading: String,
    pub disciplines: Vec<String>,
    pub programme: Programme,
}

/// The federal "Профессионалитет" programme block.
#[derive(Debug, Clone, Deserialize)]
pub struct Programme {
    pub title: String,
    pub intro: String,
    pub advantages: Vec<Fact>,
    /// Bold lead-in of the graduate note.
    pub graduates_lead: String,
    pub graduates: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Resume {
    pub role: String,
    pub contacts: Captioned,
    pub study_period: Captioned,
    pub goals_heading: String,
    pub goals: String,
    pub skills_heading: String,
    pub skills: Vec<String>,
    pub qualities_heading: String,
    pub qualities: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Achievements {
    pub items: Vec<AchievementEntry>,
    pub closing: Closing,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AchievementEntry {
    pub title: String,
    pub description: String,
    /// Image URL, displayed as-is.
    pub image: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Closing {
    pub title: String,
    pub text: String,
}

impl Profile {
    /// Parse the profile compiled into the binary.
    pub fn embedded() -> Result<Self, serde_json::Error> {
        Self::from_json(PROFILE_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
