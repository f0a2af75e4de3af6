use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the seven navigable sections of the page.
///
/// The key doubles as the DOM id of the section element, so the order of
/// [`SectionKey::ALL`] is both document order and the priority order used
/// when resolving the active section.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKey {
    #[default]
    Home,
    About,
    Speakers,
    Schedule,
    Venue,
    Sponsors,
    Contact,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("UnknownSection: {0}")]
pub struct UnknownSectionError(String);

impl SectionKey {
    pub const ALL: [SectionKey; 7] = [
        SectionKey::Home,
        SectionKey::About,
        SectionKey::Speakers,
        SectionKey::Schedule,
        SectionKey::Venue,
        SectionKey::Sponsors,
        SectionKey::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            SectionKey::Home => "home",
            SectionKey::About => "about",
            SectionKey::Speakers => "speakers",
            SectionKey::Schedule => "schedule",
            SectionKey::Venue => "venue",
            SectionKey::Sponsors => "sponsors",
            SectionKey::Contact => "contact",
        }
    }

    /// Label shown in the navigation bar. Sponsors are presented as partners.
    pub fn label(self) -> &'static str {
        match self {
            SectionKey::Home => "Home",
            SectionKey::About => "About",
            SectionKey::Speakers => "Speakers",
            SectionKey::Schedule => "Schedule",
            SectionKey::Venue => "Venue",
            SectionKey::Sponsors => "Partners",
            SectionKey::Contact => "Contact",
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SectionKey {
    type Err = UnknownSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionKey::ALL
            .into_iter()
            .find(|key| key.id() == s)
            .ok_or_else(|| UnknownSectionError(s.to_string()))
    }
}
