//! Read-only page content: speakers, programme, venue, partners and copy.
//!
//! The content ships as a JSON document compiled into the binary. It is
//! parsed and validated once at startup; components only ever borrow it.

use crate::config::SiteConfig;
use crate::error::{ContentError, Result};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use tracing::debug;
use url::Url;

pub const EMBEDDED_CONTENT: &str = include_str!("../content/techvision-2025.json");

const TIME_FORMAT: &str = "%H:%M";
const DATE_DISPLAY_FORMAT: &str = "%B %-d, %Y";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub conference: Conference,
    pub about: About,
    pub intros: Intros,
    pub speakers: Vec<Speaker>,
    pub schedule: Vec<ScheduleDay>,
    pub venue: Venue,
    pub sponsors: Vec<Sponsor>,
    pub contact: Contact,
    pub footer: String,
    #[serde(default)]
    pub config: SiteConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conference {
    pub title: String,
    pub tagline: String,
    pub date: NaiveDate,
    pub location: String,
}

impl Conference {
    pub fn display_date(&self) -> String {
        self.date.format(DATE_DISPLAY_FORMAT).to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct About {
    pub heading: String,
    pub paragraphs: Vec<String>,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

/// Heading and blurb shown at the top of a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionIntro {
    pub heading: String,
    pub blurb: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intros {
    pub speakers: SectionIntro,
    pub schedule: SectionIntro,
    pub venue: SectionIntro,
    pub sponsors: SectionIntro,
    pub contact: SectionIntro,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Speaker {
    pub name: String,
    pub title: String,
    pub affiliation: String,
    pub image: String,
    pub bio: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDay {
    pub date: NaiveDate,
    pub events: Vec<ScheduleEvent>,
}

impl ScheduleDay {
    /// `index` is zero-based; headings read "Day 1 - September 13, 2025".
    pub fn heading(&self, index: usize) -> String {
        format!(
            "Day {} - {}",
            index + 1,
            self.date.format(DATE_DISPLAY_FORMAT)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEvent {
    pub time: TimeSlot,
    pub title: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub presenter: Option<String>,
}

fn empty_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// A programme slot written as `"HH:MM - HH:MM"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeSlot {
    pub fn parse(slot: &str) -> Result<Self> {
        let invalid = || ContentError::InvalidTimeSlot(slot.to_string());
        let (start, end) = slot.split_once('-').ok_or_else(invalid)?;
        let start = NaiveTime::parse_from_str(start.trim(), TIME_FORMAT).map_err(|_| invalid())?;
        let end = NaiveTime::parse_from_str(end.trim(), TIME_FORMAT).map_err(|_| invalid())?;
        if start >= end {
            return Err(invalid());
        }
        Ok(Self { start, end })
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.start.format(TIME_FORMAT),
            self.end.format(TIME_FORMAT)
        )
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = ContentError;

    fn try_from(value: String) -> Result<Self> {
        TimeSlot::parse(&value)
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    pub name: String,
    pub city: String,
    pub tagline: String,
    pub address: Vec<String>,
    pub transportation: Vec<String>,
    pub facilities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sponsor {
    pub name: String,
    pub logo: String,
    pub website: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub socials: Vec<String>,
    pub call_to_action: SectionIntro,
}

impl SiteContent {
    /// Content compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_CONTENT)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let content: SiteContent = serde_json::from_str(json)?;
        content.validate()?;
        debug!(
            speakers = content.speakers.len(),
            days = content.schedule.len(),
            sponsors = content.sponsors.len(),
            "site content loaded"
        );
        Ok(content)
    }

    pub fn validate(&self) -> Result<()> {
        self.config.validate()?;
        require_text("conference.title", &self.conference.title)?;

        for (i, speaker) in self.speakers.iter().enumerate() {
            require_text(&format!("speakers[{i}].name"), &speaker.name)?;
            ensure_web_url(&format!("speakers[{i}].image"), &speaker.image)?;
        }

        for (i, sponsor) in self.sponsors.iter().enumerate() {
            require_text(&format!("sponsors[{i}].name"), &sponsor.name)?;
            ensure_web_url(&format!("sponsors[{i}].logo"), &sponsor.logo)?;
            ensure_web_url(&format!("sponsors[{i}].website"), &sponsor.website)?;
        }

        for day in &self.schedule {
            validate_day(day)?;
        }
        Ok(())
    }
}

fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ContentError::MissingText(field.to_string()));
    }
    Ok(())
}

fn ensure_web_url(field: &str, value: &str) -> Result<()> {
    let url = Url::parse(value).map_err(|source| ContentError::InvalidUrl {
        field: field.to_string(),
        source,
    })?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(ContentError::UnsupportedScheme {
            field: field.to_string(),
            scheme: scheme.to_string(),
        }),
    }
}

// Slots must be chronological and must not overlap; back-to-back is fine.
fn validate_day(day: &ScheduleDay) -> Result<()> {
    if day.events.is_empty() {
        return Err(ContentError::EmptySchedule(day.date.to_string()));
    }
    for pair in day.events.windows(2) {
        if pair[1].time.start < pair[0].time.end {
            return Err(ContentError::ScheduleOutOfOrder {
                day: day.date.to_string(),
                slot: pair[1].time.to_string(),
            });
        }
    }
    for event in &day.events {
        require_text(&format!("schedule {} {}", day.date, event.time), &event.title)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_slot_parse() {
        let slot = TimeSlot::parse("09:30 - 10:15").unwrap();
        assert_eq!(slot.start, NaiveTime::from_hms_opt(9, 30, 0).unwrap());
        assert_eq!(slot.end, NaiveTime::from_hms_opt(10, 15, 0).unwrap());
        assert_eq!(slot.to_string(), "09:30 - 10:15");
    }

    #[test]
    fn test_time_slot_rejects_garbage() {
        assert!(TimeSlot::parse("9am").is_err());
        assert!(TimeSlot::parse("10:00 - 09:00").is_err());
        assert!(TimeSlot::parse("10:00 - 10:00").is_err());
        assert!(TimeSlot::parse("25:00 - 26:00").is_err());
    }

    #[test]
    fn test_day_heading() {
        let day = ScheduleDay {
            date: NaiveDate::from_ymd_opt(2025, 9, 13).unwrap(),
            events: vec![],
        };
        assert_eq!(day.heading(0), "Day 1 - September 13, 2025");
    }

    #[test]
    fn test_empty_presenter_is_none() {
        let event: ScheduleEvent = serde_json::from_str(
            r#"{ "time": "10:15 - 10:30", "title": "Networking Break", "presenter": "" }"#,
        )
        .unwrap();
        assert_eq!(event.presenter, None);

        let event: ScheduleEvent =
            serde_json::from_str(r#"{ "time": "10:15 - 10:30", "title": "Networking Break" }"#)
                .unwrap();
        assert_eq!(event.presenter, None);
    }

    #[test]
    fn test_web_url_schemes() {
        assert!(ensure_web_url("logo", "https://research.ibm.com/").is_ok());
        assert!(matches!(
            ensure_web_url("logo", "ftp://research.ibm.com/"),
            Err(ContentError::UnsupportedScheme { .. })
        ));
        assert!(matches!(
            ensure_web_url("logo", "not a url"),
            Err(ContentError::InvalidUrl { .. })
        ));
    }
}
