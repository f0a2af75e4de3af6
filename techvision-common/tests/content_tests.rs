use techvision_common::content::{SiteContent, EMBEDDED_CONTENT};
use techvision_common::{ContentError, SiteConfig};

fn embedded_value() -> serde_json::Value {
    serde_json::from_str(EMBEDDED_CONTENT).unwrap()
}

#[test]
fn test_embedded_content_loads() {
    let content = SiteContent::embedded().unwrap();
    assert_eq!(content.conference.title, "TechVision Research 2025");
    assert_eq!(content.conference.display_date(), "September 13, 2025");
    assert_eq!(content.speakers.len(), 3);
    assert_eq!(content.sponsors.len(), 3);
    assert_eq!(content.schedule.len(), 1);
    assert_eq!(content.schedule[0].events.len(), 10);
    assert_eq!(content.config.focus_offset, 100.0);
}

#[test]
fn test_breaks_have_no_presenter() {
    let content = SiteContent::embedded().unwrap();
    let events = &content.schedule[0].events;
    assert_eq!(events[0].title, "Registration & Welcome Tea");
    assert_eq!(events[0].presenter, None);
    assert_eq!(events[1].presenter.as_deref(), Some("Dr. Priya Sharma"));
    assert_eq!(events[1].time.to_string(), "09:30 - 10:15");
}

#[test]
fn test_missing_config_uses_defaults() {
    let mut value = embedded_value();
    value.as_object_mut().unwrap().remove("config");
    let content = SiteContent::from_json(&value.to_string()).unwrap();
    assert_eq!(content.config, SiteConfig::default());
}

#[test]
fn test_malformed_document() {
    let result = SiteContent::from_json("{ \"conference\": ");
    assert!(matches!(result, Err(ContentError::Json(_))));
}

#[test]
fn test_rejects_invalid_sponsor_website() {
    let mut value = embedded_value();
    value["sponsors"][1]["website"] = "research.google".into();
    let result = SiteContent::from_json(&value.to_string());
    match result {
        Err(ContentError::InvalidUrl { field, .. }) => assert_eq!(field, "sponsors[1].website"),
        other => panic!("Expected InvalidUrl, got {:?}", other),
    }
}

#[test]
fn test_rejects_overlapping_schedule() {
    let mut value = embedded_value();
    value["schedule"][0]["events"][2]["time"] = "10:00 - 10:30".into();
    let result = SiteContent::from_json(&value.to_string());
    assert!(matches!(
        result,
        Err(ContentError::ScheduleOutOfOrder { .. })
    ));
}

#[test]
fn test_rejects_bad_time_slot() {
    let mut value = embedded_value();
    value["schedule"][0]["events"][0]["time"] = "morning".into();
    let result = SiteContent::from_json(&value.to_string());
    assert!(matches!(result, Err(ContentError::Json(_))));
}

#[test]
fn test_rejects_empty_day() {
    let mut value = embedded_value();
    value["schedule"][0]["events"] = serde_json::json!([]);
    let result = SiteContent::from_json(&value.to_string());
    assert!(matches!(result, Err(ContentError::EmptySchedule(_))));
}

#[test]
fn test_rejects_blank_speaker_name() {
    let mut value = embedded_value();
    value["speakers"][0]["name"] = "  ".into();
    let result = SiteContent::from_json(&value.to_string());
    assert!(matches!(result, Err(ContentError::MissingText(_))));
}
