//! Conference schedule tree
//!
//! The schedule is a read-only tree: days hold an ordered list of contents, each
//! content being either a session group (parallel sessions sharing a slot) or a
//! standalone session; sessions hold presentation items.
//!
//! Times are kept as the display strings the schedule provides (e.g. `"9:00"`);
//! the core never does arithmetic on them.

pub mod provider;

pub use provider::{load_schedule, parse_schedule};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format expected by the agenda import template
pub const AGENDA_DATE_FORMAT: &str = "%m/%d/%Y";

/// Ordered sequence of days for one event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleTree {
    #[serde(default)]
    pub days: Vec<Day>,
}

/// A single conference day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Day {
    pub date: NaiveDate,
    /// Written as single-key maps (`- session: {...}`) rather than YAML tags
    #[serde(default, with = "serde_yaml::with::singleton_map_recursive")]
    pub contents: Vec<Content>,
}

impl Day {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            contents: Vec::new(),
        }
    }

    /// The day's date in agenda display form (`MM/DD/YYYY`)
    pub fn display_date(&self) -> String {
        self.date.format(AGENDA_DATE_FORMAT).to_string()
    }
}

/// Top-level content of a day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Content {
    SessionGroup(SessionGroup),
    Session(Session),
}

/// Sessions sharing a time slot, typically shown as parallel tracks
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionGroup {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub sessions: Vec<Session>,
}

impl SessionGroup {
    pub fn slot(&self) -> TimeSlot {
        TimeSlot::from_parts(self.start.as_deref(), self.end.as_deref())
    }
}

/// Kind of a session; drives row assembly and time inheritance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionKind {
    Tutorial,
    Paper,
    BestPaper,
    Poster,
    Plenary,
    #[default]
    #[serde(other)]
    Other,
}

impl SessionKind {
    /// Paper, poster and best-paper sessions carry research-track labels
    pub fn is_research(self) -> bool {
        matches!(self, Self::Paper | Self::BestPaper | Self::Poster)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "type", default)]
    pub kind: SessionKind,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
    pub title: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub chair: Option<String>,
    /// Stable session identifier, e.g. `"4A"`
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Session {
    pub fn new(kind: SessionKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_slot(mut self, start: &str, end: &str) -> Self {
        self.start = Some(start.to_string());
        self.end = Some(end.to_string());
        self
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    pub fn slot(&self) -> TimeSlot {
        TimeSlot::from_parts(self.start.as_deref(), self.end.as_deref())
    }
}

/// Kind of a presentation item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Paper,
    Poster,
    Tutorial,
    #[default]
    #[serde(other)]
    Other,
}

/// A single presentation inside a session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "type", default)]
    pub kind: ItemKind,
    /// Identifier used to look up metadata; may carry a track suffix (`"123-demos"`)
    pub id: String,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl Item {
    pub fn new(kind: ItemKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_slot(mut self, start: &str, end: &str) -> Self {
        self.start = Some(start.to_string());
        self.end = Some(end.to_string());
        self
    }

    pub fn slot(&self) -> TimeSlot {
        TimeSlot::from_parts(self.start.as_deref(), self.end.as_deref())
    }
}

/// Resolved start/end pair; empty strings mean "not given"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeSlot {
    pub start: String,
    pub end: String,
}

impl TimeSlot {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn from_parts(start: Option<&str>, end: Option<&str>) -> Self {
        Self::new(start.unwrap_or_default(), end.unwrap_or_default())
    }

    /// Neither start nor end is set
    pub fn is_unset(&self) -> bool {
        self.start.is_empty() && self.end.is_empty()
    }

    /// Keep this slot unless it is entirely unset, in which case use `fallback`
    pub fn or_else(self, fallback: impl FnOnce() -> TimeSlot) -> TimeSlot {
        if self.is_unset() {
            fallback()
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_date_is_us_format() {
        let day = Day::new(NaiveDate::from_ymd_opt(2019, 6, 3).unwrap());
        assert_eq!(day.display_date(), "06/03/2019");
    }

    #[test]
    fn test_partial_slot_is_not_unset() {
        let slot = TimeSlot::from_parts(Some("9:00"), None);
        assert!(!slot.is_unset());
        let kept = slot.clone().or_else(|| TimeSlot::new("1:00", "2:00"));
        assert_eq!(kept, slot);
    }

    #[test]
    fn test_unset_slot_falls_back() {
        let slot = TimeSlot::from_parts(Some(""), None);
        assert!(slot.is_unset());
        assert_eq!(
            slot.or_else(|| TimeSlot::new("1:00", "2:00")),
            TimeSlot::new("1:00", "2:00")
        );
    }

    #[test]
    fn test_unknown_session_type_is_other() {
        let session: Session = serde_yaml::from_str("type: break\ntitle: Lunch\n").unwrap();
        assert_eq!(session.kind, SessionKind::Other);
        assert!(session.items.is_empty());
    }

    #[test]
    fn test_day_contents_read_as_single_key_maps() {
        let yaml = r#"
date: 2019-06-03
contents:
  - session:
      type: plenary
      title: Opening
      start: "9:00"
      end: "9:15"
  - session_group:
      start: "10:30"
      end: "12:00"
      sessions:
        - type: poster
          title: Posters
          items:
            - {type: poster, id: 7-demos}
        - type: break
          title: Coffee
"#;
        let day: Day = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(day.contents.len(), 2);

        match &day.contents[0] {
            Content::Session(session) => {
                assert_eq!(session.kind, SessionKind::Plenary);
                assert_eq!(session.slot(), TimeSlot::new("9:00", "9:15"));
            }
            other => panic!("expected a session, got {other:?}"),
        }
        match &day.contents[1] {
            Content::SessionGroup(group) => {
                assert_eq!(group.slot(), TimeSlot::new("10:30", "12:00"));
                assert_eq!(group.sessions[0].items[0].kind, ItemKind::Poster);
                assert_eq!(group.sessions[1].kind, SessionKind::Other);
            }
            other => panic!("expected a session group, got {other:?}"),
        }
    }
}
