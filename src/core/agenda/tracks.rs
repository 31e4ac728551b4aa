//! Track classification
//!
//! Tracks are the category labels the event app uses to filter the agenda. In the
//! main conference they are derived from item identifier suffixes (`"123-demos"`
//! is a Demos paper); every other event is a single track named after the event.

use crate::schedule::{Item, Session};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// Separator used when a field holds several values
pub const LIST_SEPARATOR: &str = "; ";

/// Maps an identifier suffix to the track label shown in the app
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuffixLabel {
    pub suffix: String,
    pub label: String,
}

impl SuffixLabel {
    pub fn new(suffix: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
            label: label.into(),
        }
    }
}

/// Node whose track is being classified
#[derive(Debug, Clone, Copy)]
pub enum TrackSubject<'a> {
    Session(&'a Session),
    Item(&'a Item),
}

/// Track naming rules for one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackConfig {
    /// Name of the main-conference event; only it gets suffix-derived tracks
    pub main_event: String,
    /// Label every main-conference research session carries
    pub session_label: String,
    /// Label for identifiers without a known suffix
    pub default_label: String,
    /// Suffixes recognized when aggregating a session's item tracks
    pub session_suffixes: Vec<SuffixLabel>,
    /// Suffixes recognized for an individual item
    pub item_suffixes: Vec<SuffixLabel>,
}

impl Default for TrackConfig {
    fn default() -> Self {
        let shared = vec![
            SuffixLabel::new("srw", "SRW"),
            SuffixLabel::new("tacl", "TACL"),
            SuffixLabel::new("demos", "Demos"),
            SuffixLabel::new("industry", "Industry"),
        ];
        let mut item_suffixes = shared.clone();
        item_suffixes.push(SuffixLabel::new("tutorial", "Tutorial"));

        Self {
            main_event: "main".to_string(),
            session_label: "Research".to_string(),
            default_label: "Main".to_string(),
            session_suffixes: shared,
            item_suffixes,
        }
    }
}

impl TrackConfig {
    pub fn with_main_event(mut self, event: impl Into<String>) -> Self {
        self.main_event = event.into();
        self
    }

    pub fn is_main(&self, event: &str) -> bool {
        event == self.main_event
    }

    /// Track string for a session or item in the given event
    pub fn classify(&self, subject: TrackSubject<'_>, event: &str) -> String {
        match subject {
            TrackSubject::Session(session) => self.session_tracks(session, event),
            TrackSubject::Item(item) => self.item_track(&item.id, event),
        }
    }

    /// `"; "`-joined tracks for a session.
    ///
    /// Main-conference research sessions get the session label followed by the
    /// sorted, de-duplicated labels of their items' suffixes. Other main-conference
    /// sessions have no track.
    pub fn session_tracks(&self, session: &Session, event: &str) -> String {
        if !self.is_main(event) {
            return event.to_string();
        }
        if !session.kind.is_research() {
            return String::new();
        }

        let labels: BTreeSet<&str> = session
            .items
            .iter()
            .filter_map(|item| id_suffix(&item.id))
            .map(|suffix| match lookup(&self.session_suffixes, suffix) {
                Some(label) => label,
                None => {
                    warn!(
                        "Unknown track suffix '{}' in session '{}', using '{}'",
                        suffix, session.title, self.default_label
                    );
                    self.default_label.as_str()
                }
            })
            .filter(|label| *label != self.session_label)
            .collect();

        std::iter::once(self.session_label.as_str())
            .chain(labels)
            .collect::<Vec<_>>()
            .join(LIST_SEPARATOR)
    }

    /// Track for a single item identifier
    pub fn item_track(&self, id: &str, event: &str) -> String {
        if !self.is_main(event) {
            return event.to_string();
        }

        match id_suffix(id).and_then(|suffix| lookup(&self.item_suffixes, suffix)) {
            Some(label) => label.to_string(),
            None => {
                debug!("Item '{}' has no track suffix", id);
                self.default_label.clone()
            }
        }
    }
}

/// Text after the last hyphen of an identifier, if any
fn id_suffix(id: &str) -> Option<&str> {
    id.rsplit_once('-')
        .map(|(_, suffix)| suffix)
        .filter(|suffix| !suffix.is_empty())
}

fn lookup<'a>(table: &'a [SuffixLabel], suffix: &str) -> Option<&'a str> {
    table
        .iter()
        .find(|entry| entry.suffix == suffix)
        .map(|entry| entry.label.as_str())
}
