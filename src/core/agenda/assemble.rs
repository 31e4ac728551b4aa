//! Row assembly for individual schedule nodes
//!
//! Each node kind renders itself into rows given a [`RenderContext`] (day, event,
//! lookups, options) and the time slot inherited from its parent. Nothing here
//! writes back into the schedule tree: resolved times live only in the rows.
//!
//! Row tagging follows the import template's display model: a session row is
//! `Session`, its items are `Sub`. Tutorial sessions are pure grouping nodes and
//! emit no row of their own, so their items are tagged `Session` instead.

use super::row::{Row, RowKind};
use super::tracks::{TrackConfig, LIST_SEPARATOR};
use crate::metadata::{ItemMetadata, MetadataLookup};
use crate::plenary::PlenaryInfo;
use crate::schedule::{Content, Item, ItemKind, Session, SessionGroup, SessionKind, TimeSlot};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Per-run switches for optional description links
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    pub pdf_links: bool,
    pub video_links: bool,
}

/// Everything a node needs to render itself, besides its inherited slot
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    /// Day date in display form
    pub date: &'a str,
    pub event: &'a str,
    pub metadata: &'a dyn MetadataLookup,
    pub plenary: &'a PlenaryInfo,
    pub tracks: &'a TrackConfig,
    pub options: RenderOptions,
}

impl RenderContext<'_> {
    /// Append PDF/video link markers for whichever links are enabled and present
    fn append_links(&self, description: &mut String, pdf_url: &str, video_url: &str) {
        if self.options.pdf_links && !pdf_url.is_empty() {
            description.push_str(&format!(" [<a href=\"{}\">PDF</a>]", pdf_url));
        }
        if self.options.video_links && !video_url.is_empty() {
            description.push_str(&format!(" [<a href=\"{}\">VIDEO</a>]", video_url));
        }
    }
}

/// A schedule node that turns into agenda rows
pub trait Render {
    fn render(&self, ctx: &RenderContext<'_>, inherited: &TimeSlot) -> Vec<Row>;
}

impl Render for Content {
    fn render(&self, ctx: &RenderContext<'_>, inherited: &TimeSlot) -> Vec<Row> {
        match self {
            Content::SessionGroup(group) => group.render(ctx, inherited),
            Content::Session(session) => session.render(ctx, inherited),
        }
    }
}

impl Render for SessionGroup {
    fn render(&self, ctx: &RenderContext<'_>, inherited: &TimeSlot) -> Vec<Row> {
        let slot = self.slot().or_else(|| inherited.clone());
        self.sessions
            .iter()
            .flat_map(|session| session.render(ctx, &slot))
            .collect()
    }
}

impl Render for Session {
    fn render(&self, ctx: &RenderContext<'_>, inherited: &TimeSlot) -> Vec<Row> {
        let header = SessionHeader::resolve(self, ctx, inherited);
        let item_kind = if self.kind == SessionKind::Tutorial {
            RowKind::Session
        } else {
            RowKind::Sub
        };

        let mut rows = Vec::with_capacity(self.items.len() + 1);
        if self.kind != SessionKind::Tutorial {
            rows.push(header.to_row(ctx, self));
        }

        for item in &self.items {
            let slot = if shares_session_slot(self.kind, item.kind) {
                header.slot.clone()
            } else {
                item.slot()
            };
            rows.push(render_item(item, ctx, slot, item_kind));
        }

        rows
    }
}

/// Tutorial and poster items have no times of their own and occupy the whole session
fn shares_session_slot(session: SessionKind, item: ItemKind) -> bool {
    matches!(session, SessionKind::Tutorial | SessionKind::Poster)
        || matches!(item, ItemKind::Tutorial | ItemKind::Poster)
}

/// Session-level fields after inheritance and per-kind rules
#[derive(Debug, Clone, Default, PartialEq)]
struct SessionHeader {
    slot: TimeSlot,
    title: String,
    description: String,
    authors: String,
}

impl SessionHeader {
    fn resolve(session: &Session, ctx: &RenderContext<'_>, inherited: &TimeSlot) -> Self {
        let slot = session.slot().or_else(|| inherited.clone());
        let mut header = Self {
            slot,
            title: session.title.clone(),
            ..Default::default()
        };

        match session.kind {
            SessionKind::Tutorial => {
                header.slot = std::mem::take(&mut header.slot).or_else(|| {
                    session
                        .items
                        .first()
                        .map(Item::slot)
                        .unwrap_or_default()
                });
            }
            SessionKind::Paper | SessionKind::BestPaper => {
                header.slot = std::mem::take(&mut header.slot).or_else(|| {
                    TimeSlot::new(
                        session
                            .items
                            .first()
                            .and_then(|i| i.start.clone())
                            .unwrap_or_default(),
                        session
                            .items
                            .last()
                            .and_then(|i| i.end.clone())
                            .unwrap_or_default(),
                    )
                });
                if let Some(chair) = session.chair.as_deref().filter(|c| !c.is_empty()) {
                    header.description = format!("Chair: {}", chair);
                }
                header.prefix_id(session, ctx);
            }
            SessionKind::Poster => header.prefix_id(session, ctx),
            SessionKind::Plenary => match ctx.plenary.find(&session.title) {
                Some(info) => {
                    header.description = format!("<p>{}</p>", info.abstract_text);
                    header.authors = info.person.clone();
                    ctx.append_links(&mut header.description, &info.pdf_url, &info.video_url);
                }
                None => debug!("No plenary info for '{}'", session.title),
            },
            SessionKind::Other => {}
        }

        header
    }

    /// Main-conference sessions show their identifier, e.g. `"4A: Machine Translation"`
    fn prefix_id(&mut self, session: &Session, ctx: &RenderContext<'_>) {
        if !ctx.tracks.is_main(ctx.event) {
            return;
        }
        if let Some(id) = session.id.as_deref().filter(|id| !id.is_empty()) {
            self.title = format!("{}: {}", id, self.title);
        }
    }

    fn to_row(&self, ctx: &RenderContext<'_>, session: &Session) -> Row {
        Row {
            date: ctx.date.to_string(),
            start_time: self.slot.start.clone(),
            end_time: self.slot.end.clone(),
            tracks: ctx.tracks.session_tracks(session, ctx.event),
            title: self.title.clone(),
            location: session.location.clone().unwrap_or_default(),
            description: self.description.clone(),
            authors: self.authors.clone(),
            reserved: String::new(),
            kind: RowKind::Session,
        }
    }
}

/// Row for one presentation item, filled from its metadata record
pub fn render_item(item: &Item, ctx: &RenderContext<'_>, slot: TimeSlot, kind: RowKind) -> Row {
    let missing;
    let metadata = match ctx.metadata.lookup(&item.id, ctx.event) {
        Some(metadata) => metadata,
        None => {
            warn!(
                "No metadata for item '{}' in event '{}'",
                item.id, ctx.event
            );
            missing = ItemMetadata::default();
            &missing
        }
    };

    let mut description = format!("<p>{}</p>", metadata.abstract_text);
    ctx.append_links(
        &mut description,
        metadata.pdf_url.as_deref().unwrap_or_default(),
        metadata.video_url.as_deref().unwrap_or_default(),
    );

    Row {
        date: ctx.date.to_string(),
        start_time: slot.start,
        end_time: slot.end,
        tracks: ctx.tracks.item_track(&item.id, ctx.event),
        title: metadata.title.clone(),
        location: item.location.clone().unwrap_or_default(),
        description,
        authors: metadata.authors.join(LIST_SEPARATOR),
        reserved: String::new(),
        kind,
    }
}
