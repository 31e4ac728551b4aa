//! `tracks` command: show the track label for item identifiers

use crate::core::agenda::TrackConfig;
use anyhow::Result;

pub fn run_tracks_command(event: &str, ids: &[String], main_event: &str) -> Result<()> {
    let tracks = TrackConfig::default().with_main_event(main_event);
    for id in ids {
        println!("{}\t{}", id, tracks.item_track(id, event));
    }
    Ok(())
}
