//! Bulk loading of songs into an engine.
//!
//! Every entry goes through the regular [`PlaylistEngine::add_song`] path,
//! followed by [`PlaylistEngine::rate_song`] when it carries a rating, so a
//! loaded playlist is indistinguishable from one built by hand. Entries that
//! fail validation are skipped and logged; they never abort the load.

use crate::engine::PlaylistEngine;
use library::{CatalogEntry, NewSong, UNRATED, sample_catalog};
use serde::Serialize;
use tracing::{info, instrument, warn};

/// Outcome of a bulk load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Songs added to the playlist
    pub loaded: usize,
    /// Loaded songs that also received their rating
    pub rated: usize,
    /// Entries rejected by add (or by rate, for the rating only)
    pub skipped: usize,
}

/// Add each `(song, rating)` pair in order. A rating of 0 leaves the song
/// unrated.
#[instrument(skip_all)]
pub fn load_songs(
    engine: &mut PlaylistEngine,
    entries: impl IntoIterator<Item = (NewSong, u8)>,
) -> LoadReport {
    let mut report = LoadReport::default();

    for (song, rating) in entries {
        let title = song.title.clone();
        let id = match engine.add_song(song) {
            Ok(id) => id,
            Err(err) => {
                warn!("Skipping '{}': {}", title, err);
                report.skipped += 1;
                continue;
            }
        };
        report.loaded += 1;

        if rating == UNRATED {
            continue;
        }
        match engine.rate_song(&id, rating) {
            Ok(()) => report.rated += 1,
            Err(err) => {
                warn!("Loaded '{}' but could not rate it: {}", title, err);
                report.skipped += 1;
            }
        }
    }

    info!(
        "Loaded {} songs ({} rated, {} skipped) into '{}'",
        report.loaded,
        report.rated,
        report.skipped,
        engine.playlist_name()
    );
    report
}

/// Load catalog entries, rating the pre-rated ones.
pub fn load_catalog(engine: &mut PlaylistEngine, catalog: &[CatalogEntry]) -> LoadReport {
    load_songs(
        engine,
        catalog.iter().map(|entry| (entry.to_new_song(), entry.rating)),
    )
}

/// Load the built-in 80-song sample catalog.
pub fn load_sample_catalog(engine: &mut PlaylistEngine) -> LoadReport {
    load_catalog(engine, sample_catalog())
}
