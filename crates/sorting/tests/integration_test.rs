//! Integration tests for sorting.
//!
//! These tests check the sort laws over songs from the store: every
//! algorithm agrees with every other for every key, sorting is idempotent,
//! and the input is never modified.

use chrono::{Duration, TimeZone, Utc};
use indexes::Sequence;
use library::{NewSong, Song, SongKey, SongStore};
use proptest::prelude::*;
use sorting::{Algorithm, PlaylistSorter, SortKey};
use std::cmp::Ordering;

#[derive(Debug, Clone)]
struct SongFixture {
    title: String,
    artist: String,
    duration: u32,
    rating: u8,
    plays: u8,
    added_offset: i64,
}

fn song_fixture() -> impl Strategy<Value = SongFixture> {
    (
        "[a-cA-C]{1,3}",
        "[xyXY]{1,2}",
        0u32..8,
        0u8..=5,
        0u8..4,
        0i64..5,
    )
        .prop_map(|(title, artist, duration, rating, plays, added_offset)| SongFixture {
            title,
            artist,
            duration,
            rating,
            plays,
            added_offset,
        })
}

fn build_store(fixtures: &[SongFixture]) -> (SongStore, Vec<SongKey>) {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let mut store = SongStore::new();
    let keys = fixtures
        .iter()
        .enumerate()
        .map(|(i, fixture)| {
            let mut song = Song::with_added_at(
                format!("song-{i}"),
                NewSong {
                    title: fixture.title.clone(),
                    artist: fixture.artist.clone(),
                    duration: fixture.duration,
                    ..NewSong::default()
                },
                base + Duration::seconds(fixture.added_offset),
            );
            song.set_rating(fixture.rating);
            for _ in 0..fixture.plays {
                song.play();
            }
            store.insert(song)
        })
        .collect();
    (store, keys)
}

/// Two orderings agree when they are equal position by position under the
/// comparator; unstable algorithms may swap items that compare equal.
fn same_ordering(store: &SongStore, key: SortKey, a: &[SongKey], b: &[SongKey]) -> bool {
    a.len() == b.len()
        && a.iter().zip(b).all(|(x, y)| {
            let (x, y) = (store.get(*x).unwrap(), store.get(*y).unwrap());
            key.compare(x, y) == Ordering::Equal
        })
}

proptest::proptest! {
    /// Merge, quick and heap sort produce the same ordering for every key.
    #[test]
    fn algorithms_agree_for_every_key(fixtures in proptest::collection::vec(song_fixture(), 0..40)) {
        let (store, keys) = build_store(&fixtures);
        let sorter = PlaylistSorter::new(&store);

        for key in SortKey::ALL {
            let reference = sorter.sort_keys(&keys, key, Algorithm::Merge);
            prop_assert!(sorter.is_sorted(&reference, key));

            for algorithm in Algorithm::ALL {
                let sorted = sorter.sort_keys(&keys, key, algorithm);
                prop_assert!(same_ordering(&store, key, &reference, &sorted),
                    "{} disagrees with merge_sort on {}", algorithm, key);
            }
        }
    }

    /// Sorting already-sorted input leaves the order unchanged.
    #[test]
    fn sorting_is_idempotent(fixtures in proptest::collection::vec(song_fixture(), 0..40)) {
        let (store, keys) = build_store(&fixtures);
        let sorter = PlaylistSorter::new(&store);

        for key in SortKey::ALL {
            for algorithm in Algorithm::ALL {
                let once = sorter.sort_keys(&keys, key, algorithm);
                let twice = sorter.sort_keys(&once, key, algorithm);
                prop_assert!(same_ordering(&store, key, &once, &twice));
            }
        }
    }

    /// Merge sort never reorders songs that compare equal.
    #[test]
    fn merge_sort_is_stable(fixtures in proptest::collection::vec(song_fixture(), 0..40)) {
        let (store, keys) = build_store(&fixtures);
        let sorted = PlaylistSorter::new(&store).sort_keys(&keys, SortKey::DurationAsc, Algorithm::Merge);

        for pair in sorted.windows(2) {
            let (a, b) = (store.get(pair[0]).unwrap(), store.get(pair[1]).unwrap());
            if a.duration == b.duration {
                prop_assert!(pair[0] < pair[1]);
            }
        }
    }
}

#[test]
fn test_duration_desc_scenario() {
    let fixtures: Vec<SongFixture> = [400, 150, 250]
        .into_iter()
        .enumerate()
        .map(|(i, duration)| SongFixture {
            title: format!("Song {i}"),
            artist: "Artist".into(),
            duration,
            rating: 0,
            plays: 0,
            added_offset: 0,
        })
        .collect();
    let (store, keys) = build_store(&fixtures);
    let mut order: Sequence<SongKey> = keys.iter().copied().collect();

    PlaylistSorter::new(&store)
        .sort_sequence(&mut order, SortKey::DurationDesc, Algorithm::Merge);

    let durations: Vec<u32> = order
        .iter()
        .map(|k| store.get(k).unwrap().duration)
        .collect();
    assert_eq!(durations, vec![400, 250, 150]);
}

#[test]
fn test_input_is_not_mutated() {
    let fixtures: Vec<SongFixture> = (0..10)
        .map(|i| SongFixture {
            title: format!("t{}", 10 - i),
            artist: "a".into(),
            duration: 10 - i,
            rating: 0,
            plays: 0,
            added_offset: 0,
        })
        .collect();
    let (store, keys) = build_store(&fixtures);
    let before = keys.clone();

    for algorithm in Algorithm::ALL {
        let _ = PlaylistSorter::new(&store)
            .sort_keys(&keys, SortKey::DurationAsc, algorithm);
    }
    assert_eq!(keys, before);
}
