//! Sort keys and the song comparators behind them.
//!
//! String fields compare case-insensitively. Keys that can tie on their
//! primary field (artist, rating, play count) fall back to the title.

use library::{PlaylistError, Song};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// The fixed set of orderings a playlist can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Title A-Z
    Title,
    /// Artist A-Z, then title
    Artist,
    /// Shortest first
    DurationAsc,
    /// Longest first
    DurationDesc,
    /// Newest addition first
    RecentlyAdded,
    /// Oldest addition first
    OldestAdded,
    /// Highest rating first, then title
    Rating,
    /// Most played first, then title
    PlayCount,
}

impl SortKey {
    pub const ALL: [SortKey; 8] = [
        SortKey::Title,
        SortKey::Artist,
        SortKey::DurationAsc,
        SortKey::DurationDesc,
        SortKey::RecentlyAdded,
        SortKey::OldestAdded,
        SortKey::Rating,
        SortKey::PlayCount,
    ];

    /// Compare two songs under this key.
    pub fn compare(self, a: &Song, b: &Song) -> Ordering {
        match self {
            SortKey::Title => cmp_ignore_case(&a.title, &b.title),
            SortKey::Artist => cmp_ignore_case(&a.artist, &b.artist)
                .then_with(|| cmp_ignore_case(&a.title, &b.title)),
            SortKey::DurationAsc => a.duration.cmp(&b.duration),
            SortKey::DurationDesc => b.duration.cmp(&a.duration),
            SortKey::RecentlyAdded => b.added_at.cmp(&a.added_at),
            SortKey::OldestAdded => a.added_at.cmp(&b.added_at),
            SortKey::Rating => b
                .rating
                .cmp(&a.rating)
                .then_with(|| cmp_ignore_case(&a.title, &b.title)),
            SortKey::PlayCount => b
                .play_count
                .cmp(&a.play_count)
                .then_with(|| cmp_ignore_case(&a.title, &b.title)),
        }
    }

    /// External name, as accepted by [`SortKey::from_name`]
    pub fn name(self) -> &'static str {
        match self {
            SortKey::Title => "title",
            SortKey::Artist => "artist",
            SortKey::DurationAsc => "duration_asc",
            SortKey::DurationDesc => "duration_desc",
            SortKey::RecentlyAdded => "recently_added",
            SortKey::OldestAdded => "oldest_added",
            SortKey::Rating => "rating",
            SortKey::PlayCount => "play_count",
        }
    }

    /// Human-readable label for menus and listings
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Title => "Title (A-Z)",
            SortKey::Artist => "Artist (A-Z)",
            SortKey::DurationAsc => "Duration (Shortest First)",
            SortKey::DurationDesc => "Duration (Longest First)",
            SortKey::RecentlyAdded => "Recently Added",
            SortKey::OldestAdded => "Oldest Added",
            SortKey::Rating => "Rating (Highest First)",
            SortKey::PlayCount => "Play Count (Most Played)",
        }
    }

    pub fn from_name(name: &str) -> Option<SortKey> {
        let name = name.trim().to_ascii_lowercase();
        SortKey::ALL.into_iter().find(|key| key.name() == name)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortKey {
    type Err = PlaylistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::from_name(s)
            .ok_or_else(|| PlaylistError::Validation(format!("unknown sort key '{s}'")))
    }
}

/// Case-insensitive string ordering without allocating.
fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use library::NewSong;

    fn song(title: &str, artist: &str, duration: u32) -> Song {
        Song::new(
            title,
            NewSong {
                title: title.into(),
                artist: artist.into(),
                duration,
                ..NewSong::default()
            },
        )
    }

    #[test]
    fn test_title_ignores_case() {
        let a = song("apple", "x", 1);
        let b = song("Banana", "x", 1);
        assert_eq!(SortKey::Title.compare(&a, &b), Ordering::Less);
        assert_eq!(
            SortKey::Title.compare(&song("ABC", "x", 1), &song("abc", "y", 2)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_artist_then_title() {
        let a = song("Zebra", "Queen", 1);
        let b = song("Alpha", "queen", 1);
        assert_eq!(SortKey::Artist.compare(&a, &b), Ordering::Greater);
    }

    #[test]
    fn test_duration_directions() {
        let short = song("a", "x", 100);
        let long = song("b", "x", 200);
        assert_eq!(SortKey::DurationAsc.compare(&short, &long), Ordering::Less);
        assert_eq!(SortKey::DurationDesc.compare(&short, &long), Ordering::Greater);
    }

    #[test]
    fn test_added_time_directions() {
        let now = Utc::now();
        let old = Song::with_added_at("old", NewSong::default(), now - Duration::seconds(60));
        let new = Song::with_added_at("new", NewSong::default(), now);
        assert_eq!(SortKey::RecentlyAdded.compare(&new, &old), Ordering::Less);
        assert_eq!(SortKey::OldestAdded.compare(&new, &old), Ordering::Greater);
    }

    #[test]
    fn test_rating_and_play_count_tie_on_title() {
        let mut a = song("Beta", "x", 1);
        let mut b = song("alpha", "x", 1);
        a.set_rating(5);
        b.set_rating(5);
        assert_eq!(SortKey::Rating.compare(&a, &b), Ordering::Greater);

        b.set_rating(3);
        assert_eq!(SortKey::Rating.compare(&a, &b), Ordering::Less);

        a.play();
        assert_eq!(SortKey::PlayCount.compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_names_round_trip() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::from_name(key.name()), Some(key));
            assert_eq!(key.to_string().parse::<SortKey>().unwrap(), key);
        }
        assert_eq!(SortKey::from_name(" Duration_Desc "), Some(SortKey::DurationDesc));
        assert!(SortKey::from_name("bpm").is_none());
        assert!("bpm".parse::<SortKey>().is_err());
    }
}
