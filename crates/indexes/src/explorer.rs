//! Category explorer - a four-level browse tree.
//!
//! Songs are filed under genre -> subgenre -> mood -> artist. Category
//! names are normalized on the way in (trimmed, lower-cased, then each word
//! capitalized) so "rock ", "ROCK" and "Rock" land in the same branch.
//! Empty names fall back to "Unknown Genre", "Unknown Subgenre" and so on.
//!
//! Children are kept in a `BTreeMap`, so every listing comes back sorted.

use library::{Song, SongKey};
use serde::Serialize;
use std::collections::{BTreeMap, VecDeque};

/// Depth of a node in the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Level {
    Root,
    Genre,
    Subgenre,
    Mood,
    Artist,
}

impl Level {
    /// Name used for an empty category at this level
    pub fn unknown_name(self) -> &'static str {
        match self {
            Level::Root => "Root",
            Level::Genre => "Unknown Genre",
            Level::Subgenre => "Unknown Subgenre",
            Level::Mood => "Unknown Mood",
            Level::Artist => "Unknown Artist",
        }
    }

    fn child(self) -> Option<Level> {
        match self {
            Level::Root => Some(Level::Genre),
            Level::Genre => Some(Level::Subgenre),
            Level::Subgenre => Some(Level::Mood),
            Level::Mood => Some(Level::Artist),
            Level::Artist => None,
        }
    }
}

/// Trim, lower-case, and capitalize the first letter of every word.
///
/// Words break on ASCII punctuation and on whitespace. Other non-ASCII
/// symbols (dashes, combining marks) stay inside the current word, so
/// `"synth–pop"` becomes `"Synth–pop"`.
pub fn title_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut word_start = true;

    for c in raw.trim().chars() {
        if word_start {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
        word_start = is_word_break(c);
    }
    out
}

fn is_word_break(c: char) -> bool {
    if c.is_ascii() {
        !(c.is_ascii_alphanumeric() || c == '_')
    } else if c.is_alphanumeric() {
        false
    } else {
        c.is_whitespace()
    }
}

/// Normalized category name for `level`, substituting the level's
/// "Unknown ..." name when `raw` is blank.
pub fn normalize_category(raw: &str, level: Level) -> String {
    let name = title_case(raw);
    if name.is_empty() {
        level.unknown_name().to_string()
    } else {
        name
    }
}

/// One category in the tree. Only artist nodes hold songs.
#[derive(Debug, Clone)]
pub struct CategoryNode {
    name: String,
    level: Level,
    children: BTreeMap<String, CategoryNode>,
    songs: Vec<SongKey>,
}

impl CategoryNode {
    fn new(name: impl Into<String>, level: Level) -> Self {
        Self {
            name: name.into(),
            level,
            children: BTreeMap::new(),
            songs: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn songs(&self) -> &[SongKey] {
        &self.songs
    }

    pub fn children(&self) -> impl Iterator<Item = &CategoryNode> {
        self.children.values()
    }

    fn is_empty_branch(&self) -> bool {
        self.songs.is_empty() && self.children.is_empty()
    }

    fn child(&self, raw: &str) -> Option<&CategoryNode> {
        let level = self.level.child()?;
        self.children.get(&normalize_category(raw, level))
    }

    fn child_names(&self) -> Vec<String> {
        self.children.keys().cloned().collect()
    }

    fn collect_songs(&self, out: &mut Vec<SongKey>) {
        out.extend_from_slice(&self.songs);
        for child in self.children.values() {
            child.collect_songs(out);
        }
    }
}

/// Node counts per level plus the number of filed songs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryStats {
    pub total_songs: usize,
    pub genres: usize,
    pub subgenres: usize,
    pub moods: usize,
    pub artists: usize,
}

/// Nested genre -> subgenre -> mood -> artist -> song count
pub type CategoryStructure =
    BTreeMap<String, BTreeMap<String, BTreeMap<String, BTreeMap<String, usize>>>>;

/// Genre/subgenre/mood/artist browse tree.
#[derive(Debug, Clone)]
pub struct ExplorerTree {
    root: CategoryNode,
    total_songs: usize,
}

impl ExplorerTree {
    pub fn new() -> Self {
        Self {
            root: CategoryNode::new("Root", Level::Root),
            total_songs: 0,
        }
    }

    /// File `key` under the song's normalized category path.
    pub fn add(&mut self, key: SongKey, song: &Song) {
        let path = Self::path_of(song);
        let mut node = &mut self.root;

        for (name, level) in path.into_iter().zip([
            Level::Genre,
            Level::Subgenre,
            Level::Mood,
            Level::Artist,
        ]) {
            node = node
                .children
                .entry(name.clone())
                .or_insert_with(|| CategoryNode::new(name, level));
        }

        node.songs.push(key);
        self.total_songs += 1;
    }

    /// Remove `key` from wherever it is filed, pruning branches left empty.
    /// Returns whether the key was found.
    pub fn remove(&mut self, key: SongKey) -> bool {
        let removed = Self::remove_from(&mut self.root, key);
        if removed {
            self.total_songs -= 1;
        }
        removed
    }

    pub fn genres(&self) -> Vec<String> {
        self.root.child_names()
    }

    pub fn subgenres(&self, genre: &str) -> Vec<String> {
        self.root
            .child(genre)
            .map(CategoryNode::child_names)
            .unwrap_or_default()
    }

    pub fn moods(&self, genre: &str, subgenre: &str) -> Vec<String> {
        self.root
            .child(genre)
            .and_then(|g| g.child(subgenre))
            .map(CategoryNode::child_names)
            .unwrap_or_default()
    }

    pub fn artists(&self, genre: &str, subgenre: &str, mood: &str) -> Vec<String> {
        self.root
            .child(genre)
            .and_then(|g| g.child(subgenre))
            .and_then(|s| s.child(mood))
            .map(CategoryNode::child_names)
            .unwrap_or_default()
    }

    /// Songs at one full path, in the order they were filed.
    pub fn songs_at(&self, genre: &str, subgenre: &str, mood: &str, artist: &str) -> &[SongKey] {
        self.root
            .child(genre)
            .and_then(|g| g.child(subgenre))
            .and_then(|s| s.child(mood))
            .and_then(|m| m.child(artist))
            .map(CategoryNode::songs)
            .unwrap_or(&[])
    }

    /// Every song anywhere under `genre`.
    pub fn songs_in_genre(&self, genre: &str) -> Vec<SongKey> {
        let mut out = Vec::new();
        if let Some(node) = self.root.child(genre) {
            node.collect_songs(&mut out);
        }
        out
    }

    /// Every song filed under `mood`, across all genres and subgenres.
    pub fn songs_with_mood(&self, mood: &str) -> Vec<SongKey> {
        let mood = normalize_category(mood, Level::Mood);
        let mut out = Vec::new();

        for genre in self.root.children.values() {
            for subgenre in genre.children.values() {
                if let Some(node) = subgenre.children.get(&mood) {
                    node.collect_songs(&mut out);
                }
            }
        }
        out
    }

    /// `[genre, subgenre, mood, artist]` under which `key` is filed.
    pub fn find_path(&self, key: SongKey) -> Option<[String; 4]> {
        for genre in self.root.children.values() {
            for subgenre in genre.children.values() {
                for mood in subgenre.children.values() {
                    for artist in mood.children.values() {
                        if artist.songs.contains(&key) {
                            return Some([
                                genre.name.clone(),
                                subgenre.name.clone(),
                                mood.name.clone(),
                                artist.name.clone(),
                            ]);
                        }
                    }
                }
            }
        }
        None
    }

    /// Visit every node, parents before children, siblings in name order.
    /// The visitor gets the node and its depth (root = 0).
    pub fn walk_depth_first(&self, mut visit: impl FnMut(&CategoryNode, usize)) {
        fn walk(node: &CategoryNode, depth: usize, visit: &mut impl FnMut(&CategoryNode, usize)) {
            visit(node, depth);
            for child in node.children.values() {
                walk(child, depth + 1, visit);
            }
        }
        walk(&self.root, 0, &mut visit);
    }

    /// Visit every node level by level.
    pub fn walk_breadth_first(&self, mut visit: impl FnMut(&CategoryNode, usize)) {
        let mut queue = VecDeque::from([(&self.root, 0usize)]);
        while let Some((node, depth)) = queue.pop_front() {
            visit(node, depth);
            queue.extend(node.children.values().map(|child| (child, depth + 1)));
        }
    }

    pub fn stats(&self) -> CategoryStats {
        let mut stats = CategoryStats {
            total_songs: self.total_songs,
            ..CategoryStats::default()
        };

        self.walk_depth_first(|node, _| match node.level {
            Level::Root => {}
            Level::Genre => stats.genres += 1,
            Level::Subgenre => stats.subgenres += 1,
            Level::Mood => stats.moods += 1,
            Level::Artist => stats.artists += 1,
        });
        stats
    }

    /// Whole tree as nested maps with a song count per artist.
    pub fn structure(&self) -> CategoryStructure {
        let mut out = CategoryStructure::new();
        for genre in self.root.children.values() {
            let g = out.entry(genre.name.clone()).or_default();
            for subgenre in genre.children.values() {
                let s = g.entry(subgenre.name.clone()).or_default();
                for mood in subgenre.children.values() {
                    let m = s.entry(mood.name.clone()).or_default();
                    for artist in mood.children.values() {
                        m.insert(artist.name.clone(), artist.songs.len());
                    }
                }
            }
        }
        out
    }

    pub fn total_songs(&self) -> usize {
        self.total_songs
    }

    pub fn is_empty(&self) -> bool {
        self.total_songs == 0
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    fn path_of(song: &Song) -> [String; 4] {
        [
            normalize_category(&song.genre, Level::Genre),
            normalize_category(&song.subgenre, Level::Subgenre),
            normalize_category(&song.mood, Level::Mood),
            normalize_category(&song.artist, Level::Artist),
        ]
    }

    fn remove_from(node: &mut CategoryNode, key: SongKey) -> bool {
        if let Some(pos) = node.songs.iter().position(|&k| k == key) {
            node.songs.remove(pos);
            return true;
        }

        let mut hit = None;
        for (name, child) in node.children.iter_mut() {
            if Self::remove_from(child, key) {
                hit = Some((name.clone(), child.is_empty_branch()));
                break;
            }
        }

        match hit {
            Some((name, emptied)) => {
                if emptied {
                    node.children.remove(&name);
                }
                true
            }
            None => false,
        }
    }
}

impl Default for ExplorerTree {
    fn default() -> Self {
        Self::new()
    }
}
