//! # Engine Crate
//!
//! The playlist coordinator. It ties the song arena from `library`, the
//! five views from `indexes` and the sorters from `sorting` into one value
//! whose operations keep every view consistent.
//!
//! ## Components
//!
//! - **engine**: [`PlaylistEngine`], every add/delete/move/play/rate operation
//! - **recommend**: [`Recommender`], similarity-based "play next" picks
//! - **snapshot**: serializable dashboard and statistics views
//! - **loader**: bulk loading through the regular add-then-rate path
//! - **config**: [`EngineConfig`], JSON-loadable tunables
//!
//! ## Example Usage
//!
//! ```ignore
//! use engine::{PlaylistEngine, load_sample_catalog};
//! use sorting::{Algorithm, SortKey};
//!
//! let mut engine = PlaylistEngine::new("Road Trip");
//! load_sample_catalog(&mut engine);
//!
//! engine.play_song(0)?;
//! engine.sort_playlist(SortKey::DurationDesc, Algorithm::Quick);
//!
//! for song in engine.recommendations(5) {
//!     println!("{}", song);
//! }
//! println!("{}", engine.snapshot().to_json()?);
//! ```

// Public modules
pub mod config;
pub mod engine;
pub mod loader;
pub mod recommend;
pub mod snapshot;

// Re-export commonly used types for convenience
pub use config::{ConfigError, EngineConfig};
pub use engine::PlaylistEngine;
pub use loader::{LoadReport, load_catalog, load_sample_catalog, load_songs};
pub use recommend::Recommender;
pub use snapshot::{LookupReport, PlaylistInfo, PlaylistStats, Snapshot};
