use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use engine::{EngineConfig, PlaylistEngine, load_sample_catalog};
use library::Song;
use rand::Rng;
use sorting::{Algorithm, SortKey};
use std::path::PathBuf;
use std::time::Instant;
use tracing::debug;

/// Playlist Engine - indexed in-memory playlist manager
#[derive(Parser)]
#[command(name = "playlist-engine")]
#[command(about = "In-memory playlist engine seeded with a sample catalog", long_about = None)]
struct Cli {
    /// JSON file with engine settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the playlist name
    #[arg(long)]
    playlist_name: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk through every engine operation on the sample catalog
    Demo,

    /// Print the playlist in its current order
    List {
        /// Maximum number of songs to print
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// Browse the genre/subgenre/mood/artist tree
    Browse {
        #[arg(long)]
        genre: Option<String>,

        #[arg(long)]
        subgenre: Option<String>,

        #[arg(long)]
        mood: Option<String>,

        #[arg(long)]
        artist: Option<String>,

        /// Print the whole tree as JSON instead
        #[arg(long)]
        tree: bool,
    },

    /// Find a song by exact title
    Search {
        #[arg(long)]
        title: String,
    },

    /// List songs with a rating in [min, max]
    Ratings {
        #[arg(long, default_value = "1")]
        min: u8,

        #[arg(long, default_value = "5")]
        max: u8,
    },

    /// Sort the playlist and print it
    Sort {
        /// title, artist, duration_asc, duration_desc, recently_added,
        /// oldest_added, rating or play_count
        #[arg(long, default_value = "title")]
        by: SortKey,

        /// merge, quick or heap
        #[arg(long, default_value = "merge")]
        algorithm: Algorithm,

        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// Play some songs, then ask for recommendations
    Recommend {
        /// Number of recommendations (0 uses the configured default)
        #[arg(long, default_value = "10")]
        count: usize,

        /// Playlist positions to play first
        #[arg(long, num_args = 1..)]
        play: Vec<usize>,
    },

    /// Print playlist statistics
    Stats {
        /// Print the full snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compare the sort algorithms on a shuffled playlist
    Benchmark {
        /// Number of rounds to run
        #[arg(long, default_value = "5")]
        rounds: usize,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => EngineConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if let Some(name) = cli.playlist_name {
        config = config.with_playlist_name(name);
    }

    debug!("Engine config: {:?}", config);
    let mut engine = PlaylistEngine::with_config(config);
    let start = Instant::now();
    let report = load_sample_catalog(&mut engine);
    println!(
        "{} Loaded {} songs into '{}' in {:?}",
        "✓".green(),
        report.loaded,
        engine.playlist_name(),
        start.elapsed()
    );

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Demo => handle_demo(&mut engine)?,
        Commands::List { limit } => print_songs("Playlist", &engine.current_playlist(), limit),
        Commands::Browse {
            genre,
            subgenre,
            mood,
            artist,
            tree,
        } => handle_browse(&engine, genre, subgenre, mood, artist, tree)?,
        Commands::Search { title } => {
            let song = engine
                .search_by_title(&title)
                .with_context(|| format!("No song titled '{}'", title))?;
            print_song_details(&engine, song)?;
        }
        Commands::Ratings { min, max } => {
            let songs = engine.songs_by_rating_range(min, max);
            print_songs(&format!("Rated {}-{}", min, max), &songs, songs.len());
        }
        Commands::Sort {
            by,
            algorithm,
            limit,
        } => {
            let start = Instant::now();
            engine.sort_playlist(by, algorithm);
            println!(
                "Sorted by {} with {} in {:?}",
                by.label(),
                algorithm,
                start.elapsed()
            );
            print_songs("Playlist", &engine.current_playlist(), limit);
        }
        Commands::Recommend { count, play } => handle_recommend(&mut engine, count, &play)?,
        Commands::Stats { json } => handle_stats(&engine, json)?,
        Commands::Benchmark { rounds } => handle_benchmark(&mut engine, rounds)?,
    }

    Ok(())
}

/// Handle the 'demo' command
fn handle_demo(engine: &mut PlaylistEngine) -> Result<()> {
    println!("{}", "Playing the first three songs".bold().blue());
    for index in 0..3 {
        let song = engine.play_song(index)?;
        println!("  ▶ {}", song);
    }

    let undone = engine.undo_last_play()?;
    println!("{} Removed '{}' from history", "↶".yellow(), undone.title);

    let id = engine.song_at(1)?.id.clone();
    engine.rate_song(&id, 5)?;
    println!("{} Rated {} with 5 stars", "★".yellow(), id);

    engine.move_song(0, 4)?;
    println!("Moved the first song to position 3");
    engine.reverse();
    println!("Reversed the playlist");

    engine.sort_playlist(SortKey::DurationDesc, Algorithm::Quick);
    print_songs("Longest songs", &engine.current_playlist(), 5);

    print_songs("Recommended next", &engine.recommendations(5), 5);

    if let Some(last) = engine.len().checked_sub(1) {
        let deleted = engine.delete_song(last)?;
        println!("{} Deleted '{}'", "✗".red(), deleted.title);
    }

    handle_stats(engine, false)
}

/// Handle the 'browse' command
fn handle_browse(
    engine: &PlaylistEngine,
    genre: Option<String>,
    subgenre: Option<String>,
    mood: Option<String>,
    artist: Option<String>,
    tree: bool,
) -> Result<()> {
    if tree {
        println!(
            "{}",
            serde_json::to_string_pretty(&engine.category_structure())?
        );
        return Ok(());
    }

    let (heading, names) = match (genre, subgenre, mood, artist) {
        (None, None, None, None) => ("Genres".to_string(), engine.genres()),
        (Some(g), None, None, None) => (format!("Subgenres of {}", g), engine.subgenres(&g)),
        (Some(g), Some(s), None, None) => {
            (format!("Moods in {} / {}", g, s), engine.moods(&g, &s))
        }
        (Some(g), Some(s), Some(m), None) => {
            (format!("Artists in {} / {} / {}", g, s, m), engine.artists(&g, &s, &m))
        }
        (Some(g), Some(s), Some(m), Some(a)) => {
            let songs = engine.songs_at(&g, &s, &m, &a);
            print_songs(&format!("{} / {} / {} / {}", g, s, m, a), &songs, songs.len());
            return Ok(());
        }
        (None, None, Some(m), None) => {
            let songs = engine.songs_with_mood(&m);
            print_songs(&format!("Songs with mood {}", m), &songs, songs.len());
            return Ok(());
        }
        _ => bail!(
            "browse needs a path prefix: --genre [--subgenre [--mood [--artist]]] or just --mood"
        ),
    };

    println!("{}", heading.bold().blue());
    if names.is_empty() {
        println!("  (nothing here)");
    }
    for name in names {
        println!("{}{}", "• ".green(), name);
    }
    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(engine: &mut PlaylistEngine, count: usize, play: &[usize]) -> Result<()> {
    for &index in play {
        let song = engine
            .play_song(index)
            .with_context(|| format!("Cannot play position {}", index))?;
        println!("  ▶ {}", song);
    }

    let recommendations = engine.recommendations(count);
    print_songs("Recommendations", &recommendations, recommendations.len());
    Ok(())
}

/// Handle the 'stats' command
fn handle_stats(engine: &PlaylistEngine, json: bool) -> Result<()> {
    if json {
        println!("{}", engine.snapshot().to_json()?);
        return Ok(());
    }

    let stats = engine.stats();
    println!(
        "{}",
        format!("Stats for '{}'", engine.playlist_name())
            .bold()
            .blue()
    );
    println!("{}Songs: {}", "• ".green(), stats.total_songs);
    println!(
        "{}Total duration: {}h {:02}m",
        "• ".green(),
        stats.total_duration / 3600,
        (stats.total_duration % 3600) / 60
    );
    println!(
        "{}Average length: {:.1}s",
        "• ".green(),
        stats.average_song_length
    );
    println!("{}Plays: {}", "• ".cyan(), stats.total_play_count);
    println!("{}History size: {}", "• ".cyan(), stats.history_size);
    println!("{}Artists: {}", "• ".cyan(), stats.unique_artists);
    println!("{}Genres: {}", "• ".cyan(), stats.unique_genres);
    println!("Rating distribution:");
    for (rating, count) in &stats.rating_distribution {
        println!("  {} {}", "★".repeat(usize::from(*rating)).yellow(), count);
    }
    Ok(())
}

/// Handle the 'benchmark' command
fn handle_benchmark(engine: &mut PlaylistEngine, rounds: usize) -> Result<()> {
    let mut rng = rand::rng();

    for round in 1..=rounds {
        // Shuffle by random moves so every round starts unsorted
        let len = engine.len();
        if len < 2 {
            bail!("Need at least two songs to benchmark");
        }
        for _ in 0..len {
            let from = rng.random_range(0..len);
            let to = rng.random_range(0..len);
            engine.move_song(from, to)?;
        }

        println!("{}", format!("Round {}", round).bold().blue());
        for result in engine.benchmark_sort() {
            println!(
                "  {:<12} {:>4} songs in {:?}",
                result.algorithm.to_string(),
                result.items,
                result.elapsed
            );
        }
    }
    Ok(())
}

fn print_song_details(engine: &PlaylistEngine, song: &Song) -> Result<()> {
    let path = engine.song_path(&song.id)?;
    println!("{}", song.to_string().bold().blue());
    println!("{}Id: {}", "• ".green(), song.id);
    println!("{}Album: {}", "• ".green(), song.album);
    println!("{}Category: {}", "• ".green(), path.join(" / "));
    println!("{}BPM: {}", "• ".green(), song.bpm);
    println!("{}Rating: {}", "• ".cyan(), song.rating);
    println!("{}Plays: {}", "• ".cyan(), song.play_count);
    Ok(())
}

fn print_songs(heading: &str, songs: &[&Song], limit: usize) {
    println!("{}", format!("{}:", heading).bold().blue());
    for (rank, song) in songs.iter().take(limit).enumerate() {
        println!(
            "{}. {} [{} / {}] {}",
            (rank + 1).to_string().green(),
            song,
            song.genre,
            song.mood,
            "★".repeat(usize::from(song.rating)).yellow()
        );
    }
    if songs.len() > limit {
        println!("  ... and {} more", songs.len() - limit);
    }
}
