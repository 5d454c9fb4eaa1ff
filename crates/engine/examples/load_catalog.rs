use engine::{PlaylistEngine, load_sample_catalog};
use sorting::{Algorithm, SortKey};
use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Loading sample catalog...\n");

    let mut engine = PlaylistEngine::new("Sample Catalog");
    let start = Instant::now();
    let report = load_sample_catalog(&mut engine);
    let elapsed = start.elapsed();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Songs: {}", report.loaded);
    println!("Rated: {}", report.rated);
    println!("Skipped: {}", report.skipped);
    println!(
        "\nPerformance: {:.0} songs/second",
        report.loaded as f64 / elapsed.as_secs_f64()
    );

    let start = Instant::now();
    engine.sort_playlist(SortKey::DurationDesc, Algorithm::Quick);
    println!("\nSorted by duration in {:?}", start.elapsed());

    for song in engine.current_playlist().iter().take(3) {
        println!("  {}", song);
    }

    println!("\n{}", engine.stats().to_json()?);
    Ok(())
}
