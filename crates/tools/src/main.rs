use std::fs;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use cavegen_core::{GenerationConfig, Map, Tile, generate_map};
use clap::Parser;

/// Generate one cave map and print it as ASCII with summary stats.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON generation config; flags below override its fields
    #[arg(short, long)]
    config: Option<String>,
    #[arg(long)]
    width: Option<usize>,
    #[arg(long)]
    height: Option<usize>,
    #[arg(long)]
    fill_percent: Option<u32>,
    #[arg(long)]
    steps: Option<u32>,
    #[arg(long)]
    min_cave_size: Option<usize>,
    /// Fixed seed; when omitted the config decides, and a fresh seed is
    /// drawn if the config asks for one
    #[arg(short, long)]
    seed: Option<u64>,
    /// Skip the tile dump and print stats only
    #[arg(long, default_value_t = false)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            let data = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {path}"))?;
            serde_json::from_str(&data)
                .with_context(|| format!("Failed to parse config file: {path}"))?
        }
        None => GenerationConfig::default(),
    };

    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(fill_percent) = args.fill_percent {
        config.fill_percent = fill_percent;
    }
    if let Some(steps) = args.steps {
        config.steps = steps;
    }
    if let Some(min_cave_size) = args.min_cave_size {
        config.min_cave_size = min_cave_size;
    }
    match args.seed {
        Some(seed) => {
            config.seed = seed;
            config.use_random_seed = false;
        }
        None if config.use_random_seed => {
            config.seed = draw_seed();
        }
        None => {}
    }

    let map = generate_map(config)
        .map_err(|e| anyhow::anyhow!("Invalid generation config: {e}"))?;

    if !args.quiet {
        print!("{}", render_ascii(&map));
    }

    let (floor, wall) = map.tile_counts();
    println!("Generated {}x{} map with seed {}", map.width(), map.height(), config.seed);
    println!("Floor tiles: {floor}, Wall tiles: {wall}");
    println!("Fingerprint: {:016x}", map.fingerprint());

    Ok(())
}

fn render_ascii(map: &Map) -> String {
    let mut out = String::with_capacity((map.width() + 1) * map.height());
    for y in 0..map.height() as i32 {
        for x in 0..map.width() as i32 {
            out.push(match map.get(x, y) {
                Tile::Wall => '#',
                Tile::Floor => '.',
            });
        }
        out.push('\n');
    }
    out
}

/// Seed drawing lives out here on purpose: the core never reads ambient
/// entropy. Matches the original tool's 0..99999 seed range.
fn draw_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos())
        .unwrap_or_default();
    (nanos as u64) % 99_999
}
