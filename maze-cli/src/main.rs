use maze_core::{RoomTypeTable, draw_svg, draw_text, generate, generate_seeded};

use std::{
    fs::{create_dir as create_generated_dir, write as write_file},
    path::{Path, PathBuf},
};

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use svg::save as save_as_svg;
use tracing::Level;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
enum OutputFormat {
    #[default]
    Text,
    Svg,
    Json,
}

#[derive(Parser, Debug)]
#[command(version, about = "Generates grid mazes with weighted room types", long_about = None)]
struct Args {
    /// Number of columns in the maze
    #[arg(short = 'W', long, default_value_t = 10)]
    width: u32,

    /// Number of rows in the maze
    #[arg(short = 'H', long, default_value_t = 10)]
    height: u32,

    /// Room type and its weight, may be repeated. Replaces the default table
    #[arg(short, long = "room", value_name = "NAME=WEIGHT", value_parser = parse_room)]
    rooms: Vec<(String, u32)>,

    /// Seed for a reproducible maze
    #[arg(short, long)]
    seed: Option<u64>,

    #[arg(short, long, default_value_t, value_enum)]
    format: OutputFormat,

    /// Write the maze here instead of stdout (or `generated/` for svg)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Accept room weights that do not add up to 100
    #[arg(long)]
    lenient: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn parse_room(raw: &str) -> Result<(String, u32), String> {
    let (name, weight) = raw
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=WEIGHT, got \"{}\"", raw))?;

    let name = name.trim();
    if name.is_empty() {
        return Err("room name cannot be empty".to_string());
    }

    let weight = weight
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("invalid weight \"{}\": {}", weight, e))?;

    Ok((name.to_string(), weight))
}

fn build_table(rooms: &[(String, u32)]) -> anyhow::Result<RoomTypeTable> {
    if rooms.is_empty() {
        return Ok(RoomTypeTable::default());
    }

    RoomTypeTable::from_weights(rooms.iter().cloned()).context("Invalid room type table")
}

fn generated_svg_path() -> anyhow::Result<PathBuf> {
    let now = std::time::SystemTime::now()
        .duration_since(std::time::SystemTime::UNIX_EPOCH)
        .context("System clock is set before the UNIX epoch")?;

    if !Path::new("generated")
        .try_exists()
        .context("Error checking for 'generated' directory")?
    {
        create_generated_dir("generated").context("Failed to create 'generated' directory")?;
        println!("Directory 'generated' created.");
    }

    Ok(PathBuf::from(format!("generated/{}-maze.svg", now.as_millis())))
}

fn emit(output: Option<&Path>, contents: String) -> anyhow::Result<()> {
    match output {
        Some(path) => write_file(path, contents)
            .with_context(|| format!("Failed to write maze to {}", path.display())),
        None => {
            println!("{}", contents);
            Ok(())
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    let table = build_table(&args.rooms)?;

    if !args.lenient && !table.has_expected_total() {
        bail!(
            "Room type weights must total exactly 100, currently {}",
            table.total_weight()
        );
    }

    let maze = match args.seed {
        Some(seed) => generate_seeded(args.width, args.height, &table, seed)?,
        None => generate(args.width, args.height, &table)?,
    };

    tracing::info!(
        "Generated {}x{} maze starting at {} with {} exit/s",
        maze.width(),
        maze.height(),
        maze.start(),
        maze.exits().len()
    );
    for exit in maze.exits() {
        tracing::debug!("Exit at {}", exit);
    }

    match args.format {
        OutputFormat::Text => emit(args.output.as_deref(), draw_text(&maze)),
        OutputFormat::Json => emit(
            args.output.as_deref(),
            serde_json::to_string_pretty(&maze).context("Failed to serialize maze")?,
        ),
        OutputFormat::Svg => {
            let path = match args.output {
                Some(path) => path,
                None => generated_svg_path()?,
            };

            println!("Saving maze as SVG to: {}", path.display());

            save_as_svg(&path, &draw_svg(&maze))
                .with_context(|| format!("Failed to save SVG file to {}", path.display()))
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_room() {
        assert_eq!(parse_room("Combat=15"), Ok(("Combat".to_string(), 15)));
        assert_eq!(
            parse_room(" Secret Room = 5 "),
            Ok(("Secret Room".to_string(), 5))
        );
        assert_eq!(parse_room("a=b=3"), Ok(("a=b".to_string(), 3)));

        assert!(parse_room("Combat").is_err());
        assert!(parse_room("=10").is_err());
        assert!(parse_room("Combat=-1").is_err());
        assert!(parse_room("Combat=ten").is_err());
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["maze-cli"]).unwrap();

        assert_eq!(args.width, 10);
        assert_eq!(args.height, 10);
        assert!(args.rooms.is_empty());
        assert_eq!(args.seed, None);
        assert_eq!(args.format, OutputFormat::Text);
        assert!(!args.lenient);
    }

    #[test]
    fn test_args_repeated_rooms() {
        let args = Args::try_parse_from([
            "maze-cli", "-W", "4", "-H", "2", "-r", "Hall=60", "--room", "Vault=40", "-f", "json",
            "-s", "9",
        ])
        .unwrap();

        assert_eq!(args.width, 4);
        assert_eq!(args.height, 2);
        assert_eq!(
            args.rooms,
            vec![("Hall".to_string(), 60), ("Vault".to_string(), 40)]
        );
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.seed, Some(9));
    }

    #[test]
    fn test_build_table() {
        let table = build_table(&[]).unwrap();
        assert_eq!(table, RoomTypeTable::default());

        let table = build_table(&[("Hall".to_string(), 60), ("Vault".to_string(), 30)]).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.total_weight(), 90);
        assert!(!table.has_expected_total());

        assert!(build_table(&[("Hall".to_string(), 101)]).is_err());
    }
}
