mod table_app;

use billiards_core::{load_table, run_table, TableConfig};
use clap::{Parser, Subcommand};
use glam::Vec2;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Parser)]
#[command(name = "billiards")]
#[command(about = "Billiards - bouncing discs on a table", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Step a table without a window and print the final bodies
    Run {
        /// Path to a YAML table; the built-in table is used when omitted
        #[arg(short, long)]
        table: Option<PathBuf>,
        /// Number of frames to simulate
        #[arg(short, long, default_value_t = 600)]
        frames: u64,
        /// Pointer press "X,Y" applied before the first frame (repeatable)
        #[arg(short, long, value_parser = parse_point)]
        click: Vec<Vec2>,
    },
    /// Open the interactive table viewer
    Play {
        /// Path to a YAML table, reloaded when the file changes
        #[arg(short, long)]
        table: Option<PathBuf>,
    },
}

#[derive(Debug, Error)]
enum PointParseError {
    #[error("expected X,Y but got '{0}'")]
    Shape(String),
    #[error("invalid coordinate '{0}'")]
    Number(String),
}

fn parse_point(value: &str) -> Result<Vec2, PointParseError> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| PointParseError::Shape(value.to_string()))?;
    let coord = |s: &str| {
        s.trim()
            .parse::<f32>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| PointParseError::Number(s.trim().to_string()))
    };
    Ok(Vec2::new(coord(x)?, coord(y)?))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Run { table, frames, click } => run_file(table.as_deref(), frames, &click),
        Commands::Play { table } => play(table),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn read_table(path: Option<&Path>) -> Result<TableConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(load_table(path)?),
        None => Ok(TableConfig::default()),
    }
}

fn run_file(
    path: Option<&Path>,
    frames: u64,
    clicks: &[Vec2],
) -> Result<(), Box<dyn std::error::Error>> {
    let table = read_table(path)?;
    log::info!("running {} bodies for {} frames", table.bodies.len(), frames);
    let result = run_table(&table, frames, clicks);

    println!("frame = {}", result.frame);
    for body in result.bodies {
        println!(
            "{} {} pos = ({:.3}, {:.3}) vel = ({:.3}, {:.3}) radius = {}",
            body.index, body.color, body.pos.x, body.pos.y, body.vel.x, body.vel.y, body.radius
        );
    }

    Ok(())
}

fn play(path: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let table = read_table(path.as_deref())?;
    let size = table.surface.size();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([size.x.max(320.0) + 40.0, size.y + 160.0])
            .with_title("Billiards"),
        ..Default::default()
    };

    eframe::run_native(
        "Billiards",
        options,
        Box::new(move |cc| Ok(Box::new(table_app::TableApp::new(path, table, cc)))),
    )?;

    Ok(())
}
