//! Main CLI application for the Game of Life simulator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use life_sim::{
    config::{CliOverrides, Settings},
    game_of_life::{create_example_grids, load_grid_from_file, save_grid_to_file},
    simulate_file,
    utils::{ColorOutput, GridFormatter},
    Session,
};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

#[derive(Parser)]
#[command(name = "life_sim")]
#[command(about = "Conway's Game of Life on a finite grid")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a grid and step through generations interactively
    Play {
        /// Grid file (JSON array of "0"/"." rows)
        file: PathBuf,

        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Directory saves are written to (overrides config)
        #[arg(short, long)]
        save_dir: Option<PathBuf>,

        /// Save grids as indented JSON (overrides config)
        #[arg(long)]
        pretty: bool,

        /// Verbose logging
        #[arg(short, long)]
        verbose: bool,
    },

    /// Advance a grid a fixed number of generations and print the result
    Step {
        /// Grid file (JSON array of "0"/"." rows)
        file: PathBuf,

        /// Number of generations to advance
        #[arg(short, long, default_value_t = 1)]
        generations: usize,

        /// Write the resulting grid to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Print row and column numbers around the grid
        #[arg(long)]
        coords: bool,

        /// Save the result as indented JSON (overrides config)
        #[arg(long)]
        pretty: bool,

        /// Verbose logging
        #[arg(short, long)]
        verbose: bool,
    },

    /// Create a default configuration and example patterns
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { file, config, save_dir, pretty, verbose } => {
            let overrides = CliOverrides { save_directory: save_dir, pretty_json: pretty.then_some(true), verbose };
            let settings = load_settings(&config, overrides, &mut std::io::stderr())?;
            init_logging(&settings)?;
            play_command(file, settings)
        }
        Commands::Step { file, generations, output, config, coords, pretty, verbose } => {
            let overrides = CliOverrides { pretty_json: pretty.then_some(true), verbose, ..Default::default() };
            let settings = load_settings(&config, overrides, &mut std::io::stderr())?;
            init_logging(&settings)?;
            step_command(file, generations, output, coords, &settings)
        }
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

/// Load the config file (or defaults, with a warning on `warnings`) and apply CLI overrides
fn load_settings(config_path: &Path, overrides: CliOverrides, warnings: &mut impl Write) -> Result<Settings> {
    let loaded = Settings::from_file_if_exists(config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    let mut settings = match loaded {
        Some(settings) => settings,
        None => {
            writeln!(warnings, "{}", ColorOutput::warning(&format!(
                "Config file {} not found, using defaults", config_path.display()
            )))?;
            Settings::default()
        }
    };

    settings.merge_with_cli(&overrides);
    settings.validate().context("Configuration validation failed")?;
    Ok(settings)
}

fn init_logging(settings: &Settings) -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(settings.log_level()?)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn play_command(file: PathBuf, settings: Settings) -> Result<()> {
    let grid = load_grid_from_file(&file)
        .with_context(|| format!("Failed to load grid from {}", file.display()))?;

    let stdin = std::io::stdin();
    let mut session = Session::new(grid, settings, stdin.lock(), std::io::stdout());
    session.run()?;

    info!(
        generations = session.generation(),
        living = session.grid().living_count(),
        "session finished"
    );
    Ok(())
}

fn step_command(
    file: PathBuf,
    generations: usize,
    output: Option<PathBuf>,
    coords: bool,
    settings: &Settings,
) -> Result<()> {
    if generations > settings.simulation.max_iterations {
        anyhow::bail!(
            "Requested {} generations, but at most {} are allowed",
            generations,
            settings.simulation.max_iterations
        );
    }

    let start_time = Instant::now();
    let grid = simulate_file(&file, generations)
        .with_context(|| format!("Failed to simulate {}", file.display()))?;
    info!(generations, elapsed_ms = start_time.elapsed().as_millis() as u64, "simulation complete");

    if coords {
        print!("{}", GridFormatter::format_grid_with_coords(&grid));
    } else {
        print!("{}", GridFormatter::format_generation(&grid, generations as u64, settings.output.show_generation));
    }

    if let Some(path) = output {
        save_grid_to_file(&grid, &path, settings.output.pretty_json)?;
        println!("{}", ColorOutput::success(&format!("Saved to {}", path.display())));
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_path = directory.join("config/default.yaml");
    if !config_path.exists() || force {
        Settings::default().to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    let patterns_dir = directory.join("patterns");
    create_example_grids(&patterns_dir)
        .context("Failed to create example grids")?;
    println!("Created example patterns in: {}", patterns_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit {}", config_path.display());
    println!("2. Run: life_sim play {}", patterns_dir.join("glider.json").display());

    Ok(())
}
