//! Weft CLI — simulation, benchmarking, and export.

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "weft")]
#[command(version, about = "Weft — XPBD cloth simulation engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scenario with parameters from a JSON config file.
    Simulate {
        /// Path to the simulation config (JSON).
        #[arg(short, long, default_value = "simulation.json")]
        config: String,

        /// Scenario to drive with the config.
        #[arg(short, long, default_value = "grid_drop")]
        scenario: String,

        /// Number of frames to simulate.
        #[arg(short, long, default_value_t = 120)]
        frames: u32,
    },

    /// Run the benchmark suite.
    Bench {
        /// Which scenario to run (grid_drop, hanging_sheet, wind_sheet,
        /// sphere_drape, all).
        #[arg(short, long, default_value = "all")]
        scenario: String,

        /// Output CSV file path. Prints to stdout when omitted.
        #[arg(short, long)]
        output: Option<String>,

        /// Material preset name (cotton, silk, denim, canvas, chiffon).
        #[arg(short, long)]
        material: Option<String>,
    },

    /// Run a scenario and export its animation.
    Export {
        /// Which scenario to run.
        #[arg(short, long, default_value = "hanging_sheet")]
        scenario: String,

        /// Output path (.json frame archive, or an .obj written per frame).
        #[arg(short, long, default_value = "simulation.json")]
        output: String,

        /// Number of frames to simulate.
        #[arg(short, long, default_value_t = 120)]
        frames: u32,
    },

    /// Validate a simulation config file.
    Validate {
        /// Path to the config file.
        path: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Simulate {
            config,
            scenario,
            frames,
        } => commands::simulate(&config, &scenario, frames),
        Commands::Bench {
            scenario,
            output,
            material,
        } => commands::bench(&scenario, output.as_deref(), material.as_deref()),
        Commands::Export {
            scenario,
            output,
            frames,
        } => commands::export(&scenario, &output, frames),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
