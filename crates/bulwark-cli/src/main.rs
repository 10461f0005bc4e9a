//! Bulwark command-line interface.
//!
//! Evaluate shielding jobs from TOML configuration files:
//! ```sh
//! bulwark run job.toml
//! bulwark validate job.toml
//! bulwark materials --json
//! bulwark mu Pb 0.6617
//! ```

mod config;
mod runner;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use bulwark_materials::MaterialCatalog;

#[derive(Parser)]
#[command(name = "bulwark")]
#[command(about = "Bulwark: gamma-ray shield transmission calculator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a shielding job from a TOML configuration file.
    Run {
        /// Path to the job configuration file.
        config: PathBuf,
        /// Output directory (overrides config file setting).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate a configuration file without evaluating it.
    Validate {
        /// Path to the job configuration file.
        config: PathBuf,
    },
    /// List the built-in materials.
    Materials {
        /// Print the full tables as JSON instead of a summary.
        #[arg(long)]
        json: bool,
    },
    /// Attenuation coefficient of one material at one energy.
    Mu {
        /// Material symbol, name, or catalog index.
        material: String,
        /// Photon energy in MeV.
        energy: f64,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config, output } => {
            println!("Bulwark Shield Transmission");
            println!("===========================");
            let job = config::load_config(&config)?;
            println!("Configuration: {}", config.display());

            let result = runner::run_job(&job)?;

            let out_dir = output.unwrap_or_else(|| PathBuf::from(&job.output.directory));

            if job.output.save_csv {
                let csv_path = out_dir.join("transmission.csv");
                runner::write_results_csv(&result, &csv_path, &job)?;
            }

            if job.output.save_json {
                let json_path = out_dir.join("transmission.json");
                runner::write_results_json(&result, &json_path)?;
            }

            let failed = result.failure_count();
            if failed > 0 {
                println!(
                    "Run complete: {} of {} energies evaluated.",
                    result.results.len() - failed,
                    result.results.len()
                );
            } else {
                println!("Run complete.");
            }
            Ok(())
        }
        Commands::Validate { config } => {
            let job = config::load_config(&config)?;
            let catalog = runner::build_catalog(&job)?;
            let total = runner::validate_job(&job, &catalog)?;
            println!(
                "Configuration is valid: {} ({} cm of shield, detector at {} cm)",
                config.display(),
                total,
                job.geometry.distance
            );
            Ok(())
        }
        Commands::Materials { json } => {
            let catalog = MaterialCatalog::reference()?;
            if json {
                println!("{}", runner::materials_json(&catalog)?);
                return Ok(());
            }
            println!("Available materials:");
            println!();
            print!("{}", runner::materials_table(&catalog));
            Ok(())
        }
        Commands::Mu { material, energy } => {
            let catalog = MaterialCatalog::reference()?;
            println!("{}", runner::mu_report(&catalog, &material, energy)?);
            Ok(())
        }
    }
}
