use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use panmixia::config::Config;
use panmixia::engine::Engine;
use panmixia::report::{self, EquilibriumReport, EvolutionReport};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about)]
struct CLI {
    #[arg(long)]
    config: PathBuf,

    /// Write the JSON report to this file instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Report the Hardy-Weinberg genotype distribution for the configured
    /// starting frequency, without simulating.
    Equilibrium,

    /// Simulate the configured number of generations and report the full
    /// trajectory.
    Evolve,
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#?}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = CLI::parse();
    log::info!("{args:#?}");

    let cfg = Config::from_file(&args.config).context("failed to construct cfg")?;
    log::info!("{cfg:#?}");

    match args.command {
        Command::Equilibrium => {
            let rep = EquilibriumReport::new(cfg.population.p_init, cfg.population.n_pop);
            report::write_json(&rep, args.output.as_deref())
                .context("failed to write equilibrium report")?;
        }
        Command::Evolve => {
            let params = cfg.params();
            let records = Engine::new(params).run();
            log::info!("simulated {} generations", records.len());

            let rep = EvolutionReport::new(params, records);
            report::write_json(&rep, args.output.as_deref())
                .context("failed to write evolution report")?;
        }
    }

    Ok(())
}
