use crate::equilibrium;
use crate::model::{EvolutionParams, GenRecord, GenotypeCounts, GenotypeFreqs};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Threshold on `|p_final - p_init|` above which a run counts as evolved.
pub const EVOLUTION_TOL: f64 = 0.001;

/// Population size below which genetic drift is considered a strong force.
pub const DRIFT_N_POP: usize = 100;

/// Equilibrium classification of a parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquilibriumStatus {
    Evolving,
    #[serde(rename = "In Equilibrium")]
    InEquilibrium,
}

impl EquilibriumStatus {
    /// Classify a parameter set.
    ///
    /// The status is derived from the parameters alone, not from the realized
    /// trajectory: a force too weak to move `p` within the configured number
    /// of generations still counts as evolving.
    pub fn from_params(params: &EvolutionParams) -> Self {
        let evolving = params.sel_coeff > 0.0
            || params.rate_mut > 0.0
            || params.rate_mig > 0.0
            || params.n_pop < DRIFT_N_POP;

        if evolving {
            Self::Evolving
        } else {
            Self::InEquilibrium
        }
    }
}

/// Free-text descriptions of the evolutionary forces, for display next to the
/// numeric results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Indicators {
    pub selection: String,
    pub mutation: String,
    pub migration: String,
    pub drift: String,
}

impl Indicators {
    pub fn from_params(params: &EvolutionParams) -> Self {
        let selection = if params.sel_coeff > 0.0 {
            format!("selection against aa with s = {}", params.sel_coeff)
        } else {
            "no selection".to_string()
        };

        let mutation = if params.rate_mut > 0.0 {
            format!("A to a mutation at rate {} per generation", params.rate_mut)
        } else {
            "no mutation".to_string()
        };

        let migration = if params.rate_mig > 0.0 {
            format!(
                "gene flow at rate {} from a donor population with p = {}",
                params.rate_mig, params.p_mig
            )
        } else {
            "no migration".to_string()
        };

        let drift = if params.n_pop < DRIFT_N_POP {
            format!("small population (N = {}), drift is strong", params.n_pop)
        } else {
            format!("large population (N = {}), drift is weak", params.n_pop)
        };

        Self {
            selection,
            mutation,
            migration,
            drift,
        }
    }
}

/// Summary of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub p_init: f64,
    pub p_final: f64,
    pub has_evolved: bool,
    pub status: EquilibriumStatus,
}

impl Summary {
    /// Summarize a trajectory.
    ///
    /// `p_final` falls back to `p_init` when the trajectory is empty. Note
    /// that `status` and `has_evolved` can disagree: the former looks only at
    /// the parameters, the latter only at the realized trajectory.
    pub fn new(params: &EvolutionParams, records: &[GenRecord]) -> Self {
        let p_final = records.last().map_or(params.p_init, |record| record.p);

        Self {
            p_init: params.p_init,
            p_final,
            has_evolved: (p_final - params.p_init).abs() > EVOLUTION_TOL,
            status: EquilibriumStatus::from_params(params),
        }
    }
}

/// Snapshot of a population at Hardy-Weinberg proportions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquilibriumReport {
    pub p: f64,
    pub q: f64,
    pub genotypes: GenotypeFreqs,
    pub counts: GenotypeCounts,
}

impl EquilibriumReport {
    pub fn new(p: f64, n_pop: usize) -> Self {
        let genotypes = equilibrium::genotype_freqs(p);
        let counts = equilibrium::expected_counts(&genotypes, n_pop);

        Self {
            p,
            q: 1.0 - p,
            genotypes,
            counts,
        }
    }
}

/// Full output of a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionReport {
    pub params: EvolutionParams,
    /// Pre-simulation state at the initial allele frequency.
    pub initial: EquilibriumReport,
    pub records: Vec<GenRecord>,
    pub summary: Summary,
    pub indicators: Indicators,
}

impl EvolutionReport {
    pub fn new(params: EvolutionParams, records: Vec<GenRecord>) -> Self {
        Self {
            initial: EquilibriumReport::new(params.p_init, params.n_pop),
            summary: Summary::new(&params, &records),
            indicators: Indicators::from_params(&params),
            params,
            records,
        }
    }
}

/// Write a report as pretty-printed JSON to a file, or to stdout if no file
/// is given.
pub fn write_json<T: Serialize>(report: &T, file: Option<&Path>) -> Result<()> {
    match file {
        Some(file) => {
            let file_handle =
                File::create(file).with_context(|| format!("failed to create {file:?}"))?;
            let writer = BufWriter::new(file_handle);
            serde_json::to_writer_pretty(writer, report).context("failed to serialize report")?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            serde_json::to_writer_pretty(&mut stdout, report)
                .context("failed to serialize report")?;
            writeln!(stdout)?;
        }
    }

    Ok(())
}
