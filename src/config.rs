use crate::model::EvolutionParams;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{fmt::Debug, fs, ops::RangeBounds, path::Path};

/// Simulation configuration parameters.
///
/// Loaded from a TOML file and validated before use.
/// See [`Config::from_file`] for loading.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Starting population.
    pub population: PopulationConfig,

    /// Evolutionary forces. The whole section and any of its fields may be
    /// left out of the file, in which case they default to zero.
    #[serde(default)]
    pub forces: ForcesConfig,

    /// Run settings.
    pub run: RunConfig,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct PopulationConfig {
    /// Initial frequency of the reference allele.
    pub p_init: f64,
    /// Population size.
    pub n_pop: usize,
}

#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ForcesConfig {
    /// Selection coefficient against the homozygous recessive genotype.
    pub sel_coeff: f64,
    /// Per-generation rate of one-way mutation away from the reference allele.
    pub rate_mut: f64,
    /// Per-generation gene flow rate from the donor population.
    pub rate_mig: f64,
    /// Reference-allele frequency of the donor population.
    pub p_mig: f64,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Number of generations to simulate.
    pub n_gen: usize,
}

impl Config {
    /// Load a [`Config`] from a TOML file.
    ///
    /// Performs validation on all parameters before returning.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, deserialized,
    /// or if the configuration values are invalid.
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Self> {
        let file = file.as_ref();
        let contents =
            fs::read_to_string(file).with_context(|| format!("failed to read {file:?}"))?;

        let config: Config = toml::from_str(&contents).context("failed to deserialize config")?;

        config.validate().context("failed to validate config")?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        check_num(self.population.p_init, 0.0..=1.0).context("invalid initial allele frequency")?;
        check_num(self.population.n_pop, 1..1_000_000).context("invalid population size")?;

        check_num(self.run.n_gen, 1..=1_000).context("invalid number of generations")?;

        check_num(self.forces.sel_coeff, 0.0..=1.0).context("invalid selection coefficient")?;
        check_num(self.forces.rate_mut, 0.0..=0.1).context("invalid mutation rate")?;
        check_num(self.forces.rate_mig, 0.0..=1.0).context("invalid migration rate")?;
        check_num(self.forces.p_mig, 0.0..=1.0).context("invalid migrant allele frequency")?;

        Ok(())
    }

    /// Flatten the validated configuration into simulation parameters.
    pub fn params(&self) -> EvolutionParams {
        EvolutionParams {
            p_init: self.population.p_init,
            n_pop: self.population.n_pop,
            n_gen: self.run.n_gen,
            sel_coeff: self.forces.sel_coeff,
            rate_mut: self.forces.rate_mut,
            rate_mig: self.forces.rate_mig,
            p_mig: self.forces.p_mig,
        }
    }
}

fn check_num<T, R>(num: T, range: R) -> Result<()>
where
    T: PartialOrd + Debug,
    R: RangeBounds<T> + Debug,
{
    if !range.contains(&num) {
        bail!("number must be in the range {range:?}, but is {num:?}");
    }
    Ok(())
}
