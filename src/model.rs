//! Core data types of the evolution model.

use serde::{Deserialize, Serialize};

/// Hardy-Weinberg genotype frequencies at a single biallelic locus.
///
/// Always derived from an allele frequency (see [`crate::equilibrium`]) and
/// never mutated in place. The three fields sum to 1.0 up to floating-point
/// rounding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenotypeFreqs {
    /// Frequency of the homozygous dominant genotype (`p^2`).
    #[serde(rename = "AA")]
    pub hom_dom: f64,
    /// Frequency of the heterozygous genotype (`2pq`).
    #[serde(rename = "Aa")]
    pub het: f64,
    /// Frequency of the homozygous recessive genotype (`q^2`).
    #[serde(rename = "aa")]
    pub hom_rec: f64,
}

/// Expected genotype counts in a population of fixed size.
///
/// Each count is rounded independently, so the three counts need not add up
/// to the population size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenotypeCounts {
    #[serde(rename = "AA")]
    pub hom_dom: u64,
    #[serde(rename = "Aa")]
    pub het: u64,
    #[serde(rename = "aa")]
    pub hom_rec: u64,
}

/// Parameters of a single simulation run.
///
/// Built once from a validated [`crate::config::Config`] and never mutated
/// mid-run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvolutionParams {
    /// Initial frequency of the reference allele.
    pub p_init: f64,
    /// Population size.
    pub n_pop: usize,
    /// Number of generations to simulate.
    pub n_gen: usize,

    /// Selection coefficient against the homozygous recessive genotype.
    pub sel_coeff: f64,
    /// Per-generation rate of one-way mutation away from the reference allele.
    pub rate_mut: f64,
    /// Per-generation gene flow rate from the donor population.
    pub rate_mig: f64,
    /// Reference-allele frequency of the donor population.
    pub p_mig: f64,
}

/// Record of the population at a single generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenRecord {
    /// One-based generation index.
    pub i_gen: usize,

    /// Reference allele frequency after all forces were applied.
    pub p: f64,
    /// Alternate allele frequency (`1 - p`).
    pub q: f64,

    /// Genotype distribution at the new allele frequency.
    pub genotypes: GenotypeFreqs,
}
