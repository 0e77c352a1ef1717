use crate::equilibrium;
use crate::model::{EvolutionParams, GenRecord};

/// Deterministic evolution engine.
///
/// Advances the allele frequency generation by generation, applying the
/// configured forces in a fixed order, and records the full trajectory.
/// The engine is total over its inputs and touches no external state, so it
/// can run concurrently with other engines without synchronization.
pub struct Engine {
    params: EvolutionParams,
}

impl Engine {
    /// Create a new `Engine` for the given parameters.
    pub fn new(params: EvolutionParams) -> Self {
        Self { params }
    }

    /// Run the simulation and return one record per generation.
    ///
    /// Runs exactly `n_gen` generations with no convergence early-exit;
    /// `n_gen = 0` yields an empty vector.
    pub fn run(&self) -> Vec<GenRecord> {
        let mut records = Vec::with_capacity(self.params.n_gen);
        let mut p = self.params.p_init;

        for i_gen in 1..=self.params.n_gen {
            p = self.advance(p);

            records.push(GenRecord {
                i_gen,
                p,
                q: 1.0 - p,
                genotypes: equilibrium::genotype_freqs(p),
            });
        }

        records
    }

    /// Apply one generation of evolutionary forces to the allele frequency.
    ///
    /// The order selection -> mutation -> migration is part of the contract:
    /// reordering the forces changes the resulting trajectory.
    fn advance(&self, p: f64) -> f64 {
        let p = self.apply_selection(p);
        let p = self.apply_mutation(p);
        self.apply_migration(p)
    }

    fn apply_selection(&self, p: f64) -> f64 {
        let sel_coeff = self.params.sel_coeff;
        if sel_coeff <= 0.0 {
            return p;
        }

        // Viability selection against the recessive homozygote: relative
        // fitness 1 - s for aa, 1 for AA and Aa.
        let freqs = equilibrium::genotype_freqs(p);
        let w_mean = freqs.hom_dom + freqs.het + freqs.hom_rec * (1.0 - sel_coeff);

        let hom_dom = freqs.hom_dom / w_mean;
        let het = freqs.het / w_mean;

        // Gene counting: homozygotes carry two copies, heterozygotes one.
        hom_dom + het / 2.0
    }

    fn apply_mutation(&self, p: f64) -> f64 {
        let rate_mut = self.params.rate_mut;
        if rate_mut <= 0.0 {
            return p;
        }

        // One-way conversion of the reference allele.
        p * (1.0 - rate_mut)
    }

    fn apply_migration(&self, p: f64) -> f64 {
        let rate_mig = self.params.rate_mig;
        if rate_mig <= 0.0 {
            return p;
        }

        // Linear gene flow toward the donor population's frequency.
        p * (1.0 - rate_mig) + self.params.p_mig * rate_mig
    }
}
