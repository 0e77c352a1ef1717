//! Hardy-Weinberg equilibrium calculator.

use crate::model::{GenotypeCounts, GenotypeFreqs};

/// Compute the Hardy-Weinberg genotype frequencies for an allele frequency.
///
/// With `q = 1 - p` the frequencies are `p^2`, `2pq` and `q^2`, which sum to
/// 1.0 by algebraic identity; no normalization is applied. The caller is
/// responsible for keeping `p` in `[0, 1]`: an out-of-range `p` silently
/// yields out-of-range frequencies that still sum to 1.
pub fn genotype_freqs(p: f64) -> GenotypeFreqs {
    let q = 1.0 - p;
    GenotypeFreqs {
        hom_dom: p * p,
        het: 2.0 * p * q,
        hom_rec: q * q,
    }
}

/// Compute the expected genotype counts in a population of `n_pop` individuals.
///
/// Each frequency is multiplied by `n_pop` and rounded to the nearest integer
/// independently (half up), so the counts need not sum to `n_pop` exactly.
pub fn expected_counts(freqs: &GenotypeFreqs, n_pop: usize) -> GenotypeCounts {
    let n_pop = n_pop as f64;
    GenotypeCounts {
        hom_dom: (freqs.hom_dom * n_pop).round() as u64,
        het: (freqs.het * n_pop).round() as u64,
        hom_rec: (freqs.hom_rec * n_pop).round() as u64,
    }
}
