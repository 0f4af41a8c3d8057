//! Diversity index family
//!
//! Every index is computed from the proportions `q_g = p_g / S` of one cell,
//! where `p_g` is the cover of group `g` and `S` the total living cover.
//! A cell whose total cover is at or below the zero-cover tolerance has no
//! diversity and maps to `0.0` under every index.

use reefmetrics_core::CellKernel;

/// Total cover at or below which a cell counts as bare substrate
pub const DEFAULT_ZERO_COVER_TOLERANCE: f64 = 1e-12;

/// Round-off allowed above 1 for single values and per-cell sums
pub const DEFAULT_COVER_SLACK: f64 = 1e-9;

/// Which diversity index a kernel writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiversityIndex {
    /// Shannon entropy `H = -sum(q * ln q)` in nats
    #[default]
    Shannon,
    /// Gini-Simpson index `1 - sum(q^2)`
    Simpson,
    /// Pielou evenness `H / ln(n_groups)`
    PielouEvenness,
}

impl DiversityIndex {
    /// Evaluate the index on the proportions of one cell
    pub fn evaluate_proportions<I>(&self, proportions: I, n_groups: usize) -> f64
    where
        I: IntoIterator<Item = f64>,
    {
        match self {
            DiversityIndex::Shannon => shannon_entropy(proportions),
            DiversityIndex::Simpson => simpson_diversity(proportions),
            DiversityIndex::PielouEvenness => pielou_evenness(proportions, n_groups),
        }
    }
}

/// A configured index: the formula plus its zero-cover tolerance
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct IndexKernel {
    pub index: DiversityIndex,
    pub zero_cover_tolerance: f64,
}

impl CellKernel for IndexKernel {
    fn name(&self) -> &'static str {
        match self.index {
            DiversityIndex::Shannon => "shannon",
            DiversityIndex::Simpson => "simpson",
            DiversityIndex::PielouEvenness => "pielou_evenness",
        }
    }

    fn evaluate<I>(&self, groups: I) -> f64
    where
        I: IntoIterator<Item = f64>,
        I::IntoIter: Clone,
    {
        cell_diversity(self.index, groups, self.zero_cover_tolerance)
    }
}

/// Diversity of one cell from its raw group cover.
///
/// Sums the cover in ascending group order, returns `0.0` when the total is
/// at or below `zero_cover_tolerance`, and otherwise normalizes each value by
/// the total before evaluating `index`. The same summation order is used
/// whatever thread evaluates the cell.
pub fn cell_diversity<I>(index: DiversityIndex, groups: I, zero_cover_tolerance: f64) -> f64
where
    I: IntoIterator<Item = f64>,
    I::IntoIter: Clone,
{
    let groups = groups.into_iter();
    let (total, n_groups) = groups
        .clone()
        .fold((0.0, 0usize), |(sum, n), p| (sum + p, n + 1));

    if total <= zero_cover_tolerance {
        return 0.0;
    }

    index.evaluate_proportions(groups.map(|p| p / total), n_groups)
}

/// Shannon entropy `H' = -sum(q * ln(q))` in nats.
///
/// Zero proportions are skipped rather than contributing `0 * ln(0)`.
pub fn shannon_entropy<I>(proportions: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut h = 0.0;
    for q in proportions {
        if q > 0.0 {
            h -= q * q.ln();
        }
    }
    h
}

/// Gini-Simpson index `1 - sum(q^2)`.
///
/// Range [0, 1): 0 for a monoculture, approaching 1 as cover spreads evenly
/// over many groups.
pub fn simpson_diversity<I>(proportions: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let d: f64 = proportions.into_iter().map(|q| q * q).sum();
    1.0 - d
}

/// Pielou evenness `J = H' / ln(n_groups)`, in [0, 1].
///
/// Undefined for fewer than two groups; returns 0 there.
pub fn pielou_evenness<I>(proportions: I, n_groups: usize) -> f64
where
    I: IntoIterator<Item = f64>,
{
    if n_groups < 2 {
        return 0.0;
    }
    shannon_entropy(proportions) / (n_groups as f64).ln()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const EPS: f64 = DEFAULT_ZERO_COVER_TOLERANCE;

    #[test]
    fn test_shannon_two_equal_groups() {
        let h = cell_diversity(DiversityIndex::Shannon, [0.5, 0.5, 0.0], EPS);
        assert_abs_diff_eq!(h, 2f64.ln(), epsilon = 1e-12);
    }

    #[test]
    fn test_shannon_monoculture_is_zero() {
        let h = cell_diversity(DiversityIndex::Shannon, [0.0, 0.8, 0.0], EPS);
        assert_eq!(h, 0.0);
    }

    #[test]
    fn test_zero_cover_is_zero_for_every_index() {
        for index in [
            DiversityIndex::Shannon,
            DiversityIndex::Simpson,
            DiversityIndex::PielouEvenness,
        ] {
            assert_eq!(cell_diversity(index, [0.0, 0.0, 0.0], EPS), 0.0);
            assert_eq!(cell_diversity(index, [1e-14, 0.0], EPS), 0.0);
        }
    }

    #[test]
    fn test_bare_substrate_deficit_is_normalized_away() {
        // 40% living cover split evenly is as diverse as 100% split evenly
        let partial = cell_diversity(DiversityIndex::Shannon, [0.2, 0.2], EPS);
        let full = cell_diversity(DiversityIndex::Shannon, [0.5, 0.5], EPS);
        assert_abs_diff_eq!(partial, full, epsilon = 1e-12);
    }

    #[test]
    fn test_shannon_known_value() {
        // q = (0.5, 0.25, 0.25): H = 1.5 ln 2
        let h = shannon_entropy([0.5, 0.25, 0.25]);
        assert_abs_diff_eq!(h, 1.5 * 2f64.ln(), epsilon = 1e-12);
    }

    #[test]
    fn test_simpson_values() {
        assert_abs_diff_eq!(simpson_diversity([1.0, 0.0]), 0.0);
        assert_abs_diff_eq!(simpson_diversity([0.25; 4]), 0.75, epsilon = 1e-12);
        let s = cell_diversity(DiversityIndex::Simpson, [0.3, 0.3], EPS);
        assert_abs_diff_eq!(s, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_pielou_even_is_one() {
        let j = cell_diversity(DiversityIndex::PielouEvenness, [0.2; 5], EPS);
        assert_abs_diff_eq!(j, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_pielou_single_group_is_zero() {
        assert_eq!(pielou_evenness([1.0], 1), 0.0);
        assert_eq!(cell_diversity(DiversityIndex::PielouEvenness, [0.7], EPS), 0.0);
    }

    #[test]
    fn test_kernel_trait_matches_free_function() {
        let kernel = IndexKernel {
            index: DiversityIndex::Simpson,
            zero_cover_tolerance: EPS,
        };
        assert_eq!(kernel.name(), "simpson");
        assert_eq!(
            kernel.evaluate([0.1, 0.3, 0.2]),
            cell_diversity(DiversityIndex::Simpson, [0.1, 0.3, 0.2], EPS)
        );
    }
}
