use crate::hits::BbhPair;

/// Drop pairs whose E-value exceeds `max_evalue` in either direction.
///
/// Boundary values survive: `evalue == max_evalue` is kept.
pub fn filter_significant(pairs: Vec<BbhPair>, max_evalue: f64) -> Vec<BbhPair> {
    pairs
        .into_iter()
        .filter(|p| p.fwd_evalue <= max_evalue && p.rev_evalue <= max_evalue)
        .collect()
}

/// Drop pairs below the per-direction normalized bit score cutoffs.
///
/// Boundary values survive: a score equal to its cutoff is kept.
pub fn filter_quality(pairs: Vec<BbhPair>, min_fwd: f64, min_rev: f64) -> Vec<BbhPair> {
    pairs
        .into_iter()
        .filter(|p| p.fwd_norm_bitscore >= min_fwd && p.rev_norm_bitscore >= min_rev)
        .collect()
}
