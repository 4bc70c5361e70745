use rustc_hash::FxHashMap;

/// Gap character in aligned sequences
pub const GAP: u8 = b'-';

/// Entropy score of one alignment column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteEntropy {
    /// Zero-based column position in the alignment
    pub position: usize,
    /// Shannon entropy in nats, plus the gap penalty where it applies
    pub entropy: f64,
}

/// Shannon entropy of a count distribution.
///
/// Formula: H = -sum(p_i * ln(p_i)) with p_i = c_i / sum(c), in nats.
/// Zero counts contribute nothing; an empty distribution has zero entropy.
pub fn shannon_entropy(counts: &[usize]) -> f64 {
    let total: usize = counts.iter().sum();
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    counts
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = c as f64 / total;
            -p * p.ln()
        })
        .sum()
}

/// Conservation score of one alignment column.
///
/// The entropy is taken over the column's symbol counts with gaps counted as
/// a symbol of their own. Columns holding more than `gap_cutoff` gap
/// characters additionally get `gap_penalty` added, pushing heavily gapped
/// columns to the unconserved end of the ranking.
pub fn column_entropy(column: &[u8], gap_cutoff: usize, gap_penalty: f64) -> f64 {
    let mut counts: FxHashMap<u8, usize> = FxHashMap::default();
    for &symbol in column {
        *counts.entry(symbol).or_insert(0) += 1;
    }
    let gaps = counts.get(&GAP).copied().unwrap_or(0);
    let counts: Vec<usize> = counts.values().copied().collect();

    let entropy = shannon_entropy(&counts);
    if gaps > gap_cutoff {
        gap_penalty + entropy
    } else {
        entropy
    }
}
