use super::entropy::SiteEntropy;

/// Positions whose entropy equals the global minimum, in ascending order.
///
/// The comparison is exact equality: every minimal column got its score from
/// the same arithmetic over the same symbol counts, so no tolerance is
/// needed. An empty input yields no positions.
pub fn minimal_positions(sites: &[SiteEntropy]) -> Vec<usize> {
    let minimum = sites
        .iter()
        .map(|s| s.entropy)
        .fold(f64::INFINITY, f64::min);
    let mut positions: Vec<usize> = sites
        .iter()
        .filter(|s| s.entropy == minimum)
        .map(|s| s.position)
        .collect();
    positions.sort_unstable();
    positions
}

/// Group ascending positions into maximal runs of consecutive values.
///
/// Each run becomes an inclusive `(start, end)` range; a lone position maps
/// to `(p, p)`.
pub fn group_contiguous(positions: &[usize]) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();
    let mut iter = positions.iter().copied();
    let first = match iter.next() {
        Some(p) => p,
        None => return ranges,
    };

    let mut start = first;
    let mut prev = first;
    for p in iter {
        if p != prev + 1 {
            ranges.push((start, prev));
            start = p;
        }
        prev = p;
    }
    ranges.push((start, prev));
    ranges
}
