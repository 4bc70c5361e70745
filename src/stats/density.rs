use std::f64::consts::PI;

/// One histogram bar on a density scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityBin {
    pub start: f64,
    pub end: f64,
    pub density: f64,
}

/// Histogram of `values` normalized so the bar areas sum to 1.
///
/// Bins split the data range evenly; the maximum value lands in the last bin.
/// Empty input or zero bins yield no bars.
pub fn histogram_density(values: &[f64], num_bins: usize) -> Vec<DensityBin> {
    if values.is_empty() || num_bins == 0 {
        return Vec::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let width = if max > min {
        (max - min) / num_bins as f64
    } else {
        1.0
    };

    let mut counts = vec![0usize; num_bins];
    for &v in values {
        let mut idx = ((v - min) / width) as usize;
        if idx >= num_bins {
            idx = num_bins - 1;
        }
        counts[idx] += 1;
    }

    let n = values.len() as f64;
    counts
        .iter()
        .enumerate()
        .map(|(i, &c)| DensityBin {
            start: min + i as f64 * width,
            end: min + (i + 1) as f64 * width,
            density: c as f64 / (n * width),
        })
        .collect()
}

/// Gaussian kernel density estimate of `values`, evaluated at `points`
/// evenly spaced positions spanning the data range padded by three
/// bandwidths on each side (covering the tails of the outermost kernels).
///
/// Bandwidth follows Scott's rule: sigma * n^(-1/5).
pub fn gaussian_kde(values: &[f64], points: usize) -> Vec<(f64, f64)> {
    if values.is_empty() || points == 0 {
        return Vec::new();
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let sigma = variance.sqrt();
    let bandwidth = if sigma > 0.0 { sigma * n.powf(-0.2) } else { 1.0 };

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let lo = min - 3.0 * bandwidth;
    let hi = max + 3.0 * bandwidth;
    let step = if points > 1 {
        (hi - lo) / (points - 1) as f64
    } else {
        0.0
    };

    let norm = n * bandwidth * (2.0 * PI).sqrt();
    (0..points)
        .map(|i| {
            let x = lo + i as f64 * step;
            let y = values
                .iter()
                .map(|&v| {
                    let z = (x - v) / bandwidth;
                    (-0.5 * z * z).exp()
                })
                .sum::<f64>()
                / norm;
            (x, y)
        })
        .collect()
}
