//! Unit tests for stats/entropy.rs at the column level

use super::super::helpers::assert_approx_eq;
use orthoscan::stats::entropy::{column_entropy, shannon_entropy};

#[test]
fn test_conserved_column_scores_zero() {
    assert_eq!(column_entropy(b"MMMMM", 20, 9.0), 0.0);
}

#[test]
fn test_two_state_column() {
    // {Q: 2, -: 1}: H = ln 3 - (2/3) ln 2 nats
    let expected = 3.0_f64.ln() - (2.0 / 3.0) * 2.0_f64.ln();
    assert_approx_eq(column_entropy(b"Q-Q", 20, 9.0), expected, 1e-12);
}

#[test]
fn test_gaps_count_toward_the_distribution() {
    // A gap is a symbol like any other: an even split is maximally mixed
    assert_approx_eq(column_entropy(b"AA--", 20, 9.0), 2.0_f64.ln(), 1e-12);
}

#[test]
fn test_gap_penalty_applies_above_the_cutoff() {
    // Three gaps with a cutoff of two: penalized
    let penalized = column_entropy(b"A---", 2, 9.0);
    assert_approx_eq(penalized, 9.0 + shannon_entropy(&[1, 3]), 1e-12);

    // Exactly at the cutoff: no penalty
    let at_cutoff = column_entropy(b"AA--", 2, 9.0);
    assert_approx_eq(at_cutoff, 2.0_f64.ln(), 1e-12);
}

#[test]
fn test_more_mixed_columns_score_higher() {
    let conserved = column_entropy(b"LLLLLLLL", 20, 9.0);
    let slightly_mixed = column_entropy(b"LLLLLLLV", 20, 9.0);
    let uniform = column_entropy(b"LVIMFWYC", 20, 9.0);

    assert!(conserved < slightly_mixed);
    assert!(slightly_mixed < uniform);
    assert_approx_eq(uniform, 8.0_f64.ln(), 1e-12);
}
