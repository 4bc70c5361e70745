use anyhow::{Context, Result};
use std::path::Path;

use crate::hits::BbhPair;
use crate::stats::entropy::SiteEntropy;

/// Column names of the BBH candidate/ortholog CSVs, in file order
pub const PAIR_COLUMNS: &[&str] = &[
    "query",
    "subject",
    "identity",
    "length",
    "fwd_evalue",
    "fwd_norm_bitscore",
    "rev_evalue",
    "rev_norm_bitscore",
];

/// Column names of the entropy ranking CSV, in file order
pub const ENTROPY_COLUMNS: &[&str] = &["rank", "position", "entropy"];

/// Write BBH pairs with both directions' statistics.
///
/// The header row is always written, so an empty pair list still yields a
/// valid one-line CSV.
pub fn write_pairs_csv(path: &Path, pairs: &[BbhPair]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    writer.write_record(PAIR_COLUMNS)?;
    for pair in pairs {
        writer.serialize(pair)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the entropy ranking, one row per site, most conserved first.
///
/// `ranked` is expected in ranking order; the rank column is its index.
pub fn write_entropy_csv(path: &Path, ranked: &[SiteEntropy]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    writer.write_record(ENTROPY_COLUMNS)?;
    for (rank, site) in ranked.iter().enumerate() {
        writer.serialize((rank, site.position, site.entropy))?;
    }
    writer.flush()?;
    Ok(())
}
