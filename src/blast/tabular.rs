use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

/// Standard BLAST outfmt 6 column names, in file order
pub const OUTFMT6_COLUMNS: &[&str] = &[
    "qseqid",   // Query sequence ID
    "sseqid",   // Subject sequence ID
    "pident",   // Percentage of identical matches
    "length",   // Alignment length
    "mismatch", // Number of mismatches
    "gapopen",  // Number of gap openings
    "qstart",   // Start of alignment in query
    "qend",     // End of alignment in query
    "sstart",   // Start of alignment in subject
    "send",     // End of alignment in subject
    "evalue",   // Expect value
    "bitscore", // Bit score
];

/// One row of a BLAST `-outfmt 6` tabular file.
///
/// The format is tab-separated, one HSP per line, no header. Field order
/// matches [`OUTFMT6_COLUMNS`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TabularHit {
    pub qseqid: String,
    pub sseqid: String,
    pub pident: f64,
    pub length: usize,
    pub mismatch: usize,
    pub gapopen: usize,
    pub qstart: usize,
    pub qend: usize,
    pub sstart: usize,
    pub send: usize,
    pub evalue: f64,
    pub bitscore: f64,
}

/// Read outfmt 6 rows from any reader.
///
/// `#`-prefixed comment lines (outfmt 7 headers) are skipped. An empty input
/// yields an empty vector, not an error.
pub fn read_outfmt6<R: io::Read>(rdr: R) -> Result<Vec<TabularHit>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .comment(Some(b'#'))
        .from_reader(rdr);

    let mut hits = Vec::new();
    for (idx, row) in reader.deserialize::<TabularHit>().enumerate() {
        let hit = row.with_context(|| format!("Malformed outfmt 6 record {}", idx + 1))?;
        hits.push(hit);
    }
    Ok(hits)
}

/// Read every hit of a `-outfmt 6` file written by `blastp`.
pub fn read_tabular_hits(path: &Path) -> Result<Vec<TabularHit>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open BLAST tabular file {}", path.display()))?;
    read_outfmt6(BufReader::new(file))
        .with_context(|| format!("Failed to parse {}", path.display()))
}
