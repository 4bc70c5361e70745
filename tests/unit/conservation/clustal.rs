//! Unit tests for msa/clustal.rs against the alignment fixture

use orthoscan::msa::read_clustal;
use std::path::{Path, PathBuf};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(format!("tests/data/{}", name))
}

#[test]
fn test_read_species_alignment() {
    let alignment = read_clustal(&fixture("species.aln")).expect("read species fixture");

    assert_eq!(alignment.num_sequences(), 3);
    assert_eq!(alignment.len(), 12);
    assert_eq!(alignment.ids, vec!["Latimeria", "Podarcis", "Lacerta"]);
}

#[test]
fn test_blocks_concatenate_across_the_file() {
    let alignment = read_clustal(&fixture("species.aln")).expect("read species fixture");

    assert_eq!(alignment.rows[0], b"MKT-AVLQSGHE".to_vec());
    assert_eq!(alignment.rows[1], b"MKTQAVLQSGHE".to_vec());
    assert_eq!(alignment.rows[2], b"MKT-AVLNSGH-".to_vec());
}

#[test]
fn test_columns_cut_across_sequences() {
    let alignment = read_clustal(&fixture("species.aln")).expect("read species fixture");

    assert_eq!(alignment.column(0), b"MMM".to_vec());
    assert_eq!(alignment.column(3), b"-Q-".to_vec());
    assert_eq!(alignment.column(11), b"EE-".to_vec());
}
