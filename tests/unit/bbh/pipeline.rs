//! End-to-end tests for the BBH pipeline over pre-computed search results
//!
//! `--skip-search` lets the pipeline run against the outfmt 6 fixtures
//! without a blastp binary on PATH.

use super::super::helpers::write_fasta;
use orthoscan::analysis::bbh::{run, BbhArgs};
use std::fs;
use std::path::{Path, PathBuf};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(format!("tests/data/{}", name))
}

/// Lay out FASTA inputs and pre-computed tab files in `dir`.
fn stage_inputs(dir: &Path) -> (PathBuf, PathBuf) {
    let query = dir.join("lacerta.fasta");
    let subject = dir.join("podarcis.fasta");
    write_fasta(&query, &[("L1", 100), ("L2", 50), ("L3", 80), ("L4", 10)]);
    write_fasta(&subject, &[("P1", 100), ("P2", 50), ("P3", 80), ("P4", 10)]);

    fs::copy(fixture("lacerta_podarcis.tab"), dir.join("lacerta_podarcis.tab"))
        .expect("stage forward tab");
    fs::copy(fixture("podarcis_lacerta.tab"), dir.join("podarcis_lacerta.tab"))
        .expect("stage reverse tab");
    (query, subject)
}

fn args_for(dir: &Path, query: PathBuf, subject: PathBuf) -> BbhArgs {
    BbhArgs {
        query,
        subject,
        out_dir: dir.to_path_buf(),
        evalue: 1e-3,
        min_fwd_bitscore: 4.0,
        min_rev_bitscore: 2.0,
        max_target_seqs: 1,
        skip_search: true,
        blastp: "blastp".to_string(),
        verbose: false,
    }
}

fn read_rows(path: &Path) -> (Vec<String>, Vec<csv::StringRecord>) {
    let mut reader = csv::Reader::from_path(path).expect("open CSV");
    let header = reader
        .headers()
        .expect("CSV header")
        .iter()
        .map(|f| f.to_string())
        .collect();
    let rows = reader.records().map(|r| r.expect("CSV row")).collect();
    (header, rows)
}

#[test]
fn test_pipeline_writes_candidates_and_orthologs() {
    let dir = tempfile::tempdir().unwrap();
    let (query, subject) = stage_inputs(dir.path());

    run(args_for(dir.path(), query, subject)).expect("pipeline run");

    // All four reciprocal pairs, best forward score first
    let (header, rows) = read_rows(&dir.path().join("BBH_lacerta_podarcis.csv"));
    assert_eq!(
        header,
        vec![
            "query",
            "subject",
            "identity",
            "length",
            "fwd_evalue",
            "fwd_norm_bitscore",
            "rev_evalue",
            "rev_norm_bitscore"
        ]
    );
    assert_eq!(rows.len(), 4);
    let order: Vec<&str> = rows.iter().map(|r| &r[0]).collect();
    assert_eq!(order, vec!["L1", "L2", "L3", "L4"]);

    // The two L1-P1 HSPs collapse to best scores and worst E-values
    assert_eq!(&rows[0][1], "P1");
    assert_eq!(rows[0][2].parse::<f64>().unwrap(), 95.0);
    assert_eq!(rows[0][3].parse::<usize>().unwrap(), 100);
    assert_eq!(rows[0][4].parse::<f64>().unwrap(), 1e-20);
    assert_eq!(rows[0][5].parse::<f64>().unwrap(), 4.8);
    assert_eq!(rows[0][6].parse::<f64>().unwrap(), 1e-45);
    assert_eq!(rows[0][7].parse::<f64>().unwrap(), 2.5);

    // L3-P3 fails the E-value filter, L4-P4 the score filter
    let (_, orthologs) = read_rows(&dir.path().join("BBH_lacerta_podarcis_orthologs.csv"));
    assert_eq!(orthologs.len(), 2);
    assert_eq!(&orthologs[0][0], "L1");
    assert_eq!(&orthologs[1][0], "L2");
}

#[test]
fn test_pipeline_writes_density_plot() {
    let dir = tempfile::tempdir().unwrap();
    let (query, subject) = stage_inputs(dir.path());

    run(args_for(dir.path(), query, subject)).expect("pipeline run");

    let png = dir.path().join("density_norm_bitscore.png");
    assert!(png.exists());
    assert!(fs::metadata(&png).unwrap().len() > 0);
}

#[test]
fn test_pipeline_empty_search_results() {
    let dir = tempfile::tempdir().unwrap();
    let (query, subject) = stage_inputs(dir.path());
    // Overwrite the staged tab files with empty search output
    fs::write(dir.path().join("lacerta_podarcis.tab"), "").unwrap();
    fs::write(dir.path().join("podarcis_lacerta.tab"), "").unwrap();

    run(args_for(dir.path(), query, subject)).expect("pipeline run");

    let (header, rows) = read_rows(&dir.path().join("BBH_lacerta_podarcis.csv"));
    assert_eq!(header[0], "query");
    assert!(rows.is_empty());
    let (_, orthologs) = read_rows(&dir.path().join("BBH_lacerta_podarcis_orthologs.csv"));
    assert!(orthologs.is_empty());
}

#[test]
fn test_skip_search_requires_existing_tab_files() {
    let dir = tempfile::tempdir().unwrap();
    let query = dir.path().join("lacerta.fasta");
    let subject = dir.path().join("podarcis.fasta");
    write_fasta(&query, &[("L1", 100)]);
    write_fasta(&subject, &[("P1", 100)]);

    let err = run(args_for(dir.path(), query, subject)).unwrap_err();
    assert!(err.to_string().contains("not found"));
}
