//! Unit tests for analysis/bbh.rs argument parsing

use clap::{Args, Command, FromArgMatches};
use orthoscan::analysis::bbh::BbhArgs;
use std::path::PathBuf;

fn parse_args(args: &[&str]) -> BbhArgs {
    let mut all_args = vec!["orthoscan".to_string(), "bbh".to_string()];
    all_args.extend(args.iter().map(|s| s.to_string()));

    // Same approach as main.rs: add BbhArgs to a subcommand
    let cmd = Command::new("orthoscan").subcommand(BbhArgs::augment_args(Command::new("bbh")));

    let matches = cmd.get_matches_from(all_args);
    let sub_matches = matches.subcommand_matches("bbh").unwrap();

    BbhArgs::from_arg_matches(sub_matches).unwrap()
}

#[test]
fn test_default_values() {
    let args = parse_args(&["-q", "lacerta.fasta", "-s", "podarcis.fasta"]);

    assert_eq!(args.evalue, 1e-3);
    assert_eq!(args.min_fwd_bitscore, 300.0);
    assert_eq!(args.min_rev_bitscore, 40.0);
    assert_eq!(args.max_target_seqs, 1);
    assert_eq!(args.skip_search, false);
    assert_eq!(args.blastp, "blastp");
    assert_eq!(args.out_dir, PathBuf::from("."));
    assert_eq!(args.verbose, false);
}

#[test]
fn test_query_and_subject_paths() {
    let args = parse_args(&["-q", "lacerta.fasta", "-s", "podarcis.fasta"]);
    assert_eq!(args.query, PathBuf::from("lacerta.fasta"));
    assert_eq!(args.subject, PathBuf::from("podarcis.fasta"));
}

#[test]
fn test_custom_evalue() {
    let args = parse_args(&["-q", "a.fasta", "-s", "b.fasta", "-e", "1e-5"]);
    assert_eq!(args.evalue, 1e-5);
}

#[test]
fn test_custom_bitscore_cutoffs() {
    let args = parse_args(&[
        "-q", "a.fasta", "-s", "b.fasta",
        "--min-fwd-bitscore", "250",
        "--min-rev-bitscore", "30",
    ]);
    assert_eq!(args.min_fwd_bitscore, 250.0);
    assert_eq!(args.min_rev_bitscore, 30.0);
}

#[test]
fn test_skip_search_and_blastp_override() {
    let args = parse_args(&[
        "-q", "a.fasta", "-s", "b.fasta",
        "--skip-search",
        "--blastp", "/opt/blast/bin/blastp",
    ]);
    assert_eq!(args.skip_search, true);
    assert_eq!(args.blastp, "/opt/blast/bin/blastp");
}

#[test]
fn test_custom_max_target_seqs() {
    let args = parse_args(&["-q", "a.fasta", "-s", "b.fasta", "--max-target-seqs", "5"]);
    assert_eq!(args.max_target_seqs, 5);
}

#[test]
fn test_output_directory() {
    let args = parse_args(&["-q", "a.fasta", "-s", "b.fasta", "-o", "results"]);
    assert_eq!(args.out_dir, PathBuf::from("results"));
}
