//! Best bidirectional hits between two proteomes.
//!
//! Pipeline, each stage reported on stderr:
//! 1. Run `blastp` forward (A vs B) and reverse (B vs A), `-outfmt 6`
//! 2. Parse both tab files and normalize bit scores by query length
//! 3. Join reciprocal hits, aggregating duplicate HSPs by per-column max
//! 4. Write the ranked candidates CSV and the score density panels
//! 5. Filter by E-value, then by normalized bit score
//! 6. Write the orthologs CSV

use anyhow::{bail, Context, Result};
use bio::io::fasta;
use clap::Args;
use rustc_hash::FxHashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::blast::runner::{run_blastp, BlastpJob};
use crate::blast::tabular::read_tabular_hits;
use crate::hits::{normalize_hits, reciprocal_pairs, sort_pairs_by_forward_score};
use crate::post::filter::{filter_quality, filter_significant};
use crate::report::csv::write_pairs_csv;
use crate::report::plot::plot_score_densities;

#[derive(Args, Debug)]
pub struct BbhArgs {
    /// Proteome A, FASTA (forward query)
    #[arg(short, long)]
    pub query: PathBuf,
    /// Proteome B, FASTA (forward database)
    #[arg(short, long)]
    pub subject: PathBuf,
    /// Output directory for tab files, CSVs and the density plot
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,
    /// Maximum E-value in either direction
    #[arg(short, long, default_value_t = 1e-3)]
    pub evalue: f64,
    /// Minimum forward normalized bit score
    #[arg(long, default_value_t = 300.0)]
    pub min_fwd_bitscore: f64,
    /// Minimum reverse normalized bit score
    #[arg(long, default_value_t = 40.0)]
    pub min_rev_bitscore: f64,
    /// Passed through to blastp
    #[arg(long, default_value_t = 1)]
    pub max_target_seqs: usize,
    /// Reuse existing tab files instead of running blastp
    #[arg(long)]
    pub skip_search: bool,
    /// blastp executable to invoke
    #[arg(long, default_value = "blastp")]
    pub blastp: String,
    /// Report extra detail while running
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn run(args: BbhArgs) -> Result<()> {
    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("Failed to create output directory {}", args.out_dir.display()))?;

    let query_stem = file_stem(&args.query)?;
    let subject_stem = file_stem(&args.subject)?;
    let fwd_tab = args.out_dir.join(format!("{}_{}.tab", query_stem, subject_stem));
    let rev_tab = args.out_dir.join(format!("{}_{}.tab", subject_stem, query_stem));

    if args.skip_search {
        for tab in [&fwd_tab, &rev_tab] {
            if !tab.exists() {
                bail!(
                    "{} not found (run once without --skip-search to generate it)",
                    tab.display()
                );
            }
        }
    } else {
        eprintln!("Running forward search ({} vs {})...", query_stem, subject_stem);
        run_blastp(
            &args.blastp,
            &BlastpJob {
                query: args.query.clone(),
                db: args.subject.clone(),
                out: fwd_tab.clone(),
                max_target_seqs: args.max_target_seqs,
            },
        )?;
        eprintln!("Running reverse search ({} vs {})...", subject_stem, query_stem);
        run_blastp(
            &args.blastp,
            &BlastpJob {
                query: args.subject.clone(),
                db: args.query.clone(),
                out: rev_tab.clone(),
                max_target_seqs: args.max_target_seqs,
            },
        )?;
    }

    eprintln!("Reading search results...");
    let fwd_hits = read_tabular_hits(&fwd_tab)?;
    let rev_hits = read_tabular_hits(&rev_tab)?;
    if args.verbose {
        eprintln!("  {} forward hits, {} reverse hits", fwd_hits.len(), rev_hits.len());
    }

    eprintln!("Reading query lengths...");
    let query_lengths = read_sequence_lengths(&args.query)?;
    let subject_lengths = read_sequence_lengths(&args.subject)?;
    if args.verbose {
        eprintln!(
            "  {} sequences in {}, {} in {}",
            query_lengths.len(),
            query_stem,
            subject_lengths.len(),
            subject_stem
        );
    }
    let forward = normalize_hits(fwd_hits, &query_lengths);
    let reverse = normalize_hits(rev_hits, &subject_lengths);

    let mut pairs = reciprocal_pairs(&forward, &reverse);
    sort_pairs_by_forward_score(&mut pairs);
    eprintln!("{} best bidirectional hits", pairs.len());

    let candidates_csv = args
        .out_dir
        .join(format!("BBH_{}_{}.csv", query_stem, subject_stem));
    write_pairs_csv(&candidates_csv, &pairs)?;

    let fwd_scores: Vec<f64> = pairs.iter().map(|p| p.fwd_norm_bitscore).collect();
    let rev_scores: Vec<f64> = pairs.iter().map(|p| p.rev_norm_bitscore).collect();
    plot_score_densities(
        &args.out_dir.join("density_norm_bitscore.png"),
        &fwd_scores,
        &rev_scores,
    )?;

    let pairs = filter_significant(pairs, args.evalue);
    eprintln!(
        "{} hits with E-value <= {} in both directions",
        pairs.len(),
        args.evalue
    );

    let pairs = filter_quality(pairs, args.min_fwd_bitscore, args.min_rev_bitscore);
    eprintln!(
        "{} orthologs with normalized bit score >= {} forward, >= {} reverse",
        pairs.len(),
        args.min_fwd_bitscore,
        args.min_rev_bitscore
    );

    let orthologs_csv = args
        .out_dir
        .join(format!("BBH_{}_{}_orthologs.csv", query_stem, subject_stem));
    write_pairs_csv(&orthologs_csv, &pairs)?;

    Ok(())
}

/// Length of every sequence, keyed by the first whitespace-delimited token
/// of its FASTA header (the id BLAST reports as qseqid/sseqid).
fn read_sequence_lengths(path: &Path) -> Result<FxHashMap<String, usize>> {
    let reader = fasta::Reader::from_file(path)
        .with_context(|| format!("Failed to open FASTA {}", path.display()))?;
    let mut lengths = FxHashMap::default();
    for record in reader.records().filter_map(|r| r.ok()) {
        let id = record
            .id()
            .split_whitespace()
            .next()
            .unwrap_or("unknown")
            .to_string();
        lengths.insert(id, record.seq().len());
    }
    Ok(lengths)
}

fn file_stem(path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
        .with_context(|| format!("Cannot derive a file stem from {}", path.display()))
}
