//! Per-site conservation scoring of a multiple sequence alignment.
//!
//! Reads a ClustalW alignment, scores every column by Shannon entropy
//! (gap-heavy columns are penalized), ranks the sites from most to least
//! conserved, reports the most conserved site on stderr, and shades the
//! minimal-entropy regions in the conservation plot.

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use std::cmp::Ordering;
use std::fs;
use std::path::PathBuf;

use crate::msa::read_clustal;
use crate::report::csv::write_entropy_csv;
use crate::report::plot::plot_conservation;
use crate::stats::entropy::{column_entropy, SiteEntropy};
use crate::stats::regions::{group_contiguous, minimal_positions};

#[derive(Args, Debug)]
pub struct ConservationArgs {
    /// ClustalW alignment file
    #[arg(short, long)]
    pub alignment: PathBuf,
    /// Output directory for the ranking CSV and the conservation plot
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,
    /// Columns with more gaps than this get the gap penalty added
    #[arg(long, default_value_t = 20)]
    pub gap_cutoff: usize,
    /// Entropy added to columns over the gap cutoff
    #[arg(long, default_value_t = 9.0)]
    pub gap_penalty: f64,
    /// Report extra detail while running
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn run(args: ConservationArgs) -> Result<()> {
    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("Failed to create output directory {}", args.out_dir.display()))?;

    eprintln!("Reading alignment...");
    let alignment = read_clustal(&args.alignment)?;
    if args.verbose {
        eprintln!(
            "  {} sequences, {} columns",
            alignment.num_sequences(),
            alignment.len()
        );
    }

    eprintln!("Scoring columns...");
    let bar = ProgressBar::new(alignment.len() as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}")
            .unwrap(),
    );
    let mut sites = Vec::with_capacity(alignment.len());
    for position in 0..alignment.len() {
        let column = alignment.column(position);
        sites.push(SiteEntropy {
            position,
            entropy: column_entropy(&column, args.gap_cutoff, args.gap_penalty),
        });
        bar.inc(1);
    }
    bar.finish();

    // Stable sort: equally conserved sites stay in position order.
    let mut ranked = sites.clone();
    ranked.sort_by(|a, b| a.entropy.partial_cmp(&b.entropy).unwrap_or(Ordering::Equal));
    write_entropy_csv(&args.out_dir.join("sites_ordered_entropy.csv"), &ranked)?;

    if let Some(best) = ranked.first() {
        eprintln!(
            "The most conserved position is {} and has the following amino acid composition: {}",
            best.position,
            column_composition(&alignment.column(best.position))
        );
    }

    let regions = group_contiguous(&minimal_positions(&sites));
    if args.verbose {
        eprintln!("  {} minimal-entropy regions: {:?}", regions.len(), regions);
    }

    plot_conservation(
        &args.out_dir.join("sites_conservation.png"),
        &sites,
        &regions,
    )?;

    Ok(())
}

fn column_composition(column: &[u8]) -> String {
    column
        .iter()
        .map(|&residue| char::from(residue).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
