use rustc_hash::FxHashMap;
use serde::Serialize;
use std::cmp::Ordering;

use crate::blast::tabular::TabularHit;

/// A tabular hit with its bit score normalized by query length.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredHit {
    pub query: String,
    pub subject: String,
    pub identity: f64,
    pub length: usize,
    pub evalue: f64,
    pub bitscore: f64,
    pub norm_bitscore: f64,
}

/// One best bidirectional hit with per-direction statistics.
///
/// `identity` and `length` describe the forward alignment; the E-value and
/// normalized bit score are kept for both directions so each can be filtered
/// on its own threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BbhPair {
    pub query: String,
    pub subject: String,
    pub identity: f64,
    pub length: usize,
    pub fwd_evalue: f64,
    pub fwd_norm_bitscore: f64,
    pub rev_evalue: f64,
    pub rev_norm_bitscore: f64,
}

/// Attach `bitscore / query_length` to every hit.
///
/// A query id missing from the length map, or a zero-length query, yields
/// `norm_bitscore = 0.0` instead of a non-finite value.
pub fn normalize_hits(
    hits: Vec<TabularHit>,
    query_lengths: &FxHashMap<String, usize>,
) -> Vec<ScoredHit> {
    hits.into_iter()
        .map(|h| {
            let norm = match query_lengths.get(&h.qseqid) {
                Some(&len) if len > 0 => h.bitscore / len as f64,
                _ => 0.0,
            };
            let norm = if norm.is_finite() { norm } else { 0.0 };
            ScoredHit {
                query: h.qseqid,
                subject: h.sseqid,
                identity: h.pident,
                length: h.length,
                evalue: h.evalue,
                bitscore: h.bitscore,
                norm_bitscore: norm,
            }
        })
        .collect()
}

/// Join forward and reverse hits into reciprocal pairs.
///
/// A forward hit (query from proteome A, subject from proteome B) pairs with
/// every reverse hit that aligns the same two sequences the other way around
/// (`rev.query == fwd.subject && rev.subject == fwd.query`). Multiple HSP
/// combinations for the same (query, subject) collapse to the per-column
/// maximum, so the aggregated E-value is the worst of the duplicates and the
/// aggregated scores are the best.
pub fn reciprocal_pairs(forward: &[ScoredHit], reverse: &[ScoredHit]) -> Vec<BbhPair> {
    let mut by_reverse: FxHashMap<(&str, &str), Vec<&ScoredHit>> = FxHashMap::default();
    for r in reverse {
        by_reverse
            .entry((r.query.as_str(), r.subject.as_str()))
            .or_default()
            .push(r);
    }

    let mut pairs: FxHashMap<(String, String), BbhPair> = FxHashMap::default();
    for f in forward {
        if let Some(mates) = by_reverse.get(&(f.subject.as_str(), f.query.as_str())) {
            for r in mates {
                pairs
                    .entry((f.query.clone(), f.subject.clone()))
                    .and_modify(|pair| {
                        pair.identity = pair.identity.max(f.identity);
                        pair.length = pair.length.max(f.length);
                        pair.fwd_evalue = pair.fwd_evalue.max(f.evalue);
                        pair.fwd_norm_bitscore = pair.fwd_norm_bitscore.max(f.norm_bitscore);
                        pair.rev_evalue = pair.rev_evalue.max(r.evalue);
                        pair.rev_norm_bitscore = pair.rev_norm_bitscore.max(r.norm_bitscore);
                    })
                    .or_insert_with(|| BbhPair {
                        query: f.query.clone(),
                        subject: f.subject.clone(),
                        identity: f.identity,
                        length: f.length,
                        fwd_evalue: f.evalue,
                        fwd_norm_bitscore: f.norm_bitscore,
                        rev_evalue: r.evalue,
                        rev_norm_bitscore: r.norm_bitscore,
                    });
            }
        }
    }

    pairs.into_values().collect()
}

/// Sort pairs by forward normalized bit score, best first.
///
/// Ties fall back to the (query, subject) ids so repeated runs write
/// identical CSVs.
pub fn sort_pairs_by_forward_score(pairs: &mut [BbhPair]) {
    pairs.sort_by(|a, b| {
        b.fwd_norm_bitscore
            .partial_cmp(&a.fwd_norm_bitscore)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.query.cmp(&b.query))
            .then_with(|| a.subject.cmp(&b.subject))
    });
}
