use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

/// A parsed multiple sequence alignment: one id and one equal-length aligned
/// row per sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Alignment {
    pub ids: Vec<String>,
    pub rows: Vec<Vec<u8>>,
}

impl Alignment {
    /// Alignment length (number of columns).
    pub fn len(&self) -> usize {
        self.rows.first().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn num_sequences(&self) -> usize {
        self.rows.len()
    }

    /// All symbols of one column, in sequence order. Panics if `pos` is out
    /// of range.
    pub fn column(&self, pos: usize) -> Vec<u8> {
        self.rows.iter().map(|row| row[pos]).collect()
    }
}

/// Parse a ClustalW-format alignment.
///
/// The format: a `CLUSTAL` header line, then blocks separated by blank
/// lines. Each block holds one line per sequence (`id`, whitespace, aligned
/// segment, optional cumulative residue count) plus an optional conservation
/// line, which is indented and therefore skipped. Segments of the same id
/// concatenate across blocks.
pub fn parse_clustal(text: &str) -> Result<Alignment> {
    let mut lines = text.lines().enumerate();

    // Header: the first non-blank line identifies the format
    let header = lines
        .by_ref()
        .find(|(_, line)| !line.trim().is_empty())
        .map(|(_, line)| line);
    match header {
        Some(line) if line.trim_start().starts_with("CLUSTAL") => {}
        Some(line) => bail!("not a ClustalW alignment (header line: {:?})", line),
        None => bail!("empty alignment file"),
    }

    let mut ids: Vec<String> = Vec::new();
    let mut rows: Vec<Vec<u8>> = Vec::new();
    let mut in_first_block = true;
    let mut block_index = 0;

    for (idx, line) in lines {
        let lineno = idx + 1;

        if line.trim().is_empty() {
            if !ids.is_empty() {
                in_first_block = false;
            }
            block_index = 0;
            continue;
        }

        // Conservation lines ("** :."...) are indented under the segments
        if line.starts_with(' ') || line.starts_with('\t') {
            continue;
        }

        let mut fields = line.split_whitespace();
        let id = fields.next().unwrap_or_default();
        let segment = match fields.next() {
            Some(s) => s,
            None => bail!("line {}: expected an aligned segment after {:?}", lineno, id),
        };
        if let Some(extra) = fields.next() {
            // ClustalW optionally appends the cumulative residue count
            if !extra.chars().all(|c| c.is_ascii_digit()) || fields.next().is_some() {
                bail!("line {}: unexpected trailing field {:?}", lineno, extra);
            }
        }

        if in_first_block {
            ids.push(id.to_string());
            rows.push(segment.bytes().collect());
        } else {
            if block_index >= ids.len() {
                bail!("line {}: block holds more sequences than the first block", lineno);
            }
            if ids[block_index] != id {
                bail!(
                    "line {}: sequence id {:?} does not match {:?} from the first block",
                    lineno,
                    id,
                    ids[block_index]
                );
            }
            rows[block_index].extend(segment.bytes());
        }
        block_index += 1;
    }

    if ids.is_empty() {
        bail!("alignment contains no sequences");
    }
    let expected = rows[0].len();
    for (id, row) in ids.iter().zip(&rows) {
        if row.len() != expected {
            bail!(
                "sequence {:?} has length {} but {:?} has {}",
                id,
                row.len(),
                ids[0],
                expected
            );
        }
    }

    Ok(Alignment { ids, rows })
}

/// Read and parse a ClustalW alignment file.
pub fn read_clustal(path: &Path) -> Result<Alignment> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read alignment file {}", path.display()))?;
    parse_clustal(&text)
        .with_context(|| format!("Failed to parse ClustalW alignment {}", path.display()))
}
