use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use std::process::Command;

/// One direction of the reciprocal search: `-query` against `-db`, results
/// written by `blastp` itself to `out` in `-outfmt 6`.
#[derive(Debug, Clone)]
pub struct BlastpJob {
    pub query: PathBuf,
    pub db: PathBuf,
    pub out: PathBuf,
    pub max_target_seqs: usize,
}

/// Build the `blastp` command line for one search direction.
pub fn blastp_command(program: &str, job: &BlastpJob) -> Command {
    let mut cmd = Command::new(program);
    cmd.arg("-query")
        .arg(&job.query)
        .arg("-db")
        .arg(&job.db)
        .arg("-outfmt")
        .arg("6")
        .arg("-max_target_seqs")
        .arg(job.max_target_seqs.to_string())
        .arg("-out")
        .arg(&job.out);
    cmd
}

/// Run `blastp` to completion.
///
/// The search itself is a black box: this only launches the command and
/// checks its exit status. Its stdout/stderr pass through to the terminal.
pub fn run_blastp(program: &str, job: &BlastpJob) -> Result<()> {
    let status = blastp_command(program, job)
        .status()
        .with_context(|| format!("Failed to launch {} (is it on PATH?)", program))?;
    if !status.success() {
        bail!(
            "{} -query {} -db {} failed: {}",
            program,
            job.query.display(),
            job.db.display(),
            status
        );
    }
    Ok(())
}
