use anyhow::Result;
use clap::{Parser, Subcommand};
use orthoscan::analysis::{bbh, conservation};

#[derive(Parser)]
#[command(name = "orthoscan")]
#[command(version = "0.1.0")]
#[command(about = "Ortholog detection and MSA conservation analyses", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {

    /// Best bidirectional blastp hits between two proteomes
    Bbh(bbh::BbhArgs),

    /// Per-site Shannon-entropy conservation of a ClustalW MSA
    Conservation(conservation::ConservationArgs),

}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bbh(args) => {
            bbh::run(args)?;
        }
        Commands::Conservation(args) => {
            conservation::run(args)?;
        }
    }
    Ok(())
}
