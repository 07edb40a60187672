//! proseg command-line entry point

use anyhow::Result;
use clap::Parser;
use proseg_cli::commands::Commands;

/// Sentence segmentation that corrects a coarse boundary detector
#[derive(Debug, Parser)]
#[command(name = "proseg", version)]
#[command(long_about = "Splits text into sentences. A fast boundary detector proposes \
candidates; reversible normalizers and merge/split cascades repair its mistakes around \
abbreviations, citations, quoted dialogue, ellipses and numbered titles.

EXAMPLES:
    proseg process -i notes.txt
    proseg process -i 'corpus/*.txt' -f json -o sentences.json --parallel
    proseg process -i story.txt --no-split-dialog --group-quotes -f markdown
    proseg generate-config -o custom.toml && proseg validate -l custom.toml")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
