//! CLI for MUSALS, the progressive multiple sequence alignment tool.

mod commands;
mod logger;

use std::path::PathBuf;

use clap::Parser;

use commands::Commands;
use musals::{Aligner, ScoringScheme};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The score for two identical characters.
    #[arg(short('m'), long, default_value_t = 1, allow_negative_numbers = true)]
    match_score: i32,

    /// The score for two different characters.
    #[arg(short('x'), long, default_value_t = -1, allow_negative_numbers = true)]
    mismatch_score: i32,

    /// The score for a character against a gap.
    #[arg(short('g'), long, default_value_t = -2, allow_negative_numbers = true)]
    gap_penalty: i32,

    /// The gap character.
    #[arg(long, default_value_t = '-')]
    gap: char,

    /// The maximum level of log messages.
    #[arg(short('l'), long, default_value = "warn")]
    log_level: String,

    /// Write logs to this file instead of stderr.
    #[arg(long)]
    log_path: Option<PathBuf>,

    /// The subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

impl Args {
    /// Build the aligner described by the scoring options.
    fn aligner(&self) -> Result<Aligner, String> {
        let gap = u8::try_from(self.gap)
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| format!("The gap character must be ASCII, got {:?}", self.gap))?;
        let scoring = ScoringScheme::new(self.match_score, self.mismatch_score, self.gap_penalty);
        Ok(Aligner::new(scoring, gap))
    }
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    let _guard = logger::configure_logger(&args.log_level, args.log_path.as_deref())?;
    ftlog::info!("{args:?}");

    let aligner = args.aligner()?;

    match args.command {
        Commands::Pairwise { x, y } => commands::pairwise::run(&aligner, &x, &y),
        Commands::Msa { sequences, out_path } => commands::msa::run(&aligner, &sequences, out_path.as_deref())?,
        Commands::Revcomp { sequences } => commands::revcomp::run(&sequences),
    }

    Ok(())
}
