use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::debug;
use negharm_theory::{
    build_chord, identify_chord, reharmonize, transpose, PitchClass, ReharmonizeRequest,
    CHORD_QUALITIES,
};

#[derive(Parser, Debug)]
#[command(name = "negharm")]
#[command(about = "Negative harmony transposition and chord naming", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Mirror notes around a tonic
    Transpose {
        /// Tonal center, e.g. C or F#
        #[arg(short, long)]
        tonic: String,

        /// Notes to transpose; unknown names are echoed back unchanged
        #[arg(required = true)]
        notes: Vec<String>,
    },
    /// List the notes of a chord symbol such as Am7
    Chord { symbol: String },
    /// Name the chord formed by some notes (root last)
    Identify {
        #[arg(required = true)]
        notes: Vec<String>,
    },
    /// Mirror a note line and a chord around a tonic and name the new chord
    Reharmonize {
        #[arg(short, long)]
        tonic: String,

        /// Space-separated note line
        #[arg(short, long, default_value = "")]
        notes: String,

        /// Chord symbol
        #[arg(short, long, default_value = "")]
        chord: String,
    },
    /// List the known chord qualities
    Qualities,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    debug!("{:?}", cli.command);

    for line in run(cli.command)? {
        println!("{line}");
    }

    Ok(())
}

fn run(command: Commands) -> Result<Vec<String>> {
    match command {
        Commands::Transpose { tonic, notes } => {
            let tonic: PitchClass = tonic.trim().parse().context("Invalid tonic")?;
            let transposed: Vec<String> = notes.iter().map(|n| transpose(n, tonic)).collect();
            Ok(vec![transposed.join(" ")])
        }
        Commands::Chord { symbol } => {
            let notes = build_chord(&symbol)
                .with_context(|| format!("Failed to build chord '{symbol}'"))?;
            Ok(vec![notes.join(" ")])
        }
        Commands::Identify { notes } => {
            let name = identify_chord(&notes).context("Failed to identify chord")?;
            Ok(vec![name])
        }
        Commands::Reharmonize {
            tonic,
            notes,
            chord,
        } => {
            let request = ReharmonizeRequest {
                tonic,
                notes,
                chord,
            };
            let result = reharmonize(&request).context("Reharmonization failed")?;
            Ok(result.to_string().lines().map(str::to_string).collect())
        }
        Commands::Qualities => Ok(CHORD_QUALITIES
            .iter()
            .map(|(name, offsets)| format!("{name}: {offsets:?}"))
            .collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn run_args(args: &[&str]) -> Result<Vec<String>> {
        let cli = Cli::try_parse_from(std::iter::once("negharm").chain(args.iter().copied()))?;
        run(cli.command)
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_transpose_command() {
        let out = run_args(&["transpose", "--tonic", "C", "C", "E", "G", "Db"]).unwrap();
        assert_eq!(out, vec!["G D# C Db"]);
    }

    #[test]
    fn test_transpose_rejects_bad_tonic() {
        assert!(run_args(&["transpose", "-t", "Bb", "C"]).is_err());
    }

    #[test]
    fn test_chord_command() {
        assert_eq!(run_args(&["chord", "Am7"]).unwrap(), vec!["A C E G"]);
        assert_eq!(run_args(&["chord", "Cxyz"]).unwrap(), vec![""]);
        assert!(run_args(&["chord", "xyz"]).is_err());
    }

    #[test]
    fn test_identify_command() {
        assert_eq!(run_args(&["identify", "E", "G", "C"]).unwrap(), vec!["Cmaj"]);
        assert_eq!(
            run_args(&["identify", "C", "E", "G"]).unwrap(),
            vec!["Unidentified chord"]
        );
    }

    #[test]
    fn test_reharmonize_command() {
        let out = run_args(&["reharmonize", "-t", "C", "-n", "C E G", "-c", "G7"]).unwrap();
        assert_eq!(
            out,
            vec![
                "Transposed notes: G D# C",
                "Transposed chord: Dm7b5 (C G# F D)"
            ]
        );
    }

    #[test]
    fn test_qualities_command() {
        let out = run_args(&["qualities"]).unwrap();
        assert_eq!(out.len(), CHORD_QUALITIES.len());
        assert_eq!(out[0], "maj: [0, 4, 7]");
    }
}
