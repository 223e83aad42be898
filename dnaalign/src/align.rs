use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use alphabet::InputAlphabet;
use anyhow::{Result, anyhow, ensure};
use clap::{Args, Parser, ValueEnum};
use configuration::{GlobalConfiguration, LocalConfiguration, load_configuration};
use lib_dnaalign::{
    align_global, align_local, alignment_result::AlignmentResult, io::read_sequence_pair,
};
use log::{LevelFilter, debug, info};
use simplelog::{ColorChoice, TermLogger, TerminalMode};

mod alphabet;
mod configuration;

#[derive(Parser)]
pub struct Cli {
    #[clap(long, short = 'l', default_value = "info")]
    log_level: LevelFilter,

    #[command(flatten)]
    input: CliInput,

    /// The file to store the alignment in toml format.
    #[clap(long, short = 'o')]
    output: Option<PathBuf>,

    /// The alphabet of the input sequences.
    ///
    /// Unless this is `any`, the sequences are converted to upper case
    /// and rejected if they contain a character outside of the alphabet.
    #[clap(long, short = 'a', default_value = "any")]
    alphabet: InputAlphabet,

    /// A directory containing the configuration files.
    ///
    /// Global alignment reads `global.toml`, local alignment reads `local.toml`.
    /// If not given, the default scoring is used.
    #[clap(long, short = 'c')]
    configuration_directory: Option<PathBuf>,

    #[clap(long, short = 'm', default_value = "global")]
    alignment_method: AlignmentMethod,

    #[command(flatten)]
    scoring: CliScoring,
}

#[derive(Args)]
struct CliInput {
    #[clap(flatten)]
    inline_input: Option<CliInlineInput>,

    #[clap(flatten)]
    pair_input: Option<CliPairInput>,
}

#[derive(Args)]
#[group(multiple = true)]
struct CliInlineInput {
    /// The first sequence.
    #[clap(long, required = false, requires = "seq2")]
    seq1: String,

    /// The second sequence.
    #[clap(long, required = false, requires = "seq1")]
    seq2: String,
}

#[derive(Args)]
struct CliPairInput {
    /// The path to a file containing the two sequences on separate lines.
    #[clap(long, short = 'p', required = false, conflicts_with_all = ["seq1", "seq2"])]
    pair_file: PathBuf,
}

/// Overrides for the values in the configuration files.
#[derive(Args, Debug, Default)]
struct CliScoring {
    #[clap(long)]
    match_reward: Option<i64>,

    #[clap(long)]
    mismatch_penalty: Option<i64>,

    /// Applies only to global alignment.
    #[clap(long)]
    gap_open: Option<i64>,

    /// Applies only to global alignment.
    #[clap(long)]
    gap_extend: Option<i64>,

    /// Applies only to local alignment.
    #[clap(long)]
    indel_penalty: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AlignmentMethod {
    /// End-to-end alignment with affine gap costs.
    Global,
    /// Alignment of the best-scoring substrings with linear gap costs.
    Local,
}

pub fn cli(cli: Cli) -> Result<()> {
    if TermLogger::init(
        cli.log_level,
        Default::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .is_err()
    {
        debug!("Logger was initialised before");
    }

    // Load input sequences.
    let (seq1, seq2) = load_input(&cli.input)?;
    let seq1 = cli.alphabet.prepare_sequence("First sequence", seq1)?;
    let seq2 = cli.alphabet.prepare_sequence("Second sequence", seq2)?;
    let seq1 = seq1.chars().collect::<Vec<_>>();
    let seq2 = seq2.chars().collect::<Vec<_>>();

    let configuration_directory = cli.configuration_directory.as_deref();
    let result = match cli.alignment_method {
        AlignmentMethod::Global => {
            ensure!(
                cli.scoring.indel_penalty.is_none(),
                "The indel penalty applies only to local alignment"
            );
            let scoring = load_configuration::<GlobalConfiguration>(
                configuration_directory,
                "global.toml",
            )?
            .into_scoring(&cli.scoring)?;

            info!(
                "Aligning sequences of lengths {} and {} globally",
                seq1.len(),
                seq2.len()
            );
            debug!("{scoring:?}");
            align_global(&seq1, &seq2, &scoring)?
        }
        AlignmentMethod::Local => {
            ensure!(
                cli.scoring.gap_open.is_none() && cli.scoring.gap_extend.is_none(),
                "Gap open and gap extend penalties apply only to global alignment"
            );
            let scoring = load_configuration::<LocalConfiguration>(
                configuration_directory,
                "local.toml",
            )?
            .into_scoring(&cli.scoring)?;

            info!(
                "Aligning sequences of lengths {} and {} locally",
                seq1.len(),
                seq2.len()
            );
            debug!("{scoring:?}");
            align_local(&seq1, &seq2, &scoring)?
        }
    };

    if let Some(output) = &cli.output {
        write_output(output, &result)?;
    }

    println!("{result}");
    Ok(())
}

fn load_input(input: &CliInput) -> Result<(String, String)> {
    if let Some(CliPairInput { pair_file }) = &input.pair_input {
        info!("Loading pair file {pair_file:?}");
        let file = File::open(pair_file)
            .map_err(|error| anyhow!("Unable to open pair file {pair_file:?}: {error}"))?;
        Ok(read_sequence_pair(BufReader::new(file))?)
    } else if let Some(CliInlineInput { seq1, seq2 }) = &input.inline_input {
        Ok((seq1.clone(), seq2.clone()))
    } else {
        Err(anyhow!("No input sequences given"))
    }
}

fn write_output(output: &Path, result: &AlignmentResult) -> Result<()> {
    info!("Writing alignment to {output:?}");
    let mut output = BufWriter::new(
        File::create(output)
            .map_err(|error| anyhow!("Unable to create output file {output:?}: {error}"))?,
    );
    write!(output, "{}", toml::to_string(result)?)?;
    output.flush()?;
    Ok(())
}
