use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use crc_cascade::logging::{init_logger, log_error};
use crc_cascade::symbol_file::{self, Format};
use crc_cascade::CascadeHasher;

#[derive(Parser)]
#[command(name = "crc-cascade")]
#[command(about = "Builds a static perfect-hash table from a list of symbols")]
#[command(after_help = "Reads one symbol per line from INPUT, assigns each a dense unique ID \
via an ordered cascade of CRC polynomials, and writes the resulting lookup \
table as packed binary and/or human-readable text.")]
struct Cli {
    /// Path to the symbol list, one symbol per line.
    input: PathBuf,

    /// Maximum number of distinct symbols this table will ever hold.
    #[arg(long, default_value_t = 32768)]
    max_ids: u64,

    /// Input encoding: plain ASCII text, or hex-encoded bytes per line.
    #[arg(long, value_enum, default_value_t = CliFormat::Ascii)]
    format: CliFormat,

    /// Where to write the packed binary lookup table.
    #[arg(long)]
    output_bin: Option<PathBuf>,

    /// Where to write the human-readable `symbol -> id` mapping.
    #[arg(long)]
    output_txt: Option<PathBuf>,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum CliFormat {
    Ascii,
    Hex,
}

impl From<CliFormat> for Format {
    fn from(value: CliFormat) -> Self {
        match value {
            CliFormat::Ascii => Format::Ascii,
            CliFormat::Hex => Format::Hex,
        }
    }
}

fn run(cli: Cli) -> Result<(), crc_cascade::CascadeError> {
    let raw_symbols = symbol_file::read_symbols(&cli.input, cli.format.into())?;
    let hasher = CascadeHasher::new(cli.max_ids)?;
    let result = hasher.build(&raw_symbols)?;

    match (&cli.output_bin, &cli.output_txt) {
        (None, None) => {
            println!(
                "built table for {} symbols at CRC width {} ({} bytes packed)",
                result.assignments.len(),
                hasher.crc_width(),
                result.packed.bytes.len()
            );
        }
        (bin, txt) => {
            if let Some(path) = bin {
                symbol_file::write_packed_table(path, &result.packed)?;
            }
            if let Some(path) = txt {
                symbol_file::write_readable_table(path, &result.readable)?;
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    init_logger();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log_error(&format!("{e}"));
            ExitCode::FAILURE
        }
    }
}
