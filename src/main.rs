use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use log::{error, info, LevelFilter, Log, Metadata, Record};

use stg4_codec::utils::{json_output_path, stage_output_path, InputKind};
use stg4_codec::{CodecConfig, StageError, StageFile, StageResult};

/// Convert STG4 stage files to JSON and back
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// `.stg4` / `.stg4_<n>` file to decode, or `.json` file to encode
    #[arg(value_name = "INPUT")]
    input: PathBuf,
    /// Output path; derived from the input name when omitted
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,
    /// Fail on a damaged end marker or trailing bytes instead of warning;
    /// applies the same codec settings when encoding
    #[arg(long)]
    strict: bool,
    /// Print decode and encode details
    #[arg(short, long)]
    verbose: bool,
}

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn decode_to_json(input: &Path, output: &Path, config: &CodecConfig) -> StageResult<()> {
    let decoded = StageFile::from_path_with_config(input, config)?;
    let json = decoded.stage.to_json_pretty()?;
    fs::write(output, json).map_err(|e| StageError::FileWriteError {
        path: output.display().to_string(),
        reason: e.to_string(),
    })
}

fn encode_from_json(input: &Path, output: &Path, config: &CodecConfig) -> StageResult<()> {
    let json = fs::read_to_string(input).map_err(|e| StageError::FileReadError {
        path: input.display().to_string(),
        reason: e.to_string(),
    })?;
    StageFile::from_json(&json)?.write_to_path_with_config(output, config)
}

fn run(cli: &Cli) -> StageResult<PathBuf> {
    let name = cli.input.to_string_lossy();
    let config = if cli.strict {
        CodecConfig::strict()
    } else {
        CodecConfig::default()
    };

    match InputKind::from_file_name(&name) {
        Some(InputKind::Stage) => {
            let output = cli
                .output
                .clone()
                .unwrap_or_else(|| json_output_path(&cli.input));
            decode_to_json(&cli.input, &output, &config)?;
            Ok(output)
        },
        Some(InputKind::Json) => {
            let output = cli
                .output
                .clone()
                .unwrap_or_else(|| stage_output_path(&cli.input));
            encode_from_json(&cli.input, &output, &config)?;
            Ok(output)
        },
        None => Err(StageError::FileReadError {
            path: name.to_string(),
            reason: "expected a .stg4, .stg4_<n> or .json file".to_string(),
        }),
    }
}

fn main() {
    let cli = Cli::parse();

    // Only fails if a logger is already installed.
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });

    match run(&cli) {
        Ok(output) => info!("wrote {}", output.display()),
        Err(e) => {
            error!("{} (code {}, {})", e, e.code(), e.suggested_action());
            process::exit(1);
        },
    }
}
