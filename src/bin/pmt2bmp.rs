//! Convert a PMT scanner image to a 4-bit BMP.
//!
//! ```bash
//! pmt2bmp scan.pmt scan.bmp
//! RUST_LOG=debug pmt2bmp --strict scan.pmt scan.bmp
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use zenpmt::{Strictness, Unstoppable};

#[derive(Parser, Debug)]
#[command(name = "pmt2bmp")]
#[command(about = "Convert PMT handheld-scanner images to BMP")]
#[command(version)]
struct Args {
    /// PMT file to read
    input: PathBuf,

    /// BMP file to write
    output: PathBuf,

    /// Reject groups with input left over once their output is full
    #[arg(long)]
    strict: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let strictness = if args.strict {
        Strictness::Strict
    } else {
        Strictness::Standard
    };

    match zenpmt::fs::convert_file(&args.input, &args.output, strictness, Unstoppable) {
        Ok(()) => {
            log::info!(
                "converted {} -> {}",
                args.input.display(),
                args.output.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("failed to convert {}: {e}", args.input.display());
            ExitCode::FAILURE
        }
    }
}
