use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use sha1::digest;

/// Print the SHA-1 digest of a string as 40 lowercase hex characters.
///
/// The argument is taken verbatim, so strings such as `-abc` or `--help`
/// are hashed rather than parsed as options. Logging is configured through
/// `RUST_LOG`.
#[derive(Parser, Debug)]
#[command(name = "sha1", disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// String to hash. Its raw bytes are hashed, without a trailing newline.
    #[arg(allow_hyphen_values = true)]
    input: Option<OsString>,
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}

fn render(input: &[u8]) -> String {
    hex::encode(digest(input))
}

fn run(input: OsString) -> Result<()> {
    let bytes = input.into_encoded_bytes();
    debug!("hashing {} byte argument", bytes.len());

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", render(&bytes)).context("failed to write digest")?;
    stdout.flush().context("failed to flush stdout")?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging();

    let Some(input) = args.input else {
        eprintln!("SHA1: fatal error: no input string");
        eprintln!("compilation terminated.");
        return ExitCode::from(1);
    };

    match run(input) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("sha1: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
