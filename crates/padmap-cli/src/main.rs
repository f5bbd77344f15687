//! padmap CLI
//!
//! Build-time generator for the default controller mappings table. Invoked
//! once per build with the output path followed by the mapping databases in
//! merge order.

use clap::{ArgAction, Parser};
use log::{debug, LevelFilter};
use padmap_core::emitter::DEFAULT_SYMBOL;
use padmap_core::{generate_to_writer, EmitOptions, GeneratedFile, GenerationReport};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "padmap")]
#[command(about = "Generate the default controller mappings table", long_about = None)]
#[command(version)]
struct Cli {
    /// Generated source file to write
    output: PathBuf,

    /// Mapping databases, later files overwrite earlier ones
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Header to include in the generated file (repeatable, replaces the defaults)
    #[arg(long = "include", value_name = "PATH")]
    includes: Vec<String>,

    /// Qualified name of the generated array
    #[arg(long, default_value = DEFAULT_SYMBOL)]
    symbol: String,

    /// Write a JSON summary of the run to this path
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,

    /// Print the generated source to stdout instead of writing OUTPUT
    #[arg(long)]
    stdout: bool,

    /// Increase log verbosity (-v warnings, -vv info, -vvv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn emit_options(&self) -> EmitOptions {
        let mut options = EmitOptions {
            symbol: self.symbol.clone(),
            ..EmitOptions::default()
        };
        if !self.includes.is_empty() {
            options.includes = self.includes.clone();
        }
        options
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: &Cli) -> padmap_core::Result<()> {
    let options = cli.emit_options();

    if cli.stdout {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        let report = generate_to_writer(&mut handle, cli.inputs.as_slice(), &options)?;
        handle.flush()?;
        return save_report(cli, &report);
    }

    // Report is saved before the commit; a failed save must leave no artifact
    let mut file = GeneratedFile::create(&cli.output)?;
    let report = generate_to_writer(&mut file, cli.inputs.as_slice(), &options)?;
    save_report(cli, &report)?;
    let path = file.commit()?;
    debug!("wrote {}", path.display());
    Ok(())
}

fn save_report(cli: &Cli, report: &GenerationReport) -> padmap_core::Result<()> {
    if let Some(path) = &cli.report {
        report.save(path)?;
    }
    Ok(())
}
