//! docgen: generate an XML API description from annotated header files.
//!
//! Scans the input for `/*** ... */` documentation blocks carrying
//! `@module`, `@function`, `@param` and `@return` tags, then writes a
//! hierarchical `api` document grouping each function's inputs and outputs,
//! optionally under module nodes.

mod diag;
mod markup;
mod model;
mod parser;
mod render;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use std::fs;
use std::path::PathBuf;

const USAGE: &str = "Usage: docgen -f,--file <header_file> (-o,--out outfile.xml)";

#[derive(Parser)]
#[command(
    name = "docgen",
    about = "Generate XML API documentation from tagged header comments"
)]
struct Cli {
    /// Input header file to scan
    #[arg(short = 'f', long = "file")]
    file: Option<PathBuf>,

    /// Output file
    #[arg(short = 'o', long = "out", default_value = "api.xml")]
    out: PathBuf,
}

fn main() -> Result<()> {
    // Bad invocations print usage and exit 0; only I/O failures get a
    // failure exit code.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                err.print()?;
            } else {
                println!("{USAGE}");
            }
            return Ok(());
        }
    };

    let Some(input) = cli.file else {
        println!("{USAGE}");
        return Ok(());
    };

    let source = fs::read_to_string(&input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    let records = parser::scan(&source, &diag::Stderr);
    let document = render::render(&records);

    fs::write(&cli.out, document)
        .with_context(|| format!("failed to write {}", cli.out.display()))?;

    let emitted = records.iter().filter(|r| !r.name.is_empty()).count();
    println!("Generated! {} function(s) written to \"{}\"", emitted, cli.out.display());

    Ok(())
}
