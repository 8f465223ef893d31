//! a2l - render a serialized AsciiDoc node tree to LaTeX.

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::Read;
#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use std::process;

#[cfg(feature = "cli")]
use asciitex::{render_document, RenderError, RenderOptions};
#[cfg(feature = "cli")]
use asciitex_ir::Document;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "a2l")]
#[command(version)]
#[command(about = "Render an AsciiDoc node tree (JSON) to LaTeX", long_about = None)]
struct Cli {
    /// Input file path (reads from stdin if not provided)
    input: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Render the body only, without preamble and front matter
    #[arg(long)]
    embedded: bool,

    /// Directory with preamble/macro template overrides
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Suppress diagnostics on stderr
    #[arg(short, long)]
    quiet: bool,

    /// Write the collected diagnostics as JSON to this path
    #[arg(long)]
    diag_log: Option<PathBuf>,

    /// Disable colored diagnostics
    #[arg(long)]
    no_color: bool,
}

#[cfg(feature = "cli")]
fn run(cli: &Cli) -> Result<(), RenderError> {
    let input = match &cli.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let mut doc: Document = serde_json::from_str(&input)?;
    if cli.embedded {
        doc.embedded = true;
    }

    let options = RenderOptions {
        data_dir: cli.data_dir.clone(),
    };
    let output = render_document(&doc, &options)?;

    if !cli.quiet {
        for diagnostic in &output.diagnostics {
            if cli.no_color {
                eprintln!("{}", diagnostic);
            } else {
                eprintln!("{}{}\x1b[0m", diagnostic.color_code(), diagnostic);
            }
        }
    }

    if let Some(path) = &cli.diag_log {
        let json = serde_json::to_string_pretty(&output.diagnostics)?;
        fs::write(path, json)?;
    }

    match &cli.output {
        Some(path) => fs::write(path, &output.content)?,
        None => print!("{}", output.content),
    }
    Ok(())
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("a2l was built without the 'cli' feature");
}
