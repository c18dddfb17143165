use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use chordsheet::{ChartError, Config, Document, LineKind};
use clap::{Parser, ValueEnum};

/// Looked up in the working directory when `--config` is not given.
const DEFAULT_CONFIG_FILE: &str = "chordsheet.toml";

#[derive(Parser)]
#[command(name = "chordsheet")]
#[command(about = "Render plain-text chord charts as aligned chord sheets")]
struct Cli {
    /// Input chart file
    input: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Rendering config (defaults to ./chordsheet.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// What to emit
    #[arg(short, long, value_enum, default_value_t = Format::Typst)]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Typst markup for the rendered sheet
    Typst,
    /// Sections and classified lines, for checking how a chart was read
    Outline,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), ChartError> {
    let source = fs::read_to_string(&cli.input).map_err(|source| ChartError::Read {
        path: cli.input.clone(),
        source,
    })?;

    let config = match &cli.config {
        Some(path) => Config::try_load(path)?,
        None => Config::load(Path::new(DEFAULT_CONFIG_FILE)),
    };

    let rendered = match cli.format {
        Format::Typst => chordsheet::chart_to_typst_with_config(&source, &config),
        Format::Outline => outline(&chordsheet::parse(&source)),
    };

    match cli.output {
        Some(path) => {
            fs::write(&path, rendered).map_err(|source| ChartError::Write {
                path: path.clone(),
                source,
            })?;
            println!("Created {}", path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

fn outline(document: &Document) -> String {
    let mut out = String::new();

    for section in &document.sections {
        let border = if section.has_border { "*" } else { "" };
        match &section.label {
            Some(label) => {
                let _ = writeln!(out, "[{label}]{border}");
            }
            None => {
                let _ = writeln!(out, "(unlabeled){border}");
            }
        }

        for line in &section.lines {
            let kind = match line.kind {
                LineKind::Chord => "chord",
                LineKind::Lyrics => "lyrics",
                LineKind::Empty => "empty",
            };
            let marker = if line.inline_after_label { ">" } else { " " };
            let _ = writeln!(out, "  {marker}{kind:<6} {}", line.text);
        }
    }

    out
}
