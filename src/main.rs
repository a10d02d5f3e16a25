use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use investigation_pdf::{DocumentConfig, Error, FontConfig, render_report_json};

#[derive(Parser, Debug)]
#[command(version, about = "Render a case-investigation report (JSON) into a PDF")]
struct Cli {
    /// Report record as JSON
    input: PathBuf,

    /// Where to write the PDF
    output: PathBuf,

    /// Font family candidates, `;`-separated. `standard` uses built-in Helvetica only.
    #[arg(long)]
    font: Option<String>,

    /// Log debug output
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: &Cli) -> Result<usize, Error> {
    let mut config = DocumentConfig::default();
    match cli.font.as_deref() {
        Some("standard") => config.fonts = FontConfig::standard(),
        Some(families) => config.fonts = FontConfig::families(families),
        None => {}
    }

    let input = std::fs::read(&cli.input)?;
    let bytes = render_report_json(&input, &config)?;
    std::fs::write(&cli.output, &bytes)?;
    Ok(bytes.len())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(&cli) {
        Ok(len) => {
            println!("Wrote {} ({len} bytes)", cli.output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{} → {}: {e}", cli.input.display(), cli.output.display());
            ExitCode::FAILURE
        }
    }
}
