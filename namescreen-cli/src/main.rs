use clap::Parser;
use is_terminal::IsTerminal;
use namescreen::config::{LogLevel, load};
use namescreen::prelude::*;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

mod output;

#[derive(Parser)]
#[command(name = "namescreen")]
#[command(
    about = "Match an individual's name against a news article for adverse-media screening",
    long_about = None
)]
#[command(version = namescreen::VERSION)]
struct Cli {
    /// Full name of the individual to search for (e.g., 'John Smith')
    #[arg(long, short)]
    name: String,

    /// Path to the text file containing the news article
    #[arg(long, short)]
    filepath: PathBuf,

    /// Output format: 'text' for human-readable or 'json' for machine-readable
    #[arg(long, short, default_value = "text", value_parser = ["text", "json"])]
    output: String,

    /// Show detailed information including name variants and extracted names
    #[arg(long, short)]
    verbose: bool,

    /// Override the HIGH-confidence matching threshold (0-100)
    #[arg(long)]
    threshold: Option<f64>,

    /// Save the rendered report to the given file path
    #[arg(long)]
    save_report: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}

async fn run(cli: Cli) -> namescreen::Result<()> {
    let mut config = load()?;

    // Keep the terminal clean: the report is the output, logs are opt-in.
    config.logging.level = if cli.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Warn
    };
    // Machine-readable stdout must stay parseable
    if cli.output == "json" {
        config.logging.stdout = false;
    }

    if let Some(threshold) = cli.threshold {
        config.thresholds.high = threshold;
        // Preserve the strict tier partition when the override undercuts
        // the configured medium boundary.
        if config.thresholds.medium >= threshold {
            config.thresholds.medium = threshold * 0.8;
        }
    }

    let screener = namescreen::init(config)?;

    let article_text = load_article(&cli.filepath)?;
    info!(
        chars = article_text.len(),
        path = %cli.filepath.display(),
        "article loaded"
    );

    let report = screener.screen_report(&cli.name, &article_text).await?;

    let rendered = if cli.output == "json" {
        output::format_json(&report.result)
    } else {
        output::format_text(&report, cli.verbose)
    };

    println!("{rendered}");

    if let Some(path) = &cli.save_report {
        output::save_report(&rendered, path, &cli.output);
    }

    Ok(())
}

fn load_article(path: &std::path::Path) -> namescreen::Result<String> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        ScreenError::InvalidInput(format!("cannot read article file {}: {e}", path.display()))
    })?;

    if content.trim().is_empty() {
        return Err(ScreenError::InvalidInput(format!(
            "article file is empty: {}",
            path.display()
        )));
    }

    Ok(content)
}
