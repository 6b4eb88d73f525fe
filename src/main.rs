//! Command-line entry point for the icon asset pipeline.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use iconforge::{GeneratorConfig, IconGenerator, RunSummary, SvgRenderer};

/// Platforms covered by a bare `generate` (store listings are opt-in via
/// `generate store` or `generate-all`).
const DEFAULT_PLATFORMS: &[&str] = &["android", "ios", "web", "flutter"];

#[derive(Debug, Parser)]
#[command(
    name = "iconforge",
    about = "Generate platform icon packs from built-in vector templates",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate assets for the named platforms (android, ios, web, flutter,
    /// store); defaults to every platform except store listings.
    Generate {
        /// Platform identifiers to generate.
        platforms: Vec<String>,

        /// Output directory.
        #[arg(short, long, value_name = "DIR", default_value = "./icon_pack")]
        output: PathBuf,
    },

    /// Generate every platform pass, including store listings.
    GenerateAll {
        /// Output directory.
        #[arg(short, long, value_name = "DIR", default_value = "./icon_pack")]
        output: PathBuf,
    },

    /// Materialize the framework asset directory inside a project checkout.
    FlutterSetup {
        /// Path to the target project root.
        #[arg(short, long, value_name = "PATH")]
        project: PathBuf,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version land here too; only real parse errors fail.
            let _ = err.print();
            return if err.exit_code() == 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            };
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let generator = IconGenerator::new(GeneratorConfig::default(), SvgRenderer::new());

    match cli.command {
        Command::Generate { platforms, output } => {
            let ids: Vec<&str> = if platforms.is_empty() {
                DEFAULT_PLATFORMS.to_vec()
            } else {
                platforms.iter().map(String::as_str).collect()
            };
            let summary = generator.generate(&output, &ids)?;
            report(&summary, &output);
        }
        Command::GenerateAll { output } => {
            let summary = generator.generate_all(&output)?;
            report(&summary, &output);
        }
        Command::FlutterSetup { project } => {
            let summary = generator.generate(&project, &["flutter"])?;
            report(&summary, &project);
            println!(
                "merge {} into your pubspec.yaml to finish the setup",
                project.join("flutter/flutter_assets.yaml").display()
            );
        }
    }

    Ok(())
}

fn report(summary: &RunSummary, output: &std::path::Path) {
    println!(
        "wrote {} files to {}",
        summary.total_files(),
        output.display()
    );
    for pass in &summary.platforms {
        println!("  {}: {} files", pass.platform, pass.files.len());
    }
}
