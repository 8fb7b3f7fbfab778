mod error;
mod fetch;
mod model;
mod parser;
mod render;
mod settings;
mod store;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::settings::Settings;

#[derive(Parser)]
#[command(name = "p8scrape", about = "Scrape the PICO-8 manual API reference into Lua definitions")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ScrapeArgs {
    /// Skip the network and read the local copy of the manual
    #[arg(long = "fallback", visible_alias = "fb")]
    fallback: bool,
    /// Local copy of the manual
    #[arg(long)]
    fallback_file: Option<PathBuf>,
    /// Manual URL
    #[arg(long)]
    url: Option<String>,
    /// Where to write the JSON extract
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract function signatures from the manual into JSON
    Scrape(ScrapeArgs),
    /// Render the JSON extract as stubs
    Render {
        /// JSON extract to read
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Where to write the stubs
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// lua or markdown
        #[arg(short, long, default_value = "lua")]
        format: String,
    },
    /// Scrape + render in one go
    Run {
        #[command(flatten)]
        scrape: ScrapeArgs,
        /// Where to write the stubs
        #[arg(long)]
        definitions: Option<PathBuf>,
        /// lua or markdown
        #[arg(short, long, default_value = "lua")]
        format: String,
    },
    /// Signatures overview table
    Overview {
        /// Only this category (e.g. "GRAPHICS")
        #[arg(short, long)]
        category: Option<String>,
        /// Max rows to display
        #[arg(short = 'n', long, default_value = "50")]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let mut settings = Settings::load()?;

    let result = match cli.command {
        Commands::Scrape(args) => {
            args.apply(&mut settings);
            let count = scrape(&settings, args.fallback).await?;
            println!(
                "Extracted {} signatures to {}",
                count,
                settings.output_path.display()
            );
            Ok(())
        }
        Commands::Render { input, output, format } => {
            if let Some(input) = input {
                settings.output_path = input;
            }
            render(&settings, &format, output.as_deref())
        }
        Commands::Run { scrape: args, definitions, format } => {
            args.apply(&mut settings);

            let t_scrape = Instant::now();
            let count = scrape(&settings, args.fallback).await?;
            println!(
                "Extracted {} signatures in {:.1}s",
                count,
                t_scrape.elapsed().as_secs_f64()
            );
            render(&settings, &format, definitions.as_deref())
        }
        Commands::Overview { category, limit } => overview(&settings, category.as_deref(), limit),
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    result
}

impl ScrapeArgs {
    fn apply(&self, settings: &mut Settings) {
        if let Some(path) = &self.fallback_file {
            settings.fallback_path = path.clone();
        }
        if let Some(url) = &self.url {
            settings.manual_url = url.clone();
        }
        if let Some(path) = &self.output {
            settings.output_path = path.clone();
        }
    }
}

/// Load, extract, save. Nothing is written when extraction fails.
async fn scrape(settings: &Settings, use_fallback: bool) -> Result<usize> {
    let html = fetch::load_manual(settings, use_fallback).await?;
    let api = parser::extract_api(&html, &settings.boundaries())?;
    store::save_api(&settings.output_path, &api)?;
    Ok(api.len())
}

/// Without an explicit `output`, the configured definitions path takes the renderer's extension.
fn render(settings: &Settings, format: &str, output: Option<&Path>) -> Result<()> {
    let renderer = render::create_renderer(format)?;

    let input = &settings.output_path;
    if !input.exists() {
        println!(
            "API extract missing at {}.\nRun `p8scrape scrape` first to scrape the API Reference.",
            input.display()
        );
        return Ok(());
    }

    let api = store::load_api(input)?;
    let out = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| settings.definitions_path.with_extension(renderer.file_extension()));
    store::write_artifact(&out, &renderer.render(&api))?;
    info!("Rendered {} stubs as {}", api.len(), renderer.file_extension());
    println!("Wrote {} stubs to {}", api.len(), out.display());
    Ok(())
}

fn overview(settings: &Settings, category: Option<&str>, limit: usize) -> Result<()> {
    let input = &settings.output_path;
    if !input.exists() {
        println!("No API extract at {}. Run 'scrape' first.", input.display());
        return Ok(());
    }

    let api = store::load_api(input)?;
    let rows: Vec<_> = api
        .iter()
        .filter(|s| category.map_or(true, |c| s.category.as_deref() == Some(c)))
        .collect();
    if rows.is_empty() {
        println!("No signatures found.");
        return Ok(());
    }

    println!(
        "{:>3} | {:<12} | {:<14} | {:<40} | {:>5}",
        "#", "Name", "Category", "Params", "Desc"
    );
    println!("{}", "-".repeat(86));

    for (i, s) in rows.iter().take(limit).enumerate() {
        let params: Vec<String> = s
            .params
            .iter()
            .map(|p| if p.optional { format!("{}?", p.name) } else { p.name.clone() })
            .collect();
        println!(
            "{:>3} | {:<12} | {:<14} | {:<40} | {:>5}",
            i + 1,
            truncate(&s.name, 12),
            truncate(s.category.as_deref().unwrap_or("-"), 14),
            truncate(&params.join(", "), 40),
            s.desc.chars().count()
        );
    }

    if category.is_none() {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for s in &rows {
            *counts.entry(s.category.as_deref().unwrap_or("-")).or_default() += 1;
        }
        println!("\n--- Categories ---");
        for (name, n) in &counts {
            println!("  {}: {}", name, n);
        }
    }

    let blank = rows.iter().filter(|s| s.desc.is_empty()).count();
    println!("\n{} signatures ({} without description)", rows.len(), blank);
    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}
