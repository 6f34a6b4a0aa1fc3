use std::io::{self, Write};
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use climate_tutor::assistant::gemini::GeminiProvider;
use climate_tutor::assistant::{Assistant, ChatSession, Turn};
use climate_tutor::catalog::Catalog;
use climate_tutor::config::Config;
use climate_tutor::links::{MapEmbed, web_search_url};
use climate_tutor::navigation::TerminalNavigator;
use climate_tutor::render;
use climate_tutor::repl::{self, Explorer};
use climate_tutor::search::SearchOutcome;

mod cli;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("climate_tutor=info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // 1. Load config
    let config = Config::load(&cli.config)?;
    config.validate().context("invalid configuration")?;

    // 2. Load catalog
    let catalog = Catalog::load_or_embedded(config.catalog_path.as_deref())
        .context("failed to load curriculum catalog")?;
    info!("Catalog ready: {} sections", catalog.len());

    // 3. Dispatch
    if let Err(e) = run(&config, &catalog, cli.command).await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }

    Ok(())
}

fn chat_session(config: &Config) -> Result<ChatSession> {
    let provider = GeminiProvider::from_config(&config.assistant)?;
    if !provider.has_api_key() {
        warn!(
            "No API key found in {}; assistant answers will report a connection error",
            config.assistant.api_key_env.join(", ")
        );
    }
    let assistant = Assistant::new(Arc::new(provider), &config.assistant);
    Ok(ChatSession::new(assistant))
}

async fn run(config: &Config, catalog: &Catalog, command: Commands) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Sections => {
            for s in catalog.sections() {
                writeln!(out, "{}", render::section_line(s))?;
            }
        }
        Commands::Show { id, point } => {
            let section = catalog
                .get(&id)
                .with_context(|| format!("unknown section: {id}"))?;
            let text = render::section_detail(section, point - 1, None, &config.map)?;
            write!(out, "{text}")?;
        }
        Commands::Search { query } => {
            let query = query.join(" ");
            let outcome = SearchOutcome::run(&query, catalog.sections());
            write!(out, "{}", render::search_results(&outcome)?)?;
        }
        Commands::Map { id, point, landmark } => {
            let section = catalog
                .get(&id)
                .with_context(|| format!("unknown section: {id}"))?;
            let Some(p) = section.point(point - 1) else {
                bail!("section {id} has no point {point}");
            };
            let Some(focus) = &p.map_info else {
                bail!("point \"{}\" has no map focus", p.text);
            };
            let embed = match landmark {
                Some(name) => {
                    let lm = focus
                        .landmark(&name)
                        .with_context(|| format!("no landmark named {name}"))?;
                    MapEmbed::for_landmark(lm, &config.map)
                }
                None => MapEmbed::for_focus(focus, &config.map),
            };
            writeln!(out, "{}", embed.url(&config.map.base_url)?)?;
        }
        Commands::WebSearch { query } => {
            let url = web_search_url(&query.join(" "), &config.web_search)?;
            writeln!(out, "{url}")?;
        }
        Commands::Ask { question } => {
            let session = chat_session(config)?;
            let question = question.join(" ");
            match session.submit(&question).await {
                Ok(turn) => write!(out, "{}", render::turn(&turn)?)?,
                Err(e) => bail!("{e}"),
            }
        }
        Commands::Chat => {
            let session = chat_session(config)?;
            let stdin = io::stdin();
            repl::run_chat(&session, stdin.lock(), &mut out).await?;
            print_transcript_summary(&session.transcript().await);
        }
        Commands::Explore => {
            let session = chat_session(config)?;
            let stdin = io::stdin();
            let navigator = TerminalNavigator::new(io::stdout());
            let mut explorer = Explorer::new(catalog, config, &session, navigator);
            explorer.run(stdin.lock(), &mut out).await?;
        }
    }

    Ok(())
}

fn print_transcript_summary(transcript: &[Turn]) {
    info!("Chat ended after {} exchanges", transcript.len() / 2);
}
