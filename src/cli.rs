//! Command-line interface: the HTTP server plus headless commands that print
//! JSON to stdout.

use crate::logging;
use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use portfolio_core::config::{Config, SearchConfig};
use portfolio_core::{Catalog, RecordStore, SearchQuery, SortOrder, TracingObserver};
use portfolio_web::AppState;
use serde_json::{json, Value};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "portfolio", version, about = "Portfolio: query a catalog of projects")]
pub struct Cli {
    /// Log at debug level regardless of configuration.
    #[arg(long, global = true)]
    pub debug: bool,

    /// Config file to use instead of ~/.config/portfolio/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Project data file. Overrides `[data] path`.
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the JSON HTTP routes.
    Serve {
        /// Address to listen on. Overrides `[server] bind`.
        #[arg(long)]
        bind: Option<String>,
    },
    /// Print the number of projects.
    Count,
    /// Print one project.
    Get {
        #[arg(allow_negative_numbers = true)]
        project_no: i64,
    },
    /// Print every technique in use, sorted.
    Techniques,
    /// Print which projects use each technique, or one technique's projects.
    Stats { technique: Option<String> },
    /// Filter and sort projects.
    Search(SearchArgs),
}

#[derive(Debug, Default, Args)]
pub struct SearchArgs {
    /// Free-text search string (case-insensitive substring).
    #[arg(long)]
    pub text: Option<String>,

    /// Restrict the text search to this field. Repeatable.
    #[arg(long = "field", value_name = "FIELD")]
    pub fields: Vec<String>,

    /// Required technique. Repeatable; all must match.
    #[arg(long = "technique", value_name = "TECHNIQUE")]
    pub techniques: Vec<String>,

    /// Field to sort by.
    #[arg(long)]
    pub sort_by: Option<String>,

    /// asc or desc.
    #[arg(long)]
    pub sort_order: Option<SortOrder>,
}

impl SearchArgs {
    /// Build the query; empty repeatable flags mean "not given".
    pub fn to_query(&self, defaults: &SearchConfig) -> SearchQuery {
        SearchQuery {
            sort_by: self
                .sort_by
                .clone()
                .unwrap_or_else(|| defaults.sort_by.clone()),
            sort_order: self.sort_order.unwrap_or(defaults.sort_order),
            techniques: (!self.techniques.is_empty()).then(|| self.techniques.clone()),
            search: self.text.clone().filter(|t| !t.is_empty()),
            search_fields: (!self.fields.is_empty()).then(|| self.fields.clone()),
        }
    }
}

/// Run a parsed command line.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let (config, fallback) = match &cli.config {
        Some(path) => (
            Config::load_from(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None,
        ),
        None => match Config::load() {
            Ok(config) => (config, None),
            Err(err) => (Config::defaults(), Some(err)),
        },
    };
    logging::init(&config.logging, cli.debug)?;
    if let Some(err) = fallback {
        tracing::warn!(error = %err, "using built-in config defaults");
    }

    let data_path = cli.data.unwrap_or_else(|| config.data.path.clone());

    if let Command::Serve { bind } = &cli.command {
        let bind = bind.clone().unwrap_or_else(|| config.server.bind.clone());
        let listener = tokio::net::TcpListener::bind(&bind)
            .await
            .with_context(|| format!("failed to bind {bind}"))?;
        let state = AppState::new(data_path).with_search_defaults(config.search.clone());
        portfolio_web::serve(listener, state).await?;
        return Ok(());
    }

    let store = RecordStore::load(&data_path)?;
    let observer = TracingObserver;
    let catalog = Catalog::new(&store).with_observer(&observer);
    let output = headless(&catalog, &cli.command, &config.search)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Answer a headless command as JSON.
pub fn headless(
    catalog: &Catalog<'_>,
    command: &Command,
    defaults: &SearchConfig,
) -> anyhow::Result<Value> {
    let output = match command {
        Command::Serve { .. } => anyhow::bail!("serve is not a headless command"),
        Command::Count => json!({ "project_count": catalog.count() }),
        Command::Get { project_no } => {
            let project = catalog
                .get(*project_no)
                .with_context(|| format!("no project with project_no {project_no}"))?;
            serde_json::to_value(project)?
        }
        Command::Techniques => json!({ "techniques": catalog.techniques() }),
        Command::Stats { technique: None } => serde_json::to_value(catalog.technique_stats())?,
        Command::Stats {
            technique: Some(technique),
        } => {
            let projects = catalog
                .technique(technique)
                .with_context(|| format!("no project uses technique {technique:?}"))?;
            json!({ "technique": technique, "projects": projects })
        }
        Command::Search(args) => {
            let query = args.to_query(defaults);
            let results = catalog.search(&query)?;
            json!({
                "search": query.search.unwrap_or_default(),
                "count": results.len(),
                "results": results,
            })
        }
    };
    Ok(output)
}
