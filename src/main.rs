//! Archer Client - command line front end
//!
//! Fetches dashboard endpoints through the caching client, with filters
//! given as `field=value` arguments.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use archer_client::filters::{FieldMapping, FilterStore, ListQuery};
use archer_client::models::GridParams;
use archer_client::{spawn_prune_task, ApiClient, Config};

/// Dashboard API client with request caching and filter support.
#[derive(Parser, Debug)]
#[command(name = "archer_client")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch an endpoint, e.g. `get /api/files repo=archer`.
    Get {
        /// Endpoint path, resolved against API_BASE_URL
        path: String,

        /// Filters as FIELD=VALUE (fields: file, proj, repo, person)
        #[arg(value_name = "FIELD=VALUE")]
        filters: Vec<String>,

        /// Rename a filter field in the query, as FIELD=KEY
        #[arg(long = "rename", value_name = "FIELD=KEY")]
        rename: Vec<String>,

        /// Column to sort by
        #[arg(long)]
        sort: Option<String>,

        /// Sort descending
        #[arg(long)]
        desc: bool,

        #[arg(long)]
        offset: Option<usize>,

        #[arg(long)]
        limit: Option<usize>,
    },

    /// Send a JSON body with PATCH, e.g. `patch /api/repos/1/commits/2 '{"ignore":true}'`.
    Patch {
        path: String,

        /// JSON request body
        body: String,
    },
}

fn parse_pair(arg: &str) -> anyhow::Result<(String, String)> {
    match arg.split_once('=') {
        Some((k, v)) if !k.is_empty() => Ok((k.to_string(), v.to_string())),
        _ => bail!("expected NAME=VALUE, got '{}'", arg),
    }
}

async fn run(client: &ApiClient, command: Command) -> anyhow::Result<Value> {
    match command {
        Command::Get {
            path,
            filters,
            rename,
            sort,
            desc,
            offset,
            limit,
        } => {
            let mut store = FilterStore::default();
            let pairs = filters
                .iter()
                .map(|f| parse_pair(f))
                .collect::<anyhow::Result<Vec<_>>>()?;
            store.patch(pairs.into_iter().map(|(k, v)| (k, Some(v))))?;

            let mapping = rename
                .iter()
                .map(|r| parse_pair(r))
                .collect::<anyhow::Result<FieldMapping>>()?;

            let mut grid = GridParams::new();
            if let Some(column) = sort {
                grid = grid.sort(column, !desc);
            }
            grid.offset = offset;
            grid.limit = limit;

            let url = ListQuery::new(path)
                .grid(grid)
                .filters(store.to_query_string(Some(&mapping)))
                .build();
            info!(%url, "fetching");
            Ok(client.get(&url).await?)
        }
        Command::Patch { path, body } => {
            let body: Value = serde_json::from_str(&body).context("request body is not valid JSON")?;
            Ok(client.patch(&path, &body).await?)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "archer_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config::from_env();
    info!(
        "Configuration loaded: base_url={}, cache_capacity={}, error_window={}s",
        config.base_url, config.cache_capacity, config.error_window
    );

    let client = ApiClient::from_config(&config)?;
    let prune_handle = spawn_prune_task(client.outcomes(), config.prune_interval);

    let result = run(&client, cli.command).await;
    prune_handle.abort();

    match result {
        Ok(body) => {
            println!("{}", serde_json::to_string_pretty(&body)?);
            Ok(())
        }
        Err(err) => {
            let errors = client.errors().await;
            if !errors.is_empty() {
                eprintln!("{}", errors);
            }
            Err(err)
        }
    }
}
