//! Triplegraph CLI: fetch or read an N-Triples document and print the indexed
//! graph as JSON.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use triplegraph::{Config, FetchRequest, GraphService, Response};

#[derive(Parser)]
#[command(name = "triplegraph", version, about = "Index N-Triples documents by subject")]
struct Cli {
    /// YAML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Bearer token for the Authorization header (overrides TRIPLEGRAPH_BEARER_TOKEN)
    #[arg(long, global = true)]
    bearer_token: Option<String>,

    /// Extra request header, as `Key: Value` (repeatable)
    #[arg(short = 'H', long = "header", global = true, value_parser = parse_header)]
    headers: Vec<(String, String)>,

    /// Bucket subjects by this `rdf:type` IRI (repeatable, order kept)
    #[arg(long = "type", global = true, value_name = "IRI")]
    types: Vec<String>,

    /// Pretty-print the JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a document over HTTP and index it
    Fetch {
        /// Document URI
        uri: String,
    },
    /// Index a local N-Triples file
    File {
        /// Path to the file
        path: PathBuf,
    },
}

fn parse_header(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected `Key: Value`, got `{raw}`"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty header name in `{raw}`"));
    }
    Ok((key.to_string(), value.trim().to_string()))
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let pretty = cli.pretty;

    let response = match execute(cli).await {
        Ok(response) => response,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = print_response(&response, pretty) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
    std::process::exit(exit_code(&response));
}

/// Load config, then fetch or read the document and index it
async fn execute(cli: Cli) -> anyhow::Result<Response> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::default(),
    }
    .with_env_overrides();
    if let Some(token) = cli.bearer_token {
        config.fetch.bearer_token = Some(token);
    }

    let service = GraphService::new(config)?;

    let response = match cli.command {
        Commands::Fetch { uri } => {
            let mut request = FetchRequest::new(uri);
            request.headers = cli.headers;
            service.get_and_process_request(&request).await
        }
        Commands::File { path } => {
            if !cli.headers.is_empty() {
                bail!("--header only applies to `fetch`");
            }
            let body = tokio::fs::read(&path)
                .await
                .with_context(|| format!("reading {}", path.display()))?;
            let uri = format!("file://{}", path.display());
            service.process_bytes(&uri, 0, &body)
        }
    };

    Ok(response.with_type_filter(cli.types.as_slice()))
}

fn exit_code(response: &Response) -> i32 {
    if response.is_success() {
        0
    } else {
        1
    }
}

fn print_response(response: &Response, pretty: bool) -> anyhow::Result<()> {
    println!("{}", response.to_json(pretty)?);
    Ok(())
}
