use spherical_geodesy::api::formatting::render;
use spherical_geodesy::{AnswerFormatter, ConfigurationManager, OutputFormat, Query, QueryEngine};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "<queries.json> [--config <config.json>] [--format text|json|csv]";

struct Args {
    queries_path: String,
    config_path: Option<String>,
    format: Option<OutputFormat>,
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut queries_path = None;
    let mut config_path = None;
    let mut format = None;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let value = iter.next().ok_or("--config requires a file path")?;
                config_path = Some(value.clone());
            }
            "--format" => {
                let value = iter.next().ok_or("--format requires a value")?;
                format = Some(value.parse::<OutputFormat>()?);
            }
            other if other.starts_with("--") => {
                return Err(format!("unknown option '{}'", other));
            }
            path => {
                if queries_path.replace(path.to_string()).is_some() {
                    return Err("only one query file may be given".to_string());
                }
            }
        }
    }

    Ok(Args {
        queries_path: queries_path.ok_or("missing query file")?,
        config_path,
        format,
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map_or("spherical", |s| s.as_str());

    let parsed = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Usage: {} {}", program, USAGE);
            return Err("Invalid arguments".into());
        }
    };

    let mut manager = match &parsed.config_path {
        Some(path) => ConfigurationManager::from_file(path)?,
        None => ConfigurationManager::new(),
    };
    if let Some(format) = parsed.format {
        manager.set_output_format(format);
    }
    let config = manager.config().clone();

    let json_data = std::fs::read_to_string(&parsed.queries_path)?;
    let queries: Vec<Query> = serde_json::from_str(&json_data)?;
    debug!(count = queries.len(), path = %parsed.queries_path, "read queries");

    let engine = QueryEngine::new(config.clone());
    let answers = engine.evaluate_batch(&queries);
    info!(count = answers.len(), radius_m = config.radius_m, "evaluated queries");

    let formatted = AnswerFormatter::new()
        .with_precision(config.precision)
        .format_batch(&queries, &answers);
    println!("{}", render(config.output_format, &formatted)?);

    Ok(())
}
