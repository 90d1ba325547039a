use anyhow::Context;
use nc_news::infra::{config, logging};
use nc_news::storage::seed;
use nc_news::SeedData;
use sqlx::postgres::PgPoolOptions;

const DEFAULT_DATA_FILE: &str = "data/test-data.json";

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin seed -- [DATA_FILE]\n\
         \n\
         Drops and recreates the NC News tables, then inserts DATA_FILE\n\
         (default: {}).\n\
         \n\
         Requires env vars:\n\
           DATABASE_URL\n",
        DEFAULT_DATA_FILE
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init("nc-news-seed");

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }
    let path = args
        .first()
        .map(String::as_str)
        .unwrap_or(DEFAULT_DATA_FILE);

    let raw = std::fs::read_to_string(path).with_context(|| format!("reading {}", path))?;
    let data = SeedData::from_json(&raw)?;

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&config::database_url()?)
        .await
        .context("connecting to Postgres")?;

    seed(&pool, &data).await?;
    tracing::info!(path, "seed complete");
    Ok(())
}
