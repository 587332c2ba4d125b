//! One-shot diagnostic tool: authenticates with the credentials in
//! `.keys.json` and prints the currently installed stream filter rules.

use tracing_subscriber::EnvFilter;

use twitter_stream_rules::{Credentials, TwitterClient};

const CREDENTIALS_FILE: &str = ".keys.json";

#[tokio::main]
async fn main() -> twitter_stream_rules::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let credentials = Credentials::from_file(CREDENTIALS_FILE)?;
    let client = TwitterClient::connect(credentials.key(), credentials.secret()).await?;

    let rules = client.rules().list().await?;
    println!("Rules: {rules}");

    Ok(())
}
