use anyhow::Result;
use mongopulse::cli::start;

#[tokio::main]
async fn main() -> Result<()> {
    start().await
}
