use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    multiagent_brainstorm::cli::run().await
}
