#[tokio::main]
async fn main() -> anyhow::Result<()> {
    schoolchat_server::start().await
}
