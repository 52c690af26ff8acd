#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cloud_catalog::run_server().await
}
