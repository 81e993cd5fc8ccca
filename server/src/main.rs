#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();
    let config = tasksum_server::config::Config::from_env()?;
    tasksum_server::web::start_web_server(config).await
}
