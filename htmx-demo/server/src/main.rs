#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();
    let config = htmx_demo_server::config::Config::from_env()?;
    htmx_demo_server::web::start_web_server(config).await
}
