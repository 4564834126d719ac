use docchat::config::AppConfig;
use docchat::infrastructure::AppContainer;
use docchat::presentation::http::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env()?;
    let container = AppContainer::new(&config)?;

    HttpServer::new(&container, &config).run().await
}
