use env_logger::Env;
use log::info;
use mock_server::MockEpak;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("trace")).init();
    info!("Starting Mock Server");
    MockEpak::listen().await;
}
