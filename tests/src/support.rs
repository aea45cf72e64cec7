use env_logger::Env;
use mock_server::MockEpak;
use mock_server::mock_epak::{ENDPOINT_PATH, VALID_PASSWORD, VALID_USER};
use oca_epak::{Client, ClientConfig};
use tokio::net::TcpListener;

/// Starts a mock e-Pak server on a free port and returns its endpoint URL.
pub async fn start_mock() -> String {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("trace"))
        .is_test(true)
        .try_init();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(MockEpak::serve(listener));

    format!("http://{address}{ENDPOINT_PATH}")
}

pub async fn client() -> Client {
    client_for(VALID_USER, VALID_PASSWORD).await
}

pub async fn client_for(username: &str, password: &str) -> Client {
    let endpoint = start_mock().await;
    Client::with_config(
        username.to_string(),
        password.to_string(),
        ClientConfig::with_endpoint(&endpoint),
    )
}
