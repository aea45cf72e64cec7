use crate::support::{client, client_for};

#[tokio::test]
async fn valid_credentials() {
    let client = client().await;
    assert!(client.check_credentials().await.unwrap());
}

#[tokio::test]
async fn invalid_credentials() {
    let client = client_for("hey@you.com", "wrong").await;
    assert!(!client.check_credentials().await.unwrap());
}
