use crate::support::client;
use oca_epak::Value;

#[tokio::test]
async fn provinces() {
    let client = client().await;
    let provinces = client.provinces().await.unwrap();

    assert_eq!(provinces.len(), 2);
    assert_eq!(
        provinces[0].get("descripcion"),
        Some(&Value::text("CAPITAL FEDERAL"))
    );
    assert_eq!(provinces[1].get("id_provincia"), Some(&Value::text("2")));
}

#[tokio::test]
async fn operation_codes() {
    let client = client().await;
    let codes = client.get_operation_codes().await.unwrap();

    assert_eq!(codes.len(), 2);
    assert_eq!(codes[1].get("nro_producto"), Some(&Value::text("77791")));
}

#[tokio::test]
async fn taxation_centers_can_be_empty() {
    let client = client().await;
    assert!(client.taxation_centers().await.unwrap().is_empty());
}
