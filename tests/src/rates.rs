use crate::support::client;
use oca_epak::Value;
use oca_epak::models::shipping_rate_query::ShippingRateQuery;

#[tokio::test]
async fn get_shipping_rate() {
    let client = client().await;
    let rate = client
        .get_shipping_rate(&ShippingRateQuery {
            total_weight: "20".to_string(),
            total_volume: "0.0015".to_string(),
            origin_zip_code: "1414".to_string(),
            destination_zip_code: "5403".to_string(),
            declared_value: "100".to_string(),
            package_quantity: "1".to_string(),
            cuit: "30-99999999-7".to_string(),
            operation_code: "77790".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(rate.get("total"), Some(&Value::text("397.12")));
    assert_eq!(rate.get("plazo_entrega"), Some(&Value::text("3")));
}
