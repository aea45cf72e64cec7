use crate::support::client;
use oca_epak::models::delivery_status_query::DeliveryStatusQuery;
use oca_epak::models::shipment_list_query::ShipmentListQuery;
use oca_epak::{SdkError, Value};

#[tokio::test]
async fn get_delivery_status() {
    let client = client().await;
    let status = client
        .get_delivery_status(&DeliveryStatusQuery {
            tracking_code: Some("3867500000001234567".to_string()),
            delivery_order_id: None,
        })
        .await
        .unwrap();

    assert_eq!(
        status.get("estado"),
        Some(&Value::text("En proceso de Retiro"))
    );
}

#[tokio::test]
async fn unknown_delivery_has_no_status() {
    let client = client().await;
    let status = client
        .get_delivery_status(&DeliveryStatusQuery {
            tracking_code: None,
            delivery_order_id: Some("0".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(status, Value::Null);
}

#[tokio::test]
async fn delivery_status_without_identifiers() {
    let client = client().await;

    assert!(matches!(
        client
            .get_delivery_status(&DeliveryStatusQuery::default())
            .await,
        Err(SdkError::InvalidArgument)
    ));
}

#[tokio::test]
async fn list_shipments_wraps_a_single_row() {
    let client = client().await;
    let shipments = client
        .list_shipments(&ShipmentListQuery::new("30-99999999-7".to_string()))
        .await
        .unwrap();

    assert_eq!(shipments.len(), 1);
    assert_eq!(
        shipments[0].get("numero_envio"),
        Some(&Value::text("3867500000001234567"))
    );
}
