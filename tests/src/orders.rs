use crate::support::{client, client_for};
use oca_epak::models::multiple_delivery_orders::MultipleDeliveryOrders;
use oca_epak::models::pickup_order::PickupOrder;
use oca_epak::{SdkError, Value};

const PICKUP_XML: &str = r#"<?xml version="1.0" encoding="iso-8859-1" standalone="yes"?><ROWS><cabecera ver="1.0" nrocuenta="111757/001" /></ROWS>"#;

#[tokio::test]
async fn create_pickup_order() {
    let client = client().await;
    let result = client
        .create_pickup_order(&PickupOrder::new(PICKUP_XML.to_string()))
        .await
        .unwrap();

    assert_eq!(
        result.path(&["resumen", "codigo_operacion"]),
        Some(&Value::text("1234567"))
    );
    assert_eq!(
        result.path(&["detalle_ingresos", "numero_envio"]),
        Some(&Value::text("3867500000001234567"))
    );
}

#[tokio::test]
async fn create_multiple_delivery_orders_keeps_missing_tables() {
    let client = client().await;
    let result = client
        .create_multiple_delivery_orders(&MultipleDeliveryOrders::new(PICKUP_XML.to_string()))
        .await
        .unwrap();

    assert_eq!(
        result.path(&["resumen", "cantidad_registros"]),
        Some(&Value::text("2"))
    );
    assert_eq!(result.get("detalle_ingresos"), Some(&Value::Null));
}

#[tokio::test]
async fn rejected_pickup_order() {
    let client = client_for("hey@you.com", "wrong").await;

    match client
        .create_pickup_order(&PickupOrder::new(PICKUP_XML.to_string()))
        .await
    {
        Err(SdkError::RemoteRejection { description }) => {
            assert_eq!(description, "Usuario y/o contraseña inválidos")
        }

        other => panic!("Expected a rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn cancel_delivery_order() {
    let client = client().await;
    let result = client.cancel_delivery_order("8").await.unwrap();

    assert_eq!(result.get("id_result"), Some(&Value::text("100")));
    assert_eq!(
        result.get("mensaje"),
        Some(&Value::text("La orden fue anulada"))
    );
}

#[tokio::test]
async fn get_order_result() {
    let client = client().await;
    let result = client.get_order_result("1234567").await.unwrap();

    assert_eq!(result.get("orden_retiro"), Some(&Value::text("8")));
}
