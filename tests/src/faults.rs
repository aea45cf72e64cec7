use crate::support::start_mock;
use oca_epak::{Client, ClientConfig, SdkError};

#[tokio::test]
async fn unknown_operations_are_soap_faults() {
    let endpoint = start_mock().await;
    let client = Client::with_config(
        "hey@you.com".to_string(),
        "654321".to_string(),
        ClientConfig {
            endpoint,
            namespace: "urn:unknown".to_string(),
        },
    );

    match client.provinces().await {
        Err(SdkError::SoapFault { code, fault_string }) => {
            assert_eq!(code, "soap:Client");
            assert!(fault_string.contains("urn:unknown/GetProvincias"));
        }

        other => panic!("Expected a SOAP fault, got {other:?}"),
    }
}

#[tokio::test]
async fn wrong_endpoint_reports_the_status() {
    let endpoint = start_mock().await.replace("Oep_TrackEPak", "Missing");
    let client = Client::with_config(
        "hey@you.com".to_string(),
        "654321".to_string(),
        ClientConfig::with_endpoint(&endpoint),
    );

    assert!(matches!(
        client.provinces().await,
        Err(SdkError::HttpStatus { status: 404 })
    ));
}
