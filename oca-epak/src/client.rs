use crate::config::ClientConfig;
use crate::enums::operation::Operation;
use crate::errors::sdk_error::SdkError;
use crate::http::http_client::HttpClient;
use crate::http::transport::Transport;
use crate::http::xml::envelope::SoapResponse;
use crate::http::xml::request::{build_envelope, build_masked_envelope};
use crate::models::delivery_status_query::DeliveryStatusQuery;
use crate::models::multiple_delivery_orders::MultipleDeliveryOrders;
use crate::models::pickup_order::PickupOrder;
use crate::models::shipment_list_query::ShipmentListQuery;
use crate::models::shipping_rate_query::ShippingRateQuery;
use crate::response::extract;
use crate::value::Value;
use log::{Level, debug, log_enabled, trace};
use std::sync::Arc;

const USER_PARAMETER: &str = "usr";
const PASSWORD_PARAMETER: &str = "psw";
const USER_EXISTS: &str = "1";

/// Defines the client itself, every e-Pak operation is done through an instance of this struct.
pub struct Client {
    username: String,
    password: String,
    config: ClientConfig,
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Returns a client for OCA's production e-Pak service.
    pub fn new(username: String, password: String) -> Self {
        Self::with_config(username, password, ClientConfig::default())
    }

    /// Returns a client posting over HTTP to the endpoint in `config`.
    pub fn with_config(username: String, password: String, config: ClientConfig) -> Self {
        let transport = Arc::new(HttpClient::new(&config.endpoint));
        Self::with_transport(username, password, config, transport)
    }

    /// Returns a client sending its requests through `transport`.
    pub fn with_transport(
        username: String,
        password: String,
        config: ClientConfig,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            username,
            password,
            config,
            transport,
        }
    }

    /// Checks whether the username and password are valid.
    pub async fn check_credentials(&self) -> Result<bool, SdkError> {
        let result = self
            .call(Operation::GetEpackUser, self.credentials())
            .await?;

        Ok(result.get("existe").and_then(Value::as_text) == Some(USER_EXISTS))
    }

    /// Creates a pickup order, which lets OCA know a delivery is coming.
    pub async fn create_pickup_order(&self, order: &PickupOrder) -> Result<Value, SdkError> {
        let mut message = self.credentials();
        message.extend(order.parameters());

        self.call(Operation::IngresoOr, message).await
    }

    /// Creates several pickup or admission orders grouped by origin.
    pub async fn create_multiple_delivery_orders(
        &self,
        orders: &MultipleDeliveryOrders,
    ) -> Result<Value, SdkError> {
        let mut message = self.credentials();
        message.extend(orders.parameters());

        self.call(Operation::IngresoOrMultiplesRetiros, message)
            .await
    }

    /// Cancels a delivery order. The result holds `id_result` and `mensaje`.
    pub async fn cancel_delivery_order(&self, delivery_order_id: &str) -> Result<Value, SdkError> {
        let mut message = self.credentials();
        message.push(("IdOrdenRetiro", delivery_order_id.to_string()));

        self.call(Operation::AnularOrdenGenerada, message).await
    }

    /// Returns the state of a delivery order, given the operation code returned when it was created.
    pub async fn get_order_result(&self, order_operation_code: &str) -> Result<Value, SdkError> {
        // This operation spells its credential parameters capitalized
        let message = vec![
            ("Usr", self.username.clone()),
            ("Psw", self.password.clone()),
            ("idCabecera", order_operation_code.to_string()),
        ];

        self.call(Operation::GetOrResult, message).await
    }

    /// Returns the rate and delivery estimate for a shipment.
    pub async fn get_shipping_rate(&self, query: &ShippingRateQuery) -> Result<Value, SdkError> {
        self.call(Operation::TarifarEnvioCorporativo, query.parameters())
            .await
    }

    /// Returns the current status of a delivery, if it exists and wasn't cancelled.
    pub async fn get_delivery_status(
        &self,
        query: &DeliveryStatusQuery,
    ) -> Result<Value, SdkError> {
        if query.tracking_code.is_none() && query.delivery_order_id.is_none() {
            return Err(SdkError::InvalidArgument);
        }

        self.call(Operation::GetEnvioEstadoActual, query.parameters())
            .await
    }

    /// Returns every OCA taxation center.
    pub async fn taxation_centers(&self) -> Result<Vec<Value>, SdkError> {
        Ok(self
            .call(Operation::GetCentrosImposicion, Vec::new())
            .await?
            .into_rows())
    }

    /// Returns the operation codes available to the user.
    pub async fn get_operation_codes(&self) -> Result<Vec<Value>, SdkError> {
        Ok(self
            .call(Operation::GetOperativasByUsuario, self.credentials())
            .await?
            .into_rows())
    }

    /// Returns the shipments a client made within a period.
    pub async fn list_shipments(&self, query: &ShipmentListQuery) -> Result<Vec<Value>, SdkError> {
        Ok(self
            .call(Operation::ListEnvios, query.parameters())
            .await?
            .into_rows())
    }

    /// Returns every province in Argentina with its ID and name.
    pub async fn provinces(&self) -> Result<Vec<Value>, SdkError> {
        Ok(self
            .call(Operation::GetProvincias, Vec::new())
            .await?
            .into_rows())
    }

    fn credentials(&self) -> Vec<(&'static str, String)> {
        vec![
            (USER_PARAMETER, self.username.clone()),
            (PASSWORD_PARAMETER, self.password.clone()),
        ]
    }

    async fn call(
        &self,
        operation: Operation,
        message: Vec<(&'static str, String)>,
    ) -> Result<Value, SdkError> {
        let soap_name = operation.soap_name();
        debug!("Calling {soap_name}");

        let envelope = build_envelope(&self.config.namespace, soap_name, &message)
            .or(Err(SdkError::InvalidArgument))?;

        if log_enabled!(Level::Trace) {
            if let Ok(masked) = build_masked_envelope(&self.config.namespace, soap_name, &message)
            {
                trace!("C: {masked}");
            }
        }

        let response = self
            .transport
            .call(&self.config.soap_action(soap_name), envelope)
            .await?;

        trace!("S: {}", response.body);

        let soap_response = match SoapResponse::from_xml(&response.body) {
            Ok(soap_response) => soap_response,
            Err(_) if !(200..300).contains(&response.status) => {
                return Err(SdkError::HttpStatus {
                    status: response.status,
                });
            }

            Err(error) => {
                return Err(SdkError::InvalidResponseXml {
                    reason: error.to_string(),
                });
            }
        };

        if let Some(fault) = soap_response.fault() {
            return Err(SdkError::SoapFault {
                code: fault.code,
                fault_string: fault.fault_string,
            });
        }

        if !(200..300).contains(&response.status) {
            return Err(SdkError::HttpStatus {
                status: response.status,
            });
        }

        Ok(extract(&soap_response, &operation.method_key())?)
    }
}

#[cfg(test)]
mod tests {
    use super::Client;
    use crate::config::ClientConfig;
    use crate::errors::sdk_error::SdkError;
    use crate::http::transport::{RawResponse, Transport};
    use crate::models::delivery_status_query::DeliveryStatusQuery;
    use crate::value::Value;
    use std::sync::{Arc, Mutex};

    /// Answers every call with the same response and remembers what was sent.
    struct CannedTransport {
        status: u16,
        body: String,
        sent: Mutex<Vec<(String, String)>>,
    }

    impl CannedTransport {
        fn new(status: u16, body: &str) -> Arc<Self> {
            Arc::new(Self {
                status,
                body: body.to_string(),
                sent: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait::async_trait]
    impl Transport for CannedTransport {
        async fn call(&self, soap_action: &str, envelope: String) -> Result<RawResponse, SdkError> {
            self.sent
                .lock()
                .unwrap()
                .push((soap_action.to_string(), envelope));

            Ok(RawResponse {
                status: self.status,
                body: self.body.clone(),
            })
        }
    }

    fn client(transport: Arc<CannedTransport>) -> Client {
        Client::with_transport(
            "hey@you.com".to_string(),
            "654321".to_string(),
            ClientConfig::default(),
            transport,
        )
    }

    fn dataset_response(operation: &str, table: &str, rows: &str) -> String {
        format!(
            r##"<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/"><soap:Body>
<{operation}Response xmlns="#Oca_e_Pak"><{operation}Result>
<xs:schema id="NewDataSet" xmlns:xs="http://www.w3.org/2001/XMLSchema"><xs:element name="NewDataSet"><xs:complexType><xs:choice><xs:element name="{table}"/></xs:choice></xs:complexType></xs:element></xs:schema>
<diffgr:diffgram xmlns:diffgr="urn:schemas-microsoft-com:xml-diffgram-v1"><NewDataSet xmlns="">{rows}</NewDataSet></diffgr:diffgram>
</{operation}Result></{operation}Response></soap:Body></soap:Envelope>"##
        )
    }

    #[tokio::test]
    async fn check_credentials_reads_existe() {
        let transport = CannedTransport::new(
            200,
            &dataset_response("GetEpackUser", "Table", "<Table><existe>1</existe></Table>"),
        );

        assert!(client(transport.clone()).check_credentials().await.unwrap());

        let sent = transport.sent.lock().unwrap();
        assert_eq!(sent[0].0, "#Oca_e_Pak/GetEpackUser");
        assert!(sent[0].1.contains("<usr>hey@you.com</usr><psw>654321</psw>"));
    }

    #[tokio::test]
    async fn unknown_user_is_not_valid() {
        let transport = CannedTransport::new(
            200,
            &dataset_response("GetEpackUser", "Table", "<Table><existe>0</existe></Table>"),
        );

        assert!(!client(transport).check_credentials().await.unwrap());
    }

    #[tokio::test]
    async fn list_operations_return_rows() {
        let transport = CannedTransport::new(
            200,
            &dataset_response(
                "GetProvincias",
                "Provincia",
                "<Provincia><IdProvincia>1</IdProvincia></Provincia>",
            ),
        );

        let provinces = client(transport).provinces().await.unwrap();
        assert_eq!(
            provinces,
            vec![Value::map([("id_provincia", Value::text("1"))])]
        );
    }

    #[tokio::test]
    async fn empty_datasets_are_empty_lists() {
        let transport = CannedTransport::new(200, &dataset_response("GetProvincias", "Provincia", ""));

        assert!(client(transport).provinces().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn faults_are_reported() {
        let transport = CannedTransport::new(
            500,
            r#"<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/"><soap:Body><soap:Fault><faultcode>soap:Server</faultcode><faultstring>Boom</faultstring></soap:Fault></soap:Body></soap:Envelope>"#,
        );

        match client(transport).provinces().await {
            Err(SdkError::SoapFault { code, fault_string }) => {
                assert_eq!(code, "soap:Server");
                assert_eq!(fault_string, "Boom");
            }

            other => panic!("Expected a SOAP fault, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_xml_error_pages_report_the_status() {
        let transport = CannedTransport::new(503, "Service Unavailable");

        assert!(matches!(
            client(transport).provinces().await,
            Err(SdkError::HttpStatus { status: 503 })
        ));
    }

    #[tokio::test]
    async fn delivery_status_needs_an_identifier() {
        let transport = CannedTransport::new(200, "");

        assert!(matches!(
            client(transport.clone())
                .get_delivery_status(&DeliveryStatusQuery::default())
                .await,
            Err(SdkError::InvalidArgument)
        ));
        assert!(transport.sent.lock().unwrap().is_empty());
    }
}
