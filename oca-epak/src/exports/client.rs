use crate::config::ClientConfig;
use crate::errors::sdk_error::SdkError;
use crate::models::delivery_status_query::DeliveryStatusQuery;
use crate::models::multiple_delivery_orders::MultipleDeliveryOrders;
use crate::models::pickup_order::PickupOrder;
use crate::models::shipment_list_query::ShipmentListQuery;
use crate::models::shipping_rate_query::ShippingRateQuery;
use serde::Serialize;
use tokio::runtime::Runtime;

/// Blocking client for foreign language bindings. Results are returned as JSON documents.
#[derive(uniffi::Object)]
pub struct EpakClient {
    inner: crate::client::Client,
    rt: Runtime,
}

#[uniffi::export]
impl EpakClient {
    /// Returns a client for OCA's production e-Pak service.
    #[uniffi::constructor]
    pub fn new(username: String, password: String) -> Result<Self, SdkError> {
        Self::with_config(username, password, ClientConfig::default())
    }

    /// Returns a client for the endpoint and namespace in `config`.
    #[uniffi::constructor]
    pub fn with_config(
        username: String,
        password: String,
        config: ClientConfig,
    ) -> Result<Self, SdkError> {
        let rt = Runtime::new().or(Err(SdkError::CouldNotCreateRuntime))?;
        Ok(Self {
            inner: crate::client::Client::with_config(username, password, config),
            rt,
        })
    }

    /// Checks whether the username and password are valid.
    pub fn check_credentials(&self) -> Result<bool, SdkError> {
        self.rt.block_on(self.inner.check_credentials())
    }

    /// Creates a pickup order.
    pub fn create_pickup_order(&self, order: PickupOrder) -> Result<String, SdkError> {
        to_json(&self.rt.block_on(self.inner.create_pickup_order(&order))?)
    }

    /// Creates several pickup or admission orders grouped by origin.
    pub fn create_multiple_delivery_orders(
        &self,
        orders: MultipleDeliveryOrders,
    ) -> Result<String, SdkError> {
        to_json(
            &self
                .rt
                .block_on(self.inner.create_multiple_delivery_orders(&orders))?,
        )
    }

    /// Cancels a delivery order.
    pub fn cancel_delivery_order(&self, delivery_order_id: String) -> Result<String, SdkError> {
        to_json(
            &self
                .rt
                .block_on(self.inner.cancel_delivery_order(&delivery_order_id))?,
        )
    }

    /// Returns the state of a delivery order.
    pub fn get_order_result(&self, order_operation_code: String) -> Result<String, SdkError> {
        to_json(
            &self
                .rt
                .block_on(self.inner.get_order_result(&order_operation_code))?,
        )
    }

    /// Returns the rate and delivery estimate for a shipment.
    pub fn get_shipping_rate(&self, query: ShippingRateQuery) -> Result<String, SdkError> {
        to_json(&self.rt.block_on(self.inner.get_shipping_rate(&query))?)
    }

    /// Returns the current status of a delivery.
    pub fn get_delivery_status(&self, query: DeliveryStatusQuery) -> Result<String, SdkError> {
        to_json(&self.rt.block_on(self.inner.get_delivery_status(&query))?)
    }

    /// Returns every OCA taxation center.
    pub fn taxation_centers(&self) -> Result<String, SdkError> {
        to_json(&self.rt.block_on(self.inner.taxation_centers())?)
    }

    /// Returns the operation codes available to the user.
    pub fn get_operation_codes(&self) -> Result<String, SdkError> {
        to_json(&self.rt.block_on(self.inner.get_operation_codes())?)
    }

    /// Returns the shipments a client made within a period.
    pub fn list_shipments(&self, query: ShipmentListQuery) -> Result<String, SdkError> {
        to_json(&self.rt.block_on(self.inner.list_shipments(&query))?)
    }

    /// Returns every province in Argentina.
    pub fn provinces(&self) -> Result<String, SdkError> {
        to_json(&self.rt.block_on(self.inner.provinces())?)
    }
}

fn to_json<T: Serialize + ?Sized>(result: &T) -> Result<String, SdkError> {
    serde_json::to_string(result).or(Err(SdkError::SerializationError))
}
