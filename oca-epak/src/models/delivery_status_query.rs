/// Identifies a delivery by tracking code, delivery order ID, or both. Only the given ones are sent.
#[derive(Debug, Clone, Default, PartialEq, uniffi::Record)]
pub struct DeliveryStatusQuery {
    pub tracking_code: Option<String>,
    pub delivery_order_id: Option<String>,
}

impl DeliveryStatusQuery {
    pub(crate) fn parameters(&self) -> Vec<(&'static str, String)> {
        let mut parameters = Vec::with_capacity(2);
        if let Some(tracking_code) = &self.tracking_code {
            parameters.push(("numeroEnvio", tracking_code.clone()));
        }

        if let Some(delivery_order_id) = &self.delivery_order_id {
            parameters.push(("ordenRetiro", delivery_order_id.clone()));
        }

        parameters
    }
}
