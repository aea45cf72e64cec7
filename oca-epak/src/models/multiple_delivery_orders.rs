/// Several pickup or admission orders grouped by origin, sent in a single request.
///
/// [xml_data][MultipleDeliveryOrders::xml_data] is the rendered document listing every origin with its shipments.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct MultipleDeliveryOrders {
    pub xml_data: String,
    /// Whether the deliveries are confirmed right away. Defaults to `false`.
    pub confirm_deliveries: bool,
}

impl MultipleDeliveryOrders {
    pub fn new(xml_data: String) -> Self {
        Self {
            xml_data,
            confirm_deliveries: false,
        }
    }

    pub(crate) fn parameters(&self) -> Vec<(&'static str, String)> {
        vec![
            ("xml_Datos", self.xml_data.clone()),
            ("ConfirmarRetiro", self.confirm_deliveries.to_string()),
        ]
    }
}
