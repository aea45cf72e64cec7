/// A pickup order, which lets OCA know a delivery is coming.
///
/// [xml_data][PickupOrder::xml_data] is the pickup XML document (`<ROWS><cabecera .../>...</ROWS>`) already
/// rendered; it is sent escaped inside the `xml_Datos` parameter.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct PickupOrder {
    pub xml_data: String,
    /// Whether the pickup is confirmed right away. Defaults to `false`.
    pub confirm_pickup: bool,
    /// Days OCA should wait before the pickup. Defaults to 1.
    pub days_to_pickup: u32,
    /// Time range ID used for the pickup. Defaults to 1.
    pub pickup_range: u32,
}

impl PickupOrder {
    pub fn new(xml_data: String) -> Self {
        Self {
            xml_data,
            confirm_pickup: false,
            days_to_pickup: 1,
            pickup_range: 1,
        }
    }

    pub(crate) fn parameters(&self) -> Vec<(&'static str, String)> {
        vec![
            ("xml_Datos", self.xml_data.clone()),
            ("ConfirmarRetiro", self.confirm_pickup.to_string()),
            ("DiasHastaRetiro", self.days_to_pickup.to_string()),
            ("idFranjaHoraria", self.pickup_range.to_string()),
        ]
    }
}
