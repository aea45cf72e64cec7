/// Parameters of a rate and delivery estimate request. Values are sent as given.
#[derive(Debug, Clone, Default, PartialEq, uniffi::Record)]
pub struct ShippingRateQuery {
    /// Total weight in kilograms, e.g. `20`.
    pub total_weight: String,
    /// Total volume in cubic meters, e.g. `0.0015` for 0.1m * 0.15m * 0.1m.
    pub total_volume: String,
    pub origin_zip_code: String,
    pub destination_zip_code: String,
    pub declared_value: String,
    pub package_quantity: String,
    /// Client's CUIT, e.g. `30-99999999-7`.
    pub cuit: String,
    /// Operation code the shipment is rated with.
    pub operation_code: String,
}

impl ShippingRateQuery {
    pub(crate) fn parameters(&self) -> Vec<(&'static str, String)> {
        vec![
            ("PesoTotal", self.total_weight.clone()),
            ("VolumenTotal", self.total_volume.clone()),
            ("CodigoPostalOrigen", self.origin_zip_code.clone()),
            ("CodigoPostalDestino", self.destination_zip_code.clone()),
            ("ValorDeclarado", self.declared_value.clone()),
            ("CantidadPaquetes", self.package_quantity.clone()),
            ("Cuit", self.cuit.clone()),
            ("Operativa", self.operation_code.clone()),
        ]
    }
}
