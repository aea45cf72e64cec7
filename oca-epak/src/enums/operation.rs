use crate::canonical_key::canonical_key;

/// Operations of the e-Pak web service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    GetEpackUser,
    IngresoOr,
    IngresoOrMultiplesRetiros,
    AnularOrdenGenerada,
    GetOrResult,
    TarifarEnvioCorporativo,
    GetEnvioEstadoActual,
    GetCentrosImposicion,
    GetOperativasByUsuario,
    ListEnvios,
    GetProvincias,
}

impl Operation {
    /// Name of the operation as published by the service.
    pub fn soap_name(&self) -> &'static str {
        match self {
            Operation::GetEpackUser => "GetEpackUser",
            Operation::IngresoOr => "IngresoOR",
            Operation::IngresoOrMultiplesRetiros => "IngresoORMultiplesRetiros",
            Operation::AnularOrdenGenerada => "AnularOrdenGenerada",
            Operation::GetOrResult => "GetORResult",
            Operation::TarifarEnvioCorporativo => "Tarifar_Envio_Corporativo",
            Operation::GetEnvioEstadoActual => "GetEnvioEstadoActual",
            Operation::GetCentrosImposicion => "GetCentrosImposicion",
            Operation::GetOperativasByUsuario => "GetOperativasByUsuario",
            Operation::ListEnvios => "List_Envios",
            Operation::GetProvincias => "GetProvincias",
        }
    }

    /// Key the response is filed under, e.g. `get_or_result` for `GetORResult`.
    pub fn method_key(&self) -> String {
        canonical_key(self.soap_name())
    }
}
