pub const EPAK_ENDPOINT: &str = "http://webservice.oca.com.ar/epak_tracking/Oep_TrackEPak.asmx";
pub const EPAK_NAMESPACE: &str = "#Oca_e_Pak";

/// Where the client sends its requests. The defaults point at OCA's production e-Pak service.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct ClientConfig {
    /// URL of the ASMX endpoint requests are posted to.
    pub endpoint: String,
    /// XML namespace of the operations, also the prefix of every `SOAPAction`.
    pub namespace: String,
}

impl ClientConfig {
    pub fn with_endpoint(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            ..Self::default()
        }
    }

    pub(crate) fn soap_action(&self, operation: &str) -> String {
        format!("{}/{operation}", self.namespace)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: EPAK_ENDPOINT.to_string(),
            namespace: EPAK_NAMESPACE.to_string(),
        }
    }
}
