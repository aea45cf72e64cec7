use chrono::{Days, Local, NaiveDate};

const DATE_FORMAT: &str = "%d-%m-%Y";
const DEFAULT_PERIOD_DAYS: u64 = 7;

/// Shipments made by a client within a period. Dates are `DD-MM-YYYY`; the period defaults to the last 7 days.
#[derive(Debug, Clone, Default, PartialEq, uniffi::Record)]
pub struct ShipmentListQuery {
    pub cuit: String,
    pub since_date: Option<String>,
    pub until_date: Option<String>,
}

impl ShipmentListQuery {
    pub fn new(cuit: String) -> Self {
        Self {
            cuit,
            ..Self::default()
        }
    }

    pub(crate) fn parameters(&self) -> Vec<(&'static str, String)> {
        self.parameters_on(Local::now().date_naive())
    }

    fn parameters_on(&self, today: NaiveDate) -> Vec<(&'static str, String)> {
        let since_date = self.since_date.clone().unwrap_or_else(|| {
            today
                .checked_sub_days(Days::new(DEFAULT_PERIOD_DAYS))
                .unwrap_or(today)
                .format(DATE_FORMAT)
                .to_string()
        });

        let until_date = self
            .until_date
            .clone()
            .unwrap_or_else(|| today.format(DATE_FORMAT).to_string());

        vec![
            ("CUIT", self.cuit.clone()),
            ("FechaDesde", since_date),
            ("FechaHasta", until_date),
        ]
    }
}
