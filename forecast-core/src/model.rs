use serde::{Deserialize, Serialize};

/// One timestamped weather prediction in the canonical shape consumed by the
/// display layer, independent of which wire schema produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// Timestamp exactly as the service sent it, e.g. "2025-01-01 12:00:00".
    pub timestamp: String,
    pub temperature_c: f64,
    /// Condition descriptions in service order; the display shows the first.
    pub conditions: Vec<String>,
}

impl Forecast {
    pub fn primary_condition(&self) -> Option<&str> {
        self.conditions.first().map(String::as_str)
    }
}

/// Wire schema currently served by the forecast endpoint: one flat object
/// per data point.
#[derive(Debug, Deserialize)]
pub struct FlatResponse {
    pub forecasts: Vec<FlatEntry>,
}

#[derive(Debug, Deserialize)]
pub struct FlatEntry {
    pub date: String,
    pub temperature: f64,
    pub description: String,
}

/// Legacy wire schema, with temperature and description nested in
/// sub-objects. Still decodable while the service migration completes.
#[derive(Debug, Deserialize)]
pub struct NestedResponse {
    pub list: Vec<NestedEntry>,
}

#[derive(Debug, Deserialize)]
pub struct NestedEntry {
    pub dt_txt: String,
    pub main: NestedMain,
    pub weather: Vec<NestedCondition>,
}

#[derive(Debug, Deserialize)]
pub struct NestedMain {
    pub temp: f64,
}

#[derive(Debug, Deserialize)]
pub struct NestedCondition {
    pub description: String,
}

/// Either wire shape the service has served across revisions.
///
/// Untagged: a body is tried against the current flat schema first, then the
/// legacy nested one. A body matching neither is a decode error.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawResponse {
    Flat(FlatResponse),
    Nested(NestedResponse),
}

impl RawResponse {
    /// Adapt whichever raw shape was decoded into the canonical forecast
    /// list, preserving service order.
    pub fn into_forecasts(self) -> Vec<Forecast> {
        match self {
            RawResponse::Flat(res) => {
                res.forecasts.into_iter().map(FlatEntry::into_forecast).collect()
            }
            RawResponse::Nested(res) => {
                res.list.into_iter().map(NestedEntry::into_forecast).collect()
            }
        }
    }
}

impl FlatEntry {
    pub fn into_forecast(self) -> Forecast {
        Forecast {
            timestamp: self.date,
            temperature_c: self.temperature,
            conditions: vec![self.description],
        }
    }
}

impl NestedEntry {
    pub fn into_forecast(self) -> Forecast {
        Forecast {
            timestamp: self.dt_txt,
            temperature_c: self.main.temp,
            conditions: self.weather.into_iter().map(|w| w.description).collect(),
        }
    }
}
