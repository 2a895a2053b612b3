use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One data point of the consumption time series.
///
/// Values are carried over from the provider verbatim, only the keys are
/// translated into the documented output schema. Deserialization fails when
/// any of the expected provider keys is absent; unknown provider keys are
/// dropped.
#[must_use]
#[derive(Debug, Serialize, Deserialize)]
pub struct ConsumptionRecord {
    /// Billed consumption during peak hours.
    #[serde(rename(deserialize = "betrag_ht"))]
    pub qty_peak: Value,

    /// Billed consumption during off-peak hours.
    #[serde(rename(deserialize = "betrag_nt"))]
    pub qty_offpeak: Value,

    /// Reactive consumption during peak hours.
    #[serde(rename(deserialize = "betrag_blind_ht"))]
    pub qty_reactive_peak: Value,

    /// Reactive consumption during off-peak hours.
    #[serde(rename(deserialize = "betrag_blind_nt"))]
    pub qty_reactive_offpeak: Value,

    /// Invoiced consumption during peak hours.
    #[serde(rename(deserialize = "menge_fakturiert_ht"))]
    pub qty_invoiced_peak: Value,

    /// Invoiced consumption during off-peak hours.
    #[serde(rename(deserialize = "menge_fakturiert_nt"))]
    pub qty_invoiced_offpeak: Value,

    /// Invoiced reactive consumption during peak hours.
    #[serde(rename(deserialize = "menge_fakturiert_blind_ht"))]
    pub qty_reactive_invoiced_peak: Value,

    /// Invoiced reactive consumption during off-peak hours.
    #[serde(rename(deserialize = "menge_fakturiert_blind_nt"))]
    pub qty_reactive_invoiced_offpeak: Value,

    /// Physically measured consumption.
    #[serde(rename(deserialize = "menge_physikalisch"))]
    pub qty_measured: Value,

    /// Maximum invoiced power draw.
    #[serde(rename(deserialize = "max_leistung_faktura"))]
    pub max_power: Value,

    /// Maximum physically measured power draw.
    #[serde(rename(deserialize = "max_leistung_physisch"))]
    pub max_physical_power: Value,

    /// Start of the data point interval, UTC.
    #[serde(rename(deserialize = "zeitstempel_von_utc"))]
    pub start_date: Value,

    /// End of the data point interval, UTC.
    #[serde(rename(deserialize = "zeitstempel_bis_utc"))]
    pub end_date: Value,
}
