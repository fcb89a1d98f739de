//! Measurement value types for the smart-me REST API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::serde_util::null_as_default;

/// Well-known OBIS codes as reported in [`ObisValue::obis`].
pub mod obis {
    /// Active energy import, total (kWh)
    pub const ACTIVE_ENERGY_IMPORT: &str = "1-0:1.8.0*255";
    /// Active energy import, tariff 1 (kWh)
    pub const ACTIVE_ENERGY_IMPORT_T1: &str = "1-0:1.8.1*255";
    /// Active energy import, tariff 2 (kWh)
    pub const ACTIVE_ENERGY_IMPORT_T2: &str = "1-0:1.8.2*255";
    /// Active energy export, total (kWh)
    pub const ACTIVE_ENERGY_EXPORT: &str = "1-0:2.8.0*255";
    /// Active power, total (W)
    pub const ACTIVE_POWER: &str = "1-0:1.7.0*255";
    /// Active power, phase L1 (W)
    pub const ACTIVE_POWER_L1: &str = "1-0:21.7.0*255";
    /// Active power, phase L2 (W)
    pub const ACTIVE_POWER_L2: &str = "1-0:41.7.0*255";
    /// Active power, phase L3 (W)
    pub const ACTIVE_POWER_L3: &str = "1-0:61.7.0*255";
    /// Voltage, phase L1 (V)
    pub const VOLTAGE_L1: &str = "1-0:32.7.0*255";
    /// Current, phase L1 (A)
    pub const CURRENT_L1: &str = "1-0:31.7.0*255";
}

/// A single measurement identified by its OBIS code.
///
/// Like every value type here, `null` or missing fields decode to their
/// zero value instead of failing the response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObisValue {
    /// OBIS code, see [`obis`]
    #[serde(default, deserialize_with = "null_as_default", alias = "Obis")]
    pub obis: String,
    /// Measured value
    #[serde(default, deserialize_with = "null_as_default", alias = "Value")]
    pub value: f64,
}

/// Response for GET /api/Values/{id}: all measurements of one device at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceValues {
    /// Device ID
    #[serde(default, deserialize_with = "null_as_default", alias = "DeviceId")]
    pub device_id: String,
    /// Measurement timestamp
    #[serde(default, deserialize_with = "null_as_default", alias = "Date")]
    pub date: DateTime<Utc>,
    /// Measurements, in the order sent by the API
    #[serde(default, deserialize_with = "null_as_default", alias = "Values")]
    pub values: Vec<ObisValue>,
}

impl DeviceValues {
    /// First value reported under the given OBIS code.
    pub fn value_for(&self, obis: &str) -> Option<f64> {
        self.values.iter().find(|v| v.obis == obis).map(|v| v.value)
    }
}

/// A historical value, as returned by GET /api/ValuesInPast and
/// GET /api/ValuesInPastMultiple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Value {
    /// Timestamp of the value
    #[serde(default, deserialize_with = "null_as_default", alias = "Date")]
    pub date: DateTime<Utc>,
    /// Counter value at that time
    #[serde(default, deserialize_with = "null_as_default", alias = "Value")]
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_device_values_deserialize() {
        let json = r#"{
            "deviceId": "dev-1",
            "date": "2025-01-01T12:00:00Z",
            "values": [
                {"obis": "1-0:1.8.0*255", "value": 1234.5},
                {"obis": "1-0:1.7.0*255", "value": 0.0}
            ]
        }"#;
        let values: DeviceValues = serde_json::from_str(json).unwrap();
        assert_eq!(values.device_id, "dev-1");
        assert_eq!(values.date, Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap());
        assert_eq!(values.values.len(), 2);
        assert_eq!(values.values[0].obis, obis::ACTIVE_ENERGY_IMPORT);
        assert_eq!(values.value_for(obis::ACTIVE_POWER), Some(0.0));
        assert_eq!(values.value_for(obis::ACTIVE_ENERGY_EXPORT), None);
    }

    #[test]
    fn test_value_with_offset_normalized_to_utc() {
        let value: Value =
            serde_json::from_str(r#"{"Date": "2025-01-01T13:00:00+01:00", "Value": 42.0}"#)
                .unwrap();
        assert_eq!(value.date, Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap());
        assert_eq!(value.value, 42.0);
    }

    #[test]
    fn test_values_keep_api_order() {
        let json = r#"[
            {"date": "2025-01-02T00:00:00Z", "value": 2.0},
            {"date": "2025-01-01T00:00:00Z", "value": 1.0}
        ]"#;
        let values: Vec<Value> = serde_json::from_str(json).unwrap();
        assert_eq!(values[0].value, 2.0);
        assert_eq!(values[1].value, 1.0);
    }

    #[test]
    fn test_device_values_null_and_missing_fields() {
        let values: DeviceValues =
            serde_json::from_str(r#"{"deviceId": null, "values": null}"#).unwrap();
        assert_eq!(values.device_id, "");
        assert_eq!(values.date, DateTime::<Utc>::default());
        assert!(values.values.is_empty());

        let values: DeviceValues = serde_json::from_str("{}").unwrap();
        assert!(values.values.is_empty());
    }

    #[test]
    fn test_value_null_and_missing_fields() {
        let value: Value = serde_json::from_str(r#"{"Date": "2025-01-01T00:00:00Z"}"#).unwrap();
        assert_eq!(value.value, 0.0);

        let value: Value = serde_json::from_str(r#"{"date": null, "value": null}"#).unwrap();
        assert_eq!(value.date, DateTime::<Utc>::default());
        assert_eq!(value.value, 0.0);

        let obis: ObisValue = serde_json::from_str(r#"{"obis": null}"#).unwrap();
        assert_eq!(obis.obis, "");
        assert_eq!(obis.value, 0.0);
    }
}
