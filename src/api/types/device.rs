//! Device types for the smart-me REST API.

use serde::{Deserialize, Serialize};

use super::meter::{ChargeStationState, MeterEnergyType, MeterFamilyType, MeterSubType};

/// A metering device and its most recent readings, as returned by GET /api/Devices.
///
/// Every field is optional: the API omits whatever a device does not measure,
/// and a reading of `0.0` is not the same thing as no reading at all.
///
/// Keys are written in camelCase. When decoding, the PascalCase spelling used
/// by the live API is accepted as well.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    /// Device ID (GUID)
    #[serde(alias = "Id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name
    #[serde(alias = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Serial number
    #[serde(alias = "Serial", skip_serializing_if = "Option::is_none")]
    pub serial: Option<i64>,
    /// Kind of energy measured
    #[serde(alias = "DeviceEnergyType", skip_serializing_if = "Option::is_none")]
    pub device_energy_type: Option<MeterEnergyType>,
    /// Meter sub type
    #[serde(alias = "MeterSubType", skip_serializing_if = "Option::is_none")]
    pub meter_sub_type: Option<MeterSubType>,
    /// Hardware family
    #[serde(alias = "FamilyType", skip_serializing_if = "Option::is_none")]
    pub family_type: Option<MeterFamilyType>,

    /// Total active power
    #[serde(alias = "ActivePower", skip_serializing_if = "Option::is_none")]
    pub active_power: Option<f64>,
    /// Active power, phase L1
    #[serde(alias = "ActivePowerL1", skip_serializing_if = "Option::is_none")]
    pub active_power_l1: Option<f64>,
    /// Active power, phase L2
    #[serde(alias = "ActivePowerL2", skip_serializing_if = "Option::is_none")]
    pub active_power_l2: Option<f64>,
    /// Active power, phase L3
    #[serde(alias = "ActivePowerL3", skip_serializing_if = "Option::is_none")]
    pub active_power_l3: Option<f64>,
    /// Unit of the active power values (e.g. "kW")
    #[serde(alias = "ActivePowerUnit", skip_serializing_if = "Option::is_none")]
    pub active_power_unit: Option<String>,

    /// Counter reading (total)
    #[serde(alias = "CounterReading", skip_serializing_if = "Option::is_none")]
    pub counter_reading: Option<f64>,
    /// Unit of the counter readings (e.g. "kWh")
    #[serde(alias = "CounterReadingUnit", skip_serializing_if = "Option::is_none")]
    pub counter_reading_unit: Option<String>,
    /// Counter reading, tariff 1
    #[serde(alias = "CounterReadingT1", skip_serializing_if = "Option::is_none")]
    pub counter_reading_t1: Option<f64>,
    /// Counter reading, tariff 2
    #[serde(alias = "CounterReadingT2", skip_serializing_if = "Option::is_none")]
    pub counter_reading_t2: Option<f64>,
    /// Counter reading, tariff 3
    #[serde(alias = "CounterReadingT3", skip_serializing_if = "Option::is_none")]
    pub counter_reading_t3: Option<f64>,
    /// Counter reading, tariff 4
    #[serde(alias = "CounterReadingT4", skip_serializing_if = "Option::is_none")]
    pub counter_reading_t4: Option<f64>,
    /// Imported energy
    #[serde(alias = "CounterReadingImport", skip_serializing_if = "Option::is_none")]
    pub counter_reading_import: Option<f64>,
    /// Exported energy
    #[serde(alias = "CounterReadingExport", skip_serializing_if = "Option::is_none")]
    pub counter_reading_export: Option<f64>,

    /// Main switch state
    #[serde(alias = "SwitchOn", skip_serializing_if = "Option::is_none")]
    pub switch_on: Option<bool>,
    /// Switch state, phase L1
    #[serde(
        alias = "SwitchPhaseL1On",
        alias = "switchPhaseL10n",
        skip_serializing_if = "Option::is_none"
    )]
    pub switch_phase_l1_on: Option<bool>,
    /// Switch state, phase L2
    #[serde(
        alias = "SwitchPhaseL2On",
        alias = "switchPhaseL20n",
        skip_serializing_if = "Option::is_none"
    )]
    pub switch_phase_l2_on: Option<bool>,
    /// Switch state, phase L3
    #[serde(
        alias = "SwitchPhaseL3On",
        alias = "switchPhaseL30n",
        skip_serializing_if = "Option::is_none"
    )]
    pub switch_phase_l3_on: Option<bool>,

    /// Voltage
    #[serde(alias = "Voltage", skip_serializing_if = "Option::is_none")]
    pub voltage: Option<f64>,
    /// Voltage, phase L1
    #[serde(alias = "VoltageL1", skip_serializing_if = "Option::is_none")]
    pub voltage_l1: Option<f64>,
    /// Voltage, phase L2
    #[serde(alias = "VoltageL2", skip_serializing_if = "Option::is_none")]
    pub voltage_l2: Option<f64>,
    /// Voltage, phase L3
    #[serde(alias = "VoltageL3", skip_serializing_if = "Option::is_none")]
    pub voltage_l3: Option<f64>,

    /// Current
    #[serde(alias = "Current", skip_serializing_if = "Option::is_none")]
    pub current: Option<f64>,
    /// Current, phase L1
    #[serde(alias = "CurrentL1", skip_serializing_if = "Option::is_none")]
    pub current_l1: Option<f64>,
    /// Current, phase L2
    #[serde(alias = "CurrentL2", skip_serializing_if = "Option::is_none")]
    pub current_l2: Option<f64>,
    /// Current, phase L3
    #[serde(alias = "CurrentL3", skip_serializing_if = "Option::is_none")]
    pub current_l3: Option<f64>,

    /// Power factor
    #[serde(alias = "PowerFactor", skip_serializing_if = "Option::is_none")]
    pub power_factor: Option<f64>,
    /// Power factor, phase L1
    #[serde(alias = "PowerFactorL1", skip_serializing_if = "Option::is_none")]
    pub power_factor_l1: Option<f64>,
    /// Power factor, phase L2
    #[serde(alias = "PowerFactorL2", skip_serializing_if = "Option::is_none")]
    pub power_factor_l2: Option<f64>,
    /// Power factor, phase L3
    #[serde(alias = "PowerFactorL3", skip_serializing_if = "Option::is_none")]
    pub power_factor_l3: Option<f64>,

    /// Temperature
    #[serde(alias = "Temperature", skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Active tariff
    #[serde(alias = "ActiveTariff", skip_serializing_if = "Option::is_none")]
    pub active_tariff: Option<i32>,

    /// Digital output 1
    #[serde(alias = "DigitalOutput1", skip_serializing_if = "Option::is_none")]
    pub digital_output1: Option<bool>,
    /// Digital output 2
    #[serde(alias = "DigitalOutput2", skip_serializing_if = "Option::is_none")]
    pub digital_output2: Option<bool>,
    /// Analog output 1
    #[serde(alias = "AnalogOutput1", skip_serializing_if = "Option::is_none")]
    pub analog_output1: Option<i32>,
    /// Analog output 2
    #[serde(alias = "AnalogOutput2", skip_serializing_if = "Option::is_none")]
    pub analog_output2: Option<i32>,
    /// Digital input 1
    #[serde(alias = "DigitalInput1", skip_serializing_if = "Option::is_none")]
    pub digital_input1: Option<bool>,
    /// Digital input 2
    #[serde(alias = "DigitalInput2", skip_serializing_if = "Option::is_none")]
    pub digital_input2: Option<bool>,

    /// Timestamp of the readings, as sent by the API
    #[serde(alias = "ValueDate", skip_serializing_if = "Option::is_none")]
    pub value_date: Option<String>,
    /// Serial number of an attached meter
    #[serde(
        alias = "AdditionalMeterSerialNumber",
        skip_serializing_if = "Option::is_none"
    )]
    pub additional_meter_serial_number: Option<String>,
    /// Flow rate
    #[serde(alias = "FlowRate", skip_serializing_if = "Option::is_none")]
    pub flow_rate: Option<f64>,
    /// Charging station state; written as `null` when absent
    #[serde(alias = "ChargeStationState")]
    pub charge_station_state: Option<ChargeStationState>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_device() -> Device {
        Device {
            id: Some("a1b2c3d4-e5f6-7890-1234-567890abcdef".to_string()),
            name: Some("Hauptzähler".to_string()),
            serial: Some(12345678),
            device_energy_type: Some(MeterEnergyType::Electricity),
            meter_sub_type: Some(MeterSubType::Electricity),
            family_type: Some(MeterFamilyType::ThreePhase80AWifiV2),
            active_power: Some(1.5),
            active_power_l1: Some(0.5),
            active_power_l2: Some(0.5),
            active_power_l3: Some(0.5),
            active_power_unit: Some("kW".to_string()),
            counter_reading: Some(9876.54),
            counter_reading_unit: Some("kWh".to_string()),
            counter_reading_t1: Some(5000.0),
            counter_reading_t2: Some(4876.54),
            counter_reading_t3: Some(0.0),
            counter_reading_t4: Some(0.0),
            counter_reading_import: Some(9876.54),
            counter_reading_export: Some(12.5),
            switch_on: Some(true),
            switch_phase_l1_on: Some(true),
            switch_phase_l2_on: Some(false),
            switch_phase_l3_on: Some(true),
            voltage: Some(230.1),
            voltage_l1: Some(230.1),
            voltage_l2: Some(229.8),
            voltage_l3: Some(231.0),
            current: Some(6.5),
            current_l1: Some(2.1),
            current_l2: Some(2.2),
            current_l3: Some(2.2),
            power_factor: Some(0.98),
            power_factor_l1: Some(0.97),
            power_factor_l2: Some(0.99),
            power_factor_l3: Some(0.98),
            temperature: Some(24.5),
            active_tariff: Some(1),
            digital_output1: Some(false),
            digital_output2: Some(true),
            analog_output1: Some(0),
            analog_output2: Some(512),
            digital_input1: Some(true),
            digital_input2: Some(false),
            value_date: Some("2025-01-01T12:00:00Z".to_string()),
            additional_meter_serial_number: Some("ABC-1".to_string()),
            flow_rate: Some(0.0),
            charge_station_state: Some(ChargeStationState::Charging),
        }
    }

    #[test]
    fn test_round_trip_all_present() {
        let device = full_device();
        let json = serde_json::to_string(&device).unwrap();
        let decoded: Device = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, device);
    }

    #[test]
    fn test_round_trip_all_absent() {
        let device = Device::default();
        let json = serde_json::to_string(&device).unwrap();
        assert_eq!(json, r#"{"chargeStationState":null}"#);

        let decoded: Device = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, device);
    }

    #[test]
    fn test_round_trip_other_with_known_code() {
        let device = Device {
            device_energy_type: Some(MeterEnergyType::Other(1)),
            charge_station_state: Some(ChargeStationState::Other(4)),
            ..Device::default()
        };
        let json = serde_json::to_string(&device).unwrap();
        let decoded: Device = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, device);
        assert_eq!(decoded.device_energy_type, Some(MeterEnergyType::Electricity));
    }

    #[test]
    fn test_zero_is_not_absent() {
        let device: Device =
            serde_json::from_str(r#"{"activePower": 0.0, "switchOn": false}"#).unwrap();
        assert_eq!(device.active_power, Some(0.0));
        assert_eq!(device.switch_on, Some(false));
        assert!(device.voltage.is_none());
        assert!(device.charge_station_state.is_none());
    }

    #[test]
    fn test_pascal_case_keys() {
        let json = r#"{
            "Id": "dev-1",
            "Name": "Garage",
            "Serial": 42,
            "DeviceEnergyType": 1,
            "FamilyType": 99,
            "ActivePower": 0.25,
            "CounterReadingImport": 100.5,
            "SwitchPhaseL1On": true,
            "ChargeStationState": null
        }"#;
        let device: Device = serde_json::from_str(json).unwrap();
        assert_eq!(device.id.as_deref(), Some("dev-1"));
        assert_eq!(device.serial, Some(42));
        assert_eq!(device.device_energy_type, Some(MeterEnergyType::Electricity));
        assert_eq!(device.family_type, Some(MeterFamilyType::Other(99)));
        assert_eq!(device.active_power, Some(0.25));
        assert_eq!(device.counter_reading_import, Some(100.5));
        assert_eq!(device.switch_phase_l1_on, Some(true));
        assert!(device.charge_station_state.is_none());
    }

    #[test]
    fn test_legacy_switch_phase_spelling() {
        let device: Device = serde_json::from_str(r#"{"switchPhaseL20n": true}"#).unwrap();
        assert_eq!(device.switch_phase_l2_on, Some(true));

        let json = serde_json::to_value(&device).unwrap();
        assert_eq!(json["switchPhaseL2On"], serde_json::json!(true));
    }
}
