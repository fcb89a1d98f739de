//! Integer-coded meter classification enums.
//!
//! The smart-me API transmits these as plain integers. Codes the SDK does not
//! know yet decode into the `Other` variant instead of failing the whole
//! response, so a newly introduced meter family never breaks `get_devices`.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

macro_rules! coded_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Serialize, Deserialize)]
        #[serde(from = "i32", into = "i32")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// Code not known to this SDK version
            Other(i32),
        }

        impl $name {
            /// Integer code as transmitted by the API.
            pub fn code(self) -> i32 {
                match self {
                    $( Self::$variant => $code, )+
                    Self::Other(code) => code,
                }
            }
        }

        // Compared by code: `Other(1)` and `Electricity` are the same wire value.
        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.code() == other.code()
            }
        }

        impl Eq for $name {}

        impl Hash for $name {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.code().hash(state);
            }
        }

        impl From<i32> for $name {
            fn from(code: i32) -> Self {
                match code {
                    $( $code => Self::$variant, )+
                    other => Self::Other(other),
                }
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.code()
            }
        }
    };
}

coded_enum! {
    /// Kind of energy a device measures (`deviceEnergyType`).
    pub enum MeterEnergyType {
        /// Unknown
        Unknown = 0,
        /// Electricity meter
        Electricity = 1,
        /// Water meter
        Water = 2,
        /// Gas meter
        Gas = 3,
        /// Heat meter
        Heat = 4,
        /// Heat cost allocator
        Hca = 5,
        /// All meters
        AllMeters = 6,
        /// Temperature sensor
        Temperature = 7,
        /// M-Bus gateway
        MBusGateway = 8,
        /// RS-485 gateway
        Rs485Gateway = 9,
        /// Custom device
        CustomDevice = 10,
        /// Compressed air meter
        CompressedAir = 11,
        /// Solar-Log
        SolarLog = 12,
        /// Virtual meter
        VirtualMeter = 13,
        /// Wireless M-Bus gateway
        WMBusGateway = 14,
    }
}

coded_enum! {
    /// Finer classification of a meter (`meterSubType`).
    pub enum MeterSubType {
        /// Unknown
        Unknown = 0,
        /// Cold water meter
        ColdWater = 1,
        /// Hot water meter
        HotWater = 2,
        /// Charging station
        ChargingStation = 3,
        /// Electricity
        Electricity = 4,
        /// Water
        Water = 5,
        /// Gas
        Gas = 6,
        /// Electricity meter used as heat meter
        ElectricityHeat = 7,
        /// Temperature meter
        Temperature = 8,
        /// Virtual battery
        VirtualBattery = 9,
    }
}

coded_enum! {
    /// Hardware family of a device (`familyType`).
    pub enum MeterFamilyType {
        /// Family unknown (all M-Bus meters, S0 meters, ...)
        Unknown = 0,
        /// smart-me connect plug-in power meter
        ConnectPlugin = 1,
        /// 1-phase DIN rail meter without switch
        SinglePhaseDinRail = 2,
        /// 1-phase DIN rail meter with switch
        SinglePhaseDinRailWithSwitch = 3,
        /// M-Bus gateway V1
        MBusGatewayV1 = 4,
        /// RS-485 gateway V1
        Rs485GatewayV1 = 5,
        /// Kamstrup module
        KamstrupModule = 6,
        /// 3-phase meter 80A
        ThreePhase80A = 7,
        /// 3-phase meter 32A with switch
        ThreePhase32AWithSwitch = 8,
        /// 3-phase meter, transformer edition
        ThreePhaseTransformer = 9,
        /// Landis+Gyr module
        LandisGyrModule = 10,
        /// Optical module for FNN meters
        OpticalFnn = 11,
        /// 3-phase meter 80A with WiFi V2
        ThreePhase80AWifiV2 = 12,
        /// 3-phase meter 80A with mobile module
        ThreePhase80AMobile = 14,
        /// 1-phase meter 80A with WiFi V2
        SinglePhase80AWifiV2 = 16,
        /// 1-phase meter 32A with WiFi V2
        SinglePhase32AWifiV2 = 17,
        /// 1-phase meter 80A with GPRS
        SinglePhase80AGprs = 18,
        /// 1-phase meter 32A with GPRS
        SinglePhase32AGprs = 19,
        /// Wireless M-Bus gateway V1
        WirelessMBusGatewayV1 = 20,
        /// 3-phase meter, transformer edition with mobile module
        ThreePhaseTransformerMobile = 21,
        /// 3-phase Nimbus 3-point meter
        ThreePhaseNimbus = 65,
        /// Mithral hall charging station V1
        MithralChargingStationV1 = 70,
        /// Meter fed through the REST API
        RestApiMeter = 1001,
        /// Virtual billing meter
        VirtualBillingMeter = 1002,
    }
}

coded_enum! {
    /// State of a charging station (`chargeStationState`).
    pub enum ChargeStationState {
        /// Booting
        Booting = 0,
        /// Ready, no car connected
        ReadyNoCarConnected = 1,
        /// Ready, car connected
        ReadyCarConnected = 2,
        /// Started, waiting for car
        StartedWaitForCar = 3,
        /// Charging
        Charging = 4,
        /// Installation mode
        Installation = 5,
        /// Waiting for authorization
        Authorize = 6,
        /// Offline
        Offline = 7,
    }
}
