//! Point-in-time readings supplied to the display once per tick
//!
//! Snapshots are produced by the sensor-polling and networking code outside
//! this crate. The display only reads them.

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::units;

/// Maximum SSID length (802.11 limit)
pub const MAX_SSID_LEN: usize = 32;

/// Length of a BSSID rendered as `aa:bb:cc:dd:ee:ff`
pub const BSSID_TEXT_LEN: usize = 17;

/// Inertial and environmental readings
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorSnapshot {
    /// Acceleration X/Y/Z (milli-g)
    pub acceleration_mg: [f32; 3],
    /// Angular rate X/Y/Z (degrees per second)
    pub angular_rate_dps: [f32; 3],
    /// Accelerometer die temperature (°C)
    pub accel_temperature_c: f32,
    /// Barometer temperature (°C)
    pub baro_temperature_c: f32,
    /// Barometric pressure (hPa)
    pub pressure_hpa: f32,
    /// Altitude (m)
    pub altitude_m: f32,
    /// Ambient light (lux); no light sensor is fitted yet, so this stays 0
    pub light_lux: f32,
}

/// Wi-Fi association state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NetworkSnapshot {
    /// Network name
    pub ssid: String<MAX_SSID_LEN>,
    /// Access point hardware address
    pub bssid: [u8; 6],
    /// Carrier frequency (MHz)
    pub frequency_mhz: u16,
    /// Signal strength (dBm), passed through from the producer
    pub rssi_dbm: i16,
}

impl NetworkSnapshot {
    /// Build a snapshot, truncating the SSID to [`MAX_SSID_LEN`] bytes
    pub fn new(ssid: &str, bssid: [u8; 6], frequency_mhz: u16, rssi_dbm: i16) -> Self {
        let mut name = String::new();
        for ch in ssid.chars() {
            if name.push(ch).is_err() {
                break;
            }
        }
        Self {
            ssid: name,
            bssid,
            frequency_mhz,
            rssi_dbm,
        }
    }

    /// Channel number derived from the frequency (0 when out of band)
    pub fn channel(&self) -> u16 {
        units::channel_from_frequency(self.frequency_mhz)
    }

    /// BSSID as lowercase colon-separated hex
    ///
    /// Six bytes fill the [`BSSID_TEXT_LEN`] characters exactly.
    pub fn bssid_text(&self) -> String<BSSID_TEXT_LEN> {
        const HEX: &[u8; 16] = b"0123456789abcdef";

        let mut text = String::new();
        for (i, byte) in self.bssid.iter().enumerate() {
            if i > 0 {
                let _ = text.push(':');
            }
            let _ = text.push(HEX[(byte >> 4) as usize] as char);
            let _ = text.push(HEX[(byte & 0x0F) as usize] as char);
        }
        text
    }
}

/// Status of one bus participant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Health {
    #[default]
    Ok,
    Error,
}

impl Health {
    /// Map a driver status code where 0 means healthy
    pub fn from_status_code(code: u8) -> Self {
        if code == 0 {
            Health::Ok
        } else {
            Health::Error
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Health::Ok)
    }

    /// Text shown on the status screen
    pub fn label(&self) -> &'static str {
        match self {
            Health::Ok => "OK",
            Health::Error => "ERROR",
        }
    }
}

/// Sensor bus and co-processor health
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BusHealth {
    /// I2C bus as a whole
    pub bus: Health,
    /// Accelerometer/gyroscope device
    pub accelerometer: Health,
    /// Barometer/thermometer device
    pub barometer: Health,
    /// Real-time co-processor
    pub coprocessor: Health,
}

/// Everything one display tick reads
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeviceSnapshot {
    pub sensors: SensorSnapshot,
    pub network: NetworkSnapshot,
    pub health: BusHealth,
}
