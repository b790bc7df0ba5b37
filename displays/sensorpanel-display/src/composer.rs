//! Screen composer
//!
//! One routine per screen. Each clears the backend (the incremental status
//! steps excepted), draws a title in the title font, then fills the data
//! lines. A line is a chain of fields (label, value, unit, ...) placed left
//! to right, every field starting one gap after the previous field ends.
//! Every routine finishes with exactly one flush.

use sensorpanel_core::config::LayoutConfig;
use sensorpanel_core::format::{format_float, format_int};
use sensorpanel_core::snapshot::{BusHealth, Health, NetworkSnapshot, SensorSnapshot};
use sensorpanel_core::state::StatusStep;
use sensorpanel_core::units::{celsius_to_fahrenheit, meters_to_feet};

use crate::backend::{DisplayBackend, DisplayError, FontSize, PixelValue};
use crate::logo::LOGO;
use crate::metrics::next_column_after;

/// Fractional digits shown for sensor readings
pub const VALUE_DIGITS: usize = 2;

const TITLE_NETWORK: &str = "  Network";
const TITLE_ACCELERATION: &str = "   Accel.";
const TITLE_ANGULAR_RATE: &str = "   Gyro.";
const TITLE_ENVIRONMENT: &str = "  Environ.";
const TITLE_OTHER: &str = "   Other";
const TITLE_STATUS: &str = "I2C Status";

const AXIS_LABELS: [&str; 3] = ["Axis X:", "Axis Y:", "Axis Z:"];
const GYRO_LABELS: [&str; 3] = ["GX:", "GY:", "GZ:"];
const SPARE_LABELS: [&str; 2] = ["TBD 1:", "TBD 2:"];

const LABEL_BUS: &str = "I2C Bus Status:";
const LABEL_ACCELEROMETER: &str = "Accelerometer:";
const LABEL_BAROMETER: &str = "Barometer:";
const LABEL_COPROCESSOR: &str = "Real Time Core:";

/// Lays out screens on a display backend
pub struct ScreenComposer<B> {
    backend: B,
    layout: LayoutConfig,
}

impl<B: DisplayBackend> ScreenComposer<B> {
    /// Create a composer with the default layout
    pub fn new(backend: B) -> Self {
        Self::with_layout(backend, LayoutConfig::default())
    }

    /// Create a composer with a custom layout
    pub fn with_layout(backend: B, layout: LayoutConfig) -> Self {
        Self { backend, layout }
    }

    /// Get the backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Get the backend mutably
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Release the backend
    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Get the layout in use
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Logo bitmap alone
    pub fn compose_logo(&mut self) -> Result<(), DisplayError> {
        self.backend.clear();
        self.backend.draw_bitmap(&LOGO);
        self.backend.flush()
    }

    /// SSID, frequency and channel, RSSI
    pub fn compose_network(&mut self, network: &NetworkSnapshot) -> Result<(), DisplayError> {
        self.begin(TITLE_NETWORK);

        self.draw_line(0, &["SSID:", network.ssid.as_str()]);

        let frequency = format_int(i32::from(network.frequency_mhz), 1);
        let channel = format_int(i32::from(network.channel()), 1);
        self.draw_line(1, &["Freq:", frequency.as_str(), "Chan:", channel.as_str()]);

        let rssi = format_int(i32::from(network.rssi_dbm), 1);
        self.draw_line(2, &["RSSI:", rssi.as_str(), "dBm"]);

        self.backend.flush()
    }

    /// Acceleration on three axes, in milli-g
    pub fn compose_acceleration(&mut self, acceleration_mg: [f32; 3]) -> Result<(), DisplayError> {
        self.begin(TITLE_ACCELERATION);
        self.draw_axes(&AXIS_LABELS, acceleration_mg, "mg");
        self.backend.flush()
    }

    /// Angular rate on three axes, in degrees per second
    pub fn compose_angular_rate(&mut self, angular_rate_dps: [f32; 3]) -> Result<(), DisplayError> {
        self.begin(TITLE_ANGULAR_RATE);
        self.draw_axes(&GYRO_LABELS, angular_rate_dps, "dps");
        self.backend.flush()
    }

    /// Temperatures in Fahrenheit, pressure, and altitude in feet
    pub fn compose_environment(&mut self, sensors: &SensorSnapshot) -> Result<(), DisplayError> {
        self.begin(TITLE_ENVIRONMENT);

        let temp1 = format_float(celsius_to_fahrenheit(sensors.accel_temperature_c), VALUE_DIGITS);
        self.draw_line(0, &["Temp1:", temp1.as_str(), "°F"]);

        let temp2 = format_float(celsius_to_fahrenheit(sensors.baro_temperature_c), VALUE_DIGITS);
        self.draw_line(1, &["Temp2:", temp2.as_str(), "°F"]);

        let pressure = format_float(sensors.pressure_hpa, VALUE_DIGITS);
        self.draw_line(2, &["Barom:", pressure.as_str(), "hPa"]);

        let altitude = format_float(meters_to_feet(sensors.altitude_m), VALUE_DIGITS);
        self.draw_line(3, &["Elev :", altitude.as_str(), "ft"]);

        self.backend.flush()
    }

    /// Light level plus two spare rows
    pub fn compose_other(&mut self, light_lux: f32, spare: [f32; 2]) -> Result<(), DisplayError> {
        self.begin(TITLE_OTHER);

        let light = format_float(light_lux, VALUE_DIGITS);
        self.draw_line(0, &["Light:", light.as_str(), "Lux"]);

        for (index, (label, value)) in SPARE_LABELS.iter().zip(spare).enumerate() {
            let text = format_float(value, VALUE_DIGITS);
            self.draw_line(index + 1, &[*label, text.as_str(), "Units"]);
        }

        self.backend.flush()
    }

    /// One step of the bus status screen
    ///
    /// `Bus` and `Summary` start from a cleared canvas. `Accelerometer` and
    /// `Barometer` add their line to whatever the previous step left. The
    /// bus line always reads OK: a faulted bus never reaches this screen.
    pub fn compose_status(&mut self, step: StatusStep, health: &BusHealth) -> Result<(), DisplayError> {
        if step.clears() {
            self.begin(TITLE_STATUS);
        }

        match step {
            StatusStep::Bus => {
                self.draw_line(0, &[LABEL_BUS, Health::Ok.label()]);
            }
            StatusStep::Accelerometer => {
                self.draw_line(1, &[LABEL_ACCELEROMETER, health.accelerometer.label()]);
            }
            StatusStep::Barometer => {
                self.draw_line(2, &[LABEL_BAROMETER, health.barometer.label()]);
            }
            StatusStep::Summary => {
                self.draw_line(0, &[LABEL_BUS, Health::Ok.label()]);
                self.draw_line(1, &[LABEL_ACCELEROMETER, health.accelerometer.label()]);
                self.draw_line(2, &[LABEL_BAROMETER, health.barometer.label()]);
                self.draw_line(3, &[LABEL_COPROCESSOR, health.coprocessor.label()]);
            }
        }

        self.backend.flush()
    }

    fn begin(&mut self, title: &str) {
        self.backend.clear();
        let anchor = self.layout.title;
        self.backend
            .draw_string(anchor.x, anchor.y, title, FontSize::Title, PixelValue::On);
    }

    fn draw_axes(&mut self, labels: &[&str; 3], values: [f32; 3], unit: &str) {
        for (index, (label, value)) in labels.iter().zip(values).enumerate() {
            let text = format_float(value, VALUE_DIGITS);
            self.draw_line(index, &[*label, text.as_str(), unit]);
        }
    }

    fn draw_line(&mut self, line: usize, fields: &[&str]) {
        let anchor = self.layout.line(line);
        let mut x = anchor.x;

        for field in fields {
            self.backend
                .draw_string(x, anchor.y, field, FontSize::Line, PixelValue::On);
            x = next_column_after(x, field).saturating_add(self.layout.field_gap);
        }
    }
}
