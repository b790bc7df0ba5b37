//! Screen selection
//!
//! The scheduler picks which screen the display shows next. Older schedulers
//! speak numeric codes; [`ScreenState::from_code`] maps them onto the enum
//! and rejects anything outside the known set.

/// One step of the incremental bus-status screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StatusStep {
    /// Clear, draw title and the bus line
    Bus,
    /// Append the accelerometer line
    Accelerometer,
    /// Append the barometer line
    Barometer,
    /// Clear and redraw every line, co-processor included
    Summary,
}

impl StatusStep {
    /// Steps in the order the start-up sequence draws them
    pub const ALL: [StatusStep; 4] = [
        StatusStep::Bus,
        StatusStep::Accelerometer,
        StatusStep::Barometer,
        StatusStep::Summary,
    ];

    /// Step index (0-3)
    pub fn index(&self) -> u8 {
        match self {
            StatusStep::Bus => 0,
            StatusStep::Accelerometer => 1,
            StatusStep::Barometer => 2,
            StatusStep::Summary => 3,
        }
    }

    /// Step from an index (0-3)
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Whether this step starts from a cleared canvas
    pub fn clears(&self) -> bool {
        matches!(self, StatusStep::Bus | StatusStep::Summary)
    }
}

/// Screens the display can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScreenState {
    /// Logo shown at power-on
    Splash,
    /// SSID, frequency/channel, RSSI
    Network,
    /// Logo shown between data screens
    Logo,
    /// Accelerometer X/Y/Z
    Acceleration,
    /// Gyroscope X/Y/Z
    AngularRate,
    /// Temperatures, pressure, altitude
    Environment,
    /// Light sensor and spare rows
    Other,
    /// Logo shown at the end of a cycle
    Closing,
    /// Bus health, drawn in steps
    Status(StatusStep),
}

impl ScreenState {
    /// Highest valid numeric code
    pub const MAX_CODE: u8 = 11;

    /// Map a numeric selector onto a screen
    ///
    /// Codes 0-7 are the rotating screens, 8-11 the four status steps.
    pub fn from_code(code: u8) -> Option<Self> {
        use ScreenState::*;

        match code {
            0 => Some(Splash),
            1 => Some(Network),
            2 => Some(Logo),
            3 => Some(Acceleration),
            4 => Some(AngularRate),
            5 => Some(Environment),
            6 => Some(Other),
            7 => Some(Closing),
            8..=11 => StatusStep::from_index(code - 8).map(Status),
            _ => None,
        }
    }

    /// Numeric selector of this screen
    pub fn code(&self) -> u8 {
        use ScreenState::*;

        match self {
            Splash => 0,
            Network => 1,
            Logo => 2,
            Acceleration => 3,
            AngularRate => 4,
            Environment => 5,
            Other => 6,
            Closing => 7,
            Status(step) => 8 + step.index(),
        }
    }

    /// Check if this screen only shows the logo bitmap
    pub fn is_logo(&self) -> bool {
        matches!(self, ScreenState::Splash | ScreenState::Logo | ScreenState::Closing)
    }
}
