//! Unit conversions used by the screens

/// Feet per meter
pub const FEET_PER_METER: f32 = 3.280_839_9;

/// Convert Celsius to Fahrenheit
pub fn celsius_to_fahrenheit(celsius: f32) -> f32 {
    celsius * 1.8 + 32.0
}

/// Convert meters to feet
pub fn meters_to_feet(meters: f32) -> f32 {
    meters * FEET_PER_METER
}

/// Wi-Fi channel for a carrier frequency
///
/// 2.4 GHz band channels count from 2407 MHz and 5 GHz channels from
/// 5000 MHz, both in 5 MHz steps. Anything else (including exactly
/// 5000 MHz) is channel 0. Frequencies between 2400 and 2407 MHz also
/// yield channel 0.
pub fn channel_from_frequency(frequency_mhz: u16) -> u16 {
    let offset = if frequency_mhz > 2400 && frequency_mhz < 5000 {
        frequency_mhz.saturating_sub(2407)
    } else if frequency_mhz > 5000 {
        frequency_mhz - 5000
    } else {
        0
    };

    offset / 5
}
