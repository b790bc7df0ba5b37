//! Display state machine
//!
//! Holds the screen the scheduler selected and composes it on every tick.
//! The machine never changes screens on its own.

use sensorpanel_core::snapshot::DeviceSnapshot;
use sensorpanel_core::state::ScreenState;

use crate::backend::{DisplayBackend, DisplayError};
use crate::composer::ScreenComposer;

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// The screen was composed and flushed
    Rendered(ScreenState),
    /// No valid screen is selected; nothing was drawn
    Skipped,
}

/// Dispatches ticks to the composer routine for the selected screen
pub struct DisplayStateMachine<B> {
    composer: ScreenComposer<B>,
    /// `None` after an unknown selector code
    state: Option<ScreenState>,
}

impl<B: DisplayBackend> DisplayStateMachine<B> {
    /// Create a machine showing the splash screen
    pub fn new(backend: B) -> Self {
        Self::with_composer(ScreenComposer::new(backend))
    }

    /// Create a machine around an existing composer
    pub fn with_composer(composer: ScreenComposer<B>) -> Self {
        Self {
            composer,
            state: Some(ScreenState::Splash),
        }
    }

    /// Currently selected screen, if any
    pub fn state(&self) -> Option<ScreenState> {
        self.state
    }

    /// Select the screen composed on the next tick
    pub fn select(&mut self, state: ScreenState) {
        self.state = Some(state);
    }

    /// Select a screen by numeric code
    ///
    /// Unknown codes leave no screen selected, so ticks do nothing until the
    /// next valid selection.
    pub fn select_code(&mut self, code: u8) -> Option<ScreenState> {
        self.state = ScreenState::from_code(code);

        #[cfg(feature = "defmt")]
        {
            if self.state.is_none() {
                defmt::debug!("Unknown screen code {}", code);
            }
        }

        self.state
    }

    /// Get the composer
    pub fn composer(&self) -> &ScreenComposer<B> {
        &self.composer
    }

    /// Get the composer mutably
    pub fn composer_mut(&mut self) -> &mut ScreenComposer<B> {
        &mut self.composer
    }

    /// Release the composer
    pub fn into_composer(self) -> ScreenComposer<B> {
        self.composer
    }

    /// Compose the selected screen from `snapshot`
    ///
    /// Flush errors are returned to the caller; the machine does not retry.
    pub fn tick(&mut self, snapshot: &DeviceSnapshot) -> Result<TickOutcome, DisplayError> {
        let Some(state) = self.state else {
            #[cfg(feature = "defmt")]
            defmt::trace!("No screen selected, skipping tick");
            return Ok(TickOutcome::Skipped);
        };

        #[cfg(feature = "defmt")]
        defmt::trace!("Composing {}", state);

        let sensors = &snapshot.sensors;
        let result = match state {
            ScreenState::Splash | ScreenState::Logo | ScreenState::Closing => {
                self.composer.compose_logo()
            }
            ScreenState::Network => self.composer.compose_network(&snapshot.network),
            ScreenState::Acceleration => self.composer.compose_acceleration(sensors.acceleration_mg),
            ScreenState::AngularRate => self.composer.compose_angular_rate(sensors.angular_rate_dps),
            ScreenState::Environment => self.composer.compose_environment(sensors),
            ScreenState::Other => self.composer.compose_other(sensors.light_lux, [0.0, 0.0]),
            ScreenState::Status(step) => self.composer.compose_status(step, &snapshot.health),
        };

        match result {
            Ok(()) => Ok(TickOutcome::Rendered(state)),
            Err(e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Display flush failed on {}: {}", state, e);
                Err(e)
            }
        }
    }
}
