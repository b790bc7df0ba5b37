//! SSD1306 OLED Display Driver
//!
//! Driver for 128x64 SSD1306-based OLED panels via blocking I2C. The panel
//! is a [`FlushTarget`]: it takes the finished frame from a
//! [`Canvas`](sensorpanel_display::Canvas) and writes it page by page.
//! SH1106 panels speak the same protocol with a 2-column RAM offset.

use embedded_hal::i2c::I2c;
use sensorpanel_display::{DisplayError, FlushTarget, PixelBuffer};

/// Bytes per page write
const WIDTH: usize = 128;

/// Control byte preceding a run of commands
const CONTROL_COMMAND: u8 = 0x00;

/// Control byte preceding display RAM data
const CONTROL_DATA: u8 = 0x40;

/// Longest command run sent in one transfer
const MAX_COMMANDS: usize = 32;

/// Panel commands, grouped as in the datasheet
mod cmd {
    pub const CONTRAST: u8 = 0x81;
    pub const ENTIRE_DISPLAY_RESUME: u8 = 0xA4;
    pub const NORMAL_DISPLAY: u8 = 0xA6;
    pub const INVERT_DISPLAY: u8 = 0xA7;
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;

    pub const ADDRESSING_MODE: u8 = 0x20;
    pub const COLUMN_LOW: u8 = 0x00;
    pub const COLUMN_HIGH: u8 = 0x10;
    pub const PAGE_START: u8 = 0xB0;

    pub const START_LINE: u8 = 0x40;
    pub const SEGMENT_REMAP: u8 = 0xA1;
    pub const MULTIPLEX_RATIO: u8 = 0xA8;
    pub const COM_SCAN_REVERSED: u8 = 0xC8;
    pub const DISPLAY_OFFSET: u8 = 0xD3;
    pub const COM_PINS: u8 = 0xDA;

    pub const CLOCK_DIVIDE: u8 = 0xD5;
    pub const PRECHARGE_PERIOD: u8 = 0xD9;
    pub const VCOMH_DESELECT: u8 = 0xDB;
    pub const CHARGE_PUMP: u8 = 0x8D;
}

/// Page addressing: the RAM pointer stays on the selected page and only the
/// page and column commands move it between pages
const PAGE_ADDRESSING: u8 = 0x02;

/// Power-on command sequence for a 128x64 panel on the internal charge pump
const INIT_SEQUENCE: [u8; 25] = [
    cmd::DISPLAY_OFF,
    cmd::CLOCK_DIVIDE,
    0x80,
    cmd::MULTIPLEX_RATIO,
    0x3F, // 64 rows
    cmd::DISPLAY_OFFSET,
    0x00,
    cmd::START_LINE,
    cmd::CHARGE_PUMP,
    0x14,
    cmd::ADDRESSING_MODE,
    PAGE_ADDRESSING,
    cmd::SEGMENT_REMAP,
    cmd::COM_SCAN_REVERSED,
    cmd::COM_PINS,
    0x12,
    cmd::CONTRAST,
    0xCF,
    cmd::PRECHARGE_PERIOD,
    0xF1,
    cmd::VCOMH_DESELECT,
    0x40,
    cmd::ENTIRE_DISPLAY_RESUME,
    cmd::NORMAL_DISPLAY,
    cmd::DISPLAY_ON,
];

/// Panel bus configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Ssd1306Config {
    /// 7-bit I2C address (0x3C or 0x3D)
    pub address: u8,
    /// First visible RAM column
    pub column_offset: u8,
}

impl Default for Ssd1306Config {
    fn default() -> Self {
        Self {
            address: 0x3C,
            column_offset: 0,
        }
    }
}

impl Ssd1306Config {
    /// SH1106 panels map 128 visible columns into 132 columns of RAM
    pub const SH1106: Self = Self {
        address: 0x3C,
        column_offset: 2,
    };
}

/// SSD1306 OLED driver
pub struct Ssd1306<I2C> {
    i2c: I2C,
    config: Ssd1306Config,
    initialized: bool,
}

impl<I2C: I2c> Ssd1306<I2C> {
    /// Create a driver with the default configuration
    pub fn new(i2c: I2C) -> Self {
        Self::with_config(i2c, Ssd1306Config::default())
    }

    /// Create a driver with a custom configuration
    pub fn with_config(i2c: I2C, config: Ssd1306Config) -> Self {
        Self {
            i2c,
            config,
            initialized: false,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Ssd1306Config {
        &self.config
    }

    /// Check if `init` has completed
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Release the bus
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Initialize the display
    ///
    /// Sends the whole power-on sequence in one transfer. The panel is left
    /// in page addressing mode, so every flush positions each page itself
    /// and a flush interrupted by a bus error cannot misalign the next one.
    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.initialized = false;
        self.commands(&INIT_SEQUENCE)?;
        self.initialized = true;

        #[cfg(feature = "defmt")]
        defmt::info!("SSD1306 initialized at {=u8:#x}", self.config.address);

        Ok(())
    }

    /// Set display contrast (0-255)
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), DisplayError> {
        self.commands(&[cmd::CONTRAST, contrast])
    }

    /// Turn display on/off
    pub fn set_display_on(&mut self, on: bool) -> Result<(), DisplayError> {
        let command = if on { cmd::DISPLAY_ON } else { cmd::DISPLAY_OFF };
        self.commands(&[command])
    }

    /// Invert display colors
    pub fn set_inverted(&mut self, inverted: bool) -> Result<(), DisplayError> {
        let command = if inverted {
            cmd::INVERT_DISPLAY
        } else {
            cmd::NORMAL_DISPLAY
        };
        self.commands(&[command])
    }

    /// Send up to `MAX_COMMANDS` command bytes behind one control byte
    fn commands(&mut self, commands: &[u8]) -> Result<(), DisplayError> {
        let mut frame = [CONTROL_COMMAND; MAX_COMMANDS + 1];
        let len = commands.len();
        if len > MAX_COMMANDS {
            return Err(DisplayError::BufferOverflow);
        }
        frame[1..=len].copy_from_slice(commands);
        self.write(&frame[..=len])
    }

    /// Move the RAM pointer to column 0 of `page`
    fn select_page(&mut self, page: u8) -> Result<(), DisplayError> {
        let column = self.config.column_offset;
        self.commands(&[
            cmd::PAGE_START | page,
            cmd::COLUMN_LOW | (column & 0x0F),
            cmd::COLUMN_HIGH | (column >> 4),
        ])
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), DisplayError> {
        self.i2c.write(self.config.address, bytes).map_err(|_| {
            #[cfg(feature = "defmt")]
            defmt::warn!("SSD1306 write to {=u8:#x} failed", self.config.address);
            DisplayError::Communication
        })
    }
}

impl<I2C: I2c> FlushTarget for Ssd1306<I2C> {
    fn flush(&mut self, buffer: &PixelBuffer) -> Result<(), DisplayError> {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }

        let mut data = [CONTROL_DATA; WIDTH + 1];
        for (page, columns) in (0u8..).zip(buffer.pages().iter()) {
            self.select_page(page)?;
            data[1..].copy_from_slice(columns);
            self.write(&data)?;
        }

        #[cfg(feature = "defmt")]
        defmt::trace!("SSD1306 frame flushed");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::{ErrorKind, ErrorType, Operation};
    use heapless::Vec;

    type Write = Vec<u8, { WIDTH + 1 }>;

    /// Mock I2C bus recording every write
    struct MockI2c {
        writes: Vec<(u8, Write), 96>,
        /// Fail every transfer once this many writes succeeded
        fail_after: Option<usize>,
    }

    impl MockI2c {
        fn new() -> Self {
            Self {
                writes: Vec::new(),
                fail_after: None,
            }
        }

        fn failing_after(count: usize) -> Self {
            Self {
                writes: Vec::new(),
                fail_after: Some(count),
            }
        }

        fn commands(&self) -> impl Iterator<Item = u8> + '_ {
            self.writes
                .iter()
                .filter(|(_, bytes)| bytes.first() == Some(&CONTROL_COMMAND))
                .flat_map(|(_, bytes)| bytes[1..].iter().copied())
        }

        fn data_writes(&self) -> impl Iterator<Item = &Write> + '_ {
            self.writes
                .iter()
                .map(|(_, bytes)| bytes)
                .filter(|bytes| bytes.first() == Some(&CONTROL_DATA))
        }
    }

    impl ErrorType for MockI2c {
        type Error = ErrorKind;
    }

    impl I2c for MockI2c {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            for op in operations {
                match op {
                    Operation::Write(bytes) => {
                        if self.fail_after == Some(self.writes.len()) {
                            return Err(ErrorKind::Other);
                        }
                        let bytes = Vec::from_slice(bytes).map_err(|_| ErrorKind::Overrun)?;
                        self.writes
                            .push((address, bytes))
                            .map_err(|_| ErrorKind::Overrun)?;
                    }
                    Operation::Read(buffer) => buffer.fill(0),
                }
            }
            Ok(())
        }
    }

    /// Controller model tracking GDDRAM and its write pointer
    ///
    /// Page and column commands only move the pointer in page addressing
    /// mode. In horizontal mode data runs on into the next page.
    struct PanelRam {
        ram: [[u8; WIDTH]; 8],
        mode: u8,
        page: usize,
        column: usize,
        data_writes: usize,
        /// Data write that stops halfway and reports a bus error
        broken_write: Option<usize>,
    }

    impl PanelRam {
        fn new() -> Self {
            Self {
                ram: [[0; WIDTH]; 8],
                mode: PAGE_ADDRESSING,
                page: 0,
                column: 0,
                data_writes: 0,
                broken_write: None,
            }
        }

        fn breaking_data_write(index: usize) -> Self {
            Self {
                broken_write: Some(index),
                ..Self::new()
            }
        }

        fn command(&mut self, bytes: &[u8]) {
            let paging = |mode: u8| mode == PAGE_ADDRESSING;
            let mut bytes = bytes.iter().copied();
            while let Some(byte) = bytes.next() {
                match byte {
                    cmd::ADDRESSING_MODE => {
                        if let Some(mode) = bytes.next() {
                            self.mode = mode;
                        }
                    }
                    cmd::CONTRAST
                    | cmd::CLOCK_DIVIDE
                    | cmd::MULTIPLEX_RATIO
                    | cmd::DISPLAY_OFFSET
                    | cmd::CHARGE_PUMP
                    | cmd::COM_PINS
                    | cmd::PRECHARGE_PERIOD
                    | cmd::VCOMH_DESELECT => {
                        bytes.next();
                    }
                    0xB0..=0xB7 if paging(self.mode) => self.page = usize::from(byte & 0x07),
                    0x00..=0x0F if paging(self.mode) => {
                        self.column = (self.column & 0xF0) | usize::from(byte);
                    }
                    0x10..=0x17 if paging(self.mode) => {
                        self.column = (self.column & 0x0F) | (usize::from(byte & 0x07) << 4);
                    }
                    _ => {}
                }
            }
        }

        fn data(&mut self, bytes: &[u8]) {
            for &byte in bytes {
                self.ram[self.page][self.column] = byte;
                self.column += 1;
                if self.column == WIDTH {
                    self.column = 0;
                    if self.mode != PAGE_ADDRESSING {
                        self.page = (self.page + 1) % 8;
                    }
                }
            }
        }
    }

    impl ErrorType for PanelRam {
        type Error = ErrorKind;
    }

    impl I2c for PanelRam {
        fn transaction(
            &mut self,
            _address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            for op in operations {
                match op {
                    Operation::Write(bytes) => match bytes.split_first() {
                        Some((&CONTROL_COMMAND, commands)) => self.command(commands),
                        Some((&CONTROL_DATA, data)) => {
                            let index = self.data_writes;
                            self.data_writes += 1;
                            if self.broken_write == Some(index) {
                                self.data(&data[..data.len() / 2]);
                                return Err(ErrorKind::Other);
                            }
                            self.data(data);
                        }
                        _ => return Err(ErrorKind::Other),
                    },
                    Operation::Read(buffer) => buffer.fill(0),
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_init_sends_sequence() {
        let mut panel = Ssd1306::new(MockI2c::new());
        assert!(!panel.is_initialized());

        panel.init().unwrap();
        assert!(panel.is_initialized());

        let i2c = panel.release();
        assert_eq!(i2c.writes.len(), 1);
        assert_eq!(i2c.writes[0].0, 0x3C);
        assert!(i2c.commands().eq(INIT_SEQUENCE.iter().copied()));
    }

    #[test]
    fn test_init_selects_page_addressing() {
        let mut ram = PanelRam::new();
        ram.mode = 0x00;

        let mut panel = Ssd1306::new(ram);
        panel.init().unwrap();
        assert_eq!(panel.release().mode, PAGE_ADDRESSING);
    }

    #[test]
    fn test_flush_before_init() {
        let mut panel = Ssd1306::new(MockI2c::new());
        let buffer = PixelBuffer::new();

        assert_eq!(panel.flush(&buffer), Err(DisplayError::NotInitialized));
        assert!(panel.release().writes.is_empty());
    }

    #[test]
    fn test_flush_writes_every_page() {
        let mut panel = Ssd1306::new(MockI2c::new());
        panel.init().unwrap();

        let mut buffer = PixelBuffer::new();
        buffer.set_pixel(0, 0, true);
        buffer.set_pixel(127, 63, true);
        panel.flush(&buffer).unwrap();

        let i2c = panel.release();
        let pages: Vec<&Write, 8> = i2c.data_writes().collect();
        assert_eq!(pages.len(), 8);
        for page in pages.iter() {
            assert_eq!(page.len(), WIDTH + 1);
        }
        assert_eq!(pages[0][1], 0x01);
        assert_eq!(pages[7][WIDTH], 0x80);

        // Page address then column 0 before each data write
        let cursor: Vec<u8, 32> = i2c.commands().skip(INIT_SEQUENCE.len()).collect();
        assert_eq!(&cursor[..3], &[0xB0, 0x00, 0x10]);
        assert_eq!(&cursor[21..24], &[0xB7, 0x00, 0x10]);
    }

    #[test]
    fn test_flush_fills_panel_ram() {
        let mut panel = Ssd1306::new(PanelRam::new());
        panel.init().unwrap();

        let mut buffer = PixelBuffer::new();
        buffer.set_pixel(0, 0, true);
        buffer.set_pixel(64, 20, true);
        buffer.set_pixel(127, 63, true);
        panel.flush(&buffer).unwrap();

        let ram = panel.release();
        assert_eq!(&ram.ram, buffer.pages());
    }

    #[test]
    fn test_flush_after_interrupted_flush_starts_at_origin() {
        let mut panel = Ssd1306::new(PanelRam::breaking_data_write(2));
        panel.init().unwrap();

        let mut stale = PixelBuffer::new();
        for x in 0..128 {
            for y in 0..64 {
                stale.set_pixel(x, y, true);
            }
        }
        assert_eq!(panel.flush(&stale), Err(DisplayError::Communication));

        let mut frame = PixelBuffer::new();
        frame.set_pixel(0, 0, true);
        panel.flush(&frame).unwrap();

        let ram = panel.release();
        assert_eq!(ram.ram[0][0], 0x01);
        assert_eq!(ram.ram[2][0], 0x00);
        assert_eq!(&ram.ram, frame.pages());
    }

    #[test]
    fn test_sh1106_column_offset() {
        let mut panel = Ssd1306::with_config(MockI2c::new(), Ssd1306Config::SH1106);
        panel.init().unwrap();
        panel.flush(&PixelBuffer::new()).unwrap();

        let i2c = panel.release();
        let cursor: Vec<u8, 32> = i2c.commands().skip(INIT_SEQUENCE.len()).collect();
        assert_eq!(&cursor[..3], &[0xB0, 0x02, 0x10]);
    }

    #[test]
    fn test_bus_error_maps_to_communication() {
        let mut panel = Ssd1306::new(MockI2c::failing_after(0));
        assert_eq!(panel.init(), Err(DisplayError::Communication));
        assert!(!panel.is_initialized());
    }

    #[test]
    fn test_flush_bus_error() {
        // Init, then two transfers per page: fail on the third page's cursor
        let mut panel = Ssd1306::new(MockI2c::failing_after(1 + 4));
        panel.init().unwrap();
        assert_eq!(
            panel.flush(&PixelBuffer::new()),
            Err(DisplayError::Communication)
        );
        assert_eq!(panel.release().data_writes().count(), 2);
    }

    #[test]
    fn test_contrast_and_power() {
        let mut panel = Ssd1306::new(MockI2c::new());
        panel.set_contrast(0x7F).unwrap();
        panel.set_display_on(false).unwrap();
        panel.set_display_on(true).unwrap();
        panel.set_inverted(true).unwrap();
        panel.set_inverted(false).unwrap();

        let i2c = panel.release();
        assert_eq!(i2c.writes.len(), 5);
        let sent: Vec<u8, 8> = i2c.commands().collect();
        assert_eq!(sent.as_slice(), &[0x81, 0x7F, 0xAE, 0xAF, 0xA7, 0xA6]);
    }

    #[test]
    fn test_oversized_command_run() {
        let mut panel = Ssd1306::new(MockI2c::new());
        assert_eq!(
            panel.commands(&[cmd::DISPLAY_ON; MAX_COMMANDS + 1]),
            Err(DisplayError::BufferOverflow)
        );
        assert!(panel.release().writes.is_empty());
    }

    #[test]
    fn test_state_machine_through_panel() {
        use sensorpanel_core::snapshot::DeviceSnapshot;
        use sensorpanel_core::state::ScreenState;
        use sensorpanel_display::{Canvas, DisplayStateMachine, TickOutcome};

        let mut panel = Ssd1306::new(MockI2c::new());
        panel.init().unwrap();

        let mut machine = DisplayStateMachine::new(Canvas::new(panel));
        machine.select(ScreenState::Acceleration);
        let outcome = machine.tick(&DeviceSnapshot::default()).unwrap();
        assert_eq!(outcome, TickOutcome::Rendered(ScreenState::Acceleration));

        let canvas = machine.into_composer().into_backend();
        let lit = canvas.buffer().lit_pixels();
        assert!(lit > 0);

        let i2c = canvas.into_target().release();
        let sent: u32 = i2c
            .data_writes()
            .map(|page| page[1..].iter().map(|b| b.count_ones()).sum::<u32>())
            .sum();
        assert_eq!(sent, lit);
    }
}
