//! # Pin configuration table
//!
//! A [`PortConfig`] is a fixed-size, ordered table of [`PinConfig`] entries.
//! The index of an entry is its Port Pin ID, used by the run-time API of the
//! [`PortDriver`](super::PortDriver).
//!
//! Tables are meant to be built as `const` values:
//!
//! ```
//! use tm4c123_port::gpio::{Direction, PinLevel, Resistor};
//! use tm4c123_port::port::{PinConfig, PortConfig};
//!
//! const BOARD: PortConfig<2> = PortConfig::new([
//!     PinConfig::new(5, 1)
//!         .with_direction(Direction::Output)
//!         .with_initial_level(PinLevel::High),
//!     PinConfig::new(5, 4).with_resistor(Resistor::PullUp),
//! ]);
//! const _: () = assert!(BOARD.has_unique_pins());
//! ```
use crate::gpio::{Direction, PinLevel, PinMode, PortId, Resistor, PINS_PER_PORT};

/// Configuration of a single pin
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConfig {
    /// Port index, 0 to 5 for port A to F
    pub port: u8,
    /// Pin number inside the port, 0 to 7
    pub pin: u8,
    pub direction: Direction,
    pub resistor: Resistor,
    /// Level driven at initialization
    pub initial_level: PinLevel,
    pub initial_mode: PinMode,
    pub direction_changeable: bool,
    pub mode_changeable: bool,
}

impl PinConfig {
    /// Digital input without resistor, driven low, nothing changeable
    pub const fn new(port: u8, pin: u8) -> Self {
        PinConfig {
            port,
            pin,
            direction: Direction::Input,
            resistor: Resistor::Off,
            initial_level: PinLevel::Low,
            initial_mode: PinMode::Dio,
            direction_changeable: false,
            mode_changeable: false,
        }
    }

    pub const fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub const fn with_resistor(mut self, resistor: Resistor) -> Self {
        self.resistor = resistor;
        self
    }

    pub const fn with_initial_level(mut self, level: PinLevel) -> Self {
        self.initial_level = level;
        self
    }

    pub const fn with_mode(mut self, mode: PinMode) -> Self {
        self.initial_mode = mode;
        self
    }

    pub const fn direction_changeable(mut self, changeable: bool) -> Self {
        self.direction_changeable = changeable;
        self
    }

    pub const fn mode_changeable(mut self, changeable: bool) -> Self {
        self.mode_changeable = changeable;
        self
    }

    /// Port of this pin, [`None`] for an unknown port index
    #[inline]
    pub const fn port_id(&self) -> Option<PortId> {
        PortId::from_index(self.port)
    }

    /// Whether the entry names an existing port and pin
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.port_id().is_some() && self.pin < PINS_PER_PORT
    }
}

/// Ordered table of `N` pin configurations
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct PortConfig<const N: usize> {
    pub channels: [PinConfig; N],
}

impl<const N: usize> PortConfig<N> {
    pub const fn new(channels: [PinConfig; N]) -> Self {
        PortConfig { channels }
    }

    /// Number of configured pins
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Entry of a Port Pin ID
    #[inline]
    pub fn get(&self, pin: usize) -> Option<&PinConfig> {
        self.channels.get(pin)
    }

    /// Port Pin ID of the entry configuring `port`/`pin`
    pub fn find(&self, port: PortId, pin: u8) -> Option<usize> {
        self.channels
            .iter()
            .position(|c| c.port == port.index() && c.pin == pin)
    }

    /// Whether no (port, pin) pair appears twice in the table
    pub const fn has_unique_pins(&self) -> bool {
        let mut i = 0;
        while i < N {
            let mut j = i + 1;
            while j < N {
                let (a, b) = (&self.channels[i], &self.channels[j]);
                if a.port == b.port && a.pin == b.pin {
                    return false;
                }
                j += 1;
            }
            i += 1;
        }
        true
    }

    /// Whether every entry names an existing port and pin
    pub const fn all_valid(&self) -> bool {
        let mut i = 0;
        while i < N {
            if !self.channels[i].is_valid() {
                return false;
            }
            i += 1;
        }
        true
    }
}
