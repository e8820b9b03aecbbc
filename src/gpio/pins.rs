//! # Value-level pin definitions
//!
//! Ports, pin levels, directions, resistor terminations and pin modes. All
//! types are plain values so they can be placed in `const` configuration
//! tables.

//==================================================================================================
//  Definitions
//==================================================================================================

/// Number of pins in each GPIO port
pub const PINS_PER_PORT: u8 = 8;

/// Number of GPIO ports on the device
pub const PORT_COUNT: usize = 6;

/// Value written to the `GPIOLOCK` register to unlock the `GPIOCR` register
pub const GPIO_LOCK_KEY: u32 = 0x4C4F_434B;

/// Invalid numeric pin mode
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidPinMode(pub u8);

//==================================================================================================
//  PortId
//==================================================================================================

/// Value-level `enum` for the GPIO ports
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PortId {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
}

impl PortId {
    pub const ALL: [PortId; PORT_COUNT] = [
        PortId::A,
        PortId::B,
        PortId::C,
        PortId::D,
        PortId::E,
        PortId::F,
    ];

    /// Resolve a port index as it appears in a configuration table.
    ///
    /// Returns [`None`] for any index outside `0..6`.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(PortId::A),
            1 => Some(PortId::B),
            2 => Some(PortId::C),
            3 => Some(PortId::D),
            4 => Some(PortId::E),
            5 => Some(PortId::F),
            _ => None,
        }
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Bit of this port in the `RCGCGPIO` and `PRGPIO` registers
    #[inline]
    pub(crate) const fn clock_mask(self) -> u32 {
        1 << self as u32
    }
}

//==================================================================================================
//  Levels, directions and resistors
//==================================================================================================

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinLevel {
    Low = 0,
    High = 1,
}

impl PinLevel {
    #[inline]
    pub const fn is_high(self) -> bool {
        matches!(self, PinLevel::High)
    }

    #[inline]
    pub const fn toggled(self) -> Self {
        match self {
            PinLevel::Low => PinLevel::High,
            PinLevel::High => PinLevel::Low,
        }
    }
}

impl From<bool> for PinLevel {
    #[inline]
    fn from(high: bool) -> Self {
        if high {
            PinLevel::High
        } else {
            PinLevel::Low
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Input,
    Output,
}

/// Internal resistor termination of a pin
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Resistor {
    Off,
    PullUp,
    PullDown,
}

//==================================================================================================
//  Pin modes
//==================================================================================================

/// Alternate peripheral function, selected through the `GPIOPCTL` nibble of a
/// pin. The discriminant is the nibble value.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AltFunction {
    Alt1 = 1,
    Alt2 = 2,
    Alt3 = 3,
    Alt4 = 4,
    Alt5 = 5,
    Alt6 = 6,
    Alt7 = 7,
    Alt8 = 8,
    Alt9 = 9,
    Alt14 = 14,
    Alt15 = 15,
}

impl AltFunction {
    /// Port mux control value written to `GPIOPCTL`
    #[inline]
    pub const fn pmc(self) -> u8 {
        self as u8
    }
}

/// Value-level `enum` representing the electrical function of a pin
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    /// Analog function, used by the ADC and the analog comparators
    Analog,
    /// Digital alternate peripheral function
    Alternate(AltFunction),
    /// Digital input/output function
    Dio,
}

/// Value-level variant of [`PinMode`] for analog mode
pub const PORT_PIN_MODE_ADC: PinMode = PinMode::Analog;
/// Value-level variant of [`PinMode`] for digital I/O mode
pub const PORT_PIN_MODE_DIO: PinMode = PinMode::Dio;

impl PinMode {
    /// Numeric encoding of the mode as used by the raw mode API
    ///
    /// `Analog` is 0, `Alt1` to `Alt9` are 1 to 9, `Alt14` is 10, `Alt15`
    /// is 11 and `Dio` is 12.
    pub const fn raw(self) -> u8 {
        match self {
            PinMode::Analog => 0,
            PinMode::Alternate(AltFunction::Alt14) => 10,
            PinMode::Alternate(AltFunction::Alt15) => 11,
            PinMode::Alternate(alt) => alt as u8,
            PinMode::Dio => 12,
        }
    }

    pub const fn from_raw(raw: u8) -> Result<Self, InvalidPinMode> {
        use AltFunction::*;
        let mode = match raw {
            0 => PinMode::Analog,
            1 => PinMode::Alternate(Alt1),
            2 => PinMode::Alternate(Alt2),
            3 => PinMode::Alternate(Alt3),
            4 => PinMode::Alternate(Alt4),
            5 => PinMode::Alternate(Alt5),
            6 => PinMode::Alternate(Alt6),
            7 => PinMode::Alternate(Alt7),
            8 => PinMode::Alternate(Alt8),
            9 => PinMode::Alternate(Alt9),
            10 => PinMode::Alternate(Alt14),
            11 => PinMode::Alternate(Alt15),
            12 => PinMode::Dio,
            _ => return Err(InvalidPinMode(raw)),
        };
        Ok(mode)
    }
}

impl TryFrom<u8> for PinMode {
    type Error = InvalidPinMode;

    #[inline]
    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        PinMode::from_raw(raw)
    }
}

//==================================================================================================
//  Reserved pins
//==================================================================================================

/// Hardware protection class of a pin
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Reservation {
    /// No special handling
    Free,
    /// PD7 and PF0. The commit register must be unlocked before the pin
    /// function or direction can be changed.
    CommitLocked,
    /// PC0 to PC3, wired to the JTAG/SWD debug interface. These pins are never
    /// reprogrammed.
    Jtag,
}

impl Reservation {
    pub const fn of(port: PortId, pin: u8) -> Self {
        match (port, pin) {
            (PortId::D, 7) | (PortId::F, 0) => Reservation::CommitLocked,
            (PortId::C, 0..=3) => Reservation::Jtag,
            _ => Reservation::Free,
        }
    }

    #[inline]
    pub const fn is_jtag(self) -> bool {
        matches!(self, Reservation::Jtag)
    }
}

//==================================================================================================
//  Tests
//==================================================================================================
