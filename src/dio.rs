//! # Digital I/O channels
//!
//! A [`DioChannel`] reads and writes the data bit of a single pin. It does not
//! configure the pin; direction and function are set up by the
//! [`PortDriver`](crate::port::PortDriver).
//!
//! The channel implements the `embedded-hal` digital traits, so it can be
//! used with any driver written against them, for example [`Led`](crate::led::Led).
//!
//! ```
//! use embedded_hal::digital::v2::{OutputPin, StatefulOutputPin};
//! use tm4c123_port::dio::DioChannel;
//! use tm4c123_port::gpio::{PortId, RegisterImage};
//!
//! let image = RegisterImage::new();
//! let mut led = DioChannel::new(&image, PortId::F, 1).unwrap();
//! led.set_high().unwrap();
//! assert!(led.is_set_high().unwrap());
//! ```
use core::convert::Infallible;

use embedded_hal::digital::v2::{InputPin, OutputPin, StatefulOutputPin, ToggleableOutputPin};

use crate::gpio::{PinLevel, PinRegisters, PortId, RegisterInterface};
use crate::port::PinConfig;

/// Data bit of a single pin
pub struct DioChannel<'r> {
    port: PortId,
    regs: PinRegisters<'r>,
}

impl<'r> DioChannel<'r> {
    /// Returns [`None`] if `pin` is not a pin of the port
    pub fn new<R: RegisterInterface>(regs: &'r R, port: PortId, pin: u8) -> Option<Self> {
        let regs = PinRegisters::new(regs.port_reg(port), pin)?;
        Some(DioChannel { port, regs })
    }

    /// Channel of the pin named by a configuration entry
    pub fn from_config<R: RegisterInterface>(regs: &'r R, config: &PinConfig) -> Option<Self> {
        Self::new(regs, config.port_id()?, config.pin)
    }

    #[inline]
    pub fn port(&self) -> PortId {
        self.port
    }

    #[inline]
    pub fn read_level(&self) -> PinLevel {
        self.regs.read_pin()
    }

    #[inline]
    pub fn write_level(&mut self, level: PinLevel) {
        self.regs.write_pin(level)
    }

    /// Invert the level and return the new one
    #[inline]
    pub fn flip_level(&mut self) -> PinLevel {
        self.regs.toggle()
    }
}

impl InputPin for DioChannel<'_> {
    type Error = Infallible;

    #[inline]
    fn is_high(&self) -> Result<bool, Infallible> {
        Ok(self.read_level().is_high())
    }

    #[inline]
    fn is_low(&self) -> Result<bool, Infallible> {
        Ok(!self.read_level().is_high())
    }
}

impl OutputPin for DioChannel<'_> {
    type Error = Infallible;

    #[inline]
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.write_level(PinLevel::Low);
        Ok(())
    }

    #[inline]
    fn set_high(&mut self) -> Result<(), Infallible> {
        self.write_level(PinLevel::High);
        Ok(())
    }
}

impl StatefulOutputPin for DioChannel<'_> {
    #[inline]
    fn is_set_high(&self) -> Result<bool, Infallible> {
        Ok(self.read_level().is_high())
    }

    #[inline]
    fn is_set_low(&self) -> Result<bool, Infallible> {
        Ok(!self.read_level().is_high())
    }
}

impl ToggleableOutputPin for DioChannel<'_> {
    type Error = Infallible;

    #[inline]
    fn toggle(&mut self) -> Result<(), Infallible> {
        self.flip_level();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gpio::RegisterImage;

    #[test]
    fn channel_only_touches_its_bit() {
        let image = RegisterImage::new();
        let mut pf3 = DioChannel::new(&image, PortId::F, 3).unwrap();
        let mut pf1 = DioChannel::new(&image, PortId::F, 1).unwrap();
        pf3.write_level(PinLevel::High);
        assert_eq!(pf1.read_level(), PinLevel::Low);
        assert_eq!(pf1.flip_level(), PinLevel::High);
        assert_eq!(image.port_reg(PortId::F).data.get(), 0b1010);
        pf3.set_low().unwrap();
        assert_eq!(image.port_reg(PortId::F).data.get(), 0b0010);
    }

    #[test]
    fn invalid_pins_have_no_channel() {
        let image = RegisterImage::new();
        assert!(DioChannel::new(&image, PortId::A, 8).is_none());
        assert!(DioChannel::from_config(&image, &PinConfig::new(7, 0)).is_none());
        let sw1 = DioChannel::from_config(&image, &PinConfig::new(5, 4)).unwrap();
        assert_eq!(sw1.port(), PortId::F);
    }

    #[test]
    fn embedded_hal_traits() {
        let image = RegisterImage::new();
        let mut pin = DioChannel::new(&image, PortId::B, 0).unwrap();
        assert!(pin.is_low().unwrap());
        pin.toggle().unwrap();
        assert!(pin.is_high().unwrap());
        assert!(pin.is_set_high().unwrap());
        assert!(!pin.is_set_low().unwrap());
    }
}
