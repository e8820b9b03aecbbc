//! LED driver on top of any `embedded-hal` stateful output pin
use embedded_hal::digital::v2::{OutputPin, StatefulOutputPin};

use crate::gpio::PinLevel;

pub struct Led<P> {
    pin: P,
    /// Level which switches the LED on
    on_level: PinLevel,
}

impl<P> Led<P>
where
    P: StatefulOutputPin,
{
    /// LED lit by driving the pin high
    pub fn new(pin: P) -> Self {
        Led {
            pin,
            on_level: PinLevel::High,
        }
    }

    /// LED lit by driving the pin low
    pub fn active_low(pin: P) -> Self {
        Led {
            pin,
            on_level: PinLevel::Low,
        }
    }

    pub fn set_on(&mut self) -> Result<(), <P as OutputPin>::Error> {
        self.drive(self.on_level)
    }

    pub fn set_off(&mut self) -> Result<(), <P as OutputPin>::Error> {
        self.drive(self.on_level.toggled())
    }

    /// Write the currently driven level again
    pub fn refresh_output(&mut self) -> Result<(), <P as OutputPin>::Error> {
        let level = PinLevel::from(self.pin.is_set_high()?);
        self.drive(level)
    }

    pub fn toggle(&mut self) -> Result<(), <P as OutputPin>::Error> {
        let level = PinLevel::from(self.pin.is_set_high()?);
        self.drive(level.toggled())
    }

    pub fn is_on(&self) -> Result<bool, <P as OutputPin>::Error> {
        Ok(PinLevel::from(self.pin.is_set_high()?) == self.on_level)
    }

    pub fn release(self) -> P {
        self.pin
    }

    fn drive(&mut self, level: PinLevel) -> Result<(), <P as OutputPin>::Error> {
        match level {
            PinLevel::High => self.pin.set_high(),
            PinLevel::Low => self.pin.set_low(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dio::DioChannel;
    use crate::gpio::{PortId, RegisterImage, RegisterInterface};

    #[test]
    fn active_high_led() {
        let image = RegisterImage::new();
        let mut led = Led::new(DioChannel::new(&image, PortId::F, 1).unwrap());
        led.set_on().unwrap();
        assert!(led.is_on().unwrap());
        assert_eq!(image.port_reg(PortId::F).data.get(), 1 << 1);
        led.toggle().unwrap();
        assert!(!led.is_on().unwrap());
        assert_eq!(image.port_reg(PortId::F).data.get(), 0);
    }

    #[test]
    fn active_low_led() {
        let image = RegisterImage::new();
        let mut led = Led::active_low(DioChannel::new(&image, PortId::B, 2).unwrap());
        led.set_off().unwrap();
        assert_eq!(image.port_reg(PortId::B).data.get(), 1 << 2);
        assert!(!led.is_on().unwrap());
        led.set_on().unwrap();
        assert_eq!(image.port_reg(PortId::B).data.get(), 0);
    }

    #[test]
    fn refresh_keeps_the_level() {
        let image = RegisterImage::new();
        let mut led = Led::new(DioChannel::new(&image, PortId::F, 2).unwrap());
        led.set_on().unwrap();
        led.refresh_output().unwrap();
        assert!(led.is_on().unwrap());
        let pin = led.release();
        assert_eq!(pin.read_level(), PinLevel::High);
    }
}
