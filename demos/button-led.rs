//! Light the red LED while SW1 is pressed
//!
//! SW1 on PF4 pulls the pin low against the internal pull-up.
#![no_main]
#![no_std]

use cortex_m_rt::entry;
use panic_halt as _;
use tm4c123_port::{
    det::NoReporter,
    dio::DioChannel,
    gpio::Tm4c123,
    pac,
    led::Led,
    port::{
        cfg::{PORT_CONFIGURATION, PORT_CONF_LED1_PIN_ID, PORT_CONF_SW1_PIN_ID},
        PortDriver,
    },
    prelude::*,
};

#[entry]
fn main() -> ! {
    let dp = pac::Peripherals::take().unwrap();
    let regs = Tm4c123::new(
        dp.SYSCTL,
        dp.GPIO_PORTA,
        dp.GPIO_PORTB,
        dp.GPIO_PORTC,
        dp.GPIO_PORTD,
        dp.GPIO_PORTE,
        dp.GPIO_PORTF,
    );
    let mut port = PortDriver::new(&regs, NoReporter);
    port.init(Some(&PORT_CONFIGURATION)).unwrap();
    let config = port.config().unwrap();

    let led1 = config.get(PORT_CONF_LED1_PIN_ID as usize).unwrap();
    let sw1 = config.get(PORT_CONF_SW1_PIN_ID as usize).unwrap();
    let mut led = Led::new(DioChannel::from_config(&regs, led1).unwrap());
    let button = DioChannel::from_config(&regs, sw1).unwrap();
    loop {
        if button.is_low().unwrap_or(false) {
            led.set_on().ok();
        } else {
            led.set_off().ok();
        }
        cortex_m::asm::delay(100_000);
    }
}
