//! Blink the red LED of the TM4C123G LaunchPad
//!
//! PF1 is set up by the compiled-in port configuration as an output which
//! starts out high.
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
        cfg::{PORT_CONFIGURATION, PORT_CONF_LED1_PIN_ID},
        PortDriver,
    },
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

    let led1 = PORT_CONFIGURATION
        .get(PORT_CONF_LED1_PIN_ID as usize)
        .unwrap();
    let mut led = Led::new(DioChannel::from_config(&regs, led1).unwrap());
    for _ in 0..10 {
        led.set_off().ok();
        cortex_m::asm::delay(4_000_000);
        led.set_on().ok();
        cortex_m::asm::delay(4_000_000);
    }
    loop {
        led.toggle().ok();
        cortex_m::asm::delay(8_000_000);
    }
}
