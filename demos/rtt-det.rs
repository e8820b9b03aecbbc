//! Print development error reports over RTT
//!
//! Calls a few services with bad arguments and prints what the error log
//! recorded.
#![no_main]
#![no_std]

use cortex_m_rt::entry;
use panic_rtt_target as _;
use rtt_target::{rprintln, rtt_init_print};
use tm4c123_port::{
    det::ErrorLog,
    gpio::{Direction, PinMode, Tm4c123},
    pac,
    port::{
        cfg::{PORT_CONFIGURATION, PORT_CONF_LED1_PIN_ID},
        PortDriver,
    },
    version::VersionInfo,
};

#[entry]
fn main() -> ! {
    rtt_init_print!();
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
    let mut port = PortDriver::new(&regs, ErrorLog::<8>::new());

    // Nothing is configured yet
    let _ = port.set_pin_direction(PORT_CONF_LED1_PIN_ID, Direction::Output);
    port.init(Some(&PORT_CONFIGURATION)).unwrap();
    let _ = port.set_pin_mode(7, PinMode::Dio);
    let _ = port.set_pin_mode_raw(PORT_CONF_LED1_PIN_ID, 42);
    let _ = port.get_version_info(None);

    let mut info = VersionInfo::default();
    port.get_version_info(Some(&mut info)).unwrap();
    rprintln!("{:?}", info);
    for report in port.reporter().iter() {
        rprintln!(
            "module {} instance {} service {:#x} error {:#x}",
            report.module_id,
            report.instance_id,
            report.api_id,
            report.error_id
        );
    }
    loop {
        cortex_m::asm::wfi();
    }
}
