//! Board level scenarios for the Port driver, run against a register image
#![cfg(all(feature = "dev-error-detect", feature = "set-pin-direction-api"))]

use embedded_hal::digital::v2::InputPin;
use proptest::prelude::*;
use tm4c123_port::det::{
    ErrorLog, PortError, ServiceId, PORT_E_CLOCK_NOT_READY, PORT_E_DIRECTION_UNCHANGEABLE,
    PORT_E_MODE_UNCHANGEABLE, PORT_E_PARAM_PIN, PORT_E_UNINIT,
};
use tm4c123_port::dio::DioChannel;
use tm4c123_port::gpio::{
    AltFunction, Direction, PinLevel, PinMode, PortId, RegisterImage, RegisterInterface, Resistor,
    GPIO_LOCK_KEY,
};
use tm4c123_port::led::Led;
use tm4c123_port::port::cfg::{PORT_CONFIGURATION, PORT_CONF_LED1_PIN_ID, PORT_CONF_SW1_PIN_ID};
use tm4c123_port::port::{PinConfig, PortConfig, PortDriver};
use tm4c123_port::version::{PORT_INSTANCE_ID, PORT_MODULE_ID};

fn bit(reg: u32, n: u8) -> bool {
    reg & (1 << n) != 0
}

#[test]
fn launchpad_configuration() {
    let image = RegisterImage::new();
    let mut port = PortDriver::new(&image, ErrorLog::<8>::new());
    assert_eq!(port.init(Some(&PORT_CONFIGURATION)), Ok(()));

    let f = image.port_reg(PortId::F);
    // LED1 on PF1
    assert!(bit(f.dir.get(), 1));
    assert!(bit(f.data.get(), 1));
    assert!(bit(f.den.get(), 1));
    assert!(!bit(f.afsel.get(), 1));
    assert!(!bit(f.amsel.get(), 1));
    // SW1 on PF4
    assert!(!bit(f.dir.get(), 4));
    assert!(bit(f.pur.get(), 4));
    assert!(!bit(f.pdr.get(), 4));
    assert!(bit(f.den.get(), 4));
    assert_eq!(f.pctl.get(), 0);

    assert!(bit(image.sysctl_reg().rcgcgpio.get(), 5));
    assert!(port.reporter().is_empty());
}

#[test]
fn led_and_switch_on_configured_pins() {
    let image = RegisterImage::new();
    let mut port = PortDriver::new(&image, ErrorLog::<8>::new());
    port.init(Some(&PORT_CONFIGURATION)).unwrap();
    let config = port.config().unwrap();

    let led_pin = config.get(PORT_CONF_LED1_PIN_ID as usize).unwrap();
    let mut led = Led::new(DioChannel::from_config(&image, led_pin).unwrap());
    assert!(led.is_on().unwrap());
    led.toggle().unwrap();
    assert!(!bit(image.port_reg(PortId::F).data.get(), 1));

    let sw_pin = config.get(PORT_CONF_SW1_PIN_ID as usize).unwrap();
    let sw1 = DioChannel::from_config(&image, sw_pin).unwrap();
    // Model the pull-up holding the released switch high
    image.port_reg(PortId::F).data.set(1 << 4);
    assert!(sw1.is_high().unwrap());
}

#[test]
fn jtag_pins_are_never_reprogrammed() {
    let image = RegisterImage::new();
    let table = PortConfig::new([
        PinConfig::new(2, 0)
            .with_direction(Direction::Output)
            .with_resistor(Resistor::PullUp)
            .direction_changeable(true)
            .mode_changeable(true),
        PinConfig::new(2, 3).with_mode(PinMode::Analog),
        PinConfig::new(2, 5).with_direction(Direction::Output),
    ]);
    let c = image.port_reg(PortId::C);
    let mut port = PortDriver::new(&image, ErrorLog::<8>::new());
    port.init(Some(&table)).unwrap();
    assert_eq!(c.afsel.get(), 0x0F);
    assert_eq!(c.den.get(), 0x0F | 1 << 5);
    assert_eq!(c.pctl.get(), 0x1111);
    assert_eq!(c.amsel.get(), 0);
    assert_eq!(c.pur.get(), 0);
    assert_eq!(c.dir.get(), 1 << 5);

    assert_eq!(port.set_pin_direction(0, Direction::Output), Ok(()));
    assert_eq!(port.set_pin_mode(0, PinMode::Dio), Ok(()));
    assert_eq!(c.dir.get(), 1 << 5);
    assert_eq!(c.afsel.get(), 0x0F);
    assert!(port.reporter().is_empty());
}

#[test]
fn commit_protected_pins_are_unlocked() {
    let image = RegisterImage::new();
    let table = PortConfig::new([
        PinConfig::new(3, 7).with_direction(Direction::Output),
        PinConfig::new(5, 0).with_resistor(Resistor::PullUp),
    ]);
    let mut port = PortDriver::new(&image, ErrorLog::<8>::new());
    port.init(Some(&table)).unwrap();

    let d = image.port_reg(PortId::D);
    assert_eq!(d.lock.get(), GPIO_LOCK_KEY);
    assert_eq!(d.cr.get(), 0xFF);
    assert!(bit(d.dir.get(), 7));

    let f = image.port_reg(PortId::F);
    assert_eq!(f.lock.get(), GPIO_LOCK_KEY);
    assert_eq!(f.cr.get(), 0xFF);
    assert!(bit(f.pur.get(), 0));

    // Other ports keep the lock at its reset value
    assert_eq!(image.port_reg(PortId::A).lock.get(), 1);
}

#[test]
fn unchangeable_pins_keep_their_setup() {
    let image = RegisterImage::new();
    let table = PortConfig::new([PinConfig::new(1, 4).with_direction(Direction::Output)]);
    let mut port = PortDriver::new(&image, ErrorLog::<8>::new());
    port.init(Some(&table)).unwrap();

    assert_eq!(
        port.set_pin_direction(0, Direction::Input),
        Err(PortError::DirectionUnchangeable)
    );
    assert_eq!(
        port.set_pin_mode(0, PinMode::Alternate(AltFunction::Alt3)),
        Err(PortError::ModeUnchangeable)
    );
    let b = image.port_reg(PortId::B);
    assert!(bit(b.dir.get(), 4));
    assert!(!bit(b.afsel.get(), 4));

    let log = port.reporter();
    assert!(log.contains(ServiceId::SetPinDirection as u8, PORT_E_DIRECTION_UNCHANGEABLE));
    assert!(log.contains(ServiceId::SetPinMode as u8, PORT_E_MODE_UNCHANGEABLE));
    assert!(log
        .iter()
        .all(|e| e.module_id == PORT_MODULE_ID && e.instance_id == PORT_INSTANCE_ID));
}

#[test]
fn refresh_restores_configured_directions() {
    let image = RegisterImage::new();
    let mut port = PortDriver::new(&image, ErrorLog::<8>::new());
    port.init(Some(&PORT_CONFIGURATION)).unwrap();

    port.set_pin_direction(PORT_CONF_LED1_PIN_ID, Direction::Input)
        .unwrap();
    port.set_pin_direction(PORT_CONF_SW1_PIN_ID, Direction::Output)
        .unwrap();
    assert_eq!(port.pin_direction(PORT_CONF_LED1_PIN_ID), Some(Direction::Input));

    assert_eq!(port.refresh_port_direction(), Ok(()));
    assert_eq!(port.pin_direction(PORT_CONF_LED1_PIN_ID), Some(Direction::Output));
    assert_eq!(port.pin_direction(PORT_CONF_SW1_PIN_ID), Some(Direction::Input));
}

#[test]
fn refresh_skips_jtag_and_ignores_changeable_flag() {
    let image = RegisterImage::new();
    let table = PortConfig::new([
        PinConfig::new(2, 1).with_direction(Direction::Output),
        PinConfig::new(1, 3).with_direction(Direction::Output),
        PinConfig::new(1, 4).direction_changeable(true),
    ]);
    let mut port = PortDriver::new(&image, ErrorLog::<8>::new());
    port.init(Some(&table)).unwrap();
    let (b, c) = (image.port_reg(PortId::B), image.port_reg(PortId::C));
    // PC1 belongs to JTAG and was never made an output
    assert_eq!(c.dir.get(), 0);

    c.dir.set(0xA0);
    b.dir.set(1 << 4);
    assert_eq!(port.refresh_port_direction(), Ok(()));
    assert_eq!(c.dir.get(), 0xA0);
    assert_eq!(b.dir.get(), 1 << 3);
    assert!(port.reporter().is_empty());
}

#[test]
fn out_of_range_pin_after_init() {
    let image = RegisterImage::new();
    let mut port = PortDriver::new(&image, ErrorLog::<8>::new());
    port.init(Some(&PORT_CONFIGURATION)).unwrap();
    let dir = image.port_reg(PortId::F).dir.get();

    assert_eq!(
        port.set_pin_direction(2, Direction::Input),
        Err(PortError::ParamPin)
    );
    assert_eq!(image.port_reg(PortId::F).dir.get(), dir);
    let log = port.reporter();
    assert_eq!(log.len(), 1);
    assert!(log.contains(ServiceId::SetPinDirection as u8, PORT_E_PARAM_PIN));
}

#[test]
fn services_before_init_do_nothing() {
    let image = RegisterImage::new();
    let mut port: PortDriver<_, _, 2> = PortDriver::new(&image, ErrorLog::<8>::new());
    assert_eq!(
        port.set_pin_direction(0, Direction::Output),
        Err(PortError::Uninit)
    );
    assert_eq!(
        port.refresh_port_direction(),
        Err(PortError::Uninit)
    );
    assert_eq!(
        port.set_pin_mode(5, PinMode::Analog),
        Err(PortError::Uninit)
    );
    for id in PortId::ALL {
        let regs = image.port_reg(id);
        assert_eq!(regs.dir.get(), 0);
        assert_eq!(regs.amsel.get(), 0);
    }

    let log = port.reporter();
    assert!(log.contains(ServiceId::SetPinDirection as u8, PORT_E_UNINIT));
    assert!(log.contains(ServiceId::RefreshPortDirection as u8, PORT_E_UNINIT));
    assert!(log.contains(ServiceId::SetPinMode as u8, PORT_E_UNINIT));
    // Pin 5 is out of range on top of the missing init
    assert!(log.contains(ServiceId::SetPinMode as u8, PORT_E_PARAM_PIN));
    assert_eq!(log.len(), 4);
}

#[test]
fn clock_timeout_is_reported() {
    // Port F never reports ready
    let image = RegisterImage::with_ready_ports(0b01_1111);
    let mut port = PortDriver::new(&image, ErrorLog::<8>::new()).with_clock_poll_limit(8);
    assert_eq!(
        port.init(Some(&PORT_CONFIGURATION)),
        Err(PortError::ClockNotReady)
    );
    assert!(port.is_initialized());
    assert_eq!(image.port_reg(PortId::F).den.get(), 0);
    assert_eq!(port.reporter().len(), 2);
    assert!(port
        .reporter()
        .contains(ServiceId::Init as u8, PORT_E_CLOCK_NOT_READY));
}

#[test]
fn reinit_with_new_table() {
    let image = RegisterImage::new();
    let pulled = PortConfig::new([PinConfig::new(5, 4).with_resistor(Resistor::PullDown)]);
    let floating = PortConfig::new([PinConfig::new(5, 4)]);
    let mut port = PortDriver::new(&image, ErrorLog::<8>::new());
    port.init(Some(&pulled)).unwrap();
    assert!(bit(image.port_reg(PortId::F).pdr.get(), 4));
    port.init(Some(&floating)).unwrap();
    assert_eq!(image.port_reg(PortId::F).pdr.get(), 0);
    assert_eq!(image.port_reg(PortId::F).pur.get(), 0);
}

#[test]
fn initial_low_level_clears_data() {
    let image = RegisterImage::new();
    image.port_reg(PortId::A).data.set(0xFF);
    let table = PortConfig::new([PinConfig::new(0, 6)
        .with_direction(Direction::Output)
        .with_initial_level(PinLevel::Low)]);
    let mut port = PortDriver::new(&image, ErrorLog::<8>::new());
    port.init(Some(&table)).unwrap();
    assert_eq!(image.port_reg(PortId::A).data.get(), 0xBF);
}

fn mode_strategy() -> impl Strategy<Value = PinMode> {
    (0u8..=12).prop_map(|raw| PinMode::from_raw(raw).unwrap())
}

proptest! {
    #[test]
    fn mode_changes_touch_only_their_pin(pin in 0u8..8, mode in mode_strategy()) {
        prop_assume!(pin != 2);
        let image = RegisterImage::new();
        let table = PortConfig::new([
            PinConfig::new(1, pin).mode_changeable(true),
            PinConfig::new(1, 2).with_mode(PinMode::Alternate(AltFunction::Alt7)),
        ]);
        let mut port = PortDriver::new(&image, ErrorLog::<8>::new());
        port.init(Some(&table)).unwrap();
        prop_assert_eq!(port.set_pin_mode(0, mode), Ok(()));

        let b = image.port_reg(PortId::B);
        let nibble = (b.pctl.get() >> (u32::from(pin) * 4)) & 0xF;
        match mode {
            PinMode::Analog => {
                prop_assert!(bit(b.amsel.get(), pin));
                prop_assert!(!bit(b.den.get(), pin));
                prop_assert_eq!(nibble, 0);
            }
            PinMode::Dio => {
                prop_assert!(!bit(b.afsel.get(), pin));
                prop_assert!(bit(b.den.get(), pin));
                prop_assert_eq!(nibble, 0);
            }
            PinMode::Alternate(alt) => {
                prop_assert!(bit(b.afsel.get(), pin));
                prop_assert!(!bit(b.amsel.get(), pin));
                prop_assert_eq!(nibble, u32::from(alt.pmc()));
            }
        }
        // The neighbour keeps its alternate function
        prop_assert!(bit(b.afsel.get(), 2));
        prop_assert_eq!((b.pctl.get() >> 8) & 0xF, 7);
    }
}
