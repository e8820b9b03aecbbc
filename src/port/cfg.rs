//! Compiled-in pin configuration of the board
//!
//! The table configures the red LED on PF1 and switch SW1 on PF4 of the
//! TM4C123G LaunchPad.
use super::config::{PinConfig, PortConfig};
use super::PinId;
use crate::gpio::{Direction, PinLevel, PortId, Resistor, PORT_PIN_MODE_DIO};
use crate::version;

pub const PORT_CFG_SW_MAJOR_VERSION: u8 = 1;
pub const PORT_CFG_SW_MINOR_VERSION: u8 = 0;
pub const PORT_CFG_SW_PATCH_VERSION: u8 = 0;

pub const PORT_CFG_AR_RELEASE_MAJOR_VERSION: u8 = 4;
pub const PORT_CFG_AR_RELEASE_MINOR_VERSION: u8 = 0;
pub const PORT_CFG_AR_RELEASE_PATCH_VERSION: u8 = 3;

const _: () = assert!(
    PORT_CFG_AR_RELEASE_MAJOR_VERSION == version::PORT_AR_RELEASE_MAJOR_VERSION
        && PORT_CFG_AR_RELEASE_MINOR_VERSION == version::PORT_AR_RELEASE_MINOR_VERSION
        && PORT_CFG_AR_RELEASE_PATCH_VERSION == version::PORT_AR_RELEASE_PATCH_VERSION,
    "The AR version of the port configuration does not match the driver"
);

const _: () = assert!(
    PORT_CFG_SW_MAJOR_VERSION == version::PORT_SW_MAJOR_VERSION
        && PORT_CFG_SW_MINOR_VERSION == version::PORT_SW_MINOR_VERSION
        && PORT_CFG_SW_PATCH_VERSION == version::PORT_SW_PATCH_VERSION,
    "The SW version of the port configuration does not match the driver"
);

/// Number of configured pins
pub const PORT_CONFIGURED_PINS: usize = 2;

pub const PORT_CONF_LED1_PORT_NUM: PortId = PortId::F;
pub const PORT_CONF_LED1_PIN_NUM: u8 = 1;
pub const PORT_CONF_SW1_PORT_NUM: PortId = PortId::F;
pub const PORT_CONF_SW1_PIN_NUM: u8 = 4;

/// Port Pin ID of LED1
pub const PORT_CONF_LED1_PIN_ID: PinId = 0;
/// Port Pin ID of SW1
pub const PORT_CONF_SW1_PIN_ID: PinId = 1;

pub const PORT_CONFIGURATION: PortConfig<PORT_CONFIGURED_PINS> = PortConfig::new([
    PinConfig::new(PORT_CONF_LED1_PORT_NUM.index(), PORT_CONF_LED1_PIN_NUM)
        .with_direction(Direction::Output)
        .with_resistor(Resistor::Off)
        .with_initial_level(PinLevel::High)
        .with_mode(PORT_PIN_MODE_DIO)
        .direction_changeable(true)
        .mode_changeable(true),
    PinConfig::new(PORT_CONF_SW1_PORT_NUM.index(), PORT_CONF_SW1_PIN_NUM)
        .with_direction(Direction::Input)
        .with_resistor(Resistor::PullUp)
        .with_initial_level(PinLevel::Low)
        .with_mode(PORT_PIN_MODE_DIO)
        .direction_changeable(true)
        .mode_changeable(true),
]);

const _: () = assert!(PORT_CONFIGURATION.has_unique_pins());
const _: () = assert!(PORT_CONFIGURATION.all_valid());
