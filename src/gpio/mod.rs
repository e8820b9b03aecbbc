//! # GPIO module
//!
//! Value-level pin definitions and the register layer used by the Port, DIO
//! and LED drivers.
//!
//! The TM4C123GH6PM has six GPIO ports, A to F, with up to eight pins each.
//! Every port is one register block ([`GpioRegisterBlock`]). Pins are
//! addressed by a [`PortId`] and a bit number `0..8`.
//!
//! Register access goes through the [`RegisterInterface`] trait. The real
//! memory-mapped blocks are provided by [`Tm4c123`]. The [`RegisterImage`]
//! type keeps the same register blocks in ordinary memory, which allows the
//! drivers to run on a host.
//!
//! ```
//! use tm4c123_port::gpio::{PortId, RegisterImage, RegisterInterface};
//!
//! let image = RegisterImage::new();
//! let port_f = image.port_reg(PortId::F);
//! assert_eq!(port_f.dir.get(), 0);
//! ```
pub mod pins;
pub use pins::*;

mod reg;
pub use reg::{GpioRegisterBlock, RegisterImage, RegisterInterface, SysctlRegisterBlock, Tm4c123};
pub(crate) use reg::{PinRegisters, RegExt};
