//! Port, DIO and LED drivers for the TI TM4C123GH6PM
//!
//! The [`port::PortDriver`] programs direction, function, internal resistors
//! and initial level of every pin listed in a static configuration table, and
//! afterwards changes direction and mode of the pins that allow it. The
//! [`dio`] and [`led`] modules sit on top of a configured pin.
//!
//! All register access goes through [`gpio::RegisterInterface`]. On the
//! device use [`gpio::Tm4c123`], built from the [`pac`] singletons; on a host [`gpio::RegisterImage`] holds the
//! registers in memory.
#![cfg_attr(not(test), no_std)]

pub use tm4c123x;
pub use tm4c123x as pac;

pub mod clock;
pub mod det;
pub mod dio;
pub mod gpio;
pub mod led;
pub mod port;
pub mod prelude;
pub mod version;
