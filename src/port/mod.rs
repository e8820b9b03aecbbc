//! # Port driver
//!
//! The [`PortDriver`] programs every pin of a [`PortConfig`] table at
//! initialization and afterwards allows the direction and mode of pins which
//! are marked changeable in the table to be altered.
//!
//! Pins are addressed by their Port Pin ID, the index of the pin in the
//! table.
//!
//! ```
//! use tm4c123_port::det::ErrorLog;
//! use tm4c123_port::gpio::{PortId, RegisterImage, RegisterInterface};
//! use tm4c123_port::port::{cfg::PORT_CONFIGURATION, PortDriver};
//!
//! let image = RegisterImage::new();
//! let mut port = PortDriver::new(&image, ErrorLog::<4>::new());
//! port.init(Some(&PORT_CONFIGURATION)).unwrap();
//! // LED1 on PF1 is an output driven high
//! assert_eq!(image.port_reg(PortId::F).dir.get() & 0b10, 0b10);
//! assert_eq!(image.port_reg(PortId::F).data.get() & 0b10, 0b10);
//! ```
//!
//! Two groups of pins get special treatment regardless of their table entry:
//!
//! - PD7 and PF0 are commit-protected. They are unlocked before they are
//!   programmed.
//! - PC0 to PC3 carry the JTAG interface and are never reprogrammed. Entries
//!   for them are skipped silently.
//!
//! Precondition failures are reported to the [`ErrorReporter`] of the driver
//! when the `dev-error-detect` feature is enabled, and are always returned as
//! [`PortError`]. The affected call has no effect on the hardware.
pub mod cfg;
pub mod config;

pub use config::{PinConfig, PortConfig};

use crate::clock::{self, CLOCK_READY_POLL_LIMIT};
use crate::det::{ErrorReporter, PortError, ServiceId};
use crate::gpio::{Direction, PinMode, PinRegisters, PortId, RegisterInterface, Reservation};
use crate::version::{PORT_INSTANCE_ID, PORT_MODULE_ID};
#[cfg(feature = "version-info-api")]
use crate::version::{self, VersionInfo};

/// Port Pin ID, the index of a pin in the configuration table
pub type PinId = u8;

/// Port driver for a table of `N` pins
pub struct PortDriver<'c, R, E, const N: usize> {
    regs: R,
    det: E,
    /// Active configuration, set once the driver is initialized
    config: Option<&'c PortConfig<N>>,
    clock_poll_limit: u32,
}

impl<'c, R: RegisterInterface, E: ErrorReporter, const N: usize> PortDriver<'c, R, E, N> {
    /// Create an uninitialized driver
    pub fn new(regs: R, det: E) -> Self {
        PortDriver {
            regs,
            det,
            config: None,
            clock_poll_limit: CLOCK_READY_POLL_LIMIT,
        }
    }

    /// Number of `PRGPIO` polls to wait for a port clock during
    /// [`PortDriver::init`]
    pub fn with_clock_poll_limit(mut self, poll_limit: u32) -> Self {
        self.clock_poll_limit = poll_limit;
        self
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.config.is_some()
    }

    /// The active configuration table
    #[inline]
    pub fn config(&self) -> Option<&'c PortConfig<N>> {
        self.config
    }

    #[inline]
    pub fn reporter(&self) -> &E {
        &self.det
    }

    /// Direction currently programmed for a configured pin
    pub fn pin_direction(&self, pin: PinId) -> Option<Direction> {
        let channel = self.config?.get(usize::from(pin))?;
        self.resolve(channel).map(|(_, regs)| regs.direction())
    }

    /// Release the register interface and the reporter
    pub fn release(self) -> (R, E) {
        (self.regs, self.det)
    }

    //==============================================================================================
    //  API services
    //==============================================================================================

    /// Initialize the driver and program every pin of `config`
    ///
    /// Fails with [`PortError::ParamConfig`] for a missing or empty table. No
    /// register is written and the driver keeps its previous state: it stays
    /// uninitialized, or keeps the table of an earlier successful `init`.
    ///
    /// Entries naming an unknown port or pin are skipped. If the clock of a
    /// port does not become ready, that entry is skipped, the remaining
    /// entries are still programmed and [`PortError::ClockNotReady`] is
    /// returned.
    pub fn init(&mut self, config: Option<&'c PortConfig<N>>) -> Result<(), PortError> {
        let config = match config {
            Some(config) if !config.is_empty() => config,
            _ => {
                self.report(ServiceId::Init, PortError::ParamConfig);
                return Err(PortError::ParamConfig);
            }
        };
        self.config = Some(config);

        let mut result = Ok(());
        for channel in config.channels.iter() {
            if let Err(e) = self.setup_pin(channel) {
                self.report(ServiceId::Init, e);
                result = result.and(Err(e));
            }
        }
        #[cfg(feature = "defmt")]
        defmt::debug!("port: {=usize} pins configured", N);
        result
    }

    /// Set the direction of a pin whose direction is changeable
    ///
    /// A JTAG pin is left untouched without an error.
    #[cfg(feature = "set-pin-direction-api")]
    pub fn set_pin_direction(&mut self, pin: PinId, direction: Direction) -> Result<(), PortError> {
        let channel = self.check_changeable(
            ServiceId::SetPinDirection,
            pin,
            |c| c.direction_changeable,
            PortError::DirectionUnchangeable,
        )?;
        if let Some((port, mut regs)) = self.resolve(channel) {
            if !Reservation::of(port, channel.pin).is_jtag() {
                regs.set_dir(direction);
            }
        }
        Ok(())
    }

    /// Reapply the configured direction of every pin
    ///
    /// Pins are refreshed regardless of their changeable flag. JTAG pins are
    /// skipped.
    #[cfg(feature = "set-pin-direction-api")]
    pub fn refresh_port_direction(&mut self) -> Result<(), PortError> {
        let Some(config) = self.config else {
            self.report(ServiceId::RefreshPortDirection, PortError::Uninit);
            return Err(PortError::Uninit);
        };
        for channel in config.channels.iter() {
            if let Some((port, mut regs)) = self.resolve(channel) {
                if !Reservation::of(port, channel.pin).is_jtag() {
                    regs.set_dir(channel.direction);
                }
            }
        }
        Ok(())
    }

    /// Set the mode of a pin whose mode is changeable
    ///
    /// A JTAG pin is left untouched without an error.
    pub fn set_pin_mode(&mut self, pin: PinId, mode: PinMode) -> Result<(), PortError> {
        let channel = self.check_changeable(
            ServiceId::SetPinMode,
            pin,
            |c| c.mode_changeable,
            PortError::ModeUnchangeable,
        )?;
        if let Some((port, mut regs)) = self.resolve(channel) {
            if !Reservation::of(port, channel.pin).is_jtag() {
                regs.change_mode(mode);
            }
        }
        Ok(())
    }

    /// [`PortDriver::set_pin_mode`] with the numeric mode encoding of
    /// [`PinMode::raw`]
    ///
    /// An unknown mode value fails with [`PortError::ParamInvalidMode`].
    pub fn set_pin_mode_raw(&mut self, pin: PinId, mode: u8) -> Result<(), PortError> {
        match PinMode::from_raw(mode) {
            Ok(mode) => self.set_pin_mode(pin, mode),
            Err(_) => {
                let checked = self.check_changeable(
                    ServiceId::SetPinMode,
                    pin,
                    |c| c.mode_changeable,
                    PortError::ModeUnchangeable,
                );
                self.report(ServiceId::SetPinMode, PortError::ParamInvalidMode);
                checked.and(Err(PortError::ParamInvalidMode))
            }
        }
    }

    /// Fill `versioninfo` with the version of the module
    #[cfg(feature = "version-info-api")]
    pub fn get_version_info(&mut self, versioninfo: Option<&mut VersionInfo>) -> Result<(), PortError> {
        match version::write_version_info(versioninfo) {
            Ok(()) => Ok(()),
            Err(e) => {
                self.report(ServiceId::GetVersionInfo, e);
                Err(e)
            }
        }
    }

    //==============================================================================================
    //  Internals
    //==============================================================================================

    fn report(&mut self, service: ServiceId, error: PortError) {
        #[cfg(feature = "defmt")]
        defmt::warn!("port: {} failed: {}", service, error);
        if cfg!(feature = "dev-error-detect") {
            self.det.report_error(
                PORT_MODULE_ID,
                PORT_INSTANCE_ID,
                service as u8,
                error.error_id(),
            );
        }
    }

    /// Registers of a table entry, [`None`] for an unknown port or pin
    fn resolve(&self, channel: &PinConfig) -> Option<(PortId, PinRegisters<'_>)> {
        let port = channel.port_id()?;
        let regs = PinRegisters::new(self.regs.port_reg(port), channel.pin)?;
        Some((port, regs))
    }

    /// Program one table entry
    fn setup_pin(&mut self, channel: &PinConfig) -> Result<(), PortError> {
        let Some((port, mut regs)) = self.resolve(channel) else {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "port: skipping unknown pin {=u8} of port {=u8}",
                channel.pin,
                channel.port
            );
            return Ok(());
        };
        if clock::enable_and_wait(self.regs.sysctl_reg(), port, self.clock_poll_limit).is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("port: clock of port {} not ready", port);
            return Err(PortError::ClockNotReady);
        }

        match Reservation::of(port, channel.pin) {
            Reservation::CommitLocked => regs.unlock(),
            Reservation::Jtag => return Ok(()),
            Reservation::Free => (),
        }
        regs.change_mode(channel.initial_mode);
        regs.set_dir(channel.direction);
        regs.set_resistor(channel.resistor);
        regs.write_pin(channel.initial_level);
        Ok(())
    }

    /// Check the preconditions of the run-time services
    ///
    /// Every failing precondition is reported, the first one is returned.
    fn check_changeable(
        &mut self,
        service: ServiceId,
        pin: PinId,
        changeable: fn(&PinConfig) -> bool,
        unchangeable: PortError,
    ) -> Result<&'c PinConfig, PortError> {
        let mut failure = None;
        if self.config.is_none() {
            self.report(service, PortError::Uninit);
            failure = Some(PortError::Uninit);
        }
        if usize::from(pin) >= N {
            self.report(service, PortError::ParamPin);
            failure = failure.or(Some(PortError::ParamPin));
        }
        let channel = self.config.and_then(|config| config.get(usize::from(pin)));
        if let Some(channel) = channel {
            if !changeable(channel) {
                self.report(service, unchangeable);
                failure = failure.or(Some(unchangeable));
            }
        }
        match (failure, channel) {
            (None, Some(channel)) => Ok(channel),
            (Some(e), _) => Err(e),
            (None, None) => Err(PortError::ParamPin),
        }
    }
}
