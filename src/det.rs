//! # Development error reporting
//!
//! Every precondition failure of the Port driver is reported to an
//! [`ErrorReporter`] with the module ID, instance ID, service ID and error
//! code of the failing call. Reporting is fire-and-forget. The same failure is
//! also returned to the caller as a [`PortError`].
//!
//! Reporting can be compiled out by disabling the `dev-error-detect` feature.
use heapless::Deque;

//==================================================================================================
//  Error codes and service IDs
//==================================================================================================

/// Invalid Port Pin ID requested
pub const PORT_E_PARAM_PIN: u8 = 0x0A;
/// Port Pin not configured as changeable
pub const PORT_E_DIRECTION_UNCHANGEABLE: u8 = 0x0B;
/// `init` called with a missing or empty configuration
pub const PORT_E_PARAM_CONFIG: u8 = 0x0C;
/// `set_pin_mode_raw` called with an unknown mode
pub const PORT_E_PARAM_INVALID_MODE: u8 = 0x0D;
/// `set_pin_mode` called on a pin whose mode is not changeable
pub const PORT_E_MODE_UNCHANGEABLE: u8 = 0x0E;
/// API service called without module initialization
pub const PORT_E_UNINIT: u8 = 0x0F;
/// API service called with a missing output parameter
pub const PORT_E_PARAM_POINTER: u8 = 0x10;
/// Port clock did not become ready during `init`
pub const PORT_E_CLOCK_NOT_READY: u8 = 0x11;

/// Port driver errors
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PortError {
    ParamPin,
    DirectionUnchangeable,
    ParamConfig,
    ParamInvalidMode,
    ModeUnchangeable,
    Uninit,
    ParamPointer,
    ClockNotReady,
}

impl PortError {
    /// Error code passed to the [`ErrorReporter`]
    pub const fn error_id(self) -> u8 {
        match self {
            PortError::ParamPin => PORT_E_PARAM_PIN,
            PortError::DirectionUnchangeable => PORT_E_DIRECTION_UNCHANGEABLE,
            PortError::ParamConfig => PORT_E_PARAM_CONFIG,
            PortError::ParamInvalidMode => PORT_E_PARAM_INVALID_MODE,
            PortError::ModeUnchangeable => PORT_E_MODE_UNCHANGEABLE,
            PortError::Uninit => PORT_E_UNINIT,
            PortError::ParamPointer => PORT_E_PARAM_POINTER,
            PortError::ClockNotReady => PORT_E_CLOCK_NOT_READY,
        }
    }
}

/// Service IDs of the Port driver API
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ServiceId {
    Init = 0x00,
    SetPinDirection = 0x01,
    RefreshPortDirection = 0x02,
    GetVersionInfo = 0x03,
    SetPinMode = 0x04,
}

//==================================================================================================
//  Reporter trait and implementations
//==================================================================================================

/// Sink for development errors
pub trait ErrorReporter {
    fn report_error(&mut self, module_id: u16, instance_id: u8, api_id: u8, error_id: u8);
}

impl<T: ErrorReporter + ?Sized> ErrorReporter for &mut T {
    #[inline]
    fn report_error(&mut self, module_id: u16, instance_id: u8, api_id: u8, error_id: u8) {
        (**self).report_error(module_id, instance_id, api_id, error_id)
    }
}

/// Reporter which discards every report
#[derive(Debug, Default, Clone, Copy)]
pub struct NoReporter;

impl ErrorReporter for NoReporter {
    #[inline]
    fn report_error(&mut self, _module_id: u16, _instance_id: u8, _api_id: u8, _error_id: u8) {}
}

/// A single development error report
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReportedError {
    pub module_id: u16,
    pub instance_id: u8,
    pub api_id: u8,
    pub error_id: u8,
}

/// Reporter which records the last `N` reports
///
/// When full, the oldest report is dropped and counted in
/// [`ErrorLog::dropped`].
pub struct ErrorLog<const N: usize> {
    entries: Deque<ReportedError, N>,
    dropped: u32,
}

impl<const N: usize> ErrorLog<N> {
    pub const fn new() -> Self {
        ErrorLog {
            entries: Deque::new(),
            dropped: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reports in the order they were raised, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &ReportedError> {
        self.entries.iter()
    }

    /// The most recent report
    pub fn last(&self) -> Option<&ReportedError> {
        self.entries.back()
    }

    /// Whether a report with this service ID and error code was recorded
    pub fn contains(&self, api_id: u8, error_id: u8) -> bool {
        self.iter()
            .any(|e| e.api_id == api_id && e.error_id == error_id)
    }

    /// Number of reports lost because the log was full
    #[inline]
    pub fn dropped(&self) -> u32 {
        self.dropped
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.dropped = 0;
    }
}

impl<const N: usize> Default for ErrorLog<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> ErrorReporter for ErrorLog<N> {
    fn report_error(&mut self, module_id: u16, instance_id: u8, api_id: u8, error_id: u8) {
        let report = ReportedError {
            module_id,
            instance_id,
            api_id,
            error_id,
        };
        if self.entries.is_full() {
            self.entries.pop_front();
            self.dropped = self.dropped.saturating_add(1);
        }
        // Cannot fail, a slot was freed above
        self.entries.push_back(report).ok();
    }
}
