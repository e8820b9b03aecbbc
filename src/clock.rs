//! Run mode clock gating for the GPIO ports
use crate::gpio::{PortId, RegExt, SysctlRegisterBlock};

/// Default number of `PRGPIO` polls before a port clock is considered stuck
pub const CLOCK_READY_POLL_LIMIT: u32 = 10_000;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockError {
    /// `PRGPIO` did not report the port ready within the poll limit
    NotReady(PortId),
}

pub fn enable_port_clock(sysctl: &SysctlRegisterBlock, port: PortId) {
    sysctl.rcgcgpio.set_mask(port.clock_mask());
}

#[inline]
pub fn is_port_ready(sysctl: &SysctlRegisterBlock, port: PortId) -> bool {
    sysctl.prgpio.get() & port.clock_mask() != 0
}

/// Busy-wait until the port reports ready, giving up after `poll_limit`
/// polls
pub fn wait_port_ready(
    sysctl: &SysctlRegisterBlock,
    port: PortId,
    poll_limit: u32,
) -> Result<(), ClockError> {
    let mut polls = 0;
    while !is_port_ready(sysctl, port) {
        if polls >= poll_limit {
            return Err(ClockError::NotReady(port));
        }
        polls += 1;
        core::hint::spin_loop();
    }
    Ok(())
}

/// Enable the clock of `port` and wait until the port registers can be
/// accessed
pub fn enable_and_wait(
    sysctl: &SysctlRegisterBlock,
    port: PortId,
    poll_limit: u32,
) -> Result<(), ClockError> {
    enable_port_clock(sysctl, port);
    wait_port_ready(sysctl, port, poll_limit)
}
