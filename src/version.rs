//! Module identification and version information
use crate::det::PortError;

/// Vendor ID of the Port module
pub const PORT_VENDOR_ID: u16 = 100;
/// Module ID of the Port module
pub const PORT_MODULE_ID: u16 = 124;
/// Instance ID of the Port module
pub const PORT_INSTANCE_ID: u8 = 0;

pub const PORT_SW_MAJOR_VERSION: u8 = 1;
pub const PORT_SW_MINOR_VERSION: u8 = 0;
pub const PORT_SW_PATCH_VERSION: u8 = 0;

/// AUTOSAR release the module follows, 4.0.3
pub const PORT_AR_RELEASE_MAJOR_VERSION: u8 = 4;
pub const PORT_AR_RELEASE_MINOR_VERSION: u8 = 0;
pub const PORT_AR_RELEASE_PATCH_VERSION: u8 = 3;

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VersionInfo {
    pub vendor_id: u16,
    pub module_id: u16,
    pub sw_major_version: u8,
    pub sw_minor_version: u8,
    pub sw_patch_version: u8,
}

/// Version information of the Port module
pub const fn version_info() -> VersionInfo {
    VersionInfo {
        vendor_id: PORT_VENDOR_ID,
        module_id: PORT_MODULE_ID,
        sw_major_version: PORT_SW_MAJOR_VERSION,
        sw_minor_version: PORT_SW_MINOR_VERSION,
        sw_patch_version: PORT_SW_PATCH_VERSION,
    }
}

/// Fill `versioninfo` with the module version
///
/// Returns [`PortError::ParamPointer`] if no destination is given. This is
/// the hardware independent part of
/// [`PortDriver::get_version_info`](crate::port::PortDriver::get_version_info).
pub fn write_version_info(versioninfo: Option<&mut VersionInfo>) -> Result<(), PortError> {
    let out = versioninfo.ok_or(PortError::ParamPointer)?;
    *out = version_info();
    Ok(())
}
