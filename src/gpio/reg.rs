use super::pins::{
    Direction, PinLevel, PinMode, PortId, Resistor, GPIO_LOCK_KEY, PINS_PER_PORT, PORT_COUNT,
};
use crate::pac;
use core::mem::{offset_of, size_of};
use vcell::VolatileCell;

/// A single 32-bit memory-mapped register
pub type Reg = VolatileCell<u32>;

/// Read-modify-write helpers for [`Reg`]
pub(crate) trait RegExt {
    fn modify<F: FnOnce(u32) -> u32>(&self, f: F);

    #[inline]
    fn set_mask(&self, mask: u32) {
        self.modify(|r| r | mask)
    }

    #[inline]
    fn clear_mask(&self, mask: u32) {
        self.modify(|r| r & !mask)
    }

    #[inline]
    fn write_mask(&self, mask: u32, set: bool) {
        if set {
            self.set_mask(mask)
        } else {
            self.clear_mask(mask)
        }
    }
}

impl RegExt for Reg {
    #[inline]
    fn modify<F: FnOnce(u32) -> u32>(&self, f: F) {
        self.set(f(self.get()))
    }
}

//==================================================================================================
//  Register blocks
//==================================================================================================

/// GPIO port register block
///
/// Only the registers used by the drivers are named, the interrupt, drive
/// strength and slew rate registers are kept as reserved space.
#[repr(C)]
pub struct GpioRegisterBlock {
    _reserved0: [u8; 0x3FC],
    /// `GPIODATA` accessed through offset 0x3FC, so all eight bits are
    /// unmasked
    pub data: Reg,
    /// `GPIODIR`, 1 for output
    pub dir: Reg,
    _reserved1: [u8; 0x1C],
    /// `GPIOAFSEL`, 1 selects the alternate function
    pub afsel: Reg,
    _reserved2: [u8; 0xEC],
    /// `GPIOPUR`
    pub pur: Reg,
    /// `GPIOPDR`
    pub pdr: Reg,
    _reserved3: [u8; 0x04],
    /// `GPIODEN`
    pub den: Reg,
    /// `GPIOLOCK`, reads 1 while `GPIOCR` is locked
    pub lock: Reg,
    /// `GPIOCR`
    pub cr: Reg,
    /// `GPIOAMSEL`
    pub amsel: Reg,
    /// `GPIOPCTL`, four bits per pin
    pub pctl: Reg,
}

const _: () = {
    assert!(offset_of!(GpioRegisterBlock, data) == 0x3FC);
    assert!(offset_of!(GpioRegisterBlock, dir) == 0x400);
    assert!(offset_of!(GpioRegisterBlock, afsel) == 0x420);
    assert!(offset_of!(GpioRegisterBlock, pur) == 0x510);
    assert!(offset_of!(GpioRegisterBlock, pdr) == 0x514);
    assert!(offset_of!(GpioRegisterBlock, den) == 0x51C);
    assert!(offset_of!(GpioRegisterBlock, lock) == 0x520);
    assert!(offset_of!(GpioRegisterBlock, cr) == 0x524);
    assert!(offset_of!(GpioRegisterBlock, amsel) == 0x528);
    assert!(offset_of!(GpioRegisterBlock, pctl) == 0x52C);
};

impl GpioRegisterBlock {
    /// Register block holding the documented reset values of `port`
    const fn at_reset(port: PortId) -> Self {
        // PC0..PC3 come out of reset routed to JTAG
        let (afsel, den, pctl) = match port {
            PortId::C => (0x0F, 0x0F, 0x0000_1111),
            _ => (0, 0, 0),
        };
        let cr = match port {
            PortId::D => 0x7F,
            PortId::F => 0xFE,
            _ => 0xFF,
        };
        GpioRegisterBlock {
            _reserved0: [0; 0x3FC],
            data: VolatileCell::new(0),
            dir: VolatileCell::new(0),
            _reserved1: [0; 0x1C],
            afsel: VolatileCell::new(afsel),
            _reserved2: [0; 0xEC],
            pur: VolatileCell::new(0),
            pdr: VolatileCell::new(0),
            _reserved3: [0; 0x04],
            den: VolatileCell::new(den),
            lock: VolatileCell::new(1),
            cr: VolatileCell::new(cr),
            amsel: VolatileCell::new(0),
            pctl: VolatileCell::new(pctl),
        }
    }
}

/// The part of the system control block used for GPIO clock gating
#[repr(C)]
pub struct SysctlRegisterBlock {
    _reserved0: [u8; 0x608],
    /// `RCGCGPIO`, run mode clock gating, one bit per port
    pub rcgcgpio: Reg,
    _reserved1: [u8; 0x3FC],
    /// `PRGPIO`, peripheral ready, one bit per port
    pub prgpio: Reg,
}

const _: () = {
    assert!(offset_of!(SysctlRegisterBlock, rcgcgpio) == 0x608);
    assert!(offset_of!(SysctlRegisterBlock, prgpio) == 0xA08);
};

impl SysctlRegisterBlock {
    const fn with_ready(prgpio: u32) -> Self {
        SysctlRegisterBlock {
            _reserved0: [0; 0x608],
            rcgcgpio: VolatileCell::new(0),
            _reserved1: [0; 0x3FC],
            prgpio: VolatileCell::new(prgpio),
        }
    }
}

//==================================================================================================
// Register Interface
//==================================================================================================

/// Provide the register blocks used by the drivers
///
/// The drivers only hold shared references to the register blocks. Exclusive
/// use of a pin is guaranteed by the drivers themselves: the Port driver is
/// the only writer of the configuration registers, and a DIO channel only
/// touches the data bit of its own pin.
pub trait RegisterInterface {
    /// Register block of a GPIO port
    fn port_reg(&self, port: PortId) -> &GpioRegisterBlock;

    /// System control registers for clock gating
    fn sysctl_reg(&self) -> &SysctlRegisterBlock;
}

impl<T: RegisterInterface + ?Sized> RegisterInterface for &T {
    #[inline]
    fn port_reg(&self, port: PortId) -> &GpioRegisterBlock {
        (**self).port_reg(port)
    }

    #[inline]
    fn sysctl_reg(&self) -> &SysctlRegisterBlock {
        (**self).sysctl_reg()
    }
}

// The device blocks of the PAC are viewed through the layouts above
const _: () = {
    assert!(size_of::<GpioRegisterBlock>() <= size_of::<pac::gpio_porta::RegisterBlock>());
    assert!(size_of::<SysctlRegisterBlock>() <= size_of::<pac::sysctl::RegisterBlock>());
};

/// The GPIO and system control peripherals of the TM4C123GH6PM
///
/// Owns the PAC singletons of the system control block and of the six GPIO
/// ports on the APB aperture, so only one instance can exist once the
/// peripherals were obtained from [`pac::Peripherals::take`].
pub struct Tm4c123 {
    sysctl: pac::SYSCTL,
    porta: pac::GPIO_PORTA,
    portb: pac::GPIO_PORTB,
    portc: pac::GPIO_PORTC,
    portd: pac::GPIO_PORTD,
    porte: pac::GPIO_PORTE,
    portf: pac::GPIO_PORTF,
}

impl Tm4c123 {
    pub fn new(
        sysctl: pac::SYSCTL,
        porta: pac::GPIO_PORTA,
        portb: pac::GPIO_PORTB,
        portc: pac::GPIO_PORTC,
        portd: pac::GPIO_PORTD,
        porte: pac::GPIO_PORTE,
        portf: pac::GPIO_PORTF,
    ) -> Self {
        Tm4c123 {
            sysctl,
            porta,
            portb,
            portc,
            portd,
            porte,
            portf,
        }
    }

    /// Build the register interface from stolen PAC singletons
    ///
    /// # Safety
    ///
    /// See [`pac::Peripherals::steal`]. The caller must make sure no two
    /// drivers program the same registers concurrently.
    #[inline]
    pub unsafe fn steal() -> Self {
        let dp = pac::Peripherals::steal();
        Self::new(
            dp.SYSCTL,
            dp.GPIO_PORTA,
            dp.GPIO_PORTB,
            dp.GPIO_PORTC,
            dp.GPIO_PORTD,
            dp.GPIO_PORTE,
            dp.GPIO_PORTF,
        )
    }

    /// Give the PAC singletons back
    #[allow(clippy::type_complexity)]
    pub fn release(
        self,
    ) -> (
        pac::SYSCTL,
        pac::GPIO_PORTA,
        pac::GPIO_PORTB,
        pac::GPIO_PORTC,
        pac::GPIO_PORTD,
        pac::GPIO_PORTE,
        pac::GPIO_PORTF,
    ) {
        (
            self.sysctl,
            self.porta,
            self.portb,
            self.portc,
            self.portd,
            self.porte,
            self.portf,
        )
    }
}

impl RegisterInterface for Tm4c123 {
    #[inline]
    fn port_reg(&self, port: PortId) -> &GpioRegisterBlock {
        let ptr = match port {
            PortId::A => pac::GPIO_PORTA::ptr() as *const GpioRegisterBlock,
            PortId::B => pac::GPIO_PORTB::ptr() as *const GpioRegisterBlock,
            PortId::C => pac::GPIO_PORTC::ptr() as *const GpioRegisterBlock,
            PortId::D => pac::GPIO_PORTD::ptr() as *const GpioRegisterBlock,
            PortId::E => pac::GPIO_PORTE::ptr() as *const GpioRegisterBlock,
            PortId::F => pac::GPIO_PORTF::ptr() as *const GpioRegisterBlock,
        };
        // Safety: the PAC pointer is the register block of this port, valid
        // for the lifetime of the program, and the layout was checked above
        unsafe { &*ptr }
    }

    #[inline]
    fn sysctl_reg(&self) -> &SysctlRegisterBlock {
        unsafe { &*(pac::SYSCTL::ptr() as *const SysctlRegisterBlock) }
    }
}

/// GPIO and system control register blocks held in ordinary memory
///
/// The blocks start with the reset values of the device: all ports unlocked
/// except PD7 and PF0 in `GPIOCR`, PC0..PC3 routed to JTAG, and every port
/// reported ready in `PRGPIO`. Plain memory does not react to clock gating,
/// so [`RegisterImage::with_ready_ports`] can be used to model a port whose
/// clock never becomes ready.
pub struct RegisterImage {
    ports: [GpioRegisterBlock; PORT_COUNT],
    sysctl: SysctlRegisterBlock,
}

impl RegisterImage {
    pub const fn new() -> Self {
        Self::with_ready_ports(0x3F)
    }

    /// Image whose `PRGPIO` register reports only the ports in `mask` ready
    pub const fn with_ready_ports(mask: u8) -> Self {
        RegisterImage {
            ports: [
                GpioRegisterBlock::at_reset(PortId::A),
                GpioRegisterBlock::at_reset(PortId::B),
                GpioRegisterBlock::at_reset(PortId::C),
                GpioRegisterBlock::at_reset(PortId::D),
                GpioRegisterBlock::at_reset(PortId::E),
                GpioRegisterBlock::at_reset(PortId::F),
            ],
            sysctl: SysctlRegisterBlock::with_ready(mask as u32),
        }
    }
}

impl Default for RegisterImage {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterInterface for RegisterImage {
    #[inline]
    fn port_reg(&self, port: PortId) -> &GpioRegisterBlock {
        &self.ports[port as usize]
    }

    #[inline]
    fn sysctl_reg(&self) -> &SysctlRegisterBlock {
        &self.sysctl
    }
}

//==================================================================================================
//  ModeFields
//==================================================================================================

/// Collect all fields needed to set the [`PinMode`]
struct ModeFields {
    afsel: bool,
    amsel: bool,
    den: bool,
    /// Port mux control nibble
    pmc: u8,
}

impl From<PinMode> for ModeFields {
    #[inline]
    fn from(mode: PinMode) -> Self {
        match mode {
            PinMode::Dio => ModeFields {
                afsel: false,
                amsel: false,
                den: true,
                pmc: 0,
            },
            PinMode::Analog => ModeFields {
                afsel: false,
                amsel: true,
                den: false,
                pmc: 0,
            },
            PinMode::Alternate(alt) => ModeFields {
                afsel: true,
                amsel: false,
                den: true,
                pmc: alt.pmc(),
            },
        }
    }
}

//==================================================================================================
//  PinRegisters
//==================================================================================================

/// Register access for a single pin of a port
///
/// Every function only modifies the bits belonging to this pin.
pub(crate) struct PinRegisters<'a> {
    port: &'a GpioRegisterBlock,
    num: u8,
}

impl<'a> PinRegisters<'a> {
    /// Returns [`None`] if `num` is not a pin of the port
    #[inline]
    pub(crate) fn new(port: &'a GpioRegisterBlock, num: u8) -> Option<Self> {
        if num < PINS_PER_PORT {
            Some(PinRegisters { port, num })
        } else {
            None
        }
    }

    #[inline]
    fn mask_32(&self) -> u32 {
        1 << self.num
    }

    /// Change the pin function
    pub(crate) fn change_mode(&mut self, mode: PinMode) {
        let ModeFields {
            afsel,
            amsel,
            den,
            pmc,
        } = mode.into();
        let (port, mask) = (self.port, self.mask_32());
        let shift = u32::from(self.num) * 4;
        // Disable the function being left before enabling the new one
        if amsel {
            port.den.clear_mask(mask);
        } else {
            port.amsel.clear_mask(mask);
        }
        port.afsel.write_mask(mask, afsel);
        port.pctl
            .modify(|r| (r & !(0xF << shift)) | (u32::from(pmc) << shift));
        if amsel {
            port.amsel.set_mask(mask);
        }
        if den {
            port.den.set_mask(mask);
        }
    }

    /// Set the direction of a pin
    #[inline]
    pub(crate) fn set_dir(&mut self, direction: Direction) {
        self.port
            .dir
            .write_mask(self.mask_32(), direction == Direction::Output);
    }

    #[inline]
    pub(crate) fn direction(&self) -> Direction {
        if self.port.dir.get() & self.mask_32() != 0 {
            Direction::Output
        } else {
            Direction::Input
        }
    }

    /// Configure the internal resistor. The opposite resistor is always
    /// released, so reapplying a configuration is idempotent.
    pub(crate) fn set_resistor(&mut self, resistor: Resistor) {
        let mask = self.mask_32();
        match resistor {
            Resistor::Off => {
                self.port.pur.clear_mask(mask);
                self.port.pdr.clear_mask(mask);
            }
            Resistor::PullUp => {
                self.port.pdr.clear_mask(mask);
                self.port.pur.set_mask(mask);
            }
            Resistor::PullDown => {
                self.port.pur.clear_mask(mask);
                self.port.pdr.set_mask(mask);
            }
        }
    }

    /// Unlock the commit register and allow changes to this pin
    pub(crate) fn unlock(&mut self) {
        self.port.lock.set(GPIO_LOCK_KEY);
        self.port.cr.set_mask(self.mask_32());
    }

    /// Read the logic level in the data register
    #[inline]
    pub(crate) fn read_pin(&self) -> PinLevel {
        PinLevel::from(self.port.data.get() & self.mask_32() != 0)
    }

    /// Write the logic level of an output pin
    #[inline]
    pub(crate) fn write_pin(&mut self, level: PinLevel) {
        self.port.data.write_mask(self.mask_32(), level.is_high());
    }

    /// Toggle the logic level and return the new one
    #[inline]
    pub(crate) fn toggle(&mut self) -> PinLevel {
        let mask = self.mask_32();
        self.port.data.modify(|r| r ^ mask);
        self.read_pin()
    }
}
