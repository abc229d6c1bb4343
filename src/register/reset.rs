//! ### RESET - Soft reset register (`0xE0`, 1 byte, Write-only)
//!
//! Writing the soft reset word resets the device using the complete power-on-reset procedure.
//! All user configuration is lost and the factory calibration is copied from NVM again,
//! which is tracked by `STATUS.im_update`.
//!
//! See also: [`Bme280::soft_reset()`](crate::Bme280::soft_reset)
#![doc(alias = "RESET")]
use crate::register::{Reg, Writable};

/// Marker type for RESET (0xE0) register
pub struct Reset;
impl Reg for Reset { const ADDR:u8 = 0xE0; }

/// The payload for the RESET (0xE0) register.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ResetCommand {
    /// Triggers a power-on reset. Any other value written to the register has no effect.
    SoftReset
}

impl From<ResetCommand> for u8 {
    fn from(command: ResetCommand) -> u8 {
        match command {
            ResetCommand::SoftReset => 0xB6,
        }
    }
}

impl Writable for Reset {
    type In = ResetCommand;
    fn encode(v: &Self::In, out: &mut [u8]) {
        out[0] = (*v).into();
    }
}
