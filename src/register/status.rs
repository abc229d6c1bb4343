use crate::register::{Readable, Reg};

/// Marker struct for the STATUS (0xF3) register
///
/// - **Length:** 1 byte
/// - **Access:** Read-only
///
/// Used with [`Bme280::read::<Status>()`](crate::Bme280::read) or the convenience method
/// [`Bme280::status`](crate::Bme280::status).
pub struct Status;

impl Reg for Status { const ADDR: u8 = 0xF3; }

#[derive(Copy, Clone, Debug)]
pub struct StatusFlags {
    pub(crate) measuring: bool,
    pub(crate) im_update: bool,
}

impl StatusFlags {
    pub fn new(measuring: bool, im_update: bool) -> Self {
        Self { measuring, im_update }
    }

    /// Is a conversion running?
    ///
    /// Cleared when the results have been transferred to the data registers.
    pub fn measuring(&self) -> bool { self.measuring }

    /// Is the NVM data being copied to the image registers?
    ///
    /// Set at power-on and after a soft reset, cleared once the copy is done.
    pub fn nvm_update_in_progress(&self) -> bool { self.im_update }
}

impl Readable for Status {
    type Out = StatusFlags;
    fn decode(b: &[u8]) -> Self::Out {
        StatusFlags {
            im_update: (b[0] & 0b0000_0001) != 0,
            measuring: (b[0] & 0b0000_1000) != 0,
        }
    }
}
