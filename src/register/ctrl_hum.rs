//! ### CTRL_HUM - Humidity acquisition options (`0xF2`, 1 byte, R/W)
//!
//! | Bits | Field |
//! |---|---|
//! | 2..0 | `osrs_h` |
//! | 7..3 | reserved |
//!
//! Changes to this register only become effective after a write to
//! [`CtrlMeas`](crate::register::ctrl_meas::CtrlMeas).
//!
//! ### Default values
//! 0x00 (humidity skipped)
#![doc(alias = "CTRL_HUM")]
use crate::register::ctrl_meas::Oversampling;
use crate::register::{Readable, Reg, Writable};

/// Marker type for CTRL_HUM (0xF2) register
pub struct CtrlHum;
impl Reg for CtrlHum { const ADDR: u8 = 0xF2; }

/// The payload for the CTRL_HUM (0xF2) register.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CtrlHumFields {
    pub osrs_h: Oversampling,
}

impl Readable for CtrlHum {
    type Out = CtrlHumFields;

    fn decode(b: &[u8]) -> Self::Out {
        CtrlHumFields {
            osrs_h: Oversampling::from_field(b[0] & 0b111),
        }
    }
}

impl Writable for CtrlHum {
    type In = CtrlHumFields;

    fn encode(v: &Self::In, out: &mut [u8]) {
        let osrs_h: u8 = v.osrs_h.into();
        out[0] = osrs_h & 0b111;
    }
}
