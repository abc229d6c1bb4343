//! ### CTRL_MEAS - Pressure/temperature acquisition and power mode (`0xF4`, 1 byte, R/W)
//!
//! | Bits | Field |
//! |---|---|
//! | 1..0 | `mode` |
//! | 4..2 | `osrs_p` |
//! | 7..5 | `osrs_t` |
//!
//! Writing this register is also what latches a pending CTRL_HUM change.
//!
//! ### Default values
//! 0x00 (Sleep, pressure and temperature skipped)
#![doc(alias = "CTRL_MEAS")]
use crate::register::{Readable, Reg, UnexpectedValue, Writable};

/// Marker type for CTRL_MEAS (0xF4) register
pub struct CtrlMeas;
impl Reg for CtrlMeas { const ADDR:u8 = 0xF4; }

/// The payload for the CTRL_MEAS (0xF4) register.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CtrlMeasFields {
    pub mode: PowerMode,
    pub osrs_p: Oversampling,
    pub osrs_t: Oversampling,
}

impl Readable for CtrlMeas {
    type Out = CtrlMeasFields;

    fn decode(b: &[u8]) -> Self::Out {
        CtrlMeasFields {
            mode: PowerMode::from(b[0] & 0b11),
            osrs_p: Oversampling::from_field((b[0] >> 2) & 0b111),
            osrs_t: Oversampling::from_field((b[0] >> 5) & 0b111),
        }
    }
}

impl Writable for CtrlMeas {
    type In = CtrlMeasFields;

    fn encode(v: &Self::In, out: &mut [u8]) {
        let mode: u8 = v.mode.into();
        let osrs_p: u8 = v.osrs_p.into();
        let osrs_t: u8 = v.osrs_t.into();
        out[0] = (mode & 0b11) | (osrs_p & 0b111) << 2 | (osrs_t & 0b111) << 5;
    }
}

/// Oversampling applied to a single measurement channel.
///
/// Also used for humidity in [`CtrlHum`](crate::register::ctrl_hum::CtrlHum).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Oversampling {
    /// The measurement is skipped and its output is set to 0x80000 (0x8000 for humidity).
    Skipped,
    X1,
    X2,
    X4,
    X8,
    X16,
}

impl Oversampling {
    /// Number of ADC samples averaged per reported measurement.
    pub fn factor(&self) -> u32 {
        match self {
            Oversampling::Skipped => 0,
            Oversampling::X1 => 1,
            Oversampling::X2 => 2,
            Oversampling::X4 => 4,
            Oversampling::X8 => 8,
            Oversampling::X16 => 16,
        }
    }

    /// Field decode as the chip interprets it: codes above 0b101 also mean x16.
    pub(crate) fn from_field(field: u8) -> Self {
        Oversampling::try_from(field).unwrap_or(Oversampling::X16)
    }
}

impl TryFrom<u8> for Oversampling {
    type Error = UnexpectedValue;
    fn try_from(field: u8) -> Result<Self, Self::Error> {
        match field {
            0b000 => Ok(Oversampling::Skipped),
            0b001 => Ok(Oversampling::X1),
            0b010 => Ok(Oversampling::X2),
            0b011 => Ok(Oversampling::X4),
            0b100 => Ok(Oversampling::X8),
            0b101 => Ok(Oversampling::X16),
            other => Err(UnexpectedValue(other))
        }
    }
}

impl From<Oversampling> for u8 {
    fn from(oversampling: Oversampling) -> u8 {
        match oversampling {
            Oversampling::Skipped => 0b000,
            Oversampling::X1 => 0b001,
            Oversampling::X2 => 0b010,
            Oversampling::X4 => 0b011,
            Oversampling::X8 => 0b100,
            Oversampling::X16 => 0b101,
        }
    }
}

/// Describes the different power modes that can be set in the CTRL_MEAS register.
///
/// For more information, see section 3.3 in the datasheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerMode {
    /// Sleep mode. This is the default mode after power on reset.
    Sleep,
    /// Forced mode. A single measurement is performed after which the device returns to Sleep mode.
    Forced,
    /// Normal mode. Measurements are performed continuously, separated by the standby time.
    Normal,
}

impl From<u8> for PowerMode {
    fn from(field: u8) -> Self {
        match field {
            0b00 => PowerMode::Sleep,
            0b01 | 0b10 => PowerMode::Forced,
            _ => PowerMode::Normal,
        }
    }
}

impl From<PowerMode> for u8 {
    fn from(mode: PowerMode) -> u8 {
        match mode {
            PowerMode::Sleep => 0b00,
            PowerMode::Forced => 0b01,
            PowerMode::Normal => 0b11,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_meas_decode() {
        let reg = CtrlMeas::decode(&[0b0000_0000]);
        assert_eq!(PowerMode::Sleep, reg.mode);
        assert_eq!(Oversampling::Skipped, reg.osrs_p);
        assert_eq!(Oversampling::Skipped, reg.osrs_t);

        let reg = CtrlMeas::decode(&[0b0010_0111]);
        assert_eq!(PowerMode::Normal, reg.mode);
        assert_eq!(Oversampling::X1, reg.osrs_p);
        assert_eq!(Oversampling::X1, reg.osrs_t);

        let reg = CtrlMeas::decode(&[0b1011_0110]);
        assert_eq!(PowerMode::Forced, reg.mode);
        assert_eq!(Oversampling::X16, reg.osrs_p);
        assert_eq!(Oversampling::X16, reg.osrs_t);
    }

    #[test]
    fn ctrl_meas_decode_reserved_oversampling_is_x16() {
        let reg = CtrlMeas::decode(&[0b1111_1100]);
        assert_eq!(Oversampling::X16, reg.osrs_p);
        assert_eq!(Oversampling::X16, reg.osrs_t);
    }

    #[test]
    fn ctrl_meas_encode() {
        let mut buffer = [0u8; 1];
        CtrlMeas::encode(&CtrlMeasFields {
            mode: PowerMode::Sleep,
            osrs_p: Oversampling::Skipped,
            osrs_t: Oversampling::Skipped,
        }, &mut buffer);
        assert_eq!([0b0000_0000], buffer);

        CtrlMeas::encode(&CtrlMeasFields {
            mode: PowerMode::Forced,
            osrs_p: Oversampling::X16,
            osrs_t: Oversampling::X2,
        }, &mut buffer);
        assert_eq!([0b0101_0101], buffer);

        CtrlMeas::encode(&CtrlMeasFields {
            mode: PowerMode::Normal,
            osrs_p: Oversampling::X1,
            osrs_t: Oversampling::X8,
        }, &mut buffer);
        assert_eq!([0b1000_0111], buffer);
    }

    #[test]
    fn oversampling_rejects_reserved_codes() {
        assert_eq!(Ok(Oversampling::X4), Oversampling::try_from(3));
        assert_eq!(Err(UnexpectedValue(6)), Oversampling::try_from(6));
    }
}
