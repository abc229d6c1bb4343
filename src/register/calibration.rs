//! ### Calibration blocks (`0x88`, 26 bytes and `0xE1`, 7 bytes, R)
//!
//! The factory trimming coefficients are split over two non-contiguous blocks.
//! The markers here only fetch the raw bytes, [`CalibrationData::parse`](crate::CalibrationData::parse)
//! turns them into coefficients.
use crate::register::{Readable, Reg};

pub const TEMP_PRESS_CALIBRATION_LEN: usize = 26;
pub const HUMIDITY_CALIBRATION_LEN: usize = 7;

/// Marker type for the temperature/pressure calibration block (0x88..0xA1)
pub struct TempPressCalibration;
impl Reg for TempPressCalibration { const ADDR: u8 = 0x88; }

impl Readable for TempPressCalibration {
    type Out = [u8; TEMP_PRESS_CALIBRATION_LEN];

    const N: usize = TEMP_PRESS_CALIBRATION_LEN;

    fn decode(b: &[u8]) -> Self::Out {
        let mut block = [0u8; TEMP_PRESS_CALIBRATION_LEN];
        block.copy_from_slice(&b[..TEMP_PRESS_CALIBRATION_LEN]);
        block
    }
}

/// Marker type for the humidity calibration block (0xE1..0xE7)
pub struct HumidityCalibration;
impl Reg for HumidityCalibration { const ADDR: u8 = 0xE1; }

impl Readable for HumidityCalibration {
    type Out = [u8; HUMIDITY_CALIBRATION_LEN];

    const N: usize = HUMIDITY_CALIBRATION_LEN;

    fn decode(b: &[u8]) -> Self::Out {
        let mut block = [0u8; HUMIDITY_CALIBRATION_LEN];
        block.copy_from_slice(&b[..HUMIDITY_CALIBRATION_LEN]);
        block
    }
}
