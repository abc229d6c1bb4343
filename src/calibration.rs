use crate::bus::Bus;
use crate::error::Bme280Result;
use crate::register::calibration::{
    HumidityCalibration, TempPressCalibration, HUMIDITY_CALIBRATION_LEN, TEMP_PRESS_CALIBRATION_LEN,
};

/// Factory trimming coefficients of one chip, plus the `t_fine` carried from
/// temperature to pressure/humidity compensation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationData {
    pub dig_t1: u16,
    pub dig_t2: i16,
    pub dig_t3: i16,

    pub dig_p1: u16,
    pub dig_p2: i16,
    pub dig_p3: i16,
    pub dig_p4: i16,
    pub dig_p5: i16,
    pub dig_p6: i16,
    pub dig_p7: i16,
    pub dig_p8: i16,
    pub dig_p9: i16,

    pub dig_h1: u8,
    pub dig_h2: i16,
    pub dig_h3: u8,
    pub dig_h4: i16,
    pub dig_h5: i16,
    pub dig_h6: i8,

    pub(crate) t_fine: i32,
}

impl CalibrationData {
    /// Reads both calibration blocks from the device and parses them.
    pub fn new<B: Bus>(bus: &mut B) -> Bme280Result<Self, B::Error> {
        let temp_press = bus.read::<TempPressCalibration>()?;
        let humidity = bus.read::<HumidityCalibration>()?;

        Ok(Self::parse(&temp_press, &humidity))
    }

    /// Parses the 0x88 (temperature/pressure) and 0xE1 (humidity) calibration blocks.
    pub fn parse(
        temp_press: &[u8; TEMP_PRESS_CALIBRATION_LEN],
        humidity: &[u8; HUMIDITY_CALIBRATION_LEN],
    ) -> Self {
        let b = temp_press;
        let h = humidity;

        Self {
            dig_t1: u16::from_le_bytes([b[0], b[1]]),
            dig_t2: i16::from_le_bytes([b[2], b[3]]),
            dig_t3: i16::from_le_bytes([b[4], b[5]]),
            dig_p1: u16::from_le_bytes([b[6], b[7]]),
            dig_p2: i16::from_le_bytes([b[8], b[9]]),
            dig_p3: i16::from_le_bytes([b[10], b[11]]),
            dig_p4: i16::from_le_bytes([b[12], b[13]]),
            dig_p5: i16::from_le_bytes([b[14], b[15]]),
            dig_p6: i16::from_le_bytes([b[16], b[17]]),
            dig_p7: i16::from_le_bytes([b[18], b[19]]),
            dig_p8: i16::from_le_bytes([b[20], b[21]]),
            dig_p9: i16::from_le_bytes([b[22], b[23]]),
            // b[24] is unused
            dig_h1: b[25],

            dig_h2: i16::from_le_bytes([h[0], h[1]]),
            dig_h3: h[2],
            // H4 and H5 are 12-bit values sharing the nibbles of h[4]
            dig_h4: unpack_12bit(h[3], h[4] & 0x0F),
            dig_h5: unpack_12bit(h[5], h[4] >> 4),
            dig_h6: h[6] as i8,

            t_fine: 0,
        }
    }

    /// The `t_fine` derived by the most recent compensation pass.
    pub fn t_fine(&self) -> i32 {
        self.t_fine
    }

    /// All coefficients by name, in register order.
    pub fn coefficients(&self) -> [(&'static str, i32); 18] {
        [
            ("dig_T1", self.dig_t1 as i32),
            ("dig_T2", self.dig_t2 as i32),
            ("dig_T3", self.dig_t3 as i32),
            ("dig_P1", self.dig_p1 as i32),
            ("dig_P2", self.dig_p2 as i32),
            ("dig_P3", self.dig_p3 as i32),
            ("dig_P4", self.dig_p4 as i32),
            ("dig_P5", self.dig_p5 as i32),
            ("dig_P6", self.dig_p6 as i32),
            ("dig_P7", self.dig_p7 as i32),
            ("dig_P8", self.dig_p8 as i32),
            ("dig_P9", self.dig_p9 as i32),
            ("dig_H1", self.dig_h1 as i32),
            ("dig_H2", self.dig_h2 as i32),
            ("dig_H3", self.dig_h3 as i32),
            ("dig_H4", self.dig_h4 as i32),
            ("dig_H5", self.dig_h5 as i32),
            ("dig_H6", self.dig_h6 as i32),
        ]
    }
}

/// `msb` holds bits 11..4 (sign included), `nibble` bits 3..0.
#[inline]
fn unpack_12bit(msb: u8, nibble: u8) -> i16 {
    (msb as i8 as i16) * 16 | (nibble & 0x0F) as i16
}
