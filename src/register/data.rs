use crate::register::{Readable, Reg};
use crate::sample::{RawSample, BURST_LEN};

/// Marker struct for the PRESS/TEMP/HUM data registers (0xF7 - 0xFE).
/// Reading all 8 bytes in one burst guarantees that the three values belong to the same measurement.
/// Note that this will return the raw uncompensated data. So for most use cases
/// calling [`Bme280::read_sensor_data()`](crate::Bme280::read_sensor_data) is recommended as it will compensate the data for you.
///
/// - **Length:** 8 bytes
/// - **Access:** Read-only
pub struct Data;
impl Reg for Data { const ADDR: u8 = 0xF7;}

impl Readable for Data {
    type Out = RawSample;

    const N: usize = BURST_LEN;

    fn decode(b: &[u8]) -> Self::Out {
        let mut burst = [0u8; BURST_LEN];
        burst.copy_from_slice(&b[..BURST_LEN]);
        RawSample::parse(&burst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_decode() {
        let reg = Data::decode(&[0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF, 0x12, 0x34]);

        assert_eq!(0xAABBC, reg.pressure);
        assert_eq!(0xDDEEF, reg.temperature);
        assert_eq!(0x1234, reg.humidity);
    }
}
