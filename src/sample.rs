//! Raw and compensated measurement samples.

/// Length of the PRESS/TEMP/HUM burst starting at 0xF7.
pub const BURST_LEN: usize = 8;

/// Uncompensated ADC output of one measurement.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawSample {
    /// 20-bit pressure reading
    pub pressure: u32,
    /// 20-bit temperature reading
    pub temperature: u32,
    /// 16-bit humidity reading
    pub humidity: u16,
}

impl RawSample {
    /// Decodes the 8 byte data burst.
    ///
    /// Pressure and temperature are stored msb, lsb, xlsb with the value in the upper nibble of xlsb.
    /// Humidity is stored msb, lsb.
    pub fn parse(burst: &[u8; BURST_LEN]) -> Self {
        Self {
            pressure: u20_from_be(burst[0], burst[1], burst[2]),
            temperature: u20_from_be(burst[3], burst[4], burst[5]),
            humidity: u16::from_be_bytes([burst[6], burst[7]]),
        }
    }
}

#[inline]
fn u20_from_be(msb: u8, lsb: u8, xlsb: u8) -> u32 {
    (msb as u32) << 12 | (lsb as u32) << 4 | (xlsb as u32) >> 4
}

/// Compensated measurement in fixed-point physical units.
///
/// Pressure and humidity are left at 0 when they were not asked for.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CompensatedSample {
    /// Pressure in Pa, within 30000..=110000.
    pub pressure: u32,
    /// Temperature in hundredths of a degree Celsius, within -4000..=8500.
    pub temperature: i32,
    /// Relative humidity in 1/1024 %RH, within 0..=102400.
    pub humidity: u32,
}

impl CompensatedSample {
    /// Splits the temperature into whole degrees and hundredths.
    ///
    /// ```rust
    /// use bme280_rs::CompensatedSample;
    /// let sample = CompensatedSample { temperature: 2508, ..Default::default() };
    /// assert_eq!(sample.temperature_split(), (25, 8));
    /// ```
    pub fn temperature_split(&self) -> (i32, i32) {
        (self.temperature / 100, self.temperature % 100)
    }

    /// Pressure as hectopascal, split at the decimal point.
    pub fn pressure_hpa(&self) -> (u32, u32) {
        (self.pressure / 100, self.pressure % 100)
    }

    /// Relative humidity in whole percent and thousandths of a percent.
    pub fn humidity_split(&self) -> (u32, u32) {
        let milli = (self.humidity as u64 * 1000 / 1024) as u32;
        (milli / 1000, milli % 1000)
    }

    pub fn temperature_celsius(&self) -> f32 {
        self.temperature as f32 / 100.0
    }

    pub fn humidity_percent(&self) -> f32 {
        self.humidity as f32 / 1024.0
    }
}

#[cfg(feature = "uom")]
impl CompensatedSample {
    pub fn pressure_uom(&self) -> uom::si::f32::Pressure {
        uom::si::f32::Pressure::new::<uom::si::pressure::pascal>(self.pressure as f32)
    }

    pub fn temperature_uom(&self) -> uom::si::f32::ThermodynamicTemperature {
        uom::si::f32::ThermodynamicTemperature::new::<uom::si::thermodynamic_temperature::degree_celsius>(self.temperature_celsius())
    }

    pub fn humidity_uom(&self) -> uom::si::f32::Ratio {
        uom::si::f32::Ratio::new::<uom::si::ratio::percent>(self.humidity_percent())
    }
}
