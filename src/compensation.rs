//! Fixed-point compensation of raw samples.
//!
//! The formulas are Bosch's 32-bit integer reference implementation, step for step.
//! Intermediate results wrap and divisions truncate toward zero exactly like the
//! reference C code does, so the output matches it bit for bit.

use crate::calibration::CalibrationData;
use crate::sample::{CompensatedSample, RawSample};

pub const PRESSURE_MIN: u32 = 30_000;
pub const PRESSURE_MAX: u32 = 110_000;
pub const TEMPERATURE_MIN: i32 = -4_000;
pub const TEMPERATURE_MAX: i32 = 8_500;
pub const HUMIDITY_MAX: u32 = 102_400;

/// Selects which quantities [`compensate`] should produce.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Components(u8);

impl Components {
    pub const PRESSURE: Components = Components(1 << 0);
    pub const TEMPERATURE: Components = Components(1 << 1);
    pub const HUMIDITY: Components = Components(1 << 2);
    pub const ALL: Components = Components(0b111);

    /// Creates a new instance with nothing selected.
    pub fn new() -> Self {
        Self(0)
    }

    pub fn pressure(mut self) -> Self {
        self.0 |= Self::PRESSURE.0;

        self
    }

    pub fn temperature(mut self) -> Self {
        self.0 |= Self::TEMPERATURE.0;

        self
    }

    pub fn humidity(mut self) -> Self {
        self.0 |= Self::HUMIDITY.0;

        self
    }

    pub fn from_bits(bits: u8) -> Self {
        Self(bits & Self::ALL.0)
    }

    pub fn bits(&self) -> u8 {
        self.0
    }

    pub fn contains(&self, other: Components) -> bool {
        self.0 & other.0 == other.0 && other.0 != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl Default for Components {
    fn default() -> Self {
        Self::ALL
    }
}

impl core::ops::BitOr for Components {
    type Output = Components;

    fn bitor(self, rhs: Self) -> Self::Output {
        Components(self.0 | rhs.0)
    }
}

/// Fine temperature, only obtainable from [`compensate_temperature`].
///
/// Pressure and humidity compensation take it by value, so neither can run
/// without a temperature pass over the same raw sample.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TFine(i32);

impl TFine {
    pub fn value(&self) -> i32 {
        self.0
    }
}

/// Compensates the selected quantities of `raw`.
///
/// Temperature is derived first whenever anything is selected, since pressure and
/// humidity depend on its `t_fine`, and is reported alongside them. The derived
/// `t_fine` is stored in `calibration`.
pub fn compensate(
    components: Components,
    raw: &RawSample,
    calibration: &mut CalibrationData,
) -> CompensatedSample {
    let mut sample = CompensatedSample::default();

    if components.is_empty() {
        return sample;
    }

    let (temperature, t_fine) = compensate_temperature(raw.temperature, calibration);
    calibration.t_fine = t_fine.value();
    sample.temperature = temperature;

    if components.contains(Components::PRESSURE) {
        sample.pressure = compensate_pressure(raw.pressure, t_fine, calibration);
    }

    if components.contains(Components::HUMIDITY) {
        sample.humidity = compensate_humidity(raw.humidity, t_fine, calibration);
    }

    sample
}

/// Returns the temperature in 0.01 °C together with the `t_fine` it was derived from.
pub fn compensate_temperature(adc_t: u32, cal: &CalibrationData) -> (i32, TFine) {
    let adc_t = adc_t as i32;
    let t1 = cal.dig_t1 as i32;

    let var1 = (adc_t / 8).wrapping_sub(t1 * 2);
    let var1 = var1.wrapping_mul(cal.dig_t2 as i32) / 2048;
    let var2 = (adc_t / 16).wrapping_sub(t1);
    let var2 = (var2.wrapping_mul(var2) / 4096).wrapping_mul(cal.dig_t3 as i32) / 16384;

    let t_fine = var1.wrapping_add(var2);
    let temperature = t_fine.wrapping_mul(5).wrapping_add(128) / 256;

    (temperature.clamp(TEMPERATURE_MIN, TEMPERATURE_MAX), TFine(t_fine))
}

/// Returns the pressure in Pa.
pub fn compensate_pressure(adc_p: u32, t_fine: TFine, cal: &CalibrationData) -> u32 {
    let p1 = cal.dig_p1 as i32;
    let p2 = cal.dig_p2 as i32;
    let p3 = cal.dig_p3 as i32;
    let p4 = cal.dig_p4 as i32;
    let p5 = cal.dig_p5 as i32;
    let p6 = cal.dig_p6 as i32;
    let p7 = cal.dig_p7 as i32;
    let p8 = cal.dig_p8 as i32;
    let p9 = cal.dig_p9 as i32;

    let var1 = (t_fine.value() / 2).wrapping_sub(64000);
    let var2 = ((var1 / 4).wrapping_mul(var1 / 4) / 2048).wrapping_mul(p6);
    let var2 = var2.wrapping_add(var1.wrapping_mul(p5).wrapping_mul(2));
    let var2 = (var2 / 4).wrapping_add(p4.wrapping_mul(65536));
    let var3 = p3.wrapping_mul((var1 / 4).wrapping_mul(var1 / 4) / 8192) / 8;
    let var4 = p2.wrapping_mul(var1) / 2;
    let var1 = var3.wrapping_add(var4) / 262144;
    let var1 = 32768i32.wrapping_add(var1).wrapping_mul(p1) / 32768;

    // Avoids a division by zero
    if var1 == 0 {
        return PRESSURE_MIN;
    }

    let var5 = 1_048_576u32.wrapping_sub(adc_p);
    let mut pressure = var5.wrapping_sub((var2 / 4096) as u32).wrapping_mul(3125);
    if pressure < 0x8000_0000 {
        pressure = (pressure << 1) / (var1 as u32);
    } else {
        pressure = (pressure / var1 as u32).wrapping_mul(2);
    }

    let var1 = p9.wrapping_mul(((pressure / 8).wrapping_mul(pressure / 8) / 8192) as i32) / 4096;
    let var2 = ((pressure / 4) as i32).wrapping_mul(p8) / 8192;
    let pressure = (pressure as i32).wrapping_add(var1.wrapping_add(var2).wrapping_add(p7) / 16) as u32;

    pressure.clamp(PRESSURE_MIN, PRESSURE_MAX)
}

/// Returns the relative humidity in 1/1024 %RH.
pub fn compensate_humidity(adc_h: u16, t_fine: TFine, cal: &CalibrationData) -> u32 {
    let h1 = cal.dig_h1 as i32;
    let h2 = cal.dig_h2 as i32;
    let h3 = cal.dig_h3 as i32;
    let h4 = cal.dig_h4 as i32;
    let h5 = cal.dig_h5 as i32;
    let h6 = cal.dig_h6 as i32;

    let var1 = t_fine.value().wrapping_sub(76800);
    let var2 = (adc_h as i32) * 16384;
    let var3 = h4.wrapping_mul(1_048_576);
    let var4 = h5.wrapping_mul(var1);
    let var5 = var2.wrapping_sub(var3).wrapping_sub(var4).wrapping_add(16384) / 32768;
    let var2 = var1.wrapping_mul(h6) / 1024;
    let var3 = var1.wrapping_mul(h3) / 2048;
    let var4 = (var2.wrapping_mul(var3.wrapping_add(32768)) / 1024).wrapping_add(2_097_152);
    let var2 = var4.wrapping_mul(h2).wrapping_add(8192) / 16384;
    let var3 = var5.wrapping_mul(var2);
    let var4 = (var3 / 32768).wrapping_mul(var3 / 32768) / 128;
    let var5 = var3.wrapping_sub(var4.wrapping_mul(h1) / 16);
    let var5 = var5.clamp(0, 419_430_400);

    ((var5 / 4096) as u32).min(HUMIDITY_MAX)
}
