//! Blocking driver for the Bosch BME280 pressure, temperature and humidity sensor.
//!
//! Measurements are compensated with the integer reference formulas from the datasheet,
//! so the results match Bosch's own driver bit for bit.
//!
//! ```rust,no_run
//! # use embedded_hal::delay::DelayNs;
//! # use embedded_hal::i2c::I2c;
//! use bme280_rs::{Bme280, Bme280Result, Components, Preset, SdoPinState, Settings, SettingsSelector};
//! # fn demo<I: I2c, D: DelayNs>(i2c: I, mut delay: D) -> Bme280Result<(), I::Error> {
//!
//! let mut device = Bme280::new_i2c(i2c, SdoPinState::Low, &mut delay)?;
//! let _ = device.set_settings(
//!     SettingsSelector::ALL,
//!     &Settings::from_preset(Preset::WeatherMonitoring),
//!     &mut delay,
//! )?;
//!
//! let sample = device.forced_read(Components::ALL, &mut delay)?;
//! let (degrees, hundredths) = sample.temperature_split();
//! # Ok(())
//! # }
//! ```
#![cfg_attr(not(test), no_std)]

pub mod bus;
pub mod register;
mod bme280;
mod calibration;
mod compensation;
mod config;
mod error;
mod power;
mod sample;
mod settings;

#[cfg(test)]
mod testing;

pub use crate::bme280::{Bme280, Bme280I2c, Bme280Spi, DeviceInfo, SdoPinState, BME280_CHIP_ID};
pub use crate::calibration::CalibrationData;
pub use crate::compensation::{
    compensate, compensate_humidity, compensate_pressure, compensate_temperature, Components, TFine,
};
pub use crate::config::{Preset, Settings};
pub use crate::error::{Bme280Error, Bme280Result, Outcome};
pub use crate::power::{SOFT_RESET_POLLS, SOFT_RESET_POLL_INTERVAL_MS};
pub use crate::register::config::{FilterCoefficient, StandbyTime};
pub use crate::register::ctrl_meas::{Oversampling, PowerMode};
pub use crate::register::status::StatusFlags;
pub use crate::sample::{CompensatedSample, RawSample};
pub use crate::settings::SettingsSelector;
