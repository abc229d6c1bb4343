//! Errors that can occur when using the BME280 device.
//!
//! This module provides an error type that encapsulates all possible errors that can occur during communication with the BME280.
//! It is generic over the underlying bus (spi/i2c) error type.

/// This represents all possible errors that can occur when using the BME280 device.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bme280Error<BusError> {
    /// An error has occurred in the SPI / I2C driver (`CommFail`).
    ///
    /// Any read or write that fails aborts the operation in progress. Multi-step protocols
    /// such as [`Bme280::set_mode`](crate::Bme280::set_mode) may have been partially applied.
    Bus(BusError),

    /// A register write was requested with no data.
    InvalidLength,

    /// The NVM copy that follows a soft reset did not finish within the retry budget.
    NvmCopyFailed,

    /// The CHIP_ID register did not contain the BME280 identifier.
    ///
    /// Could possibly indicate an error with pin configuration and/or wiring, or a BMP280 on the bus.
    UnexpectedChipId(u8),

    /// The device did not return to Sleep after a forced measurement (`SleepModeFail`).
    MeasurementTimeout,
}

impl<BusError> Bme280Error<BusError> {
    /// Numeric status code of this error. Errors are always negative.
    pub fn code(&self) -> i8 {
        match self {
            Bme280Error::InvalidLength => -2,
            Bme280Error::Bus(_) => -3,
            Bme280Error::NvmCopyFailed => -5,
            Bme280Error::UnexpectedChipId(_) => -6,
            Bme280Error::MeasurementTimeout => -4,
        }
    }
}

/// Non-fatal outcome of an operation that completed without an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[must_use]
pub enum Outcome {
    /// Everything that was asked for was written.
    Ok,
    /// The selector named neither an oversampling setting nor filter/standby,
    /// so no register was modified.
    InvalidSelector,
}

impl Outcome {
    /// Numeric status code. Zero is success, warnings are positive.
    pub fn code(&self) -> i8 {
        match self {
            Outcome::Ok => 0,
            Outcome::InvalidSelector => 1,
        }
    }

    pub fn is_warning(&self) -> bool {
        self.code() > 0
    }
}

/// Type alias used to simplify return types throughout the driver
pub type Bme280Result<T, BusError> = Result<T, Bme280Error<BusError>>;
