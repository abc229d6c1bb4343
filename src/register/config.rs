//! ### CONFIG - Rate, filter and interface options (`0xF5`, 1 byte, R/W)
//!
//! | Bits | Field |
//! |---|---|
//! | 0 | `spi3w_en` |
//! | 1 | reserved |
//! | 4..2 | `filter` |
//! | 7..5 | `t_sb` |
//!
//! Writes to this register in Normal mode may be ignored. In Sleep mode writes are not ignored.
//!
//! ### Default values
//! 0x00 (filter off, 0.5 ms standby, 3-wire SPI disabled)
//!
//! ### Examples
//! ```rust,no_run
//! # use bme280_rs::{Bme280, Bme280Result};
//! # use bme280_rs::bus::Bus;
//! # fn demo<B: Bus>(mut device: Bme280<B>)
//! #     -> Bme280Result<(), B::Error> {
//! use bme280_rs::register::config::{Config, FilterCoefficient, StandbyTime};
//!
//! let mut config = device.read::<Config>()?;
//! config.filter = FilterCoefficient::X16;
//! config.t_sb = StandbyTime::Ms125;
//! device.write::<Config>(&config)?;
//!
//! # Ok(()) }
//! ```

use crate::register::{Readable, Reg, UnexpectedValue, Writable};

/// Marker type for CONFIG (0xF5) register
pub struct Config;
impl Reg for Config { const ADDR: u8 = 0xF5; }

/// The payload for the CONFIG (0xF5) register.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConfigFields {
    /// Enables the 3-wire SPI interface. Preserved, never changed by the driver.
    pub spi3w_en: bool,
    /// The IIR filter coefficient.
    pub filter: FilterCoefficient,
    /// Inactive duration between measurements in Normal mode.
    pub t_sb: StandbyTime,
}

impl Readable for Config {
    type Out = ConfigFields;

    fn decode(b: &[u8]) -> Self::Out {
        ConfigFields {
            spi3w_en: b[0] & 0b1 != 0,
            filter: FilterCoefficient::from((b[0] >> 2) & 0b111),
            t_sb: StandbyTime::from((b[0] >> 5) & 0b111),
        }
    }
}

impl Writable for Config {
    type In = ConfigFields;

    fn encode(v: &Self::In, out: &mut [u8]) {
        let filter: u8 = v.filter.into();
        let t_sb: u8 = v.t_sb.into();
        out[0] = (v.spi3w_en as u8) | (filter & 0b111) << 2 | (t_sb & 0b111) << 5;
    }
}

/// This enum holds all configurable IIR filter coefficients.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FilterCoefficient {
    /// Filter off
    Off,
    X2,
    X4,
    X8,
    X16,
}

impl From<FilterCoefficient> for u8 {
    fn from(coefficient: FilterCoefficient) -> u8 {
        match coefficient {
            FilterCoefficient::Off => 0b000,
            FilterCoefficient::X2 =>  0b001,
            FilterCoefficient::X4 =>  0b010,
            FilterCoefficient::X8 =>  0b011,
            FilterCoefficient::X16 => 0b100,
        }
    }
}

impl From<u8> for FilterCoefficient {
    fn from(field: u8) -> Self {
        match field {
            0b000 => FilterCoefficient::Off,
            0b001 => FilterCoefficient::X2,
            0b010 => FilterCoefficient::X4,
            0b011 => FilterCoefficient::X8,
            // 0b101..=0b111 also select coefficient 16
            _ => FilterCoefficient::X16,
        }
    }
}

impl FilterCoefficient {
    /// Strict conversion for user supplied codes, rejecting the reserved values above 0b100.
    pub fn from_code(code: u8) -> Result<Self, UnexpectedValue> {
        match code {
            0b000..=0b100 => Ok(FilterCoefficient::from(code)),
            other => Err(UnexpectedValue(other)),
        }
    }
}

/// Standby duration between measurements in Normal mode.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StandbyTime {
    Ms0_5,
    Ms62_5,
    Ms125,
    Ms250,
    Ms500,
    Ms1000,
    Ms10,
    Ms20,
}

impl StandbyTime {
    /// Standby duration in microseconds.
    pub fn as_us(&self) -> u32 {
        match self {
            StandbyTime::Ms0_5 => 500,
            StandbyTime::Ms62_5 => 62_500,
            StandbyTime::Ms125 => 125_000,
            StandbyTime::Ms250 => 250_000,
            StandbyTime::Ms500 => 500_000,
            StandbyTime::Ms1000 => 1_000_000,
            StandbyTime::Ms10 => 10_000,
            StandbyTime::Ms20 => 20_000,
        }
    }
}

impl From<StandbyTime> for u8 {
    fn from(standby: StandbyTime) -> u8 {
        match standby {
            StandbyTime::Ms0_5 =>  0b000,
            StandbyTime::Ms62_5 => 0b001,
            StandbyTime::Ms125 =>  0b010,
            StandbyTime::Ms250 =>  0b011,
            StandbyTime::Ms500 =>  0b100,
            StandbyTime::Ms1000 => 0b101,
            StandbyTime::Ms10 =>   0b110,
            StandbyTime::Ms20 =>   0b111,
        }
    }
}

impl From<u8> for StandbyTime {
    fn from(field: u8) -> Self {
        match field & 0b111 {
            0b000 => StandbyTime::Ms0_5,
            0b001 => StandbyTime::Ms62_5,
            0b010 => StandbyTime::Ms125,
            0b011 => StandbyTime::Ms250,
            0b100 => StandbyTime::Ms500,
            0b101 => StandbyTime::Ms1000,
            0b110 => StandbyTime::Ms10,
            _ => StandbyTime::Ms20,
        }
    }
}
