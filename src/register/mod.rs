//! Typed markers for the BME280 register map.
//!
//! Every register is a zero-sized marker implementing [`Reg`] and [`Readable`] and/or [`Writable`].
//! Bit fields are packed and unpacked explicitly from the raw byte, bit 0 being the least significant bit.
//!
//! | Register | Address | Length | Access |
//! |---|---|---|---|
//! | [`chip_id::ChipId`] | 0xD0 | 1 | R |
//! | [`reset::Reset`] | 0xE0 | 1 | W |
//! | [`calibration::TempPressCalibration`] | 0x88 | 26 | R |
//! | [`calibration::HumidityCalibration`] | 0xE1 | 7 | R |
//! | [`status::Status`] | 0xF3 | 1 | R |
//! | [`config::Config`] | 0xF5 | 1 | R/W |
//! | [`ctrl_meas::CtrlMeas`] | 0xF4 | 1 | R/W |
//! | [`ctrl_hum::CtrlHum`] | 0xF2 | 1 | R/W |
//! | [`data::Data`] | 0xF7 | 8 | R |
pub mod chip_id;
pub mod reset;
pub mod calibration;
pub mod status;
pub mod config;
pub mod ctrl_meas;
pub mod ctrl_hum;
pub mod data;

/// A field value that does not map to any variant of the field's enum.
#[derive(Debug, PartialEq)]
pub struct UnexpectedValue(pub u8);

pub trait Reg { const ADDR: u8; }

pub trait Readable: Reg {
    type Out;
    const N: usize = 1;
    /// Unpacks the raw bytes. Every bit pattern maps to a value.
    fn decode(b: &[u8]) -> Self::Out;
}

pub trait Writable: Reg {
    type In;
    const N: usize = 1;
    fn encode(v: &Self::In, out: &mut [u8]);
}
