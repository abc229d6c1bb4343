//! Register transport used by the driver.
//!
//! [`Bus`] is the only thing the driver needs from the outside world: read a run of
//! registers and write a run of registers. [`I2c`] and [`Spi`] adapt the blocking
//! `embedded-hal` traits to it, but any implementation (a mocked bus, a bit-banged one)
//! satisfies the same contract.

use crate::error::{Bme280Error, Bme280Result};
use crate::register::{Readable, Writable};
use embedded_hal::i2c::SevenBitAddress;

/// Largest register block the driver reads in one go (the temperature/pressure calibration block).
pub const MAX_REG_BYTES: usize = 26;

pub trait Bus {
    type Error;

    /// Reads `data.len()` consecutive registers starting at `addr`.
    fn read_registers(&mut self, addr: u8, data: &mut [u8]) -> Result<(), Self::Error>;

    /// Writes `data` to consecutive registers starting at `addr`.
    fn write_registers(&mut self, addr: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Reads and decodes the register described by the marker `R`.
    fn read<R: Readable>(&mut self) -> Bme280Result<R::Out, Self::Error> {
        let mut buf = [0u8; MAX_REG_BYTES];
        let data = &mut buf[..R::N];
        self.read_registers(R::ADDR, data).map_err(Bme280Error::Bus)?;

        Ok(R::decode(data))
    }

    /// Encodes `v` and writes it to the register described by the marker `W`.
    fn write<W: Writable>(&mut self, v: &W::In) -> Bme280Result<(), Self::Error> {
        let mut buf = [0u8; MAX_REG_BYTES];
        let data = &mut buf[..W::N];
        W::encode(v, data);

        self.write_registers(W::ADDR, data).map_err(Bme280Error::Bus)
    }
}

impl<T: Bus + ?Sized> Bus for &mut T {
    type Error = T::Error;

    fn read_registers(&mut self, addr: u8, data: &mut [u8]) -> Result<(), Self::Error> {
        T::read_registers(self, addr, data)
    }

    fn write_registers(&mut self, addr: u8, data: &[u8]) -> Result<(), Self::Error> {
        T::write_registers(self, addr, data)
    }
}

pub struct I2c<I2cType> {
    i2c: I2cType,
    address: SevenBitAddress,
}

impl<I2cType> I2c<I2cType>
where
    I2cType: embedded_hal::i2c::I2c,
{
    pub(crate) fn new(i2c: I2cType, address: SevenBitAddress) -> Self {
        Self { i2c, address }
    }

    pub(crate) fn release(self) -> I2cType {
        self.i2c
    }
}

impl<I2cType> Bus for I2c<I2cType>
where
    I2cType: embedded_hal::i2c::I2c,
{
    type Error = <I2cType as embedded_hal::i2c::ErrorType>::Error;

    fn read_registers(&mut self, addr: u8, data: &mut [u8]) -> Result<(), Self::Error> {
        self.i2c.write_read(self.address, &[addr], data)
    }

    fn write_registers(&mut self, addr: u8, data: &[u8]) -> Result<(), Self::Error> {
        // The BME280 does not auto-increment on writes, every byte needs its own address.
        for (offset, value) in data.iter().enumerate() {
            let reg = addr.wrapping_add(offset as u8);
            self.i2c.write(self.address, &[reg, *value])?;
        }

        Ok(())
    }
}

pub struct Spi<SpiType> {
    spi: SpiType,
}

impl<SpiType> Spi<SpiType>
where
    SpiType: embedded_hal::spi::SpiDevice,
{
    const READ_BIT: u8 = 0b1000_0000;

    pub(crate) fn new(spi: SpiType) -> Self {
        Self { spi }
    }

    pub(crate) fn release(self) -> SpiType {
        self.spi
    }
}

impl<SpiType> Bus for Spi<SpiType>
where
    SpiType: embedded_hal::spi::SpiDevice,
{
    type Error = <SpiType as embedded_hal::spi::ErrorType>::Error;

    fn read_registers(&mut self, addr: u8, data: &mut [u8]) -> Result<(), Self::Error> {
        use embedded_hal::spi::Operation;
        self.spi.transaction(&mut [
            Operation::Write(&[addr | Self::READ_BIT]),
            Operation::Read(data),
        ])
    }

    fn write_registers(&mut self, addr: u8, data: &[u8]) -> Result<(), Self::Error> {
        for (offset, value) in data.iter().enumerate() {
            let reg = addr.wrapping_add(offset as u8) & !Self::READ_BIT;
            self.spi.write(&[reg, *value])?;
        }

        Ok(())
    }
}
