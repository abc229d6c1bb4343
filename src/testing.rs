use crate::bus::Bus;
use embedded_hal::delay::DelayNs;
use heapless::Vec;

const LOG_LEN: usize = 128;

const RESET_ADDR: u8 = 0xE0;
const SOFT_RESET: u8 = 0xB6;
const CTRL_HUM_ADDR: u8 = 0xF2;
const STATUS_ADDR: u8 = 0xF3;
const CTRL_MEAS_ADDR: u8 = 0xF4;
const CONFIG_ADDR: u8 = 0xF5;

const MODE_MASK: u8 = 0b11;
const IM_UPDATE: u8 = 0b1;

/// A single bus access, in the order it happened.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Access {
    Read(u8, usize),
    Write(u8, u8),
}

/// Register file simulating a BME280 behind a [`Bus`].
///
/// - A Forced mode write returns to Sleep after `forced_polls` reads of CTRL_MEAS.
/// - Writing the soft reset word clears the control registers and keeps STATUS.im_update
///   set for the next `nvm_busy_polls` reads of STATUS.
/// - Accessing `fail_on` fails with `()`.
pub struct FakeBus {
    regs: [u8; 256],
    log: Vec<Access, LOG_LEN>,
    reads: Vec<(u8, usize), LOG_LEN>,
    writes: Vec<(u8, u8), LOG_LEN>,
    nvm_busy_polls: usize,
    nvm_busy_remaining: usize,
    forced_polls: usize,
    forced_remaining: usize,
    fail_on: Option<u8>,
}

impl FakeBus {
    pub fn new() -> Self {
        FakeBus {
            regs: [0u8; 256],
            log: Vec::new(),
            reads: Vec::new(),
            writes: Vec::new(),
            nvm_busy_polls: 0,
            nvm_busy_remaining: 0,
            forced_polls: 0,
            forced_remaining: 0,
            fail_on: None,
        }
    }

    /// A bus holding the chip id and the reference calibration blocks.
    pub fn bme280() -> Self {
        use crate::calibration::tests::{HUMIDITY_BLOCK, TEMP_PRESS_BLOCK};

        let mut bus = Self::new();
        bus.set(0xD0, 0x60);
        bus.set_block(0x88, &TEMP_PRESS_BLOCK);
        bus.set_block(0xE1, &HUMIDITY_BLOCK);

        bus
    }

    pub fn set(&mut self, addr: u8, value: u8) {
        self.regs[addr as usize] = value;
    }

    pub fn set_block(&mut self, addr: u8, bytes: &[u8]) {
        let start = addr as usize;
        self.regs[start..start + bytes.len()].copy_from_slice(bytes);
    }

    pub fn get(&self, addr: u8) -> u8 {
        self.regs[addr as usize]
    }

    pub fn with_nvm_busy_polls(mut self, polls: usize) -> Self {
        self.nvm_busy_polls = polls;

        self
    }

    pub fn with_forced_polls(mut self, polls: usize) -> Self {
        self.forced_polls = polls;

        self
    }

    pub fn fail_on(&mut self, addr: Option<u8>) {
        self.fail_on = addr;
    }

    pub fn log(&self) -> &[Access] {
        &self.log
    }

    pub fn reads(&self) -> &[(u8, usize)] {
        &self.reads
    }

    pub fn writes(&self) -> &[(u8, u8)] {
        &self.writes
    }

    pub fn clear_log(&mut self) {
        self.log.clear();
        self.reads.clear();
        self.writes.clear();
    }

    fn check(&self, addr: u8, len: usize) -> Result<(), ()> {
        match self.fail_on {
            Some(fail) if (addr..addr.saturating_add(len as u8)).contains(&fail) || addr == fail => Err(()),
            _ => Ok(()),
        }
    }

    fn read_one(&mut self, addr: u8) -> u8 {
        match addr {
            STATUS_ADDR if self.nvm_busy_remaining > 0 => {
                self.nvm_busy_remaining -= 1;
                self.regs[addr as usize] | IM_UPDATE
            }
            CTRL_MEAS_ADDR if self.regs[addr as usize] & MODE_MASK == 0b01 => {
                if self.forced_remaining == 0 {
                    self.regs[addr as usize] &= !MODE_MASK;
                } else {
                    self.forced_remaining -= 1;
                }
                self.regs[addr as usize]
            }
            _ => self.regs[addr as usize],
        }
    }

    fn write_one(&mut self, addr: u8, value: u8) {
        match (addr, value) {
            (RESET_ADDR, SOFT_RESET) => {
                self.regs[CTRL_HUM_ADDR as usize] = 0;
                self.regs[CTRL_MEAS_ADDR as usize] = 0;
                self.regs[CONFIG_ADDR as usize] = 0;
                self.nvm_busy_remaining = self.nvm_busy_polls;
            }
            (RESET_ADDR, _) => {}
            (CTRL_MEAS_ADDR, _) => {
                self.regs[addr as usize] = value;
                self.forced_remaining = self.forced_polls;
            }
            _ => self.regs[addr as usize] = value,
        }
    }
}

impl Bus for FakeBus {
    type Error = ();

    fn read_registers(&mut self, addr: u8, data: &mut [u8]) -> Result<(), Self::Error> {
        self.check(addr, data.len())?;
        self.log.push(Access::Read(addr, data.len())).expect("fake bus log full");
        self.reads.push((addr, data.len())).expect("fake bus log full");

        for (offset, byte) in data.iter_mut().enumerate() {
            *byte = self.read_one(addr.wrapping_add(offset as u8));
        }

        Ok(())
    }

    fn write_registers(&mut self, addr: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.check(addr, data.len())?;

        for (offset, value) in data.iter().enumerate() {
            let reg = addr.wrapping_add(offset as u8);
            self.log.push(Access::Write(reg, *value)).expect("fake bus log full");
            self.writes.push((reg, *value)).expect("fake bus log full");
            self.write_one(reg, *value);
        }

        Ok(())
    }
}

/// Records every requested delay instead of sleeping.
pub struct FakeDelay {
    delays_ns: Vec<u32, LOG_LEN>,
}

impl FakeDelay {
    pub fn new() -> Self {
        FakeDelay { delays_ns: Vec::new() }
    }

    pub fn delays_ns(&self) -> &[u32] {
        &self.delays_ns
    }

    pub fn total_us(&self) -> u64 {
        self.delays_ns.iter().map(|ns| *ns as u64).sum::<u64>() / 1000
    }
}

impl DelayNs for FakeDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.delays_ns.push(ns).expect("fake delay log full");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forced_mode_returns_to_sleep() {
        let mut bus = FakeBus::new().with_forced_polls(1);
        bus.write_registers(CTRL_MEAS_ADDR, &[0b0010_0101]).unwrap();

        let mut buf = [0u8; 1];
        bus.read_registers(CTRL_MEAS_ADDR, &mut buf).unwrap();
        assert_eq!([0b0010_0101], buf);

        bus.read_registers(CTRL_MEAS_ADDR, &mut buf).unwrap();
        assert_eq!([0b0010_0100], buf);
    }

    #[test]
    fn soft_reset_clears_control_registers() {
        let mut bus = FakeBus::new().with_nvm_busy_polls(1);
        bus.set(CTRL_HUM_ADDR, 0x01);
        bus.set(CTRL_MEAS_ADDR, 0x27);
        bus.set(CONFIG_ADDR, 0xA0);

        bus.write_registers(RESET_ADDR, &[SOFT_RESET]).unwrap();

        assert_eq!([0, 0, 0], [bus.get(CTRL_HUM_ADDR), bus.get(CTRL_MEAS_ADDR), bus.get(CONFIG_ADDR)]);

        let mut status = [0u8; 1];
        bus.read_registers(STATUS_ADDR, &mut status).unwrap();
        assert_eq!([IM_UPDATE], status);
        bus.read_registers(STATUS_ADDR, &mut status).unwrap();
        assert_eq!([0], status);
    }

    #[test]
    fn injected_failure() {
        let mut bus = FakeBus::new();
        bus.fail_on(Some(0x8A));

        let mut buf = [0u8; 26];
        assert_eq!(Err(()), bus.read_registers(0x88, &mut buf));
        assert!(bus.log().is_empty());
    }
}
