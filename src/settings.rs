//! Writes a chosen subset of [`Settings`] to the device.
//!
//! The three control registers have ordering rules the chip imposes:
//! - `osrs_p` and `osrs_t` share CTRL_MEAS with the power mode, so they are always
//!   read-modify-written and the mode bits are preserved.
//! - A CTRL_HUM write only takes effect after the next CTRL_MEAS write, so CTRL_MEAS
//!   is written back (unchanged) right after humidity oversampling.
//! - CONFIG is read-modify-written so the field that was not selected and `spi3w_en` survive.
//!
//! The device is expected to be in Sleep mode, CONFIG writes may be ignored otherwise.
//! [`Bme280::set_settings`](crate::Bme280::set_settings) takes care of that.

use crate::bus::Bus;
use crate::config::Settings;
use crate::error::{Bme280Result, Outcome};
use crate::register::config::Config;
use crate::register::ctrl_hum::{CtrlHum, CtrlHumFields};
use crate::register::ctrl_meas::CtrlMeas;

/// Selects which fields of [`Settings`] to write.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SettingsSelector(u8);

impl SettingsSelector {
    pub const OSRS_PRESSURE: SettingsSelector = SettingsSelector(1 << 0);
    pub const OSRS_TEMPERATURE: SettingsSelector = SettingsSelector(1 << 1);
    pub const OSRS_HUMIDITY: SettingsSelector = SettingsSelector(1 << 2);
    pub const FILTER: SettingsSelector = SettingsSelector(1 << 3);
    pub const STANDBY_TIME: SettingsSelector = SettingsSelector(1 << 4);
    pub const ALL: SettingsSelector = SettingsSelector(0b1_1111);

    const FILTER_STANDBY: u8 = 0b1_1000;

    /// Creates a new instance with nothing selected.
    pub fn new() -> Self {
        Self(0)
    }

    pub fn pressure_oversampling(mut self) -> Self {
        self.0 |= Self::OSRS_PRESSURE.0;

        self
    }

    pub fn temperature_oversampling(mut self) -> Self {
        self.0 |= Self::OSRS_TEMPERATURE.0;

        self
    }

    pub fn humidity_oversampling(mut self) -> Self {
        self.0 |= Self::OSRS_HUMIDITY.0;

        self
    }

    pub fn filter(mut self) -> Self {
        self.0 |= Self::FILTER.0;

        self
    }

    pub fn standby_time(mut self) -> Self {
        self.0 |= Self::STANDBY_TIME.0;

        self
    }

    /// Bits outside of [`SettingsSelector::ALL`] are dropped.
    pub fn from_bits(bits: u8) -> Self {
        Self(bits & Self::ALL.0)
    }

    pub fn bits(&self) -> u8 {
        self.0
    }

    pub fn contains(&self, other: SettingsSelector) -> bool {
        self.0 & other.0 == other.0 && other.0 != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    fn intersects(&self, mask: u8) -> bool {
        self.0 & mask != 0
    }

    pub(crate) fn touches_filter_standby(&self) -> bool {
        self.intersects(Self::FILTER_STANDBY)
    }
}

impl core::ops::BitOr for SettingsSelector {
    type Output = SettingsSelector;

    fn bitor(self, rhs: Self) -> Self::Output {
        SettingsSelector(self.0 | rhs.0)
    }
}

/// Writes the fields of `settings` named by `selector`.
///
/// Returns [`Outcome::InvalidSelector`] without touching the bus when the selector
/// names no field.
/// A failed transfer aborts immediately, registers written before it keep their new value.
pub(crate) fn apply<B: Bus>(
    bus: &mut B,
    selector: SettingsSelector,
    settings: &Settings,
) -> Bme280Result<Outcome, B::Error> {
    if selector.is_empty() {
        #[cfg(feature = "defmt")]
        defmt::warn!("settings selector {=u8:#x} selects nothing", selector.bits());
        return Ok(Outcome::InvalidSelector);
    }

    if selector.contains(SettingsSelector::OSRS_HUMIDITY) {
        apply_humidity(bus, settings)?;
    }

    if selector.intersects(SettingsSelector::OSRS_PRESSURE.0 | SettingsSelector::OSRS_TEMPERATURE.0) {
        apply_pressure_temperature(bus, selector, settings)?;
    }

    if selector.touches_filter_standby() {
        apply_filter_standby(bus, selector, settings)?;
    }

    Ok(Outcome::Ok)
}

fn apply_humidity<B: Bus>(bus: &mut B, settings: &Settings) -> Bme280Result<(), B::Error> {
    bus.write::<CtrlHum>(&CtrlHumFields { osrs_h: settings.osrs_h })?;

    // Latches the CTRL_HUM change
    let ctrl_meas = bus.read::<CtrlMeas>()?;
    bus.write::<CtrlMeas>(&ctrl_meas)
}

fn apply_pressure_temperature<B: Bus>(
    bus: &mut B,
    selector: SettingsSelector,
    settings: &Settings,
) -> Bme280Result<(), B::Error> {
    let mut ctrl_meas = bus.read::<CtrlMeas>()?;

    if selector.contains(SettingsSelector::OSRS_PRESSURE) {
        ctrl_meas.osrs_p = settings.osrs_p;
    }

    if selector.contains(SettingsSelector::OSRS_TEMPERATURE) {
        ctrl_meas.osrs_t = settings.osrs_t;
    }

    bus.write::<CtrlMeas>(&ctrl_meas)
}

fn apply_filter_standby<B: Bus>(
    bus: &mut B,
    selector: SettingsSelector,
    settings: &Settings,
) -> Bme280Result<(), B::Error> {
    let mut config = bus.read::<Config>()?;

    if selector.contains(SettingsSelector::FILTER) {
        config.filter = settings.filter;
    }

    if selector.contains(SettingsSelector::STANDBY_TIME) {
        config.t_sb = settings.standby_time;
    }

    bus.write::<Config>(&config)
}

/// Reads the current settings back from CTRL_HUM, CTRL_MEAS and CONFIG.
pub(crate) fn read<B: Bus>(bus: &mut B) -> Bme280Result<Settings, B::Error> {
    let ctrl_hum = bus.read::<CtrlHum>()?;
    let ctrl_meas = bus.read::<CtrlMeas>()?;
    let config = bus.read::<Config>()?;

    Ok(Settings::from_registers(&ctrl_hum, &ctrl_meas, &config))
}
