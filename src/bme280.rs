use crate::bus::{Bus, I2c, Spi};
use crate::calibration::CalibrationData;
use crate::compensation::{compensate, Components};
use crate::config::Settings;
use crate::error::{Bme280Error, Bme280Result, Outcome};
use crate::power;
use crate::register::ctrl_meas::PowerMode;
use crate::register::{chip_id, data, status, Readable, Writable};
use crate::sample::{CompensatedSample, RawSample};
use crate::settings::{self, SettingsSelector};
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::SevenBitAddress;

/// Type alias for a Bme280 chip communicating over I2C
pub type Bme280I2c<T> = Bme280<I2c<T>>;

/// Type alias for a Bme280 chip communicating over SPI
pub type Bme280Spi<T> = Bme280<Spi<T>>;

pub const BME280_CHIP_ID: u8 = 0x60;

/// CTRL_MEAS is polled this many times, 1 ms apart, once the maximum measurement time has passed.
const FORCED_READ_POLLS: u32 = 10;

/// Main Bme280 driver struct
///
/// The handle owns its bus but no global state, so any number of devices can be kept
/// side by side (pass `&mut bus` to borrow a bus instead, [`Bus`] is implemented for `&mut B`).
/// Every method is a complete register sequence: callers sharing a handle between
/// contexts must hold a lock for the whole call.
pub struct Bme280<B> {
    bus: B,
    chip_id: u8,
    settings: Settings,
    calibration_data: CalibrationData,
}

impl<T> Bme280I2c<T>
where
    T: embedded_hal::i2c::I2c,
{
    /// Constructs a new Bme280 driver instance that communicates over I2C
    ///
    /// This function will:
    /// - Check the chip id of the connected device.
    /// - Perform a soft reset.
    /// - Load calibration coefficients from NVM
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use embedded_hal::delay::DelayNs;
    /// # use embedded_hal::i2c::I2c;
    /// # use bme280_rs::Bme280Result;
    ///  use bme280_rs::{Bme280, SdoPinState};
    /// # fn demo<I: I2c, D: DelayNs>(i2c: I, mut delay: D) -> Bme280Result<(), I::Error> {
    ///
    ///  let device = Bme280::new_i2c(i2c, SdoPinState::Low, &mut delay)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new_i2c<D: DelayNs>(
        i2c: T,
        sdo_pin_state: SdoPinState,
        delay: &mut D,
    ) -> Bme280Result<Self, <I2c<T> as Bus>::Error> {
        Self::new(I2c::new(i2c, sdo_pin_state.into()), delay)
    }

    /// Releases the I2C peripheral.
    pub fn release_i2c(self) -> T {
        self.bus.release()
    }
}

impl<T> Bme280Spi<T>
where
    T: embedded_hal::spi::SpiDevice,
{
    /// Constructs a new Bme280 driver instance that communicates over SPI
    ///
    /// See [`Bme280::new_i2c`] for what happens during construction.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use embedded_hal::delay::DelayNs;
    /// # use embedded_hal::spi::SpiDevice;
    /// # use bme280_rs::Bme280Result;
    ///  use bme280_rs::Bme280;
    /// # fn demo<S: SpiDevice, D: DelayNs>(spi: S, mut delay: D) -> Bme280Result<(), S::Error> {
    ///
    ///  let device = Bme280::new_spi(spi, &mut delay)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new_spi<D: DelayNs>(spi: T, delay: &mut D) -> Bme280Result<Self, <Spi<T> as Bus>::Error> {
        Self::new(Spi::new(spi), delay)
    }

    /// Releases the SPI device.
    pub fn release_spi(self) -> T {
        self.bus.release()
    }
}

impl<B> Bme280<B>
where
    B: Bus,
{
    /// Creates a new instance of the Bme280 driver on any [`Bus`].
    ///
    /// Fails with [`Bme280Error::UnexpectedChipId`] if the chip id is not 0x60
    /// and with [`Bme280Error::NvmCopyFailed`] if the soft reset does not complete.
    pub fn new<D: DelayNs>(mut bus: B, delay: &mut D) -> Bme280Result<Self, B::Error> {
        let chip_id = bus.read::<chip_id::ChipId>()?;
        if chip_id != BME280_CHIP_ID {
            #[cfg(feature = "defmt")]
            defmt::warn!("unexpected chip id {=u8:#x}", chip_id);
            return Err(Bme280Error::UnexpectedChipId(chip_id));
        }

        power::soft_reset(&mut bus, delay)?;

        let calibration_data = CalibrationData::new(&mut bus)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("calibration loaded: {}", calibration_data);

        Ok(Bme280 {
            bus,
            chip_id,
            settings: Settings::default(),
            calibration_data,
        })
    }

    /// Read a register (or fixed-size register block) using a **typed marker**.
    ///
    /// You pass a marker type from [`crate::register`] (e.g. `register::ctrl_meas::CtrlMeas`)
    /// and get back its decoded value (`R::Out`).
    ///
    /// # Examples
    /// ```rust,no_run
    /// # use bme280_rs::{register, Bme280, Bme280Result};
    /// # use bme280_rs::bus::Bus;
    /// # fn demo<B: Bus>(mut device: Bme280<B>) -> Bme280Result<(), B::Error> {
    /// use bme280_rs::register::ctrl_meas::{CtrlMeas, CtrlMeasFields};
    /// let ctrl_meas: CtrlMeasFields = device.read::<CtrlMeas>()?;
    /// # Ok(()) }
    /// ```
    pub fn read<R: Readable>(&mut self) -> Bme280Result<R::Out, B::Error> {
        self.bus.read::<R>()
    }

    /// Write a register using a **typed marker**.
    ///
    /// No sequencing rules are applied, writing CTRL_HUM this way for example only
    /// takes effect after the next CTRL_MEAS write.
    pub fn write<W: Writable>(&mut self, v: &W::In) -> Bme280Result<(), B::Error> {
        self.bus.write::<W>(v)
    }

    /// Reads `buf.len()` consecutive registers starting at `addr`.
    pub fn read_registers(&mut self, addr: u8, buf: &mut [u8]) -> Bme280Result<(), B::Error> {
        self.bus.read_registers(addr, buf).map_err(Bme280Error::Bus)
    }

    /// Writes `data` to consecutive registers starting at `addr`.
    ///
    /// Returns [`Bme280Error::InvalidLength`] for an empty `data`.
    pub fn write_registers(&mut self, addr: u8, data: &[u8]) -> Bme280Result<(), B::Error> {
        if data.is_empty() {
            return Err(Bme280Error::InvalidLength);
        }

        self.bus.write_registers(addr, data).map_err(Bme280Error::Bus)
    }

    /// Chip id read during construction.
    pub fn chip_id(&self) -> u8 {
        self.chip_id
    }

    pub fn is_connected(&mut self) -> Bme280Result<bool, B::Error> {
        let id = self.bus.read::<chip_id::ChipId>()?;

        Ok(id == BME280_CHIP_ID)
    }

    pub fn status(&mut self) -> Bme280Result<status::StatusFlags, B::Error> {
        self.bus.read::<status::Status>()
    }

    pub fn calibration(&self) -> &CalibrationData {
        &self.calibration_data
    }

    /// The settings as last written or loaded. May be stale if registers were written directly.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Re-reads the settings from the device and caches them.
    pub fn load_settings(&mut self) -> Bme280Result<Settings, B::Error> {
        self.settings = settings::read(&mut self.bus)?;

        Ok(self.settings)
    }

    /// Writes the fields of `desired` named by `selector`.
    ///
    /// If the device is not sleeping it is put to sleep first (see [`Bme280::set_mode`])
    /// and stays asleep. The cached settings only change once every selected field was written.
    ///
    /// Returns [`Outcome::InvalidSelector`] without any bus access if `selector` names no field.
    pub fn set_settings<D: DelayNs>(
        &mut self,
        selector: SettingsSelector,
        desired: &Settings,
        delay: &mut D,
    ) -> Bme280Result<Outcome, B::Error> {
        if selector.is_empty() {
            #[cfg(feature = "defmt")]
            defmt::warn!("settings selector selects nothing, device left untouched");
            return Ok(Outcome::InvalidSelector);
        }

        let merged = merge(self.settings, selector, desired);

        if power::mode(&mut self.bus)? != PowerMode::Sleep {
            power::put_to_sleep(&mut self.bus, delay)?;
        }

        let outcome = settings::apply(&mut self.bus, selector, &merged)?;
        self.settings = merged;

        Ok(outcome)
    }

    /// Soft resets the device. All settings return to their reset values.
    pub fn soft_reset<D: DelayNs>(&mut self, delay: &mut D) -> Bme280Result<(), B::Error> {
        power::soft_reset(&mut self.bus, delay)?;
        self.settings = Settings::default();

        Ok(())
    }

    pub fn mode(&mut self) -> Bme280Result<PowerMode, B::Error> {
        power::mode(&mut self.bus)
    }

    /// Changes the power mode.
    ///
    /// Leaving Normal (or an unfinished Forced) mode needs a soft reset, the settings are
    /// read back before it and restored after it. A failure in between can leave the device
    /// reset with its settings lost, retrying the whole call restores them.
    pub fn set_mode<D: DelayNs>(&mut self, mode: PowerMode, delay: &mut D) -> Bme280Result<(), B::Error> {
        power::set_mode(&mut self.bus, delay, mode)
    }

    /// Reads the data registers and compensates the selected quantities.
    ///
    /// The power mode is left untouched. In Sleep mode this returns the last measurement.
    pub fn read_sensor_data(&mut self, components: Components) -> Bme280Result<CompensatedSample, B::Error> {
        let raw = self.read_raw_data()?;

        Ok(compensate(components, &raw, &mut self.calibration_data))
    }

    pub fn read_raw_data(&mut self) -> Bme280Result<RawSample, B::Error> {
        self.bus.read::<data::Data>()
    }

    /// Triggers a single measurement and returns it compensated.
    ///
    /// Waits [`max_measurement_time_us`](Self::max_measurement_time_us) and then polls until the
    /// device is back in Sleep mode, failing with [`Bme280Error::MeasurementTimeout`] if it does not
    /// return. The device is in Sleep mode when this returns successfully.
    pub fn forced_read<D: DelayNs>(
        &mut self,
        components: Components,
        delay: &mut D,
    ) -> Bme280Result<CompensatedSample, B::Error> {
        power::set_mode(&mut self.bus, delay, PowerMode::Forced)?;

        delay.delay_us(self.max_measurement_time_us());

        for _ in 0..FORCED_READ_POLLS {
            if power::mode(&mut self.bus)? == PowerMode::Sleep {
                return self.read_sensor_data(components);
            }

            delay.delay_ms(1);
        }

        #[cfg(feature = "defmt")]
        defmt::warn!("device did not return to sleep after a forced measurement");

        Err(Bme280Error::MeasurementTimeout)
    }

    /// Maximum measurement time in microseconds for the cached settings.
    pub fn max_measurement_time_us(&self) -> u32 {
        self.settings.max_measurement_time_us()
    }

    /// Takes a snapshot of the device: identity, mode, settings read back from the
    /// registers and a forced reading of all quantities.
    pub fn info<D: DelayNs>(&mut self, delay: &mut D) -> Bme280Result<DeviceInfo, B::Error> {
        let settings = self.load_settings()?;
        let mode = self.mode()?;
        let sample = self.forced_read(Components::ALL, delay)?;

        Ok(DeviceInfo {
            chip_id: self.chip_id,
            mode,
            settings,
            sample,
        })
    }

    /// Consumes the driver and returns the bus.
    pub fn release(self) -> B {
        self.bus
    }
}

fn merge(current: Settings, selector: SettingsSelector, desired: &Settings) -> Settings {
    let mut merged = current;

    if selector.contains(SettingsSelector::OSRS_PRESSURE) {
        merged.osrs_p = desired.osrs_p;
    }
    if selector.contains(SettingsSelector::OSRS_TEMPERATURE) {
        merged.osrs_t = desired.osrs_t;
    }
    if selector.contains(SettingsSelector::OSRS_HUMIDITY) {
        merged.osrs_h = desired.osrs_h;
    }
    if selector.contains(SettingsSelector::FILTER) {
        merged.filter = desired.filter;
    }
    if selector.contains(SettingsSelector::STANDBY_TIME) {
        merged.standby_time = desired.standby_time;
    }

    merged
}

/// Snapshot returned by [`Bme280::info`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceInfo {
    pub chip_id: u8,
    /// Mode before the forced reading was taken.
    pub mode: PowerMode,
    pub settings: Settings,
    pub sample: CompensatedSample,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SdoPinState {
    High,
    Low,
}

impl From<SdoPinState> for SevenBitAddress {
    fn from(state: SdoPinState) -> SevenBitAddress {
        match state {
            SdoPinState::High => 0x77,
            SdoPinState::Low => 0x76,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Preset;
    use crate::register::config::{FilterCoefficient, StandbyTime};
    use crate::register::ctrl_meas::Oversampling;
    use crate::testing::{Access, FakeBus, FakeDelay};

    const CTRL_HUM: u8 = 0xF2;
    const STATUS: u8 = 0xF3;
    const CTRL_MEAS: u8 = 0xF4;
    const CONFIG: u8 = 0xF5;
    const DATA: u8 = 0xF7;

    const REFERENCE_BURST: [u8; 8] = [0x65, 0x5A, 0xC0, 0x7E, 0xED, 0x00, 0x75, 0x30];

    fn device(bus: &mut FakeBus) -> Bme280<&mut FakeBus> {
        Bme280::new(bus, &mut FakeDelay::new()).unwrap()
    }

    #[test]
    fn new_checks_id_resets_and_loads_calibration() {
        let mut bus = FakeBus::bme280();
        bus.set(CTRL_MEAS, 0x27);
        let mut delay = FakeDelay::new();

        let device = Bme280::new(&mut bus, &mut delay).unwrap();

        assert_eq!(0x60, device.chip_id());
        assert_eq!(27504, device.calibration().dig_t1);
        assert_eq!(Settings::default(), *device.settings());
        assert_eq!(
            &[
                Access::Read(0xD0, 1),
                Access::Write(0xE0, 0xB6),
                Access::Read(STATUS, 1),
                Access::Read(0x88, 26),
                Access::Read(0xE1, 7),
            ],
            bus.log()
        );
        assert_eq!(0, bus.get(CTRL_MEAS));
    }

    #[test]
    fn new_rejects_other_chips() {
        let mut bus = FakeBus::bme280();
        bus.set(0xD0, 0x58);
        let mut delay = FakeDelay::new();

        let result = Bme280::new(&mut bus, &mut delay);

        assert!(matches!(result, Err(Bme280Error::UnexpectedChipId(0x58))));
        assert_eq!(&[(0xD0, 1)], bus.reads());
        assert!(bus.writes().is_empty());
    }

    #[test]
    fn new_fails_when_nvm_copy_never_finishes() {
        let mut bus = FakeBus::bme280().with_nvm_busy_polls(usize::MAX);
        let mut delay = FakeDelay::new();

        let result = Bme280::new(&mut bus, &mut delay);

        assert!(matches!(result, Err(Bme280Error::NvmCopyFailed)));
        assert_eq!(&[2_000_000; 5], delay.delays_ns());
    }

    #[test]
    fn write_registers_rejects_empty_data() {
        let mut bus = FakeBus::bme280();
        let mut device = device(&mut bus);

        let result = device.write_registers(CONFIG, &[]);

        assert!(matches!(result, Err(Bme280Error::InvalidLength)));
        assert_eq!(-2, result.unwrap_err().code());
    }

    #[test]
    fn raw_register_access() {
        let mut bus = FakeBus::bme280();
        let mut device = device(&mut bus);

        device.write_registers(CTRL_HUM, &[0x01]).unwrap();
        let mut buf = [0u8; 2];
        device.read_registers(0xD0, &mut buf[..1]).unwrap();

        assert_eq!(0x60, buf[0]);
        drop(device);
        assert_eq!(0x01, bus.get(CTRL_HUM));
    }

    #[test]
    fn set_settings_humidity_only_keeps_pressure_temperature() {
        let mut bus = FakeBus::bme280();
        let mut device = device(&mut bus);
        let mut delay = FakeDelay::new();

        device
            .set_settings(SettingsSelector::ALL, &Settings::from_preset(Preset::Gaming), &mut delay)
            .unwrap();
        let status = device
            .set_settings(
                SettingsSelector::OSRS_HUMIDITY,
                &Settings::default().humidity_oversampling(Oversampling::X8),
                &mut delay,
            )
            .unwrap();

        assert_eq!(Outcome::Ok, status);
        let settings = *device.settings();
        assert_eq!(Oversampling::X4, settings.osrs_p());
        assert_eq!(Oversampling::X1, settings.osrs_t());
        assert_eq!(Oversampling::X8, settings.osrs_h());
        assert_eq!(settings, device.load_settings().unwrap());
    }

    #[test]
    fn set_settings_in_normal_mode_sleeps_first() {
        let mut bus = FakeBus::bme280();
        let mut device = device(&mut bus);
        let mut delay = FakeDelay::new();

        device
            .set_settings(SettingsSelector::ALL, &Settings::from_preset(Preset::Indoor), &mut delay)
            .unwrap();
        device.set_mode(PowerMode::Normal, &mut delay).unwrap();
        device
            .set_settings(
                SettingsSelector::STANDBY_TIME,
                &Settings::default().standby_time(StandbyTime::Ms250),
                &mut delay,
            )
            .unwrap();

        assert_eq!(PowerMode::Sleep, device.mode().unwrap());
        let settings = device.load_settings().unwrap();
        assert_eq!(Settings::from_preset(Preset::Indoor).standby_time(StandbyTime::Ms250), settings);
        assert_eq!(&[2_000_000], delay.delays_ns());
    }

    #[test]
    fn set_settings_with_empty_selector_leaves_device_alone() {
        let mut bus = FakeBus::bme280();
        let mut device = device(&mut bus);
        let mut delay = FakeDelay::new();
        device
            .set_settings(SettingsSelector::ALL, &Settings::from_preset(Preset::Indoor), &mut delay)
            .unwrap();
        device.set_mode(PowerMode::Normal, &mut delay).unwrap();
        device.bus.clear_log();

        let status = device
            .set_settings(SettingsSelector::new(), &Settings::from_preset(Preset::Gaming), &mut delay)
            .unwrap();

        assert_eq!(Outcome::InvalidSelector, status);
        assert_eq!(1, status.code());
        assert!(device.bus.log().is_empty());
        assert!(delay.delays_ns().is_empty());
        assert_eq!(Settings::from_preset(Preset::Indoor), *device.settings());
        assert_eq!(PowerMode::Normal, device.mode().unwrap());
    }

    #[test]
    fn set_settings_keeps_cache_when_a_write_fails() {
        let mut bus = FakeBus::bme280();
        let mut device = device(&mut bus);
        let mut delay = FakeDelay::new();
        device.bus.fail_on(Some(CONFIG));

        let result = device.set_settings(SettingsSelector::ALL, &Settings::from_preset(Preset::Indoor), &mut delay);

        assert!(matches!(result, Err(Bme280Error::Bus(()))));
        assert_eq!(Settings::default(), *device.settings());
        // Oversampling reached the device before the CONFIG access failed
        assert_eq!(0b0101_0100, device.bus.get(CTRL_MEAS));
    }

    #[test]
    fn read_sensor_data_compensates_burst() {
        let mut bus = FakeBus::bme280();
        bus.set_block(DATA, &REFERENCE_BURST);
        let mut device = device(&mut bus);

        let sample = device.read_sensor_data(Components::ALL).unwrap();

        assert_eq!(CompensatedSample { pressure: 100654, temperature: 2508, humidity: 56317 }, sample);
        assert_eq!(128423, device.calibration().t_fine());
    }

    #[test]
    fn forced_read_from_sleep() {
        let mut bus = FakeBus::bme280().with_forced_polls(2);
        bus.set_block(DATA, &REFERENCE_BURST);
        let mut device = device(&mut bus);
        let mut delay = FakeDelay::new();
        device
            .set_settings(SettingsSelector::ALL, &Settings::from_preset(Preset::WeatherMonitoring), &mut delay)
            .unwrap();

        let sample = device.forced_read(Components::ALL, &mut delay).unwrap();

        assert_eq!(CompensatedSample { pressure: 100654, temperature: 2508, humidity: 56317 }, sample);
        assert_eq!(PowerMode::Sleep, device.mode().unwrap());
        // Maximum measurement time, then two polls still measuring
        assert_eq!(&[9_300_000, 1_000_000, 1_000_000], delay.delays_ns());
    }

    #[test]
    fn forced_read_from_normal_ends_in_sleep() {
        let mut bus = FakeBus::bme280();
        bus.set_block(DATA, &REFERENCE_BURST);
        let mut device = device(&mut bus);
        let mut delay = FakeDelay::new();
        device
            .set_settings(SettingsSelector::ALL, &Settings::from_preset(Preset::Indoor), &mut delay)
            .unwrap();
        device.set_mode(PowerMode::Normal, &mut delay).unwrap();

        let sample = device.forced_read(Components::PRESSURE, &mut delay).unwrap();

        assert_eq!(100654, sample.pressure);
        assert_eq!(PowerMode::Sleep, device.mode().unwrap());
        assert_eq!(Settings::from_preset(Preset::Indoor), device.load_settings().unwrap());
    }

    #[test]
    fn forced_read_from_forced_ends_in_sleep() {
        let mut bus = FakeBus::bme280().with_forced_polls(3);
        bus.set_block(DATA, &REFERENCE_BURST);
        let mut device = device(&mut bus);
        let mut delay = FakeDelay::new();
        let settings = Settings::from_preset(Preset::WeatherMonitoring);
        device.set_settings(SettingsSelector::ALL, &settings, &mut delay).unwrap();
        // Caught in the middle of a forced measurement
        let ctrl_meas = device.bus.get(CTRL_MEAS);
        device.bus.set(CTRL_MEAS, ctrl_meas | 0b01);

        let sample = device.forced_read(Components::ALL, &mut delay).unwrap();

        assert_eq!(CompensatedSample { pressure: 100654, temperature: 2508, humidity: 56317 }, sample);
        assert_eq!(PowerMode::Sleep, device.mode().unwrap());
        assert_eq!(settings, device.load_settings().unwrap());
        // Soft reset, maximum measurement time, then three polls still measuring
        assert_eq!(&[2_000_000, 9_300_000, 1_000_000, 1_000_000, 1_000_000], delay.delays_ns());
    }

    #[test]
    fn forced_read_times_out() {
        let mut bus = FakeBus::bme280().with_forced_polls(usize::MAX);
        let mut device = device(&mut bus);
        let mut delay = FakeDelay::new();

        let result = device.forced_read(Components::ALL, &mut delay);

        assert!(matches!(result, Err(Bme280Error::MeasurementTimeout)));
        assert_eq!(1 + FORCED_READ_POLLS as usize, delay.delays_ns().len());
    }

    #[test]
    fn forced_read_surfaces_transport_failure() {
        let mut bus = FakeBus::bme280();
        bus.fail_on(Some(DATA));
        let mut device = device(&mut bus);
        let mut delay = FakeDelay::new();

        let result = device.forced_read(Components::ALL, &mut delay);

        assert!(matches!(result, Err(Bme280Error::Bus(()))));
        assert_eq!(-3, result.unwrap_err().code());
    }

    #[test]
    fn info_reports_mode_before_reading() {
        let mut bus = FakeBus::bme280();
        bus.set_block(DATA, &REFERENCE_BURST);
        let mut device = device(&mut bus);
        let mut delay = FakeDelay::new();
        let settings = Settings::from_preset(Preset::HumiditySensing)
            .filter_coefficient(FilterCoefficient::X2);
        device.set_settings(SettingsSelector::ALL, &settings, &mut delay).unwrap();
        device.set_mode(PowerMode::Normal, &mut delay).unwrap();

        let info = device.info(&mut delay).unwrap();

        assert_eq!(0x60, info.chip_id);
        assert_eq!(PowerMode::Normal, info.mode);
        assert_eq!(settings, info.settings);
        assert_eq!(56317, info.sample.humidity);
    }

    #[test]
    fn sdo_pin_selects_address() {
        assert_eq!(0x76, SevenBitAddress::from(SdoPinState::Low));
        assert_eq!(0x77, SevenBitAddress::from(SdoPinState::High));
    }
}
