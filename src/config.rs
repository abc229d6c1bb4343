use crate::register::config::{ConfigFields, FilterCoefficient, StandbyTime};
use crate::register::ctrl_hum::CtrlHumFields;
use crate::register::ctrl_meas::{CtrlMeasFields, Oversampling};

/// Acquisition settings of the device: oversampling per channel, IIR filter and standby time.
///
/// The driver keeps a copy of the last settings it wrote or read back, see
/// [`Bme280::settings`](crate::Bme280::settings). The power mode is not part of the settings,
/// it is controlled separately through [`Bme280::set_mode`](crate::Bme280::set_mode).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Settings {
    pub(crate) osrs_p: Oversampling,
    pub(crate) osrs_t: Oversampling,
    pub(crate) osrs_h: Oversampling,
    pub(crate) filter: FilterCoefficient,
    pub(crate) standby_time: StandbyTime,
}

impl Default for Settings {
    /// Power-on reset values: all measurements skipped, filter off.
    fn default() -> Self {
        Self {
            osrs_p: Oversampling::Skipped,
            osrs_t: Oversampling::Skipped,
            osrs_h: Oversampling::Skipped,
            filter: FilterCoefficient::Off,
            standby_time: StandbyTime::Ms0_5,
        }
    }
}

impl Settings {
    pub fn pressure_oversampling(mut self, oversampling: Oversampling) -> Self {
        self.osrs_p = oversampling;

        self
    }

    /// Temperature is always compensated when anything is read, so skipping it
    /// leaves pressure and humidity compensation working on a stale value.
    pub fn temperature_oversampling(mut self, oversampling: Oversampling) -> Self {
        self.osrs_t = oversampling;

        self
    }

    pub fn humidity_oversampling(mut self, oversampling: Oversampling) -> Self {
        self.osrs_h = oversampling;

        self
    }

    pub fn filter_coefficient(mut self, filter: FilterCoefficient) -> Self {
        self.filter = filter;

        self
    }

    pub fn standby_time(mut self, standby_time: StandbyTime) -> Self {
        self.standby_time = standby_time;

        self
    }

    pub fn osrs_p(&self) -> Oversampling {
        self.osrs_p
    }

    pub fn osrs_t(&self) -> Oversampling {
        self.osrs_t
    }

    pub fn osrs_h(&self) -> Oversampling {
        self.osrs_h
    }

    pub fn filter(&self) -> FilterCoefficient {
        self.filter
    }

    pub fn standby(&self) -> StandbyTime {
        self.standby_time
    }

    /// Settings recommended by the datasheet (section 3.5) for a use case.
    pub fn from_preset(p: Preset) -> Self {
        match p {
            Preset::WeatherMonitoring => Settings::default()
                .pressure_oversampling(Oversampling::X1)
                .temperature_oversampling(Oversampling::X1)
                .humidity_oversampling(Oversampling::X1),
            Preset::HumiditySensing => Settings::default()
                .temperature_oversampling(Oversampling::X1)
                .humidity_oversampling(Oversampling::X1),
            Preset::Indoor => Settings::default()
                .pressure_oversampling(Oversampling::X16)
                .temperature_oversampling(Oversampling::X2)
                .humidity_oversampling(Oversampling::X1)
                .filter_coefficient(FilterCoefficient::X16),
            Preset::Gaming => Settings::default()
                .pressure_oversampling(Oversampling::X4)
                .temperature_oversampling(Oversampling::X1)
                .filter_coefficient(FilterCoefficient::X16),
        }
    }

    /// Rebuilds the settings from the three control registers.
    pub(crate) fn from_registers(ctrl_hum: &CtrlHumFields, ctrl_meas: &CtrlMeasFields, config: &ConfigFields) -> Self {
        Self {
            osrs_p: ctrl_meas.osrs_p,
            osrs_t: ctrl_meas.osrs_t,
            osrs_h: ctrl_hum.osrs_h,
            filter: config.filter,
            standby_time: config.t_sb,
        }
    }

    /// Maximum duration of one measurement in microseconds, per datasheet appendix B.
    ///
    /// Channels that are skipped do not contribute.
    pub fn max_measurement_time_us(&self) -> u32 {
        let mut time = 1250 + 2300 * self.osrs_t.factor();

        if self.osrs_p != Oversampling::Skipped {
            time += 2300 * self.osrs_p.factor() + 575;
        }

        if self.osrs_h != Oversampling::Skipped {
            time += 2300 * self.osrs_h.factor() + 575;
        }

        time
    }
}

/// Datasheet use-case recommendations.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Preset {
    /// Forced mode once a minute, no filtering.
    WeatherMonitoring,
    /// Forced mode once a second, pressure skipped.
    HumiditySensing,
    /// Normal mode with heavy pressure oversampling and filtering for indoor navigation.
    Indoor,
    /// Normal mode tuned for fast, filtered pressure readings.
    Gaming,
}
