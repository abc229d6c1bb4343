//! Power mode transitions and soft reset.
//!
//! CONFIG and CTRL_MEAS writes are only reliable in Sleep mode, and the only way
//! to force the chip out of Normal mode is a soft reset. Leaving a non-sleep mode
//! therefore snapshots the settings, resets, and writes the snapshot back.

use crate::bus::Bus;
use crate::error::{Bme280Error, Bme280Result};
use crate::register::ctrl_meas::{CtrlMeas, PowerMode};
use crate::register::reset::{Reset, ResetCommand};
use crate::register::status::Status;
use crate::settings::{self, SettingsSelector};
use embedded_hal::delay::DelayNs;

/// STATUS.im_update is polled this many times after a soft reset.
pub const SOFT_RESET_POLLS: usize = 5;
/// Start-up time from the datasheet, waited before every poll.
pub const SOFT_RESET_POLL_INTERVAL_MS: u32 = 2;

pub(crate) fn mode<B: Bus>(bus: &mut B) -> Bme280Result<PowerMode, B::Error> {
    Ok(bus.read::<CtrlMeas>()?.mode)
}

/// Issues a soft reset and waits for the NVM copy to finish.
///
/// All control registers are back at their reset values afterwards.
pub(crate) fn soft_reset<B: Bus, D: DelayNs>(bus: &mut B, delay: &mut D) -> Bme280Result<(), B::Error> {
    bus.write::<Reset>(&ResetCommand::SoftReset)?;

    for _ in 0..SOFT_RESET_POLLS {
        delay.delay_ms(SOFT_RESET_POLL_INTERVAL_MS);

        if !bus.read::<Status>()?.nvm_update_in_progress() {
            return Ok(());
        }
    }

    #[cfg(feature = "defmt")]
    defmt::warn!("NVM copy still running after {=usize} polls", SOFT_RESET_POLLS);

    Err(Bme280Error::NvmCopyFailed)
}

/// Brings the device into Sleep mode while keeping its settings.
pub(crate) fn put_to_sleep<B: Bus, D: DelayNs>(bus: &mut B, delay: &mut D) -> Bme280Result<(), B::Error> {
    let snapshot = settings::read(bus)?;

    #[cfg(feature = "defmt")]
    defmt::debug!("putting device to sleep, restoring {}", snapshot);

    soft_reset(bus, delay)?;

    // The selector is ALL, the status cannot be a warning
    let _ = settings::apply(bus, SettingsSelector::ALL, &snapshot)?;

    Ok(())
}

/// Writes `mode`, going through Sleep first if the device is not sleeping.
pub(crate) fn set_mode<B: Bus, D: DelayNs>(
    bus: &mut B,
    delay: &mut D,
    mode: PowerMode,
) -> Bme280Result<(), B::Error> {
    if self::mode(bus)? != PowerMode::Sleep {
        put_to_sleep(bus, delay)?;
    }

    write_mode(bus, mode)
}

fn write_mode<B: Bus>(bus: &mut B, mode: PowerMode) -> Bme280Result<(), B::Error> {
    let mut ctrl_meas = bus.read::<CtrlMeas>()?;
    ctrl_meas.mode = mode;

    bus.write::<CtrlMeas>(&ctrl_meas)
}
