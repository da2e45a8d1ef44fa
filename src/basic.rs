//! Convenience layer over one [`Sht4x`] handle.
//!
//! A [`Sht4xBasic`] owns exactly one device. Every entry point forwards to the handle it owns, so
//! several sensors on separate buses are driven through separate `Sht4xBasic` values.

use crate::hw_def::*;
use crate::transport::Transport;
use crate::types::*;

use embedded_hal::delay::DelayNs;

/// Owned single-device driver with one-call initialization and averaged measurements
#[derive(Debug)]
pub struct Sht4xBasic<T, D> {
    handle: Option<Sht4x<T, D>>,
}

impl<T, D> Default for Sht4xBasic<T, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, D> Sht4xBasic<T, D> {
    /// Create a facade without a device; everything but `initialize` reports [`Error::NullHandle`]
    pub const fn new() -> Self {
        Self { handle: None }
    }

    /// Take the device handle out of the facade
    pub fn release(&mut self) -> Option<Sht4x<T, D>> {
        self.handle.take()
    }
}

impl<T, D, E> Sht4xBasic<T, D>
where
    T: Transport<Error = E>,
    D: DelayNs,
{
    fn handle(&mut self) -> Result<&mut Sht4x<T, D>, Error<E>> {
        self.handle.as_mut().ok_or(Error::NullHandle)
    }

    fn handle_ref(&self) -> Result<&Sht4x<T, D>, Error<E>> {
        self.handle.as_ref().ok_or(Error::NullHandle)
    }

    /// Link `transport` and `delay` into a new handle, initialize it for `variant` and wait for
    /// the device to settle.
    ///
    /// A handle already held by the facade is dropped. When initialization fails the new handle
    /// is kept uninitialized, so [`Self::release`] can still return the bus.
    pub fn initialize(&mut self, transport: T, delay: D, variant: Variant) -> Result<(), Error<E>> {
        let handle = self.handle.insert(Sht4x::with_capabilities(transport, delay));
        handle.init()?;
        handle.set_variant(variant)?;
        handle.set_address()?;
        handle.delay_ms(INIT_SETTLE_DELAY_MS)
    }

    /// Release the bus; see [`Sht4x::deinit`]
    pub fn deinit(&mut self) -> Result<(), Error<E>> {
        self.handle()?.deinit()
    }

    /// Measure temperature and relative humidity once
    pub fn temperature_humidity(&mut self, precision: Precision) -> Result<Measurement, Error<E>> {
        self.handle()?.measure(precision)
    }

    /// Average `samples` consecutive measurements taken 100ms apart.
    ///
    /// Any failed sample fails the whole call. The `raw` field holds the last sample's bytes.
    pub fn temperature_humidity_averaged(
        &mut self,
        precision: Precision,
        samples: u8,
    ) -> Result<Measurement, Error<E>> {
        let handle = self.handle()?;
        if samples == 0 {
            return Err(Error::InvalidInputData);
        }

        let mut temperature_c = 0f64;
        let mut temperature_f = 0f64;
        let mut humidity = 0f64;
        let mut raw = [0u8; RESPONSE_LEN];
        for ii in 0..samples {
            if ii > 0 {
                handle.delay_ms(AVERAGING_INTERVAL_MS)?;
            }
            let sample = handle.measure(precision)?;
            temperature_c += f64::from(sample.temperature_c);
            temperature_f += f64::from(sample.temperature_f);
            humidity += f64::from(sample.humidity);
            raw = sample.raw;
        }

        let n = f64::from(samples);
        Ok(Measurement {
            temperature_c: (temperature_c / n) as f32,
            temperature_f: (temperature_f / n) as f32,
            humidity: (humidity / n) as f32,
            raw,
        })
    }

    /// Read the serial number
    pub fn serial_number(&mut self) -> Result<SerialNumber, Error<E>> {
        self.handle()?.serial_number()
    }

    /// Fire the heater; see [`Sht4x::activate_heater`]
    pub fn activate_heater(&mut self, power: HeaterPower) -> Result<Measurement, Error<E>> {
        self.handle()?.activate_heater(power)
    }

    /// software reset
    pub fn soft_reset(&mut self) -> Result<(), Error<E>> {
        self.handle()?.soft_reset()
    }

    /// Get the bus address in use
    pub fn address(&self) -> Result<I2cAddr, Error<E>> {
        self.handle_ref()?.address()
    }

    /// Re-apply the address resolved from the current variant
    pub fn set_address(&mut self) -> Result<(), Error<E>> {
        self.handle()?.set_address()
    }

    /// Get the selected sensor variant
    pub fn variant(&self) -> Result<Variant, Error<E>> {
        self.handle_ref()?.variant()
    }

    /// Switch to another sensor variant and start using its bus address
    pub fn set_variant(&mut self, variant: Variant) -> Result<(), Error<E>> {
        let handle = self.handle()?;
        handle.set_variant(variant)?;
        handle.set_address()
    }
}
