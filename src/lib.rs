//! This is a platform-agnostic Rust driver for the Sensirion SHT40-AD1B, SHT40-BD1B, SHT41-AD1B
//! and SHT45-AD1B digital humidity and temperature sensors using the [`embedded-hal`] or
//! [`embedded-hal-async`] traits.
//!
//! [`embedded-hal`]: https://github.com/rust-embedded/embedded-hal/tree/master/embedded-hal
//! [`embedded-hal-async`]: https://github.com/rust-embedded/embedded-hal/tree/master/embedded-hal-async
//!
//! This driver allows you to:
//! - Read temperature (°C and °F) and relative humidity at high, medium or lowest precision.
//! - Average several measurements taken 100ms apart.
//! - Fire the on-chip heater at 200mW, 110mW or 20mW for 1s or 0.1s.
//! - Trigger a software reset.
//! - Read the device serial number.
//! - Select the sensor variant, which fixes the I²C address (0x44 or 0x45).
//! - blocking API support.
//! - async API support.
//!
//! The bus is reached through the [`Transport`] / [`AsyncTransport`] traits. [`I2cTransport`]
//! implements both on top of an `embedded-hal` I²C bus; other buses can implement them directly.
//!
//! ## Features
//!
//! - `async`: Enables async API.
//! - `blocking`: Enables blocking API and the [`Sht4xBasic`] facade.
//! - `crc`: Checks received CRC against computed CRC.
//! - `defmt`: Enables logging using the `defmt` framework.
//! - `log`: Enables logging using the `log` framework.
//!
//! ## Supported devices: SHT40-AD1B, SHT40-BD1B, SHT41-AD1B, SHT45-AD1B
//!
//! The SHT4x is a digital humidity and temperature sensor with an I²C interface. It runs from
//! 1.8 V to 3.6 V, measures from -40 °C to 125 °C and 0 %RH to 100 %RH, and carries a heater
//! that can drive off condensation. Every 16-bit word it returns is followed by a CRC-8.
//!
//! Datasheet:
//!   [SHT4x](https://sensirion.com/media/documents/33FD6951/6555C40E/Sensirion_Datasheet_SHT4x.pdf)
//!
//! To use this driver, import this crate and an `embedded_hal` or `embedded_hal_async`
//! implementation, then instantiate the device.
//!
//! ## Blocking Example:
//!
//! ```ignore
//! use sht4x_driver::{I2cTransport, Precision, Sht4xBasic, Variant};
//!
//! // Platform-specific
//! let i2c = /* embedded_hal::i2c::I2c instance */;
//! let delay = /* embedded_hal::delay::DelayNs instance */;
//!
//! let mut sht = Sht4xBasic::new();
//! sht.initialize(I2cTransport::new(i2c), delay, Variant::Sht40Ad1b).unwrap();
//!
//! let m = sht.temperature_humidity(Precision::High).unwrap();
//! println!("{:0.1} %RH, {:0.1} °C", m.humidity, m.temperature_c);
//!
//! let m = sht.temperature_humidity_averaged(Precision::High, 8).unwrap();
//! println!("mean of 8: {:0.1} %RH, {:0.1} °C", m.humidity, m.temperature_c);
//!
//! println!("serial number: {}", sht.serial_number().unwrap());
//! ```
//!
//! ## Async Example:
//!
//! ```ignore
//! use sht4x_driver::{HeaterPower, I2cTransport, Precision, Sht4xAsync, Variant};
//!
//! // Platform-specific
//! let i2c = /* embedded_hal_async::i2c::I2c instance */;
//! let delay = /* embedded_hal_async::delay::DelayNs instance */;
//!
//! let mut sht = Sht4xAsync::with_capabilities(I2cTransport::new(i2c), delay);
//! sht.init().await.unwrap();
//! sht.set_variant(Variant::Sht41Ad1b).unwrap();
//! sht.set_address().unwrap();
//!
//! let m = sht.measure(Precision::Medium).await.unwrap();
//! println!("{:0.1} %RH, {:0.1} °F", m.humidity, m.temperature_f);
//!
//! // Drive off condensation; the reading is taken at the end of the pulse
//! let m = sht.activate_heater(HeaterPower::Power110mW1s).await.unwrap();
//! println!("after heating: {:0.1} °C", m.temperature_c);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![cfg_attr(not(test), no_std)]

#[cfg(not(any(feature = "async", feature = "blocking")))]
compile_error!("At least one of \"async\" and \"blocking\" features must be enabled");

#[cfg(all(feature = "defmt", feature = "log"))]
compile_error!("Features \"defmt\" and \"log\" are mutually exclusive and cannot be enabled together");

#[macro_use]
mod fmt;

#[cfg(feature = "blocking")]
mod basic;
#[cfg(feature = "blocking")]
mod device_impl;
#[cfg(feature = "async")]
mod device_impl_async;
mod handle;
mod hw_def;
#[cfg(test)]
mod test_support;
mod transport;
mod types;

#[cfg(feature = "blocking")]
pub use crate::basic::*;
pub use crate::{hw_def::*, transport::*, types::*};
