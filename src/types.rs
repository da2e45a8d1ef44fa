use crate::hw_def::*;

use core::fmt;

#[cfg(feature = "defmt")]
use defmt::Format;

/// Lifecycle state shared by the blocking and async handles
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct HandleState {
    pub(crate) variant: Variant,
    /// address looked up from `variant`
    pub(crate) resolved_addr: I2cAddr,
    /// address used on the bus
    pub(crate) i2c_addr: I2cAddr,
    pub(crate) initialized: bool,
}

/// SHT4x device handle using the blocking [`crate::Transport`] and [`embedded_hal::delay::DelayNs`]
#[cfg(feature = "blocking")]
#[derive(Debug)]
pub struct Sht4x<T, D> {
    pub(crate) transport: Option<T>,
    pub(crate) delay: Option<D>,
    pub(crate) state: HandleState,
}

/// SHT4x device handle using [`crate::AsyncTransport`] and [`embedded_hal_async::delay::DelayNs`]
#[cfg(feature = "async")]
#[derive(Debug)]
pub struct Sht4xAsync<T, D> {
    pub(crate) transport: Option<T>,
    pub(crate) delay: Option<D>,
    pub(crate) state: HandleState,
}

/// All possible errors in this crate
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Debug)]
pub enum Error<E> {
    /// The facade holds no device handle
    NullHandle,
    /// Transport or delay was not linked before initialization
    MissingCapability,
    /// The handle has not been initialized, or has been deinitialized
    NotInitialized,
    /// Bus init, deinit, write or read failed
    Transport(E),
    /// The response from the device failed validation
    InvalidResponse,
    /// Invalid input data provided
    InvalidInputData,
}
impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NullHandle => write!(f, "no device handle"),
            Self::MissingCapability => write!(f, "transport or delay not linked"),
            Self::NotInitialized => write!(f, "device handle not initialized"),
            Self::Transport(e) => write!(f, "transport error: {e:?}"),
            Self::InvalidResponse => write!(f, "invalid response from device"),
            Self::InvalidInputData => write!(f, "invalid input data"),
        }
    }
}
impl<E: fmt::Debug> core::error::Error for Error<E> {}

/// Temperature and relative humidity after conversion
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurement {
    /// degrees centigrade
    pub temperature_c: f32,
    /// degrees fahrenheit
    pub temperature_f: f32,
    /// relative humidity in percent, saturated to [0, 100]
    pub humidity: f32,
    /// response bytes as read from the device
    pub raw: [u8; RESPONSE_LEN],
}
impl Measurement {
    /// Decode a measurement response: `[temp msb, temp lsb, crc, rh msb, rh lsb, crc]`
    pub fn from_raw(raw: [u8; RESPONSE_LEN]) -> Self {
        let temperature = u16::from_be_bytes([raw[0], raw[1]]);
        let humidity = u16::from_be_bytes([raw[3], raw[4]]);
        Self {
            temperature_c: raw_temp_to_centigrade(temperature),
            temperature_f: raw_temp_to_fahrenheit(temperature),
            humidity: raw_rel_humid_to_percent(humidity),
            raw,
        }
    }
}

/// Serial number of the device
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SerialNumber(pub u32);
impl SerialNumber {
    /// Reassemble the serial number from a response `[a, b, crc, c, d, crc]`.
    ///
    /// The four data bytes are reversed, giving `u32::from_be_bytes([d, c, b, a])`. This byte
    /// order is part of the public contract.
    pub fn from_response(raw: &[u8; RESPONSE_LEN]) -> Self {
        Self(u32::from_be_bytes([raw[4], raw[3], raw[1], raw[0]]))
    }
}
impl fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08X}", self.0)
    }
}

/// Static information about the chip and this driver
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChipInfo {
    /// chip name
    pub chip_name: &'static str,
    /// manufacturer name
    pub manufacturer_name: &'static str,
    /// bus interface
    pub interface: &'static str,
    /// minimum supply voltage
    pub supply_voltage_min_v: f32,
    /// maximum supply voltage
    pub supply_voltage_max_v: f32,
    /// maximum supply current in µA
    pub max_current_ua: f32,
    /// minimum operating temperature in °C
    pub temperature_min_c: f32,
    /// maximum operating temperature in °C
    pub temperature_max_c: f32,
    /// version of this driver
    pub driver_version: &'static str,
}

/// Chip information of the SHT4x family
pub const CHIP_INFO: ChipInfo = ChipInfo {
    chip_name: "SHT4x",
    manufacturer_name: "Sensirion",
    interface: "I2C",
    supply_voltage_min_v: 1.8,
    supply_voltage_max_v: 3.6,
    max_current_ua: 500.0,
    temperature_min_c: -40.0,
    temperature_max_c: 125.0,
    driver_version: env!("CARGO_PKG_VERSION"),
};

/// Get the chip information; no device access is needed
pub fn info() -> ChipInfo {
    CHIP_INFO
}
