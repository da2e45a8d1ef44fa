//! Hardware definitions: command bytes, addresses, timings and raw value conversion.

#[cfg(feature = "defmt")]
use defmt::Format;

/// Measure T & RH with high precision (high repeatability)
pub const CMD_MEASURE_HIGH_PRECISION: u8 = 0xFD;
/// Measure T & RH with medium precision (medium repeatability)
pub const CMD_MEASURE_MEDIUM_PRECISION: u8 = 0xF6;
/// Measure T & RH with lowest precision (low repeatability)
pub const CMD_MEASURE_LOWEST_PRECISION: u8 = 0xE0;
/// Read the 32-bit serial number
pub const CMD_READ_SERIAL_NUMBER: u8 = 0x89;
/// Soft reset
pub const CMD_SOFT_RESET: u8 = 0x94;
/// Heater 200mW for 1s, then a high precision measurement
pub const CMD_HEATER_200MW_1S: u8 = 0x39;
/// Heater 200mW for 0.1s, then a high precision measurement
pub const CMD_HEATER_200MW_100MS: u8 = 0x32;
/// Heater 110mW for 1s, then a high precision measurement
pub const CMD_HEATER_110MW_1S: u8 = 0x2F;
/// Heater 110mW for 0.1s, then a high precision measurement
pub const CMD_HEATER_110MW_100MS: u8 = 0x24;
/// Heater 20mW for 1s, then a high precision measurement
pub const CMD_HEATER_20MW_1S: u8 = 0x1E;
/// Heater 20mW for 0.1s, then a high precision measurement
pub const CMD_HEATER_20MW_100MS: u8 = 0x15;

/// Every response from the device is two 16-bit words, each followed by a CRC byte
pub const RESPONSE_LEN: usize = 6;
/// Register argument passed to [`crate::Transport::read`]; the device has no registers
pub const DUMMY_REGISTER: u16 = 0x00;

/// Wait between a measurement or serial number command and reading its response
pub const MEASUREMENT_DELAY_MS: u32 = 10;
/// Wait after initialization before the first command
pub const INIT_SETTLE_DELAY_MS: u32 = 10;
/// Wait after a heater command with a 1s pulse
pub const HEATER_DELAY_LONG_MS: u32 = 1000;
/// Wait after a heater command with a 0.1s pulse
pub const HEATER_DELAY_SHORT_MS: u32 = 100;
/// Wait between consecutive samples of an averaged measurement
pub const AVERAGING_INTERVAL_MS: u32 = 100;

/// Lower bound of the reported relative humidity
pub const HUMIDITY_MIN: f32 = 0.0;
/// Upper bound of the reported relative humidity
pub const HUMIDITY_MAX: f32 = 100.0;

/// Measurement precision (repeatability) table, indexed by [`Precision`]
pub const PRECISION_COMMANDS: [u8; 3] = [
    CMD_MEASURE_HIGH_PRECISION,
    CMD_MEASURE_MEDIUM_PRECISION,
    CMD_MEASURE_LOWEST_PRECISION,
];

/// Heater command table, indexed by [`HeaterPower`]
pub const HEATER_COMMANDS: [u8; 6] = [
    CMD_HEATER_200MW_1S,
    CMD_HEATER_200MW_100MS,
    CMD_HEATER_110MW_1S,
    CMD_HEATER_110MW_100MS,
    CMD_HEATER_20MW_1S,
    CMD_HEATER_20MW_100MS,
];

/// 7-bit I²C address of the device
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum I2cAddr {
    /// 0x44 (SHT40-AD1B, SHT41-AD1B, SHT45-AD1B)
    #[default]
    Addr44,
    /// 0x45 (SHT40-BD1B)
    Addr45,
}
impl I2cAddr {
    /// Get the address as a raw 7-bit value
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Addr44 => 0x44,
            Self::Addr45 => 0x45,
        }
    }
}

/// Part number / address pairing of the sensor
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Variant {
    /// SHT40-AD1B
    #[default]
    Sht40Ad1b,
    /// SHT40-BD1B
    Sht40Bd1b,
    /// SHT41-AD1B
    Sht41Ad1b,
    /// SHT45-AD1B
    Sht45Ad1b,
}
impl Variant {
    /// I²C address the variant is strapped to
    pub const fn i2c_addr(self) -> I2cAddr {
        match self {
            Self::Sht40Ad1b => I2cAddr::Addr44,
            Self::Sht40Bd1b => I2cAddr::Addr45,
            Self::Sht41Ad1b => I2cAddr::Addr44,
            Self::Sht45Ad1b => I2cAddr::Addr44,
        }
    }
}

/// Measurement precision; higher precision takes longer and draws more energy
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Precision {
    /// high repeatability
    High,
    /// medium repeatability
    Medium,
    /// low repeatability
    Lowest,
}
impl Precision {
    /// Command byte that starts a measurement at this precision
    pub const fn command(self) -> u8 {
        PRECISION_COMMANDS[self as usize]
    }
}

/// How long the heater stays on before the closing measurement
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HeaterDuration {
    /// 1s pulse
    Long,
    /// 0.1s pulse
    Short,
}
impl HeaterDuration {
    /// Time to wait before the measurement taken at the end of the pulse can be read
    pub const fn settle_ms(self) -> u32 {
        match self {
            Self::Long => HEATER_DELAY_LONG_MS,
            Self::Short => HEATER_DELAY_SHORT_MS,
        }
    }
}

/// Heater power and pulse length
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HeaterPower {
    /// 200mW for 1s
    Power200mW1s,
    /// 200mW for 0.1s
    Power200mW100ms,
    /// 110mW for 1s
    Power110mW1s,
    /// 110mW for 0.1s
    Power110mW100ms,
    /// 20mW for 1s
    Power20mW1s,
    /// 20mW for 0.1s
    Power20mW100ms,
}
impl HeaterPower {
    /// Command byte that fires the heater at this setting
    pub const fn command(self) -> u8 {
        HEATER_COMMANDS[self as usize]
    }

    /// Pulse length of this setting
    pub const fn duration(self) -> HeaterDuration {
        match self {
            Self::Power200mW1s | Self::Power110mW1s | Self::Power20mW1s => HeaterDuration::Long,
            Self::Power200mW100ms | Self::Power110mW100ms | Self::Power20mW100ms => HeaterDuration::Short,
        }
    }
}

/// Convert a raw temperature word to degrees centigrade
pub fn raw_temp_to_centigrade(raw: u16) -> f32 {
    (raw as f32 / 65535.0) * 175.0 - 45.0
}

/// Convert a raw temperature word to degrees fahrenheit
pub fn raw_temp_to_fahrenheit(raw: u16) -> f32 {
    centigrade_to_fahrenheit(raw_temp_to_centigrade(raw))
}

/// Convert degrees centigrade to degrees fahrenheit
pub fn centigrade_to_fahrenheit(centigrade: f32) -> f32 {
    centigrade * 9.0 / 5.0 + 32.0
}

/// Convert a raw humidity word to percent relative humidity, saturated to [0, 100]
pub fn raw_rel_humid_to_percent(raw: u16) -> f32 {
    ((raw as f32 / 65535.0) * 125.0 - 6.0).clamp(HUMIDITY_MIN, HUMIDITY_MAX)
}

#[cfg(feature = "crc")]
const CRC: crc::Crc<u8> = crc::Crc::<u8>::new(&crc::CRC_8_NRSC_5);

/// Check both response words against their checksum bytes
#[cfg(feature = "crc")]
pub(crate) fn response_is_valid(buf: &[u8; RESPONSE_LEN]) -> bool {
    buf.chunks_exact(3).all(|word| CRC.checksum(&word[..2]) == word[2])
}

/// Checksums are not verified without the `crc` feature
#[cfg(not(feature = "crc"))]
pub(crate) fn response_is_valid(_buf: &[u8; RESPONSE_LEN]) -> bool {
    true
}
