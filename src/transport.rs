//! Bus capabilities consumed by the driver.
//!
//! The SHT4x protocol needs four operations from its bus: bring the bus up, take it down, write
//! a command byte and read a response. [`Transport`] and [`AsyncTransport`] describe them, and
//! [`I2cTransport`] implements both on top of an `embedded-hal` or `embedded-hal-async` I²C bus.

/// Blocking bus capability set
#[cfg(feature = "blocking")]
pub trait Transport {
    /// Error reported by the bus
    type Error;

    /// Bring up the bus
    fn bus_init(&mut self) -> Result<(), Self::Error>;

    /// Release the bus
    fn bus_deinit(&mut self) -> Result<(), Self::Error>;

    /// Write `command` followed by `payload` to the device at `address`
    fn write(&mut self, address: u8, command: u8, payload: &[u8]) -> Result<(), Self::Error>;

    /// Fill `buffer` from the device at `address`.
    ///
    /// `register` is always [`crate::DUMMY_REGISTER`] for this device.
    fn read(&mut self, address: u8, register: u16, buffer: &mut [u8]) -> Result<(), Self::Error>;
}

/// Async bus capability set
#[cfg(feature = "async")]
#[allow(async_fn_in_trait)]
pub trait AsyncTransport {
    /// Error reported by the bus
    type Error;

    /// Bring up the bus
    async fn bus_init(&mut self) -> Result<(), Self::Error>;

    /// Release the bus
    async fn bus_deinit(&mut self) -> Result<(), Self::Error>;

    /// Write `command` followed by `payload` to the device at `address`
    async fn write(&mut self, address: u8, command: u8, payload: &[u8]) -> Result<(), Self::Error>;

    /// Fill `buffer` from the device at `address`.
    ///
    /// `register` is always [`crate::DUMMY_REGISTER`] for this device.
    async fn read(&mut self, address: u8, register: u16, buffer: &mut [u8]) -> Result<(), Self::Error>;
}

/// Transport over an `embedded-hal(-async)` I²C bus.
///
/// The bus is configured by board code before it is handed over, so `bus_init` and
/// `bus_deinit` succeed without touching it.
#[derive(Debug)]
pub struct I2cTransport<I2C> {
    i2c: I2C,
}

impl<I2C> I2cTransport<I2C> {
    /// Wrap an I²C bus
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Give back the I²C bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

#[cfg(feature = "blocking")]
impl<I2C: embedded_hal::i2c::I2c> Transport for I2cTransport<I2C> {
    type Error = I2C::Error;

    fn bus_init(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn bus_deinit(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn write(&mut self, address: u8, command: u8, payload: &[u8]) -> Result<(), Self::Error> {
        use embedded_hal::i2c::Operation;

        if payload.is_empty() {
            self.i2c.write(address, &[command])
        } else {
            self.i2c.transaction(address, &mut [Operation::Write(&[command]), Operation::Write(payload)])
        }
    }

    fn read(&mut self, address: u8, _register: u16, buffer: &mut [u8]) -> Result<(), Self::Error> {
        self.i2c.read(address, buffer)
    }
}

#[cfg(feature = "async")]
impl<I2C: embedded_hal_async::i2c::I2c> AsyncTransport for I2cTransport<I2C> {
    type Error = I2C::Error;

    async fn bus_init(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn bus_deinit(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn write(&mut self, address: u8, command: u8, payload: &[u8]) -> Result<(), Self::Error> {
        use embedded_hal_async::i2c::Operation;

        if payload.is_empty() {
            self.i2c.write(address, &[command]).await
        } else {
            self.i2c
                .transaction(address, &mut [Operation::Write(&[command]), Operation::Write(payload)])
                .await
        }
    }

    async fn read(&mut self, address: u8, _register: u16, buffer: &mut [u8]) -> Result<(), Self::Error> {
        self.i2c.read(address, buffer).await
    }
}
