use crate::hw_def::*;
use crate::transport::AsyncTransport;
use crate::types::*;

use embedded_hal_async::delay::DelayNs;

impl<T, D, E> Sht4xAsync<T, D>
where
    T: AsyncTransport<Error = E>,
    D: DelayNs,
{
    /// Initialize the handle: check that the transport and delay are linked, then bring up the bus
    pub async fn init(&mut self) -> Result<(), Error<E>> {
        if self.delay.is_none() {
            warn!("sht4x: delay is not linked");
            return Err(Error::MissingCapability);
        }
        let Some(transport) = self.transport.as_mut() else {
            warn!("sht4x: transport is not linked");
            return Err(Error::MissingCapability);
        };
        if let Err(e) = transport.bus_init().await {
            warn!("sht4x: failed to initialize bus");
            return Err(Error::Transport(e));
        }
        self.state.initialized = true;
        debug!("sht4x: initialized");
        Ok(())
    }

    /// Release the bus; the handle must be initialized again before further use
    pub async fn deinit(&mut self) -> Result<(), Error<E>> {
        self.state.ensure_init()?;
        let transport = self.transport.as_mut().ok_or(Error::MissingCapability)?;
        if let Err(e) = transport.bus_deinit().await {
            warn!("sht4x: failed to deinitialize bus");
            return Err(Error::Transport(e));
        }
        self.state.initialized = false;
        debug!("sht4x: deinitialized");
        Ok(())
    }

    async fn cmd(&mut self, cmd: u8) -> Result<(), Error<E>> {
        self.state.ensure_init()?;
        let addr = self.state.i2c_addr.as_u8();
        let transport = self.transport.as_mut().ok_or(Error::MissingCapability)?;
        trace!("sht4x::cmd(): addr={:#x} cmd={:#x}", addr, cmd);
        transport.write(addr, cmd, &[]).await.map_err(|e| {
            warn!("sht4x: failed to write command {:#x}", cmd);
            Error::Transport(e)
        })
    }

    async fn cmd_and_read(&mut self, cmd: u8, wait_ms: u32) -> Result<[u8; RESPONSE_LEN], Error<E>> {
        self.cmd(cmd).await?;
        self.delay.as_mut().ok_or(Error::MissingCapability)?.delay_ms(wait_ms).await;

        let addr = self.state.i2c_addr.as_u8();
        let transport = self.transport.as_mut().ok_or(Error::MissingCapability)?;
        let mut read_buf = [0u8; RESPONSE_LEN];
        transport.read(addr, DUMMY_REGISTER, &mut read_buf).await.map_err(|e| {
            warn!("sht4x: failed to read response to command {:#x}", cmd);
            Error::Transport(e)
        })?;
        trace!("sht4x::cmd_and_read(): read_buf={:?}", read_buf);

        if !response_is_valid(&read_buf) {
            warn!("sht4x::cmd_and_read(): crc mismatch: read_buf={:?}", read_buf);
            return Err(Error::InvalidResponse);
        }
        Ok(read_buf)
    }

    /// Measure temperature and relative humidity at the given precision
    pub async fn measure(&mut self, precision: Precision) -> Result<Measurement, Error<E>> {
        let raw = self.cmd_and_read(precision.command(), MEASUREMENT_DELAY_MS).await?;
        Ok(Measurement::from_raw(raw))
    }

    /// Read the serial number
    pub async fn serial_number(&mut self) -> Result<SerialNumber, Error<E>> {
        let raw = self.cmd_and_read(CMD_READ_SERIAL_NUMBER, MEASUREMENT_DELAY_MS).await?;
        Ok(SerialNumber::from_response(&raw))
    }

    /// Fire the heater and return the high precision measurement taken at the end of the pulse
    pub async fn activate_heater(&mut self, power: HeaterPower) -> Result<Measurement, Error<E>> {
        let raw = self.cmd_and_read(power.command(), power.duration().settle_ms()).await?;
        Ok(Measurement::from_raw(raw))
    }

    /// software reset
    pub async fn soft_reset(&mut self) -> Result<(), Error<E>> {
        self.cmd(CMD_SOFT_RESET).await
    }
}
