use crate::hw_def::*;
use crate::transport::Transport;
use crate::types::*;

use embedded_hal::delay::DelayNs;

impl<T, D, E> Sht4x<T, D>
where
    T: Transport<Error = E>,
    D: DelayNs,
{
    /// Initialize the handle: check that the transport and delay are linked, then bring up the bus
    pub fn init(&mut self) -> Result<(), Error<E>> {
        if self.delay.is_none() {
            warn!("sht4x: delay is not linked");
            return Err(Error::MissingCapability);
        }
        let Some(transport) = self.transport.as_mut() else {
            warn!("sht4x: transport is not linked");
            return Err(Error::MissingCapability);
        };
        if let Err(e) = transport.bus_init() {
            warn!("sht4x: failed to initialize bus");
            return Err(Error::Transport(e));
        }
        self.state.initialized = true;
        debug!("sht4x: initialized");
        Ok(())
    }

    /// Release the bus; the handle must be initialized again before further use
    pub fn deinit(&mut self) -> Result<(), Error<E>> {
        self.state.ensure_init()?;
        let transport = self.transport.as_mut().ok_or(Error::MissingCapability)?;
        if let Err(e) = transport.bus_deinit() {
            warn!("sht4x: failed to deinitialize bus");
            return Err(Error::Transport(e));
        }
        self.state.initialized = false;
        debug!("sht4x: deinitialized");
        Ok(())
    }

    /// Block for `ms` milliseconds using the linked delay
    pub(crate) fn delay_ms(&mut self, ms: u32) -> Result<(), Error<E>> {
        let delay = self.delay.as_mut().ok_or(Error::MissingCapability)?;
        delay.delay_ms(ms);
        Ok(())
    }

    /// Send a command without a response
    fn cmd(&mut self, cmd: u8) -> Result<(), Error<E>> {
        self.state.ensure_init()?;
        let addr = self.state.i2c_addr.as_u8();
        let transport = self.transport.as_mut().ok_or(Error::MissingCapability)?;
        trace!("sht4x::cmd(): addr={:#x} cmd={:#x}", addr, cmd);
        transport.write(addr, cmd, &[]).map_err(|e| {
            warn!("sht4x: failed to write command {:#x}", cmd);
            Error::Transport(e)
        })
    }

    /// Send a command, wait `wait_ms` and read back the response
    fn cmd_and_read(&mut self, cmd: u8, wait_ms: u32) -> Result<[u8; RESPONSE_LEN], Error<E>> {
        self.cmd(cmd)?;
        self.delay_ms(wait_ms)?;

        let addr = self.state.i2c_addr.as_u8();
        let transport = self.transport.as_mut().ok_or(Error::MissingCapability)?;
        let mut read_buf = [0u8; RESPONSE_LEN];
        transport.read(addr, DUMMY_REGISTER, &mut read_buf).map_err(|e| {
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
    pub fn measure(&mut self, precision: Precision) -> Result<Measurement, Error<E>> {
        let raw = self.cmd_and_read(precision.command(), MEASUREMENT_DELAY_MS)?;
        Ok(Measurement::from_raw(raw))
    }

    /// Read the serial number
    pub fn serial_number(&mut self) -> Result<SerialNumber, Error<E>> {
        let raw = self.cmd_and_read(CMD_READ_SERIAL_NUMBER, MEASUREMENT_DELAY_MS)?;
        Ok(SerialNumber::from_response(&raw))
    }

    /// Fire the heater and return the high precision measurement taken at the end of the pulse.
    ///
    /// Blocks for up to 1s, depending on `power`.
    pub fn activate_heater(&mut self, power: HeaterPower) -> Result<Measurement, Error<E>> {
        let raw = self.cmd_and_read(power.command(), power.duration().settle_ms())?;
        Ok(Measurement::from_raw(raw))
    }

    /// software reset
    pub fn soft_reset(&mut self) -> Result<(), Error<E>> {
        self.cmd(CMD_SOFT_RESET)
    }
}
