//! Recording transport and delay for driver tests. Both append to one shared event log so tests
//! can assert on the exact interleaving of bus traffic and delays.

use std::{cell::RefCell, collections::VecDeque, rc::Rc, vec::Vec};

use crate::hw_def::RESPONSE_LEN;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Event {
    BusInit,
    BusDeinit,
    Write { addr: u8, cmd: u8, payload: Vec<u8> },
    Read { addr: u8, len: usize },
    Delay(u32),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct FakeError;

pub(crate) type EventLog = Rc<RefCell<Vec<Event>>>;

#[derive(Debug, Default)]
pub(crate) struct FakeBus {
    log: EventLog,
    responses: VecDeque<[u8; RESPONSE_LEN]>,
    pub(crate) fail_init: bool,
    pub(crate) fail_deinit: bool,
    /// zero-based index of the write call that fails
    pub(crate) fail_write_at: Option<usize>,
    /// zero-based index of the read call that fails
    pub(crate) fail_read_at: Option<usize>,
    writes: usize,
    reads: usize,
}

impl FakeBus {
    pub(crate) fn respond_with(mut self, response: [u8; RESPONSE_LEN]) -> Self {
        self.responses.push_back(response);
        self
    }

    fn record_init(&mut self) -> Result<(), FakeError> {
        self.log.borrow_mut().push(Event::BusInit);
        if self.fail_init { Err(FakeError) } else { Ok(()) }
    }

    fn record_deinit(&mut self) -> Result<(), FakeError> {
        self.log.borrow_mut().push(Event::BusDeinit);
        if self.fail_deinit { Err(FakeError) } else { Ok(()) }
    }

    fn record_write(&mut self, addr: u8, cmd: u8, payload: &[u8]) -> Result<(), FakeError> {
        self.log.borrow_mut().push(Event::Write { addr, cmd, payload: payload.to_vec() });
        let index = self.writes;
        self.writes += 1;
        if self.fail_write_at == Some(index) { Err(FakeError) } else { Ok(()) }
    }

    fn record_read(&mut self, addr: u8, buffer: &mut [u8]) -> Result<(), FakeError> {
        self.log.borrow_mut().push(Event::Read { addr, len: buffer.len() });
        let index = self.reads;
        self.reads += 1;
        if self.fail_read_at == Some(index) {
            return Err(FakeError);
        }
        let response = self.responses.pop_front().unwrap_or(RESPONSE_25C_64RH);
        buffer.copy_from_slice(&response[..buffer.len()]);
        Ok(())
    }
}

#[derive(Debug)]
pub(crate) struct FakeDelay {
    log: EventLog,
}

/// A bus and a delay sharing one event log
pub(crate) fn fakes() -> (FakeBus, FakeDelay, EventLog) {
    let log = EventLog::default();
    let bus = FakeBus { log: log.clone(), ..Default::default() };
    let delay = FakeDelay { log: log.clone() };
    (bus, delay, log)
}

/// Only the delays from a log
pub(crate) fn delays(log: &EventLog) -> Vec<u32> {
    log.borrow()
        .iter()
        .filter_map(|event| match event {
            Event::Delay(ms) => Some(*ms),
            _ => None,
        })
        .collect()
}

/// Measurement response with valid checksums: 25.0 °C, 64.0 %RH
pub(crate) const RESPONSE_25C_64RH: [u8; RESPONSE_LEN] = [0x66, 0x66, 0x93, 0x8F, 0x5C, 0x38];
/// Response with valid checksums carrying words 0x1234 and 0x5678
pub(crate) const RESPONSE_1234_5678: [u8; RESPONSE_LEN] = [0x12, 0x34, 0x37, 0x56, 0x78, 0x7D];
/// Measurement response with valid checksums and a humidity word above 100 %RH
pub(crate) const RESPONSE_SATURATED: [u8; RESPONSE_LEN] = [0x80, 0x00, 0xA2, 0xFF, 0xFF, 0xAC];

#[cfg(feature = "blocking")]
impl crate::Transport for FakeBus {
    type Error = FakeError;

    fn bus_init(&mut self) -> Result<(), FakeError> {
        self.record_init()
    }

    fn bus_deinit(&mut self) -> Result<(), FakeError> {
        self.record_deinit()
    }

    fn write(&mut self, address: u8, command: u8, payload: &[u8]) -> Result<(), FakeError> {
        self.record_write(address, command, payload)
    }

    fn read(&mut self, address: u8, _register: u16, buffer: &mut [u8]) -> Result<(), FakeError> {
        self.record_read(address, buffer)
    }
}

#[cfg(feature = "async")]
impl crate::AsyncTransport for FakeBus {
    type Error = FakeError;

    async fn bus_init(&mut self) -> Result<(), FakeError> {
        self.record_init()
    }

    async fn bus_deinit(&mut self) -> Result<(), FakeError> {
        self.record_deinit()
    }

    async fn write(&mut self, address: u8, command: u8, payload: &[u8]) -> Result<(), FakeError> {
        self.record_write(address, command, payload)
    }

    async fn read(&mut self, address: u8, _register: u16, buffer: &mut [u8]) -> Result<(), FakeError> {
        self.record_read(address, buffer)
    }
}

impl embedded_hal::delay::DelayNs for FakeDelay {
    fn delay_ns(&mut self, _ns: u32) {
        panic!("driver delays are whole milliseconds");
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(Event::Delay(ms));
    }
}

impl embedded_hal_async::delay::DelayNs for FakeDelay {
    async fn delay_ns(&mut self, _ns: u32) {
        panic!("driver delays are whole milliseconds");
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(Event::Delay(ms));
    }
}
