//! Recording fakes for driver tests
//!
//! One shared [`Trace`] collects line edges, direction changes and
//! delays in a single interleaved log, so tests can assert on the
//! exact on-wire sequence a call produced.

use core::cell::{Cell, RefCell};

use al3050_hal::SingleWireLine;
use embedded_hal::delay::DelayNs;
use heapless::Vec;

/// One recorded bus event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ev {
    /// Line driven high.
    High,
    /// Line driven low.
    Low,
    /// Line released to input.
    Released,
    /// Delay of the given nanoseconds.
    Wait(u32),
}

/// Shared event log.
#[derive(Default)]
pub struct Trace(RefCell<Vec<Ev, 1024>>);

impl Trace {
    fn push(&self, ev: Ev) {
        self.0.borrow_mut().push(ev).unwrap();
    }

    /// Snapshot of the recorded events.
    pub fn events(&self) -> Vec<Ev, 1024> {
        self.0.borrow().clone()
    }

    /// Drop everything recorded so far.
    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

/// Recording line with a scriptable acknowledge.
pub struct MockLine<'a> {
    trace: &'a Trace,
    /// Reads go low after this many polls; `None` never acknowledges.
    ack_after: Option<u32>,
    polls: Cell<u32>,
}

impl<'a> MockLine<'a> {
    /// A line whose chip never acknowledges (reads stay pulled high).
    pub fn new(trace: &'a Trace) -> Self {
        Self {
            trace,
            ack_after: None,
            polls: Cell::new(0),
        }
    }

    /// A line whose chip pulls low after `after_polls` reads.
    pub fn acking(trace: &'a Trace, after_polls: u32) -> Self {
        Self {
            trace,
            ack_after: Some(after_polls),
            polls: Cell::new(0),
        }
    }
}

impl SingleWireLine for MockLine<'_> {
    fn drive_high(&mut self) {
        self.trace.push(Ev::High);
    }

    fn drive_low(&mut self) {
        self.trace.push(Ev::Low);
    }

    fn release(&mut self) {
        self.trace.push(Ev::Released);
        self.polls.set(0);
    }

    fn is_high(&self) -> bool {
        let seen = self.polls.get();
        self.polls.set(seen + 1);
        match self.ack_after {
            Some(after) => seen < after,
            None => true,
        }
    }
}

/// Recording delay. Coarser granularities are folded into single
/// nanosecond events so traces stay deterministic.
pub struct MockDelay<'a> {
    trace: &'a Trace,
}

impl<'a> MockDelay<'a> {
    pub fn new(trace: &'a Trace) -> Self {
        Self { trace }
    }
}

impl DelayNs for MockDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.trace.push(Ev::Wait(ns));
    }

    fn delay_us(&mut self, us: u32) {
        self.delay_ns(us * 1_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay_ns(ms * 1_000_000);
    }
}
