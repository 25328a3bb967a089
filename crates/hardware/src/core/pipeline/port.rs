//! Handshake Ports.
//!
//! A port is the only channel between two pipeline stages. It implements:
//! 1. **Latency:** An item written in cycle `c` becomes readable in cycle `c + latency`.
//! 2. **Bandwidth:** At most `bandwidth` items may be written per cycle.
//! 3. **Fanout:** Each item may be read `fanout` times before it is consumed.
//! 4. **Loss Detection:** Data ports fail when a ready item is skipped; signal
//!    ports drop it silently, so an absent signal simply reads as `None`.

use std::collections::VecDeque;

use crate::common::constants::{PORT_BANDWIDTH, PORT_FANOUT, PORT_LATENCY};
use crate::common::error::{PortError, SimError, SimResult};

/// Class of traffic carried by a port.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PortKind {
    /// Instructions or words; every item must be read.
    Data,
    /// Stall lines; unread items expire.
    Signal,
}

#[derive(Clone, Debug)]
struct Slot<T> {
    ready: u64,
    reads_left: u32,
    value: T,
}

/// A typed, latency-delayed channel between two stages.
#[derive(Clone, Debug)]
pub struct Port<T> {
    name: &'static str,
    kind: PortKind,
    bandwidth: u32,
    fanout: u32,
    latency: u64,
    queue: VecDeque<Slot<T>>,
    write_cycle: Option<u64>,
    writes_this_cycle: u32,
}

impl<T: Clone> Port<T> {
    /// Creates a port with explicit parameters.
    ///
    /// # Arguments
    ///
    /// * `name` - Name used in error reports.
    /// * `kind` - Data or signal class.
    /// * `bandwidth` - Writes allowed per cycle.
    /// * `fanout` - Reads per written item.
    /// * `latency` - Cycles between write and read.
    pub const fn new(
        name: &'static str,
        kind: PortKind,
        bandwidth: u32,
        fanout: u32,
        latency: u64,
    ) -> Self {
        Self {
            name,
            kind,
            bandwidth,
            fanout,
            latency,
            queue: VecDeque::new(),
            write_cycle: None,
            writes_this_cycle: 0,
        }
    }

    /// Creates a data port with the pipeline's fixed parameters.
    pub const fn data(name: &'static str) -> Self {
        Self::new(name, PortKind::Data, PORT_BANDWIDTH, PORT_FANOUT, PORT_LATENCY)
    }

    /// Creates a signal port with the pipeline's fixed parameters.
    pub const fn signal(name: &'static str) -> Self {
        Self::new(name, PortKind::Signal, PORT_BANDWIDTH, PORT_FANOUT, PORT_LATENCY)
    }

    /// Port name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns true if nothing is waiting in the port.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Writes an item in `cycle`; it becomes readable in `cycle + latency`.
    ///
    /// # Arguments
    ///
    /// * `value` - The item.
    /// * `cycle` - Current simulation cycle.
    ///
    /// # Returns
    ///
    /// A port error if the bandwidth for this cycle is already used up.
    pub fn write(&mut self, value: T, cycle: u64) -> SimResult<()> {
        if self.write_cycle == Some(cycle) {
            if self.writes_this_cycle >= self.bandwidth {
                return Err(self.error(PortError::BandwidthExceeded {
                    bandwidth: self.bandwidth,
                    cycle,
                }));
            }
        } else {
            self.write_cycle = Some(cycle);
            self.writes_this_cycle = 0;
        }
        self.writes_this_cycle += 1;
        self.queue.push_back(Slot {
            ready: cycle + self.latency,
            reads_left: self.fanout,
            value,
        });
        Ok(())
    }

    /// Reads the item that became ready in `cycle`, if any.
    ///
    /// Items whose ready cycle has already passed are discarded first; for a
    /// data port that is reported as lost data.
    pub fn read(&mut self, cycle: u64) -> SimResult<Option<T>> {
        while let Some(front) = self.queue.front() {
            if front.ready >= cycle {
                break;
            }
            let ready = front.ready;
            let _ = self.queue.pop_front();
            if self.kind == PortKind::Data {
                return Err(self.error(PortError::DataLost { ready, cycle }));
            }
        }

        let Some(front) = self.queue.front_mut() else {
            return Ok(None);
        };
        if front.ready != cycle {
            return Ok(None);
        }
        front.reads_left = front.reads_left.saturating_sub(1);
        if front.reads_left == 0 {
            Ok(self.queue.pop_front().map(|slot| slot.value))
        } else {
            Ok(Some(front.value.clone()))
        }
    }

    fn error(&self, source: PortError) -> SimError {
        SimError::Port {
            name: self.name,
            source,
        }
    }
}
