//! Per-endpoint result slots shared between the workers and the renderer.
//!
//! Each slot holds an atomically replaceable [`ProbeState`]. Exactly one
//! [`SlotWriter`] exists per slot and writing consumes it, so a slot is
//! written at most once per cycle. Readers take lock-free snapshots and may
//! observe the sentinel for a short while after a write has happened; a
//! redraw never waits on a worker, so that staleness window is accepted.

use std::time::Duration;

use arcshift::ArcShift;

use super::endpoint::EndpointDescriptor;

/// Status shown before a probe has completed.
pub const SENTINEL_STATUS: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeState {
    Pending,
    Completed { status: String, elapsed: Duration },
    Failed { reason: String, elapsed: Duration },
}

impl ProbeState {
    #[must_use]
    pub fn status_text(&self) -> String {
        match self {
            ProbeState::Pending => SENTINEL_STATUS.to_owned(),
            ProbeState::Completed { status, .. } => status.clone(),
            ProbeState::Failed { reason, .. } => format!("ERR: {}", reason),
        }
    }

    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        match self {
            ProbeState::Pending => Duration::ZERO,
            ProbeState::Completed { elapsed, .. } | ProbeState::Failed { elapsed, .. } => *elapsed,
        }
    }

    #[must_use]
    pub fn elapsed_text(&self) -> String {
        format_elapsed(self.elapsed())
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, ProbeState::Pending)
    }
}

/// Human readable duration, e.g. `12.5ms`; zero renders as `0s`.
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    if elapsed.is_zero() {
        "0s".to_owned()
    } else {
        format!("{:?}", elapsed)
    }
}

/// Point-in-time view of one slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub descriptor: EndpointDescriptor,
    pub state: ProbeState,
}

struct ResultSlot {
    descriptor: EndpointDescriptor,
    state: ArcShift<ProbeState>,
}

/// Ordered slots, index-aligned with the endpoint list. Never resized.
pub struct ResultStore {
    slots: Vec<ResultSlot>,
}

impl ResultStore {
    /// Creates one sentinel slot per endpoint together with the only writer
    /// handle for each slot, in the same order.
    #[must_use]
    pub fn new(endpoints: &[EndpointDescriptor]) -> (Self, Vec<SlotWriter>) {
        let mut slots = Vec::with_capacity(endpoints.len());
        let mut writers = Vec::with_capacity(endpoints.len());
        for (index, descriptor) in endpoints.iter().enumerate() {
            let state = ArcShift::new(ProbeState::Pending);
            writers.push(SlotWriter {
                index,
                state: state.clone(),
            });
            slots.push(ResultSlot {
                descriptor: descriptor.clone(),
                state,
            });
        }
        (Self { slots }, writers)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Reads every slot in declaration order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<ProbeResult> {
        self.slots
            .iter()
            .map(|slot| ProbeResult {
                descriptor: slot.descriptor.clone(),
                state: ProbeState::clone(&slot.state.shared_get()),
            })
            .collect()
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| slot.state.shared_get().is_pending())
            .count()
    }
}

/// Write handle for a single slot.
pub struct SlotWriter {
    index: usize,
    state: ArcShift<ProbeState>,
}

impl SlotWriter {
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Replaces the slot value. Consumes the writer.
    pub fn record(mut self, state: ProbeState) {
        self.state.update(state);
    }
}
