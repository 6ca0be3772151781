use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

// Latest
//------------------------------------------------------------------------------

/// Identifies one request against a [`Latest`] slot.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone)]
pub struct Ticket(u64);

/// Last-write-wins slot. Every request takes a ticket up front and may only commit its
/// result while no newer ticket has been issued, so a slow stale request never overwrites
/// the result of a newer one.
#[derive(Debug, Default)]
pub struct Latest<T> {
    issued: AtomicU64,
    slot: Mutex<Option<T>>,
}

impl<T: Clone> Latest<T> {
    pub fn new() -> Self {
        Self { issued: AtomicU64::new(0), slot: Mutex::new(None) }
    }

    pub fn begin(&self) -> Ticket {
        Ticket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.issued.load(Ordering::SeqCst) == ticket.0
    }

    /// Stores `value` if `ticket` is still the newest. Returns whether it was stored.
    pub fn commit(&self, ticket: Ticket, value: T) -> bool {
        let mut slot = self.slot.lock();
        if !self.is_current(ticket) {
            return false;
        }
        *slot = Some(value);
        true
    }

    pub fn get(&self) -> Option<T> {
        self.slot.lock().clone()
    }

    pub fn clear(&self) {
        *self.slot.lock() = None;
    }
}
