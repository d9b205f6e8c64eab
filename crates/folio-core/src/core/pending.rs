/// Holds at most one outstanding deferred action.
///
/// The handle type is whatever the host uses for a scheduled callback (a timer,
/// an animation frame request). Storing a new handle hands back the previous
/// one; on the web side those handles cancel themselves when dropped, so
/// replacing is the same as cancel-then-schedule.
#[derive(Debug)]
pub struct PendingSlot<H> {
    handle: Option<H>,
}

impl<H> PendingSlot<H> {
    pub fn new() -> Self {
        Self { handle: None }
    }

    /// Store `handle`, returning the action it supersedes.
    pub fn replace(&mut self, handle: H) -> Option<H> {
        self.handle.replace(handle)
    }

    /// Remove the pending action without scheduling a new one.
    pub fn take(&mut self) -> Option<H> {
        self.handle.take()
    }

    pub fn is_pending(&self) -> bool {
        self.handle.is_some()
    }
}

impl<H> Default for PendingSlot<H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Mimics a host handle that cancels on drop.
    struct Handle {
        id: u32,
        cancelled: Rc<Cell<u32>>,
    }

    impl Drop for Handle {
        fn drop(&mut self) {
            self.cancelled.set(self.cancelled.get() + 1);
        }
    }

    #[test]
    fn replace_returns_previous() {
        let mut slot = PendingSlot::new();
        assert!(slot.replace(1).is_none());
        assert_eq!(slot.replace(2), Some(1));
        assert!(slot.is_pending());
        assert_eq!(slot.take(), Some(2));
        assert!(!slot.is_pending());
    }

    #[test]
    fn replacing_drops_superseded_handle() {
        let cancelled = Rc::new(Cell::new(0));
        let mut slot = PendingSlot::new();
        slot.replace(Handle { id: 1, cancelled: cancelled.clone() });
        drop(slot.replace(Handle { id: 2, cancelled: cancelled.clone() }));
        assert_eq!(cancelled.get(), 1);
        let current = slot.take().unwrap();
        assert_eq!(current.id, 2);
    }
}
