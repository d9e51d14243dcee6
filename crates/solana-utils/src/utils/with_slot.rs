use solana_client::rpc_response::Response;

/// A value observed at a specific slot.
///
/// Account snapshots are point-in-time; the slot tells the caller how stale
/// the value may be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithSlot<T> {
    /// Slot.
    slot: u64,
    /// Value.
    value: T,
}

impl<T> WithSlot<T> {
    /// Create a new [`WithSlot`].
    pub fn new(slot: u64, value: T) -> Self {
        Self { slot, value }
    }

    /// Get slot.
    pub fn slot(&self) -> u64 {
        self.slot
    }

    /// Get value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Into value.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Apply a function on the value.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> WithSlot<U> {
        WithSlot {
            slot: self.slot,
            value: (f)(self.value),
        }
    }
}

impl<T, E> WithSlot<Result<T, E>> {
    /// Transpose.
    pub fn transpose(self) -> Result<WithSlot<T>, E> {
        let slot = self.slot;
        self.value.map(|value| WithSlot { slot, value })
    }
}

impl<T> From<Response<T>> for WithSlot<T> {
    fn from(res: Response<T>) -> Self {
        Self::new(res.context.slot, res.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transpose_keeps_slot() {
        let ok: WithSlot<Result<u64, ()>> = WithSlot::new(42, Ok(7));
        let ok = ok.transpose().unwrap();
        assert_eq!(ok.slot(), 42);
        assert_eq!(*ok.value(), 7);

        let err: WithSlot<Result<u64, &str>> = WithSlot::new(42, Err("bad"));
        assert_eq!(err.transpose(), Err("bad"));
    }
}
