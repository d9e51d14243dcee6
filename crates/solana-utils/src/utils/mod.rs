/// With Slot.
pub mod with_slot;

pub use self::with_slot::WithSlot;
