//! Port implementations (FileSlot for production, InMemorySlot for tests).

pub mod file_slot;
pub mod inmem_slot;

pub use self::file_slot::FileSlot;
pub use self::inmem_slot::InMemorySlot;
