//! Application layer (Session, SessionBuilder).

pub mod builder;
pub mod session;

pub use self::builder::SessionBuilder;
pub use self::session::Session;
