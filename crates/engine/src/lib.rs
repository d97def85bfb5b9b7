//! Bill storage for Billbook.
//!
//! The crate exposes the [`BillStore`] interface and [`Engine`], its
//! implementation on top of a sea-orm (SQLite) connection.

pub use bills::{Bill, NewBill};
pub use error::EngineError;
pub use money::Money;
pub use ops::{Engine, EngineBuilder};
pub use store::BillStore;

pub mod bills;
mod error;
mod money;
mod ops;
mod store;

pub type ResultEngine<T> = Result<T, EngineError>;
