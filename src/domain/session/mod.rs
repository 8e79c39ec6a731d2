//! Session domain module.
//!
//! Sessions are the logged units of embroidery work. The [`SessionStore`]
//! holds a bounded, ordered list of them for one user.
//!
//! # Validation layers
//!
//! - `SessionStore::add` refuses negative hours or cost
//! - `capture` refuses anything that is not strictly positive, and is
//!   applied while prompting before a session is built

pub mod capture;
mod errors;
mod record;
mod store;

pub use errors::StoreError;
pub use record::Session;
pub use store::{SessionStore, DEFAULT_CAPACITY};
