//! Validation check modules.
//!
//! Each module performs one kind of check and returns [`Issue`]s; the
//! validator decides which checks run and in what order.
//!
//! [`Issue`]: crate::issue::Issue

pub mod attribute;
pub mod conditions;
pub mod coordinates;
pub mod exclusive;
pub mod required;
