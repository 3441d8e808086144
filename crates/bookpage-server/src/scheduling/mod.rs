//! Business rules for profiles, service catalogs and appointments.
//!
//! Every operation is a short request/response unit of work against a
//! [`Store`](crate::store::Store); nothing is cached between calls.

pub mod catalog;
pub mod lifecycle;
pub mod profile;

mod validate;
