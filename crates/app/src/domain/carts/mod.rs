//! Session Carts

pub mod records;
pub mod service;

pub use service::*;
