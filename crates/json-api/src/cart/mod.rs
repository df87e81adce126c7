//! Session cart routes

mod handlers;

pub(crate) use handlers::*;
