//! Search routes

mod handlers;

pub(crate) use handlers::*;
