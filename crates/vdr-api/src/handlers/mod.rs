//! Route handlers

pub mod channels;
pub mod health;
