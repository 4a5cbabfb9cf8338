//! Command implementations

pub mod account;
pub mod demo;
pub mod scan;
pub mod tips;
pub mod transfer;
