//! Shared helpers

pub mod helper;
