//! Command implementations for the shixin binary.

pub mod auth;
pub mod config;
pub mod quiz;
