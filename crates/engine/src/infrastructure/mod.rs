//! Infrastructure implementations.
//!
//! Contains the store port traits, the in-memory store implementing them,
//! per-character locking and environment configuration.

pub mod config;
pub mod locks;
pub mod memory_store;
pub mod ports;
