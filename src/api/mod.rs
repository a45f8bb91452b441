//! # API
//!
//! Inbound interfaces.

pub mod rest;
