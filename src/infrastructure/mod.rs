//! # Infrastructure
//!
//! Outbound integrations with upstream price sources.

pub mod providers;
