//! Membership Billing - subscription memberships with planned billing periods
//!
//! This crate validates membership requests, computes each membership's
//! validity window with calendar-month arithmetic, and plans the billing
//! periods covering it. Memberships are served over a small HTTP API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
