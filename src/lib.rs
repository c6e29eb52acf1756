//! Lifedesk - household records service
//!
//! Four small record-keeping applications behind one REST API: preventive
//! health screenings, appliance warranties, bills and tax deductions. Every
//! record belongs to a tenant and every query is scoped to the caller's
//! tenant.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
