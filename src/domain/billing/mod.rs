//! Billing domain module.
//!
//! Bills owed by a household and the payments recorded against them.
//! Billing publishes no events.

mod bill;
mod errors;
mod payment;

pub use bill::{Bill, BillDetails, BillStatus, BillingFrequency};
pub use errors::BillingError;
pub use payment::{Payment, PaymentDetails, PaymentMethod};
