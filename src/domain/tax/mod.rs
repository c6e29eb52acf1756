//! Tax domain module.
//!
//! Tax years and the deductions claimed under them. A tax year's total is
//! derived from its deductions on read and never stored.

mod deduction;
mod errors;
mod tax_year;

pub use deduction::{Deduction, DeductionCategory, DeductionDetails};
pub use errors::TaxError;
pub use tax_year::{total_deductions, TaxYear, TaxYearDetails};
