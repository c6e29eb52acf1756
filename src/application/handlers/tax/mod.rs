//! Tax command and query handlers.

mod create_deduction;
mod create_tax_year;
mod delete_deduction;
mod delete_tax_year;
mod get_deduction;
mod get_tax_year;
mod list_deductions;
mod list_tax_years;
mod mark_tax_year_filed;
mod summary;
mod update_deduction;
mod update_tax_year;

pub use create_deduction::{CreateDeductionCommand, CreateDeductionHandler};
pub use create_tax_year::{CreateTaxYearCommand, CreateTaxYearHandler};
pub use delete_deduction::{DeleteDeductionCommand, DeleteDeductionHandler};
pub use delete_tax_year::{DeleteTaxYearCommand, DeleteTaxYearHandler};
pub use get_deduction::{GetDeductionHandler, GetDeductionQuery};
pub use get_tax_year::{GetTaxYearHandler, GetTaxYearQuery};
pub use list_deductions::{ListDeductionsHandler, ListDeductionsQuery};
pub use list_tax_years::{ListTaxYearsHandler, ListTaxYearsQuery};
pub use mark_tax_year_filed::{MarkTaxYearFiledCommand, MarkTaxYearFiledHandler};
pub use summary::TaxYearSummary;
pub use update_deduction::{UpdateDeductionCommand, UpdateDeductionHandler};
pub use update_tax_year::{UpdateTaxYearCommand, UpdateTaxYearHandler};
