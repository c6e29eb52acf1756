//! Billing command and query handlers.

mod create_bill;
mod create_payment;
mod delete_bill;
mod delete_payment;
mod get_bill;
mod get_bill_summary;
mod get_payment;
mod list_bills;
mod list_payments;
mod update_bill;
mod update_payment;

pub use create_bill::{CreateBillCommand, CreateBillHandler};
pub use create_payment::{CreatePaymentCommand, CreatePaymentHandler};
pub use delete_bill::{DeleteBillCommand, DeleteBillHandler};
pub use delete_payment::{DeletePaymentCommand, DeletePaymentHandler};
pub use get_bill::{GetBillHandler, GetBillQuery};
pub use get_bill_summary::{BillSummary, GetBillSummaryHandler, GetBillSummaryQuery};
pub use get_payment::{GetPaymentHandler, GetPaymentQuery};
pub use list_bills::{ListBillsHandler, ListBillsQuery};
pub use list_payments::{ListPaymentsHandler, ListPaymentsQuery};
pub use update_bill::{UpdateBillCommand, UpdateBillHandler};
pub use update_payment::{UpdatePaymentCommand, UpdatePaymentHandler};
