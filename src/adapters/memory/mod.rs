//! In-memory repositories.
//!
//! Backs the `memory` database backend and the handler tests. Each store
//! holds one whole context so parent deletes cascade to child records the
//! same way the Postgres foreign keys do.

mod billing;
mod screening;
mod table;
mod tax;
mod warranty;

pub use billing::InMemoryBillingStore;
pub use screening::InMemoryScreeningStore;
pub use tax::InMemoryTaxStore;
pub use warranty::InMemoryWarrantyStore;
