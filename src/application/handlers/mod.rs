//! Application handlers.
//!
//! One command or query handler per file, grouped by context. Handlers
//! receive their ports as `Arc<dyn Trait>` and scope every read and write
//! to the tenant of the caller.

pub mod billing;
pub mod screening;
pub mod tax;
pub mod warranty;

#[cfg(test)]
pub(crate) mod test_support;
