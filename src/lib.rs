//! POS API backend library
//!
//! Looks up products by code (full JAN or 6-digit short form), records
//! purchase transactions atomically with ordered line details, and reads
//! past transactions back for receipts.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::products;
pub use modules::transactions;
