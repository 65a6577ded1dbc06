pub mod health;
pub mod products;
pub mod transactions;
