// Transactions module: purchase recording and read-back

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{
    NewTransaction, PurchaseItem, PurchaseRequest, PurchaseResponse, Transaction,
    TransactionDetail, TransactionLine, TransactionResponse,
};
pub use repositories::{MySqlTransactionRepository, TransactionRepository};
pub use services::TransactionService;
