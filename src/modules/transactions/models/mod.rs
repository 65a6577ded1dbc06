mod transaction;
mod transaction_detail;

pub use transaction::{
    NewTransaction, PurchaseItem, PurchaseRequest, PurchaseResponse, Transaction,
    TransactionLine, TransactionResponse,
};
pub use transaction_detail::TransactionDetail;
