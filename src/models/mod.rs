mod customer;
mod order;
mod refund;
mod transaction;

pub use customer::Customer;
pub use order::Order;
pub use refund::Refund;
pub use transaction::Transaction;
