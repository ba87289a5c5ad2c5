pub mod ledger;
pub mod money;
