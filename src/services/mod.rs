pub mod balance_service;
pub mod ledger;
