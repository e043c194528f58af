pub mod ledger;
pub mod lifecycle;
pub mod market;
pub mod report;
pub mod rewards;
