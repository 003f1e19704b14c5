pub mod assistant;
pub mod drink_parser;
pub mod history;
pub mod intake;
pub mod ledger;
pub mod profile;
