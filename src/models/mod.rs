pub mod drink;
pub mod goal;
pub mod mood;
pub mod profile;
pub mod session;
