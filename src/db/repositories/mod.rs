pub mod drink_log_repository;
pub mod profile_repository;
