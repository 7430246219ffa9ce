pub mod common;
pub mod health;
pub mod ingredient;
pub mod scan;
pub mod user;
