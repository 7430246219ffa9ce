pub mod db;
pub mod health;
pub mod ingredient;
pub mod llm;
pub mod scan;
pub mod user;
