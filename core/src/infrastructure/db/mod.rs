pub mod errors;
pub mod postgres;
