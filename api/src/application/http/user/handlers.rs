pub mod create_user;
pub mod get_user;
