pub mod entities;
pub mod ports;
pub mod services;

pub use entities::{Ingredient, NewIngredient};
pub use ports::IngredientRepository;
