pub mod appointments;
pub mod businesses;
pub mod health;
pub mod public;
pub mod services;
