pub mod appointment;
pub mod booking;
pub mod business;
pub mod service;
