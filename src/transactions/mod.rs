pub mod client;
pub mod controller;
pub mod dtos;
pub mod enums;
pub mod errors;
pub mod models;
pub mod store;

#[cfg(test)]
pub mod testing;
