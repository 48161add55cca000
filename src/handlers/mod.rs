pub mod account;
pub mod auth;
pub mod booking;
pub mod catalog;
pub mod inventory;
