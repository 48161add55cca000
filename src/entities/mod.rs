pub mod booking;
pub mod flight;
pub mod planet;
pub mod pod;
pub mod profile;
pub mod user;
