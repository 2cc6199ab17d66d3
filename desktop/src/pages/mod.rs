pub mod setup;
pub mod tickets;
