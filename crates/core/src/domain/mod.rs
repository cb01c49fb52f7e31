pub mod fares;
pub mod selection;
pub mod ticket;
