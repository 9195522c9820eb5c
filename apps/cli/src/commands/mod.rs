pub mod catalog;
pub mod scenarios;
pub mod score;
pub mod session;
