pub mod answer;
pub mod assessment;
pub mod catalog;
pub mod config;
pub mod question;
