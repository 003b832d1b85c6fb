pub mod api;
pub mod catalog;
pub mod installation;
