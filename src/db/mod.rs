pub mod connection;
pub mod dao;
pub mod entities;
