pub mod entities;
pub mod error;
pub mod services;
pub mod table;
