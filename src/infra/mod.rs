pub mod export;
pub mod import;
pub mod sample;
pub mod sqlite;
