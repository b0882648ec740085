pub mod csv;
pub mod source;
pub mod wide;
pub mod xlsx;
