pub mod cell;
pub mod grid;
pub mod metrics;
pub mod pivot;
