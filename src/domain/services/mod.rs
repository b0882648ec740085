pub mod export;
pub mod heat;
pub mod lookup;
pub mod metrics;
pub mod normalize;
pub mod ordering;
pub mod pivot_builder;
pub mod statistics;
