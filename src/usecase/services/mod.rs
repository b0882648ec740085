pub mod fallback_source;
pub mod import_service;
pub mod query_service;
