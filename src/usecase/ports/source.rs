use crate::domain::entities::cell::SalaryCell;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    Message(String),
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceError::Message(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for SourceError {}

impl From<anyhow::Error> for SourceError {
    fn from(err: anyhow::Error) -> Self {
        SourceError::Message(format!("{err:#}"))
    }
}

/// Retrieval side of the engine: anything that can hand over flat salary records.
pub trait CellSource: Send + Sync {
    fn name(&self) -> String;
    fn list_tables(&self) -> Result<Vec<String>, SourceError>;
    fn list_cells(&self, table_name: &str) -> Result<Vec<SalaryCell>, SourceError>;
}
