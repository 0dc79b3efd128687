use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DashError {
    #[error("video catalog is empty")]
    EmptyCatalog,

    #[error("sample table needs between 1 and {max} days, got {0}", max = crate::sample::MAX_DAYS)]
    InvalidDays(usize),
}
