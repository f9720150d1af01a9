use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpenseError {
    #[error("Invalid date '{0}': use YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid amount '{0}': expected a number")]
    InvalidAmount(String),
}
