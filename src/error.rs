use thiserror::Error;

/// A submitted form could not be turned into a calculation or a batch.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Missing required field `{0}`")]
    MissingField(&'static str),

    #[error("Field `{field}` is not a number: {value:?}")]
    NotANumber { field: &'static str, value: String },

    /// The parallel `nombre[]`, `apellido[]`, `dia[]` and `cantidad_recolectada[]` arrays differ in length.
    #[error(
        "Row arrays differ in length (names: {names}, last names: {last_names}, days: {days}, quantities: {quantities})"
    )]
    MismatchedRows {
        names: usize,
        last_names: usize,
        days: usize,
        quantities: usize,
    },

    #[error("Unknown weekday {0:?}")]
    UnknownDay(String),
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Outcome of saving a worker batch that did not end in a stored batch.
#[derive(Error, Debug)]
pub enum SaveError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
