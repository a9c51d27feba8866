use async_graphql::ErrorExtensions;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PetshopError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl PetshopError {
    /// Code reported in the `extensions.code` field of GraphQL errors.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Database(_) | Self::Migration(_) => "STORE_ERROR",
            Self::InvalidId(_) => "INVALID_ID",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Io(_) | Self::Yaml(_) => "INTERNAL_ERROR",
        }
    }
}

impl ErrorExtensions for PetshopError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string())
            .extend_with(|_, e| e.set("code", self.error_code()))
    }
}

pub type Result<T> = std::result::Result<T, PetshopError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_errors_carry_store_code() {
        let err = PetshopError::Database(sqlx::Error::RowNotFound);
        assert_eq!(err.error_code(), "STORE_ERROR");
        assert!(err.to_string().starts_with("Store error"));
    }

    #[test]
    fn test_extend_sets_code_extension() {
        let err = PetshopError::InvalidId("abc".to_string()).extend();
        assert_eq!(err.message, "Invalid id: abc");
        let value = serde_json::to_value(err.extensions.as_ref().unwrap()).unwrap();
        assert_eq!(value["code"], "INVALID_ID");
    }
}
