use crate::domain::errors::DomainError;

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(code) = db_err.code() {
                if code.as_ref() == "22021" {
                    return DomainError::Validation("invalid character sequence".into());
                }
            }

            tracing::warn!(error = %db_err, "database error");
            DomainError::Persistence(db_err.message().to_string())
        }
        _ => {
            tracing::warn!(error = %err, "store error");
            DomainError::Persistence(err.to_string())
        }
    }
}
