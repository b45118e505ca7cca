use crate::domain::errors::DomainError;

const UNIQUE_FAILED: &str = "UNIQUE constraint failed";
const FOREIGN_KEY_FAILED: &str = "FOREIGN KEY constraint failed";
const CHECK_FAILED: &str = "CHECK constraint failed";

const COL_USER_USERNAME: &str = "users.username";
const COL_ARTICLE_SLUG: &str = "articles.slug";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            let message = db_err.message();

            if db_err.is_unique_violation() || message.starts_with(UNIQUE_FAILED) {
                return if message.contains(COL_USER_USERNAME) {
                    DomainError::Conflict("username already exists".into())
                } else if message.contains(COL_ARTICLE_SLUG) {
                    DomainError::Conflict("slug already exists".into())
                } else {
                    DomainError::Conflict("unique constraint violated".into())
                };
            }

            if db_err.is_foreign_key_violation() || message.starts_with(FOREIGN_KEY_FAILED) {
                return DomainError::NotFound("author not found".into());
            }

            if db_err.is_check_violation() || message.starts_with(CHECK_FAILED) {
                return DomainError::Validation("check constraint violated".into());
            }

            DomainError::Persistence(message.to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_database_errors_are_persistence_failures() {
        let err = map_sqlx(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, DomainError::Persistence(_)));
    }
}
