use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Flatten a `validator` error tree into a single `Validation` variant
    /// listing every failed field, not just the first.
    pub fn from_validation(errors: &validator::ValidationErrors) -> Self {
        let mut parts: Vec<String> = errors
            .field_errors()
            .iter()
            .map(|(field, errs)| {
                let reasons: Vec<String> = errs
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect();
                format!("{field}: {}", reasons.join(", "))
            })
            .collect();
        parts.sort();
        CoreError::Validation(parts.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use validator::Validate;

    #[derive(Validate)]
    struct Payload {
        #[validate(length(min = 1, message = "must not be empty"))]
        name: String,
        #[validate(range(min = 0.0, message = "must be non-negative"))]
        price: f64,
    }

    #[test]
    fn validation_error_lists_every_failed_field() {
        let bad = Payload {
            name: String::new(),
            price: -1.0,
        };
        let errors = bad.validate().unwrap_err();
        let core = CoreError::from_validation(&errors);
        assert_matches!(&core, CoreError::Validation(_));

        let msg = core.to_string();
        assert!(msg.contains("name: must not be empty"), "{msg}");
        assert!(msg.contains("price: must be non-negative"), "{msg}");
    }
}
