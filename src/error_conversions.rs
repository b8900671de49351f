//! Error conversion glue between the domain layer and the error types of the
//! repository and service layers.
//!
//! The domain layer must not depend on service/repository error types.

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;
use crate::services::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_constraint_maps_to_both_layers() {
        let service = ServiceError::from(TypeConstraintError::EmptyString);
        assert!(matches!(service, ServiceError::TypeConstraint(_)));
        assert_eq!(service.user_message("Erro"), "Erro");

        let repo = RepositoryError::from(TypeConstraintError::EmptyString);
        assert!(matches!(repo, RepositoryError::ValidationError(_)));
    }
}
