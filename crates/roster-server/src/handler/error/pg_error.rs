//! Conversions from database errors into handler responses.

use roster_postgres::types::ConstraintViolation;
use roster_postgres::{DieselError, PgError};

use crate::handler::error::{Error, ErrorKind};

impl From<ConstraintViolation> for Error<'_> {
    fn from(violation: ConstraintViolation) -> Self {
        let kind = match violation {
            ConstraintViolation::EmployeeEmailTaken | ConstraintViolation::DepartmentNameTaken => {
                ErrorKind::Conflict
            }
            ConstraintViolation::DepartmentMissing => ErrorKind::BadRequest,
        };

        Error::new(kind)
            .with_message(violation.message())
            .with_detail(violation.message())
    }
}

impl From<PgError> for Error<'_> {
    fn from(error: PgError) -> Self {
        if let Some(violation) = error.constraint_violation() {
            return violation.into();
        }

        tracing::error!(
            target: "roster_server::handler",
            error = %error,
            transient = error.is_transient(),
            "database operation failed",
        );

        Error::new(ErrorKind::InternalServerError)
    }
}

// Transactions surface raw diesel errors from the closure boundary.
impl From<DieselError> for Error<'_> {
    fn from(error: DieselError) -> Self {
        Error::from(PgError::Query(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_conflict_maps_to_409() {
        let error: Error<'_> = ConstraintViolation::EmployeeEmailTaken.into();
        assert_eq!(error.kind(), ErrorKind::Conflict);
    }

    #[test]
    fn name_conflict_maps_to_409() {
        let error: Error<'_> = ConstraintViolation::DepartmentNameTaken.into();
        assert_eq!(error.kind(), ErrorKind::Conflict);
    }

    #[test]
    fn missing_department_maps_to_400() {
        let error: Error<'_> = ConstraintViolation::DepartmentMissing.into();
        assert_eq!(error.kind(), ErrorKind::BadRequest);
    }

    #[test]
    fn opaque_database_errors_map_to_500() {
        let error: Error<'_> = PgError::Unexpected("connection reset".into()).into();
        assert_eq!(error.kind(), ErrorKind::InternalServerError);
    }
}
