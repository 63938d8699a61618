//! Product Errors

use std::fmt::{Display, Formatter, Result as FmtResult};

use salvo::{
    oapi::{Components, EndpointOutRegister, Operation, ToResponse, ToSchema},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use inventory_app::domain::products::{ProductsServiceError, validation::FieldError};

/// A rejected field, addressed by its JSON path.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub(crate) struct FieldErrorResponse {
    /// Path of the offending field, e.g. `colorsAndSizes[0].sizes`
    pub field: String,

    /// What is wrong with it
    pub message: String,
}

impl From<FieldError> for FieldErrorResponse {
    fn from(error: FieldError) -> Self {
        FieldErrorResponse {
            field: error.field,
            message: error.message,
        }
    }
}

/// Invalid Request Response
///
/// Lists every problem found, so a client can fix them in one round trip.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub(crate) struct InvalidRequestResponse {
    pub message: String,
    pub errors: Vec<FieldErrorResponse>,
}

/// Errors returned by product handlers.
///
/// Bad input is written as an [`InvalidRequestResponse`] body; everything
/// else goes through salvo's status error catcher.
#[derive(Debug)]
pub(crate) enum ProductsApiError {
    Invalid(InvalidRequestResponse),
    Status(StatusError),
}

impl ProductsApiError {
    pub(crate) fn invalid(message: &str, errors: impl IntoIterator<Item = FieldError>) -> Self {
        Self::Invalid(InvalidRequestResponse {
            message: message.to_string(),
            errors: errors.into_iter().map(Into::into).collect(),
        })
    }
}

impl From<StatusError> for ProductsApiError {
    fn from(status: StatusError) -> Self {
        Self::Status(status)
    }
}

impl From<ProductsServiceError> for ProductsApiError {
    fn from(error: ProductsServiceError) -> Self {
        match error {
            ProductsServiceError::Validation(errors) => {
                Self::invalid("Invalid product data", errors.into_errors())
            }
            ProductsServiceError::InvalidQuery => Self::invalid(
                "Search query is required",
                [FieldError::new("q", "search query must not be empty")],
            ),
            ProductsServiceError::DuplicateModelNumber(model_number) if model_number.is_empty() => {
                StatusError::conflict()
                    .brief("Model number already exists")
                    .into()
            }
            ProductsServiceError::DuplicateModelNumber(model_number) => StatusError::conflict()
                .brief("Model number already exists")
                .detail(format!("model number {model_number:?} is already in use"))
                .into(),
            ProductsServiceError::NotFound => {
                StatusError::not_found().brief("Product not found").into()
            }
            ProductsServiceError::Repository(source) => {
                error!("product store failure: {source}");

                StatusError::internal_server_error().into()
            }
        }
    }
}

impl Display for ProductsApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Invalid(body) => {
                write!(f, "{}", body.message)?;

                for field in &body.errors {
                    write!(f, "; {}: {}", field.field, field.message)?;
                }

                Ok(())
            }
            Self::Status(status) => Display::fmt(status, f),
        }
    }
}

impl Scribe for ProductsApiError {
    fn render(self, res: &mut Response) {
        match self {
            Self::Invalid(body) => {
                res.status_code(StatusCode::BAD_REQUEST);
                res.render(Json(body));
            }
            Self::Status(status) => res.render(status),
        }
    }
}

impl EndpointOutRegister for ProductsApiError {
    fn register(components: &mut Components, operation: &mut Operation) {
        StatusError::register(components, operation);

        operation.responses.insert(
            "400",
            <Json<InvalidRequestResponse> as ToResponse>::to_response(components),
        );
    }
}

/// Map a catalog error onto its HTTP response.
pub(crate) fn into_api_error(error: ProductsServiceError) -> ProductsApiError {
    error.into()
}
