use crate::application::{ApplicationResult, error::ApplicationError};
use async_graphql::ErrorExtensions;

pub const CODE_BAD_USER_INPUT: &str = "BAD_USER_INPUT";
pub const CODE_INTERNAL: &str = "INTERNAL_SERVER_ERROR";

/// Converts an application failure into a GraphQL error carrying
/// `extensions.code` and the original message.
pub fn to_graphql_error(err: ApplicationError) -> async_graphql::Error {
    let code = if err.is_validation() {
        CODE_BAD_USER_INPUT
    } else {
        tracing::error!(error = %err, "article operation failed");
        CODE_INTERNAL
    };

    async_graphql::Error::new(err.to_string()).extend_with(|_, ext| ext.set("code", code))
}

pub trait IntoGraphqlResult<T> {
    fn into_graphql(self) -> async_graphql::Result<T>;
}

impl<T> IntoGraphqlResult<T> for ApplicationResult<T> {
    fn into_graphql(self) -> async_graphql::Result<T> {
        self.map_err(to_graphql_error)
    }
}
