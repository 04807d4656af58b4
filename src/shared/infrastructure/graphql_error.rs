use crate::shared::core::errors::Classify;
use async_graphql::ErrorExtensions;
use std::fmt::Display;

/// Carries the error kind to GraphQL clients as `extensions.kind`.
pub fn gql_error<E>(error: E) -> async_graphql::Error
where
    E: Classify + Display,
{
    let kind = error.kind();
    async_graphql::Error::new(error.to_string()).extend_with(|_, extensions| {
        extensions.set("kind", kind.as_str());
        extensions.set("retryable", kind.is_retryable());
    })
}
