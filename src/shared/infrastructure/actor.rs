use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use std::convert::Infallible;

pub const ACTOR_HEADER: &str = "x-actor-id";
const ANONYMOUS: &str = "anonymous";

/// Who is making the request, as forwarded by the gateway in `x-actor-id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor(pub String);

impl Actor {
    /// The actor the `/gql` endpoint attached to the request, anonymous when absent.
    pub fn of(context: &async_graphql::Context<'_>) -> String {
        context
            .data_opt::<Actor>()
            .map(|actor| actor.0.clone())
            .unwrap_or_else(|| ANONYMOUS.to_string())
    }
}

impl<S> FromRequestParts<S> for Actor
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let id = parts
            .headers
            .get(ACTOR_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(ANONYMOUS);
        Ok(Actor(id.to_string()))
    }
}
