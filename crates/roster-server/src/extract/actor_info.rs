//! Audit actor extractor for mutating request handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use derive_more::{Deref, DerefMut};
use roster_postgres::types::Actor;

use crate::handler::Error;

/// Name of the request header carrying the caller identity.
pub const ACTOR_HEADER: &str = "x-actor";

/// Extractor that resolves the audit actor for a request.
///
/// Reads the `x-actor` header and falls back to [`Actor::anonymous`]
/// when the header is absent or not valid UTF-8. The resolved actor is
/// recorded in the `created_by`/`updated_by`/`deleted_by` audit columns
/// by mutating handlers.
#[derive(Debug, Clone, Deref, DerefMut)]
pub struct ActorInfo(pub Actor);

impl ActorInfo {
    /// Returns the inner [`Actor`].
    pub fn into_inner(self) -> Actor {
        self.0
    }
}

impl<S> FromRequestParts<S> for ActorInfo
where
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let actor = parts
            .headers
            .get(ACTOR_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(Actor::new)
            .unwrap_or_else(Actor::anonymous);

        Ok(ActorInfo(actor))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::Request;

    use super::*;

    async fn resolve(request: Request<()>) -> Actor {
        let (mut parts, _) = request.into_parts();
        let info = <ActorInfo as FromRequestParts<()>>::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        info.into_inner()
    }

    #[tokio::test]
    async fn header_names_the_actor() {
        let request = Request::builder()
            .header(ACTOR_HEADER, "hr-admin")
            .body(())
            .unwrap();
        assert_eq!(resolve(request).await.name(), "hr-admin");
    }

    #[tokio::test]
    async fn missing_header_is_anonymous() {
        let request = Request::builder().body(()).unwrap();
        assert_eq!(resolve(request).await.name(), Actor::ANONYMOUS);
    }

    #[tokio::test]
    async fn blank_header_is_anonymous() {
        let request = Request::builder()
            .header(ACTOR_HEADER, "   ")
            .body(())
            .unwrap();
        assert_eq!(resolve(request).await.name(), Actor::ANONYMOUS);
    }
}
