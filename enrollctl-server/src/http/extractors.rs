//! Custom Axum extractors

use std::marker::PhantomData;

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;

/// A resource addressed by numeric id
pub trait Resource {
    /// 404 message for an id with no row behind it
    const NOT_FOUND: &'static str;
}

/// Extract a numeric row id from the path.
///
/// Only plain non-negative integers match; anything else is answered like an
/// unknown route. A numeric id too large for `INTEGER` cannot name a row, so
/// it gets the resource's own not-found message.
pub struct EntityId<R>(pub i32, pub PhantomData<fn() -> R>);

impl<S, R> FromRequestParts<S> for EntityId<R>
where
    S: Send + Sync,
    R: Resource,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::not_found("Not found"))?;

        match parse_id(&raw) {
            PathId::Id(id) => Ok(Self(id, PhantomData)),
            PathId::OutOfRange => Err(ApiError::not_found(R::NOT_FOUND)),
            PathId::Invalid => Err(ApiError::not_found("Not found")),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum PathId {
    Id(i32),
    OutOfRange,
    Invalid,
}

fn parse_id(raw: &str) -> PathId {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return PathId::Invalid;
    }
    // All digits, so the only way to fail is overflow.
    raw.parse().map_or(PathId::OutOfRange, PathId::Id)
}
