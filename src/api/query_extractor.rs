use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use std::convert::Infallible;

use crate::model::PageQuery;
use crate::web::paging::DetailQuery;

/// Axum extractor for `?page=&limit=`
///
/// Reads the raw query string instead of going through serde, so repeated or
/// malformed parameters never reject the request; the first value of each key
/// wins and anything unusable falls back to the pagination defaults.
#[async_trait]
impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(PageQuery::from_query_string(parts.uri.query()))
    }
}

/// Axum extractor for the product page's `?from=` return path
#[async_trait]
impl<S> FromRequestParts<S> for DetailQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(DetailQuery::from_query_string(parts.uri.query()))
    }
}
