//! Route handlers, grouped by resource

pub mod health;
pub mod league_table;
pub mod matches;
pub mod stadiums;
pub mod teams;

use axum::extract::{rejection::QueryRejection, Query};

use crate::error::{WebServerError, WebServerResult};

/// Turn an axum query rejection into our JSON 400
pub(crate) fn parse_query<Q>(query: Result<Query<Q>, QueryRejection>) -> WebServerResult<Q> {
    query
        .map(|Query(q)| q)
        .map_err(|rejection| WebServerError::invalid(rejection.body_text()))
}
