//! Resolution of the user a request acts on behalf of.
//!
//! There is no authentication: every request is attributed to the user id
//! configured in [`AppState::current_user_id`]. Handlers take a
//! [`CurrentUser`] so swapping in a real session lookup only touches this
//! file.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use holonet_domain::id::UserId;

use crate::state::AppState;

/// The acting user for the current request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser(pub UserId);

impl<UR, PR, CR, FR> FromRequestParts<AppState<UR, PR, CR, FR>> for CurrentUser
where
    UR: Send + Sync,
    PR: Send + Sync,
    CR: Send + Sync,
    FR: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState<UR, PR, CR, FR>,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self(state.current_user_id))
    }
}
