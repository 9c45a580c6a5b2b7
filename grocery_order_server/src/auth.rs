//! Caller identity handling.
//!
//! Every core endpoint requires the caller to identify itself via the `USER_ID` header. The value
//! is taken at face value; authenticating it is the job of the gateway in front of this service.

use std::future::{ready, Ready};

use actix_web::{dev::Payload, FromRequest, HttpRequest};
use log::*;

use crate::errors::ServerError;

pub const USER_ID_HEADER: &str = "USER_ID";

/// The caller's identity, extracted from the [`USER_ID_HEADER`] header. Requests without the
/// header are rejected before any body processing happens.
#[derive(Debug, Clone)]
pub struct CallerIdentity {
    pub user_id: String,
}

impl FromRequest for CallerIdentity {
    type Error = ServerError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let user_id = req.headers().get(USER_ID_HEADER).and_then(|v| v.to_str().ok()).map(|s| s.to_string());
        let result = match user_id {
            Some(user_id) => Ok(CallerIdentity { user_id }),
            None => {
                debug!("💻️ Request rejected: no {USER_ID_HEADER} header");
                Err(ServerError::MissingIdentityHeader)
            },
        };
        ready(result)
    }
}
