use std::future::{ready, Ready};

use actix_web::{
    dev::Payload, error::ErrorUnauthorized, Error, FromRequest, HttpMessage, HttpRequest,
};

use crate::models::user::SessionUser;

/// The session placed in request extensions by `AuthMiddleware`.
#[derive(Clone, Debug)]
pub struct AuthenticatedUser(pub SessionUser);

impl AuthenticatedUser {
    pub fn id(&self) -> i64 {
        self.0.id
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        if let Some(user) = req.extensions().get::<SessionUser>() {
            ready(Ok(AuthenticatedUser(user.clone())))
        } else {
            ready(Err(ErrorUnauthorized("User not authenticated")))
        }
    }
}
