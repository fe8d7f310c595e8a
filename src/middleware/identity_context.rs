use std::future::{ready, Ready};

use actix_web::{
    dev::Payload, error::ErrorUnauthorized, Error, FromRequest, HttpMessage, HttpRequest,
};

use crate::middleware::identity::Identity;

#[derive(Clone, Debug)]
pub struct SignedInUser {
    pub identity: String,
}

impl FromRequest for SignedInUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        if let Some(Identity(identity)) = req.extensions().get::<Identity>() {
            ready(Ok(SignedInUser {
                identity: identity.clone(),
            }))
        } else {
            ready(Err(ErrorUnauthorized("Please sign in to manage your day plans")))
        }
    }
}
