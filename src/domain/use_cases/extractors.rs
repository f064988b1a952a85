use actix_web::{FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{ready, Ready};
use uuid::Uuid;

use crate::{entities::token::Claims, errors::AuthError};

/// Extractor for staff claims, ensuring the caller is an authenticated
/// staff user. Returns 401 when unauthenticated and 403 for a valid
/// token without the staff flag.
/// Usage: add `claims: StaffClaims` as a parameter to a handler.
#[derive(Debug)]
pub struct StaffClaims(pub Claims);

impl StaffClaims {
    /// The authenticated user's id, out of the token subject.
    pub fn user_id(&self) -> Result<Uuid, AuthError> {
        Uuid::parse_str(&self.0.sub).map_err(|_| AuthError::InvalidToken)
    }
}

impl FromRequest for StaffClaims {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<Claims>() {
            Some(claims) if claims.staff => ready(Ok(StaffClaims(claims.clone()))),
            Some(_) => ready(Err(AuthError::Forbidden("Staff access required".into()).into())),
            None => ready(Err(AuthError::MissingCredentials.into())),
        }
    }
}
