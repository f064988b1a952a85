use validator::Validate;

use crate::auth::jwt::JwtService;
use crate::auth::password::verify_password;
use crate::entities::token::AuthResponse;
use crate::entities::user::LoginUser;
use crate::errors::AuthError;
use crate::interfaces::repositories::user::UserRepository;

pub struct AuthHandler<R>
where
    R: UserRepository,
{
    pub user_repo: R,
    pub jwt_service: JwtService,
}

impl<R> AuthHandler<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: R, jwt_service: JwtService) -> Self {
        AuthHandler {
            user_repo,
            jwt_service,
        }
    }

    /// Validates credentials and mints an access token. Staff-ness is
    /// carried in the claims and enforced at the admin boundary, not here.
    pub async fn login(&self, request: LoginUser) -> Result<AuthResponse, AuthError> {
        request.validate()?;

        let user = self
            .user_repo
            .get_user_by_email(&request.email)
            .await
            .map_err(|_e| AuthError::WrongCredentials)?
            .ok_or(AuthError::WrongCredentials)?;

        let is_password_valid =
            verify_password(&request.password, &user.password_hash).map_err(|_| AuthError::WrongCredentials)?;
        if !is_password_valid {
            return Err(AuthError::WrongCredentials);
        }

        let access_token = self.jwt_service.create_jwt(&user).map_err(|e| {
            tracing::warn!("Failed to create JWT: {}", e);
            AuthError::TokenCreation
        })?;

        tracing::info!(username = %user.username, "User logged in");
        Ok(AuthResponse::new(access_token))
    }
}
