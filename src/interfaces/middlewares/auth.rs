use actix_web::{
    body::BoxBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::Method,
    web, Error, HttpMessage, HttpResponse, ResponseError,
};
use futures_util::future::{ok, LocalBoxFuture, Ready};
use std::{
    rc::Rc,
    task::{Context, Poll},
};

use crate::{errors::AuthError, AppState};

/// Decodes the bearer token for the staff area and parks the claims in
/// the request extensions. Staff-ness itself is checked by the
/// `StaffClaims` extractor; everything outside `/api/v1/admin` passes
/// through untouched.
pub struct AuthMiddleware;

impl<S> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AuthMiddlewareService {
            service: Rc::new(service),
        })
    }
}

pub struct AuthMiddlewareService<S> {
    service: Rc<S>,
}

impl<S> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            if req.method() == Method::OPTIONS || !is_staff_route(req.path()) {
                return service.call(req).await;
            }

            let jwt_service = match req.app_data::<web::Data<AppState>>() {
                Some(state) => state.jwt_service.clone(),
                None => {
                    tracing::error!("AppState missing in middleware");
                    let response = HttpResponse::InternalServerError()
                        .json(serde_json::json!({"error": "Internal server error"}));
                    return Ok(custom_error_response(req, response));
                }
            };

            let token = match extract_token(&req) {
                Some(token) => token,
                None => {
                    tracing::warn!("Missing or malformed Authorization header");
                    return Ok(custom_error_response(
                        req,
                        AuthError::MissingCredentials.error_response(),
                    ));
                }
            };

            let claims = match jwt_service.decode_jwt(&token) {
                Ok(decoded) => decoded.claims,
                Err(e) => {
                    tracing::warn!(error = %e, "Rejected bearer token");
                    return Ok(custom_error_response(req, e.error_response()));
                }
            };

            req.extensions_mut().insert(claims);
            service.call(req).await
        })
    }
}

fn is_staff_route(path: &str) -> bool {
    path.starts_with("/api/v1/admin")
}

fn extract_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get("Authorization")
        .and_then(|header| header.to_str().ok())
        .and_then(|header| {
            let parts: Vec<&str> = header.split_whitespace().collect();
            if parts.len() == 2 && parts[0].eq_ignore_ascii_case("bearer") {
                Some(parts[1].to_string())
            } else {
                None
            }
        })
}

fn custom_error_response(req: ServiceRequest, res: HttpResponse) -> ServiceResponse<BoxBody> {
    req.into_response(res)
}
