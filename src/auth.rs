//! Authenticated user extracted from the identity cookie.
//!
//! Authentication itself is delegated to the external auth service; this
//! application only validates the JWT it issued and reads its claims.

use std::future::{Ready, ready};

use actix_identity::IdentityExt;
use actix_web::dev::Payload;
use actix_web::error::ErrorUnauthorized;
use actix_web::{FromRequest, HttpRequest, web};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::models::config::ServerConfig;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub email: String,
    pub name: String,
    pub roles: Vec<String>,
    pub exp: usize,
}

impl AuthenticatedUser {
    pub fn from_jwt(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        let decoded = decode::<AuthenticatedUser>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(decoded.claims)
    }

    pub fn to_jwt(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }
}

/// Case-sensitive role membership check.
pub fn check_role(role: &str, roles: &[String]) -> bool {
    roles.iter().any(|r| r == role)
}

impl FromRequest for AuthenticatedUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let user = req
            .get_identity()
            .ok()
            .and_then(|identity| identity.id().ok())
            .and_then(|token| {
                let config = req.app_data::<web::Data<ServerConfig>>()?;
                Self::from_jwt(&token, &config.secret).ok()
            });

        match user {
            Some(user) => ready(Ok(user)),
            None => ready(Err(ErrorUnauthorized("authentication required"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> AuthenticatedUser {
        AuthenticatedUser {
            email: "user@example.com".to_string(),
            name: "User".to_string(),
            roles: vec!["trips".to_string()],
            exp: (chrono::Utc::now().timestamp() + 3600) as usize,
        }
    }

    #[test]
    fn jwt_round_trip_preserves_claims() {
        let user = sample_user();
        let token = user.to_jwt("secret").unwrap();
        let decoded = AuthenticatedUser::from_jwt(&token, "secret").unwrap();
        assert_eq!(decoded.email, user.email);
        assert_eq!(decoded.roles, user.roles);
    }

    #[test]
    fn jwt_with_wrong_secret_is_rejected() {
        let token = sample_user().to_jwt("secret").unwrap();
        assert!(AuthenticatedUser::from_jwt(&token, "other").is_err());
    }

    #[test]
    fn check_role_matches_exactly() {
        let roles = vec!["trips".to_string(), "trips_admin".to_string()];
        assert!(check_role("trips", &roles));
        assert!(check_role("trips_admin", &roles));
        assert!(!check_role("admin", &roles));
    }
}
