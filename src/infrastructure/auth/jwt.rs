use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, Header, TokenData, Validation};

use crate::entities::admin::Admin;
use crate::entities::token::Claims;
use crate::errors::AuthError;
use crate::settings::{AppConfig, JwtKeys};

const JWT_ALGORITHM: Algorithm = Algorithm::HS512;

#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    expiration: Duration,
}

impl JwtService {
    pub fn new(config: &AppConfig) -> Self {
        JwtService {
            keys: JwtKeys::from(config),
            expiration: Duration::minutes(config.jwt_expiration_minutes),
        }
    }

    pub fn create_jwt(&self, admin: &Admin) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: admin.id.to_string(),
            email: admin.email.clone(),
            iat: now.timestamp() as usize,
            exp: (now + self.expiration).timestamp() as usize,
        };

        encode(&Header::new(JWT_ALGORITHM), &claims, &self.keys.encoding).map_err(AuthError::from)
    }

    pub fn decode_jwt(&self, token: &str) -> Result<TokenData<Claims>, AuthError> {
        let mut validation = Validation::new(JWT_ALGORITHM);
        validation.validate_exp = true;

        decode::<Claims>(token, &self.keys.decoding, &validation).map_err(AuthError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::AppConfig;
    use uuid::Uuid;

    fn service() -> JwtService {
        let mut config = AppConfig::for_tests();
        config.jwt_secret = "0123456789abcdef0123456789abcdef".to_string();
        JwtService::new(&config)
    }

    fn admin() -> Admin {
        Admin {
            id: Uuid::new_v4(),
            email: "admin@example.com".to_string(),
            password_hash: String::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn issued_token_round_trips() {
        let service = service();
        let admin = admin();

        let token = service.create_jwt(&admin).unwrap();
        let decoded = service.decode_jwt(&token).unwrap();

        assert_eq!(decoded.claims.sub, admin.id.to_string());
        assert_eq!(decoded.claims.email, admin.email);
        assert!(decoded.claims.exp > decoded.claims.iat);
    }

    #[test]
    fn tampered_token_is_rejected() {
        let service = service();
        let mut token = service.create_jwt(&admin()).unwrap();
        token.push('x');

        assert!(service.decode_jwt(&token).is_err());
    }
}
