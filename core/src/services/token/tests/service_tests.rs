//! Unit tests for the token service

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use crate::domain::entities::token::{Claims, REFRESH_TOKEN_EXPIRY_DAYS};
use crate::domain::entities::user::UserRole;
use crate::errors::{DomainError, TokenError};
use crate::services::token::{TokenService, TokenServiceConfig};

const TEST_SECRET: &str = "unit-test-secret";

fn test_service() -> TokenService {
    TokenService::new(TokenServiceConfig::new(TEST_SECRET, 900))
}

#[test]
fn access_token_round_trip() {
    let service = test_service();

    let token = service
        .sign_access_token(42, "a@x.com", UserRole::User)
        .unwrap();
    let claims = service.verify_access_token(&token).unwrap();

    assert_eq!(claims.id, 42);
    assert_eq!(claims.email, "a@x.com");
    assert_eq!(claims.role, UserRole::User);
    assert_eq!(claims.exp - claims.iat, 900);
}

#[test]
fn refresh_token_round_trip() {
    let service = test_service();

    let token = service
        .sign_refresh_token(42, "a@x.com", UserRole::Admin)
        .unwrap();
    let claims = service.verify_refresh_token(&token).unwrap();

    assert_eq!(claims.id, 42);
    assert_eq!(claims.email, "a@x.com");
    assert_eq!(claims.role, UserRole::Admin);
    assert_eq!(
        claims.exp - claims.iat,
        REFRESH_TOKEN_EXPIRY_DAYS * 24 * 60 * 60
    );
}

#[test]
fn access_verification_rejects_refresh_tokens() {
    let service = test_service();

    let refresh = service
        .sign_refresh_token(1, "a@x.com", UserRole::User)
        .unwrap();

    assert!(matches!(
        service.verify_access_token(&refresh),
        Err(DomainError::Token(TokenError::InvalidToken))
    ));
}

#[test]
fn refresh_verification_rejects_access_tokens() {
    let service = test_service();

    let access = service
        .sign_access_token(1, "a@x.com", UserRole::User)
        .unwrap();

    assert!(matches!(
        service.verify_refresh_token(&access),
        Err(DomainError::Token(TokenError::InvalidToken))
    ));
}

#[test]
fn expired_token_fails_with_token_expired() {
    let service = test_service();

    // A well-signed token whose expiry is far enough in the past to clear
    // the decoder's leeway window
    let now = Utc::now();
    let claims = Claims {
        id: 1,
        email: "a@x.com".to_string(),
        role: UserRole::User,
        iat: (now - Duration::hours(3)).timestamp(),
        exp: (now - Duration::hours(2)).timestamp(),
    };
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap();

    assert!(matches!(
        service.verify_access_token(&token),
        Err(DomainError::Token(TokenError::TokenExpired))
    ));
}

#[test]
fn tokens_from_a_different_primary_secret_are_rejected() {
    let service = test_service();
    let other = TokenService::new(TokenServiceConfig::new("another-secret", 900));

    let forged = other
        .sign_access_token(1, "a@x.com", UserRole::Admin)
        .unwrap();

    assert!(matches!(
        service.verify_access_token(&forged),
        Err(DomainError::Token(TokenError::InvalidToken))
    ));
}

#[test]
fn malformed_token_is_invalid() {
    let service = test_service();

    assert!(matches!(
        service.verify_access_token("not-a-jwt"),
        Err(DomainError::Token(TokenError::InvalidToken))
    ));
    assert!(matches!(
        service.verify_refresh_token(""),
        Err(DomainError::Token(TokenError::InvalidToken))
    ));
}

#[test]
fn identity_claims_are_embedded_verbatim() {
    let service = test_service();

    let access = service
        .sign_access_token(7, "b@x.com", UserRole::Admin)
        .unwrap();
    let refresh = service
        .sign_refresh_token(7, "b@x.com", UserRole::Admin)
        .unwrap();

    let access_claims = service.verify_access_token(&access).unwrap();
    let refresh_claims = service.verify_refresh_token(&refresh).unwrap();

    assert_eq!(access_claims.id, refresh_claims.id);
    assert_eq!(access_claims.email, refresh_claims.email);
    assert_eq!(access_claims.role, refresh_claims.role);
}
