use super::{Policy, Role};
use crate::error::WrenchError;
use actix_web::HttpRequest;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use wrench_infra::WrenchContext;
use wrench_domain::ID;

/// The authenticated caller as the identity provider vouches for it
#[derive(Debug, Clone)]
pub struct Principal {
    pub user_id: ID,
    pub name: String,
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Claims {
    exp: usize, // Required (validate_exp defaults to true in validation). Expiration time (as UTC timestamp)
    iat: usize, // Optional. Issued at (as UTC timestamp)
    user_id: String, // Subject (whom token refers to)
    name: String,
    email: String,
    role: Role,
}

fn parse_authtoken_header(token_header_value: &str) -> String {
    let mut token = token_header_value.replace("Bearer", "");
    token = token.replace("bearer", "");
    String::from(token.trim())
}

fn auth_user_req(req: &HttpRequest, ctx: &WrenchContext) -> Option<Principal> {
    let token = req.headers().get("authorization")?;
    let token = match token.to_str() {
        Ok(token) => parse_authtoken_header(token),
        Err(_) => return None,
    };
    let decoding_key = DecodingKey::from_secret(ctx.config.token_signing_secret.as_bytes());
    let token_data =
        match decode::<Claims>(&token, &decoding_key, &Validation::new(Algorithm::HS256)) {
            Ok(data) => data,
            Err(_) => return None,
        };
    let claims = token_data.claims;
    let user_id = claims.user_id.parse::<ID>().ok()?;
    Some(Principal {
        user_id,
        name: claims.name,
        email: claims.email,
        role: claims.role,
    })
}

/// Requires a valid bearer credential and yields the caller and the
/// `Policy` its role claim maps to
pub fn protect_route(
    req: &HttpRequest,
    ctx: &WrenchContext,
) -> Result<(Principal, Policy), WrenchError> {
    match auth_user_req(req, ctx) {
        Some(principal) => {
            let policy = principal.role.policy();
            Ok((principal, policy))
        }
        None => Err(WrenchError::Unauthorized(
            "Missing or invalid bearer credential".into(),
        )),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use actix_web::test::TestRequest;
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn token_for(role: Role, secret: &str) -> String {
        let claims = Claims {
            exp: usize::MAX,
            iat: 0,
            user_id: ID::new().as_string(),
            name: "Test Person".into(),
            email: "person@example.com".into(),
            role,
        };
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[actix_web::test]
    async fn accepts_valid_bearer_token() {
        let ctx = WrenchContext::create_inmemory();
        let token = token_for(Role::Worker, &ctx.config.token_signing_secret);
        let req = TestRequest::default()
            .insert_header(("authorization", format!("Bearer {}", token)))
            .to_http_request();

        let (principal, policy) = protect_route(&req, &ctx).expect("Valid token to be accepted");
        assert_eq!(principal.role, Role::Worker);
        assert_eq!(principal.email, "person@example.com");
        assert!(policy.authorize(&[crate::shared::auth::Permission::ScheduleService]));
    }

    #[actix_web::test]
    async fn rejects_missing_authorization_header() {
        let ctx = WrenchContext::create_inmemory();
        let req = TestRequest::default().to_http_request();
        assert!(protect_route(&req, &ctx).is_err());
    }

    #[actix_web::test]
    async fn rejects_token_signed_with_other_secret() {
        let ctx = WrenchContext::create_inmemory();
        let token = token_for(Role::Admin, "not-the-configured-secret");
        let req = TestRequest::default()
            .insert_header(("authorization", format!("Bearer {}", token)))
            .to_http_request();
        assert!(protect_route(&req, &ctx).is_err());
    }
}
