//! Registration, login and listing flows behind the HTTP handlers.
//!
//! Validation here is presence-only; the store's unique constraint is the
//! final arbiter of duplicate emails racing past the pre-check.

use sqlx::PgPool;
use tracing::{info, warn};

use crate::auth::dto::{
    ListMeta, ListQuery, LoginRequest, LoginResponse, MessageResponse, Pagination, PublicUser,
    RegisterRequest, UserListResponse,
};
use crate::auth::jwt::JwtKeys;
use crate::auth::password::{hash_password, verify_password};
use crate::auth::repo_types::User;
use crate::error::{ApiError, ApiResult};

fn require_register_fields(req: &RegisterRequest) -> ApiResult<()> {
    if req.name.is_empty() || req.email.is_empty() || req.password.is_empty() {
        return Err(ApiError::Validation(
            "Name, email, and password are required".into(),
        ));
    }
    Ok(())
}

fn require_login_fields(req: &LoginRequest) -> ApiResult<()> {
    if req.email.is_empty() || req.password.is_empty() {
        return Err(ApiError::Validation(
            "Email and password are required".into(),
        ));
    }
    Ok(())
}

pub async fn register(db: &PgPool, req: RegisterRequest) -> ApiResult<MessageResponse> {
    require_register_fields(&req)?;

    if User::find_by_email(db, &req.email).await?.is_some() {
        warn!(email = %req.email, "email already registered");
        return Err(ApiError::Conflict("Email already registered".into()));
    }

    let hash = hash_password(&req.password)?;
    let user = User::create(db, &req.name, &req.email, &hash).await?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok(MessageResponse {
        message: "User registered successfully".into(),
    })
}

pub async fn login(db: &PgPool, keys: &JwtKeys, req: LoginRequest) -> ApiResult<LoginResponse> {
    require_login_fields(&req)?;

    let user = User::find_by_email(db, &req.email)
        .await?
        .ok_or_else(|| {
            warn!(email = %req.email, "login unknown email");
            ApiError::NotFound("User not found".into())
        })?;

    if !verify_password(&req.password, &user.password_hash)? {
        warn!(email = %req.email, user_id = %user.id, "login invalid password");
        return Err(ApiError::InvalidCredentials("Incorrect password".into()));
    }

    let token = keys.sign(&user.email, &user.name)?;

    info!(user_id = %user.id, email = %user.email, "user logged in");
    Ok(LoginResponse {
        success: true,
        message: "Login successful".into(),
        token,
        user: PublicUser {
            email: user.email,
            name: user.name,
        },
    })
}

pub async fn list_users(db: &PgPool, query: ListQuery) -> ApiResult<UserListResponse> {
    let pagination = Pagination::from(&query);

    let total_items = User::count(db).await?;
    let data = User::list_page(db, pagination.limit, pagination.offset()).await?;

    Ok(UserListResponse {
        meta: ListMeta {
            total_items,
            page: pagination.page,
            total_pages: pagination.total_pages(total_items),
        },
        data,
    })
}
