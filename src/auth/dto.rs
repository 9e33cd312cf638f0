use serde::{Deserialize, Serialize};

use crate::auth::repo_types::User;

/// Default number of items per page when not specified in the request.
pub const DEFAULT_LIMIT: i64 = 10;
/// Default starting page number.
pub const DEFAULT_PAGE: i64 = 1;

/// Request body for user registration. Fields default to empty strings so
/// absent JSON keys reach presence validation instead of a serde rejection.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Confirmation body for registration.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Public part of the user returned to the client on login.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub email: String,
    pub name: String,
}

/// Response returned after a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
    pub user: PublicUser,
}

/// Raw query parameters for the user listing. Kept as strings so that
/// non-numeric input falls back to the defaults instead of rejecting the
/// request.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Resolved pagination window. Page and limit are always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
}

fn positive_or(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|v| v.parse::<i64>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(default)
}

impl From<&ListQuery> for Pagination {
    fn from(query: &ListQuery) -> Self {
        Self {
            page: positive_or(query.page.as_deref(), DEFAULT_PAGE),
            limit: positive_or(query.limit.as_deref(), DEFAULT_LIMIT),
        }
    }
}

impl Pagination {
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }

    pub fn total_pages(&self, total_items: i64) -> i64 {
        (total_items + self.limit - 1) / self.limit
    }
}

/// Pagination metadata for the listing response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMeta {
    pub total_items: i64,
    pub page: i64,
    pub total_pages: i64,
}

/// Paginated user listing.
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub meta: ListMeta,
    pub data: Vec<User>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: Option<&str>, limit: Option<&str>) -> ListQuery {
        ListQuery {
            page: page.map(String::from),
            limit: limit.map(String::from),
        }
    }

    #[test]
    fn absent_params_use_defaults() {
        let p = Pagination::from(&query(None, None));
        assert_eq!(p, Pagination { page: 1, limit: 10 });
    }

    #[test]
    fn zero_negative_and_non_numeric_fall_back_to_defaults() {
        for raw in ["0", "-3", "abc", ""] {
            let p = Pagination::from(&query(Some(raw), Some(raw)));
            assert_eq!(p, Pagination { page: 1, limit: 10 }, "input {raw:?}");
        }
    }

    #[test]
    fn valid_params_are_kept() {
        let p = Pagination::from(&query(Some("2"), Some("5")));
        assert_eq!(p, Pagination { page: 2, limit: 5 });
        assert_eq!(p.offset(), 5);
    }

    #[test]
    fn offset_skips_whole_pages() {
        let p = Pagination { page: 3, limit: 10 };
        assert_eq!(p.offset(), 20);
    }

    #[test]
    fn total_pages_is_ceiling_division() {
        let p = Pagination { page: 1, limit: 10 };
        assert_eq!(p.total_pages(0), 0);
        assert_eq!(p.total_pages(1), 1);
        assert_eq!(p.total_pages(10), 1);
        assert_eq!(p.total_pages(11), 2);

        let p = Pagination { page: 2, limit: 5 };
        assert_eq!(p.total_pages(12), 3);
    }

    #[test]
    fn list_meta_uses_camel_case_keys() {
        let meta = ListMeta {
            total_items: 12,
            page: 2,
            total_pages: 3,
        };
        let json = serde_json::to_string(&meta).unwrap();
        assert!(json.contains("\"totalItems\":12"));
        assert!(json.contains("\"totalPages\":3"));
    }

    #[test]
    fn login_response_shape() {
        let response = LoginResponse {
            success: true,
            message: "Login successful".into(),
            token: "jwt".into(),
            user: PublicUser {
                email: "a@x.com".into(),
                name: "Ann".into(),
            },
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["user"]["email"], "a@x.com");
        assert_eq!(json["user"]["name"], "Ann");
    }
}
