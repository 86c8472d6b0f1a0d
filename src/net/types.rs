//! Wire types shared with the diary server (camelCase JSON).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// The authenticated user as returned by `GET /api/users/me`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// One diary entry as listed by `GET /api/diaries`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryEntry {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body for `POST /api/diaries`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct NewEntry {
    pub title: String,
    pub content: String,
}

/// Body for `PATCH /api/diaries/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct EntryPatch {
    pub title: String,
    pub content: String,
}

/// Sort order for the diary list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Desc,
    Asc,
}

impl SortOrder {
    pub fn as_param(self) -> &'static str {
        match self {
            Self::Desc => "desc",
            Self::Asc => "asc",
        }
    }

    pub fn from_param(value: &str) -> Self {
        if value == "asc" { Self::Asc } else { Self::Desc }
    }
}

/// Body for `POST /api/users/login`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body for `POST /api/users/signup`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
    pub email: String,
}

/// Body for `POST /api/users/find-id`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct FindIdRequest {
    pub email: String,
}

/// Response from `POST /api/users/find-id`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindIdResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub masked_user_id: Option<String>,
}

/// Body for `POST /api/users/request-password-reset`. The server matches
/// on both the account name and the registered email.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordResetRequest {
    pub user_id: String,
    pub email: String,
}

/// Body for `POST /api/users/reset-password`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub token: String,
    pub new_password: String,
}

/// Generic success/message envelope used by the recovery endpoints.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}
