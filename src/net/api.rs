//! REST API helpers for communicating with the diary server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, session cookie
//! attached by the browser. Server-side (SSR): stubs returning
//! `None`/`Err` since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so a failed
//! fetch degrades the page instead of crashing hydration. Diary-entry
//! calls surface 401 separately so protected pages can route back through
//! the session gate.

#![allow(clippy::unused_async)]

use super::types::{
    ApiResponse, DiaryEntry, EntryPatch, FindIdRequest, FindIdResponse, LoginRequest, NewEntry,
    PasswordResetRequest, ResetPasswordRequest, SignupRequest, SortOrder, User,
};

/// Failure modes for diary-entry calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EntryCallError {
    /// The session expired or was never established; re-gate the page.
    #[error("session expired")]
    Unauthorized,
    #[error("{0}")]
    Other(String),
}

/// Prefer the JSON `message` field of an error body, then the raw text,
/// then the caller's fallback.
#[cfg(feature = "hydrate")]
async fn error_message(resp: &gloo_net::http::Response, fallback: &str) -> String {
    if let Ok(text) = resp.text().await {
        if let Ok(json) = serde_json::from_str::<serde_json::Value>(&text) {
            if let Some(msg) = json.get("message").and_then(|m| m.as_str()) {
                return msg.to_owned();
            }
        }
        if !text.is_empty() {
            return text;
        }
    }
    fallback.to_owned()
}

/// Fetch the currently authenticated user from `/api/users/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/users/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Log in via `POST /api/users/login`. The server establishes the session
/// cookie on success.
///
/// # Errors
///
/// Returns the server's message (or a generic one) on failure.
pub async fn login(req: &LoginRequest) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/users/login")
            .json(req)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.ok() {
            Ok(())
        } else {
            Err(error_message(&resp, "Invalid username or password.").await)
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err("not available on server".to_owned())
    }
}

/// Log out via `POST /api/users/logout`. Failures are ignored; the caller
/// clears the advisory cache and navigates away regardless.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/users/logout")
            .send()
            .await;
    }
}

/// Register a new account via `POST /api/users/signup`.
///
/// # Errors
///
/// Returns the server's message (or a generic one) on failure.
pub async fn signup(req: &SignupRequest) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/users/signup")
            .json(req)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.ok() {
            Ok(())
        } else {
            Err(error_message(&resp, "Signup failed. Check your input.").await)
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err("not available on server".to_owned())
    }
}

/// Look up a masked account name by email via `POST /api/users/find-id`.
///
/// # Errors
///
/// Returns the server's message (or a generic one) on failure.
pub async fn find_id(req: &FindIdRequest) -> Result<FindIdResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/users/find-id")
            .json(req)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.ok() {
            resp.json::<FindIdResponse>().await.map_err(|e| e.to_string())
        } else {
            Err(error_message(&resp, "No account found for that email.").await)
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err("not available on server".to_owned())
    }
}

/// Ask for a password-reset mail via `POST /api/users/request-password-reset`.
///
/// # Errors
///
/// Returns the server's message (or a generic one) on failure.
pub async fn request_password_reset(req: &PasswordResetRequest) -> Result<ApiResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/users/request-password-reset")
            .json(req)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.ok() {
            resp.json::<ApiResponse>().await.map_err(|e| e.to_string())
        } else {
            Err(error_message(&resp, "Password reset request failed.").await)
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err("not available on server".to_owned())
    }
}

/// Complete a password reset via `POST /api/users/reset-password`.
///
/// # Errors
///
/// Returns the server's message (or a generic one) on failure.
pub async fn reset_password(req: &ResetPasswordRequest) -> Result<ApiResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/users/reset-password")
            .json(req)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.ok() {
            resp.json::<ApiResponse>().await.map_err(|e| e.to_string())
        } else {
            Err(error_message(&resp, "Password reset failed.").await)
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err("not available on server".to_owned())
    }
}

/// Fetch the diary list via `GET /api/diaries?sort=`.
///
/// # Errors
///
/// `Unauthorized` on 401 so the page can re-gate; `Other` for everything
/// else.
pub async fn fetch_entries(sort: SortOrder) -> Result<Vec<DiaryEntry>, EntryCallError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/diaries?sort={}", sort.as_param());
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| EntryCallError::Other(e.to_string()))?;
        entry_response(resp, "Could not load entries.")
            .await?
            .json::<Vec<DiaryEntry>>()
            .await
            .map_err(|e| EntryCallError::Other(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = sort;
        Err(EntryCallError::Other("not available on server".to_owned()))
    }
}

/// Create a diary entry via `POST /api/diaries`.
///
/// # Errors
///
/// `Unauthorized` on 401; `Other` for everything else.
pub async fn create_entry(entry: &NewEntry) -> Result<(), EntryCallError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/diaries")
            .json(entry)
            .map_err(|e| EntryCallError::Other(e.to_string()))?
            .send()
            .await
            .map_err(|e| EntryCallError::Other(e.to_string()))?;
        entry_response(resp, "Could not save the entry.").await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = entry;
        Err(EntryCallError::Other("not available on server".to_owned()))
    }
}

/// Update a diary entry via `PATCH /api/diaries/{id}`.
///
/// # Errors
///
/// `Unauthorized` on 401; `Other` for everything else.
pub async fn update_entry(id: i64, patch: &EntryPatch) -> Result<(), EntryCallError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/diaries/{id}");
        let resp = gloo_net::http::Request::patch(&url)
            .json(patch)
            .map_err(|e| EntryCallError::Other(e.to_string()))?
            .send()
            .await
            .map_err(|e| EntryCallError::Other(e.to_string()))?;
        entry_response(resp, "Could not update the entry.").await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, patch);
        Err(EntryCallError::Other("not available on server".to_owned()))
    }
}

/// Delete a diary entry via `DELETE /api/diaries/{id}`.
///
/// # Errors
///
/// `Unauthorized` on 401; `Other` for everything else.
pub async fn delete_entry(id: i64) -> Result<(), EntryCallError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/diaries/{id}");
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(|e| EntryCallError::Other(e.to_string()))?;
        entry_response(resp, "Could not delete the entry.").await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(EntryCallError::Other("not available on server".to_owned()))
    }
}

/// Map a diary-entry response: 401 to `Unauthorized`, other failures to
/// `Other` with the server's message.
#[cfg(feature = "hydrate")]
async fn entry_response(
    resp: gloo_net::http::Response,
    fallback: &str,
) -> Result<gloo_net::http::Response, EntryCallError> {
    if resp.status() == 401 {
        return Err(EntryCallError::Unauthorized);
    }
    if !resp.ok() {
        return Err(EntryCallError::Other(error_message(&resp, fallback).await));
    }
    Ok(resp)
}
