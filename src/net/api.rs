//! REST API helpers for the course service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side (SSR):
//! stubs returning errors since every endpoint is only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` so a failed fetch degrades into a page
//! notice instead of crashing hydration. Requests are never retried and a
//! rejected token is reported like any other failure; only the route guard
//! redirects.
//!
//! Authenticated calls send the raw stored token verbatim as the
//! `Authorization` header value. The API does not use a `Bearer ` prefix.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Course, CourseDraft};
#[cfg(any(test, feature = "hydrate"))]
use serde::Deserialize;
#[cfg(feature = "hydrate")]
use serde::de::DeserializeOwned;

#[cfg(any(test, feature = "hydrate"))]
fn api_url(path: &str) -> String {
    let base = option_env!("COURSEBOARD_API_URL").unwrap_or("/api");
    format!("{base}{path}")
}

#[cfg(any(test, feature = "hydrate"))]
fn course_endpoint(id: &str) -> String {
    format!("/admin/course/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn course_mutation_endpoint(id: &str) -> String {
    format!("/admin/courses/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn enroll_endpoint(course_id: &str) -> String {
    format!("/users/enroll/{course_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(operation: &str, status: u16) -> String {
    format!("{operation} failed: {status}")
}

/// Generic `{ "data": ... }` envelope every endpoint responds with.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    data: T,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct TokenPayload {
    token: String,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct CourseListPayload {
    courses: Vec<Course>,
}

/// The single-course endpoint keeps the plural field name on the wire.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct SingleCoursePayload {
    courses: Course,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct EnrollmentsPayload {
    #[serde(rename = "enrolledCourses")]
    enrolled_courses: Vec<Course>,
}

#[cfg(feature = "hydrate")]
async fn read_envelope<T: DeserializeOwned>(
    resp: gloo_net::http::Response,
    operation: &str,
) -> Result<T, String> {
    if !resp.ok() {
        return Err(request_failed_message(operation, resp.status()));
    }
    let body: ApiEnvelope<T> = resp.json().await.map_err(|e| e.to_string())?;
    Ok(body.data)
}

/// Exchange a user ID for a session token via `POST /users/login`.
///
/// # Errors
///
/// Returns an error string when the request fails or is rejected.
pub async fn login(user_id: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "userId": user_id });
        let resp = gloo_net::http::Request::post(&api_url("/users/login"))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let body: TokenPayload = read_envelope(resp, "login").await?;
        Ok(body.token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        Err("not available on server".to_owned())
    }
}

/// Fetch the public course catalog via `GET /admin/courses`. No auth header.
///
/// # Errors
///
/// Returns an error string when the request fails.
pub async fn fetch_catalog() -> Result<Vec<Course>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&api_url("/admin/courses"))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let body: CourseListPayload = read_envelope(resp, "course list").await?;
        Ok(body.courses)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch the admin course inventory via `GET /admin/adminCourses`.
///
/// # Errors
///
/// Returns an error string when the request fails.
pub async fn fetch_admin_courses(token: &str) -> Result<Vec<Course>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&api_url("/admin/adminCourses"))
            .header("Authorization", token)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_envelope(resp, "admin course list").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}

/// Fetch one course via `GET /admin/course/:id`.
///
/// # Errors
///
/// Returns an error string when the request fails.
pub async fn fetch_course(token: &str, id: &str) -> Result<Course, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&api_url(&course_endpoint(id)))
            .header("Authorization", token)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let body: SingleCoursePayload = read_envelope(resp, "course").await?;
        Ok(body.courses)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        Err("not available on server".to_owned())
    }
}

/// Create a course via `POST /admin/courses`.
///
/// # Errors
///
/// Returns an error string when the request fails.
pub async fn create_course(token: &str, draft: &CourseDraft) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&api_url("/admin/courses"))
            .header("Authorization", token)
            .json(draft)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("create course", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, draft);
        Err("not available on server".to_owned())
    }
}

/// Update a course via `PUT /admin/courses/:id`.
///
/// # Errors
///
/// Returns an error string when the request fails.
pub async fn update_course(token: &str, id: &str, draft: &CourseDraft) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put(&api_url(&course_mutation_endpoint(id)))
            .header("Authorization", token)
            .json(draft)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("update course", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id, draft);
        Err("not available on server".to_owned())
    }
}

/// Delete a course via `DELETE /admin/courses/:id`.
///
/// # Errors
///
/// Returns an error string when the request fails.
pub async fn delete_course(token: &str, id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&api_url(&course_mutation_endpoint(id)))
            .header("Authorization", token)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("delete course", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        Err("not available on server".to_owned())
    }
}

/// Check whether `user_id` is enrolled in `course_id` via
/// `GET /users/check-enrollment`.
///
/// # Errors
///
/// Returns an error string when the request fails.
pub async fn check_enrollment(token: &str, user_id: &str, course_id: &str) -> Result<bool, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&api_url("/users/check-enrollment"))
            .query([("userId", user_id), ("courseId", course_id)])
            .header("Authorization", token)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_envelope(resp, "enrollment check").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, user_id, course_id);
        Err("not available on server".to_owned())
    }
}

/// Enroll `user_id` in a course via `POST /users/enroll/:id`.
///
/// # Errors
///
/// Returns an error string when the request fails.
pub async fn enroll(token: &str, course_id: &str, user_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "userId": user_id });
        let resp = gloo_net::http::Request::post(&api_url(&enroll_endpoint(course_id)))
            .header("Authorization", token)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("enroll", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, course_id, user_id);
        Err("not available on server".to_owned())
    }
}

/// Fetch the caller's enrolled courses via `GET /users/enrolledCourses`.
///
/// # Errors
///
/// Returns an error string when the request fails.
pub async fn fetch_enrolled_courses(token: &str) -> Result<Vec<Course>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&api_url("/users/enrolledCourses"))
            .header("Authorization", token)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let body: EnrollmentsPayload = read_envelope(resp, "enrolled courses").await?;
        Ok(body.enrolled_courses)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}
