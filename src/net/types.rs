//! Wire types shared with the platform backend.
//!
//! The backend speaks camelCase JSON and wraps every success payload in a
//! `{ data: … }` envelope; failures carry a human-readable `message` that is
//! surfaced verbatim in the session error state.

use serde::{Deserialize, Serialize};

/// Teacher identity record held by the session while authenticated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
}

/// Credentials for `POST /auth/login`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Fields for `POST /auth/register`. Registering never authenticates; the
/// caller is routed to the verification step afterwards.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
}

/// Out-of-band code submission for `POST /auth/verify-2fa`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    pub email: String,
    pub code: String,
}

/// Body for the email-only operations (resend code, request reset).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailRequest {
    pub email: String,
}

/// Fields for `POST /auth/reset-password`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordResetRequest {
    pub email: String,
    pub code: String,
    pub new_password: String,
}

/// Partial profile update for `PUT /profile`.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
}

/// Token + profile pair returned by sign-in and code verification.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub teacher: Teacher,
}

/// Reference to a freshly registered (unverified) account.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredTeacher {
    pub teacher_id: String,
}

/// Success envelope the backend wraps every payload in.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Error body of a non-success response.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

// ---------------------------------------------------------------------------
// Dashboard aggregate (`GET /dashboard`)
// ---------------------------------------------------------------------------

/// Everything the dashboard view needs, in one authenticated read.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    #[serde(default)]
    pub overview: Overview,
    #[serde(default)]
    pub recent_courses: Vec<RecentCourse>,
    #[serde(default)]
    pub recent_exams: Vec<RecentExam>,
    #[serde(default)]
    pub recent_results: Vec<RecentResult>,
    #[serde(default)]
    pub classes: Vec<ClassSummary>,
    #[serde(default)]
    pub groups: Vec<GroupSummary>,
}

/// Aggregate counts across the teacher's entities.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    #[serde(default)]
    pub total_classes: u32,
    #[serde(default)]
    pub total_groups: u32,
    #[serde(default)]
    pub total_courses: u32,
    #[serde(default)]
    pub total_exams: u32,
    #[serde(default)]
    pub total_students: u32,
    #[serde(default)]
    pub total_results: u32,
    #[serde(default)]
    pub average_score: f64,
    #[serde(default)]
    pub pass_rate: f64,
}

/// Populated class reference on a course.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassRef {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub year: String,
}

/// Populated group reference on a course.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupRef {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub max_students: u32,
}

/// Name-only populated reference.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameRef {
    #[serde(default)]
    pub name: String,
}

/// Title-only populated reference.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleRef {
    #[serde(default)]
    pub title: String,
}

/// Populated student reference on a result.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRef {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentCourse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub class_id: ClassRef,
    #[serde(default)]
    pub group_ids: Vec<GroupRef>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentExam {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    /// ISO-8601 timestamps; lexicographic order matches chronological order.
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub course_id: NameRef,
    #[serde(default)]
    pub class_id: NameRef,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentResult {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub submitted_at: String,
    #[serde(default)]
    pub student_id: StudentRef,
    #[serde(default)]
    pub exam_id: TitleRef,
    #[serde(default)]
    pub course_id: NameRef,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub student_count: u32,
    #[serde(default)]
    pub course_count: u32,
    #[serde(default)]
    pub exam_count: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub max_students: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub student_count: u32,
    #[serde(default)]
    pub available_slots: u32,
    #[serde(default)]
    pub class_name: String,
}
