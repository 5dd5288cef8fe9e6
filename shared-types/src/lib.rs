use serde::{Deserialize, Serialize};

/// Envelope returned by every service call, mirroring the REST backend's
/// `{success, data, message}` contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Alumni,
    Recruiter,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Alumni => "alumni",
            Role::Recruiter => "recruiter",
            Role::Admin => "admin",
        }
    }

    /// Landing page after a successful login.
    pub fn home_route(&self) -> &'static str {
        match self {
            Role::Student | Role::Alumni => "/student/dashboard",
            Role::Recruiter => "/recruiter/dashboard",
            Role::Admin => "/admin/dashboard",
        }
    }
}

/// The signed-in account as persisted under the `user` local-storage key.
/// `company` is set for recruiter accounts only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub company: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobPosting {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub location: String,
    pub category: String,
    pub remote: bool,
    pub salary_range: Option<String>,
    pub description: String,
    pub posted_at: String,
    pub applicant_count: i64,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobApplication {
    pub id: i64,
    pub job_id: i64,
    pub applicant_name: String,
    pub status: String,
    pub submitted_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MentorProfile {
    pub id: i64,
    pub name: String,
    pub class_year: i32,
    pub industry: String,
    pub skills: Vec<String>,
    pub rating: f64,
    pub mentee_count: i32,
    pub accepting: bool,
    pub headline: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MentorshipRequest {
    pub id: i64,
    pub mentor_id: i64,
    pub mentor_name: String,
    pub student_name: String,
    pub focus: String,
    pub status: String,
    pub created_at: String,
}

/// A knowledge capsule: a short write-up shared on the community feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Capsule {
    pub id: i64,
    pub author: String,
    pub title: String,
    pub body: String,
    pub topic: String,
    pub like_count: i64,
    pub bookmark_count: i64,
    pub created_at: String,
    pub status: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    Queued,
    Validating,
    Ingesting,
    Complete,
    Failed,
}

impl UploadStatus {
    /// Whether the upload still needs progress polling.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            UploadStatus::Queued | UploadStatus::Validating | UploadStatus::Ingesting
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            UploadStatus::Queued => "Queued",
            UploadStatus::Validating => "Validating",
            UploadStatus::Ingesting => "Ingesting",
            UploadStatus::Complete => "Complete",
            UploadStatus::Failed => "Failed",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatasetUpload {
    pub id: i64,
    pub file_name: String,
    pub uploaded_by: String,
    pub record_count: i64,
    pub status: UploadStatus,
    pub progress_percent: f32,
    pub failure_reason: Option<String>,
    pub started_at: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlatformStats {
    pub total_members: i64,
    pub active_jobs: i64,
    pub open_mentorships: i64,
    pub capsules_published: i64,
    pub pending_moderation: i64,
    pub active_uploads: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecruiterStats {
    pub open_postings: i64,
    pub total_applicants: i64,
    pub new_this_week: i64,
    pub profile_views: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StudentStats {
    pub applications_submitted: i64,
    pub mentorship_status: String,
    pub profile_completeness: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillNode {
    pub skill: String,
    pub weight: i32,
    pub related: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeatmapCell {
    pub region: String,
    pub candidates: i64,
    pub intensity: f32,
}
