use leptos::prelude::*;
use leptos::server;
use shared_types::{ApiResponse, HeatmapCell, JobApplication, JobPosting, RecruiterStats};

#[server]
pub async fn list_job_postings() -> Result<ApiResponse<Vec<JobPosting>>, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        use crate::services::{gateway, mock};
        Ok(gateway::get("jobs", mock::list_jobs).await)
    }
    #[cfg(not(feature = "ssr"))]
    {
        Ok(ApiResponse::fail("Not available on the client"))
    }
}

#[server]
pub async fn apply_to_job(
    job_id: i64,
    applicant_name: String,
) -> Result<ApiResponse<JobApplication>, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        use crate::services::{gateway, mock};
        let path = format!("jobs/{job_id}/applications");
        let body = serde_json::json!({ "applicant_name": applicant_name });
        Ok(gateway::post(&path, &body, move || {
            mock::apply_to_job(job_id, &applicant_name)
        })
        .await)
    }
    #[cfg(not(feature = "ssr"))]
    {
        Ok(ApiResponse::fail("Not available on the client"))
    }
}

#[server]
pub async fn recruiter_postings(
    company: String,
) -> Result<ApiResponse<Vec<JobPosting>>, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        use crate::services::{gateway, mock};
        let path = format!("recruiters/{}/postings", urlencoding::encode(&company));
        Ok(gateway::get(&path, move || mock::recruiter_postings(&company)).await)
    }
    #[cfg(not(feature = "ssr"))]
    {
        Ok(ApiResponse::fail("Not available on the client"))
    }
}

#[server(RecruiterStatsFn)]
pub async fn recruiter_stats(company: String) -> Result<ApiResponse<RecruiterStats>, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        use crate::services::{gateway, mock};
        let path = format!("recruiters/{}/stats", urlencoding::encode(&company));
        Ok(gateway::get(&path, move || mock::recruiter_stats(&company)).await)
    }
    #[cfg(not(feature = "ssr"))]
    {
        Ok(ApiResponse::fail("Not available on the client"))
    }
}

#[server]
pub async fn recommended_jobs(limit: i64) -> Result<ApiResponse<Vec<JobPosting>>, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        use crate::services::{gateway, mock};
        let path = format!("jobs/recommended?limit={limit}");
        Ok(gateway::get(&path, move || {
            mock::recommended_jobs(limit.max(0) as usize)
        })
        .await)
    }
    #[cfg(not(feature = "ssr"))]
    {
        Ok(ApiResponse::fail("Not available on the client"))
    }
}

#[server]
pub async fn talent_heatmap() -> Result<ApiResponse<Vec<HeatmapCell>>, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        use crate::services::{gateway, mock};
        Ok(gateway::get("talent/heatmap", mock::talent_heatmap).await)
    }
    #[cfg(not(feature = "ssr"))]
    {
        Ok(ApiResponse::fail("Not available on the client"))
    }
}
