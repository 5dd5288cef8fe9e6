use leptos::prelude::*;
use leptos::server;
use shared_types::{ApiResponse, Capsule, DatasetUpload, PlatformStats};

#[server(PlatformStatsFn)]
pub async fn platform_stats() -> Result<ApiResponse<PlatformStats>, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        use crate::services::{gateway, mock};
        Ok(gateway::get("admin/stats", mock::platform_stats).await)
    }
    #[cfg(not(feature = "ssr"))]
    {
        Ok(ApiResponse::fail("Not available on the client"))
    }
}

#[server]
pub async fn list_dataset_uploads() -> Result<ApiResponse<Vec<DatasetUpload>>, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        use crate::services::{gateway, mock};
        Ok(gateway::get("admin/uploads", mock::list_uploads).await)
    }
    #[cfg(not(feature = "ssr"))]
    {
        Ok(ApiResponse::fail("Not available on the client"))
    }
}

#[server]
pub async fn start_dataset_upload(
    file_name: String,
    uploaded_by: String,
) -> Result<ApiResponse<DatasetUpload>, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        use crate::services::{gateway, mock};
        let body = serde_json::json!({
            "file_name": file_name,
            "uploaded_by": uploaded_by,
        });
        Ok(gateway::post("admin/uploads", &body, move || {
            mock::start_upload(&file_name, &uploaded_by)
        })
        .await)
    }
    #[cfg(not(feature = "ssr"))]
    {
        Ok(ApiResponse::fail("Not available on the client"))
    }
}

#[server]
pub async fn pending_capsules() -> Result<ApiResponse<Vec<Capsule>>, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        use crate::services::{gateway, mock};
        Ok(gateway::get("admin/moderation/pending", mock::pending_capsules).await)
    }
    #[cfg(not(feature = "ssr"))]
    {
        Ok(ApiResponse::fail("Not available on the client"))
    }
}

#[server]
pub async fn moderate_capsule(
    capsule_id: i64,
    approve: bool,
) -> Result<ApiResponse<bool>, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        use crate::services::{gateway, mock};
        let path = format!("admin/moderation/{capsule_id}");
        let body = serde_json::json!({ "approve": approve });
        Ok(gateway::post(&path, &body, move || {
            mock::moderate_capsule(capsule_id, approve)
        })
        .await)
    }
    #[cfg(not(feature = "ssr"))]
    {
        Ok(ApiResponse::fail("Not available on the client"))
    }
}
