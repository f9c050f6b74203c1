//! User DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{CreateWorkerDto, UpdateUserDto, WorkerSummary};

/// Create worker request. No field is required.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateWorkerRequest {
    #[serde(rename = "fullName")]
    pub full_name: Option<String>,
    pub personal_id: Option<String>,
    pub phone: Option<String>,
    pub work_type: Option<String>,
    pub password: Option<String>,
}

impl From<CreateWorkerRequest> for CreateWorkerDto {
    fn from(r: CreateWorkerRequest) -> Self {
        Self {
            full_name: r.full_name,
            personal_id: r.personal_id,
            phone: r.phone,
            work_type: r.work_type,
            password: r.password,
        }
    }
}

/// Update user request.
///
/// Fields that are sent are applied verbatim, empty strings included.
/// Omitted or `null` fields keep their stored value. Unknown keys, `role`
/// among them, are ignored.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    #[serde(rename = "fullName")]
    pub full_name: Option<String>,
    pub personal_id: Option<String>,
    pub phone: Option<String>,
    pub work_type: Option<String>,
    pub password: Option<String>,
}

impl From<UpdateUserRequest> for UpdateUserDto {
    fn from(r: UpdateUserRequest) -> Self {
        Self {
            full_name: r.full_name,
            personal_id: r.personal_id,
            phone: r.phone,
            work_type: r.work_type,
            password: r.password,
        }
    }
}

/// List workers query parameters.
///
/// Both values are parsed leniently: anything missing or non-numeric falls
/// back to the default.
#[derive(Debug, Default, PartialEq, Eq, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListWorkersParams {
    /// 1-based page number (default 1)
    pub page: Option<String>,
    /// Rows per page (default 20). Also accepted as `offset`.
    #[serde(rename = "pageSize", alias = "offset")]
    pub page_size: Option<String>,
}

impl ListWorkersParams {
    /// Pick the pagination values out of raw query pairs.
    ///
    /// The first occurrence of a key wins, and `pageSize` wins over `offset`
    /// wherever they appear. Other keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut page = None;
        let mut page_size = None;
        let mut offset = None;

        for (key, value) in pairs {
            let slot = match key.as_str() {
                "page" => &mut page,
                "pageSize" => &mut page_size,
                "offset" => &mut offset,
                _ => continue,
            };
            slot.get_or_insert(value);
        }

        Self {
            page,
            page_size: page_size.or(offset),
        }
    }
}

/// Redacted worker row
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WorkerDto {
    pub id: i32,
    #[serde(rename = "fullName")]
    pub full_name: Option<String>,
    pub personal_id: Option<String>,
    pub phone: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl From<WorkerSummary> for WorkerDto {
    fn from(w: WorkerSummary) -> Self {
        Self {
            id: w.id,
            full_name: w.full_name,
            personal_id: w.personal_id,
            phone: w.phone,
            created_at: w.created_at,
            updated_at: w.updated_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WorkersResponse {
    pub success: bool,
    pub workers: Vec<WorkerDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_request_distinguishes_absent_from_empty() {
        let req: UpdateUserRequest =
            serde_json::from_str(r#"{"fullName": "", "phone": null, "role": "admin"}"#).unwrap();

        assert_eq!(req.full_name.as_deref(), Some(""));
        assert!(req.phone.is_none());
        assert!(req.work_type.is_none());
    }

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn list_params_accept_legacy_offset_name() {
        let params = ListWorkersParams::from_pairs(pairs(&[("page", "2"), ("offset", "10")]));
        assert_eq!(params.page.as_deref(), Some("2"));
        assert_eq!(params.page_size.as_deref(), Some("10"));
    }

    #[test]
    fn list_params_prefer_page_size_over_offset() {
        let params = ListWorkersParams::from_pairs(pairs(&[("offset", "10"), ("pageSize", "5")]));
        assert_eq!(params.page_size.as_deref(), Some("5"));
    }

    #[test]
    fn list_params_keep_first_repeated_value() {
        let params = ListWorkersParams::from_pairs(pairs(&[
            ("page", "1"),
            ("page", "2"),
            ("sort", "name"),
        ]));
        assert_eq!(params.page.as_deref(), Some("1"));
        assert!(params.page_size.is_none());
    }

    #[test]
    fn worker_dto_never_carries_redacted_fields() {
        let dto = WorkerDto {
            id: 2,
            full_name: Some("Jane".into()),
            personal_id: None,
            phone: Some("555".into()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(&dto).unwrap();
        let obj = json.as_object().unwrap();

        assert!(obj.contains_key("fullName"));
        for key in ["password", "password_hash", "role", "work_type"] {
            assert!(!obj.contains_key(key), "{key} leaked");
        }
    }
}
