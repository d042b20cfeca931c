//! DTOs for employee endpoints

use std::collections::BTreeMap;

use chrono::{Local, NaiveDateTime};
use rollcall_domain::{CreateEmployee, EmployeeView, UpdateEmployee};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const MESSAGE_NOT_BLANK: &str = "must not be blank";
pub const MESSAGE_AT_LEAST_2_CHARACTERS: &str = "must have at least 2 characters";

const MIN_FIELD_CHARS: usize = 2;

/// Id queried when an update body carries no `uuid`
pub const MISSING_UUID: &str = "null";

/// Request body for create and update
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
    /// Identifier of the employee; required for update, a duplicate check on create
    #[schema(example = "7fe7acdb-0bf4-428a-81ec-689fd2942084")]
    pub uuid: Option<String>,
    #[schema(example = "John")]
    pub first_name: Option<String>,
    #[schema(example = "Doe")]
    pub last_name: Option<String>,
    #[schema(example = "Java Developer")]
    pub job_role: Option<String>,
}

/// Names and role that passed boundary validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedFields {
    pub first_name: String,
    pub last_name: String,
    pub job_role: String,
}

/// Field name -> violation message
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

impl EmployeeRequest {
    /// Check every name/role field, collecting all violations
    pub fn validate(&self) -> Result<ValidatedFields, FieldErrors> {
        let mut errors = FieldErrors::new();

        let first_name = check_field("firstName", self.first_name.as_deref(), &mut errors);
        let last_name = check_field("lastName", self.last_name.as_deref(), &mut errors);
        let job_role = check_field("jobRole", self.job_role.as_deref(), &mut errors);

        match (first_name, last_name, job_role) {
            (Some(first_name), Some(last_name), Some(job_role)) if errors.is_empty() => {
                Ok(ValidatedFields {
                    first_name,
                    last_name,
                    job_role,
                })
            }
            _ => Err(errors),
        }
    }

    pub fn into_create(self, fields: ValidatedFields) -> CreateEmployee {
        CreateEmployee {
            id_hint: self.uuid,
            first_name: fields.first_name,
            last_name: fields.last_name,
            job_role: fields.job_role,
        }
    }

    /// A missing `uuid` is looked up as [`MISSING_UUID`], keeping it apart from `""`
    pub fn into_update(self, fields: ValidatedFields) -> UpdateEmployee {
        UpdateEmployee {
            public_id: self.uuid.unwrap_or_else(|| MISSING_UUID.to_string()),
            first_name: fields.first_name,
            last_name: fields.last_name,
            job_role: fields.job_role,
        }
    }
}

fn check_field(
    name: &'static str,
    value: Option<&str>,
    errors: &mut FieldErrors,
) -> Option<String> {
    let Some(value) = value else {
        errors.insert(name, MESSAGE_NOT_BLANK);
        return None;
    };

    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.insert(name, MESSAGE_NOT_BLANK);
        None
    } else if trimmed.chars().count() < MIN_FIELD_CHARS {
        errors.insert(name, MESSAGE_AT_LEAST_2_CHARACTERS);
        None
    } else {
        Some(value.to_string())
    }
}

/// Response body describing one employee
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    #[schema(example = "7fe7acdb-0bf4-428a-81ec-689fd2942084")]
    pub uuid: String,
    #[schema(example = "John")]
    pub first_name: String,
    #[schema(example = "Doe")]
    pub last_name: String,
    #[schema(example = "Java Developer")]
    pub job_role: String,
    #[schema(value_type = String, example = "2023-02-14T18:48:27.314759")]
    pub created: NaiveDateTime,
}

impl From<EmployeeView> for EmployeeResponse {
    fn from(view: EmployeeView) -> Self {
        Self {
            uuid: view.public_id.into_inner(),
            first_name: view.first_name,
            last_name: view.last_name,
            job_role: view.job_role,
            created: view.created_at,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// When the error was produced
    #[schema(value_type = String, example = "2023-02-14T18:48:27.314759")]
    pub timestamp: NaiveDateTime,
    /// Error description
    #[schema(example = "employee with uuid 7fe7acdb-0bf4-428a-81ec-689fd2942084 not found")]
    pub message: String,
}

impl ErrorResponse {
    pub fn now(message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now().naive_local(),
            message: message.into(),
        }
    }
}

/// Validation failure body: one entry per offending field plus `timestamp`
#[derive(Debug, Serialize)]
pub struct ValidationErrorResponse {
    pub timestamp: NaiveDateTime,
    #[serde(flatten)]
    pub fields: FieldErrors,
}

impl ValidationErrorResponse {
    pub fn now(fields: FieldErrors) -> Self {
        Self {
            timestamp: Local::now().naive_local(),
            fields,
        }
    }
}
