use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of `job_listings`. Every column but the key is nullable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct JobListingRow {
    pub job_id: i64,
    pub company_id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub max_salary: Option<f64>,
    pub med_salary: Option<f64>,
    pub min_salary: Option<f64>,
    pub pay_period: Option<String>,
    pub formatted_work_type: Option<String>,
    pub location: Option<String>,
    pub applies: Option<i64>,
    pub original_listed_time: Option<NaiveDateTime>,
    pub remote_allowed: Option<bool>,
    pub views: Option<i64>,
    pub job_posting_url: Option<String>,
    pub application_url: Option<String>,
    pub application_type: Option<String>,
    pub expiry: Option<NaiveDateTime>,
    pub closed_time: Option<NaiveDateTime>,
    pub formatted_experience_level: Option<String>,
    pub skills_desc: Option<String>,
    pub listed_time: Option<NaiveDateTime>,
    pub posting_domain: Option<String>,
    pub sponsored: Option<bool>,
    pub work_type: Option<String>,
    pub currency: Option<String>,
    pub compensation_type: Option<String>,
}
