//! Transfer schedule listing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ContentType, Description, Operation};
use crate::clients::HttpMethod;
use crate::config::Endpoint;

/// Lists the account's transfer schedules.
///
/// ```rust,ignore
/// let schedules: ScheduleList = client.execute_json(&ListSchedules::default()).await?;
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSchedules {
    /// Number of records to skip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Maximum number of records to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl Operation for ListSchedules {
    fn describe(&self) -> Description {
        Description::new(Endpoint::API, HttpMethod::Get, "/transfers/schedules")
            .with_content_type(ContentType::Json)
    }
}

/// A page of schedules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleList {
    /// Always `list`.
    pub object: String,
    /// Records on this page.
    pub data: Vec<Schedule>,
    /// Offset of the first record.
    #[serde(default)]
    pub offset: u32,
    /// Page size.
    #[serde(default)]
    pub limit: u32,
    /// Total number of records.
    #[serde(default)]
    pub total: u32,
}

/// A recurring schedule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Always `schedule`.
    pub object: String,
    /// Schedule identifier (`schd_...`).
    pub id: String,
    /// `active`, `expiring`, `expired`, `deleted` or `suspended`.
    pub status: String,
    /// Interval multiplier.
    pub every: u32,
    /// `day`, `week` or `month`.
    pub period: String,
    /// First run date, `YYYY-MM-DD`.
    pub start_on: String,
    /// Last run date, `YYYY-MM-DD`.
    pub end_on: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}
