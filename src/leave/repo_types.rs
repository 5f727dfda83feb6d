use serde::Serialize;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LeaveError {
    #[error("end date {end} is before start date {start}")]
    InvalidRange { start: Date, end: Date },
    #[error("request already {0:?}")]
    AlreadyDecided(LeaveStatus),
}

/// Sick-leave request. Dates are validated on creation and the status
/// only ever leaves `Pending` once.
#[derive(Debug, Clone, Serialize)]
pub struct SickLeaveRequest {
    id: Uuid,
    user_id: u32,
    #[serde(with = "iso_date")]
    start_date: Date,
    #[serde(with = "iso_date")]
    end_date: Date,
    status: LeaveStatus,
    manager_comment: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    updated_at: OffsetDateTime,
}

impl SickLeaveRequest {
    pub fn new(
        id: Uuid,
        user_id: u32,
        start_date: Date,
        end_date: Date,
        created_at: OffsetDateTime,
    ) -> Result<Self, LeaveError> {
        if end_date < start_date {
            return Err(LeaveError::InvalidRange {
                start: start_date,
                end: end_date,
            });
        }
        Ok(Self {
            id,
            user_id,
            start_date,
            end_date,
            status: LeaveStatus::Pending,
            manager_comment: None,
            created_at,
            updated_at: created_at,
        })
    }

    pub fn approve(&mut self, comment: Option<String>, at: OffsetDateTime) -> Result<(), LeaveError> {
        self.decide(LeaveStatus::Approved, comment, at)
    }

    pub fn reject(&mut self, comment: Option<String>, at: OffsetDateTime) -> Result<(), LeaveError> {
        self.decide(LeaveStatus::Rejected, comment, at)
    }

    fn decide(
        &mut self,
        outcome: LeaveStatus,
        comment: Option<String>,
        at: OffsetDateTime,
    ) -> Result<(), LeaveError> {
        if self.status != LeaveStatus::Pending {
            return Err(LeaveError::AlreadyDecided(self.status));
        }
        self.status = outcome;
        self.manager_comment = comment;
        self.updated_at = at;
        Ok(())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user_id(&self) -> u32 {
        self.user_id
    }

    pub fn start_date(&self) -> Date {
        self.start_date
    }

    pub fn end_date(&self) -> Date {
        self.end_date
    }

    pub fn status(&self) -> LeaveStatus {
        self.status
    }

    pub fn manager_comment(&self) -> Option<&str> {
        self.manager_comment.as_deref()
    }

    pub fn updated_at(&self) -> OffsetDateTime {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};

    fn pending() -> SickLeaveRequest {
        SickLeaveRequest::new(
            Uuid::new_v4(),
            1,
            date!(2024 - 03 - 04),
            date!(2024 - 03 - 06),
            datetime!(2024-03-03 09:00 UTC),
        )
        .unwrap()
    }

    #[test]
    fn rejects_end_before_start() {
        let err = SickLeaveRequest::new(
            Uuid::new_v4(),
            1,
            date!(2024 - 03 - 06),
            date!(2024 - 03 - 04),
            datetime!(2024-03-03 09:00 UTC),
        )
        .unwrap_err();
        assert!(matches!(err, LeaveError::InvalidRange { .. }));
    }

    #[test]
    fn single_day_leave_is_valid() {
        let req = SickLeaveRequest::new(
            Uuid::new_v4(),
            1,
            date!(2024 - 03 - 04),
            date!(2024 - 03 - 04),
            datetime!(2024-03-03 09:00 UTC),
        )
        .unwrap();
        assert_eq!(req.status(), LeaveStatus::Pending);
    }

    #[test]
    fn approve_moves_out_of_pending() {
        let mut req = pending();
        let at = datetime!(2024-03-03 12:00 UTC);
        req.approve(Some("get well".into()), at).unwrap();
        assert_eq!(req.status(), LeaveStatus::Approved);
        assert_eq!(req.manager_comment(), Some("get well"));
        assert_eq!(req.updated_at(), at);
    }

    #[test]
    fn decided_requests_cannot_change() {
        let mut req = pending();
        let at = datetime!(2024-03-03 12:00 UTC);
        req.reject(None, at).unwrap();
        assert_eq!(
            req.approve(None, at),
            Err(LeaveError::AlreadyDecided(LeaveStatus::Rejected))
        );
        assert_eq!(
            req.reject(None, at),
            Err(LeaveError::AlreadyDecided(LeaveStatus::Rejected))
        );
        assert_eq!(req.status(), LeaveStatus::Rejected);
    }

    #[test]
    fn serializes_lowercase_status() {
        let json = serde_json::to_value(pending()).unwrap();
        assert_eq!(json["status"], "pending");
        assert_eq!(json["user_id"], 1);
        assert_eq!(json["start_date"], "2024-03-04");
    }
}
