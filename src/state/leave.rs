//! Leave request workflow.

use super::{WorkforceState, new_id};
use crate::error::{AppError, Result};
use crate::models::{CreateLeaveRequest, LeaveDecision, LeaveRequest, LeaveStatus};
use crate::store::Storage;

impl<S: Storage> WorkforceState<S> {
    /// File a pending leave request for `user`.
    pub fn request_leave(&mut self, user: &str, data: CreateLeaveRequest) -> Result<&LeaveRequest> {
        let reason = data.reason.trim();
        if reason.is_empty() {
            return Err(AppError::validation("Leave reason cannot be empty"));
        }
        if data.start_date > data.end_date {
            return Err(AppError::validation(format!(
                "Leave starts {} after it ends {}",
                data.start_date, data.end_date
            )));
        }

        let mut next = self.leave_requests.clone();
        next.push(LeaveRequest {
            id: new_id(),
            user_id: user.to_string(),
            start_date: data.start_date,
            end_date: data.end_date,
            reason: reason.to_string(),
            status: LeaveStatus::Pending,
        });
        self.commit_leave_requests(next)?;

        let request = &self.leave_requests[self.leave_requests.len() - 1];
        tracing::info!(
            "{} requested leave {} to {}",
            request.user_id,
            request.start_date,
            request.end_date
        );
        Ok(request)
    }

    /// Approve or reject a pending request. Decided requests never change.
    pub fn decide_leave(&mut self, request_id: &str, decision: LeaveDecision) -> Result<&LeaveRequest> {
        let idx = self
            .leave_requests
            .iter()
            .position(|r| r.id == request_id)
            .ok_or_else(|| AppError::not_found(format!("leave request {request_id}")))?;

        if self.leave_requests[idx].status.is_decided() {
            return Err(AppError::AlreadyDecided(request_id.to_string()));
        }

        let mut next = self.leave_requests.clone();
        next[idx].status = decision.into();
        self.commit_leave_requests(next)?;

        let request = &self.leave_requests[idx];
        tracing::info!("Leave request {} {}", request.id, request.status.name());
        Ok(request)
    }

    pub fn approve_leave(&mut self, request_id: &str) -> Result<&LeaveRequest> {
        self.decide_leave(request_id, LeaveDecision::Approve)
    }

    pub fn reject_leave(&mut self, request_id: &str) -> Result<&LeaveRequest> {
        self.decide_leave(request_id, LeaveDecision::Reject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStorage;
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    fn request(start: u32, end: u32, reason: &str) -> CreateLeaveRequest {
        CreateLeaveRequest {
            start_date: date(start),
            end_date: date(end),
            reason: reason.to_string(),
        }
    }

    #[test]
    fn test_new_request_is_pending() {
        let mut state = WorkforceState::load(MemoryStorage::new()).unwrap();
        let req = state.request_leave("bob", request(20, 22, "wedding")).unwrap();
        assert_eq!(req.status, LeaveStatus::Pending);
        assert_eq!(req.user_id, "bob");
    }

    #[test]
    fn test_invalid_requests() {
        let mut state = WorkforceState::load(MemoryStorage::new()).unwrap();
        assert!(state.request_leave("bob", request(22, 20, "backwards")).is_err());
        assert!(state.request_leave("bob", request(20, 22, " ")).is_err());
        assert!(state.request_leave("bob", request(20, 20, "one day")).is_ok());
        assert_eq!(state.leave_requests().len(), 1);
    }

    #[test]
    fn test_decisions_are_final() {
        let mut state = WorkforceState::load(MemoryStorage::new()).unwrap();
        let id = state.request_leave("bob", request(20, 22, "trip")).unwrap().id.clone();

        assert_eq!(state.approve_leave(&id).unwrap().status, LeaveStatus::Approved);

        let err = state.reject_leave(&id).unwrap_err();
        assert!(matches!(err, AppError::AlreadyDecided(_)));
        assert!(state.approve_leave(&id).is_err());
        assert_eq!(state.leave_requests()[0].status, LeaveStatus::Approved);
    }

    #[test]
    fn test_reject_then_approve_stays_rejected() {
        let mut state = WorkforceState::load(MemoryStorage::new()).unwrap();
        let id = state.request_leave("bob", request(20, 22, "trip")).unwrap().id.clone();

        state.reject_leave(&id).unwrap();
        assert!(state.approve_leave(&id).is_err());
        assert_eq!(state.leave_requests()[0].status, LeaveStatus::Rejected);
    }

    #[test]
    fn test_unknown_request() {
        let mut state = WorkforceState::load(MemoryStorage::new()).unwrap();
        assert!(matches!(state.approve_leave("missing"), Err(AppError::NotFound(_))));
    }
}
