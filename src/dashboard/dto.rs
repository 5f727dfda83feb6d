use serde::Serialize;

/// Headline counters for the dashboard.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardStats {
    pub total_sessions: u32,
    pub hours_logged: f32,
    pub average_rating: f32,
    pub pending_requests: u32,
    pub upcoming_events: u32,
}
