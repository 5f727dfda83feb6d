use serde::Serialize;
use time::OffsetDateTime;

#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: u32,
    pub title: String,
    pub host: String,
    #[serde(with = "time::serde::rfc3339")]
    pub starts_at: OffsetDateTime,
    pub duration_minutes: u32,
    pub rating: Option<f32>, // None until the session has been rated
}

#[derive(Debug, Clone, Serialize)]
pub struct Skill {
    pub id: u32,
    pub user_id: u32,
    pub name: String,
    pub level: u8, // 1..=5
    pub endorsements: u32,
}
