use serde::Serialize;

/// A manager who can sign off travel requests.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Manager {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub department: String,
}
