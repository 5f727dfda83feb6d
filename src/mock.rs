//! In-process mock tables standing in for persistence.
//!
//! A [`MockStore`] is seeded once at startup and shared read-only through
//! the application state.

use time::macros::{date, datetime};
use tracing::error;
use uuid::Uuid;

use crate::{
    dashboard::dto::DashboardStats,
    leave::repo_types::{LeaveError, SickLeaveRequest},
    profile::dto::{Session, Skill},
    travel::dto::Manager,
    users::repo_types::{Role, User},
};

/// id, name, role, email, password, department
type DirectoryRow = (u32, &'static str, Role, &'static str, &'static str, &'static str);

const DIRECTORY: [DirectoryRow; 5] = [
    (1, "Alex Morgan", Role::Employee, "alex.morgan@opendesk.dev", "employee123", "Engineering"),
    (2, "Priya Nair", Role::Manager, "priya.nair@opendesk.dev", "manager123", "Engineering"),
    (3, "Jordan Lee", Role::Admin, "jordan.lee@opendesk.dev", "admin123", "IT"),
    (4, "Sam Okafor", Role::Employee, "sam.okafor@opendesk.dev", "employee456", "Operations"),
    (5, "Elena Petrova", Role::Manager, "elena.petrova@opendesk.dev", "manager456", "Operations"),
];

/// Identity a fresh provider scope starts with.
pub const DEFAULT_USER_ID: u32 = DIRECTORY[0].0;

fn directory_user((id, name, role, email, password, _): DirectoryRow) -> User {
    User {
        id,
        name: name.into(),
        role,
        email: email.into(),
        password: Some(password.into()),
    }
}

fn seed_users() -> Vec<User> {
    DIRECTORY.into_iter().map(directory_user).collect()
}

fn seed_managers() -> Vec<Manager> {
    DIRECTORY
        .into_iter()
        .filter(|row| row.2 == Role::Manager)
        .map(|(id, name, _, email, _, department)| Manager {
            id,
            name: name.into(),
            email: email.into(),
            department: department.into(),
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct MockStore {
    pub current_user: User,
    pub users: Vec<User>,
    pub dashboard: DashboardStats,
    pub managers: Vec<Manager>,
    pub sessions: Vec<Session>,
    pub skills: Vec<Skill>,
    pub sick_leave: Vec<SickLeaveRequest>,
}

impl MockStore {
    pub fn seed() -> Self {
        let sick_leave = seed_sick_leave().unwrap_or_else(|e| {
            error!(error = %e, "invalid sick leave seed; starting empty");
            Vec::new()
        });

        Self {
            current_user: directory_user(DIRECTORY[0]),
            users: seed_users(),
            dashboard: DashboardStats {
                total_sessions: 24,
                hours_logged: 36.5,
                average_rating: 4.7,
                pending_requests: 3,
                upcoming_events: 5,
            },
            managers: seed_managers(),
            sessions: seed_sessions(),
            skills: seed_skills(),
            sick_leave,
        }
    }

    pub fn user_by_id(&self, id: u32) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn user_by_role(&self, role: Role) -> Option<&User> {
        self.users.iter().find(|u| u.role == role)
    }
}

fn seed_sessions() -> Vec<Session> {
    vec![
        Session {
            id: 1,
            title: "Rust for backend teams".into(),
            host: "Jordan Lee".into(),
            starts_at: datetime!(2024-05-06 10:00 UTC),
            duration_minutes: 90,
            rating: Some(4.8),
        },
        Session {
            id: 2,
            title: "Quarterly planning".into(),
            host: "Priya Nair".into(),
            starts_at: datetime!(2024-05-08 14:00 UTC),
            duration_minutes: 60,
            rating: Some(4.5),
        },
        Session {
            id: 3,
            title: "Accessibility clinic".into(),
            host: "Elena Petrova".into(),
            starts_at: datetime!(2024-05-15 09:30 UTC),
            duration_minutes: 45,
            rating: None,
        },
    ]
}

fn seed_skills() -> Vec<Skill> {
    let rows: [(u32, &str, u8, u32); 7] = [
        (1, "TypeScript", 4, 12),
        (1, "Public speaking", 2, 3),
        (2, "People management", 5, 21),
        (2, "Budgeting", 3, 6),
        (3, "Infrastructure", 5, 17),
        (4, "SQL", 3, 4),
        (5, "Design systems", 4, 9),
    ];
    rows.into_iter()
        .enumerate()
        .map(|(i, (user_id, name, level, endorsements))| Skill {
            id: i as u32 + 1,
            user_id,
            name: name.into(),
            level,
            endorsements,
        })
        .collect()
}

fn seed_sick_leave() -> Result<Vec<SickLeaveRequest>, LeaveError> {
    let opened = datetime!(2024-04-01 08:00 UTC);
    let decided = datetime!(2024-04-01 16:30 UTC);

    let pending = SickLeaveRequest::new(
        Uuid::from_u128(0x5e1c_0001),
        1,
        date!(2024 - 04 - 08),
        date!(2024 - 04 - 09),
        opened,
    )?;

    let mut approved = SickLeaveRequest::new(
        Uuid::from_u128(0x5e1c_0002),
        1,
        date!(2024 - 03 - 11),
        date!(2024 - 03 - 11),
        opened,
    )?;
    approved.approve(Some("Feel better soon".into()), decided)?;

    let mut rejected = SickLeaveRequest::new(
        Uuid::from_u128(0x5e1c_0003),
        4,
        date!(2024 - 04 - 15),
        date!(2024 - 04 - 19),
        opened,
    )?;
    rejected.reject(Some("Please attach a medical note".into()), decided)?;

    let other = SickLeaveRequest::new(
        Uuid::from_u128(0x5e1c_0004),
        4,
        date!(2024 - 04 - 22),
        date!(2024 - 04 - 23),
        opened,
    )?;

    Ok(vec![pending, approved, rejected, other])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_user_is_in_the_directory() {
        let store = MockStore::seed();
        assert_eq!(store.current_user.id, DEFAULT_USER_ID);
        assert_eq!(store.user_by_id(DEFAULT_USER_ID), Some(&store.current_user));
    }

    #[test]
    fn every_role_has_a_user() {
        let store = MockStore::seed();
        for role in Role::ALL {
            assert_eq!(store.user_by_role(role).map(|u| u.role), Some(role));
        }
    }

    #[test]
    fn managers_carry_their_department() {
        let store = MockStore::seed();
        let departments: Vec<(u32, &str)> = store
            .managers
            .iter()
            .map(|m| (m.id, m.department.as_str()))
            .collect();
        assert_eq!(departments, vec![(2, "Engineering"), (5, "Operations")]);
    }

    #[test]
    fn managers_are_directory_managers() {
        let store = MockStore::seed();
        assert!(!store.managers.is_empty());
        for m in &store.managers {
            assert_eq!(store.user_by_id(m.id).map(|u| u.role), Some(Role::Manager));
        }
    }

    #[test]
    fn sick_leave_seed_is_valid() {
        let store = MockStore::seed();
        assert_eq!(store.sick_leave.len(), 4);
        for req in &store.sick_leave {
            assert!(req.end_date() >= req.start_date());
        }
    }

    #[test]
    fn skills_reference_known_users() {
        let store = MockStore::seed();
        for skill in &store.skills {
            assert!(store.user_by_id(skill.user_id).is_some());
            assert!((1..=5).contains(&skill.level));
        }
    }
}
