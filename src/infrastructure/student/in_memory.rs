//! In-memory user directory implementation

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::student::{
    FeeStructure, Payment, SemesterResult, StudentId, StudentProfile, UnitResult, UserDirectory,
};
use crate::domain::DomainError;

/// In-memory implementation of UserDirectory
#[derive(Debug)]
pub struct InMemoryUserDirectory {
    profiles: Arc<RwLock<HashMap<StudentId, StudentProfile>>>,
}

impl InMemoryUserDirectory {
    /// Create a new empty directory
    pub fn new() -> Self {
        Self {
            profiles: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a directory with initial profiles
    pub fn with_profiles(profiles: Vec<StudentProfile>) -> Self {
        let profiles = profiles
            .into_iter()
            .map(|profile| (profile.id.clone(), profile))
            .collect();

        Self {
            profiles: Arc::new(RwLock::new(profiles)),
        }
    }

    /// Directory seeded with the demo student used in development
    pub fn with_demo_data() -> Self {
        Self::with_profiles(vec![demo_student()])
    }
}

impl Default for InMemoryUserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn lookup(&self, id: &StudentId) -> Result<StudentProfile, DomainError> {
        let profiles = self.profiles.read().await;

        match profiles.get(id) {
            Some(profile) => Ok(profile.clone()),
            None => {
                debug!(student_id = %id, "Unknown student, using default profile");
                Ok(StudentProfile::new(id.clone()))
            }
        }
    }
}

/// The development student: outstanding balance above the registration
/// limit and no results yet for the current semester
pub fn demo_student() -> StudentProfile {
    StudentProfile::new("student123")
        .with_name("John Doe")
        .with_student_number("MU2024001")
        .with_program("Computer Science")
        .with_fee_balance(12_500)
        .with_current_semester("Semester 2 2024")
        .with_semester_result(
            "Semester 1 2024",
            SemesterResult::new(
                3.5,
                vec![
                    UnitResult::new("Mathematics", "A", 85),
                    UnitResult::new("Physics", "B+", 78),
                    UnitResult::new("Programming", "A-", 82),
                ],
            ),
        )
        .with_semester_result(
            "Semester 2 2023",
            SemesterResult::new(
                3.2,
                vec![
                    UnitResult::new("Calculus", "B", 72),
                    UnitResult::new("Chemistry", "B-", 68),
                    UnitResult::new("English", "A", 88),
                ],
            ),
        )
        .with_fee_structure(FeeStructure {
            tuition: 50_000,
            accommodation: 15_000,
            library: 2_000,
            medical: 1_500,
            total: 68_500,
        })
        .with_payment(payment(2024, 1, 15, 30_000, "Semester 1 Payment"))
        .with_payment(payment(2024, 1, 20, 26_000, "Semester 1 Balance"))
}

fn payment(year: i32, month: u32, day: u32, amount: i64, description: &str) -> Payment {
    Payment {
        date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN),
        amount,
        description: description.to_string(),
    }
}
