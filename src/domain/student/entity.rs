//! Student profile entity and related types

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const DEFAULT_DISPLAY_NAME: &str = "Student";
const DEFAULT_SEMESTER_LABEL: &str = "Current Semester";

/// Student identifier as used by the directory (e.g. `student123`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(String);

impl StudentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StudentId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for StudentId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for StudentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result for a single unit within a semester
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitResult {
    pub name: String,
    pub grade: String,
    pub marks: u32,
}

impl UnitResult {
    pub fn new(name: impl Into<String>, grade: impl Into<String>, marks: u32) -> Self {
        Self {
            name: name.into(),
            grade: grade.into(),
            marks,
        }
    }
}

/// GPA and ordered unit results for one semester
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemesterResult {
    pub gpa: f64,
    pub units: Vec<UnitResult>,
}

impl SemesterResult {
    pub fn new(gpa: f64, units: Vec<UnitResult>) -> Self {
        Self { gpa, units }
    }
}

/// Breakdown of the fees charged for the academic year
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeStructure {
    pub tuition: i64,
    pub accommodation: i64,
    pub library: i64,
    pub medical: i64,
    pub total: i64,
}

/// A fee payment made by the student
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub date: NaiveDate,
    pub amount: i64,
    pub description: String,
}

/// Snapshot of a student's record as returned by the user directory.
///
/// Every field has a default so that an unknown student resolves to an
/// empty profile (zero balance, no results) instead of an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudentProfile {
    pub id: StudentId,
    pub name: Option<String>,
    pub student_number: Option<String>,
    pub program: Option<String>,
    /// Outstanding fee balance in KES
    pub fee_balance: i64,
    pub current_semester: Option<String>,
    pub can_register: bool,
    pub reported_semesters: Vec<String>,
    pub registered_units: Vec<String>,
    /// Results keyed by semester label
    pub results: BTreeMap<String, SemesterResult>,
    pub fee_structure: Option<FeeStructure>,
    pub payments: Vec<Payment>,
}

impl StudentProfile {
    pub fn new(id: impl Into<StudentId>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_student_number(mut self, number: impl Into<String>) -> Self {
        self.student_number = Some(number.into());
        self
    }

    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = Some(program.into());
        self
    }

    pub fn with_fee_balance(mut self, balance: i64) -> Self {
        self.fee_balance = balance;
        self
    }

    pub fn with_current_semester(mut self, semester: impl Into<String>) -> Self {
        self.current_semester = Some(semester.into());
        self
    }

    pub fn with_semester_result(
        mut self,
        semester: impl Into<String>,
        result: SemesterResult,
    ) -> Self {
        self.results.insert(semester.into(), result);
        self
    }

    pub fn with_fee_structure(mut self, fee_structure: FeeStructure) -> Self {
        self.fee_structure = Some(fee_structure);
        self
    }

    pub fn with_payment(mut self, payment: Payment) -> Self {
        self.payments.push(payment);
        self
    }

    /// Name used when addressing the student
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_DISPLAY_NAME)
    }

    pub fn current_semester_label(&self) -> &str {
        self.current_semester
            .as_deref()
            .unwrap_or(DEFAULT_SEMESTER_LABEL)
    }

    pub fn current_semester_results(&self) -> Option<&SemesterResult> {
        self.results.get(self.current_semester_label())
    }
}
