//! Stored record types
//!
//! Numbers and grades as they are persisted and returned by the API.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A stored integer; ids are assigned by the store in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberRecord {
    pub id: i64,
    pub value: i32,
}

/// Subjects a grade can be recorded for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GradeClass {
    Math,
    Science,
    History,
}

impl GradeClass {
    /// All accepted classes, in display order
    pub const ALL: [GradeClass; 3] = [GradeClass::Math, GradeClass::Science, GradeClass::History];

    pub fn as_str(&self) -> &'static str {
        match self {
            GradeClass::Math => "Math",
            GradeClass::Science => "Science",
            GradeClass::History => "History",
        }
    }
}

impl fmt::Display for GradeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GradeClass {
    type Err = String;

    /// Parses the exact class name as stored (case-sensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GradeClass::ALL
            .into_iter()
            .find(|class| class.as_str() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = GradeClass::ALL.iter().map(|c| c.as_str()).collect();
                format!("Class must be one of {}", names.join(", "))
            })
    }
}

/// A stored grade between 0 and 100 for one class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeRecord {
    pub id: i64,
    pub class: GradeClass,
    pub value: i32,
}

/// Lowest accepted grade
pub const MIN_GRADE: i32 = 0;

/// Highest accepted grade
pub const MAX_GRADE: i32 = 100;
