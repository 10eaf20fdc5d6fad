use serde::{Deserialize, Serialize};

use tally_core::{Entity, StudentId};

/// Letter grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl core::fmt::Display for Grade {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        f.write_str(letter)
    }
}

/// One student result row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    id: StudentId,
    full_name: String,
    score: i64,
}

impl Student {
    pub fn new(id: StudentId, full_name: impl Into<String>, score: i64) -> Self {
        Self {
            id,
            full_name: full_name.into(),
            score,
        }
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    /// Band the score into a letter grade.
    ///
    /// Scores outside 0..=100 fall through to `F`, the catch-all band.
    pub fn grade(&self) -> Grade {
        match self.score {
            80..=100 => Grade::A,
            70..=79 => Grade::B,
            60..=69 => Grade::C,
            50..=59 => Grade::D,
            _ => Grade::F,
        }
    }

    /// Report line for this student.
    pub fn summary(&self) -> String {
        format!(
            "{} (ID: {}): Score = {}, Grade = {}",
            self.full_name,
            self.id,
            self.score,
            self.grade()
        )
    }
}

impl Entity for Student {
    type Id = StudentId;

    fn id(&self) -> StudentId {
        self.id
    }
}
