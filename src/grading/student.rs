use serde::{Deserialize, Serialize};
use std::fmt;

/// Grade band derived from a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Band for a score
    ///
    /// A is checked first over 80..=100; the lower bands only check their floor,
    /// so a score above 100 falls through to B.
    pub fn from_score(score: i32) -> Self {
        if (80..=100).contains(&score) {
            Grade::A
        } else if score >= 70 {
            Grade::B
        } else if score >= 60 {
            Grade::C
        } else if score >= 50 {
            Grade::D
        } else {
            Grade::F
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: i32,
    pub full_name: String,
    pub score: i32,
}

impl Student {
    pub fn new(id: i32, full_name: impl Into<String>, score: i32) -> Self {
        Student {
            id,
            full_name: full_name.into(),
            score,
        }
    }

    pub fn grade(&self) -> Grade {
        Grade::from_score(self.score)
    }

    /// Report line: `Jane Doe (ID: 7): Score = 85, Grade = A`
    pub fn report_line(&self) -> String {
        format!(
            "{} (ID: {}): Score = {}, Grade = {}",
            self.full_name,
            self.id,
            self.score,
            self.grade()
        )
    }
}
