use std::fmt;

/// One of the five fixed grade buckets. The score ranges are contiguous
/// and exhaustive over 0..=100:
/// 85..=100 → A, 70..85 → B, 55..70 → C, 40..55 → D, 0..40 → E.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
}

impl Grade {
    /// All grades in display order, A first.
    pub const ALL: [Grade; 5] = [Grade::A, Grade::B, Grade::C, Grade::D, Grade::E];

    /// Bucket a score into its grade.
    pub fn from_score(score: u8) -> Grade {
        match score {
            85..=100 => Grade::A,
            70..=84 => Grade::B,
            55..=69 => Grade::C,
            40..=54 => Grade::D,
            _ => Grade::E,
        }
    }

    /// Single-letter label.
    pub fn letter(self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::E => "E",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

/// One named score entry with its derived grade.
///
/// The grade is computed from the score at construction and cannot drift
/// from it afterwards; fields are read-only once the record exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: String,
    score: u8,
    grade: Grade,
}

impl Record {
    /// Build a record, deriving the grade from the score.
    /// Scores above 100 are rejected at the parse boundary; this only
    /// asserts in debug builds.
    pub fn new(name: impl Into<String>, score: u8) -> Record {
        debug_assert!(score <= 100);
        Record {
            name: name.into(),
            score,
            grade: Grade::from_score(score),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }
}
