//! Letter grades

use std::fmt;

use serde::{Deserialize, Serialize};

/// Letter grade of a total score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Inclusive lower bounds 90/80/70/60
    pub fn from_score(score: u32) -> Self {
        match score {
            90.. => Grade::A,
            80..=89 => Grade::B,
            70..=79 => Grade::C,
            60..=69 => Grade::D,
            _ => Grade::F,
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

    /// Lowest score that earns this grade
    pub fn min_score(&self) -> u32 {
        match self {
            Grade::A => 90,
            Grade::B => 80,
            Grade::C => 70,
            Grade::D => 60,
            Grade::F => 0,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grade of a total score
pub fn get_grade(score: u32) -> Grade {
    Grade::from_score(score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        let cases = [
            (100, Grade::A),
            (90, Grade::A),
            (89, Grade::B),
            (80, Grade::B),
            (79, Grade::C),
            (70, Grade::C),
            (69, Grade::D),
            (60, Grade::D),
            (59, Grade::F),
            (0, Grade::F),
        ];
        for (score, grade) in cases {
            assert_eq!(get_grade(score), grade, "score {}", score);
        }
    }

    #[test]
    fn test_min_score_round_trips() {
        for grade in [Grade::A, Grade::B, Grade::C, Grade::D, Grade::F] {
            assert_eq!(Grade::from_score(grade.min_score()), grade);
        }
    }

    #[test]
    fn test_serializes_as_letter() {
        assert_eq!(serde_json::to_string(&Grade::B).unwrap(), "\"B\"");
        assert_eq!(Grade::F.to_string(), "F");
        assert!(Grade::A < Grade::F);
    }
}
