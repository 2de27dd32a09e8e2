use std::fmt;

use crate::models::Question;
use crate::nested::{count_published, same_type, sum_points, sum_published_points};

/// Aggregate figures for a question set, as printed by `quiz-drills summary`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub questions: usize,
    pub published: usize,
    pub points: u32,
    pub published_points: u32,
    pub same_type: bool,
}

impl Summary {
    pub fn from_questions(questions: &[Question]) -> Self {
        Self {
            questions: questions.len(),
            published: count_published(questions),
            points: sum_points(questions),
            published_points: sum_published_points(questions),
            same_type: same_type(questions),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "questions:        {}", self.questions)?;
        writeln!(f, "published:        {}", self.published)?;
        writeln!(f, "points:           {}", self.points)?;
        writeln!(f, "published points: {}", self.published_points)?;
        write!(f, "same type:        {}", if self.same_type { "yes" } else { "no" })
    }
}
