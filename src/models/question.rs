use serde::{Deserialize, Serialize};

const SHORT_FORM_NAME_LENGTH: usize = 10;

/// How a question is asked and what kinds of answers it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionType {
    #[serde(rename = "multiple_choice_question")]
    MultipleChoice,
    #[serde(rename = "short_answer_question")]
    ShortAnswer,
    #[serde(rename = "true_or_false")]
    TrueOrFalse,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "multiple_choice_question",
            QuestionType::ShortAnswer => "short_answer_question",
            QuestionType::TrueOrFalse => "true_or_false",
        }
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single quiz item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub body: String,
    pub expected: String,
    pub options: Vec<String>,
    pub points: u32,
    pub published: bool,
}

impl Question {
    /// A question with no body, no expected answer, no options, worth one
    /// point and not yet published.
    pub fn blank(id: i64, name: impl Into<String>, kind: QuestionType) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            body: String::new(),
            expected: String::new(),
            options: Vec::new(),
            points: 1,
            published: false,
        }
    }

    /// Copy of this question under `new_id`, named "Copy of ..." and unpublished.
    pub fn duplicate(&self, new_id: i64) -> Self {
        Self {
            id: new_id,
            name: format!("Copy of {}", self.name),
            published: false,
            ..self.clone()
        }
    }

    /// Build a new unpublished question that reuses the body, expected answer,
    /// options and type of `content`.
    pub fn merge(id: i64, name: impl Into<String>, content: &Question, points: u32) -> Self {
        Self {
            id,
            name: name.into(),
            points,
            published: false,
            ..content.clone()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty() && self.expected.is_empty() && self.options.is_empty()
    }

    /// Compares against `expected`, ignoring surrounding whitespace and case.
    pub fn is_correct(&self, answer: &str) -> bool {
        answer.trim().to_lowercase() == self.expected.trim().to_lowercase()
    }

    /// Multiple-choice answers must be one of the options; anything goes otherwise.
    pub fn is_valid(&self, answer: &str) -> bool {
        match self.kind {
            QuestionType::MultipleChoice => self.options.iter().any(|option| option == answer),
            QuestionType::ShortAnswer | QuestionType::TrueOrFalse => true,
        }
    }

    pub fn to_short_form(&self) -> String {
        let name: String = self.name.chars().take(SHORT_FORM_NAME_LENGTH).collect();
        format!("{}: {}", self.id, name)
    }

    pub fn to_markdown(&self) -> String {
        let mut lines = vec![format!("# {}", self.name), self.body.clone()];
        if self.kind == QuestionType::MultipleChoice {
            lines.extend(self.options.iter().map(|option| format!("- {}", option)));
        }
        lines.join("\n")
    }

    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    pub fn with_published_toggled(&self) -> Self {
        Self {
            published: !self.published,
            ..self.clone()
        }
    }

    pub fn with_option(&self, option: impl Into<String>) -> Self {
        let mut question = self.clone();
        question.options.push(option.into());
        question
    }
}
