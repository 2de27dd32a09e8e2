//! Transformations over lists of [`Question`]s.
//!
//! Every function here builds a new list and leaves its input untouched,
//! except [`publish_all`], which takes ownership and flips `published` on
//! the questions it was handed.

use crate::models::{Answer, Question, QuestionType};

const CSV_HEADER: &str = "id,name,options,points,published";

/// Where [`edit_option`] puts the new option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionSlot {
    /// Push onto the end of the options.
    Append,
    /// Replace the option at this index. Out-of-range indices change nothing.
    At(usize),
}

pub fn get_published_questions(questions: &[Question]) -> Vec<Question> {
    questions
        .iter()
        .filter(|question| question.published)
        .cloned()
        .collect()
}

pub fn get_non_empty_questions(questions: &[Question]) -> Vec<Question> {
    questions
        .iter()
        .filter(|question| !question.is_empty())
        .cloned()
        .collect()
}

pub fn find_question(questions: &[Question], id: i64) -> Option<&Question> {
    questions.iter().find(|question| question.id == id)
}

pub fn remove_question(questions: &[Question], id: i64) -> Vec<Question> {
    questions
        .iter()
        .filter(|question| question.id != id)
        .cloned()
        .collect()
}

pub fn get_names(questions: &[Question]) -> Vec<String> {
    questions.iter().map(|question| question.name.clone()).collect()
}

pub fn sum_points(questions: &[Question]) -> u32 {
    questions.iter().map(|question| question.points).sum()
}

pub fn sum_published_points(questions: &[Question]) -> u32 {
    questions
        .iter()
        .filter(|question| question.published)
        .map(|question| question.points)
        .sum()
}

pub fn count_published(questions: &[Question]) -> usize {
    questions.iter().filter(|question| question.published).count()
}

/// Serializes the questions as CSV, one line per question after the header.
///
/// The `options` column holds the number of options, not their text. Values
/// are written as-is without quoting, and there is no trailing newline.
pub fn to_csv(questions: &[Question]) -> String {
    let mut lines = Vec::with_capacity(questions.len() + 1);
    lines.push(CSV_HEADER.to_string());
    lines.extend(questions.iter().map(|question| {
        format!(
            "{},{},{},{},{}",
            question.id,
            question.name,
            question.options.len(),
            question.points,
            question.published
        )
    }));
    lines.join("\n")
}

pub fn make_answers(questions: &[Question]) -> Vec<Answer> {
    questions
        .iter()
        .map(|question| Answer::pending(question.id))
        .collect()
}

pub fn publish_all(mut questions: Vec<Question>) -> Vec<Question> {
    for question in &mut questions {
        question.published = true;
    }
    questions
}

/// True when every question shares one type. An empty list qualifies.
pub fn same_type(questions: &[Question]) -> bool {
    match questions.split_first() {
        Some((first, rest)) => rest.iter().all(|question| question.kind == first.kind),
        None => true,
    }
}

/// Distinct question types in order of first appearance.
pub fn get_question_types(questions: &[Question]) -> Vec<QuestionType> {
    let mut kinds = Vec::new();
    for question in questions {
        if !kinds.contains(&question.kind) {
            kinds.push(question.kind);
        }
    }
    kinds
}

/// Stable sort, highest points first.
pub fn sort_by_points(questions: &[Question]) -> Vec<Question> {
    let mut sorted = questions.to_vec();
    sorted.sort_by(|a, b| b.points.cmp(&a.points));
    sorted
}

pub fn add_new_question(
    questions: &[Question],
    id: i64,
    name: &str,
    kind: QuestionType,
) -> Vec<Question> {
    let mut extended = questions.to_vec();
    extended.push(Question::blank(id, name, kind));
    extended
}

pub fn rename_question_by_id(questions: &[Question], target_id: i64, new_name: &str) -> Vec<Question> {
    update_by_id(questions, target_id, |question| question.renamed(new_name))
}

/// Switching away from multiple choice also clears the options.
pub fn change_question_type_by_id(
    questions: &[Question],
    target_id: i64,
    new_kind: QuestionType,
) -> Vec<Question> {
    update_by_id(questions, target_id, |question| {
        let mut changed = question.clone();
        changed.kind = new_kind;
        if new_kind != QuestionType::MultipleChoice {
            changed.options.clear();
        }
        changed
    })
}

pub fn edit_option(
    questions: &[Question],
    target_id: i64,
    slot: OptionSlot,
    new_option: &str,
) -> Vec<Question> {
    update_by_id(questions, target_id, |question| {
        let mut edited = question.clone();
        match slot {
            OptionSlot::Append => edited.options.push(new_option.to_string()),
            OptionSlot::At(index) => {
                if let Some(option) = edited.options.get_mut(index) {
                    *option = new_option.to_string();
                }
            }
        }
        edited
    })
}

/// Inserts a duplicate of the first question with `target_id` directly after
/// it. The list comes back unchanged when no question matches.
pub fn duplicate_question_in_array(questions: &[Question], target_id: i64, new_id: i64) -> Vec<Question> {
    let mut result = questions.to_vec();
    if let Some(index) = questions.iter().position(|question| question.id == target_id) {
        result.insert(index + 1, questions[index].duplicate(new_id));
    }
    result
}

fn update_by_id<F>(questions: &[Question], target_id: i64, update: F) -> Vec<Question>
where
    F: Fn(&Question) -> Question,
{
    questions
        .iter()
        .map(|question| {
            if question.id == target_id {
                update(question)
            } else {
                question.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(
        id: i64,
        name: &str,
        kind: QuestionType,
        options: &[&str],
        points: u32,
        published: bool,
    ) -> Question {
        Question {
            id,
            name: name.to_string(),
            kind,
            body: format!("Body of {}", name),
            expected: "answer".to_string(),
            options: options.iter().map(|option| option.to_string()).collect(),
            points,
            published,
        }
    }

    fn quiz() -> Vec<Question> {
        vec![
            question(1, "Addition", QuestionType::ShortAnswer, &[], 1, true),
            question(2, "Letters", QuestionType::ShortAnswer, &[], 1, false),
            question(5, "Colors", QuestionType::MultipleChoice, &["red", "apple", "firetruck"], 1, true),
            question(9, "Shapes", QuestionType::MultipleChoice, &["square", "triangle", "circle"], 2, false),
        ]
    }

    #[test]
    fn test_get_published_questions() {
        let published = get_published_questions(&quiz());
        assert_eq!(get_names(&published), vec!["Addition", "Colors"]);
        assert!(get_published_questions(&[]).is_empty());
    }

    #[test]
    fn test_get_non_empty_questions() {
        let mut questions = quiz();
        questions.push(Question::blank(10, "Blank", QuestionType::ShortAnswer));
        let mut only_expected = Question::blank(11, "Expected", QuestionType::ShortAnswer);
        only_expected.expected = "yes".to_string();
        questions.push(only_expected);

        let non_empty = get_non_empty_questions(&questions);
        assert_eq!(non_empty.len(), 5);
        assert!(find_question(&non_empty, 10).is_none());
        assert!(find_question(&non_empty, 11).is_some());
    }

    #[test]
    fn test_find_question() {
        let questions = quiz();
        assert_eq!(find_question(&questions, 5).map(|q| q.name.as_str()), Some("Colors"));
        assert_eq!(find_question(&questions, 42), None);
    }

    #[test]
    fn test_remove_question() {
        let questions = quiz();
        let removed = remove_question(&questions, 2);
        assert_eq!(get_names(&removed), vec!["Addition", "Colors", "Shapes"]);
        assert_eq!(remove_question(&questions, 42), questions);
    }

    #[test]
    fn test_sum_points() {
        let questions = quiz();
        assert_eq!(sum_points(&questions), 5);
        assert_eq!(sum_published_points(&questions), 2);
        assert_eq!(count_published(&questions), 2);
        assert_eq!(sum_points(&[]), 0);
    }

    #[test]
    fn test_to_csv() {
        let expected = "id,name,options,points,published\n\
                        1,Addition,0,1,true\n\
                        2,Letters,0,1,false\n\
                        5,Colors,3,1,true\n\
                        9,Shapes,3,2,false";
        assert_eq!(to_csv(&quiz()), expected);
        assert_eq!(to_csv(&[]), "id,name,options,points,published");
    }

    #[test]
    fn test_make_answers() {
        let answers = make_answers(&quiz());
        assert_eq!(answers.len(), 4);
        assert_eq!(answers[2], Answer::pending(5));
        assert!(answers.iter().all(|a| a.text.is_empty() && !a.submitted && !a.correct));
    }

    #[test]
    fn test_publish_all() {
        let published = publish_all(quiz());
        assert!(published.iter().all(|question| question.published));
        assert_eq!(published.len(), 4);
    }

    #[test]
    fn test_same_type() {
        let questions = quiz();
        assert!(same_type(&[]));
        assert!(same_type(&questions[..2]));
        assert!(!same_type(&questions));
        assert_eq!(
            get_question_types(&questions),
            vec![QuestionType::ShortAnswer, QuestionType::MultipleChoice]
        );
    }

    #[test]
    fn test_add_new_question() {
        let questions = quiz();
        let added = add_new_question(&questions, 142, "New", QuestionType::TrueOrFalse);
        assert_eq!(added.len(), 5);
        assert_eq!(added[4], Question::blank(142, "New", QuestionType::TrueOrFalse));
        assert_eq!(questions.len(), 4);
    }

    #[test]
    fn test_rename_question_by_id() {
        let questions = quiz();
        let renamed = rename_question_by_id(&questions, 9, "Polygons");
        assert_eq!(get_names(&renamed), vec!["Addition", "Letters", "Colors", "Polygons"]);
        assert_eq!(questions[3].name, "Shapes");
    }

    #[test]
    fn test_change_question_type_by_id() {
        let questions = quiz();
        let changed = change_question_type_by_id(&questions, 5, QuestionType::ShortAnswer);
        assert_eq!(changed[2].kind, QuestionType::ShortAnswer);
        assert!(changed[2].options.is_empty());

        let kept = change_question_type_by_id(&questions, 9, QuestionType::MultipleChoice);
        assert_eq!(kept[3].options.len(), 3);
        assert_eq!(questions[2].options.len(), 3);
    }

    #[test]
    fn test_edit_option() {
        let questions = quiz();
        let appended = edit_option(&questions, 5, OptionSlot::Append, "blue");
        assert_eq!(appended[2].options, vec!["red", "apple", "firetruck", "blue"]);

        let replaced = edit_option(&questions, 5, OptionSlot::At(1), "green");
        assert_eq!(replaced[2].options, vec!["red", "green", "firetruck"]);

        let untouched = edit_option(&questions, 5, OptionSlot::At(7), "green");
        assert_eq!(untouched, questions);
        assert_eq!(questions[2].options.len(), 3);
    }

    #[test]
    fn test_duplicate_question_in_array() {
        let questions = quiz();
        let duplicated = duplicate_question_in_array(&questions, 2, 27);
        assert_eq!(duplicated.len(), 5);
        assert_eq!(duplicated[2].id, 27);
        assert_eq!(duplicated[2].name, "Copy of Letters");
        assert!(!duplicated[2].published);
        assert_eq!(duplicated[3].id, 5);

        assert_eq!(duplicate_question_in_array(&questions, 42, 27), questions);
    }

    #[test]
    fn test_sort_by_points() {
        let sorted = sort_by_points(&quiz());
        assert_eq!(sorted[0].id, 9);
        assert_eq!(sorted.iter().map(|q| q.id).collect::<Vec<_>>(), vec![9, 1, 2, 5]);
    }
}
