// src/models/question.rs

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

use crate::{error::AppError, utils::deserializers::deserialize_optional_number};

/// Number of questions on one page of `GET /questions`.
pub const QUESTIONS_PER_PAGE: i64 = 10;

/// Represents the 'questions' table in the database.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,

    /// The text of the question.
    pub question: String,

    pub answer: String,

    /// Id of the category this question belongs to.
    pub category: i64,

    pub difficulty: i32,
}

/// A question that has not been stored yet. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i32,
}

/// DTO for creating a new question.
///
/// Fields are optional at the serde level so that an omitted field is reported
/// as a bad request by [`CreateQuestionRequest::into_new_question`] rather than
/// as a generic deserialization failure.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1, message = "Question text must not be empty."))]
    pub question: Option<String>,

    #[validate(length(min = 1, message = "Answer must not be empty."))]
    pub answer: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_number")]
    #[validate(range(min = 0, message = "Difficulty must not be negative."))]
    pub difficulty: Option<i32>,

    #[serde(default, deserialize_with = "deserialize_optional_number")]
    pub category: Option<i64>,
}

impl CreateQuestionRequest {
    /// Checks presence of every field (400), then content (422).
    pub fn into_new_question(self) -> Result<NewQuestion, AppError> {
        let (Some(question), Some(answer), Some(difficulty), Some(category)) =
            (&self.question, &self.answer, self.difficulty, self.category)
        else {
            return Err(AppError::BadRequest(format!(
                "Missing required field(s): {}",
                self.missing_fields().join(", ")
            )));
        };

        self.validate()?;

        Ok(NewQuestion {
            question: question.clone(),
            answer: answer.clone(),
            category,
            difficulty,
        })
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("question", self.question.is_none()),
            ("answer", self.answer.is_none()),
            ("difficulty", self.difficulty.is_none()),
            ("category", self.category.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, absent)| absent.then_some(name))
        .collect()
    }
}

/// DTO for `POST /questions/search`. An absent term searches for "".
#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,
}

/// Query parameters for `GET /questions`.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
}

impl PageParams {
    /// Returns the `(offset, limit)` window of the requested page. Defaults to page 1.
    pub fn window(&self) -> Result<(i64, i64), AppError> {
        let page = self.page.unwrap_or(1);
        if page < 1 {
            return Err(AppError::BadRequest(format!(
                "Page must be 1 or greater, got {}",
                page
            )));
        }
        let offset = (page - 1).saturating_mul(QUESTIONS_PER_PAGE);
        Ok((offset, QUESTIONS_PER_PAGE))
    }
}

/// Response body of `GET /questions`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPage {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub categories: BTreeMap<String, String>,
    pub current_category: Option<String>,
}

/// Response body of search and per-category listings.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionList {
    pub success: bool,
    pub total_questions: usize,
    pub questions: Vec<Question>,
    pub current_category: Option<String>,
}

impl QuestionList {
    pub fn new(questions: Vec<Question>, current_category: Option<String>) -> Self {
        Self {
            success: true,
            total_questions: questions.len(),
            questions,
            current_category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> CreateQuestionRequest {
        CreateQuestionRequest {
            question: Some("Which planet is closest to the sun?".to_string()),
            answer: Some("Mercury".to_string()),
            difficulty: Some(2),
            category: Some(1),
        }
    }

    #[test]
    fn complete_request_becomes_new_question() {
        let new_question = full_request().into_new_question().unwrap();
        assert_eq!(new_question.answer, "Mercury");
        assert_eq!(new_question.category, 1);
        assert_eq!(new_question.difficulty, 2);
    }

    #[test]
    fn each_missing_field_is_a_bad_request() {
        let strip: [fn(&mut CreateQuestionRequest); 4] = [
            |r| r.question = None,
            |r| r.answer = None,
            |r| r.difficulty = None,
            |r| r.category = None,
        ];

        for remove in strip {
            let mut request = full_request();
            remove(&mut request);
            assert!(matches!(
                request.into_new_question(),
                Err(AppError::BadRequest(_))
            ));
        }
    }

    #[test]
    fn empty_text_is_unprocessable() {
        let mut request = full_request();
        request.answer = Some(String::new());
        assert!(matches!(
            request.into_new_question(),
            Err(AppError::Unprocessable(_))
        ));
    }

    #[test]
    fn long_texts_are_accepted() {
        let mut request = full_request();
        request.question = Some("x".repeat(5000));
        request.answer = Some("y".repeat(2000));

        let new_question = request.into_new_question().unwrap();
        assert_eq!(new_question.question.len(), 5000);
        assert_eq!(new_question.answer.len(), 2000);
    }

    #[test]
    fn missing_fields_are_all_named() {
        let request = CreateQuestionRequest {
            question: Some(String::new()),
            ..CreateQuestionRequest::default()
        };

        match request.into_new_question() {
            Err(AppError::BadRequest(msg)) => {
                assert!(msg.contains("answer, difficulty, category"), "{}", msg)
            }
            other => panic!("expected bad request, got {:?}", other),
        }
    }

    #[test]
    fn numeric_strings_are_accepted_in_payload() {
        let request: CreateQuestionRequest = serde_json::from_str(
            r#"{"question": "Q?", "answer": "A", "difficulty": "3", "category": "4"}"#,
        )
        .unwrap();
        let new_question = request.into_new_question().unwrap();
        assert_eq!(new_question.difficulty, 3);
        assert_eq!(new_question.category, 4);
    }

    #[test]
    fn page_window_is_ten_wide() {
        assert_eq!(PageParams { page: None }.window().unwrap(), (0, 10));
        assert_eq!(PageParams { page: Some(1) }.window().unwrap(), (0, 10));
        assert_eq!(PageParams { page: Some(3) }.window().unwrap(), (20, 10));
    }

    #[test]
    fn page_below_one_is_rejected() {
        assert!(PageParams { page: Some(0) }.window().is_err());
        assert!(PageParams { page: Some(-4) }.window().is_err());
    }

    #[test]
    fn huge_page_saturates_instead_of_overflowing() {
        let (offset, _) = PageParams {
            page: Some(i64::MAX),
        }
        .window()
        .unwrap();
        assert_eq!(offset, i64::MAX);
    }

    #[test]
    fn question_list_counts_its_questions() {
        let list = QuestionList::new(Vec::new(), Some("Art".to_string()));
        let value = serde_json::to_value(&list).unwrap();
        assert_eq!(value["totalQuestions"], 0);
        assert_eq!(value["currentCategory"], "Art");
        assert_eq!(value["success"], true);
    }
}
