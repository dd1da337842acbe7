//! Quiz progress as an immutable state plus a pure transition function.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::questions::{ActiveQuiz, Answer};
use crate::report::StoredResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub name: String,
    pub birth_date: NaiveDate,
    #[serde(default)]
    pub birth_time: Option<NaiveTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizState {
    pub user_info: Option<UserInfo>,
    pub current_index: usize,
    pub answers: Vec<Answer>,
    pub is_completed: bool,
    pub session_id: Option<String>,
    pub saved_result: Option<StoredResult>,
    pub total: usize,
}

impl QuizState {
    pub fn new(total: usize) -> Self {
        Self {
            user_info: None,
            current_index: 0,
            answers: Vec::new(),
            is_completed: false,
            session_id: None,
            saved_result: None,
            total,
        }
    }

    pub fn for_quiz(quiz: &ActiveQuiz) -> Self {
        Self::new(quiz.len())
    }

    pub fn answer_for(&self, question_id: &str) -> Option<&Answer> {
        self.answers
            .iter()
            .find(|answer| answer.question_id.as_str() == question_id)
    }

    /// Answer already given for the question at `current_index`, if any.
    pub fn current_answer(&self, quiz: &ActiveQuiz) -> Option<&Answer> {
        let question = quiz.question_at(self.current_index)?;
        self.answer_for(question.id.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum QuizAction {
    SetUserInfo(UserInfo),
    AnswerSelected(Answer),
    Advanced,
    Reset,
    SetSessionId(String),
    SetSavedResult(StoredResult),
}

pub fn reduce(state: &QuizState, action: QuizAction) -> QuizState {
    match action {
        QuizAction::SetUserInfo(user_info) => QuizState {
            user_info: Some(user_info),
            ..state.clone()
        },
        QuizAction::AnswerSelected(answer) => {
            let mut answers = state.answers.clone();
            match answers
                .iter_mut()
                .find(|existing| existing.question_id == answer.question_id)
            {
                Some(existing) => *existing = answer,
                None => answers.push(answer),
            }
            QuizState {
                answers,
                ..state.clone()
            }
        }
        QuizAction::Advanced if state.is_completed => state.clone(),
        QuizAction::Advanced => {
            let current_index = state.current_index + 1;
            QuizState {
                current_index,
                is_completed: current_index >= state.total,
                ..state.clone()
            }
        }
        QuizAction::Reset => QuizState::new(state.total),
        QuizAction::SetSessionId(session_id) => QuizState {
            session_id: Some(session_id),
            ..state.clone()
        },
        QuizAction::SetSavedResult(saved_result) => QuizState {
            saved_result: Some(saved_result),
            ..state.clone()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questions::QuizLength;
    use crate::scoring::{accumulate, ScoreKey};

    fn quiz() -> ActiveQuiz {
        ActiveQuiz::builtin(QuizLength::Short).expect("short quiz")
    }

    #[test]
    fn reselecting_replaces_the_previous_answer() {
        let quiz = quiz();
        let state = QuizState::for_quiz(&quiz);
        let first = quiz.answer("mbti-ie-1", "a").expect("option a");
        let second = quiz.answer("mbti-ie-1", "b").expect("option b");

        let state = reduce(&state, QuizAction::AnswerSelected(first));
        let state = reduce(&state, QuizAction::AnswerSelected(second));

        assert_eq!(state.answers.len(), 1);
        let scores = accumulate(&state.answers);
        assert_eq!(scores.get(ScoreKey::E), 0);
        assert_eq!(scores.get(ScoreKey::I), 1);
    }

    #[test]
    fn advancing_past_the_last_question_completes() {
        let mut state = QuizState::new(2);
        state = reduce(&state, QuizAction::Advanced);
        assert!(!state.is_completed);
        state = reduce(&state, QuizAction::Advanced);
        assert!(state.is_completed);
        assert_eq!(state.current_index, 2);

        let after = reduce(&state, QuizAction::Advanced);
        assert_eq!(after, state);
    }

    #[test]
    fn reset_keeps_the_quiz_length_only() {
        let quiz = quiz();
        let mut state = QuizState::for_quiz(&quiz);
        state = reduce(&state, QuizAction::SetSessionId("abc".into()));
        state = reduce(
            &state,
            QuizAction::AnswerSelected(quiz.answer("tci-ns-1", "a").expect("option")),
        );
        state = reduce(&state, QuizAction::Advanced);

        let reset = reduce(&state, QuizAction::Reset);
        assert_eq!(reset, QuizState::new(33));
    }

    #[test]
    fn current_answer_follows_the_index() {
        let quiz = quiz();
        let mut state = QuizState::for_quiz(&quiz);
        assert!(state.current_answer(&quiz).is_none());

        let first_id = quiz.question_at(0).expect("first").id.clone();
        state = reduce(
            &state,
            QuizAction::AnswerSelected(quiz.answer(first_id.as_str(), "b").expect("option")),
        );
        assert_eq!(
            state.current_answer(&quiz).map(|answer| answer.option_key.as_str()),
            Some("b")
        );

        state = reduce(&state, QuizAction::Advanced);
        assert!(state.current_answer(&quiz).is_none());
    }

    #[test]
    fn stores_user_info() {
        let info = UserInfo {
            name: "홍길동".into(),
            birth_date: NaiveDate::from_ymd_opt(1990, 5, 17).expect("date"),
            birth_time: None,
        };
        let state = reduce(&QuizState::new(45), QuizAction::SetUserInfo(info.clone()));
        assert_eq!(state.user_info, Some(info));
        assert_eq!(state.total, 45);
    }
}
