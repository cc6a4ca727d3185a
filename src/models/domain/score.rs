use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::domain::question::QuestionRecord;

/// Pass mark shared by every quiz persona, independent of bank size.
pub const DEFAULT_PASS_THRESHOLD: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScoreResult {
    pub correct_count: usize,
    pub total: usize,
    pub passed: bool,
}

/// Counts the answers that match their question's correct option.
/// Unanswered indices and answers beyond the bank are wrong.
pub fn score(
    questions: &[QuestionRecord],
    answers: &BTreeMap<usize, String>,
    pass_threshold: usize,
) -> ScoreResult {
    let correct_count = questions
        .iter()
        .enumerate()
        .filter(|(index, question)| question.is_correct(answers.get(index).map(String::as_str)))
        .count();

    ScoreResult {
        correct_count,
        total: questions.len(),
        passed: correct_count >= pass_threshold,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank(size: usize) -> Vec<QuestionRecord> {
        (0..size)
            .map(|i| {
                QuestionRecord::new(
                    &format!("Question {}", i + 1),
                    ["A. alpha", "B. beta", "C. gamma", "D. delta"],
                    match i % 4 {
                        0 => "A. alpha",
                        1 => "B. beta",
                        2 => "C. gamma",
                        _ => "D. delta",
                    },
                )
            })
            .collect()
    }

    fn correct_answers(questions: &[QuestionRecord]) -> BTreeMap<usize, String> {
        questions
            .iter()
            .enumerate()
            .map(|(i, q)| (i, q.correct_answer.clone()))
            .collect()
    }

    fn wrong_option(question: &QuestionRecord) -> String {
        question
            .options
            .iter()
            .find(|o| **o != question.correct_answer)
            .cloned()
            .expect("every question has a wrong option")
    }

    #[test]
    fn no_answers_scores_zero() {
        let questions = bank(5);
        let result = score(&questions, &BTreeMap::new(), DEFAULT_PASS_THRESHOLD);

        assert_eq!(result.correct_count, 0);
        assert_eq!(result.total, 5);
        assert!(!result.passed);
    }

    #[test]
    fn fully_correct_mapping_scores_bank_length() {
        for size in [1, 5, 7] {
            let questions = bank(size);
            let result = score(&questions, &correct_answers(&questions), DEFAULT_PASS_THRESHOLD);
            assert_eq!(result.correct_count, size);
        }
    }

    #[test]
    fn scoring_is_deterministic() {
        let questions = bank(7);
        let mut answers = correct_answers(&questions);
        answers.insert(3, wrong_option(&questions[3]));

        let first = score(&questions, &answers, DEFAULT_PASS_THRESHOLD);
        let second = score(&questions, &answers, DEFAULT_PASS_THRESHOLD);
        assert_eq!(first, second);
    }

    #[test]
    fn correct_count_stays_within_bank_bounds() {
        let questions = bank(5);
        let mut answers = correct_answers(&questions);
        // Out-of-range indices must not count.
        answers.insert(5, "A. alpha".to_string());
        answers.insert(42, "B. beta".to_string());

        let result = score(&questions, &answers, DEFAULT_PASS_THRESHOLD);
        assert!(result.correct_count <= questions.len());
        assert_eq!(result.correct_count, 5);
    }

    #[test]
    fn four_of_five_correct_does_not_pass() {
        let questions = bank(5);
        let mut answers = correct_answers(&questions);
        answers.insert(4, wrong_option(&questions[4]));

        let result = score(&questions, &answers, DEFAULT_PASS_THRESHOLD);
        assert_eq!(result.correct_count, 4);
        assert!(!result.passed);
    }

    #[test]
    fn five_of_seven_correct_passes() {
        let questions = bank(7);
        let mut answers = correct_answers(&questions);
        answers.insert(0, wrong_option(&questions[0]));
        answers.insert(6, wrong_option(&questions[6]));

        let result = score(&questions, &answers, DEFAULT_PASS_THRESHOLD);
        assert_eq!(result.correct_count, 5);
        assert_eq!(result.total, 7);
        assert!(result.passed);
    }

    #[test]
    fn passed_tracks_threshold_regardless_of_bank_size() {
        for size in [5, 7] {
            let questions = bank(size);
            let all = correct_answers(&questions);
            for keep in 0..=size {
                let answers: BTreeMap<usize, String> =
                    all.iter().take(keep).map(|(k, v)| (*k, v.clone())).collect();
                let result = score(&questions, &answers, DEFAULT_PASS_THRESHOLD);
                assert_eq!(result.passed, result.correct_count >= DEFAULT_PASS_THRESHOLD);
            }
        }
    }
}
