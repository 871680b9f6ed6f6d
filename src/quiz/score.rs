use chrono::{DateTime, Utc};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ScoreRecord {
    pub question: String,
    pub user_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct QuizStatistics {
    pub total_questions: usize,
    pub correct_answers: usize,
    pub accuracy_percentage: f64,
    pub recent_performance: Vec<bool>,
}

#[derive(Debug, Default)]
pub struct ScoreBook {
    records: Vec<ScoreRecord>,
}

impl ScoreBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(
        &mut self,
        question: &str,
        user_answer: &str,
        correct_answer: &str,
        is_correct: bool,
    ) {
        self.records.push(ScoreRecord {
            question: question.to_string(),
            user_answer: user_answer.to_string(),
            correct_answer: correct_answer.to_string(),
            is_correct,
            timestamp: Utc::now(),
        });
    }

    // None until at least one answer has been recorded
    pub fn statistics(&self) -> Option<QuizStatistics> {
        if self.records.is_empty() {
            return None;
        }

        let total_questions = self.records.len();
        let correct_answers = self.records.iter().filter(|r| r.is_correct).count();
        let accuracy_percentage = (correct_answers as f64 / total_questions as f64) * 100.0;

        let recent_start = total_questions.saturating_sub(5);
        let recent_performance = self.records[recent_start..]
            .iter()
            .map(|r| r.is_correct)
            .collect();

        Some(QuizStatistics {
            total_questions,
            correct_answers,
            accuracy_percentage,
            recent_performance,
        })
    }
}
