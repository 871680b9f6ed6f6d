pub mod bank;
pub mod score;

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Quiz {
    pub questions: Vec<Question>,
    pub current_question: usize,
    pub score: u32,
}

impl Quiz {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            current_question: 0,
            score: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.current_question)
    }

    pub fn is_finished(&self) -> bool {
        self.current_question >= self.questions.len()
    }

    // Checks the answer against the current question, then moves on.
    // Returns None once the quiz is over.
    pub fn submit(&mut self, answer_text: &str) -> Option<Verdict> {
        let question = self.questions.get(self.current_question)?;
        let verdict = question.check(answer_text);

        if verdict.is_correct {
            self.score += 1;
        }
        self.current_question += 1;

        Some(verdict)
    }
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Question {
    pub text: String,
    pub answers: Vec<Answer>,
    pub explanation: String,
    pub category: Category,
}

impl Question {
    pub fn new(
        text: String,
        answers: Vec<Answer>,
        explanation: String,
        category: Category,
    ) -> Self {
        Self {
            text,
            answers,
            explanation,
            category,
        }
    }

    pub fn correct_answer(&self) -> &str {
        // Every bank question carries exactly one correct option
        let correct = self.answers.iter().find(|a| a.is_correct).unwrap();
        correct.text.as_str()
    }

    pub fn check(&self, answer_text: &str) -> Verdict {
        let correct_answer = self.correct_answer();

        Verdict {
            is_correct: answer_text == correct_answer,
            correct_answer: correct_answer.to_string(),
            explanation: self.explanation.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Answer {
    pub text: String,
    pub is_correct: bool,
}

impl Answer {
    pub fn new(text: String, is_correct: bool) -> Self {
        Self { text, is_correct }
    }
}

#[derive(Debug, Clone)]
pub struct Verdict {
    pub is_correct: bool,
    pub correct_answer: String,
    pub explanation: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    StoryType,
    CharacterTrait,
    Setting,
    PlotStart,
    PlotAction,
    Obstacle,
    Ending,
    Grammar,
    Theme,
    Lesson,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::StoryType => "story type",
            Category::CharacterTrait => "character trait",
            Category::Setting => "setting",
            Category::PlotStart => "plot start",
            Category::PlotAction => "plot action",
            Category::Obstacle => "obstacle",
            Category::Ending => "ending",
            Category::Grammar => "grammar",
            Category::Theme => "theme",
            Category::Lesson => "lesson",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_question_quiz() -> Quiz {
        let first = Question::new(
            "Pick one".to_string(),
            vec![
                Answer::new("right".to_string(), true),
                Answer::new("wrong".to_string(), false),
            ],
            "Because it is right.".to_string(),
            Category::StoryType,
        );
        let second = Question::new(
            "Pick again".to_string(),
            vec![
                Answer::new("nope".to_string(), false),
                Answer::new("yes".to_string(), true),
            ],
            "Yes it is.".to_string(),
            Category::Theme,
        );
        Quiz::new(vec![first, second])
    }

    #[test]
    fn correct_answer_bumps_the_score_and_advances() {
        let mut quiz = two_question_quiz();

        let verdict = quiz.submit("right").unwrap();
        assert!(verdict.is_correct);
        assert_eq!(quiz.score, 1);
        assert_eq!(quiz.current_question, 1);
        assert!(!quiz.is_finished());
    }

    #[test]
    fn wrong_answer_reveals_the_correct_option() {
        let mut quiz = two_question_quiz();

        let verdict = quiz.submit("wrong").unwrap();
        assert!(!verdict.is_correct);
        assert_eq!(verdict.correct_answer, "right");
        assert_eq!(verdict.explanation, "Because it is right.");
        assert_eq!(quiz.score, 0);
    }

    #[test]
    fn quiz_finishes_after_the_last_question() {
        let mut quiz = two_question_quiz();
        quiz.submit("right").unwrap();
        quiz.submit("yes").unwrap();

        assert!(quiz.is_finished());
        assert_eq!(quiz.score, 2);
        assert!(quiz.submit("anything").is_none());
        assert!(quiz.current().is_none());
    }

    #[test]
    fn current_returns_the_upcoming_question() {
        let mut quiz = two_question_quiz();
        assert_eq!(quiz.current().unwrap().text, "Pick one");

        quiz.submit("right").unwrap();
        assert_eq!(quiz.current().unwrap().text, "Pick again");
    }
}
