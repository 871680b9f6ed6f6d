mod quiz;
mod story;

use std::io::{self, BufRead, Write};

use dotenv::dotenv;

use quiz::score::ScoreBook;
use story::history::{HistoryStore, StoryRecord};
use story::{StoryDraft, WordKind};

type HandlerResult = Result<State, Box<dyn std::error::Error + Send + Sync>>;

#[derive(Debug, Clone, Copy, Default)]
pub enum State {
    #[default]
    Menu,
    CreateStory,
    TakeQuiz,
    StoryHistory,
    Statistics,
    Exit,
}

const WELCOME_TEXT: &str =
    "🚀 Welcome to the Interactive Story Generator!\nLet's create an amazing story together!";
const GOODBYE_TEXT: &str =
    "\n👋 Thanks for using the Interactive Story Generator! See you next time!";

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenv().ok();
    pretty_env_logger::init();
    log::info!("Starting the interactive story generator...");

    let history_path =
        std::env::var("STORY_HISTORY_FILE").unwrap_or_else(|_| "story_history.json".to_string());
    log::debug!("Using history file {}", history_path);

    let mut history = HistoryStore::load(history_path);
    let mut scores = ScoreBook::new();
    let mut input = io::stdin().lock();

    println!("{}", WELCOME_TEXT);

    let mut state = State::Menu;
    loop {
        let step = match state {
            State::Menu => show_menu(&mut input),
            State::CreateStory => create_story(&mut input, &mut history, &mut scores),
            State::TakeQuiz => run_quiz(&mut input, &mut scores),
            State::StoryHistory => Ok(show_history(&history)),
            State::Statistics => Ok(show_statistics(&scores)),
            State::Exit => break,
        };

        state = match step {
            Ok(next) => next,
            Err(err) => {
                // Ctrl+D anywhere ends the session like choosing Exit would
                if let Some(io_err) = err.downcast_ref::<io::Error>() {
                    if io_err.kind() == io::ErrorKind::UnexpectedEof {
                        break;
                    }
                }
                return Err(err);
            }
        };
    }

    println!("{}", GOODBYE_TEXT);
    Ok(())
}

fn show_menu(input: &mut impl BufRead) -> HandlerResult {
    println!("\n{}", "=".repeat(50));
    println!("🎭 Interactive Story Generator");
    println!("{}", "=".repeat(50));
    println!("1. Create a new story");
    println!("2. Take a storytelling quiz");
    println!("3. View story history");
    println!("4. View quiz statistics");
    println!("5. Exit");
    println!("{}", "=".repeat(50));

    let choice = prompt(input, "Choose an option (1-5): ")?;
    match choice.as_str() {
        "1" => Ok(State::CreateStory),
        "2" => Ok(State::TakeQuiz),
        "3" => Ok(State::StoryHistory),
        "4" => Ok(State::Statistics),
        "5" => Ok(State::Exit),
        _ => {
            println!("❌ Please enter a valid option (1-5).");
            Ok(State::Menu)
        }
    }
}

fn create_story(
    input: &mut impl BufRead,
    history: &mut HistoryStore,
    scores: &mut ScoreBook,
) -> HandlerResult {
    let mut draft = StoryDraft::new();

    println!("\n🎯 Let's start with a fun question about storytelling!");
    ask_quick_question(input, scores)?;

    println!("\n{}", "=".repeat(50));
    println!("📚 Let's start building your story!");
    println!("{}", "=".repeat(50));
    for kind in [WordKind::Adjective, WordKind::Name, WordKind::Place] {
        let word = collect_word(input, kind)?;
        draft.set(kind, word);
    }

    println!("\n🎯 Another storytelling question!");
    ask_quick_question(input, scores)?;

    for kind in [WordKind::PastAction, WordKind::FutureAction] {
        println!("\n{}", "=".repeat(50));
        println!("{}", story::guidance::guidance_message(kind));
        println!("{}", "=".repeat(50));

        let word = collect_word(input, kind)?;
        draft.set(kind, word);
    }

    println!("{}", story::format_story_display(&draft.build()));

    if draft.is_complete() {
        history.append(StoryRecord::from_draft(&draft));
        if let Err(err) = history.save() {
            // A story that can't be saved is still worth showing
            log::warn!("Could not save stories: {}", err);
        }
    }

    Ok(State::Menu)
}

fn prompt_text(kind: WordKind) -> &'static str {
    match kind {
        WordKind::Adjective => "\nEnter an adjective (e.g., brave, curious, mysterious): ",
        WordKind::Name => "Enter a character name: ",
        WordKind::Place => "Enter a place (e.g., small town, big city, magical forest): ",
        WordKind::PastAction => "\nEnter a past tense verb: ",
        WordKind::FutureAction => "\nEnter a future tense action: ",
    }
}

fn collect_word(input: &mut impl BufRead, kind: WordKind) -> io::Result<String> {
    loop {
        let text = prompt(input, prompt_text(kind))?;
        match story::validate::validate(&text, kind) {
            Ok(word) => return Ok(word),
            Err(violation) => {
                log::debug!("{:?} input rejected by rule {:?}", kind, violation.rule);
                println!("❌ {}", violation);

                let examples = story::validate::examples_for(kind);
                println!("   Examples: {}", examples[..3].join(", "));
            }
        }
    }
}

fn ask_quick_question(input: &mut impl BufRead, scores: &mut ScoreBook) -> io::Result<()> {
    let question = quiz::bank::random_question();

    println!("\n{}", "=".repeat(50));
    println!("🎯 INTERACTIVE STORY QUESTION ({})", question.category.label());

    let user_answer = choose_answer(input, &question)?;
    let verdict = question.check(&user_answer);
    give_feedback(&user_answer, &verdict);

    scores.record(
        &question.text,
        &user_answer,
        &verdict.correct_answer,
        verdict.is_correct,
    );
    Ok(())
}

// Shows the numbered options and keeps asking until a valid choice comes in
fn choose_answer(input: &mut impl BufRead, question: &quiz::Question) -> io::Result<String> {
    println!("{}", question.text);
    println!("\nOptions:");
    for (i, answer) in question.answers.iter().enumerate() {
        println!("   {}. {}", i + 1, answer.text);
    }
    println!("{}", "=".repeat(50));

    loop {
        let text = prompt(
            input,
            &format!("Enter your choice (1-{}): ", question.answers.len()),
        )?;
        match text.parse::<usize>() {
            Ok(n) if n >= 1 && n <= question.answers.len() => {
                return Ok(question.answers[n - 1].text.clone());
            }
            _ => println!(
                "❌ Invalid choice. Please enter a number from 1 to {}.",
                question.answers.len()
            ),
        }
    }
}

fn give_feedback(user_answer: &str, verdict: &quiz::Verdict) {
    println!("\n✅ Your answer: {}", user_answer);
    if verdict.is_correct {
        println!("🎉 Correct! {}", verdict.explanation);
    } else {
        println!("💡 The best answer was: {}", verdict.correct_answer);
        println!("💭 {}", verdict.explanation);
    }
}

const QUIZ_INTRO_TEXT: &str = "\n🎯 Let's test your storytelling knowledge!";

fn run_quiz(input: &mut impl BufRead, scores: &mut ScoreBook) -> HandlerResult {
    println!("{}", QUIZ_INTRO_TEXT);

    let bank_size = quiz::bank::question_bank().len();
    let amount: usize;
    loop {
        let text = prompt(
            input,
            &format!("How many questions would you like? (1-{}): ", bank_size),
        )?;
        if let Err(_) = text.parse::<usize>() {
            println!("❌ Please enter a number.");
            continue;
        }

        // It is safe to unwrap here because we've already checked that the input is a number
        let parsed: usize = text.parse().unwrap();
        if parsed == 0 {
            println!("❌ The amount of questions cannot be 0.");
            continue;
        }

        amount = parsed;
        break;
    }

    let mut quiz_round = quiz::bank::pick_quiz(amount);
    if amount > quiz_round.len() {
        println!(
            "We only have {} questions, so let's do all of them!",
            quiz_round.len()
        );
    }

    while !quiz_round.is_finished() {
        // current() is Some for as long as the quiz isn't finished
        let question = quiz_round.current().unwrap().clone();

        println!("\n{}", "=".repeat(50));
        println!(
            "🎯 Question {} of {} ({})",
            quiz_round.current_question + 1,
            quiz_round.len(),
            question.category.label()
        );

        let user_answer = choose_answer(input, &question)?;
        let verdict = match quiz_round.submit(&user_answer) {
            Some(verdict) => verdict,
            None => break,
        };
        give_feedback(&user_answer, &verdict);

        scores.record(
            &question.text,
            &user_answer,
            &verdict.correct_answer,
            verdict.is_correct,
        );
    }

    println!(
        "\n🏁 The quiz is over! You answered {} of {} questions correctly.",
        quiz_round.score,
        quiz_round.len()
    );

    Ok(State::Menu)
}

fn show_history(history: &HistoryStore) -> State {
    if history.is_empty() {
        println!("\n📚 No saved stories yet. Create your first story!");
        return State::Menu;
    }

    println!("\n📚 Story History ({} stories):", history.len());
    println!("{}", "=".repeat(60));

    // Show the last 5 stories, newest last
    let stories = history.stories();
    let start = stories.len().saturating_sub(5);
    for (i, story) in stories[start..].iter().enumerate() {
        println!("\n{}. Story #{}", i + 1, story.story_id);
        println!("   Created: {}", story.timestamp.format("%Y-%m-%d %H:%M:%S"));
        println!("   Character: {} - {}", story.name, story.adjective);
        println!("   Setting: {}", story.place);
        println!("{}", "-".repeat(40));
    }

    State::Menu
}

fn show_statistics(scores: &ScoreBook) -> State {
    let stats = match scores.statistics() {
        Some(stats) => stats,
        None => {
            println!("\n📊 No quiz data available yet. Take some questions first!");
            return State::Menu;
        }
    };

    println!("\n📊 QUIZ PERFORMANCE STATISTICS");
    println!("{}", "=".repeat(50));
    println!("Total Questions Answered: {}", stats.total_questions);
    println!("Correct Answers: {}", stats.correct_answers);
    println!("Accuracy: {:.1}%", stats.accuracy_percentage);

    let recent_correct = stats.recent_performance.iter().filter(|c| **c).count();
    println!(
        "Recent Performance (last {}): {}/{} correct",
        stats.recent_performance.len(),
        recent_correct,
        stats.recent_performance.len()
    );

    if stats.accuracy_percentage >= 80.0 {
        println!("🌟 Excellent! You're a storytelling expert!");
    } else if stats.accuracy_percentage >= 60.0 {
        println!("👍 Good job! Keep learning and improving!");
    } else {
        println!("📚 Keep practicing! Storytelling takes time to master!");
    }

    State::Menu
}

fn prompt(input: &mut impl BufRead, message: &str) -> io::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
    }

    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_question() -> quiz::Question {
        quiz::Question::new(
            "Pick the best option".to_string(),
            vec![
                quiz::Answer::new("first".to_string(), false),
                quiz::Answer::new("second".to_string(), true),
                quiz::Answer::new("third".to_string(), false),
            ],
            "Second is best.".to_string(),
            quiz::Category::StoryType,
        )
    }

    #[test]
    fn prompt_returns_the_trimmed_line() {
        let mut input = io::Cursor::new("  brave  \n");
        assert_eq!(prompt(&mut input, "> ").unwrap(), "brave");
    }

    #[test]
    fn prompt_reports_eof_as_an_error() {
        let mut input = io::Cursor::new("");
        let err = prompt(&mut input, "> ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn collect_word_retries_after_a_rejected_word() {
        let mut input = io::Cursor::new("123\nbrave\n");
        assert_eq!(collect_word(&mut input, WordKind::Adjective).unwrap(), "brave");
    }

    #[test]
    fn collect_word_stops_at_eof_instead_of_spinning() {
        let mut input = io::Cursor::new("st1ll-wrong\n");
        let err = collect_word(&mut input, WordKind::Adjective).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn choose_answer_rejects_out_of_range_and_garbage_choices() {
        let mut input = io::Cursor::new("9\nx\n2\n");
        let picked = choose_answer(&mut input, &sample_question()).unwrap();
        assert_eq!(picked, "second");
    }

    #[test]
    fn eof_reaches_the_menu_loop_as_an_io_error() {
        let mut input = io::Cursor::new("");
        let err = show_menu(&mut input).unwrap_err();

        let io_err = err.downcast_ref::<io::Error>().unwrap();
        assert_eq!(io_err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn menu_maps_choices_to_states() {
        let mut input = io::Cursor::new("1\n");
        assert!(matches!(show_menu(&mut input).unwrap(), State::CreateStory));

        let mut input = io::Cursor::new("5\n");
        assert!(matches!(show_menu(&mut input).unwrap(), State::Exit));
    }

    #[test]
    fn menu_rejects_an_unknown_option() {
        let mut input = io::Cursor::new("7\n");
        assert!(matches!(show_menu(&mut input).unwrap(), State::Menu));
    }

    #[test]
    fn run_quiz_rejects_garbage_and_zero_counts() {
        let mut scores = ScoreBook::new();
        let mut input = io::Cursor::new("abc\n0\n2\n1\n1\n");

        let state = run_quiz(&mut input, &mut scores).unwrap();

        assert!(matches!(state, State::Menu));
        assert_eq!(scores.statistics().unwrap().total_questions, 2);
    }

    #[test]
    fn create_story_collects_words_and_saves_history() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("story_history.json");
        let mut history = HistoryStore::load(&path);
        let mut scores = ScoreBook::new();

        let mut input =
            io::Cursor::new("1\nbrave\nAlex\nsmall town\n1\ndiscovered\nwill explore\n");
        let state = create_story(&mut input, &mut history, &mut scores).unwrap();

        assert!(matches!(state, State::Menu));
        assert_eq!(history.len(), 1);
        assert!(history.stories()[0].full_story.contains("Alex"));
        assert_eq!(scores.statistics().unwrap().total_questions, 2);
        assert_eq!(HistoryStore::load(&path).len(), 1);
    }
}
