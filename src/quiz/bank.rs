use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::quiz;
use crate::quiz::Category;

pub fn question_bank() -> Vec<quiz::Question> {
    vec![
        question(
            "What type of story are we creating?",
            ["Adventure", "Mystery", "Fantasy", "Science Fiction", "Realistic"],
            "Adventure",
            "Adventure stories are exciting and full of action!",
            Category::StoryType,
        ),
        question(
            "What should be the main character's personality trait?",
            [
                "Brave and courageous",
                "Smart and clever",
                "Kind and caring",
                "Funny and witty",
                "Strong and determined",
            ],
            "Brave and courageous",
            "Brave characters make for exciting adventures!",
            Category::CharacterTrait,
        ),
        question(
            "Where should our story take place?",
            [
                "A magical forest",
                "A busy city",
                "A mysterious island",
                "A space station",
                "A hidden cave",
            ],
            "A magical forest",
            "Magical forests are perfect for adventure stories!",
            Category::Setting,
        ),
        question(
            "What should happen to start the adventure?",
            [
                "Find a mysterious map",
                "Discover a hidden door",
                "Meet a talking animal",
                "Receive a magical letter",
                "Fall through a portal",
            ],
            "Find a mysterious map",
            "Maps lead to treasure and adventure!",
            Category::PlotStart,
        ),
        question(
            "What should the character do next?",
            [
                "Follow the map to find treasure",
                "Ask for help from friends",
                "Study the map carefully",
                "Tell an adult about it",
                "Ignore the map",
            ],
            "Follow the map to find treasure",
            "Following the map will lead to an exciting journey!",
            Category::PlotAction,
        ),
        question(
            "What obstacle should the character face?",
            [
                "A dark cave to explore",
                "A river to cross",
                "A puzzle to solve",
                "A storm to weather",
                "A creature to befriend",
            ],
            "A puzzle to solve",
            "Puzzles make the story more interactive and challenging!",
            Category::Obstacle,
        ),
        question(
            "How should the story end?",
            [
                "Find a great treasure",
                "Make new friends",
                "Learn an important lesson",
                "Return home safely",
                "Start a new adventure",
            ],
            "Learn an important lesson",
            "Stories with lessons are meaningful and memorable!",
            Category::Ending,
        ),
        question(
            "What tense should we use for the story?",
            [
                "Past tense (walked, ran)",
                "Present tense (walk, run)",
                "Future tense (will walk, will run)",
                "Mixed tenses",
                "Past perfect (had walked)",
            ],
            "Past tense (walked, ran)",
            "Past tense is most common for storytelling!",
            Category::Grammar,
        ),
        question(
            "What should be the story's theme?",
            [
                "Friendship and teamwork",
                "Courage and bravery",
                "Discovery and learning",
                "Family and love",
                "Growth and change",
            ],
            "Courage and bravery",
            "Courage themes make stories inspiring!",
            Category::Theme,
        ),
        question(
            "What should the character learn?",
            [
                "To be brave in difficult situations",
                "To work well with others",
                "To think before acting",
                "To appreciate what they have",
                "To never give up",
            ],
            "To be brave in difficult situations",
            "Learning bravery helps characters grow!",
            Category::Lesson,
        ),
    ]
}

fn question(
    text: &str,
    options: [&str; 5],
    correct_answer: &str,
    explanation: &str,
    category: Category,
) -> quiz::Question {
    let answers = options
        .iter()
        .map(|option| quiz::Answer::new(option.to_string(), *option == correct_answer))
        .collect();

    quiz::Question::new(text.to_string(), answers, explanation.to_string(), category)
}

pub fn random_question() -> quiz::Question {
    let bank = question_bank();
    // The bank is hardcoded, choosing from it can't fail
    let mut picked = bank.choose(&mut thread_rng()).unwrap().clone();
    // We shuffle the answers so the correct one isn't always the first one
    picked.answers.shuffle(&mut thread_rng());
    return picked;
}

pub fn pick_quiz(amount: usize) -> quiz::Quiz {
    let bank = question_bank();
    let amount = amount.min(bank.len());

    let mut questions = bank
        .choose_multiple(&mut thread_rng(), amount)
        .cloned()
        .collect::<Vec<_>>();

    // We shuffle the answers so the correct one isn't always the first one
    for question in &mut questions {
        question.answers.shuffle(&mut thread_rng());
    }

    quiz::Quiz::new(questions)
}
