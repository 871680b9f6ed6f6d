use rand::seq::SliceRandom;

use crate::story::WordKind;

pub const PAST_TENSE_EXAMPLES: [&str; 22] = [
    "discovered", "explored", "created", "found", "learned", "built", "made", "took", "gave",
    "wrote", "drove", "flew", "ate", "drank", "ran", "swam", "went", "saw", "came", "felt",
    "thought", "knew",
];

pub const FUTURE_TENSE_EXAMPLES: [&str; 17] = [
    "will discover", "will explore", "will create", "will build", "will learn", "will make",
    "will find", "will write", "will drive", "will fly", "will run", "will swim", "will go",
    "will see", "will feel", "will think", "will know",
];

pub fn guidance_message(kind: WordKind) -> String {
    match kind {
        WordKind::PastAction => format!(
            "💡 Guidance: Now we need a past tense verb to describe what happened next!\n   Try words like: {}",
            sample(&PAST_TENSE_EXAMPLES, 3).join(", ")
        ),
        WordKind::FutureAction => format!(
            "💡 Guidance: Now let's look to the future! We need a future tense action!\n   Try phrases like: {}",
            sample(&FUTURE_TENSE_EXAMPLES, 3).join(", ")
        ),
        _ => "💡 Guidance: Please provide a word that fits the story!".to_string(),
    }
}

// A fresh random pick each time, so repeated prompts stay interesting
fn sample(examples: &[&'static str], amount: usize) -> Vec<&'static str> {
    examples
        .choose_multiple(&mut rand::thread_rng(), amount)
        .copied()
        .collect()
}
