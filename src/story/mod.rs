pub mod guidance;
pub mod history;
pub mod validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordKind {
    Adjective,
    Name,
    Place,
    PastAction,
    FutureAction,
}

impl WordKind {
    // In the order the story template needs them
    pub const ALL: [WordKind; 5] = [
        WordKind::Adjective,
        WordKind::Name,
        WordKind::Place,
        WordKind::PastAction,
        WordKind::FutureAction,
    ];

    pub fn key(self) -> &'static str {
        match self {
            WordKind::Adjective => "adjective",
            WordKind::Name => "name",
            WordKind::Place => "place",
            WordKind::PastAction => "past_action",
            WordKind::FutureAction => "future_action",
        }
    }
}

pub const STORY_TEMPLATE: &str = "Once upon a time, there was a [ADJECTIVE] teenager named \
    [NAME] who lived in [ARTICLE] [PLACE]. One day, they [PAST_ACTION] something that would \
    change their life forever. Now, they [FUTURE_ACTION] to make their dreams come true. \
    And so, their incredible journey began...";

#[derive(Debug, Clone, Default)]
pub struct StoryDraft {
    adjective: Option<String>,
    name: Option<String>,
    place: Option<String>,
    past_action: Option<String>,
    future_action: Option<String>,
}

impl StoryDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, kind: WordKind, value: String) {
        let slot = match kind {
            WordKind::Adjective => &mut self.adjective,
            WordKind::Name => &mut self.name,
            WordKind::Place => &mut self.place,
            WordKind::PastAction => &mut self.past_action,
            WordKind::FutureAction => &mut self.future_action,
        };
        *slot = Some(value);
    }

    pub fn get(&self, kind: WordKind) -> Option<&str> {
        let slot = match kind {
            WordKind::Adjective => &self.adjective,
            WordKind::Name => &self.name,
            WordKind::Place => &self.place,
            WordKind::PastAction => &self.past_action,
            WordKind::FutureAction => &self.future_action,
        };
        slot.as_deref()
    }

    pub fn missing(&self) -> Vec<WordKind> {
        WordKind::ALL
            .iter()
            .copied()
            .filter(|kind| self.get(*kind).is_none())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    fn slot_value(&self, kind: WordKind) -> String {
        match self.get(kind) {
            Some(value) => value.trim().to_string(),
            // An unfilled slot shows up in the story instead of breaking it
            None => format!("[missing {}]", kind.key()),
        }
    }

    pub fn build(&self) -> String {
        let adjective = self.slot_value(WordKind::Adjective).to_lowercase();
        let name = self.slot_value(WordKind::Name);
        let place = self.slot_value(WordKind::Place);
        let past_action = self.slot_value(WordKind::PastAction);
        let future_action = self.slot_value(WordKind::FutureAction);

        return STORY_TEMPLATE
            .replace("[ADJECTIVE]", &adjective)
            .replace("[NAME]", &name)
            .replace("[ARTICLE]", article_for(&place))
            .replace("[PLACE]", &place)
            .replace("[PAST_ACTION]", &past_action)
            .replace("[FUTURE_ACTION]", &future_action);
    }
}

// "an underwater cave", but "a small town"
fn article_for(place: &str) -> &'static str {
    match place.chars().next() {
        Some(first) if "aeiou".contains(first.to_ascii_lowercase()) => "an",
        _ => "a",
    }
}

pub fn format_story_display(story: &str) -> String {
    let banner = format!("🎭{}🎭", "=".repeat(48));

    let mut formatted = String::from("\n");
    formatted.push_str(&banner);
    formatted.push_str("\n                    YOUR STORY\n");
    formatted.push_str(&banner);
    formatted.push_str("\n\n");
    formatted.push_str(story);
    formatted.push_str("\n\n");
    formatted.push_str(&banner);
    formatted.push_str("\n           Thanks for creating with us!\n");
    formatted.push_str(&banner);
    formatted.push('\n');

    return formatted;
}
