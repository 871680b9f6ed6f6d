use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::story::{StoryDraft, WordKind};

pub const HISTORY_LIMIT: usize = 50;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("could not write the history file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not encode the history: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StoryRecord {
    pub story_id: String,
    pub timestamp: DateTime<Utc>,
    pub adjective: String,
    pub name: String,
    pub place: String,
    pub past_action: String,
    pub future_action: String,
    pub full_story: String,
}

impl StoryRecord {
    pub fn from_draft(draft: &StoryDraft) -> Self {
        let field = |kind: WordKind| draft.get(kind).unwrap_or_default().to_string();

        // A short id reads better in the story list than a full uuid
        let mut story_id = Uuid::new_v4().simple().to_string();
        story_id.truncate(8);

        Self {
            story_id,
            timestamp: Utc::now(),
            adjective: field(WordKind::Adjective),
            name: field(WordKind::Name),
            place: field(WordKind::Place),
            past_action: field(WordKind::PastAction),
            future_action: field(WordKind::FutureAction),
            full_story: draft.build(),
        }
    }
}

#[derive(Debug)]
pub struct HistoryStore {
    path: PathBuf,
    stories: Vec<StoryRecord>,
}

impl HistoryStore {
    // A missing or unreadable file means starting with an empty history,
    // losing old stories should never block making new ones.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let stories = match File::open(&path) {
            Ok(file) => match serde_json::from_reader(BufReader::new(file)) {
                Ok(stories) => stories,
                Err(err) => {
                    log::warn!("Could not read stories from {}: {}", path.display(), err);
                    Vec::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(err) => {
                log::warn!("Could not open {}: {}", path.display(), err);
                Vec::new()
            }
        };

        Self { path, stories }
    }

    pub fn append(&mut self, record: StoryRecord) {
        self.stories.push(record);

        // Keep only the newest stories so the file doesn't grow forever
        if self.stories.len() > HISTORY_LIMIT {
            let excess = self.stories.len() - HISTORY_LIMIT;
            self.stories.drain(..excess);
        }
    }

    pub fn save(&self) -> Result<(), HistoryError> {
        let json = serde_json::to_string_pretty(&self.stories)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    pub fn stories(&self) -> &[StoryRecord] {
        &self.stories
    }

    pub fn len(&self) -> usize {
        self.stories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }
}
