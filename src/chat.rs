//! Chat transcript types: participants and messages.
//!
//! The engine owns the ordered message list; the transcript view is a pure
//! consumer of published snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A human participant or the AI agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub name: String,
    /// Accent color hint for renderers.
    pub color: String,
}

impl Participant {
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Participant {
            id: id.into(),
            name: name.into(),
            color: color.into(),
        }
    }
}

/// The fixed discussion roster.
pub fn default_participants() -> Vec<Participant> {
    vec![
        Participant::new("u1", "Dev Lead", "blue"),
        Participant::new("u2", "Stakeholder", "emerald"),
        Participant::new("u3", "Data Scientist", "purple"),
    ]
}

/// The AI agent's chat identity.
pub fn agent_identity() -> Participant {
    Participant::new("ai", "Omni", "slate")
}

/// One transcript entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub sender: Participant,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    /// Keywords the agent attached to its own reply, if any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

impl Message {
    pub fn new(id: u64, sender: Participant, text: impl Into<String>) -> Self {
        Message {
            id,
            sender,
            text: text.into(),
            timestamp: Utc::now(),
            keywords: Vec::new(),
        }
    }

    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = keywords;
        self
    }

    /// Timestamp formatted for transcript display.
    pub fn clock(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_is_stable() {
        let roster = default_participants();
        assert_eq!(roster.len(), 3);
        assert_eq!(roster[0].name, "Dev Lead");
        assert_eq!(agent_identity().name, "Omni");
    }

    #[test]
    fn test_clock_format() {
        let msg = Message::new(1, agent_identity(), "hello");
        let clock = msg.clock();
        assert_eq!(clock, msg.timestamp.format("%H:%M").to_string());
        assert_eq!(clock.len(), 5);
        assert_eq!(clock.as_bytes()[2], b':');
    }
}
