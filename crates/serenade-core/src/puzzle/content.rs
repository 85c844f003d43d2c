//! Fixed candidate sets the puzzle draws from.

use serde::Serialize;

/// Number of heart targets in the sequence stage.
pub const HEART_COUNT: usize = 4;

/// Lyric riddle for the first stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Riddle {
    pub question: &'static str,
    pub answer: &'static str,
    pub hint: &'static str,
}

impl Riddle {
    /// Case-insensitive, whitespace-trimmed comparison against the answer.
    pub fn accepts(&self, input: &str) -> bool {
        input.trim().to_lowercase() == self.answer.trim().to_lowercase()
    }
}

/// Multiple-choice question only the recipient should know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PersonalQuestion {
    pub question: &'static str,
    pub options: [&'static str; HEART_COUNT],
    /// Index into `options`
    pub correct: usize,
}

/// Order in which the hearts labelled 1..=4 must be clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HeartSequence([u8; HEART_COUNT]);

impl HeartSequence {
    /// Build a sequence; `None` unless `order` is a permutation of 1..=4.
    pub fn new(order: [u8; HEART_COUNT]) -> Option<Self> {
        let mut seen = [false; HEART_COUNT];
        for heart in order {
            let slot = (heart as usize).checked_sub(1).filter(|i| *i < HEART_COUNT)?;
            if std::mem::replace(&mut seen[slot], true) {
                return None;
            }
        }
        Some(Self(order))
    }

    pub fn hearts(&self) -> &[u8; HEART_COUNT] {
        &self.0
    }

    /// Whether `clicks` matches the start of this sequence
    pub fn is_prefix(&self, clicks: &[u8]) -> bool {
        clicks.len() <= HEART_COUNT && self.0.starts_with(clicks)
    }
}

impl std::fmt::Display for HeartSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{} → {} → {} → {}", a, b, c, d)
    }
}

pub const RIDDLES: [Riddle; 5] = [
    Riddle {
        question: "Complete the lyric: 'I was _______ to meet you'",
        answer: "enchanted",
        hint: "A magic word Taylor sings about meeting someone special",
    },
    Riddle {
        question: "Complete the lyric: 'You belong with _____'",
        answer: "me",
        hint: "The most famous song about belonging to someone",
    },
    Riddle {
        question: "Complete the lyric: 'We never go out of _____'",
        answer: "style",
        hint: "A song about a love that never goes out of fashion",
    },
    Riddle {
        question: "Complete the lyric: 'Love is golden like _______'",
        answer: "daylight",
        hint: "The song about seeing everything in golden colors",
    },
    Riddle {
        question: "Complete the lyric: 'You were my crown, now I'm in _____'",
        answer: "exile",
        hint: "A melancholy song about being far from the one you love",
    },
];

pub const HEART_SEQUENCES: [HeartSequence; 5] = [
    HeartSequence([1, 3, 2, 4]),
    HeartSequence([2, 1, 4, 3]),
    HeartSequence([3, 4, 1, 2]),
    HeartSequence([4, 2, 3, 1]),
    HeartSequence([1, 2, 3, 4]),
];

pub const PERSONAL_QUESTIONS: [PersonalQuestion; 5] = [
    PersonalQuestion {
        question: "Where did we first see each other? Think carefully...",
        options: ["At church", "At a birthday party", "At my front door", "On the street"],
        correct: 2,
    },
    PersonalQuestion {
        question: "When is our anniversary?",
        options: ["March 28", "March 30", "March 11", "April 1"],
        correct: 0,
    },
    PersonalQuestion {
        question: "What is my favorite anime?",
        options: ["Naruto", "Fullmetal Alchemist", "One Piece", "Attack on Titan"],
        correct: 2,
    },
    PersonalQuestion {
        question: "Where did we go on our first date?",
        options: ["A restaurant", "The movies", "A club", "The beach"],
        correct: 1,
    },
    PersonalQuestion {
        question: "How much do I love you?",
        options: ["A lot", "A lot a lot", "A lot a lot a lot", "More than life itself!!!"],
        correct: 3,
    },
];
