use serde::Serialize;

use crate::types::input::Guess;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccuracyBand {
    Perfect,
    VeryClose,
    Reasonable,
    QuiteDifferent,
}

impl AccuracyBand {
    pub fn from_diff(diff: u8) -> Self {
        match diff {
            0 => Self::Perfect,
            1..=5 => Self::VeryClose,
            6..=15 => Self::Reasonable,
            _ => Self::QuiteDifferent,
        }
    }
}

/// Comparison of the user's guess against the stored score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Accuracy {
    pub guess: u8,
    pub score: u8,
    pub diff: u8,
    pub band: AccuracyBand,
}

impl Accuracy {
    pub fn compare(guess: Guess, score: u8) -> Self {
        let diff = guess.value().abs_diff(score);
        Self {
            guess: guess.value(),
            score,
            diff,
            band: AccuracyBand::from_diff(diff),
        }
    }

    pub fn message(&self) -> String {
        match self.band {
            AccuracyBand::Perfect => "Perfect! Your guess matched the scanner.".to_string(),
            AccuracyBand::VeryClose => format!("Very close — within {} points.", self.diff),
            AccuracyBand::Reasonable => format!("Reasonable — off by {} points.", self.diff),
            AccuracyBand::QuiteDifferent => {
                format!("Quite different — off by {} points.", self.diff)
            }
        }
    }
}
