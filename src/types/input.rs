use crate::error::{EcoError, Result};
use serde::Serialize;

pub const DEFAULT_GUESS: u8 = 50;
pub const MAX_GUESS: u8 = 100;

/// User guess, always within `0..=MAX_GUESS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Guess(u8);

impl Guess {
    pub fn new(value: u8) -> Result<Self> {
        if value > MAX_GUESS {
            return Err(EcoError::GuessOutOfRange(value.to_string()));
        }
        Ok(Self(value))
    }

    pub fn parse(raw: &str) -> Result<Self> {
        let value = raw
            .trim()
            .parse::<u8>()
            .map_err(|_| EcoError::GuessOutOfRange(raw.trim().to_string()))?;
        Self::new(value)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Guess {
    fn default() -> Self {
        Self(DEFAULT_GUESS)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub guess: Guess,
}

impl ProductInput {
    pub fn new(name: impl Into<String>, description: impl Into<String>, guess: Guess) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            guess,
        }
    }
}
