pub mod repl;

use crate::analyze::accuracy::Accuracy;
use crate::analyze::banner::Banner;
use crate::analyze::Scorer;
use crate::error::{EcoError, Result};
use crate::types::input::{Guess, ProductInput};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RevealState {
    pub analyzed: bool,
    pub accuracy_shown: bool,
    pub explanation_shown: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Idle,
    Analyzed,
    AccuracyShown,
    ExplanationShown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Save(ProductInput),
    Analyze,
    ShowAccuracy,
    ShowExplanation,
    Reset,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::Save(_) => "save",
            Action::Analyze => "analyze",
            Action::ShowAccuracy => "show_accuracy",
            Action::ShowExplanation => "show_explanation",
            Action::Reset => "reset",
        }
    }
}

/// Everything one user session holds. Transitions never mutate in place:
/// `apply` returns the next session and leaves `self` untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    input: Option<ProductInput>,
    last_score: Option<u8>,
    reveal: RevealState,
    default_guess: Guess,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh session whose unsaved form guess is `default_guess`.
    pub fn with_default_guess(default_guess: Guess) -> Self {
        Self {
            default_guess,
            ..Self::default()
        }
    }

    pub fn default_guess(&self) -> Guess {
        self.default_guess
    }

    pub fn input(&self) -> Option<&ProductInput> {
        self.input.as_ref()
    }

    pub fn last_score(&self) -> Option<u8> {
        self.last_score
    }

    pub fn reveal(&self) -> RevealState {
        self.reveal
    }

    pub fn stage(&self) -> Stage {
        match self.reveal {
            RevealState {
                analyzed: false, ..
            } => Stage::Idle,
            RevealState {
                explanation_shown: true,
                ..
            } => Stage::ExplanationShown,
            RevealState {
                accuracy_shown: true,
                ..
            } => Stage::AccuracyShown,
            _ => Stage::Analyzed,
        }
    }

    pub fn apply(&self, action: Action, scorer: &Scorer) -> Result<Session> {
        let label = action.label();
        let next = match action {
            Action::Save(input) => Session {
                input: Some(input),
                ..self.clone()
            },
            Action::Analyze => {
                let (name, description) = self
                    .input
                    .as_ref()
                    .map(|input| (input.name.as_str(), input.description.as_str()))
                    .unwrap_or(("", ""));
                let score = scorer.score(name, description);
                Session {
                    last_score: Some(score),
                    reveal: RevealState {
                        analyzed: true,
                        accuracy_shown: false,
                        explanation_shown: false,
                    },
                    ..self.clone()
                }
            }
            Action::ShowAccuracy => {
                if !self.reveal.analyzed {
                    return Err(self.unavailable(label, "press ANALYZE first"));
                }
                Session {
                    reveal: RevealState {
                        accuracy_shown: true,
                        ..self.reveal
                    },
                    ..self.clone()
                }
            }
            Action::ShowExplanation => {
                if !self.reveal.accuracy_shown {
                    return Err(self.unavailable(label, "show accuracy first"));
                }
                Session {
                    reveal: RevealState {
                        explanation_shown: true,
                        ..self.reveal
                    },
                    ..self.clone()
                }
            }
            Action::Reset => Session::with_default_guess(self.default_guess),
        };
        tracing::info!(
            action = label,
            from = ?self.stage(),
            to = ?next.stage(),
            score = ?next.last_score,
            "session transition"
        );
        Ok(next)
    }

    fn unavailable(&self, label: &str, hint: &str) -> EcoError {
        tracing::warn!(action = label, stage = ?self.stage(), "action rejected");
        EcoError::ActionUnavailable(format!("{label}: {hint}"))
    }

    /// Stored score with its qualitative banner, once analyzed.
    pub fn banner(&self) -> Option<Banner> {
        self.analyzed_score().map(Banner::for_score)
    }

    /// Current saved guess against the stored score, once revealed.
    pub fn accuracy(&self) -> Option<Accuracy> {
        if !self.reveal.accuracy_shown {
            return None;
        }
        let guess = self
            .input
            .as_ref()
            .map(|input| input.guess)
            .unwrap_or(self.default_guess);
        self.analyzed_score()
            .map(|score| Accuracy::compare(guess, score))
    }

    /// Explanation for the current saved text and the stored score, once revealed.
    pub fn explanation(&self, scorer: &Scorer) -> Option<String> {
        if !self.reveal.explanation_shown {
            return None;
        }
        let (name, description) = self
            .input
            .as_ref()
            .map(|input| (input.name.as_str(), input.description.as_str()))
            .unwrap_or(("", ""));
        self.analyzed_score()
            .map(|score| scorer.explain(name, description, score))
    }

    fn analyzed_score(&self) -> Option<u8> {
        if self.reveal.analyzed {
            self.last_score
        } else {
            None
        }
    }
}
