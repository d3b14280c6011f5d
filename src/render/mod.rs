pub mod json;
pub mod text;

use crate::analyze::accuracy::Accuracy;
use crate::analyze::banner::Banner;
use crate::analyze::Scorer;
use crate::error::EcoError;
use crate::session::{RevealState, Session, Stage};
use crate::types::input::ProductInput;
use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Snapshot of everything the page shows for one session.
#[derive(Debug, Clone, Serialize)]
pub struct View {
    pub generated_at: String,
    pub stage: Stage,
    pub reveal: RevealState,
    pub input: Option<ProductInput>,
    pub score: Option<u8>,
    pub banner: Option<Banner>,
    pub accuracy: Option<Accuracy>,
    pub explanation: Option<String>,
}

impl View {
    pub fn of(session: &Session, scorer: &Scorer) -> Self {
        let banner = session.banner();
        Self {
            generated_at: Utc::now().to_rfc3339(),
            stage: session.stage(),
            reveal: session.reveal(),
            input: session.input().cloned(),
            score: banner.and(session.last_score()),
            banner,
            accuracy: session.accuracy(),
            explanation: session.explanation(scorer),
        }
    }
}

pub fn render(view: &View, format: OutputFormat) -> Result<String, EcoError> {
    match format {
        OutputFormat::Json => json::to_json(view).map_err(EcoError::Json),
        OutputFormat::Text => Ok(text::to_text(view)),
    }
}
