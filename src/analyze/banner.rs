use serde::Serialize;

pub const SUCCESS_THRESHOLD: u8 = 75;
pub const INFO_THRESHOLD: u8 = 45;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerLevel {
    Success,
    Info,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Banner {
    pub level: BannerLevel,
    pub message: &'static str,
}

impl Banner {
    pub fn for_score(score: u8) -> Self {
        if score >= SUCCESS_THRESHOLD {
            Self {
                level: BannerLevel::Success,
                message: "This product looks quite eco-friendly.",
            }
        } else if score >= INFO_THRESHOLD {
            Self {
                level: BannerLevel::Info,
                message: "This product has a mix of eco and non-eco signals.",
            }
        } else {
            Self {
                level: BannerLevel::Warning,
                message: "This product likely has several non-eco characteristics.",
            }
        }
    }
}
