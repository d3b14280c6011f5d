use crate::analyze::banner::BannerLevel;
use crate::render::View;

pub const TITLE: &str = "EcoScanner 9000";
pub const SUBTITLE: &str = "Quick terminal inspector for eco-estimates";
pub const IDLE_HINT: &str = "Fill product details and press ANALYZE to get a quick eco-score.";
const RULE: &str = "---";

pub fn to_text(view: &View) -> String {
    let mut output = String::new();
    output.push_str(&format!("{TITLE}\n{SUBTITLE}\n{RULE}\n"));

    let (score, banner) = match (view.score, view.banner) {
        (Some(score), Some(banner)) => (score, banner),
        _ => {
            output.push_str(&format!("[info] {IDLE_HINT}\n"));
            return output;
        }
    };

    output.push_str("Result\n");
    output.push_str(&format!("Eco-score: {score}/100\n"));
    let tag = match banner.level {
        BannerLevel::Success => "success",
        BannerLevel::Info => "info",
        BannerLevel::Warning => "warning",
    };
    output.push_str(&format!("[{tag}] {}\n", banner.message));

    if let Some(accuracy) = &view.accuracy {
        output.push_str(&format!(
            "Your guess: {}/100  —  Difference: {}\n",
            accuracy.guess, accuracy.diff
        ));
        output.push_str(&format!("[info] {}\n", accuracy.message()));
    }

    if let Some(explanation) = &view.explanation {
        output.push_str("AI explanation:\n");
        output.push_str(explanation);
        output.push('\n');
    }

    output
}
