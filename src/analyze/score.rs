use super::{jitter::jitter, scan_text, MAX_SCORE, MIN_SCORE};
use crate::types::keywords::{KeywordTables, Weight};

pub const BASE_SCORE: i32 = 50;
pub const SHORT_TEXT_CHARS: usize = 10;
pub const SHORT_TEXT_PENALTY: i32 = 6;

/// Heuristic eco-score in `0..=100`.
pub fn score(tables: &KeywordTables, name: &str, description: &str) -> u8 {
    let clamped = raw_score(tables, name, description).clamp(MIN_SCORE, MAX_SCORE);
    // clamped into 0..=100
    clamped as u8
}

/// Score before clamping: base, keyword bonus, short-text penalty and jitter.
pub fn raw_score(tables: &KeywordTables, name: &str, description: &str) -> i32 {
    let text = scan_text(name, description);
    let bonus = keyword_bonus(tables, &text);
    let penalty = if text.chars().count() < SHORT_TEXT_CHARS {
        SHORT_TEXT_PENALTY
    } else {
        0
    };
    let offset = jitter(&text);
    tracing::debug!(bonus, penalty, jitter = offset, "scored product text");
    BASE_SCORE + bonus - penalty + offset
}

/// Sum of matched positive weights minus matched negative weights.
pub fn keyword_bonus(tables: &KeywordTables, text: &str) -> i32 {
    let positive = tables
        .positive
        .matches(text)
        .inspect(|keyword| {
            tracing::debug!(phrase = %keyword.phrase, weight = keyword.weight, "positive match")
        })
        .map(|keyword| to_signed(keyword.weight))
        .sum::<i32>();
    let negative = tables
        .negative
        .matches(text)
        .inspect(|keyword| {
            tracing::debug!(phrase = %keyword.phrase, weight = keyword.weight, "negative match")
        })
        .map(|keyword| to_signed(keyword.weight))
        .sum::<i32>();
    positive - negative
}

fn to_signed(weight: Weight) -> i32 {
    i32::try_from(weight).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::jitter::jitter;

    fn tables() -> KeywordTables {
        KeywordTables::builtin()
    }

    #[test]
    fn score_is_always_within_bounds() {
        let cases = [
            ("", ""),
            ("x", ""),
            (
                "Certified organic recycled bamboo",
                "biodegradable compostable solar glass natural fair trade plastic-free low-energy",
            ),
            (
                "Disposable polyester",
                "single-use non-recyclable toxic chemical petroleum nylon microfiber packed in plastic",
            ),
        ];
        for (name, description) in cases {
            let value = score(&tables(), name, description);
            assert!(value <= 100, "{name:?} scored {value}");
        }
    }

    #[test]
    fn saturated_inputs_clamp_to_edges() {
        let high = score(
            &tables(),
            "Certified organic recycled bamboo",
            "biodegradable compostable solar glass natural fair trade",
        );
        assert_eq!(high, 100);
        let low = score(
            &tables(),
            "Disposable polyester",
            "single-use toxic chemical petroleum nylon microfiber",
        );
        assert_eq!(low, 0);
    }

    #[test]
    fn score_is_deterministic() {
        let first = score(&tables(), "Steel bottle", "reusable, ships in a box");
        let second = score(&tables(), "Steel bottle", "reusable, ships in a box");
        assert_eq!(first, second);
    }

    #[test]
    fn positive_phrase_adds_exactly_its_weight_before_jitter() {
        let neutral = "a sturdy everyday item";
        let with_bamboo = "a sturdy everyday item bamboo";
        let before = raw_score(&tables(), "Brush", neutral) - jitter(&scan_text("Brush", neutral));
        let after =
            raw_score(&tables(), "Brush", with_bamboo) - jitter(&scan_text("Brush", with_bamboo));
        assert_eq!(after - before, 8);
    }

    #[test]
    fn overlapping_phrases_contribute_independently() {
        let text = scan_text("Organic cotton bag", "plastic-free, compostable");
        // organic + compostable + plastic-free - plastic
        assert_eq!(keyword_bonus(&tables(), &text), 10 + 12 + 10 - 12);
        let raw = raw_score(&tables(), "Organic cotton bag", "plastic-free, compostable");
        assert_eq!(raw, BASE_SCORE + 20 + jitter(&text));
        assert!((65..=75).contains(&score(
            &tables(),
            "Organic cotton bag",
            "plastic-free, compostable"
        )));
    }

    #[test]
    fn empty_input_gets_short_text_penalty() {
        let expected = (BASE_SCORE - SHORT_TEXT_PENALTY + jitter(" ")).clamp(0, 100);
        assert_eq!(i32::from(score(&tables(), "", "")), expected);
    }

    #[test]
    fn short_text_penalty_applies_below_ten_chars_only() {
        // "mug cup" is 7 chars; the padded variant is 13
        let short = raw_score(&tables(), "mug", "cup") - jitter(&scan_text("mug", "cup"));
        let padded =
            raw_score(&tables(), "mug", "cup plain") - jitter(&scan_text("mug", "cup plain"));
        assert_eq!(short, BASE_SCORE - SHORT_TEXT_PENALTY);
        assert_eq!(padded, BASE_SCORE);
        assert!(short <= padded);
    }

    #[test]
    fn short_text_threshold_counts_chars_not_bytes() {
        // 9 chars, 17 bytes
        let text = scan_text("ééééé", "ééé");
        assert_eq!(text.chars().count(), 9);
        assert_eq!(text.len(), 17);
        let without_jitter = raw_score(&tables(), "ééééé", "ééé") - jitter(&text);
        assert_eq!(without_jitter, BASE_SCORE - SHORT_TEXT_PENALTY);
    }

    #[test]
    fn matching_ignores_case() {
        let text = scan_text("GLASS", "Bamboo LID");
        assert_eq!(keyword_bonus(&tables(), &text), 6 + 8);
    }
}
