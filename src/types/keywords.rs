use serde::Serialize;

pub type Weight = u32;

const POSITIVE: [(&str, Weight); 14] = [
    ("recycled", 12),
    ("recyclable", 10),
    ("biodegradable", 14),
    ("organic", 10),
    ("compostable", 12),
    ("certified organic", 15),
    ("fair trade", 8),
    ("no plastic", 8),
    ("plastic-free", 10),
    ("low-energy", 9),
    ("solar", 10),
    ("natural", 6),
    ("glass", 6),
    ("bamboo", 8),
];

const NEGATIVE: [(&str, Weight); 11] = [
    ("plastic", 12),
    ("polyester", 11),
    ("disposable", 14),
    ("single-use", 14),
    ("non-recyclable", 16),
    ("toxic", 15),
    ("chemical", 10),
    ("microfiber", 10),
    ("nylon", 9),
    ("packed in plastic", 12),
    ("petroleum", 13),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Keyword {
    pub phrase: String,
    pub weight: Weight,
}

/// Ordered phrase→weight table. Definition order is significant: the
/// explainer reports matches in this order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct KeywordTable {
    entries: Vec<Keyword>,
}

impl KeywordTable {
    fn from_pairs(pairs: &[(&str, Weight)]) -> Self {
        Self {
            entries: pairs
                .iter()
                .map(|(phrase, weight)| Keyword {
                    phrase: (*phrase).to_string(),
                    weight: *weight,
                })
                .collect(),
        }
    }

    pub fn entries(&self) -> &[Keyword] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every entry whose phrase occurs in `text`. `text` must already be lowercase.
    pub fn matches<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a Keyword> + 'a {
        self.entries
            .iter()
            .filter(move |keyword| text.contains(keyword.phrase.as_str()))
    }

    fn extend(&mut self, extra: impl IntoIterator<Item = Keyword>) {
        for keyword in extra {
            if self
                .entries
                .iter()
                .any(|existing| existing.phrase == keyword.phrase)
            {
                tracing::warn!(phrase = %keyword.phrase, "duplicate keyword ignored");
                continue;
            }
            self.entries.push(keyword);
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct KeywordTables {
    pub positive: KeywordTable,
    pub negative: KeywordTable,
}

impl KeywordTables {
    pub fn builtin() -> Self {
        Self {
            positive: KeywordTable::from_pairs(&POSITIVE),
            negative: KeywordTable::from_pairs(&NEGATIVE),
        }
    }

    /// Built-in tables with configured phrases appended.
    pub fn with_extra(positive: Vec<Keyword>, negative: Vec<Keyword>) -> Self {
        let mut tables = Self::builtin();
        tables.positive.extend(positive);
        tables.negative.extend(negative);
        tables
    }
}

impl Default for KeywordTables {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_keep_definition_order() {
        let tables = KeywordTables::builtin();
        assert_eq!(tables.positive.len(), 14);
        assert_eq!(tables.negative.len(), 11);
        assert_eq!(tables.positive.entries()[0].phrase, "recycled");
        assert_eq!(tables.negative.entries()[10].phrase, "petroleum");
    }

    #[test]
    fn matches_overlapping_phrases_independently() {
        let tables = KeywordTables::builtin();
        let text = "packed in plastic, non-recyclable";
        let negative = tables
            .negative
            .matches(text)
            .map(|keyword| keyword.phrase.as_str())
            .collect::<Vec<_>>();
        assert_eq!(negative, ["plastic", "non-recyclable", "packed in plastic"]);
        let positive = tables
            .positive
            .matches(text)
            .map(|keyword| keyword.phrase.as_str())
            .collect::<Vec<_>>();
        assert_eq!(positive, ["recyclable"]);
    }

    #[test]
    fn with_extra_appends_and_skips_duplicates() {
        let tables = KeywordTables::with_extra(
            vec![
                Keyword {
                    phrase: "hemp".to_string(),
                    weight: 9,
                },
                Keyword {
                    phrase: "organic".to_string(),
                    weight: 99,
                },
            ],
            Vec::new(),
        );
        assert_eq!(tables.positive.len(), 15);
        assert_eq!(tables.positive.entries()[14].phrase, "hemp");
        let organic = tables
            .positive
            .entries()
            .iter()
            .find(|keyword| keyword.phrase == "organic")
            .map(|keyword| keyword.weight);
        assert_eq!(organic, Some(10));
    }
}
