//! Fixed indicator tables. Every lookup against these lists is a plain
//! substring test on the raw text, not a token match, so an entry also hits
//! when it sits inside a longer word.

// ---------------------------------------------------------------------------
// Style
// ---------------------------------------------------------------------------

/// Professional-register markers used in news copy.
pub static JOURNALIST_INDICATORS: &[&str] = &[
    "يقع",
    "تقع",
    "يُعد",
    "تُعد",
    "يشير",
    "تشير",
    "وفقاً",
    "حيث",
    "إذ",
    "بينما",
    "من جهة",
    "من ناحية",
    "تاريخياً",
    "حالياً",
    "مستقبلاً",
    "المصادر",
    "التقارير",
    "الدراسات",
];

/// First-person markers. Each one found costs ten points of objectivity.
pub static PERSONAL_PRONOUNS: &[&str] = &["أنا", "نحن", "أشعر", "أرى", "أعتقد"];

pub static FORMAL_WORDS: &[&str] = &["يُعد", "تُعتبر", "يشير", "وفقاً", "حيث", "إذ"];

pub static INFORMAL_WORDS: &[&str] = &["رائع", "جميل", "مذهل", "خيالي"];

// ---------------------------------------------------------------------------
// Content
// ---------------------------------------------------------------------------

/// Topic label plus the keywords that mark it as covered. Declaration order
/// is the reporting order.
pub static TOPIC_KEYWORDS: &[(&str, &[&str])] = &[
    ("history", &["تاريخ", "قديم", "عصر", "حقبة", "قرن"]),
    ("culture", &["ثقافة", "تراث", "عمارة", "فن"]),
    ("tourism", &["سياحة", "زوار", "زيارة", "جولة"]),
    ("economy", &["اقتصاد", "استثمار", "تنمية", "وظائف"]),
];

pub static SOURCE_WORDS: &[&str] = &["المصادر", "المرجع", "الدراسة", "التقرير"];

pub static QUOTE_CHARS: &[char] = &['"', '\''];

/// Characters trimmed from both ends of a token before frequency counting.
pub static TOKEN_PUNCTUATION: &[char] = &['.', ',', '!', '?', '؛', ':'];

/// Number of lexicon entries that occur anywhere in `text`.
pub fn count_present(text: &str, entries: &[&str]) -> usize {
    entries.iter().filter(|entry| text.contains(*entry)).count()
}

pub fn any_present(text: &str, entries: &[&str]) -> bool {
    entries.iter().any(|entry| text.contains(entry))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_inside_longer_words() {
        // "ويُعد" carries the indicator "يُعد" as a substring.
        assert_eq!(count_present("ويُعد المعلم", JOURNALIST_INDICATORS), 1);
    }

    #[test]
    fn counts_distinct_entries_not_occurrences() {
        let text = "حيث حيث حيث";
        assert_eq!(count_present(text, JOURNALIST_INDICATORS), 1);
    }

    #[test]
    fn journalist_table_has_expected_size() {
        assert!(JOURNALIST_INDICATORS.len() >= 17);
        assert_eq!(PERSONAL_PRONOUNS.len(), 5);
        assert_eq!(FORMAL_WORDS.len(), 6);
        assert_eq!(INFORMAL_WORDS.len(), 4);
        assert_eq!(SOURCE_WORDS.len(), 4);
    }
}
