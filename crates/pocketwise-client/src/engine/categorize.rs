use std::sync::OnceLock;

use crate::engine::keywords::{EXPENSE_KEYWORDS, INCOME_KEYWORDS};
use crate::model::{Category, TransactionKind};

const WHOLE_WORD_POINTS: u32 = 10;
const SUBSTRING_POINTS: u32 = 5;

/// Score at which confidence reaches 100%.
const FULL_CONFIDENCE_SCORE: u32 = 20;

/// Minimum confidence for `categorize` to commit to a category.
const CONFIDENCE_FLOOR: u32 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMatch {
    pub category: Option<Category>,
    pub confidence: u32,
    pub matched_keywords: Vec<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorySuggestion {
    pub category: Category,
    pub confidence: u32,
}

/// Keyword matcher compiled once per kind from the static tables. Keywords
/// are stored pre-lowercased, so matching is a plain substring scan with a
/// boundary check, with no pattern compilation per call.
struct KeywordMatcher {
    entries: Vec<(Category, &'static [&'static str])>,
}

impl KeywordMatcher {
    fn for_kind(kind: TransactionKind) -> &'static Self {
        static INCOME: OnceLock<KeywordMatcher> = OnceLock::new();
        static EXPENSE: OnceLock<KeywordMatcher> = OnceLock::new();

        match kind {
            TransactionKind::Income => INCOME.get_or_init(|| Self {
                entries: INCOME_KEYWORDS
                    .iter()
                    .map(|(category, keywords)| (Category::Income(*category), *keywords))
                    .collect(),
            }),
            TransactionKind::Expense => EXPENSE.get_or_init(|| Self {
                entries: EXPENSE_KEYWORDS
                    .iter()
                    .map(|(category, keywords)| (Category::Expense(*category), *keywords))
                    .collect(),
            }),
        }
    }

    fn score_all(&self, normalized: &str) -> Vec<ScoredCategory> {
        self.entries
            .iter()
            .map(|(category, keywords)| {
                let mut score = 0;
                let mut matched = Vec::new();
                for keyword in *keywords {
                    match keyword_hit(normalized, keyword) {
                        Some(KeywordHit::WholeWord) => {
                            score += WHOLE_WORD_POINTS;
                            matched.push(*keyword);
                        }
                        Some(KeywordHit::Substring) => {
                            score += SUBSTRING_POINTS;
                            matched.push(*keyword);
                        }
                        None => {}
                    }
                }
                ScoredCategory {
                    category: *category,
                    score,
                    matched,
                }
            })
            .collect()
    }
}

struct ScoredCategory {
    category: Category,
    score: u32,
    matched: Vec<&'static str>,
}

enum KeywordHit {
    WholeWord,
    Substring,
}

/// Picks the best-scoring category for a free-text description, rejecting
/// matches below the confidence floor. Ties go to the category declared
/// first in the keyword table.
pub fn categorize(description: &str, kind: TransactionKind) -> CategoryMatch {
    let normalized = description.trim().to_lowercase();
    if normalized.is_empty() {
        return CategoryMatch {
            category: None,
            confidence: 0,
            matched_keywords: Vec::new(),
        };
    }

    let mut best: Option<ScoredCategory> = None;
    for scored in KeywordMatcher::for_kind(kind).score_all(&normalized) {
        let current_best = best.as_ref().map_or(0, |value| value.score);
        if scored.score > current_best {
            best = Some(scored);
        }
    }

    let Some(winner) = best else {
        return CategoryMatch {
            category: None,
            confidence: 0,
            matched_keywords: Vec::new(),
        };
    };

    let confidence = confidence_for(winner.score);
    if confidence < CONFIDENCE_FLOOR {
        return CategoryMatch {
            category: None,
            confidence: 0,
            matched_keywords: Vec::new(),
        };
    }

    CategoryMatch {
        category: Some(winner.category),
        confidence,
        matched_keywords: winner.matched,
    }
}

/// Up to three alternative categories ordered by descending confidence.
/// Unlike `categorize`, every category with any keyword hit qualifies.
pub fn suggest_categories(description: &str, kind: TransactionKind) -> Vec<CategorySuggestion> {
    let normalized = description.trim().to_lowercase();
    if normalized.is_empty() {
        return Vec::new();
    }

    let mut suggestions: Vec<CategorySuggestion> = KeywordMatcher::for_kind(kind)
        .score_all(&normalized)
        .into_iter()
        .filter(|scored| scored.score > 0)
        .map(|scored| CategorySuggestion {
            category: scored.category,
            confidence: confidence_for(scored.score),
        })
        .collect();

    suggestions.sort_by(|left, right| right.confidence.cmp(&left.confidence));
    suggestions.truncate(3);
    suggestions
}

fn confidence_for(score: u32) -> u32 {
    (score * 100 / FULL_CONFIDENCE_SCORE).min(100)
}

fn keyword_hit(normalized: &str, keyword: &str) -> Option<KeywordHit> {
    let mut found = false;
    for (index, _) in normalized.match_indices(keyword) {
        found = true;
        if is_word_bounded(normalized, index, keyword.len()) {
            return Some(KeywordHit::WholeWord);
        }
    }
    if found {
        return Some(KeywordHit::Substring);
    }
    None
}

fn is_word_bounded(haystack: &str, start: usize, len: usize) -> bool {
    let bytes = haystack.as_bytes();
    let before_ok = start == 0 || !bytes[start - 1].is_ascii_alphanumeric();
    let end = start + len;
    let after_ok = end == bytes.len() || !bytes[end].is_ascii_alphanumeric();
    before_ok && after_ok
}

#[cfg(test)]
mod tests {
    use crate::model::{Category, ExpenseCategory, IncomeCategory, TransactionKind};

    use super::{CONFIDENCE_FLOOR, categorize, suggest_categories};

    #[test]
    fn warteg_lunch_resolves_to_makanan_with_full_confidence() {
        let result = categorize("makan siang di warteg", TransactionKind::Expense);
        assert_eq!(
            result.category,
            Some(Category::Expense(ExpenseCategory::Makanan))
        );
        assert_eq!(result.confidence, 100);
        assert!(result.matched_keywords.contains(&"makan"));
        assert!(result.matched_keywords.contains(&"warteg"));
    }

    #[test]
    fn categorize_is_idempotent() {
        let first = categorize("bayar netflix bulanan", TransactionKind::Expense);
        let second = categorize("bayar netflix bulanan", TransactionKind::Expense);
        assert_eq!(first, second);
    }

    #[test]
    fn single_substring_match_is_below_the_floor() {
        // "streaming" appears only as part of a longer token, worth 5
        // points -> 25% confidence, under the 30% floor.
        let result = categorize("livestreaming", TransactionKind::Expense);
        assert!(result.confidence < CONFIDENCE_FLOOR);
        assert_eq!(result.category, None);
        assert_eq!(result.confidence, 0);
    }

    #[test]
    fn single_whole_word_match_clears_the_floor() {
        let result = categorize("parkir", TransactionKind::Expense);
        assert_eq!(
            result.category,
            Some(Category::Expense(ExpenseCategory::Transport))
        );
        assert_eq!(result.confidence, 50);
    }

    #[test]
    fn embedded_keyword_scores_as_substring_on_top_of_whole_word() {
        // "gojek" hits the whole-word "gojek" entry (10) and the embedded
        // "ojek" entry (5): 15 points -> 75% confidence.
        let result = categorize("gojek", TransactionKind::Expense);
        assert_eq!(
            result.category,
            Some(Category::Expense(ExpenseCategory::Transport))
        );
        assert_eq!(result.confidence, 75);
    }

    #[test]
    fn empty_description_matches_nothing() {
        let result = categorize("   ", TransactionKind::Expense);
        assert_eq!(result.category, None);
        assert_eq!(result.confidence, 0);
        assert!(suggest_categories("", TransactionKind::Expense).is_empty());
    }

    #[test]
    fn income_descriptions_use_the_income_vocabulary() {
        let result = categorize("gaji freelance project", TransactionKind::Income);
        assert_eq!(
            result.category,
            Some(Category::Income(IncomeCategory::KerjaSampingan))
        );
        assert_eq!(result.confidence, 100);
    }

    #[test]
    fn suggestions_include_low_scores_and_cap_at_three() {
        // "hadiah" scores for both expense Lainnya and nothing else in the
        // expense table; suggestions have no confidence floor.
        let suggestions = suggest_categories("hadiah", TransactionKind::Expense);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(
            suggestions[0].category,
            Category::Expense(ExpenseCategory::Lainnya)
        );

        let crowded = suggest_categories(
            "makan di kampus sambil nonton film dan beli pulsa",
            TransactionKind::Expense,
        );
        assert!(crowded.len() <= 3);
        assert!(!crowded.is_empty());
        for pair in crowded.windows(2) {
            assert!(pair[0].confidence >= pair[1].confidence);
        }
    }

    #[test]
    fn multi_word_keywords_match_across_spaces() {
        let result = categorize("isi bensin di spbu", TransactionKind::Expense);
        assert_eq!(
            result.category,
            Some(Category::Expense(ExpenseCategory::Transport))
        );
        assert_eq!(result.confidence, 100);
    }
}
