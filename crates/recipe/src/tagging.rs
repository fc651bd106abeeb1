//! Import-time course suggestion.
//!
//! Recipe records from older exports sometimes lack a `course`. The
//! [`CourseInferenceService`] guesses one from keywords in the recipe name. The
//! guess is only a suggestion applied while importing, never a rule the
//! planner relies on: an explicit course on the record always wins.

use grubmaster_shared::recipe::Course;

/// Course inference service
///
/// Matches whole lowercase words of the recipe name against keyword lists.
/// Returns `None` when nothing matches (conservative approach).
pub struct CourseInferenceService;

impl CourseInferenceService {
    const DESSERT: [&'static str; 11] = [
        "cobbler", "cake", "brownie", "brownies", "smores", "s'mores", "cookie", "cookies",
        "pudding", "crisp", "pie",
    ];

    const DRINK: [&'static str; 9] = [
        "cocoa", "lemonade", "coffee", "tea", "juice", "cider", "water", "punch", "milk",
    ];

    const SIDE: [&'static str; 6] = ["chips", "salad", "corn", "banana", "apple", "coleslaw"];

    pub fn suggest(name: &str) -> Option<Course> {
        let words: Vec<String> = name
            .to_lowercase()
            .split(|c: char| !(c.is_alphanumeric() || c == '\''))
            .filter(|w| !w.is_empty())
            .map(str::to_owned)
            .collect();

        if Self::is_dessert(&words) {
            return Some(Course::Dessert);
        }

        if Self::matches(&words, &Self::DRINK) {
            return Some(Course::Drink);
        }

        if Self::matches(&words, &Self::SIDE) {
            return Some(Course::Side);
        }

        None
    }

    /// "Pot pie" is a main dish, every other pie is dessert.
    fn is_dessert(words: &[String]) -> bool {
        words.iter().enumerate().any(|(pos, word)| {
            Self::DESSERT.contains(&word.as_str())
                && !(word == "pie" && pos > 0 && words[pos - 1] == "pot")
        })
    }

    fn matches(words: &[String], keywords: &[&str]) -> bool {
        words.iter().any(|word| keywords.contains(&word.as_str()))
    }
}
