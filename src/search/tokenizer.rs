use regex::Regex;
use std::sync::LazyLock;

// Whitespace is the ASCII set only; other spacing characters such as NBSP or
// vertical tab are dropped like punctuation.
static NON_ALPHABETIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z\t\n\x0C\r ]").expect("static pattern"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\t\n\x0C\r ]+").expect("static pattern"));

/// Splits raw text into lowercase alphabetic tokens, in order of appearance.
///
/// Characters outside `[a-zA-Z]` and whitespace are dropped without leaving a
/// separator behind, so `"don't"` yields `"dont"`. Empty segments produced by
/// leading, trailing or repeated whitespace are never returned.
pub fn tokenize(text: &str) -> Vec<String> {
    let alphabetic = NON_ALPHABETIC.replace_all(text, "");
    let lowered = alphabetic.to_ascii_lowercase();

    WHITESPACE
        .split(&lowered)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}
