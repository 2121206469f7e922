//! Keyword-lexicon sentiment for headlines.
//!
//! A literal counting heuristic, not NLP: lowercase the headline, split on
//! whitespace, add one per positive token and subtract one per negative
//! token, then map the sign of the score to a label. Pure and deterministic.

use crate::core::Sentiment;

/// Tokens that pull a headline positive.
pub const POSITIVE_WORDS: &[&str] = &[
    "surge", "surges", "soar", "soars", "rally", "rallies", "gain", "gains", "jump", "jumps",
    "rise", "rises", "climb", "climbs", "beat", "beats", "record", "profit", "profits", "growth",
    "strong", "bullish", "boom", "up", "higher", "win", "wins", "recovery", "upbeat",
];

/// Tokens that pull a headline negative.
pub const NEGATIVE_WORDS: &[&str] = &[
    "plunge", "plunges", "tumble", "tumbles", "slump", "slumps", "drop", "drops", "fall", "falls",
    "sink", "sinks", "crash", "crashes", "loss", "losses", "miss", "misses", "cut", "cuts", "weak",
    "bearish", "fear", "fears", "down", "lower", "recession", "layoffs", "selloff",
];

/// Scores a headline by exact token match against the two lexicons.
///
/// Matching is case-insensitive but token-exact: "surge" matches the word
/// "surge", not "upsurge", and a token glued to punctuation ("surge,") does
/// not match at all. A headline with no matching tokens, or with matches
/// that cancel out, is neutral.
#[must_use]
pub fn classify(headline: &str) -> Sentiment {
    let lowered = headline.to_lowercase();
    let mut score = 0i32;

    for token in lowered.split_whitespace() {
        if POSITIVE_WORDS.contains(&token) {
            score += 1;
        } else if NEGATIVE_WORDS.contains(&token) {
            score -= 1;
        }
    }

    match score.cmp(&0) {
        std::cmp::Ordering::Greater => Sentiment::Positive,
        std::cmp::Ordering::Less => Sentiment::Negative,
        std::cmp::Ordering::Equal => Sentiment::Neutral,
    }
}
