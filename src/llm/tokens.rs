//! Best-effort token estimate for providers whose usage numbers are not
//! consumed. Whitespace words undercount subword tokens, hence the multiplier.
//! Expect errors of tens of percent, more for CJK text without spaces.

pub const TOKEN_MULTIPLIER: f64 = 1.3;

pub fn estimate_tokens(parts: &[&str]) -> u64 {
    let words: usize = parts.iter().map(|p| p.split_whitespace().count()).sum();
    (words as f64 * TOKEN_MULTIPLIER).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_tokens() {
        // 3 + 2 + 5 = 10 words
        assert_eq!(estimate_tokens(&["you are helpful", "hi there", "hello how can I help"]), 13);
    }

    #[test]
    fn test_estimate_tokens_rounds() {
        // 1 word * 1.3 = 1.3
        assert_eq!(estimate_tokens(&["word"]), 1);
        // 2 words * 1.3 = 2.6
        assert_eq!(estimate_tokens(&["two words", ""]), 3);
    }

    #[test]
    fn test_estimate_tokens_empty() {
        assert_eq!(estimate_tokens(&[]), 0);
        assert_eq!(estimate_tokens(&["   \n\t "]), 0);
    }
}
