//! Relations on strings.

/// Returns `true` if `word` reads the same forwards and backwards.
///
/// The comparison is literal: case sensitive, no trimming, whitespace and punctuation count like
/// any other character. It works on `char`s, so a multi-codepoint grapheme such as `"e\u{301}"`
/// is compared codepoint by codepoint. The empty string and any single character are palindromes.
pub fn is_palindrome(word: &str) -> bool {
    word.chars().eq(word.chars().rev())
}

/// [`is_palindrome`] for any sequence with element equality.
pub fn is_palindrome_seq<T>(seq: &[T]) -> bool
where
    T: PartialEq,
{
    seq.iter().eq(seq.iter().rev())
}
