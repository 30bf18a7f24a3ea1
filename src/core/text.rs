//! Word joining and character counting

/// Words joined by single spaces
pub fn join_words<S: AsRef<str>>(words: &[S]) -> String {
    words
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Number of occurrences of `needle` in `haystack`
pub fn count_char(haystack: &str, needle: char) -> usize {
    haystack.chars().filter(|&c| c == needle).count()
}
