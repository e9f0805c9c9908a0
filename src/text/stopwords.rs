use std::collections::HashSet;

const ENGLISH: &str = include_str!("../../resources/stopwords_en.txt");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
}

/// Function-word list for `language`, all lowercase.
pub fn stopwords(language: Language) -> HashSet<String> {
    let source = match language {
        Language::English => ENGLISH,
    };
    source.split_whitespace().map(str::to_string).collect()
}

/// True if `token` is non-empty and made only of ASCII punctuation.
pub fn is_punctuation(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_punctuation())
}
