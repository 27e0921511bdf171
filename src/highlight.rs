use std::collections::HashSet;

/// A run of characters from the summary: either a skill token to emphasize
/// or pass-through text (non-matching words, whitespace, punctuation).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub emphasized: bool,
}

/// Word characters, matching the `\w` class of the word-boundary split.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Splits `summary` into maximal runs of word and non-word characters and
/// marks each word whose lowercase form appears in `skills`. Every byte of
/// the input is carried through, so concatenating the segment texts
/// reproduces `summary` exactly. Pure and lazy: no state is touched, and the
/// same inputs always yield the same segments.
pub fn highlight_keywords<'a, S: AsRef<str>>(
    summary: &'a str,
    skills: &[S],
) -> impl Iterator<Item = Segment<'a>> + 'a {
    let skills: HashSet<String> = skills
        .iter()
        .map(|s| s.as_ref().to_lowercase())
        .collect();

    Tokens { rest: summary }.map(move |(text, is_word)| Segment {
        text,
        emphasized: is_word && skills.contains(&text.to_lowercase()),
    })
}

/// Iterator over `(run, is_word)` pairs covering the whole input.
struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = (&'a str, bool);

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;
        let is_word = is_word_char(first);

        let end = self
            .rest
            .char_indices()
            .find(|&(_, c)| is_word_char(c) != is_word)
            .map(|(i, _)| i)
            .unwrap_or(self.rest.len());

        let (token, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some((token, is_word))
    }
}
