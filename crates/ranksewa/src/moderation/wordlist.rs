use std::collections::HashSet;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use tracing::info;

const EMBEDDED_WORDLIST: &str = include_str!("../../data/profanity_wordlist.txt");
const CENSOR_MASK: &str = "****";

/// Word-list lookup used by the moderation checks.
///
/// Implementations are loaded once and shared read-only between requests.
pub trait ProfanityOracle: Send + Sync {
    fn contains_profanity(&self, text: &str) -> bool;

    /// Returns `text` with every profane word masked. Clean text comes back unchanged.
    fn censor(&self, text: &str) -> String;
}

#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    #[error("failed to open word list {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to read word list: {0}")]
    Read(#[from] std::io::Error),
    #[error("word list contains no words")]
    Empty,
}

/// Case-insensitive set of banned words.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    /// The built-in English list.
    pub fn embedded() -> Self {
        Self::from_words(list_entries(EMBEDDED_WORDLIST.lines()))
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| normalize_token(word.as_ref().trim()))
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }

    /// Reads one word per line. Blank lines and `#` comments are skipped.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, WordListError> {
        let lines = BufReader::new(reader)
            .lines()
            .collect::<Result<Vec<_>, _>>()?;
        let list = Self::from_words(list_entries(lines.iter().map(String::as_str)));
        if list.is_empty() {
            return Err(WordListError::Empty);
        }
        Ok(list)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, WordListError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| WordListError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let list = Self::from_reader(file)?;
        info!(path = %path.display(), words = list.len(), "loaded profanity word list");
        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn is_banned(&self, token: &str) -> bool {
        self.words.contains(&normalize_token(token))
    }
}

impl ProfanityOracle for WordList {
    fn contains_profanity(&self, text: &str) -> bool {
        word_spans(text).any(|(start, end)| self.is_banned(&text[start..end]))
    }

    fn censor(&self, text: &str) -> String {
        let mut censored = String::with_capacity(text.len());
        let mut cursor = 0;

        for (start, end) in word_spans(text) {
            if self.is_banned(&text[start..end]) {
                censored.push_str(&text[cursor..start]);
                censored.push_str(CENSOR_MASK);
                cursor = end;
            }
        }

        censored.push_str(&text[cursor..]);
        censored
    }
}

fn list_entries<'a, I>(lines: I) -> impl Iterator<Item = &'a str>
where
    I: Iterator<Item = &'a str>,
{
    lines
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '@' || c == '$' || c == '!'
}

/// Byte ranges of the word tokens in `text`.
///
/// `!` only counts inside a word, so `darn!` yields `darn` while `sh!t` stays whole.
fn word_spans(text: &str) -> impl Iterator<Item = (usize, usize)> + '_ {
    raw_spans(text).filter_map(move |(start, end)| {
        let token = &text[start..end];
        let trimmed = token.trim_matches('!');
        if trimmed.is_empty() {
            return None;
        }
        let lead = token.len() - token.trim_start_matches('!').len();
        Some((start + lead, start + lead + trimmed.len()))
    })
}

fn raw_spans(text: &str) -> impl Iterator<Item = (usize, usize)> + '_ {
    let mut chars = text.char_indices().peekable();

    std::iter::from_fn(move || {
        while let Some(&(_, c)) = chars.peek() {
            if is_word_char(c) {
                break;
            }
            chars.next();
        }

        let (start, _) = *chars.peek()?;
        let mut end = start;
        while let Some(&(index, c)) = chars.peek() {
            if !is_word_char(c) {
                break;
            }
            end = index + c.len_utf8();
            chars.next();
        }

        Some((start, end))
    })
}

fn normalize_token(token: &str) -> String {
    token
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            '0' => 'o',
            '1' => 'i',
            '3' => 'e',
            '4' => 'a',
            '5' => 's',
            '7' => 't',
            '@' => 'a',
            '$' => 's',
            '!' => 'i',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list() -> WordList {
        WordList::from_words(["darn", "heck"])
    }

    #[test]
    fn embedded_list_is_populated() {
        let list = WordList::embedded();
        assert!(!list.is_empty());
        assert!(list.contains_profanity("This doctor is a fucking fraud!"));
    }

    #[test]
    fn matching_is_case_insensitive_and_whole_word() {
        let list = list();
        assert!(list.contains_profanity("What the HECK happened"));
        assert!(list.contains_profanity("darn!"));
        assert!(!list.contains_profanity("Checked in on time"));
        assert!(!list.contains_profanity("darned socks"));
    }

    #[test]
    fn matching_undoes_character_substitutions() {
        let list = list();
        assert!(list.contains_profanity("what the h3ck"));
        assert!(list.contains_profanity("d@rn it"));
    }

    #[test]
    fn exclamation_mark_inside_a_word_reads_as_i() {
        let list = WordList::embedded();
        assert!(list.contains_profanity("what a sh!t doctor"));
        assert_eq!(list.censor("what a sh!t doctor"), "what a **** doctor");
    }

    #[test]
    fn exclamation_marks_around_a_word_are_punctuation() {
        let list = list();
        assert!(list.contains_profanity("DARN!!!"));
        assert!(list.contains_profanity("!!heck"));
        assert_eq!(list.censor("Oh darn!! Again!"), "Oh ****!! Again!");
        assert!(!list.contains_profanity("!!! ! !!"));
    }

    #[test]
    fn censor_masks_only_banned_words() {
        let list = list();
        assert_eq!(list.censor("Heck, the wait was darn long."), "****, the wait was **** long.");
    }

    #[test]
    fn censor_leaves_clean_text_unchanged() {
        let list = WordList::embedded();
        let text = "Great doctor! Very professional and caring. Waited 20 minutes.";
        assert_eq!(list.censor(text), text);
    }

    #[test]
    fn censor_handles_multibyte_text() {
        let list = list();
        assert_eq!(list.censor("डाक्टर heck राम्रो"), "डाक्टर **** राम्रो");
    }

    #[test]
    fn reader_skips_comments_and_blank_lines() {
        let source = "# custom list\n\nblimey\n  crikey  \n";
        let list = WordList::from_reader(source.as_bytes()).expect("word list parses");
        assert_eq!(list.len(), 2);
        assert!(list.contains_profanity("Crikey that hurt"));
    }

    #[test]
    fn reader_rejects_empty_lists() {
        match WordList::from_reader("# nothing here\n".as_bytes()) {
            Err(WordListError::Empty) => {}
            other => panic!("expected empty word list error, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_reports_path() {
        match WordList::from_path("/nonexistent/ranksewa/words.txt") {
            Err(WordListError::Open { path, .. }) => {
                assert!(path.ends_with("words.txt"));
            }
            other => panic!("expected open error, got {other:?}"),
        }
    }
}
