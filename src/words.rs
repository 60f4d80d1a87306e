//! Word lists used to build story phrases.

use rand::Rng;
use serde_json::{Map, Value};

use crate::fetch::ResourceFetcher;
use crate::{Error, Result};

/// An ordered, normalized list of capitalized words.
///
/// Lists are built once at load time and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Build a list, capitalizing every entry.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| capitalize(w.as_ref())).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Pick a uniformly random entry; `None` only when the list is empty.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        if self.words.is_empty() {
            return None;
        }
        let idx = rng.gen_range(0..self.words.len());
        self.get(idx)
    }
}

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            // lower-case the tail as a whole so final-sigma rules apply
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

/// Decode `{ "<key>": ["word", ...] }` into a normalized list.
pub fn parse_word_list(bytes: &[u8], key: &str) -> Result<WordList> {
    let mut object: Map<String, Value> = serde_json::from_slice(bytes)
        .map_err(|e| Error::DecodeError(format!("expected a JSON object: {}", e)))?;

    let field = object
        .remove(key)
        .ok_or_else(|| Error::DecodeError(format!("missing field '{}'", key)))?;

    let words: Vec<String> = serde_json::from_value(field)
        .map_err(|e| Error::DecodeError(format!("field '{}' is not a list of strings: {}", key, e)))?;

    Ok(WordList::new(words))
}

/// Fetch `location` and extract the word array stored under `key`.
pub async fn load_word_list<F>(fetcher: &F, location: &str, key: &str) -> Result<WordList>
where
    F: ResourceFetcher,
{
    let bytes = fetcher.fetch(location).await?;
    parse_word_list(&bytes, key).map_err(|e| match e {
        Error::DecodeError(msg) => Error::DecodeError(format!("{}: {}", location, msg)),
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn capitalize_normalizes_case() {
        assert_eq!(capitalize("happy"), "Happy");
        assert_eq!(capitalize("JOYFUL"), "Joyful");
        assert_eq!(capitalize("mIxEd"), "Mixed");
        assert_eq!(capitalize("x"), "X");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("éLAN"), "Élan");
    }

    #[test]
    fn capitalize_applies_word_final_sigma() {
        assert_eq!(capitalize("ΟΔΟΣ"), "Οδος");
        assert_eq!(capitalize("σΟΦΙΑ"), "Σοφια");
    }

    #[test]
    fn every_loaded_word_is_capitalized() {
        let list = parse_word_list(br#"{"adjectives": ["happy", "JOYFUL", "sAd"]}"#, "adjectives")
            .unwrap();
        let words: Vec<&str> = list.iter().collect();
        assert_eq!(words, vec!["Happy", "Joyful", "Sad"]);
        for w in list.iter() {
            let mut chars = w.chars();
            let first = chars.next().unwrap();
            assert!(first.is_uppercase());
            assert!(chars.all(|c| !c.is_uppercase()));
        }
    }

    #[test]
    fn other_fields_are_ignored() {
        let list =
            parse_word_list(br#"{"meta": 1, "nouns": ["river"]}"#, "nouns").unwrap();
        assert_eq!(list.get(0), Some("River"));
    }

    #[test]
    fn missing_key_is_decode_error() {
        let err = parse_word_list(br#"{"nouns": []}"#, "adjectives").unwrap_err();
        assert!(matches!(err, Error::DecodeError(_)));
    }

    #[test]
    fn non_string_entries_are_decode_error() {
        let err = parse_word_list(br#"{"nouns": ["river", 3]}"#, "nouns").unwrap_err();
        assert!(matches!(err, Error::DecodeError(_)));
    }

    #[test]
    fn non_object_is_decode_error() {
        assert!(matches!(
            parse_word_list(br#"["river"]"#, "nouns"),
            Err(Error::DecodeError(_))
        ));
        assert!(matches!(
            parse_word_list(b"not json", "nouns"),
            Err(Error::DecodeError(_))
        ));
    }

    #[test]
    fn choose_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let single = WordList::new(["only"]);
        for _ in 0..100 {
            assert_eq!(single.choose(&mut rng), Some("Only"));
        }

        let list = WordList::new(["a", "b", "c", "d", "e"]);
        let mut seen = [false; 5];
        for _ in 0..1_000 {
            let w = list.choose(&mut rng).unwrap();
            let idx = list.iter().position(|x| x == w).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s), "every index should be reachable");
    }

    #[test]
    fn choose_on_empty_list_is_none() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(WordList::default().choose(&mut rng), None);
    }
}
