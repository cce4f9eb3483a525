//! Musical key spellings
//!
//! Recognizes the ways a key can be typed into the search bar and
//! normalizes them to the canonical `{Root}{accidental}{quality}` form,
//! e.g. `C sharp minor`, `C#m` and `c♯min` all become `Csmin`.
//!
//! Matching is case-insensitive except for the single-letter qualities,
//! where `M` means major and `m` means minor.

use crate::error::Error;
use crate::words::Word;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Root {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl Root {
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Root::A),
            'B' => Some(Root::B),
            'C' => Some(Root::C),
            'D' => Some(Root::D),
            'E' => Some(Root::E),
            'F' => Some(Root::F),
            'G' => Some(Root::G),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Root::A => 'A',
            Root::B => 'B',
            Root::C => 'C',
            Root::D => 'D',
            Root::E => 'E',
            Root::F => 'F',
            Root::G => 'G',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accidental {
    Natural,
    Sharp,
    Flat,
}

/// Accidental spellings allowed directly after the root
const ACCIDENTAL_SPELLINGS: [(&str, Accidental); 6] = [
    ("sharp", Accidental::Sharp),
    ("flat", Accidental::Flat),
    ("#", Accidental::Sharp),
    ("♯", Accidental::Sharp),
    ("b", Accidental::Flat),
    ("♭", Accidental::Flat),
];

impl Accidental {
    /// Word forms, the only accidentals that may stand apart from the root
    pub fn from_word(text: &str) -> Option<Self> {
        if text.eq_ignore_ascii_case("sharp") {
            Some(Accidental::Sharp)
        } else if text.eq_ignore_ascii_case("flat") {
            Some(Accidental::Flat)
        } else {
            None
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Accidental::Natural => "",
            Accidental::Sharp => "s",
            Accidental::Flat => "b",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quality {
    Major,
    Minor,
}

impl Quality {
    /// Any quality spelling, including the case-sensitive `M` / `m`
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "M" => Some(Quality::Major),
            "m" => Some(Quality::Minor),
            _ => Self::parse_long(text),
        }
    }

    /// Multi-letter spellings, the only qualities that may stand apart
    pub fn parse_long(text: &str) -> Option<Self> {
        let lower = text.to_ascii_lowercase();
        match lower.as_str() {
            "major" | "maj" => Some(Quality::Major),
            "minor" | "min" => Some(Quality::Minor),
            _ => None,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Quality::Major => "maj",
            Quality::Minor => "min",
        }
    }
}

/// A fully specified key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Key {
    pub root: Root,
    pub accidental: Accidental,
    pub quality: Quality,
}

impl Key {
    pub fn new(root: Root, accidental: Accidental, quality: Quality) -> Self {
        Self {
            root,
            accidental,
            quality,
        }
    }

    /// Major and minor candidates for a spelling without quality
    pub fn both(root: Root, accidental: Accidental) -> [Key; 2] {
        [
            Key::new(root, accidental, Quality::Major),
            Key::new(root, accidental, Quality::Minor),
        ]
    }

    /// Enharmonic and relative equivalents.
    ///
    /// Enharmonic keys name the same pitches differently (`Bsmaj` for
    /// `Cmaj`); relative keys share the notes with another tonal centre
    /// (`Amin` for `Cmaj`). Keys outside the table have none.
    pub fn equivalents(&self) -> Vec<Key> {
        let name = self.to_string();
        EQUIVALENTS
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, equivalents)| equivalents.iter().filter_map(|s| s.parse().ok()).collect())
            .unwrap_or_default()
    }
}

const EQUIVALENTS: &[(&str, &[&str])] = &[
    ("Cmaj", &["Bsmaj", "Amin"]),
    ("Bsmaj", &["Cmaj", "Amin"]),
    ("Amin", &["Cmaj", "Bsmaj"]),
    ("Gmaj", &["Emin"]),
    ("Emin", &["Gmaj"]),
    ("Dmaj", &["Bmin"]),
    ("Bmin", &["Dmaj"]),
    ("Amaj", &["Fsmin", "Gbmin"]),
    ("Fsmin", &["Amaj", "Gbmin"]),
    ("Gbmin", &["Amaj", "Fsmin"]),
    ("Emaj", &["Csmin", "Dbmin"]),
    ("Csmin", &["Emaj", "Dbmin"]),
    ("Dbmin", &["Emaj", "Csmin"]),
    ("Bmaj", &["Gsmin", "Abmin"]),
    ("Gsmin", &["Bmaj", "Abmin"]),
    ("Abmin", &["Bmaj", "Gsmin"]),
    ("Fsmaj", &["Ebmin", "Dsmin"]),
    ("Dsmin", &["Fsmaj", "Ebmin"]),
    ("Ebmin", &["Fsmaj", "Dsmin"]),
    ("Dbmaj", &["Bbmin", "Asmin"]),
    ("Bbmin", &["Dbmaj", "Asmin"]),
    ("Asmin", &["Dbmaj", "Bbmin"]),
    ("Abmaj", &["Fmin"]),
    ("Fmin", &["Abmaj"]),
    ("Ebmaj", &["Cmin"]),
    ("Cmin", &["Ebmaj"]),
    ("Bbmaj", &["Gmin", "Asmaj"]),
    ("Gmin", &["Bbmaj", "Asmaj"]),
    ("Asmaj", &["Bbmaj", "Gmin"]),
    ("Fmaj", &["Dmin"]),
    ("Dmin", &["Fmaj"]),
];

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.root.as_char(),
            self.accidental.suffix(),
            self.quality.suffix()
        )
    }
}

impl FromStr for Key {
    type Err = Error;

    /// Parse the canonical form only (`Csmin`, `Ebmaj`, `Gmin`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidKey(s.to_string());

        let mut chars = s.chars();
        let root = chars
            .next()
            .filter(char::is_ascii_uppercase)
            .and_then(Root::from_char)
            .ok_or_else(invalid)?;

        let rest = chars.as_str();
        let (accidental, rest) = match rest.as_bytes().first() {
            Some(&b's') => (Accidental::Sharp, &rest[1..]),
            Some(&b'b') => (Accidental::Flat, &rest[1..]),
            _ => (Accidental::Natural, rest),
        };
        let quality = match rest {
            "maj" => Quality::Major,
            "min" => Quality::Minor,
            _ => return Err(invalid()),
        };

        Ok(Key::new(root, accidental, quality))
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.to_string()
    }
}

impl TryFrom<String> for Key {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Pieces of a key written as one word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Spelling {
    root: Root,
    accidental: Option<Accidental>,
    quality: Option<Quality>,
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &text[prefix.len()..])
}

fn parse_compact(text: &str) -> Option<Spelling> {
    let mut chars = text.chars();
    let root = Root::from_char(chars.next()?)?;
    let rest = chars.as_str();

    if rest.is_empty() {
        return Some(Spelling {
            root,
            accidental: None,
            quality: None,
        });
    }

    for (spelling, accidental) in ACCIDENTAL_SPELLINGS {
        let Some(after) = strip_prefix_ignore_case(rest, spelling) else {
            continue;
        };
        if after.is_empty() {
            return Some(Spelling {
                root,
                accidental: Some(accidental),
                quality: None,
            });
        }
        if let Some(quality) = Quality::parse(after) {
            return Some(Spelling {
                root,
                accidental: Some(accidental),
                quality: Some(quality),
            });
        }
    }

    Quality::parse(rest).map(|quality| Spelling {
        root,
        accidental: None,
        quality: Some(quality),
    })
}

/// A key recognized at the head of a word sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMatch {
    pub keys: Vec<Key>,
    /// Number of words consumed
    pub consumed: usize,
}

impl KeyMatch {
    fn one(key: Key, consumed: usize) -> Self {
        Self {
            keys: vec![key],
            consumed,
        }
    }

    fn both(root: Root, accidental: Accidental, consumed: usize) -> Self {
        Self {
            keys: Key::both(root, accidental).to_vec(),
            consumed,
        }
    }
}

/// Match a key spelling starting at `words[0]`.
///
/// Spaced forms only pair a bare root with word accidentals and long
/// qualities (`C sharp minor`, `C minor`), or a compact root+accidental
/// with a long quality (`C# maj`).
pub fn match_key(words: &[Word<'_>]) -> Option<KeyMatch> {
    let spelling = parse_compact(words.first()?.text)?;
    let second = words.get(1).map(|w| w.text);
    let third = words.get(2).map(|w| w.text);
    let root = spelling.root;

    let matched = match (spelling.accidental, spelling.quality) {
        (Some(accidental), Some(quality)) => KeyMatch::one(Key::new(root, accidental, quality), 1),
        (None, Some(quality)) => KeyMatch::one(Key::new(root, Accidental::Natural, quality), 1),
        (Some(accidental), None) => match second.and_then(Quality::parse_long) {
            Some(quality) => KeyMatch::one(Key::new(root, accidental, quality), 2),
            None => KeyMatch::both(root, accidental, 1),
        },
        (None, None) => match second.and_then(Accidental::from_word) {
            Some(accidental) => match third.and_then(Quality::parse_long) {
                Some(quality) => KeyMatch::one(Key::new(root, accidental, quality), 3),
                None => KeyMatch::both(root, accidental, 2),
            },
            None => match second.and_then(Quality::parse_long) {
                Some(quality) => KeyMatch::one(Key::new(root, Accidental::Natural, quality), 2),
                None => KeyMatch::both(root, Accidental::Natural, 1),
            },
        },
    };

    Some(matched)
}
