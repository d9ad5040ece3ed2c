//! Turns a free-text death description into a categorized kill count.

use std::{
    fmt,
    ops::{Add, AddAssign, Index, IndexMut},
    path::Path,
};

use regex::Regex;
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::Result;

/// Bucket a death is counted in. Closed set, `Humans` is the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Angels,
    Demons,
    Humans,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Angels => "angels",
            Category::Demons => "demons",
            Category::Humans => "humans",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kill counts for every category. All three are always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub angels: u64,
    pub demons: u64,
    pub humans: u64,
}

impl CategoryCounts {
    /// Counts with `count` in `category` and zero everywhere else.
    pub fn single(category: Category, count: u64) -> Self {
        let mut counts = Self::default();
        counts[category] = count;
        counts
    }

    /// Saturates at `u64::MAX`, like every other sum of counts.
    pub fn total(&self) -> u64 {
        self.angels
            .saturating_add(self.demons)
            .saturating_add(self.humans)
    }
}

impl Index<Category> for CategoryCounts {
    type Output = u64;

    fn index(&self, category: Category) -> &u64 {
        match category {
            Category::Angels => &self.angels,
            Category::Demons => &self.demons,
            Category::Humans => &self.humans,
        }
    }
}

impl IndexMut<Category> for CategoryCounts {
    fn index_mut(&mut self, category: Category) -> &mut u64 {
        match category {
            Category::Angels => &mut self.angels,
            Category::Demons => &mut self.demons,
            Category::Humans => &mut self.humans,
        }
    }
}

impl AddAssign for CategoryCounts {
    fn add_assign(&mut self, rhs: Self) {
        self.angels = self.angels.saturating_add(rhs.angels);
        self.demons = self.demons.saturating_add(rhs.demons);
        self.humans = self.humans.saturating_add(rhs.humans);
    }
}

impl Add for CategoryCounts {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl fmt::Display for CategoryCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "angels: {}, demons: {}, humans: {}",
            self.angels, self.demons, self.humans
        )
    }
}

const DEMON_KEYWORDS: &[&str] = &[
    "demon", "vampire", "ghost", "meatsuit", "werewolf", "djinn", "zombie", "creature", "reaper",
    "gorgon", "leviathan", "vengeful", "bloody", "tulpa", "shtriga", "shapeshifter", "poltergeist",
    "rawhead", "rakshasa", "croat", "changleing", "witch", "crocotta", "rugaru", "racist", "pagan",
    "buruburu", "siren", "ghoul", "yeager", "wraith", "whore", "goons", "famine",
];

const DEMON_NAMES: &[&str] = &[
    "cain",
    "katja",
    "meg",
    "seth",
    "war",
    "pestilence",
    "the vanir",
    "zao shen",
];

const ANGEL_KEYWORDS: &[&str] = &["angel", "castiel", "metatron"];

/// Keyword lists deciding the category of a description.
///
/// `demon_keywords` and `angel_keywords` match as substrings of the lower-cased
/// description, `demon_names` only when the whole description equals the name.
/// Every entry is expected to be lower-case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    pub demon_keywords: Vec<String>,
    pub demon_names: Vec<String>,
    pub angel_keywords: Vec<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        let owned = |words: &[&str]| words.iter().map(|w| w.to_string()).collect();
        Self {
            demon_keywords: owned(DEMON_KEYWORDS),
            demon_names: owned(DEMON_NAMES),
            angel_keywords: owned(ANGEL_KEYWORDS),
        }
    }
}

impl Lexicon {
    /// Reads a lexicon from a JSON file.
    pub async fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path).await?;
        let mut lexicon: Lexicon = serde_json::from_str(&raw)?;
        // Matching happens on lower-cased text.
        for list in [
            &mut lexicon.demon_keywords,
            &mut lexicon.demon_names,
            &mut lexicon.angel_keywords,
        ] {
            list.iter_mut().for_each(|w| *w = w.to_lowercase());
        }
        Ok(lexicon)
    }

    /// First match wins: demons, then angels, else humans.
    pub fn category_of(&self, lowered: &str) -> Category {
        let demon = self.demon_keywords.iter().any(|k| lowered.contains(k.as_str()))
            || self.demon_names.iter().any(|n| n == lowered);
        if demon {
            Category::Demons
        } else if self.angel_keywords.iter().any(|k| lowered.contains(k.as_str())) {
            Category::Angels
        } else {
            Category::Humans
        }
    }
}

/// Separator `" and "` is collapsed into before conjunction counting.
const SEPARATOR: char = '&';

/// Classifies death descriptions against a [`Lexicon`].
#[derive(Debug, Clone)]
pub struct Classifier {
    lexicon: Lexicon,
    reference: Regex,
    numeral: Regex,
    digit: Regex,
}

impl Classifier {
    pub fn new(lexicon: Lexicon) -> Result<Self> {
        Ok(Self {
            lexicon,
            reference: Regex::new(r"#\d+")?,
            numeral: Regex::new(r"\d+")?,
            digit: Regex::new(r"^\d$")?,
        })
    }

    /// Counts the deaths in `description` and files them under a single category.
    ///
    /// Reference markers (`#12`) and thousands separators are dropped first. If any
    /// numerals remain their sum is the count, otherwise every `" and "` adds one
    /// victim to a base of one. An empty description therefore counts as one human.
    pub fn classify(&self, description: &str) -> CategoryCounts {
        let lowered = description.to_lowercase();
        let category = self.lexicon.category_of(&lowered);

        let cleaned = self.reference.replace_all(&lowered, "").replace(',', "");

        let mut numerals = self.numeral.find_iter(&cleaned).peekable();
        let count = if numerals.peek().is_some() {
            numerals
                .map(|m| self.numeral_value(m.as_str()))
                .fold(0u64, u64::saturating_add)
        } else {
            let joined = cleaned.replace(" and ", " & ");
            joined.matches(SEPARATOR).count() as u64 + 1
        };

        CategoryCounts::single(category, count)
    }

    /// Value of a run of decimal digits from any script, saturating on overflow.
    fn numeral_value(&self, run: &str) -> u64 {
        run.chars().fold(0u64, |acc, c| {
            acc.saturating_mul(10).saturating_add(self.digit_value(c))
        })
    }

    /// Unicode lays out every set of decimal digits as a contiguous `0..=9` block,
    /// so a digit's value is its distance from the start of its block.
    fn digit_value(&self, c: char) -> u64 {
        if let Some(d) = c.to_digit(10) {
            return u64::from(d);
        }
        let mut buf = [0u8; 4];
        let mut offset = 0u64;
        let mut cp = c as u32;
        while let Some(prev) = cp.checked_sub(1).and_then(char::from_u32) {
            if !self.digit.is_match(prev.encode_utf8(&mut buf)) {
                break;
            }
            offset += 1;
            cp -= 1;
        }
        offset % 10
    }
}
