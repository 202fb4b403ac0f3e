//! Fixed category table for the Hebrew vocabulary dataset
//!
//! Each category maps one spreadsheet to one JSON file. Schemas are static
//! and applied positionally to the spreadsheet columns.

use clap::ValueEnum;
use std::fmt;

/// A vocabulary category with a fixed column schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Category {
    Sentences,
    Adjectives,
    Nouns,
    Verbs,
    Basics,
}

impl Category {
    /// All categories in processing order
    pub const ALL: [Category; 5] = [
        Category::Sentences,
        Category::Adjectives,
        Category::Nouns,
        Category::Verbs,
        Category::Basics,
    ];

    /// Category name as used in file names
    pub fn name(&self) -> &'static str {
        match self {
            Category::Sentences => "sentences",
            Category::Adjectives => "adjectives",
            Category::Nouns => "nouns",
            Category::Verbs => "verbs",
            Category::Basics => "basics",
        }
    }

    /// Ordered column names applied to the first N spreadsheet columns
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Category::Sentences | Category::Basics => {
                &["english", "hebrew_spoken", "hebrew_letters"]
            }
            Category::Adjectives => &[
                "english",
                "hebrew_spoken_male",
                "hebrew_letters_male",
                "hebrew_spoken_female",
                "hebrew_letters_female",
            ],
            Category::Nouns => &[
                "english",
                "hebrew_spoken_singular",
                "hebrew_letters_singular",
                "hebrew_spoken_plural",
                "hebrew_letters_plural",
            ],
            Category::Verbs => &[
                "english",
                "hebrew_spoken_general",
                "hebrew_letters_general",
                "hebrew_spoken_he",
                "hebrew_letters_he",
                "hebrew_spoken_she",
                "hebrew_letters_she",
            ],
        }
    }

    /// Schema width in columns
    pub fn width(&self) -> usize {
        self.columns().len()
    }

    /// Spreadsheet file name for this category
    pub fn input_file_name(&self) -> String {
        format!("data_{}.xlsx", self.name())
    }

    /// JSON file name for this category
    pub fn output_file_name(&self) -> String {
        format!("{}.json", self.name())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
