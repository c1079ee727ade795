//! Naming convention classification and conversion.
//!
//! Conventions are checked against a file's stem: the extension is removed
//! first, then a single trailing suffix tag such as `.test` or `.stories`,
//! so `Button.test.tsx` is judged by `Button`.
//!
//! Conversion works on the raw stem and does not strip suffix tags, so
//! [`expected_name`] is only the inverse of [`validate`] for names without
//! a tag.

use nom::{
    IResult, Parser,
    bytes::complete::{take_while, take_while1},
    character::complete::{char, satisfy},
    combinator::recognize,
    multi::many0,
};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Suffix tags removed from a stem before it is classified.
const SUFFIX_TAGS: &[&str] = &[".test", ".spec", ".stories", ".types", ".d"];

/// A naming convention for file and directory names.
///
/// Values that are not one of the five known spellings deserialize into
/// [`NamingConvention::Unknown`]. Unknown conventions accept every name, so
/// a configuration written for a newer release never produces findings it
/// cannot explain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NamingConvention {
    /// `MyComponent`
    PascalCase,
    /// `myComponent`
    CamelCase,
    /// `my-component`
    KebabCase,
    /// `my_component`
    SnakeCase,
    /// `MY_COMPONENT`
    UpperCase,
    /// A convention this version does not recognize.
    Unknown(String),
}

impl NamingConvention {
    /// Returns the configuration spelling of this convention.
    pub fn as_str(&self) -> &str {
        match self {
            Self::PascalCase => "PascalCase",
            Self::CamelCase => "camelCase",
            Self::KebabCase => "kebab-case",
            Self::SnakeCase => "snake_case",
            Self::UpperCase => "UPPER_CASE",
            Self::Unknown(name) => name,
        }
    }

    /// Returns true if this is one of the recognized conventions.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl fmt::Display for NamingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NamingConvention {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "PascalCase" => Self::PascalCase,
            "camelCase" => Self::CamelCase,
            "kebab-case" => Self::KebabCase,
            "snake_case" => Self::SnakeCase,
            "UPPER_CASE" => Self::UpperCase,
            other => Self::Unknown(other.to_string()),
        })
    }
}

impl From<String> for NamingConvention {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(convention) => convention,
            Err(never) => match never {},
        }
    }
}

impl From<NamingConvention> for String {
    fn from(value: NamingConvention) -> Self {
        match value {
            NamingConvention::Unknown(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

/// Splits a file name into its stem and extension.
///
/// The extension is the final `.xxx` where `xxx` is non-empty, so
/// `.gitignore` has an empty stem and `Makefile` has no extension.
pub fn split_extension(filename: &str) -> (&str, &str) {
    match filename.rfind('.') {
        Some(idx) if idx + 1 < filename.len() && !filename[idx + 1..].contains('/') => {
            (&filename[..idx], &filename[idx..])
        }
        _ => (filename, ""),
    }
}

/// Removes one trailing suffix tag (`.test`, `.spec`, ...) from a stem.
fn strip_suffix_tag(stem: &str) -> &str {
    SUFFIX_TAGS
        .iter()
        .find_map(|tag| stem.strip_suffix(tag))
        .unwrap_or(stem)
}

fn is_upper(c: char) -> bool {
    c.is_ascii_uppercase()
}

fn is_lower(c: char) -> bool {
    c.is_ascii_lowercase()
}

fn is_alnum(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

fn is_lower_or_digit(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}

fn is_upper_or_digit(c: char) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_digit()
}

/// `[A-Z][A-Za-z0-9]*`
fn pascal_case(input: &str) -> IResult<&str, &str> {
    recognize((satisfy(is_upper), take_while(is_alnum))).parse(input)
}

/// `[a-z][A-Za-z0-9]*`
fn camel_case(input: &str) -> IResult<&str, &str> {
    recognize((satisfy(is_lower), take_while(is_alnum))).parse(input)
}

/// `[a-z][a-z0-9]*(-[a-z0-9]+)*`
fn kebab_case(input: &str) -> IResult<&str, &str> {
    recognize((
        satisfy(is_lower),
        take_while(is_lower_or_digit),
        many0((char('-'), take_while1(is_lower_or_digit))),
    ))
    .parse(input)
}

/// `[a-z][a-z0-9]*(_[a-z0-9]+)*`
fn snake_case(input: &str) -> IResult<&str, &str> {
    recognize((
        satisfy(is_lower),
        take_while(is_lower_or_digit),
        many0((char('_'), take_while1(is_lower_or_digit))),
    ))
    .parse(input)
}

/// `[A-Z][A-Z0-9]*(_[A-Z0-9]+)*`
fn upper_case(input: &str) -> IResult<&str, &str> {
    recognize((
        satisfy(is_upper),
        take_while(is_upper_or_digit),
        many0((char('_'), take_while1(is_upper_or_digit))),
    ))
    .parse(input)
}

/// Returns true if `parser` consumes all of `input`.
fn matches_fully(parser: fn(&str) -> IResult<&str, &str>, input: &str) -> bool {
    matches!(parser(input), Ok((rest, _)) if rest.is_empty())
}

/// Checks whether a file or directory name follows a naming convention.
///
/// The extension and one suffix tag are removed before matching. Unknown
/// conventions always pass.
pub fn validate(filename: &str, convention: &NamingConvention) -> bool {
    let (stem, _) = split_extension(filename);
    let name = strip_suffix_tag(stem);

    let parser: fn(&str) -> IResult<&str, &str> = match convention {
        NamingConvention::PascalCase => pascal_case,
        NamingConvention::CamelCase => camel_case,
        NamingConvention::KebabCase => kebab_case,
        NamingConvention::SnakeCase => snake_case,
        NamingConvention::UpperCase => upper_case,
        NamingConvention::Unknown(_) => return true,
    };

    matches_fully(parser, name)
}

/// Computes the name `filename` would have under `convention`.
///
/// The stem is rewritten and the extension is kept. Unknown conventions
/// return the name unchanged.
///
/// The result is not guaranteed to pass [`validate`]. Stems no convention
/// can spell come back unfixed: a leading digit stays (`2fa.ts` gives
/// `2fa.ts`), and an inner dot that is not a suffix tag stays in the stem
/// (`a.b.ts` gives `A.b.ts` under PascalCase).
pub fn expected_name(filename: &str, convention: &NamingConvention) -> String {
    let (stem, extension) = split_extension(filename);
    let words = split_words(stem);

    let converted: String = match convention {
        NamingConvention::PascalCase => words.iter().map(|w| upper_first(w)).collect(),
        NamingConvention::CamelCase => {
            let pascal: String = words.iter().map(|w| upper_first(w)).collect();
            lower_first(&pascal)
        }
        NamingConvention::KebabCase => join_words(&words, "-", str::to_lowercase),
        NamingConvention::SnakeCase => join_words(&words, "_", str::to_lowercase),
        NamingConvention::UpperCase => join_words(&words, "_", str::to_uppercase),
        NamingConvention::Unknown(_) => return filename.to_string(),
    };

    format!("{converted}{extension}")
}

/// Splits a stem into words.
///
/// Runs of `-`, `_` and whitespace separate words, and so does a lowercase
/// letter followed by an uppercase one.
fn split_words(stem: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut previous: Option<char> = None;

    for c in stem.chars() {
        if c == '-' || c == '_' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            previous = None;
            continue;
        }

        if c.is_ascii_uppercase() && previous.is_some_and(|p| p.is_ascii_lowercase()) {
            words.push(std::mem::take(&mut current));
        }

        current.push(c);
        previous = Some(c);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

fn join_words(words: &[String], separator: &str, case: fn(&str) -> String) -> String {
    words
        .iter()
        .map(|w| case(w))
        .collect::<Vec<_>>()
        .join(separator)
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn lower_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
