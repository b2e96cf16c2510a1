// File: src/validation/pattern.rs
// Purpose: Full-match regular expressions and the shared pattern library

use crate::error::RuleError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// A regular expression that must match a whole field value.
///
/// The source is compiled as `^(?:source)$`, so `"abc"` does not accept
/// `"xabcx"` even when the source itself carries no anchors.
#[derive(Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    pub fn new(source: &str) -> Result<Self, RuleError> {
        let regex = Regex::new(&format!("^(?:{})$", source)).map_err(|error| {
            RuleError::InvalidPattern {
                pattern: source.to_string(),
                error,
            }
        })?;

        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    /// The expression as written, without the added anchors
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_full_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.source).finish()
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

const EMAIL_SOURCE: &str = r"\S+@\S+\.\S+";
const PHONE_SOURCE: &str = r"\+[0-9]{1,3} ?[0-9]{1,4} ?[0-9]{1,4} ?[0-9]{1,9}";
const URL_SOURCE: &str =
    r"(https?://)?(www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b[-a-zA-Z0-9()@:%_+.~#?&/=]*";

static EMAIL: Lazy<Pattern> = Lazy::new(|| Pattern::new(EMAIL_SOURCE).unwrap());
static PHONE: Lazy<Pattern> = Lazy::new(|| Pattern::new(PHONE_SOURCE).unwrap());
static URL: Lazy<Pattern> = Lazy::new(|| Pattern::new(URL_SOURCE).unwrap());

/// Patterns shared by most forms, each with a fixed message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommonPattern {
    /// `<nonspace>@<nonspace>.<nonspace>`; permissive, not RFC 5322
    Email,
    /// `+<country code>` followed by digit groups separated by optional single spaces
    Phone,
    /// Optional `http(s)://` and `www.`, a dotted domain, optional path/query/fragment
    Url,
}

impl CommonPattern {
    pub const ALL: [CommonPattern; 3] = [CommonPattern::Email, CommonPattern::Phone, CommonPattern::Url];

    pub fn name(self) -> &'static str {
        match self {
            CommonPattern::Email => "email",
            CommonPattern::Phone => "phone",
            CommonPattern::Url => "url",
        }
    }

    pub fn pattern(self) -> &'static Pattern {
        match self {
            CommonPattern::Email => &EMAIL,
            CommonPattern::Phone => &PHONE,
            CommonPattern::Url => &URL,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            CommonPattern::Email => "Please enter a valid email address",
            CommonPattern::Phone => "Please enter a valid phone number",
            CommonPattern::Url => "Please enter a valid URL",
        }
    }

    pub fn is_match(self, value: &str) -> bool {
        self.pattern().is_full_match(value)
    }
}

impl FromStr for CommonPattern {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(CommonPattern::Email),
            "phone" => Ok(CommonPattern::Phone),
            "url" => Ok(CommonPattern::Url),
            other => Err(RuleError::UnknownPreset(other.to_string())),
        }
    }
}

impl fmt::Display for CommonPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
