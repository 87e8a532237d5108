//! Field lookups and the OR-predicate builder
//!
//! A lookup pairs a field path with a comparison operator, written in the
//! `field__op` shorthand:
//! - `username`: exact match on `username`
//! - `email__icontains`: case-insensitive substring match on `email`
//! - `author__name__istartswith`: nested path `author__name`, prefix match
//!
//! [`build_predicate`] compiles one clause per lookup and combines them with
//! logical OR: a record matches when at least one lookup matches. The
//! combination is associative and commutative, so lookup order never changes
//! which records match.

use crate::error::SearchError;
use crate::record::{Record, PATH_SEPARATOR};
use serde::{Deserialize, Serialize};

/// Comparison operator applied between a record field and the query text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchOp {
    Exact,
    IExact,
    Contains,
    IContains,
    StartsWith,
    IStartsWith,
    EndsWith,
    IEndsWith,
    Regex,
}

impl MatchOp {
    /// Parse an operator suffix from the `field__op` shorthand
    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "exact" => Some(Self::Exact),
            "iexact" => Some(Self::IExact),
            "contains" => Some(Self::Contains),
            "icontains" => Some(Self::IContains),
            "startswith" => Some(Self::StartsWith),
            "istartswith" => Some(Self::IStartsWith),
            "endswith" => Some(Self::EndsWith),
            "iendswith" => Some(Self::IEndsWith),
            "regex" => Some(Self::Regex),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::IExact => "iexact",
            Self::Contains => "contains",
            Self::IContains => "icontains",
            Self::StartsWith => "startswith",
            Self::IStartsWith => "istartswith",
            Self::EndsWith => "endswith",
            Self::IEndsWith => "iendswith",
            Self::Regex => "regex",
        }
    }
}

impl std::fmt::Display for MatchOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single field lookup: where, and under what operator, the query text
/// is matched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupSpec {
    /// Field path, `__`-separated for nested records
    pub field: String,
    /// Comparison operator
    pub op: MatchOp,
}

impl LookupSpec {
    pub fn new(field: impl Into<String>, op: MatchOp) -> Self {
        Self {
            field: field.into(),
            op,
        }
    }

    /// Parse the `field__op` shorthand. Only the last segment is tried as an
    /// operator name, so nested field paths survive; a bare path defaults to
    /// `Exact`.
    pub fn parse(spec: &str) -> Self {
        if let Some((field, suffix)) = spec.rsplit_once(PATH_SEPARATOR) {
            if !field.is_empty() {
                if let Some(op) = MatchOp::from_suffix(suffix) {
                    return Self::new(field, op);
                }
            }
        }
        Self::new(spec, MatchOp::Exact)
    }
}

impl std::fmt::Display for LookupSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.field, PATH_SEPARATOR, self.op)
    }
}

/// One compiled clause: a field path plus a pre-compiled matcher
#[derive(Debug, Clone)]
struct Clause {
    field: String,
    matcher: Matcher,
}

/// Compiled comparison against the query text. Case-insensitive needles are
/// lowercased once at build time.
#[derive(Debug, Clone)]
enum Matcher {
    Exact(String),
    IExact(String),
    Contains(String),
    IContains(String),
    StartsWith(String),
    IStartsWith(String),
    EndsWith(String),
    IEndsWith(String),
    Pattern(regex::Regex),
}

impl Clause {
    fn compile(query_text: &str, lookup: &LookupSpec) -> Result<Self, SearchError> {
        let needle = query_text.to_string();
        let matcher = match lookup.op {
            MatchOp::Exact => Matcher::Exact(needle),
            MatchOp::IExact => Matcher::IExact(needle.to_lowercase()),
            MatchOp::Contains => Matcher::Contains(needle),
            MatchOp::IContains => Matcher::IContains(needle.to_lowercase()),
            MatchOp::StartsWith => Matcher::StartsWith(needle),
            MatchOp::IStartsWith => Matcher::IStartsWith(needle.to_lowercase()),
            MatchOp::EndsWith => Matcher::EndsWith(needle),
            MatchOp::IEndsWith => Matcher::IEndsWith(needle.to_lowercase()),
            MatchOp::Regex => {
                let pattern = regex::Regex::new(query_text).map_err(|source| {
                    SearchError::InvalidPattern {
                        pattern: query_text.to_string(),
                        source,
                    }
                })?;
                Matcher::Pattern(pattern)
            }
        };
        Ok(Self {
            field: lookup.field.clone(),
            matcher,
        })
    }

    fn matches(&self, value: &str) -> bool {
        match &self.matcher {
            Matcher::Exact(needle) => value == needle,
            Matcher::IExact(needle) => value.to_lowercase() == *needle,
            Matcher::Contains(needle) => value.contains(needle.as_str()),
            Matcher::IContains(needle) => value.to_lowercase().contains(needle.as_str()),
            Matcher::StartsWith(needle) => value.starts_with(needle.as_str()),
            Matcher::IStartsWith(needle) => value.to_lowercase().starts_with(needle.as_str()),
            Matcher::EndsWith(needle) => value.ends_with(needle.as_str()),
            Matcher::IEndsWith(needle) => value.to_lowercase().ends_with(needle.as_str()),
            Matcher::Pattern(pattern) => pattern.is_match(value),
        }
    }
}

/// Disjunction of compiled lookup clauses
#[derive(Debug, Clone)]
pub struct Predicate {
    clauses: Vec<Clause>,
}

impl Predicate {
    /// True when at least one clause matches a field the record has.
    /// Records lacking a clause's field never match that clause.
    pub fn matches(&self, record: &dyn Record) -> bool {
        self.clauses.iter().any(|clause| {
            record
                .field(&clause.field)
                .map(|value| clause.matches(&value))
                .unwrap_or(false)
        })
    }

    /// Number of clauses, always at least one
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

/// Build an OR-combined predicate matching `query_text` under every lookup.
///
/// Empty query text is valid: the substring operators (`contains`,
/// `startswith`, `endswith` and their case-insensitive forms) then match
/// every record that has the field, `exact`/`iexact` match only records
/// whose field value is itself empty, and an empty `regex` pattern matches
/// every record that has the field.
pub fn build_predicate(
    query_text: &str,
    lookups: &[LookupSpec],
) -> Result<Predicate, SearchError> {
    if lookups.is_empty() {
        return Err(SearchError::config("lookups is empty"));
    }
    let clauses = lookups
        .iter()
        .map(|lookup| Clause::compile(query_text, lookup))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Predicate { clauses })
}
