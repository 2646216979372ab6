//! Folded-argument template grammars.
//!
//! A folded argument is a compact bracket syntax standing for several literal
//! values. Each template kind supplies a recognition pattern and an unfold
//! function; the registry keeps the kinds ordered and builds the combined
//! pattern used to scan a command in one pass.
//!
//! Supported kinds:
//! - *range*: `[start:end]` or `[start:end:step]`, integers, end inclusive
//! - *list*: `[item1 item2 ... itemN]`, whitespace-separated items

use regex::Regex;

use crate::core::error::{Error, Result};

/// A named grammar rule: a recognition pattern plus a pure unfold function
/// mapping the matched text to its ordered literal alternatives.
pub trait ArgumentTemplate {
    /// Kind name; doubles as the named capture group in the combined pattern.
    fn name(&self) -> &'static str;

    /// Recognition pattern for exactly one occurrence of this kind.
    fn pattern(&self) -> &'static str;

    /// Expand matched text into its ordered literal alternatives.
    fn unfold(&self, matched: &str) -> Result<Vec<String>>;
}

/// `[start:end]` / `[start:end:step]` with integer bounds, end inclusive.
pub struct RangeTemplate;

const RANGE_PATTERN: &str = r"\[-?\d+:-?\d+(?::-?\d+)?\]";

impl RangeTemplate {
    fn parse_bounds(matched: &str) -> Result<(i64, i64, i64)> {
        let inner = matched.trim_start_matches('[').trim_end_matches(']');
        let mut parts = inner.split(':');

        let start = Self::parse_int(parts.next().unwrap_or_default())?;
        let end = Self::parse_int(parts.next().unwrap_or_default())?;
        let step = match parts.next() {
            Some(text) => Self::parse_int(text)?,
            None => 1,
        };

        Ok((start, end, step))
    }

    fn parse_int(text: &str) -> Result<i64> {
        text.parse::<i64>()
            .map_err(|_| Error::Template(format!("Invalid range bound: {}", text)))
    }
}

impl ArgumentTemplate for RangeTemplate {
    fn name(&self) -> &'static str {
        "range"
    }

    fn pattern(&self) -> &'static str {
        RANGE_PATTERN
    }

    fn unfold(&self, matched: &str) -> Result<Vec<String>> {
        let (start, end, step) = Self::parse_bounds(matched)?;

        if step == 0 {
            return Err(Error::Template(format!(
                "Range step must be non-zero: {}",
                matched
            )));
        }

        // A step whose sign cannot reach `end` from `start` yields an empty
        // expansion, not an error. Callers rely on this.
        //
        // Stepping past i64 range means the range is exhausted; bounds at
        // i64::MAX / i64::MIN are well-formed input and must not panic.
        let mut values = Vec::new();
        let mut current = start;
        if step > 0 {
            while current <= end {
                values.push(current.to_string());
                current = match current.checked_add(step) {
                    Some(next) => next,
                    None => break,
                };
            }
        } else {
            while current >= end {
                values.push(current.to_string());
                current = match current.checked_add(step) {
                    Some(next) => next,
                    None => break,
                };
            }
        }

        Ok(values)
    }
}

/// `[item1 item2 ... itemN]`, items split on whitespace, order preserved.
pub struct ListTemplate;

const LIST_PATTERN: &str = r"\[[^\[\]]*\]";

impl ArgumentTemplate for ListTemplate {
    fn name(&self) -> &'static str {
        "list"
    }

    fn pattern(&self) -> &'static str {
        LIST_PATTERN
    }

    fn unfold(&self, matched: &str) -> Result<Vec<String>> {
        let inner = matched.trim_start_matches('[').trim_end_matches(']');
        Ok(inner.split_whitespace().map(str::to_string).collect())
    }
}

/// Ordered collection of template kinds.
///
/// Order matters: the combined pattern is an alternation and the first
/// alternative that matches at a position wins, so the range kind is
/// registered ahead of the catch-all list kind.
pub struct TemplateRegistry {
    templates: Vec<Box<dyn ArgumentTemplate>>,
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(RangeTemplate));
        registry.register(Box::new(ListTemplate));
        registry
    }
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self {
            templates: Vec::new(),
        }
    }

    pub fn register(&mut self, template: Box<dyn ArgumentTemplate>) {
        self.templates.push(template);
    }

    pub fn get(&self, name: &str) -> Option<&dyn ArgumentTemplate> {
        self.templates
            .iter()
            .find(|t| t.name() == name)
            .map(|t| t.as_ref())
    }

    pub fn templates(&self) -> impl Iterator<Item = &dyn ArgumentTemplate> {
        self.templates.iter().map(|t| t.as_ref())
    }

    /// One alternation of every registered pattern, each tagged with its
    /// kind name as a capture group.
    pub fn combined_pattern(&self) -> String {
        let alternatives: Vec<String> = self
            .templates
            .iter()
            .map(|t| format!("(?P<{}>{})", t.name(), t.pattern()))
            .collect();
        format!("({})", alternatives.join("|"))
    }

    /// Compile the combined pattern. Fails only for a custom registry whose
    /// pattern or kind name is not valid regex syntax.
    pub fn compile(&self) -> Result<Regex> {
        Regex::new(&self.combined_pattern())
            .map_err(|e| Error::Template(format!("Invalid template pattern: {}", e)))
    }
}
