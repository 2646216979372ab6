//! Command unfolding: expand every folded argument in a command string and
//! take the cartesian product across them.
//!
//! `python train.py --seed [1:3] --model [cnn mlp]` unfolds into the six
//! concrete commands, seeds iterating fastest within each model.

use regex::Regex;

use crate::core::error::{Error, Result};
use crate::core::escape::{decode_escaped_characters, encode_escaped_characters};
use crate::core::template::TemplateRegistry;
use crate::utils::product::cartesian_product;

/// Expands folded arguments against an owned template registry.
///
/// The combined recognition pattern is compiled once at construction; calls
/// to [`unfold`](Self::unfold) are pure and share no state, so one unfolder
/// can serve any number of commands.
pub struct CommandUnfolder {
    registry: TemplateRegistry,
    pattern: Regex,
}

impl CommandUnfolder {
    /// Unfolder over the default registry (range and list templates).
    pub fn new() -> Result<Self> {
        Self::with_registry(TemplateRegistry::default())
    }

    pub fn with_registry(registry: TemplateRegistry) -> Result<Self> {
        let pattern = registry.compile()?;
        Ok(Self { registry, pattern })
    }

    /// Unfold `command` into the ordered sequence of concrete commands.
    ///
    /// A command with no folded arguments unfolds to itself. A folded
    /// argument with zero alternatives (empty list, unreachable range)
    /// makes the whole product empty.
    pub fn unfold(&self, command: &str) -> Result<Vec<String>> {
        let text = encode_escaped_characters(command);

        // Alternating literal and unfolded segments, covering `text` exactly.
        let mut segments: Vec<Vec<String>> = Vec::new();
        let mut pos = 0;

        for caps in self.pattern.captures_iter(&text) {
            let whole = match caps.get(0) {
                Some(m) => m,
                None => continue,
            };

            segments.push(vec![text[pos..whole.start()].to_string()]);
            segments.push(self.unfold_match(&caps)?);
            pos = whole.end();
        }

        segments.push(vec![text[pos..].to_string()]);

        for segment in &mut segments {
            for value in segment.iter_mut() {
                *value = decode_escaped_characters(value);
            }
        }

        Ok(cartesian_product(&segments)
            .into_iter()
            .map(|pieces| pieces.concat())
            .collect())
    }

    /// Identify which registered kind matched and delegate to its unfold.
    fn unfold_match(&self, caps: &regex::Captures<'_>) -> Result<Vec<String>> {
        for template in self.registry.templates() {
            if let Some(matched) = caps.name(template.name()) {
                return template.unfold(matched.as_str());
            }
        }
        // Unreachable for patterns produced by combined_pattern().
        Err(Error::Template(
            "Match did not correspond to any registered template".to_string(),
        ))
    }
}
