//! Job naming and unique-id substitution for unfolded commands.

use chrono::Local;

use crate::core::slugify::slugify;
use crate::core::uid::generate_uid_from_text;

/// Reserved placeholder substituted per concrete command after unfolding.
pub const UID_TAG: &str = "{UID}";

/// Generate a timestamped, slugified name for a command.
///
/// Tokens are slugified and joined with `_` behind a `%Y-%m-%d_%H-%M-%S_`
/// prefix. When `max_length_arg` is given, each token keeps only its last
/// `max_length_arg` characters, so astronomically long argument values keep
/// their most specific suffix (usually the number that varies). When
/// `max_length` is given, the assembled name keeps only its first
/// `max_length` characters.
pub fn generate_name_from_command(
    command: &str,
    max_length_arg: Option<usize>,
    max_length: Option<usize>,
) -> String {
    let mut name = Local::now().format("%Y-%m-%d_%H-%M-%S_").to_string();

    let tokens: Vec<String> = command
        .split_whitespace()
        .map(|token| {
            let slug = slugify(token);
            match max_length_arg {
                Some(limit) => last_chars(&slug, limit),
                None => slug,
            }
        })
        .collect();
    name.push_str(&tokens.join("_"));

    match max_length {
        Some(limit) => first_chars(&name, limit),
        None => name,
    }
}

/// Replace every `{UID}` in each command with a hash of that command's full
/// text. Applied after unfolding, so commands differing only in an expanded
/// argument get distinct identifiers.
pub fn replace_uid_tag(commands: &[String]) -> Vec<String> {
    commands
        .iter()
        .map(|command| command.replace(UID_TAG, &generate_uid_from_text(command)))
        .collect()
}

/// Split a block of text into one command per line.
///
/// The whole block is trimmed before splitting, so a trailing newline does
/// not produce a spurious empty command. An all-whitespace block holds no
/// commands at all.
pub fn commands_from_str(content: &str) -> Vec<String> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.lines().map(str::to_string).collect()
}

fn last_chars(s: &str, n: usize) -> String {
    let count = s.chars().count();
    s.chars().skip(count.saturating_sub(n)).collect()
}

fn first_chars(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    const TIMESTAMP_PREFIX: &str = r"^\d{4}-\d{2}-\d{2}_\d{2}-\d{2}-\d{2}_";

    #[test]
    fn name_is_timestamp_prefixed() {
        let name = generate_name_from_command("echo hello", None, None);
        let re = Regex::new(&format!("{}echo_hello$", TIMESTAMP_PREFIX)).unwrap();
        assert!(re.is_match(&name), "unexpected name: {}", name);
    }

    #[test]
    fn name_trims_long_arguments_keeping_suffix() {
        let name = generate_name_from_command("run --value 12345678", Some(4), None);
        let re = Regex::new(&format!("{}run_alue_5678$", TIMESTAMP_PREFIX)).unwrap();
        assert!(re.is_match(&name), "unexpected name: {}", name);
    }

    #[test]
    fn name_respects_max_length() {
        let name = generate_name_from_command("run --value 12345678", None, Some(25));
        assert_eq!(name.chars().count(), 25);
        let re = Regex::new(TIMESTAMP_PREFIX).unwrap();
        assert!(re.is_match(&name));
    }

    #[test]
    fn name_unbounded_when_limits_omitted() {
        let long_arg = "x".repeat(200);
        let name = generate_name_from_command(&format!("run {}", long_arg), None, None);
        assert!(name.ends_with(&long_arg));
    }

    #[test]
    fn uid_tag_substitution_is_deterministic() {
        let commands = vec!["python train.py --out {UID}".to_string()];
        assert_eq!(replace_uid_tag(&commands), replace_uid_tag(&commands));
    }

    #[test]
    fn uid_tag_replaces_every_occurrence() {
        let commands = vec!["mkdir {UID} && cd {UID}".to_string()];
        let replaced = replace_uid_tag(&commands);
        assert!(!replaced[0].contains(UID_TAG));
        let parts: Vec<&str> = replaced[0].split(" && cd ").collect();
        assert_eq!(parts[0].trim_start_matches("mkdir "), parts[1]);
    }

    #[test]
    fn distinct_commands_get_distinct_uids() {
        let commands = vec![
            "run --seed 1 --out {UID}".to_string(),
            "run --seed 2 --out {UID}".to_string(),
        ];
        let replaced = replace_uid_tag(&commands);
        let uid_a = replaced[0].rsplit(' ').next();
        let uid_b = replaced[1].rsplit(' ').next();
        assert_ne!(uid_a, uid_b);
    }

    #[test]
    fn command_without_tag_is_unchanged() {
        let commands = vec!["echo plain".to_string()];
        assert_eq!(replace_uid_tag(&commands), commands);
    }

    #[test]
    fn commands_from_str_ignores_trailing_newline() {
        assert_eq!(
            commands_from_str("echo a\necho b\n"),
            vec!["echo a", "echo b"]
        );
    }

    #[test]
    fn commands_from_str_empty_block() {
        assert!(commands_from_str("\n  \n").is_empty());
    }
}
