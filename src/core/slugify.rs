/// Normalize a command token into a filesystem- and shell-safe slug.
///
/// Lowercases ASCII letters, keeps alphanumerics and underscores, and
/// collapses every other character run into a single dash. Leading and
/// trailing dashes are trimmed. Tokens with no safe characters slug to the
/// empty string.
pub(crate) fn slugify(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut prev_was_dash = false;

    for ch in value.trim().chars() {
        let c = match ch {
            'a'..='z' | '0'..='9' | '_' => ch,
            'A'..='Z' => ch.to_ascii_lowercase(),
            _ => '-',
        };

        if c == '-' {
            if out.is_empty() || prev_was_dash {
                continue;
            }
            out.push('-');
            prev_was_dash = true;
        } else {
            out.push(c);
            prev_was_dash = false;
        }
    }

    while out.ends_with('-') {
        out.pop();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_plain_token() {
        assert_eq!(slugify("run"), "run");
    }

    #[test]
    fn slugify_lowercases() {
        assert_eq!(slugify("Main.PY"), "main-py");
    }

    #[test]
    fn slugify_preserves_digits_and_underscores() {
        assert_eq!(slugify("12345678"), "12345678");
        assert_eq!(slugify("learning_rate"), "learning_rate");
    }

    #[test]
    fn slugify_strips_leading_dashes() {
        assert_eq!(slugify("--value"), "value");
    }

    #[test]
    fn slugify_collapses_special_runs() {
        assert_eq!(slugify("a=./b"), "a-b");
    }

    #[test]
    fn slugify_only_special_is_empty() {
        assert_eq!(slugify("!@#"), "");
    }
}
