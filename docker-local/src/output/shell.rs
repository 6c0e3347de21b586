//! POSIX shell quoting.

/// Quote `value` as a single shell word.
///
/// The value is wrapped in single quotes and every embedded `'` becomes
/// `'\''`, so the result is safe to splice into `sh`, `bash` or `zsh`.
///
/// # Examples
///
/// ```
/// use docker_local::output::escape_shell_arg;
///
/// assert_eq!(escape_shell_arg("/home/dev"), "'/home/dev'");
/// assert_eq!(escape_shell_arg("it's"), r"'it'\''s'");
/// ```
#[must_use]
pub fn escape_shell_arg(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for c in value.chars() {
        if c == '\'' {
            quoted.push_str(r"'\''");
        } else {
            quoted.push(c);
        }
    }
    quoted.push('\'');
    quoted
}

/// Format a `NAME='value'` assignment.
#[must_use]
pub fn format_assignment(name: &str, value: &str) -> String {
    format!("{name}={}", escape_shell_arg(value))
}

/// Format one assignment per line, each terminated by a newline.
#[must_use]
pub fn format_assignments<N, V>(pairs: &[(N, V)]) -> String
where
    N: AsRef<str>,
    V: AsRef<str>,
{
    pairs
        .iter()
        .map(|(name, value)| format_assignment(name.as_ref(), value.as_ref()) + "\n")
        .collect()
}
