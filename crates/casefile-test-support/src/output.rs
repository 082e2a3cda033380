//! Helpers for inspecting printed translation output.

/// Returns the entry lines whose key starts with `<prefix>.`, in order.
///
/// `lines_for(output, "clue.c1")` matches `clue.c1.title` but not
/// `clue.c11.title`.
#[must_use]
pub fn lines_for<'a>(output: &'a str, prefix: &str) -> Vec<&'a str> {
    let needle = format!("    '{prefix}.");
    output
        .lines()
        .filter(|line| line.starts_with(&needle))
        .collect()
}

/// Counts blank lines that directly follow an entry line.
///
/// Blank lines that belong to the section headers are not counted.
#[must_use]
pub fn separator_count(output: &str) -> usize {
    let lines: Vec<&str> = output.lines().collect();
    lines
        .windows(2)
        .filter(|pair| pair[0].starts_with("    '") && pair[1].is_empty())
        .count()
}
