//! Formatting utilities used for CLI output.

/// `1 gap`, `3 gaps`
pub fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

/// Human label for a track: its `<name>` when present, else its position.
pub fn track_label(index: usize, name: Option<&str>) -> String {
    match name {
        Some(n) => format!("#{} \"{}\"", index + 1, n),
        None => format!("#{}", index + 1),
    }
}
