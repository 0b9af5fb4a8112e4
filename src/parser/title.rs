/// A page title reduced to a display name and its first word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedTitle {
    pub full: String,
    pub short: String,
}

const EN_DASH: char = '–';

/// Clean a Wikipedia page title into a display name.
///
/// Drops a trailing "– Language" suffix, a parenthetical disambiguator and
/// anything after the first comma, in that order. Each rule runs once and
/// only when its marker is not the first character. `short` is the text
/// before the first space.
pub fn normalize(raw: &str) -> NormalizedTitle {
    let mut title = raw;

    if let Some(idx) = marker_pos(title, EN_DASH) {
        title = &title[..preceding_char(title, idx)];
    }
    if let Some(idx) = marker_pos(title, '(') {
        title = &title[..preceding_char(title, idx)];
    }
    if let Some(idx) = marker_pos(title, ',') {
        title = &title[..idx];
    }

    let short = match marker_pos(title, ' ') {
        Some(idx) => &title[..idx],
        None => title,
    };

    NormalizedTitle {
        full: title.to_string(),
        short: short.to_string(),
    }
}

/// Byte offset of the first `marker`, unless it opens the string.
fn marker_pos(s: &str, marker: char) -> Option<usize> {
    s.find(marker).filter(|&idx| idx > 0)
}

/// Byte offset of the char right before `idx`.
fn preceding_char(s: &str, idx: usize) -> usize {
    s[..idx]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}
