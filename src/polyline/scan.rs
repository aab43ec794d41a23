use crate::chunk::is_terminator;

/// One complete encoded value inside a polyline string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Group<'a> {
    /// Byte offset of the first character.
    pub position: usize,
    pub text: &'a str,
}

/// Result of splitting a polyline string at its value boundaries.
#[derive(Debug, Default)]
pub(crate) struct Scan<'a> {
    pub groups: Vec<Group<'a>>,
    /// Byte offset of an unterminated trailing group, if any.
    pub trailing: Option<usize>,
}

/// Splits `text` into values; a character with a clear continuation bit ends a value.
pub(crate) fn scan(text: &str) -> Scan<'_> {
    let mut groups = Vec::with_capacity(text.len() / 3);
    let mut start = 0;

    for (offset, character) in text.char_indices() {
        if is_terminator(character) {
            let end = offset + character.len_utf8();
            groups.push(Group {
                position: start,
                text: &text[start..end],
            });
            start = end;
        }
    }

    let trailing = (start < text.len()).then_some(start);
    Scan { groups, trailing }
}
