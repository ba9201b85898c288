//! Locating enum and array blocks in raw firmware source.
//!
//! This is a hand scanner over the handful of declaration shapes the check
//! cares about, not a C parser. A block is everything between the
//! declaration's `{` and the *first* `}` that follows; nested braces do not
//! occur in the flat enum/initializer lists being inspected.

use crate::tables::TableKind;

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// True when the text before `idx` does not end in an identifier character,
/// i.e. a keyword match starting at `idx` is a whole word.
fn word_boundary_before(source: &str, idx: usize) -> bool {
    source
        .get(..idx)
        .and_then(|prefix| prefix.chars().next_back())
        .is_none_or(|c| !is_ident_char(c))
}

struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    fn new(rest: &'a str) -> Self {
        Self { rest }
    }

    fn skip_ws(&mut self) {
        self.rest = self.rest.trim_start();
    }

    /// Skip whitespace, failing if there was none to skip.
    fn skip_ws_required(&mut self) -> bool {
        let trimmed = self.rest.trim_start();
        let skipped = trimmed.len() != self.rest.len();
        self.rest = trimmed;
        skipped
    }

    /// Consume `word` only if it ends at an identifier boundary.
    fn eat_word(&mut self, word: &str) -> bool {
        if let Some(rest) = self.rest.strip_prefix(word)
            && rest.chars().next().is_none_or(|c| !is_ident_char(c))
        {
            self.rest = rest;
            return true;
        }
        false
    }

    fn eat_char(&mut self, ch: char) -> bool {
        if let Some(rest) = self.rest.strip_prefix(ch) {
            self.rest = rest;
            return true;
        }
        false
    }

    /// Consume `token` exactly, with no boundary requirement.
    fn eat_exact(&mut self, token: &str) -> bool {
        if let Some(rest) = self.rest.strip_prefix(token) {
            self.rest = rest;
            return true;
        }
        false
    }

    /// Consume a `{ ... }` initializer, returning the text between the
    /// opening brace and the first closing brace.
    fn body_to_close(&mut self) -> Option<&'a str> {
        let rest = self.rest.strip_prefix('{')?;
        let end = rest.find('}')?;
        rest.get(..end)
    }
}

/// Locate the body of `enum <name> { ... }`, first occurrence wins.
pub(crate) fn find_enum_block<'a>(source: &'a str, name: &str) -> Option<&'a str> {
    for (idx, _) in source.match_indices("enum") {
        if !word_boundary_before(source, idx) {
            continue;
        }
        let Some(rest) = source.get(idx + "enum".len()..) else {
            continue;
        };
        let mut cur = Cursor::new(rest);
        if !cur.skip_ws_required() {
            continue;
        }
        if !cur.eat_word(name) {
            continue;
        }
        cur.skip_ws();
        if let Some(body) = cur.body_to_close() {
            return Some(body);
        }
    }
    None
}

fn match_text_decl(cur: &mut Cursor<'_>, name: &str) -> bool {
    if !cur.eat_word("char") {
        return false;
    }
    cur.skip_ws();
    if !cur.eat_char('*') {
        return false;
    }
    cur.skip_ws();
    cur.eat_word(name)
}

fn match_unsigned_decl(cur: &mut Cursor<'_>, name: &str) -> bool {
    if !cur.eat_word("uint32_t") {
        return false;
    }
    if !cur.skip_ws_required() {
        return false;
    }
    cur.eat_word(name)
}

/// Locate the initializer body of a `const` array declaration whose name
/// and declared element type both match. The element type is what tells a
/// names table (`const char *name[]`) from a speeds table
/// (`const uint32_t name[]`).
pub(crate) fn find_array_block<'a>(
    source: &'a str,
    name: &str,
    kind: TableKind,
) -> Option<&'a str> {
    for (idx, _) in source.match_indices("const") {
        if !word_boundary_before(source, idx) {
            continue;
        }
        let Some(rest) = source.get(idx + "const".len()..) else {
            continue;
        };
        let mut cur = Cursor::new(rest);
        if !cur.skip_ws_required() {
            continue;
        }
        let matched = match kind {
            TableKind::Text => match_text_decl(&mut cur, name),
            TableKind::Unsigned => match_unsigned_decl(&mut cur, name),
        };
        if !matched {
            continue;
        }
        if !cur.eat_exact("[]") {
            continue;
        }
        cur.skip_ws();
        if !cur.eat_char('=') {
            continue;
        }
        cur.skip_ws();
        if let Some(body) = cur.body_to_close() {
            return Some(body);
        }
    }
    None
}

/// Remove every `//` comment through end-of-line, keeping the newline.
pub(crate) fn strip_line_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find("//") {
        out.push_str(rest.get(..pos).unwrap_or_default());
        rest = rest.get(pos..).unwrap_or_default();
        match rest.find('\n') {
            Some(nl) => rest = rest.get(nl..).unwrap_or_default(),
            None => rest = "",
        }
    }
    out.push_str(rest);
    out
}

/// Split a block body into comma-separated entries with comments stripped,
/// blanks dropped, and surrounding whitespace trimmed.
pub(crate) fn split_entries(block: &str) -> Vec<String> {
    strip_line_comments(block)
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
