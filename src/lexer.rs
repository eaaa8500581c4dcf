use once_cell::sync::Lazy;
use regex::Regex;

/// Section header: `[name]`, matched against the trimmed line.
static SECTION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[(?P<name>.+)\]").expect("section pattern is valid"));

/// Entry: `key = value # comment`. The value stops at the first `#`.
static ENTRY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<key>[^=]+)=(?P<value>[^#]+)#?(?P<comment>.*)$")
        .expect("entry pattern is valid")
});

/// Comment: everything after the first `#` on the line, leading whitespace skipped.
static COMMENT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#\s*(?P<comment>.+)").expect("comment pattern is valid"));

/// The kind of a single line of INI text.
///
/// Every line maps to exactly one kind. Rules are tried in a fixed order:
/// blank, section header, entry, comment. Anything else is `Unrecognized`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum LineKind {
    /// An empty line, or one made only of whitespace.
    Blank,
    /// A section header such as `[*.{rs,toml}]`.
    /// `comment` holds the text after a `#` on the same line, if any.
    Section {
        name: String,
        comment: Option<String>,
    },
    /// A `key = value` assignment. Key and value are trimmed.
    /// `comment` holds the inline comment after the value, if any.
    Entry {
        key: String,
        value: String,
        comment: Option<String>,
    },
    /// A line carrying only a comment. The associated `String` is the comment text.
    Comment(String),
    /// A non-blank line that matches none of the rules. Ignored by the parser.
    Unrecognized,
}

/// A classified line together with its 1-based position in the input.
#[derive(Debug, Clone)]
pub struct Line {
    pub kind: LineKind,
    pub line_number: usize,
}

impl Line {
    pub fn new(kind: LineKind, line_number: usize) -> Line {
        Line { kind, line_number }
    }
}

/// Classifies a single line of text.
///
/// This is a pure function: the same line always yields the same `LineKind`,
/// independent of what came before it.
pub fn classify(line: &str) -> LineKind {
    if line.trim().is_empty() {
        return LineKind::Blank;
    }

    if let Some(captures) = SECTION_REGEX.captures(line.trim()) {
        return LineKind::Section {
            name: captures["name"].trim().to_string(),
            comment: trailing_comment(line),
        };
    }

    if let Some(captures) = ENTRY_REGEX.captures(line) {
        return LineKind::Entry {
            key: captures["key"].trim().to_string(),
            value: captures["value"].trim().to_string(),
            comment: trailing_comment(line),
        };
    }

    match trailing_comment(line) {
        Some(comment) => LineKind::Comment(comment),
        None => LineKind::Unrecognized,
    }
}

/// Extracts the comment that follows the first `#` on a line.
///
/// Leading whitespace after the `#` is dropped; the rest of the line is kept
/// verbatim. Returns `None` when there is no `#` or nothing follows it.
pub fn trailing_comment(line: &str) -> Option<String> {
    COMMENT_REGEX
        .captures(line)
        .map(|captures| captures["comment"].to_string())
}

/// Turns an ordered sequence of lines into classified [`Line`]s.
///
/// The lexer is lazy: it pulls one line from the underlying iterator per call
/// to `next`, so it works equally over an in-memory slice and a stream.
pub struct Lexer<I> {
    lines: I,
    position: usize,
}

impl<I, S> Lexer<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    pub fn new(lines: I) -> Self {
        Self { lines, position: 0 }
    }

    pub fn lex(self) -> Vec<Line> {
        self.collect()
    }
}

impl<I, S> Iterator for Lexer<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = Line;

    fn next(&mut self) -> Option<Line> {
        let text = self.lines.next()?;
        self.position += 1;
        Some(Line::new(classify(text.as_ref()), self.position))
    }
}
