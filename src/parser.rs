use crate::ast::{Entry, IniDocument, IniSection};
use crate::lexer::{Lexer, Line, LineKind};
use log::{debug, trace};

/// Which section receives the entries and comments of the lines being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    Global,
    Section(usize),
}

/// Builds an [`IniDocument`] from an ordered sequence of lines.
///
/// The parser is permissive: it never fails. Lines it cannot classify are
/// skipped, so arbitrary text yields a document with only a global section.
///
/// Comments attach to the next non-blank line. A blank line drops any comment
/// waiting to be attached.
pub struct Parser<I> {
    lexer: Lexer<I>,
    document: IniDocument,
}

impl<I, S> Parser<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    pub fn new(lines: I) -> Self {
        Self {
            lexer: Lexer::new(lines),
            document: IniDocument::new(),
        }
    }

    /// Consumes every line and returns the finished document.
    pub fn parse_document(mut self) -> IniDocument {
        let mut cursor = Cursor::Global;
        let mut pending_comment: Option<String> = None;

        while let Some(Line { kind, line_number }) = self.lexer.next() {
            trace!("line {line_number}: {kind:?}");
            match kind {
                LineKind::Blank => pending_comment = None,
                LineKind::Section { name, comment } => {
                    let comments = comment_bundle(comment, pending_comment.take());
                    let (index, seen) = self.document.open_section(name, comments);
                    if seen {
                        debug!(
                            "line {line_number}: section [{}] repeated, merging into earlier header",
                            self.current(Cursor::Section(index)).name()
                        );
                    }
                    cursor = Cursor::Section(index);
                }
                LineKind::Entry {
                    key,
                    value,
                    comment,
                } => {
                    let comments = comment_bundle(comment, pending_comment.take());
                    let entry = Entry::new(key, value, comments);
                    let section = self.current(cursor);
                    if section.contains_key(entry.key()) {
                        debug!(
                            "line {line_number}: key `{}` reassigned in section [{}]",
                            entry.key(),
                            section.name()
                        );
                    }
                    section.insert_entry(entry);
                }
                LineKind::Comment(text) => {
                    self.current(cursor).push_comment(&text);
                    pending_comment = Some(text);
                }
                LineKind::Unrecognized => {
                    trace!("line {line_number}: ignored");
                }
            }
        }

        self.document
    }

    fn current(&mut self, cursor: Cursor) -> &mut IniSection {
        match cursor {
            Cursor::Global => self.document.global_mut(),
            Cursor::Section(index) => self.document.section_at_mut(index),
        }
    }
}

/// Orders the comments attached to one line: its own trailing comment first,
/// then the comment line carried over from directly above.
fn comment_bundle(own: Option<String>, pending: Option<String>) -> Vec<String> {
    own.into_iter().chain(pending).collect()
}
