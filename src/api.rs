use crate::ast::IniDocument;
use crate::error::IniError;
use crate::parser::Parser;
use crate::serialization::{to_value, Value};
use log::debug;
use std::convert::Infallible;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

/// Parses an ordered sequence of lines into an [`IniDocument`].
///
/// Lines must already be split on their terminators. This never fails:
/// lines that are not headers, entries or comments are skipped.
pub fn parse_lines<I, S>(lines: I) -> IniDocument
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Parser::new(lines.into_iter()).parse_document()
}

/// Parses INI text, splitting it on `\n` and `\r\n`.
pub fn parse_str(source: &str) -> IniDocument {
    parse_lines(source.lines())
}

/// Parses INI text from a reader, one line at a time.
///
/// # Errors
/// Returns `IniError::Io` if reading fails or the input is not valid UTF-8.
/// Lines read before the failure are discarded.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<IniDocument, IniError> {
    read_document(reader, None)
}

/// Opens and parses the file at `path`.
///
/// # Errors
/// Returns `IniError::Io` if the file cannot be opened or read.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<IniDocument, IniError> {
    let path = path.as_ref();
    debug!("parsing {}", path.display());
    let file = File::open(path).map_err(|e| IniError::io(Some(path.to_path_buf()), e))?;
    read_document(BufReader::new(file), Some(path))
}

fn read_document<R: BufRead>(reader: R, path: Option<&Path>) -> Result<IniDocument, IniError> {
    let mut failure = None;
    let lines = reader.lines().map_while(|line| match line {
        Ok(line) => Some(line),
        Err(e) => {
            failure = Some(e);
            None
        }
    });
    let document = parse_lines(lines);

    match failure {
        Some(e) => Err(IniError::io(path.map(Path::to_path_buf), e)),
        None => Ok(document),
    }
}

impl FromStr for IniDocument {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_str(s))
    }
}

impl IniDocument {
    /// Converts the document into a plain `section -> key -> value` view.
    ///
    /// The global section's entries appear under `global`, named sections
    /// under `sections`. Comments and overwritten values are not part of
    /// this view; serialize the document itself to keep them.
    #[must_use]
    pub fn to_value(&self) -> Value {
        to_value(self)
    }

    /// Serializes the plain data view into a pretty-printed JSON string.
    ///
    /// # Errors
    /// Returns a `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.to_value())
    }

    /// Serializes the plain data view into a YAML string.
    ///
    /// # Errors
    /// Returns a `serde_yaml::Error` if serialization fails.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(&self.to_value())
    }
}
