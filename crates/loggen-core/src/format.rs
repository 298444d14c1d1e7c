//! Message templates
//!
//! A template is literal text with `{placeholder}` fields, parsed once when
//! it is configured so a bad template is reported at `set_format` time
//! instead of on the first emitted record. `{{` and `}}` write literal
//! braces.
//!
//! | placeholder   | renders                                     |
//! |---------------|---------------------------------------------|
//! | `{timestamp}` | local time, `2024-01-31 13:05:09,042`       |
//! | `{level}`     | level name (`INFO`)                         |
//! | `{levelno}`   | level value (`20`)                          |
//! | `{file}`      | file name of the emitting call site         |
//! | `{path}`      | full source path of the emitting call site  |
//! | `{line}`      | line of the emitting call site              |
//! | `{name}`      | logger name                                 |
//! | `{message}`   | the message                                 |

use crate::errors::{LogGenError, Result};
use chrono::{DateTime, Local};
use loggen_core_types::schema::{
    DEFAULT_FORMAT, PLACEHOLDER_FILE, PLACEHOLDER_LEVEL, PLACEHOLDER_LEVELNO, PLACEHOLDER_LINE,
    PLACEHOLDER_MESSAGE, PLACEHOLDER_NAME, PLACEHOLDER_PATH, PLACEHOLDER_TIMESTAMP,
    TIMESTAMP_FORMAT,
};
use loggen_core_types::Level;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Timestamp,
    Level,
    LevelNo,
    File,
    Path,
    Line,
    Name,
    Message,
}

impl Field {
    fn from_name(name: &str) -> Option<Field> {
        match name {
            PLACEHOLDER_TIMESTAMP => Some(Field::Timestamp),
            PLACEHOLDER_LEVEL => Some(Field::Level),
            PLACEHOLDER_LEVELNO => Some(Field::LevelNo),
            PLACEHOLDER_FILE => Some(Field::File),
            PLACEHOLDER_PATH => Some(Field::Path),
            PLACEHOLDER_LINE => Some(Field::Line),
            PLACEHOLDER_NAME => Some(Field::Name),
            PLACEHOLDER_MESSAGE => Some(Field::Message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(Field),
}

/// A parsed message template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

/// One log record as seen by a template
#[derive(Debug, Clone)]
pub struct Record<'a> {
    pub timestamp: DateTime<Local>,
    pub level: Level,
    pub path: &'a str,
    pub line: Option<u32>,
    pub logger: &'a str,
    pub message: &'a str,
}

fn invalid(template: &str, reason: impl Into<String>) -> LogGenError {
    LogGenError::InvalidFormat {
        template: template.to_string(),
        reason: reason.into(),
    }
}

impl Template {
    /// Parse a template
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` for unknown placeholders, an unclosed `{` or
    /// an unmatched `}`.
    pub fn parse(source: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    literal.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    literal.push('}');
                }
                '{' => {
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some('{') | None => {
                                return Err(invalid(source, "unclosed placeholder"))
                            }
                            Some(ch) => name.push(ch),
                        }
                    }
                    let field = Field::from_name(&name).ok_or_else(|| {
                        invalid(source, format!("unknown placeholder {{{}}}", name))
                    })?;
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Field(field));
                }
                '}' => return Err(invalid(source, "unmatched '}'")),
                other => literal.push(other),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    /// The template text as configured
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Render a record, without a trailing newline
    pub fn render<W: fmt::Write + ?Sized>(&self, record: &Record<'_>, out: &mut W) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.write_str(text)?,
                Segment::Field(Field::Timestamp) => {
                    write!(out, "{}", record.timestamp.format(TIMESTAMP_FORMAT))?
                }
                Segment::Field(Field::Level) => out.write_str(record.level.name())?,
                Segment::Field(Field::LevelNo) => write!(out, "{}", record.level.value())?,
                Segment::Field(Field::File) => {
                    let file = Path::new(record.path)
                        .file_name()
                        .and_then(|name| name.to_str())
                        .unwrap_or(record.path);
                    out.write_str(file)?
                }
                Segment::Field(Field::Path) => out.write_str(record.path)?,
                Segment::Field(Field::Line) => match record.line {
                    Some(line) => write!(out, "{}", line)?,
                    None => out.write_str("?")?,
                },
                Segment::Field(Field::Name) => out.write_str(record.logger)?,
                Segment::Field(Field::Message) => out.write_str(record.message)?,
            }
        }
        Ok(())
    }
}

impl Default for Template {
    fn default() -> Self {
        Self {
            source: DEFAULT_FORMAT.to_string(),
            segments: vec![
                Segment::Field(Field::Timestamp),
                Segment::Literal(" - ".to_string()),
                Segment::Field(Field::Level),
                Segment::Literal(" (".to_string()),
                Segment::Field(Field::File),
                Segment::Literal(") : ".to_string()),
                Segment::Field(Field::Message),
            ],
        }
    }
}

/// Line formatter shared by every sink of one logger
#[derive(Debug, Clone)]
pub struct TemplateFormat {
    template: Arc<Template>,
}

impl TemplateFormat {
    pub fn new(template: Template) -> Self {
        Self {
            template: Arc::new(template),
        }
    }

    /// Render `record` as one newline-terminated line
    pub fn format_line(&self, record: &Record<'_>) -> String {
        let mut line = String::new();
        // Writing into a String cannot fail.
        let _ = self.template.render(record, &mut line);
        line.push('\n');
        line
    }
}
