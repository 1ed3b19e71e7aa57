//! Packed member descriptor parser.
//!
//! ```text
//! descriptor   := class_part "->" member_part
//! class_part   := "L" <path/with/slashes> ";"
//! member_part  := <name> "(" {type} ")" return_type
//!               | <name> ":" type
//! type         := "["* (primitive | class_part)
//! return_type  := type | "V"
//! ```
//!
//! Parameter types are rendered in source form (`I` → `int`, `[Lfoo/Bar;` →
//! `foo.Bar[]`). Return and field types are validated but not kept.

use crate::base::{Cursor, CursorOutOfBounds};
use crate::parser::errors::{ErrorCode, SignatureSyntaxError};
use crate::syntax::{MemberReference, split_qualified_name};

/// Parse a packed descriptor such as `Lfoo/bar/Baz;->foo(ILfoo/Qux;)V`.
pub fn parse_descriptor(descriptor: &str) -> Result<MemberReference, SignatureSyntaxError> {
    DescriptorParser::new(descriptor).parse()
}

/// Source-form name of a primitive type character.
pub fn primitive_name(c: char) -> Option<&'static str> {
    let name = match c {
        'Z' => "boolean",
        'B' => "byte",
        'C' => "char",
        'S' => "short",
        'I' => "int",
        'J' => "long",
        'F' => "float",
        'D' => "double",
        _ => return None,
    };
    Some(name)
}

/// Where a type appears; only return types may be `V`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TypePosition {
    Value,
    Return,
}

struct DescriptorParser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> DescriptorParser<'a> {
    fn new(descriptor: &'a str) -> Self {
        Self {
            cursor: Cursor::new(descriptor),
        }
    }

    fn parse(mut self) -> Result<MemberReference, SignatureSyntaxError> {
        self.parse_descriptor().map_err(|err| match err {
            Failure::Syntax(err) => err,
            Failure::OutOfBounds(overrun) => {
                SignatureSyntaxError::end_of_input(&self.cursor, overrun)
            }
        })
    }

    fn parse_descriptor(&mut self) -> Result<MemberReference, Failure> {
        let qualified_class = self.parse_class_part()?;
        let (package, class) = split_qualified_name(&qualified_class);

        if self.cursor.peek_n(2).ok() != Some("->") {
            return Err(self.error(ErrorCode::E0103));
        }
        self.cursor.next_n(2)?;

        let paren = self.cursor.find('(');
        let colon = self.cursor.find(':');
        match (paren, colon) {
            (Some(p), c) if c.is_none_or(|c| p < c) => {
                let member = self.cursor.next_n(p)?;
                self.cursor.next()?;
                let mut parameter_types = Vec::new();
                while self.cursor.peek()? != ')' {
                    parameter_types.push(self.parse_type(TypePosition::Value)?);
                }
                self.cursor.next()?;
                self.parse_type(TypePosition::Return)?;
                Ok(MemberReference::with_parameter_types(
                    package,
                    class,
                    member,
                    parameter_types,
                ))
            }
            (_, Some(c)) => {
                let member = self.cursor.next_n(c)?;
                self.cursor.next()?;
                self.parse_type(TypePosition::Value)?;
                Ok(MemberReference::new(package, class, member, String::new()))
            }
            (_, None) => {
                let offset = u32::from(self.cursor.offset());
                Err(Failure::Syntax(SignatureSyntaxError::at(
                    &self.cursor,
                    ErrorCode::E0104,
                    format!("cannot parse member at offset {offset}"),
                )))
            }
        }
    }

    /// `L<path>;`, returned in dotted form.
    fn parse_class_part(&mut self) -> Result<String, Failure> {
        if self.cursor.peek()? != 'L' {
            return Err(self.error(ErrorCode::E0101));
        }
        self.cursor.next()?;
        self.parse_class_name()
    }

    /// Class path after the leading `L`, up to and including `;`.
    fn parse_class_name(&mut self) -> Result<String, Failure> {
        let Some(end) = self.cursor.find(';') else {
            return Err(self.error(ErrorCode::E0102));
        };
        let path = self.cursor.next_n(end)?;
        self.cursor.next()?;
        Ok(path.replace('/', "."))
    }

    fn parse_type(&mut self, position: TypePosition) -> Result<String, Failure> {
        let mut dimensions = 0;
        while self.cursor.peek()? == '[' {
            self.cursor.next()?;
            dimensions += 1;
        }

        let c = self.cursor.peek()?;
        let mut rendered = if let Some(name) = primitive_name(c) {
            self.cursor.next()?;
            name.to_string()
        } else if c == 'L' {
            self.cursor.next()?;
            self.parse_class_name()?
        } else if c == 'V' && position == TypePosition::Return && dimensions == 0 {
            self.cursor.next()?;
            "void".to_string()
        } else {
            return Err(Failure::Syntax(SignatureSyntaxError::at(
                &self.cursor,
                ErrorCode::E0105,
                format!("unknown type character '{c}'"),
            )));
        };

        for _ in 0..dimensions {
            rendered.push_str("[]");
        }
        Ok(rendered)
    }

    fn error(&self, code: ErrorCode) -> Failure {
        Failure::Syntax(SignatureSyntaxError::with_default_message(&self.cursor, code))
    }
}

/// Internal failure; cursor overruns are translated at the parser boundary.
enum Failure {
    Syntax(SignatureSyntaxError),
    OutOfBounds(CursorOutOfBounds),
}

impl From<CursorOutOfBounds> for Failure {
    fn from(err: CursorOutOfBounds) -> Self {
        Failure::OutOfBounds(err)
    }
}
