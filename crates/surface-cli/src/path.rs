//! Dotted call paths such as `createTrackBank(8, 2, 0).getTrack(1).getVolume()`
//!
//! A segment is a method name optionally followed by a parenthesised
//! argument list. Arguments are integers, floats, `true`, `false`, `null`
//! or double-quoted strings (`\"` and `\\` escape inside quotes).
//!
//! Tokens come from a logos lexer; `Parser` walks the token stream.

use std::fmt;

use logos::Logos;
use surface_sdk::HostValue;
use thiserror::Error;

/// Errors from parsing a call path
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    #[error("empty call path")]
    Empty,

    #[error("expected a method name at column {0}")]
    ExpectedName(usize),

    #[error("unterminated argument list starting at column {0}")]
    UnterminatedArgs(usize),

    #[error("unterminated string starting at column {0}")]
    UnterminatedString(usize),

    #[error("invalid argument `{text}` at column {column}")]
    InvalidArgument { text: String, column: usize },

    #[error("unexpected `{found}` at column {column}")]
    Unexpected { found: char, column: usize },
}

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
enum Token {
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token(",")]
    Comma,

    #[token(".")]
    Dot,

    #[token("true")]
    True,

    #[token("false")]
    False,

    #[token("null")]
    Null,

    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*", |lex| lex.slice().to_string())]
    Ident(String),

    #[regex(r"-?[0-9]+", parse_int)]
    Int(i64),

    #[regex(r"-?[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    Float(f64),

    #[regex(r#""([^"\\]|\\.)*""#, parse_string)]
    Str(String),

    // Opening quote without a closing one; a closed string always matches
    // `Str` first because it is longer.
    #[regex(r#""([^"\\]|\\.)*"#)]
    OpenStr,
}

fn parse_int(lex: &mut logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

fn parse_float(lex: &mut logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok().filter(|f: &f64| f.is_finite())
}

fn parse_string(lex: &mut logos::Lexer<Token>) -> Option<String> {
    let s = lex.slice();
    let mut out = String::with_capacity(s.len());
    let mut chars = s[1..s.len() - 1].chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
        } else {
            out.push(c);
        }
    }
    Some(out)
}

/// A token with its 1-based column and source text
struct Spanned<'a> {
    token: Token,
    column: usize,
    text: &'a str,
}

fn is_numeric_start(c: char) -> bool {
    c.is_ascii_digit() || c == '-'
}

fn column_of(input: &str, offset: usize) -> usize {
    input[..offset].chars().count() + 1
}

fn tokenize(input: &str) -> Result<Vec<Spanned<'_>>, PathError> {
    let mut lexer = Token::lexer(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let range = lexer.span();
        let column = column_of(input, range.start);
        let text = &input[range];
        match result {
            Ok(Token::OpenStr) => return Err(PathError::UnterminatedString(column)),
            Ok(token) => tokens.push(Spanned {
                token,
                column,
                text,
            }),
            // A numeric slice whose callback rejected it (overflow)
            Err(()) if text.len() > 1 && text.starts_with(is_numeric_start) => {
                return Err(PathError::InvalidArgument {
                    text: text.to_string(),
                    column,
                })
            }
            Err(()) => {
                return Err(PathError::Unexpected {
                    found: text.chars().next().unwrap_or('\0'),
                    column,
                })
            }
        }
    }
    Ok(tokens)
}

/// One `name(args)` step
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub method: String,
    pub args: Vec<HostValue>,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.method)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match arg {
                HostValue::String(s) => write!(f, "{:?}", s)?,
                other => write!(f, "{}", other)?,
            }
        }
        write!(f, ")")
    }
}

/// Parse a dotted call path
pub fn parse(input: &str) -> Result<Vec<Segment>, PathError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(PathError::Empty);
    }
    let mut parser = Parser {
        tokens,
        pos: 0,
        end_column: input.chars().count() + 1,
    };

    let mut segments = vec![parser.segment()?];
    while let Some(next) = parser.peek() {
        match next.token {
            Token::Dot => {
                parser.pos += 1;
                segments.push(parser.segment()?);
            }
            _ => return Err(parser.unexpected()),
        }
    }
    Ok(segments)
}

struct Parser<'a> {
    tokens: Vec<Spanned<'a>>,
    pos: usize,
    end_column: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&Spanned<'a>> {
        self.tokens.get(self.pos)
    }

    fn column(&self) -> usize {
        self.peek().map_or(self.end_column, |t| t.column)
    }

    fn unexpected(&self) -> PathError {
        match self.peek() {
            Some(t) => PathError::Unexpected {
                found: t.text.chars().next().unwrap_or('\0'),
                column: t.column,
            },
            None => PathError::ExpectedName(self.end_column),
        }
    }

    fn segment(&mut self) -> Result<Segment, PathError> {
        let method = match self.peek() {
            Some(Spanned {
                token: Token::Ident(name),
                ..
            }) => name.clone(),
            _ => return Err(PathError::ExpectedName(self.column())),
        };
        self.pos += 1;

        let args = match self.peek() {
            Some(Spanned {
                token: Token::LParen,
                ..
            }) => self.args()?,
            _ => Vec::new(),
        };
        Ok(Segment { method, args })
    }

    fn args(&mut self) -> Result<Vec<HostValue>, PathError> {
        let open = self.column();
        self.pos += 1;
        let mut args = Vec::new();

        if matches!(self.peek().map(|t| &t.token), Some(Token::RParen)) {
            self.pos += 1;
            return Ok(args);
        }

        loop {
            args.push(self.arg(open)?);
            match self.peek().map(|t| &t.token) {
                Some(Token::Comma) => self.pos += 1,
                Some(Token::RParen) => {
                    self.pos += 1;
                    return Ok(args);
                }
                Some(_) => return Err(self.unexpected()),
                None => return Err(PathError::UnterminatedArgs(open)),
            }
        }
    }

    fn arg(&mut self, open: usize) -> Result<HostValue, PathError> {
        let Some(spanned) = self.peek() else {
            return Err(PathError::UnterminatedArgs(open));
        };
        let value = match &spanned.token {
            Token::True => HostValue::Bool(true),
            Token::False => HostValue::Bool(false),
            Token::Null => HostValue::Null,
            Token::Int(i) => HostValue::Int(*i),
            Token::Float(f) => HostValue::Float(*f),
            Token::Str(s) => HostValue::string(s),
            Token::Ident(_) => {
                return Err(PathError::InvalidArgument {
                    text: spanned.text.to_string(),
                    column: spanned.column,
                })
            }
            _ => return Err(self.unexpected()),
        };
        self.pos += 1;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chain() {
        let path = parse("createTrackBank(8, 2, 0).getTrack(1).getVolume()").unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0].method, "createTrackBank");
        assert_eq!(
            path[0].args,
            vec![HostValue::Int(8), HostValue::Int(2), HostValue::Int(0)]
        );
        assert_eq!(path[1].args, vec![HostValue::Int(1)]);
        assert!(path[2].args.is_empty());
    }

    #[test]
    fn test_parse_without_parens() {
        let path = parse("getProject.getRootTrackGroup").unwrap();
        assert_eq!(path[0].method, "getProject");
        assert_eq!(path[1].method, "getRootTrackGroup");
    }

    #[test]
    fn test_parse_literals() {
        let path = parse(r#"f(true, false, null, -3, 0.5, "a, \"b\"")"#).unwrap();
        assert_eq!(
            path[0].args,
            vec![
                HostValue::Bool(true),
                HostValue::Bool(false),
                HostValue::Null,
                HostValue::Int(-3),
                HostValue::Float(0.5),
                HostValue::string("a, \"b\""),
            ]
        );
    }

    #[test]
    fn test_keyword_prefix_is_a_name() {
        let path = parse("trueValue().nullable").unwrap();
        assert_eq!(path[0].method, "trueValue");
        assert_eq!(path[1].method, "nullable");
    }

    #[test]
    fn test_segment_display() {
        let path = parse(r#"createCursorTrack("main", 2, 0)"#).unwrap();
        assert_eq!(path[0].to_string(), r#"createCursorTrack("main", 2, 0)"#);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse("  "), Err(PathError::Empty));
        assert_eq!(parse("getX(1"), Err(PathError::UnterminatedArgs(5)));
        assert_eq!(parse("getX(\"a)"), Err(PathError::UnterminatedString(6)));
        assert_eq!(parse("getX().").unwrap_err(), PathError::ExpectedName(8));
        assert_eq!(parse("1abc").unwrap_err(), PathError::ExpectedName(1));
        assert!(matches!(
            parse("getX(abc)"),
            Err(PathError::InvalidArgument { column: 6, .. })
        ));
        assert!(matches!(
            parse("getX() getY()"),
            Err(PathError::Unexpected { found: 'g', column: 8 })
        ));
        assert!(matches!(
            parse("getX(1 @)"),
            Err(PathError::Unexpected { found: '@', column: 8 })
        ));
        assert!(matches!(
            parse("getX(99999999999999999999)"),
            Err(PathError::InvalidArgument { column: 6, .. })
        ));
    }
}
