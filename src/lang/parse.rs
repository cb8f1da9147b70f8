use super::{ast::*, Error, Line, LineNumber};
use crate::error;
use std::num::{IntErrorKind, ParseIntError};

type Result<T> = std::result::Result<T, Error>;

/// Parses one raw source line into a numbered statement.
///
/// The line must start with a line number followed by whitespace.
/// The keyword runs up to the first blank or double quote so that
/// `PRINT"HI"` needs no separator.
pub fn parse(s: &str) -> Result<Option<Line>> {
    if s.is_empty() {
        return Ok(None);
    }
    let (number, rest) = line_number(s)?;
    let (keyword, remainder) = keyword(rest);
    let statement = match keyword {
        "PRINT" => r#print(remainder),
        "LET" => r#let(remainder).map(Some),
        "GOTO" => r#goto(remainder).map(Some),
        _ => Err(error!(UnknownInstruction; format!("`{}` `{}`", keyword, remainder))),
    };
    match statement {
        Ok(Some(statement)) => Ok(Some(Line::new(number, statement))),
        Ok(None) => Ok(None),
        Err(e) => Err(e.in_line_number(number)),
    }
}

fn is_basic_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn line_number(s: &str) -> Result<(LineNumber, &str)> {
    let idx = match s.find(is_basic_whitespace) {
        Some(idx) => idx,
        None => return Err(error!(MissingLineNumber)),
    };
    let digits = &s[..idx];
    match digits.parse::<LineNumber>() {
        Ok(number) if number >= 0 => Ok((number, s[idx..].trim_start())),
        Ok(_) => Err(error!(BadLineNumber; format!("`{}`", digits))),
        Err(e) => Err(error!(BadLineNumber; format!("`{}`: {}", digits, e))),
    }
}

fn keyword(s: &str) -> (&str, &str) {
    match s.find(|c: char| is_basic_whitespace(c) || c == '"') {
        Some(idx) => (&s[..idx], s[idx..].trim()),
        None => (s, ""),
    }
}

/// Blank or a quoted literal. A blank reads as the empty string.
fn is_string(s: &str) -> bool {
    let s = s.trim();
    s.is_empty() || (s.len() >= 2 && s.starts_with('"') && s.ends_with('"'))
}

fn unquote(s: &str) -> &str {
    let s = s.trim();
    if s.len() <= 2 {
        ""
    } else {
        &s[1..s.len() - 1]
    }
}

fn int_error(s: &str, e: ParseIntError) -> Error {
    let msg = format!("`{}`: {}", s, e);
    match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => error!(Overflow; msg),
        _ => error!(SyntaxError; msg),
    }
}

fn r#print(s: &str) -> Result<Option<Statement>> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }
    let no_newline = s.ends_with(';');
    let mut operands: Vec<Expression> = vec![];
    let mut literal = String::new();
    for segment in s.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        if is_string(segment) {
            literal.push_str(unquote(segment));
        } else if segment.contains('(') {
            literal.push_str(&function(segment)?);
        } else {
            if !literal.is_empty() {
                operands.push(Expression::String(std::mem::take(&mut literal).into()));
            }
            operands.push(Expression::Var(segment.into()));
        }
    }
    if !literal.is_empty() {
        operands.push(Expression::String(literal.into()));
    }
    Ok(Some(Statement::Print(operands, no_newline)))
}

/// Functions are folded into literal text at parse time.
fn function(segment: &str) -> Result<String> {
    let args = match segment.strip_prefix("TAB(") {
        Some(args) => args,
        None => {
            return Err(error!(IllegalFunctionCall; format!("UNHANDLED FUNCTION `{}`", segment)))
        }
    };
    let n = match args.find(')') {
        None | Some(0) => return Err(error!(SyntaxError; "INCOMPLETE TAB")),
        Some(idx) => match args[..idx].parse::<u16>() {
            Ok(n) => n,
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => {
                let msg = format!("TAB `{}` ABOVE {}", &args[..idx], u16::MAX);
                return Err(error!(Overflow; msg));
            }
            Err(e) => return Err(error!(SyntaxError; format!("INCOMPLETE TAB; {}", e))),
        },
    };
    Ok(" ".repeat(usize::from(n)))
}

fn r#let(s: &str) -> Result<Statement> {
    let idx = match s.find('=') {
        Some(idx) => idx,
        None => return Err(error!(SyntaxError; "INVALID LET STATEMENT")),
    };
    let name = s[..idx].trim();
    if name.is_empty() {
        return Err(error!(SyntaxError; "INVALID LET STATEMENT"));
    }
    let value = &s[idx + 1..];
    if is_string(value) {
        return Ok(Statement::Let(
            name.into(),
            Expression::String(unquote(value).into()),
        ));
    }
    let value = value.trim();
    match value.parse::<i32>() {
        Ok(n) => Ok(Statement::Let(name.into(), Expression::Integer(n))),
        Err(e) => Err(int_error(value, e)),
    }
}

fn r#goto(s: &str) -> Result<Statement> {
    match s.parse::<LineNumber>() {
        Ok(n) => Ok(Statement::Goto(n)),
        Err(e) => Err(error!(BadLineNumber; format!("GOTO `{}`: {}", s, e))),
    }
}
