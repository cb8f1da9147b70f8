use super::LineNumber;

#[derive(Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    line_number: Option<LineNumber>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line_number(&self) -> Option<LineNumber> {
        self.line_number
    }

    pub fn message_str(&self) -> &str {
        &self.message
    }

    /// Tags the error with the BASIC line it came from.
    /// An error that already knows its line keeps it.
    pub fn in_line_number<T: Into<Option<LineNumber>>>(self, line: T) -> Error {
        if self.line_number.is_some() {
            return self;
        }
        Error {
            line_number: line.into(),
            ..self
        }
    }

    pub fn message<S: AsRef<str>>(self, message: S) -> Error {
        let message = message.as_ref();
        let message = if self.message.is_empty() {
            message.to_string()
        } else {
            format!("{}; {}", self.message, message)
        };
        Error { message, ..self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    Break = 0,
    SyntaxError = 2,
    IllegalFunctionCall = 5,
    Overflow = 6,
    UndefinedLine = 8,
    InternalError = 51,
    MissingLineNumber = 70,
    BadLineNumber = 71,
    UnknownInstruction = 72,
    UndefinedVariable = 73,
    DuplicateLineNumber = 74,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        use ErrorCode::*;
        match self {
            Break => "BREAK",
            SyntaxError => "SYNTAX ERROR",
            IllegalFunctionCall => "ILLEGAL FUNCTION CALL",
            Overflow => "OVERFLOW",
            UndefinedLine => "UNDEFINED LINE",
            InternalError => "INTERNAL ERROR",
            MissingLineNumber => "MISSING LINE NUMBER",
            BadLineNumber => "BAD LINE NUMBER",
            UnknownInstruction => "UNKNOWN INSTRUCTION",
            UndefinedVariable => "UNDEFINED VARIABLE",
            DuplicateLineNumber => "DUPLICATE LINE NUMBER",
        }
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut suffix = String::new();
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" IN {}", line_number));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        write!(f, "{}{}", self.code.as_str(), suffix)
    }
}

impl std::error::Error for Error {}
