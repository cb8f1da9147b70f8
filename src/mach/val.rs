use std::rc::Rc;

/// ## Runtime value
///
/// Immutable. A variable is rebound to a new `Val`, never edited in place.
#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    String(Rc<str>),
    Integer(i32),
}

impl Val {
    pub fn is_string(&self) -> bool {
        matches!(self, Val::String(_))
    }

    /// The value as it would be written in source, strings quoted.
    pub fn literal(&self) -> String {
        match self {
            Val::String(s) => format!("\"{}\"", s),
            Val::Integer(n) => n.to_string(),
        }
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::String(s) => write!(f, "{}", s),
            Val::Integer(n) => write!(f, "{}", n),
        }
    }
}
