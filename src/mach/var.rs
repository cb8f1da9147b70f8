use super::Val;
use crate::error;
use crate::lang::Error;
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// Written only by `LET`. Nothing is ever removed.

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<Rc<str>, Val>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn fetch(&self, var_name: &str) -> Result<Val> {
        match self.vars.get(var_name) {
            Some(val) => Ok(val.clone()),
            None => Err(error!(UndefinedVariable; format!("`{}`", var_name))),
        }
    }

    pub fn store(&mut self, var_name: &Rc<str>, value: Val) {
        self.vars.insert(var_name.clone(), value);
    }

    /// All bindings ordered by name.
    pub fn sorted(&self) -> Vec<(&Rc<str>, &Val)> {
        let mut vars: Vec<(&Rc<str>, &Val)> = self.vars.iter().collect();
        vars.sort_by(|a, b| a.0.cmp(b.0));
        vars
    }
}
