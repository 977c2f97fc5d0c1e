//! Variables model.
//!
//! Holds the scopes of the selected frame and a filter of variable names to
//! hide. Setting identical scopes again is not a change and leaves the
//! revision untouched.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A variable as reported by the debugger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    #[serde(rename = "type", default)]
    pub type_name: String,
    pub value: String,
    #[serde(default)]
    pub evaluate_name: String,
    /// Non-zero when the variable has children
    #[serde(default)]
    pub variables_reference: u64,
    #[serde(default)]
    pub children: Vec<Variable>,
}

impl Variable {
    pub fn has_children(&self) -> bool {
        self.variables_reference > 0 || !self.children.is_empty()
    }
}

/// A named group of variables (locals, globals, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scope {
    pub name: String,
    #[serde(default)]
    pub variables: Vec<Variable>,
}

/// A variable value converted to a primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertedValue {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Converts a variable to a primitive according to its type.
///
/// `int` and `float` are parsed (falling back to the raw text), `bool` keeps
/// its text, `str` loses its surrounding quotes and any other type converts
/// to its type name.
pub fn convert_type(variable: &Variable) -> ConvertedValue {
    let value = variable.value.as_str();
    match variable.type_name.as_str() {
        "int" => value
            .trim()
            .parse()
            .map(ConvertedValue::Int)
            .unwrap_or_else(|_| ConvertedValue::Text(value.to_string())),
        "float" => value
            .trim()
            .parse()
            .map(ConvertedValue::Float)
            .unwrap_or_else(|_| ConvertedValue::Text(value.to_string())),
        "bool" => ConvertedValue::Text(value.to_string()),
        "str" => ConvertedValue::Text(strip_quotes(value).to_string()),
        other => ConvertedValue::Text(other.to_string()),
    }
}

fn strip_quotes(value: &str) -> &str {
    let mut chars = value.chars();
    match (chars.next(), chars.next_back()) {
        (Some(first), Some(last)) if first == last && (first == '\'' || first == '"') => chars.as_str(),
        _ => value,
    }
}

#[derive(Debug, Clone, Default)]
pub struct VariablesModel {
    scopes: Vec<Scope>,
    filter: HashSet<String>,
    revision: u64,
}

impl VariablesModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the scopes. Returns `false` (and does not count as a change)
    /// when they equal the current ones.
    pub fn set_scopes(&mut self, scopes: Vec<Scope>) -> bool {
        if self.scopes == scopes {
            return false;
        }
        self.scopes = scopes;
        self.revision += 1;
        true
    }

    pub fn scopes(&self) -> &[Scope] {
        &self.scopes
    }

    /// Variables of a scope that pass the filter.
    pub fn visible_variables<'a>(&'a self, scope: &'a Scope) -> impl Iterator<Item = &'a Variable> + 'a {
        scope
            .variables
            .iter()
            .filter(move |v| !self.filter.contains(&v.name))
    }

    /// Number of rows a flat table of all scopes needs.
    pub fn visible_count(&self) -> usize {
        self.scopes.iter().map(|s| self.visible_variables(s).count()).sum()
    }

    /// Looks up a variable by scope index and name.
    pub fn find(&self, scope: usize, name: &str) -> Option<&Variable> {
        self.scopes.get(scope)?.variables.iter().find(|v| v.name == name)
    }

    pub fn set_filter(&mut self, filter: HashSet<String>) {
        if self.filter != filter {
            self.filter = filter;
            self.revision += 1;
        }
    }

    pub fn filter(&self) -> &HashSet<String> {
        &self.filter
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(name: &str, type_name: &str, value: &str) -> Variable {
        Variable {
            name: name.into(),
            type_name: type_name.into(),
            value: value.into(),
            evaluate_name: name.into(),
            variables_reference: 0,
            children: vec![],
        }
    }

    #[test]
    fn test_convert_type() {
        assert_eq!(convert_type(&var("a", "int", "42")), ConvertedValue::Int(42));
        assert_eq!(convert_type(&var("b", "float", "1.5")), ConvertedValue::Float(1.5));
        assert_eq!(convert_type(&var("c", "bool", "True")), ConvertedValue::Text("True".into()));
        assert_eq!(convert_type(&var("d", "str", "'hi'")), ConvertedValue::Text("hi".into()));
        assert_eq!(convert_type(&var("e", "list", "[1, 2]")), ConvertedValue::Text("list".into()));
        assert_eq!(convert_type(&var("f", "int", "nope")), ConvertedValue::Text("nope".into()));
    }

    #[test]
    fn test_set_equal_scopes_is_not_a_change() {
        let mut model = VariablesModel::new();
        let scopes = vec![Scope { name: "Locals".into(), variables: vec![var("x", "int", "1")] }];
        assert!(model.set_scopes(scopes.clone()));
        let rev = model.revision();
        assert!(!model.set_scopes(scopes));
        assert_eq!(model.revision(), rev);
    }

    #[test]
    fn test_filter_hides_variables() {
        let mut model = VariablesModel::new();
        model.set_scopes(vec![Scope {
            name: "Locals".into(),
            variables: vec![var("x", "int", "1"), var("y", "int", "2")],
        }]);
        model.set_filter(["x".to_string()].into_iter().collect());
        assert_eq!(model.visible_count(), 1);
        assert!(model.find(0, "x").is_some());
    }
}
