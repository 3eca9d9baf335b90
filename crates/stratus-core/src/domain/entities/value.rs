//! Property values, references, and intrinsic expressions.
//!
//! A [`Value`] is the tagged union every property, constraint and expression
//! part is made of. Nothing here evaluates anything: values are inert data
//! until the renderer walks them.
//!
//! ```text
//! Value
//! ├── String / Integer / Float / Bool   literals, rendered as-is
//! ├── Ref(Reference)                    {"Ref": "Name"}
//! ├── Intrinsic(Box<Intrinsic>)
//! │    ├── Join                         {"Fn::Join": [sep, [..]]}
//! │    ├── Base64                       {"Fn::Base64": ..}
//! │    ├── PseudoParam                  {"Ref": "AWS::StackName"}
//! │    └── GetAtt                       {"Fn::GetAtt": ["Name", "Attr"]}
//! ├── List(Vec<Value>)
//! └── Map(Vec<(String, Value)>)         insertion ordered
//! ```

use std::fmt;

use crate::domain::value_objects::PseudoParam;

// ── Reference ────────────────────────────────────────────────────────────────

/// Deferred pointer to a parameter or resource, resolved at render time.
///
/// Returned by `Template::add_parameter` / `Template::add_resource`. Use
/// [`Reference::to`] for forward references to entities not registered yet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference {
    target: String,
}

impl Reference {
    /// Reference an entity by logical name.
    pub fn to(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }

    pub fn target_name(&self) -> &str {
        &self.target
    }

    /// `Fn::GetAtt` on the referenced resource.
    pub fn attr(&self, attribute: impl Into<String>) -> Value {
        get_att(self, attribute)
    }
}

impl AsRef<str> for Reference {
    fn as_ref(&self) -> &str {
        &self.target
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ref({})", self.target)
    }
}

// ── Intrinsic ────────────────────────────────────────────────────────────────

/// Composite deferred-evaluation expressions.
#[derive(Debug, Clone, PartialEq)]
pub enum Intrinsic {
    Join { separator: String, parts: Vec<Value> },
    Base64(Value),
    PseudoParam(PseudoParam),
    GetAtt { target: Reference, attribute: String },
}

impl Intrinsic {
    /// The function key this expression renders under.
    pub const fn function_name(&self) -> &'static str {
        match self {
            Self::Join { .. } => "Fn::Join",
            Self::Base64(_) => "Fn::Base64",
            Self::PseudoParam(_) => "Ref",
            Self::GetAtt { .. } => "Fn::GetAtt",
        }
    }
}

// ── Value ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Ref(Reference),
    Intrinsic(Box<Intrinsic>),
    List(Vec<Value>),
    Map(Vec<(String, Value)>),
}

impl Value {
    /// Build an ordered mapping value.
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Build a list value.
    pub fn list<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Visit every reference-like target (Ref and GetAtt) in this tree.
    pub fn references(&self) -> Vec<&str> {
        let mut out = Vec::new();
        collect_references(self, &mut out);
        out
    }
}

fn collect_references<'a>(value: &'a Value, out: &mut Vec<&'a str>) {
    match value {
        Value::Ref(r) => out.push(r.target_name()),
        Value::Intrinsic(expr) => match expr.as_ref() {
            Intrinsic::Join { parts, .. } => {
                parts.iter().for_each(|p| collect_references(p, out));
            }
            Intrinsic::Base64(inner) => collect_references(inner, out),
            Intrinsic::GetAtt { target, .. } => out.push(target.target_name()),
            Intrinsic::PseudoParam(_) => {}
        },
        Value::List(items) => items.iter().for_each(|v| collect_references(v, out)),
        Value::Map(entries) => entries.iter().for_each(|(_, v)| collect_references(v, out)),
        Value::String(_) | Value::Integer(_) | Value::Float(_) | Value::Bool(_) => {}
    }
}

// ── Expression constructors ──────────────────────────────────────────────────

/// `Fn::Join` of `parts` with `separator`.
pub fn join<I, V>(separator: impl Into<String>, parts: I) -> Value
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    Intrinsic::Join {
        separator: separator.into(),
        parts: parts.into_iter().map(Into::into).collect(),
    }
    .into()
}

/// `Fn::Base64` of `inner`.
pub fn base64(inner: impl Into<Value>) -> Value {
    Intrinsic::Base64(inner.into()).into()
}

/// `Ref` to a pseudo parameter.
pub fn pseudo(param: PseudoParam) -> Value {
    Intrinsic::PseudoParam(param).into()
}

/// `Fn::GetAtt` on a resource attribute.
pub fn get_att(target: &Reference, attribute: impl Into<String>) -> Value {
    Intrinsic::GetAtt {
        target: target.clone(),
        attribute: attribute.into(),
    }
    .into()
}

// ── Conversions ──────────────────────────────────────────────────────────────

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<u16> for Value {
    fn from(n: u16) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Reference> for Value {
    fn from(r: Reference) -> Self {
        Self::Ref(r)
    }
}

impl From<&Reference> for Value {
    fn from(r: &Reference) -> Self {
        Self::Ref(r.clone())
    }
}

impl From<Intrinsic> for Value {
    fn from(expr: Intrinsic) -> Self {
        Self::Intrinsic(Box::new(expr))
    }
}

impl From<PseudoParam> for Value {
    fn from(param: PseudoParam) -> Self {
        pseudo(param)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::list(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_pick_the_right_variant() {
        assert_eq!(Value::from("x"), Value::String("x".into()));
        assert_eq!(Value::from(80u16), Value::Integer(80));
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(
            Value::from(vec!["a", "b"]),
            Value::List(vec!["a".into(), "b".into()])
        );
    }

    #[test]
    fn references_walks_nested_expressions() {
        let cluster = Reference::to("Cluster");
        let role = Reference::to("Role");
        let value = base64(join(
            "",
            vec![
                Value::from("prefix-"),
                Value::from(&cluster),
                pseudo(PseudoParam::Region),
                Value::map([("Arn", role.attr("Arn"))]),
            ],
        ));

        assert_eq!(value.references(), vec!["Cluster", "Role"]);
    }

    #[test]
    fn function_names_match_wire_keys() {
        let join = Intrinsic::Join {
            separator: ",".into(),
            parts: vec![],
        };
        assert_eq!(join.function_name(), "Fn::Join");
        assert_eq!(
            Intrinsic::PseudoParam(PseudoParam::StackName).function_name(),
            "Ref"
        );
    }
}
