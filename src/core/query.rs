//! Query-string building blocks shared by every display request.
//!
//! Filters render as `Filter=<Key>:<op>:<v1>,<v2>` and sorts as a single
//! `Sort=<Key>:<order>,<Key>:<order>` parameter. Filters and sorts on included
//! content use the `Filter_<Type>` / `Sort_<Type>` parameter names.

use crate::utils::error::{ConversationsError, Result};
use std::fmt;

/// Declares a fieldless enum with a fixed wire string per variant, plus
/// `as_str`, `Display` and case-insensitive `FromStr`.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::utils::error::ConversationsError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|candidate| candidate.as_str().eq_ignore_ascii_case(s.trim()))
                    .ok_or_else(|| {
                        $crate::utils::error::ConversationsError::validation(format!(
                            "unknown {} '{}'",
                            stringify!($name),
                            s
                        ))
                    })
            }
        }
    };
}

pub(crate) use wire_enum;

wire_enum! {
    pub enum FilterOperator {
        EqualTo => "eq",
        NotEqualTo => "neq",
        LessThan => "lt",
        LessThanOrEqualTo => "lte",
        GreaterThan => "gt",
        GreaterThanOrEqualTo => "gte",
    }
}

wire_enum! {
    pub enum SortOrder {
        Ascending => "asc",
        Descending => "desc",
    }
}

/// Escapes the characters the API treats as separators inside filter values.
pub fn escape_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if ch == ',' || ch == ':' {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    key: String,
    operator: FilterOperator,
    values: Vec<String>,
}

impl Filter {
    pub fn new<I, V>(key: impl Into<String>, operator: FilterOperator, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Self {
            key: key.into(),
            operator,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn operator(&self) -> FilterOperator {
        self.operator
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<String> = self.values.iter().map(|v| escape_value(v)).collect();
        write!(f, "{}:{}:{}", self.key, self.operator, values.join(","))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    key: String,
    order: SortOrder,
}

impl Sort {
    pub fn new(key: impl Into<String>, order: SortOrder) -> Self {
        Self {
            key: key.into(),
            order,
        }
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.key, self.order)
    }
}

/// Ordered query parameters. Repeated keys are kept, which `Filter` relies on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl ToString) {
        self.pairs.push((key.into(), value.to_string()));
    }

    pub fn push_filters(&mut self, param: &str, filters: &[Filter]) {
        for filter in filters {
            self.push(param, filter);
        }
    }

    /// All sorts go into one comma-separated parameter; nothing is pushed when empty.
    pub fn push_sorts(&mut self, param: &str, sorts: &[Sort]) {
        if sorts.is_empty() {
            return;
        }
        let joined: Vec<String> = sorts.iter().map(ToString::to_string).collect();
        self.push(param, joined.join(","));
    }

    pub fn extend(&mut self, other: QueryParams) {
        self.pairs.extend(other.pairs);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Parses a `Key:op:value[,value]` expression, e.g. `HasPhotos:eq:true`.
///
/// The key is returned unparsed so callers can map it onto their own key enum.
/// Escaped separators (`\,` and `\:`) inside values are honoured.
pub fn parse_filter_expr(expr: &str) -> Result<(String, FilterOperator, Vec<String>)> {
    let mut parts = expr.splitn(3, ':');
    let (key, op, raw_values) = match (parts.next(), parts.next(), parts.next()) {
        (Some(key), Some(op), Some(values)) if !key.is_empty() => (key, op, values),
        _ => {
            return Err(ConversationsError::validation(format!(
                "filter '{}' must look like Key:operator:value",
                expr
            )))
        }
    };

    let operator: FilterOperator = op.parse()?;
    let values = split_unescaped(raw_values);
    if values.iter().all(|v| v.is_empty()) {
        return Err(ConversationsError::validation(format!(
            "filter '{}' has no value",
            expr
        )));
    }
    Ok((key.to_string(), operator, values))
}

/// Parses `Key:order` (order defaults to ascending when omitted).
pub fn parse_sort_expr(expr: &str) -> Result<(String, SortOrder)> {
    match expr.split_once(':') {
        Some((key, order)) if !key.is_empty() => Ok((key.to_string(), order.parse()?)),
        None if !expr.is_empty() => Ok((expr.to_string(), SortOrder::Ascending)),
        _ => Err(ConversationsError::validation(format!(
            "sort '{}' must look like Key:asc or Key:desc",
            expr
        ))),
    }
}

fn split_unescaped(raw: &str) -> Vec<String> {
    let mut values = Vec::new();
    let mut current = String::new();
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => {
                if let Some(next) = chars.next() {
                    current.push(next);
                }
            }
            ',' => values.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    values.push(current);
    values
}
