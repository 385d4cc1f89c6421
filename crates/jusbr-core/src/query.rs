//! Query-string construction for provider endpoints.

use std::fmt::Display;

/// Ordered `key=value` pairs, percent-encoded on [`QueryBuilder::build`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryBuilder {
    pairs: Vec<(String, String)>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pair unconditionally.
    pub fn push(mut self, key: &str, value: impl Display) -> Self {
        self.pairs.push((key.to_owned(), value.to_string()));
        self
    }

    /// Append a pair only when the value is present and renders non-empty.
    pub fn push_opt<V: Display>(self, key: &str, value: Option<V>) -> Self {
        match value.map(|value| value.to_string()) {
            Some(rendered) if !rendered.is_empty() => self.push(key, rendered),
            _ => self,
        }
    }

    /// Append one `key[]=value` pair per element, keeping input order.
    pub fn push_each<I, V>(mut self, key: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Display,
    {
        let array_key = format!("{key}[]");
        for value in values {
            self.pairs.push((array_key.clone(), value.to_string()));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn build(&self) -> String {
        self.pairs
            .iter()
            .map(|(key, value)| {
                format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Options structures that render themselves as query parameters.
pub trait QueryParams {
    fn to_query(&self) -> QueryBuilder;
}

/// Serialize an options structure into a query string.
pub fn build_query<P: QueryParams + ?Sized>(params: &P) -> String {
    params.to_query().build()
}
