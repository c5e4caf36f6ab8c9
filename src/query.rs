use serde::Serialize;

/// Request body for the document store's `_search` endpoint.
///
/// Serializes to
/// `{"query": {"simple_query_string": {"query": <text>, "fields": ["*"]}}}`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SearchQuery {
    query: QueryClause,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
struct QueryClause {
    simple_query_string: SimpleQueryString,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
struct SimpleQueryString {
    query: String,
    fields: Vec<String>,
}

impl SearchQuery {
    /// Free-text match of `text` across every field of the indexed documents.
    pub fn simple(text: impl Into<String>) -> SearchQuery {
        SearchQuery {
            query: QueryClause {
                simple_query_string: SimpleQueryString {
                    query: text.into(),
                    fields: vec!["*".to_string()],
                },
            },
        }
    }

    pub fn text(&self) -> &str {
        &self.query.simple_query_string.query
    }
}
