//! Per-session search history

/// Distinct queries in the order they were first searched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchHistory {
    queries: Vec<String>,
}

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a query. Returns false if it was already present.
    pub fn record(&mut self, query: &str) -> bool {
        if self.queries.iter().any(|q| q == query) {
            return false;
        }
        self.queries.push(query.to_string());
        true
    }

    pub fn clear(&mut self) {
        self.queries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.queries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }
}
