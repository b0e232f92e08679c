use serde::{Serialize, Deserialize};

/// Two adjacent tokens and how often they co-occur.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BigramRecord {
    pub first: String,
    pub second: String,
    pub count: usize,
}

impl BigramRecord {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
            count: 0,
        }
    }

    pub fn as_pair(&self) -> (&str, &str) {
        (&self.first, &self.second)
    }
}

impl std::fmt::Display for BigramRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.first, self.second)
    }
}
