/// A person document as stored in the persons index. Fields are always
/// present; a field absent from the source JSON becomes an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub employer: String,
}

impl Person {
    pub fn new(first_name: &str, last_name: &str, employer: &str) -> Self {
        Self {
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            employer: employer.to_owned(),
        }
    }
}

/// One matched document from a search reply, with its backend-assigned
/// index name, identifier and relevance score.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub index: String,
    pub id: String,
    pub score: f32,
    pub person: Person,
}

/// Hits in backend relevance order; empty when the reported total is zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResponse {
    pub hits: Vec<SearchHit>,
}
