use rolodex_search::Person;
use serde::Serialize;

/// Client-facing shape of one hit: `{"name":{"first":..,"last":..},"employer":..}`.
#[derive(Debug, Serialize)]
pub struct PersonPayload {
    pub name: NamePayload,
    pub employer: String,
}

#[derive(Debug, Serialize)]
pub struct NamePayload {
    pub first: String,
    pub last: String,
}

impl From<Person> for PersonPayload {
    fn from(person: Person) -> Self {
        Self {
            name: NamePayload {
                first: person.first_name,
                last: person.last_name,
            },
            employer: person.employer,
        }
    }
}
