use serde::{Deserialize, Serialize};

/// A single board post as stored by the repository.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Sample {
    /// Generated identifier, e.g. `SAMPLE-00001`.
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// `Y` or `N` visibility flag.
    pub use_yn: String,
    pub reg_user: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewSample {
    pub name: String,
    pub description: Option<String>,
    pub use_yn: String,
    pub reg_user: Option<String>,
}

impl NewSample {
    #[must_use]
    pub fn new(
        name: String,
        description: Option<String>,
        use_yn: String,
        reg_user: Option<String>,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            description: description
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            use_yn: use_yn.trim().to_uppercase(),
            reg_user: reg_user
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateSample {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub use_yn: String,
    pub reg_user: Option<String>,
}

impl UpdateSample {
    #[must_use]
    pub fn new(
        id: String,
        name: String,
        description: Option<String>,
        use_yn: String,
        reg_user: Option<String>,
    ) -> Self {
        Self {
            id,
            name: name.trim().to_string(),
            description: description
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            use_yn: use_yn.trim().to_uppercase(),
            reg_user: reg_user
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}

/// Which column a list keyword search matches against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchCondition {
    #[default]
    Name,
    SampleId,
}

impl From<&str> for SearchCondition {
    fn from(value: &str) -> Self {
        match value.trim() {
            "1" => SearchCondition::SampleId,
            _ => SearchCondition::Name,
        }
    }
}
