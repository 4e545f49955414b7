use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::domain::sample::{NewSample, Sample, UpdateSample};

/// Field name to error messages; an empty map means the input is valid.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Form data for registering or updating a board post.
///
/// Parameter names keep the camelCase the templates submit. The rules mirror
/// the column constraints of the `samples` table.
#[derive(Clone, Debug, Default, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct SampleForm {
    /// Present on update submissions, absent on register.
    pub id: Option<String>,
    #[validate(length(min = 1, max = 50, message = "Name is required and at most 50 characters"))]
    pub name: String,
    #[validate(length(max = 100, message = "Description must be at most 100 characters"))]
    pub description: String,
    #[serde(rename = "useYn")]
    #[validate(length(equal = 1, message = "Use flag must be a single character"))]
    pub use_yn: String,
    #[serde(rename = "regUser")]
    #[validate(length(max = 10, message = "Registrant must be at most 10 characters"))]
    pub reg_user: String,
}

impl SampleForm {
    fn optional(value: &str) -> Option<String> {
        let trimmed = value.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    pub fn to_new_sample(&self) -> NewSample {
        NewSample::new(
            self.name.clone(),
            Self::optional(&self.description),
            self.use_yn.clone(),
            Self::optional(&self.reg_user),
        )
    }

    /// Builds the update payload; `None` when the form carries no id.
    pub fn to_update_sample(&self) -> Option<UpdateSample> {
        let id = self.id.as_deref().map(str::trim).filter(|id| !id.is_empty())?;
        Some(UpdateSample::new(
            id.to_string(),
            self.name.clone(),
            Self::optional(&self.description),
            self.use_yn.clone(),
            Self::optional(&self.reg_user),
        ))
    }
}

impl From<Sample> for SampleForm {
    fn from(sample: Sample) -> Self {
        Self {
            id: Some(sample.id),
            name: sample.name,
            description: sample.description.unwrap_or_default(),
            use_yn: sample.use_yn,
            reg_user: sample.reg_user.unwrap_or_default(),
        }
    }
}

/// Key of a single record, as submitted by delete links and forms.
#[derive(Clone, Debug, Deserialize)]
pub struct SampleKeyForm {
    pub id: String,
}

/// List filters and paging state carried through every board request.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchParams {
    /// `"0"` matches the name column, `"1"` the identifier.
    pub search_condition: Option<String>,
    pub search_keyword: Option<String>,
    /// 1-based page number.
    pub page_index: Option<usize>,
}

/// Query parameters selecting the record shown on the update form.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedKeyParams {
    pub selected_id: String,
}

/// Flattens [`ValidationErrors`] into a field-to-messages map for templates.
pub fn field_error_messages(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|err| {
                    err.message
                        .clone()
                        .map(|m| m.into_owned())
                        .unwrap_or_else(|| err.code.to_string())
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}
