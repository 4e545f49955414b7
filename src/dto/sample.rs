use crate::domain::sample::Sample;
use crate::forms::sample::{FieldErrors, SampleForm, SearchParams};
use crate::pagination::Paginated;

/// Data required to render the board list template.
pub struct ListPageData {
    /// Current page of posts plus pagination info.
    pub samples: Paginated<Sample>,
    /// Search criteria echoed back into the filter form.
    pub criteria: SearchParams,
}

/// Data required to render the register/update form template.
#[derive(Debug)]
pub struct FormPageData {
    pub form: SampleForm,
    pub errors: FieldErrors,
}

impl FormPageData {
    /// An empty register form with the visibility flag preset.
    pub fn empty() -> Self {
        Self {
            form: SampleForm {
                use_yn: "Y".to_string(),
                ..SampleForm::default()
            },
            errors: FieldErrors::new(),
        }
    }

    /// A redisplayed form carrying the rejected input untouched.
    pub fn invalid(form: SampleForm, errors: FieldErrors) -> Self {
        Self { form, errors }
    }
}

impl From<Sample> for FormPageData {
    fn from(sample: Sample) -> Self {
        Self {
            form: sample.into(),
            errors: FieldErrors::new(),
        }
    }
}
