use diesel::prelude::*;

use crate::domain::sample::{Sample as DomainSample, UpdateSample as DomainUpdateSample};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::samples)]
#[diesel(primary_key(sample_id))]
/// Diesel model for [`crate::domain::sample::Sample`].
pub struct Sample {
    pub sample_id: String,
    pub name: String,
    pub description: Option<String>,
    pub use_yn: String,
    pub reg_user: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::samples)]
/// Insertable form of [`Sample`]. The identifier is generated by the
/// repository, not taken from user input.
pub struct NewSample<'a> {
    pub sample_id: &'a str,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub use_yn: &'a str,
    pub reg_user: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::samples)]
#[diesel(treat_none_as_null = true)]
/// Data used when updating a [`Sample`] record.
pub struct UpdateSample<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub use_yn: &'a str,
    pub reg_user: Option<&'a str>,
}

impl From<Sample> for DomainSample {
    fn from(sample: Sample) -> Self {
        Self {
            id: sample.sample_id,
            name: sample.name,
            description: sample.description,
            use_yn: sample.use_yn,
            reg_user: sample.reg_user,
        }
    }
}

impl<'a> From<&'a DomainUpdateSample> for UpdateSample<'a> {
    fn from(updates: &'a DomainUpdateSample) -> Self {
        Self {
            name: updates.name.as_str(),
            description: updates.description.as_deref(),
            use_yn: updates.use_yn.as_str(),
            reg_user: updates.reg_user.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_into_domain() {
        let db_sample = Sample {
            sample_id: "SAMPLE-00001".to_string(),
            name: "First post".to_string(),
            description: Some("hello".to_string()),
            use_yn: "Y".to_string(),
            reg_user: Some("admin".to_string()),
        };
        let domain: DomainSample = db_sample.into();
        assert_eq!(domain.id, "SAMPLE-00001");
        assert_eq!(domain.name, "First post");
        assert_eq!(domain.description, Some("hello".to_string()));
        assert_eq!(domain.use_yn, "Y");
        assert_eq!(domain.reg_user, Some("admin".to_string()));
    }

    #[test]
    fn from_domain_update_creates_changeset() {
        let domain = DomainUpdateSample::new(
            "SAMPLE-00001".to_string(),
            "Renamed".to_string(),
            None,
            "N".to_string(),
            Some("admin".to_string()),
        );
        let changeset: UpdateSample = (&domain).into();
        assert_eq!(changeset.name, "Renamed");
        assert_eq!(changeset.description, None);
        assert_eq!(changeset.use_yn, "N");
        assert_eq!(changeset.reg_user, Some("admin"));
    }
}
