//! Raw estimator input as submitted by a form, and its validation.

use chrono::NaiveDate;

use crate::{
  Error, Result,
  estimate::{EstimateInput, Visits, age_on},
  gender::Gender,
  relation::RelationEntry,
};

/// Unvalidated estimator fields. Single-valued fields are `None` when absent;
/// the relation lists are parallel and may differ in length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawEstimate {
  pub my_birthdate:         Option<String>,
  pub my_gender:            Option<String>,
  pub parent_age:           Option<String>,
  pub parent_gender:        Option<String>,
  pub visits:               Option<String>,
  pub stay:                 Option<String>,
  pub hours:                Option<String>,
  pub relation_names:       Vec<String>,
  pub relation_ages:        Vec<String>,
  pub relation_daily_hours: Vec<String>,
  pub relation_leave_ages:  Vec<String>,
}

impl RawEstimate {
  /// Validate every field, computing the subject's age as of `today`.
  pub fn parse(&self, today: NaiveDate) -> Result<EstimateInput> {
    let (Some(birthdate), Some(my_gender)) =
      (present(&self.my_birthdate), present(&self.my_gender))
    else {
      return Err(Error::MissingSubject);
    };
    let birthdate = NaiveDate::parse_from_str(birthdate, "%Y-%m-%d")
      .map_err(|_| Error::InvalidDate(birthdate.to_owned()))?;

    let (Some(parent_age), Some(parent_gender)) =
      (present(&self.parent_age), present(&self.parent_gender))
    else {
      return Err(Error::MissingRelated);
    };
    let parent_age = parse_number("parent_age", parent_age)?;

    let visits = Visits {
      per_year:       parse_or("visits", &self.visits, 0)?,
      days_per_visit: parse_or("stay", &self.stay, 0)?,
      hours_per_day:  parse_or("hours", &self.hours, 0.0)?,
    };

    Ok(EstimateInput {
      my_age: age_on(birthdate, today),
      my_gender: Gender::from_form(my_gender),
      parent_age,
      parent_gender: Gender::from_form(parent_gender),
      visits,
      relations: RelationEntry::parse_all(
        &self.relation_names,
        &self.relation_ages,
        &self.relation_daily_hours,
        &self.relation_leave_ages,
      ),
    })
  }
}

/// `Some` only for a non-empty value.
fn present(value: &Option<String>) -> Option<&str> {
  value.as_deref().filter(|v| !v.is_empty())
}

fn parse_number<T: std::str::FromStr>(
  field: &'static str,
  value: &str,
) -> Result<T> {
  value.trim().parse().map_err(|_| Error::InvalidNumber {
    field,
    value: value.to_owned(),
  })
}

/// Parse an optional field, using `default` when it is absent or empty.
fn parse_or<T: std::str::FromStr>(
  field: &'static str,
  value: &Option<String>,
  default: T,
) -> Result<T> {
  match present(value) {
    Some(v) => parse_number(field, v),
    None => Ok(default),
  }
}
