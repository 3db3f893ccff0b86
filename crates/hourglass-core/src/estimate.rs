//! The remaining-time estimator.
//!
//! Everything here is pure arithmetic over an already-validated
//! [`EstimateInput`]; see [`crate::input`] for turning raw form values into
//! one.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
  gender::{Gender, remaining_years},
  relation::{RelationEntry, RelationTime},
};

pub const DAYS_PER_YEAR: i64 = 365;
pub const HOURS_PER_DAY: i64 = 24;

/// Whole years between `birthdate` and `today`, counted as 365-day blocks
/// and rounded down (a birthdate in the future gives a negative age).
pub fn age_on(birthdate: NaiveDate, today: NaiveDate) -> i64 {
  (today - birthdate).num_days().div_euclid(DAYS_PER_YEAR)
}

// ─── Per-person figures ──────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonEstimate {
  pub age:             i64,
  pub gender:          Gender,
  pub life_expectancy: i64,
  pub years_left:      i64,
  pub days_left:       i64,
  pub hours_left:      i64,
}

impl PersonEstimate {
  pub fn new(gender: Gender, age: i64) -> Self {
    let years_left = remaining_years(gender, age);
    Self {
      age,
      gender,
      life_expectancy: gender.life_expectancy(),
      years_left,
      days_left: years_left.saturating_mul(DAYS_PER_YEAR),
      hours_left: years_left.saturating_mul(DAYS_PER_YEAR * HOURS_PER_DAY),
    }
  }
}

// ─── Shared time ─────────────────────────────────────────────────────────────

/// How often the subject sees the related person. Values are taken as given;
/// negative or absurd numbers are not rejected, and products that leave the
/// `i64` range saturate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Visits {
  pub per_year:       i64,
  pub days_per_visit: i64,
  pub hours_per_day:  f64,
}

/// Time the subject and the related person have left together.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SharedTime {
  /// The joint horizon: whichever of the two runs out first.
  pub years:        i64,
  pub annual_days:  i64,
  pub annual_hours: f64,
  pub days:         i64,
  /// Total hours, truncated toward zero.
  pub hours:        i64,
}

impl SharedTime {
  pub fn compute(years_a: i64, years_b: i64, visits: Visits) -> Self {
    let years = years_a.min(years_b);
    let annual_days = visits.per_year.saturating_mul(visits.days_per_visit);
    let annual_hours = annual_days as f64 * visits.hours_per_day;
    Self {
      years,
      annual_days,
      annual_hours,
      days: annual_days.saturating_mul(years),
      hours: (annual_hours * years as f64) as i64,
    }
  }
}

// ─── Whole estimate ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct EstimateInput {
  pub my_age:        i64,
  pub my_gender:     Gender,
  pub parent_age:    i64,
  pub parent_gender: Gender,
  pub visits:        Visits,
  pub relations:     Vec<RelationEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationEstimate {
  pub name: String,
  pub age:  i64,
  #[serde(flatten)]
  pub time: RelationTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
  pub me:              PersonEstimate,
  pub parent:          PersonEstimate,
  pub together:        SharedTime,
  pub relations:       Vec<RelationEstimate>,
  pub relation_totals: RelationTime,
}

pub fn estimate(input: &EstimateInput) -> Estimate {
  let me = PersonEstimate::new(input.my_gender, input.my_age);
  let parent = PersonEstimate::new(input.parent_gender, input.parent_age);
  let together =
    SharedTime::compute(me.years_left, parent.years_left, input.visits);

  let relations: Vec<RelationEstimate> = input
    .relations
    .iter()
    .map(|r| RelationEstimate {
      name: r.name.clone(),
      age:  r.age,
      time: r.remaining(),
    })
    .collect();
  let relation_totals = relations.iter().map(|r| r.time).sum();

  Estimate {
    me,
    parent,
    together,
    relations,
    relation_totals,
  }
}
