//! Relation entries — other people with their own remaining-time accounting.
//!
//! A relation is counted until a caller-chosen "leave age" (e.g. a child
//! moving out at 18) rather than until a life expectancy.

use serde::{Deserialize, Serialize};

/// Leave age used when the submitted value is missing or unparsable.
pub const DEFAULT_LEAVE_AGE: i64 = 18;
/// Daily hours used when the submitted value is missing or unparsable.
pub const DEFAULT_DAILY_HOURS: f64 = 0.0;

const DAYS_PER_YEAR: i64 = 365;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationEntry {
  pub name:        String,
  pub age:         i64,
  pub daily_hours: f64,
  pub leave_age:   i64,
}

impl RelationEntry {
  /// Build an entry from raw form values.
  ///
  /// Returns `None` when the name is blank or the age does not parse. A bad
  /// daily-hours or leave-age value falls back to its default instead.
  pub fn parse(
    name: &str,
    age: &str,
    daily_hours: &str,
    leave_age: &str,
  ) -> Option<Self> {
    let name = name.trim();
    if name.is_empty() {
      return None;
    }
    let age = age.trim().parse::<i64>().ok()?;

    Some(Self {
      name: name.to_owned(),
      age,
      daily_hours: daily_hours
        .trim()
        .parse()
        .unwrap_or(DEFAULT_DAILY_HOURS),
      leave_age: leave_age.trim().parse().unwrap_or(DEFAULT_LEAVE_AGE),
    })
  }

  /// Parse parallel lists of form values, zipping them to the shortest list
  /// and dropping entries that [`RelationEntry::parse`] rejects.
  pub fn parse_all(
    names: &[String],
    ages: &[String],
    daily_hours: &[String],
    leave_ages: &[String],
  ) -> Vec<Self> {
    names
      .iter()
      .zip(ages)
      .zip(daily_hours)
      .zip(leave_ages)
      .filter_map(|(((n, a), h), l)| Self::parse(n, a, h, l))
      .collect()
  }

  pub fn remaining(&self) -> RelationTime {
    let years = self.leave_age.saturating_sub(self.age).max(0);
    let days = years.saturating_mul(DAYS_PER_YEAR);
    RelationTime {
      years,
      days,
      hours: days as f64 * self.daily_hours,
    }
  }
}

/// Time left with one relation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RelationTime {
  pub years: i64,
  pub days:  i64,
  pub hours: f64,
}

impl std::ops::Add for RelationTime {
  type Output = Self;

  fn add(self, rhs: Self) -> Self {
    Self {
      years: self.years.saturating_add(rhs.years),
      days:  self.days.saturating_add(rhs.days),
      hours: self.hours + rhs.hours,
    }
  }
}

impl std::iter::Sum for RelationTime {
  fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
    iter.fold(Self::default(), |acc, t| acc + t)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| (*s).to_owned()).collect()
  }

  #[test]
  fn parse_trims_name_and_numbers() {
    let entry = RelationEntry::parse("  Ada ", " 5 ", " 2.5 ", " 20 ").unwrap();
    assert_eq!(entry.name, "Ada");
    assert_eq!(entry.age, 5);
    assert_eq!(entry.daily_hours, 2.5);
    assert_eq!(entry.leave_age, 20);
  }

  #[test]
  fn blank_name_is_skipped() {
    assert!(RelationEntry::parse("   ", "5", "1", "18").is_none());
  }

  #[test]
  fn unparsable_age_is_skipped() {
    assert!(RelationEntry::parse("Ada", "five", "1", "18").is_none());
    assert!(RelationEntry::parse("Ada", "5.5", "1", "18").is_none());
    assert!(RelationEntry::parse("Ada", "", "1", "18").is_none());
  }

  #[test]
  fn bad_hours_and_leave_age_fall_back_to_defaults() {
    let entry = RelationEntry::parse("Ada", "5", "lots", "").unwrap();
    assert_eq!(entry.daily_hours, 0.0);
    assert_eq!(entry.leave_age, 18);
  }

  #[test]
  fn remaining_time_uses_leave_age() {
    let entry = RelationEntry::parse("Ada", "8", "3", "18").unwrap();
    let time = entry.remaining();
    assert_eq!(time.years, 10);
    assert_eq!(time.days, 3650);
    assert_eq!(time.hours, 10950.0);
  }

  #[test]
  fn leave_age_at_or_below_age_yields_zero() {
    for leave in ["18", "10"] {
      let entry = RelationEntry::parse("Ada", "18", "4", leave).unwrap();
      assert_eq!(entry.remaining(), RelationTime::default());
    }
  }

  #[test]
  fn extreme_ages_saturate() {
    let min = i64::MIN.to_string();
    let entry = RelationEntry::parse("Ada", &min, "2", "18").unwrap();
    let time = entry.remaining();
    assert_eq!(time.years, i64::MAX);
    assert_eq!(time.days, i64::MAX);
    assert!(time.hours > 0.0);

    let max = i64::MAX.to_string();
    let entry = RelationEntry::parse("Ada", "0", "1", &max).unwrap();
    assert_eq!(entry.remaining().days, i64::MAX);

    let total = entry.remaining() + entry.remaining();
    assert_eq!(total.years, i64::MAX);
    assert_eq!(total.days, i64::MAX);
  }

  #[test]
  fn parse_all_zips_to_shortest_and_filters() {
    let entries = RelationEntry::parse_all(
      &strings(&["Ada", "", "Bob", "Cy"]),
      &strings(&["5", "6", "x", "7"]),
      &strings(&["1", "1", "1"]),
      &strings(&["18", "18", "18", "18"]),
    );
    // "Cy" is beyond the shortest list; "" and "Bob" are rejected.
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "Ada");
  }

  #[test]
  fn times_sum() {
    let total: RelationTime = [
      RelationTime { years: 1, days: 365, hours: 10.0 },
      RelationTime { years: 2, days: 730, hours: 5.5 },
    ]
    .into_iter()
    .sum();
    assert_eq!(total, RelationTime { years: 3, days: 1095, hours: 15.5 });
  }
}
