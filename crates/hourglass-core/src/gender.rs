//! The two-value life-expectancy table.

use serde::{Deserialize, Serialize};

/// Life expectancy in years for [`Gender::Male`].
pub const MALE_LIFE_EXPECTANCY: i64 = 81;
/// Life expectancy in years for [`Gender::Female`].
pub const FEMALE_LIFE_EXPECTANCY: i64 = 87;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
  Male,
  Female,
}

impl Gender {
  /// Interpret a submitted form value. Only `"male"` selects
  /// [`Gender::Male`]; everything else, including typos, is `Female`.
  pub fn from_form(value: &str) -> Self {
    if value == "male" { Self::Male } else { Self::Female }
  }

  pub fn life_expectancy(self) -> i64 {
    match self {
      Self::Male => MALE_LIFE_EXPECTANCY,
      Self::Female => FEMALE_LIFE_EXPECTANCY,
    }
  }

  /// Human-readable label used in rendered output.
  pub fn label(self) -> &'static str {
    match self {
      Self::Male => "Male",
      Self::Female => "Female",
    }
  }
}

/// Years left until the table's life expectancy, never negative. Saturates
/// rather than overflowing for absurd ages.
pub fn remaining_years(gender: Gender, age: i64) -> i64 {
  gender.life_expectancy().saturating_sub(age).max(0)
}
