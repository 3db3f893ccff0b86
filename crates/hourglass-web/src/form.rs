//! Decoding the estimator's urlencoded form into a [`RawEstimate`].
//!
//! Relation fields use the `name[]` convention and repeat once per row, so
//! the body is taken as an ordered list of pairs rather than a struct.

use hourglass_core::input::RawEstimate;

pub fn raw_estimate(pairs: Vec<(String, String)>) -> RawEstimate {
  let mut raw = RawEstimate::default();
  for (key, value) in pairs {
    let slot = match key.as_str() {
      "my_birthdate" => &mut raw.my_birthdate,
      "my_gender" => &mut raw.my_gender,
      "parent_age" => &mut raw.parent_age,
      "parent_gender" => &mut raw.parent_gender,
      "visits" => &mut raw.visits,
      "stay" => &mut raw.stay,
      "hours" => &mut raw.hours,
      "relation_name[]" => {
        raw.relation_names.push(value);
        continue;
      }
      "relation_age[]" => {
        raw.relation_ages.push(value);
        continue;
      }
      "relation_daily_hours[]" => {
        raw.relation_daily_hours.push(value);
        continue;
      }
      "relation_leave_age[]" => {
        raw.relation_leave_ages.push(value);
        continue;
      }
      _ => continue,
    };
    // Single-valued fields keep the first occurrence.
    if slot.is_none() {
      *slot = Some(value);
    }
  }
  raw
}
