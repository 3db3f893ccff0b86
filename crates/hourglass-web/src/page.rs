//! HTML rendering for the estimator page.
//!
//! The page is small enough to build with `format!`; every piece of
//! user-supplied text goes through [`esc`] on the way out.

use std::fmt::Write as _;

use hourglass_core::estimate::{Estimate, PersonEstimate};
use quick_xml::escape::escape;

/// What to show below the form.
pub enum Outcome<'a> {
  Blank,
  Result(&'a Estimate),
  Error(&'a str),
}

fn esc(text: &str) -> std::borrow::Cow<'_, str> { escape(text) }

/// Hours are fractional for relations; show one decimal place.
fn hours(value: f64) -> String { format!("{value:.1}") }

pub fn render(quote: &str, outcome: Outcome<'_>) -> String {
  let body = match outcome {
    Outcome::Blank => String::new(),
    Outcome::Result(estimate) => result_section(estimate),
    Outcome::Error(message) => format!(
      r#"<p class="error" id="error">{}</p>"#,
      esc(message)
    ),
  };

  format!(
    r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Hourglass</title>
</head>
<body>
<h1>Hourglass</h1>
<blockquote id="quote">{quote}</blockquote>
{FORM}
{body}
{DREAMS}
</body>
</html>
"#,
    quote = esc(quote),
  )
}

fn person_rows(out: &mut String, prefix: &str, p: &PersonEstimate) {
  let _ = write!(
    out,
    r#"<tr><th>Age</th><td id="{prefix}-age">{}</td></tr>
<tr><th>Life expectancy</th><td id="{prefix}-expectancy">{}</td></tr>
<tr><th>Years left</th><td id="{prefix}-years">{}</td></tr>
<tr><th>Days left</th><td id="{prefix}-days">{}</td></tr>
<tr><th>Hours left</th><td id="{prefix}-hours">{}</td></tr>
"#,
    p.age, p.life_expectancy, p.years_left, p.days_left, p.hours_left,
  );
}

fn result_section(e: &Estimate) -> String {
  let mut out = String::from("<section id=\"result\">\n<h2>You</h2>\n<table>\n");
  person_rows(&mut out, "me", &e.me);
  out.push_str("</table>\n");

  let _ = write!(
    out,
    "<h2>Your parent (<span id=\"parent-gender\">{}</span>)</h2>\n<table>\n",
    e.parent.gender.label()
  );
  person_rows(&mut out, "parent", &e.parent);
  out.push_str("</table>\n");

  let t = &e.together;
  let _ = write!(
    out,
    r#"<h2>Time together</h2>
<table>
<tr><th>Years</th><td id="together-years">{}</td></tr>
<tr><th>Days per year</th><td id="together-annual-days">{}</td></tr>
<tr><th>Hours per year</th><td id="together-annual-hours">{}</td></tr>
<tr><th>Days</th><td id="together-days">{}</td></tr>
<tr><th>Hours</th><td id="together-hours">{}</td></tr>
</table>
"#,
    t.years,
    t.annual_days,
    hours(t.annual_hours),
    t.days,
    t.hours,
  );

  if !e.relations.is_empty() {
    out.push_str(
      "<h2>People who matter</h2>\n<table id=\"relations\">\n\
       <tr><th>Name</th><th>Age</th><th>Years</th><th>Days</th><th>Hours</th></tr>\n",
    );
    for r in &e.relations {
      let _ = writeln!(
        out,
        r#"<tr class="relation"><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>"#,
        esc(&r.name),
        r.age,
        r.time.years,
        r.time.days,
        hours(r.time.hours),
      );
    }
    let totals = &e.relation_totals;
    let _ = writeln!(
      out,
      r#"<tr id="relations-total"><th colspan="2">Total</th><td>{}</td><td>{}</td><td>{}</td></tr>"#,
      totals.years,
      totals.days,
      hours(totals.hours),
    );
    out.push_str("</table>\n");
  }

  out.push_str("</section>");
  out
}

const FORM: &str = r#"<form method="post" action="/">
<fieldset><legend>You</legend>
<label>Birthdate <input type="date" name="my_birthdate" required></label>
<label>Gender <select name="my_gender"><option value="male">Male</option><option value="female">Female</option></select></label>
</fieldset>
<fieldset><legend>Your parent</legend>
<label>Age <input type="number" name="parent_age" required></label>
<label>Gender <select name="parent_gender"><option value="male">Male</option><option value="female">Female</option></select></label>
<label>Visits per year <input type="number" name="visits" value="0"></label>
<label>Days per visit <input type="number" name="stay" value="0"></label>
<label>Hours per day <input type="number" step="any" name="hours" value="0"></label>
</fieldset>
<fieldset id="relation-rows"><legend>People who matter</legend>
<div class="relation-row">
<input name="relation_name[]" placeholder="Name">
<input type="number" name="relation_age[]" placeholder="Age">
<input type="number" step="any" name="relation_daily_hours[]" placeholder="Hours per day">
<input type="number" name="relation_leave_age[]" value="18" placeholder="Until age">
</div>
<button type="button" onclick="addRelationRow()">Add person</button>
</fieldset>
<button type="submit">Calculate</button>
</form>"#;

const DREAMS: &str = r#"<section id="dreams">
<h2>Dreams</h2>
<ul id="dream-list"></ul>
<input id="dream-text" placeholder="Something you want to do">
<button type="button" onclick="addDream()">Add</button>
</section>
<script>
function addRelationRow() {
  const rows = document.getElementById("relation-rows");
  const row = rows.querySelector(".relation-row").cloneNode(true);
  row.querySelectorAll("input").forEach(i => { i.value = i.name === "relation_leave_age[]" ? "18" : ""; });
  rows.insertBefore(row, rows.querySelector("button"));
}
function showDreams(dreams) {
  const list = document.getElementById("dream-list");
  list.replaceChildren(...dreams.map(d => {
    const li = document.createElement("li");
    li.textContent = d.text + " ";
    const del = document.createElement("button");
    del.textContent = "x";
    del.onclick = () => send("DELETE", { id: d.id });
    li.appendChild(del);
    return li;
  }));
}
function send(method, body) {
  return fetch("/api/dreams", {
    method,
    headers: { "Content-Type": "application/json" },
    body: body === undefined ? undefined : JSON.stringify(body),
  }).then(r => r.json()).then(d => { if (d.length || method !== "POST") showDreams(d); });
}
function addDream() {
  const input = document.getElementById("dream-text");
  send("POST", { text: input.value });
  input.value = "";
}
send("GET");
</script>"#;
