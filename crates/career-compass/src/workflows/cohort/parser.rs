use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::io::Read;

#[derive(Debug)]
pub(crate) struct CohortRecord {
    pub(crate) candidate: Option<String>,
    pub(crate) submitted_on: Option<NaiveDate>,
    pub(crate) submission: Value,
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<CohortRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for record in csv_reader.deserialize::<CohortRow>() {
        let row = record?;
        let submission = row.submission();

        records.push(CohortRecord {
            candidate: row.candidate,
            submitted_on: row.submitted_on,
            submission,
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct CohortRow {
    #[serde(
        rename = "Candidate",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    candidate: Option<String>,
    #[serde(
        rename = "Submitted At",
        default,
        deserialize_with = "submitted_date"
    )]
    submitted_on: Option<NaiveDate>,
    #[serde(
        rename = "Experience",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    experience: Option<String>,
    #[serde(
        rename = "Current Role",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    current_role: Option<String>,
    #[serde(
        rename = "Problem Solving",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    problem_solving: Option<String>,
    #[serde(
        rename = "System Design",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    system_design: Option<String>,
    #[serde(
        rename = "Portfolio",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    portfolio: Option<String>,
    #[serde(
        rename = "Target Role",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    target_role: Option<String>,
    #[serde(
        rename = "Target Company",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    target_company: Option<String>,
}

impl CohortRow {
    /// Rebuilds the submission object the normalizer expects, leaving out
    /// empty cells so its defaulting path applies.
    fn submission(&self) -> Value {
        let mut object = serde_json::Map::new();
        let fields = [
            ("experience", &self.experience),
            ("current_role", &self.current_role),
            ("problem_solving", &self.problem_solving),
            ("system_design", &self.system_design),
            ("portfolio", &self.portfolio),
            ("target_role", &self.target_role),
            ("target_company", &self.target_company),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                object.insert(key.to_string(), Value::String(value.clone()));
            }
        }
        Value::Object(object)
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn submitted_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt
        .as_deref()
        .and_then(parse_datetime)
        .map(|dt| dt.date()))
}

fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    None
}

#[cfg(test)]
pub(crate) fn parse_datetime_for_tests(value: &str) -> Option<NaiveDateTime> {
    parse_datetime(value)
}
