use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::domain::{
    CompanyTier, DesignExposure, ExperienceBand, PortfolioActivity, PracticeLevel, RoleContext,
    SignalField, SignalSet, TargetRole,
};

/// Structural errors raised by the normalizer. Missing or unrecognized
/// field values never raise; they degrade to defaults with a note.
#[derive(Debug, thiserror::Error)]
pub enum NormalizationError {
    #[error("submission must be a JSON object mapping field names to string values")]
    NotAnObject,
    #[error("field '{field}' must be a string value")]
    NonStringValue { field: String },
}

/// Records one substitution the normalizer made while typing a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationNote {
    pub field: SignalField,
    pub detail: String,
}

const EXPERIENCE_KEYS: &[&str] = &[
    "experience",
    "experienceband",
    "experiencebracket",
    "yearsofexperience",
];
const ROLE_KEYS: &[&str] = &["rolecontext", "currentrole", "role"];
const PRACTICE_KEYS: &[&str] = &[
    "codingpractice",
    "codingpracticelevel",
    "problemsolving",
    "problemssolved",
    "practice",
];
const DESIGN_KEYS: &[&str] = &["designexposure", "systemdesign", "design"];
const PORTFOLIO_KEYS: &[&str] = &["portfolio", "portfolioactivity", "publicwork"];
const TARGET_ROLE_KEYS: &[&str] = &["targetrole", "goalrole", "desiredrole"];
const TARGET_COMPANY_KEYS: &[&str] = &[
    "targetcompany",
    "targetcompanytier",
    "targetcompanies",
    "companytier",
];
const BACKGROUND_KEY: &str = "background";

/// Turns a raw questionnaire mapping into a typed `SignalSet`.
///
/// Field keys and values are matched case-insensitively against canonical
/// names and the legacy questionnaire codes. Unknown keys are ignored.
#[derive(Debug, Clone, Default)]
pub struct SignalNormalizer;

impl SignalNormalizer {
    pub fn normalize(
        &self,
        raw: &Value,
    ) -> Result<(SignalSet, Vec<NormalizationNote>), NormalizationError> {
        let object = raw.as_object().ok_or(NormalizationError::NotAnObject)?;

        let mut values: BTreeMap<String, String> = BTreeMap::new();
        for (key, value) in object {
            let text = match value {
                Value::String(text) => text.trim().to_ascii_lowercase(),
                Value::Null => continue,
                _ => {
                    return Err(NormalizationError::NonStringValue { field: key.clone() });
                }
            };
            if text.is_empty() {
                continue;
            }
            values.insert(canonical_key(key), text);
        }

        let mut notes = Vec::new();

        let experience = resolve(
            &mut notes,
            SignalField::Experience,
            first_match(&values, EXPERIENCE_KEYS),
            ExperienceBand::from_raw,
            ExperienceBand::None,
            "0 years",
        );
        let role_context = resolve_role(&mut notes, &values);
        let coding_practice = resolve(
            &mut notes,
            SignalField::CodingPractice,
            first_match(&values, PRACTICE_KEYS),
            PracticeLevel::from_raw,
            PracticeLevel::None,
            "0-10 problems",
        );
        let design_exposure = resolve(
            &mut notes,
            SignalField::DesignExposure,
            first_match(&values, DESIGN_KEYS),
            DesignExposure::from_raw,
            DesignExposure::None,
            "not yet",
        );
        let portfolio = resolve(
            &mut notes,
            SignalField::Portfolio,
            first_match(&values, PORTFOLIO_KEYS),
            PortfolioActivity::from_raw,
            PortfolioActivity::None,
            "no portfolio",
        );
        let target_role = resolve(
            &mut notes,
            SignalField::TargetRole,
            first_match(&values, TARGET_ROLE_KEYS),
            TargetRole::from_raw,
            TargetRole::Exploring,
            "exploring",
        );
        let target_company = resolve(
            &mut notes,
            SignalField::TargetCompany,
            first_match(&values, TARGET_COMPANY_KEYS),
            CompanyTier::from_raw,
            CompanyTier::Any,
            "all company types",
        );

        let signals = SignalSet {
            experience,
            role_context,
            coding_practice,
            design_exposure,
            portfolio,
            target_role,
            target_company,
        };

        Ok((signals, notes))
    }
}

fn canonical_key(key: &str) -> String {
    key.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn first_match<'a>(values: &'a BTreeMap<String, String>, aliases: &[&str]) -> Option<&'a str> {
    aliases
        .iter()
        .find_map(|alias| values.get(*alias).map(String::as_str))
}

fn resolve<T: Copy>(
    notes: &mut Vec<NormalizationNote>,
    field: SignalField,
    raw: Option<&str>,
    parse: impl Fn(&str) -> Option<T>,
    fallback: T,
    fallback_label: &'static str,
) -> T {
    match raw {
        Some(value) => match parse(value) {
            Some(parsed) => parsed,
            None => {
                notes.push(NormalizationNote {
                    field,
                    detail: format!("unrecognized value '{value}', defaulted to {fallback_label}"),
                });
                fallback
            }
        },
        None => {
            notes.push(NormalizationNote {
                field,
                detail: format!("missing, defaulted to {fallback_label}"),
            });
            fallback
        }
    }
}

fn resolve_role(
    notes: &mut Vec<NormalizationNote>,
    values: &BTreeMap<String, String>,
) -> RoleContext {
    if let Some(raw) = first_match(values, ROLE_KEYS) {
        return resolve(
            notes,
            SignalField::RoleContext,
            Some(raw),
            RoleContext::from_raw,
            RoleContext::NonTechnical,
            "non-technical background",
        );
    }

    // A bare background marker can stand in for the role field.
    if let Some(background) = values.get(BACKGROUND_KEY) {
        if RoleContext::from_raw(background) == Some(RoleContext::NonTechnical) {
            notes.push(NormalizationNote {
                field: SignalField::RoleContext,
                detail: "derived non-technical background from the background field".to_string(),
            });
            return RoleContext::NonTechnical;
        }
    }

    notes.push(NormalizationNote {
        field: SignalField::RoleContext,
        detail: "missing, defaulted to non-technical background".to_string(),
    });
    RoleContext::NonTechnical
}
