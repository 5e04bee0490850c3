// ABOUTME: Input validation for evaluation requests
// ABOUTME: Strict field-level checks for API boundaries plus defensive score clamping

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::types::{BasicQpvInput, FullEvaluationInput};

const MAX_NAME_LEN: usize = 200;
const MAX_DESCRIPTION_LEN: usize = 2000;
const MAX_REASONING_LEN: usize = 500;

/// One field-level validation failure, shaped for API error responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

/// Clamp a score into [0,10], warning when the caller sent an
/// out-of-range value. NaN is treated as 0.
pub fn clamp_score(value: f64, field: &str) -> f64 {
    if value.is_nan() {
        warn!("Score field {} is NaN, treating as 0", field);
        return 0.0;
    }
    if !(0.0..=10.0).contains(&value) {
        warn!("Score field {} out of range ({}), clamping to [0,10]", field, value);
        return value.clamp(0.0, 10.0);
    }
    value
}

fn check_score(issues: &mut Vec<ValidationIssue>, field: &str, value: f64) {
    if value.is_nan() || !(0.0..=10.0).contains(&value) {
        issues.push(ValidationIssue {
            field: field.to_string(),
            message: format!("{} must be between 0 and 10", field),
        });
    }
}

fn check_name(issues: &mut Vec<ValidationIssue>, field: &str, value: &str) {
    if value.trim().is_empty() {
        issues.push(ValidationIssue {
            field: field.to_string(),
            message: "Idea name is required".to_string(),
        });
    } else if value.len() > MAX_NAME_LEN {
        issues.push(ValidationIssue {
            field: field.to_string(),
            message: format!("Idea name must be less than {} characters", MAX_NAME_LEN),
        });
    }
}

fn check_description(issues: &mut Vec<ValidationIssue>, field: &str, value: &str) {
    if value.len() > MAX_DESCRIPTION_LEN {
        issues.push(ValidationIssue {
            field: field.to_string(),
            message: format!("Description must be less than {} characters", MAX_DESCRIPTION_LEN),
        });
    }
}

/// Validate a basic QPV input. Returns every issue found, not just the first.
pub fn validate_basic_input(input: &BasicQpvInput) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    check_name(&mut issues, "ideaName", &input.idea_name);
    check_description(&mut issues, "description", &input.description);
    check_score(&mut issues, "quickness", input.quickness);
    check_score(&mut issues, "profitability", input.profitability);
    check_score(&mut issues, "validationEase", input.validation_ease);

    issues
}

/// Validate a full evaluation input. Returns every issue found.
pub fn validate_full_input(input: &FullEvaluationInput) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    check_name(&mut issues, "ideaName", &input.idea_name);
    check_description(&mut issues, "description", &input.description);

    check_score(&mut issues, "founderReadiness.skillMatch", input.founder_readiness.skill_match);
    check_score(
        &mut issues,
        "founderReadiness.timeAvailability",
        input.founder_readiness.time_availability,
    );
    check_score(
        &mut issues,
        "founderReadiness.financialBuffer",
        input.founder_readiness.financial_buffer,
    );

    check_score(&mut issues, "ideaCharacteristics.quickness", input.idea_characteristics.quickness);
    check_score(
        &mut issues,
        "ideaCharacteristics.profitability",
        input.idea_characteristics.profitability,
    );
    check_score(
        &mut issues,
        "ideaCharacteristics.validationEase",
        input.idea_characteristics.validation_ease,
    );
    check_score(
        &mut issues,
        "ideaCharacteristics.marketDemand",
        input.idea_characteristics.market_demand,
    );

    check_score(
        &mut issues,
        "contextualViability.lifeStageFit",
        input.contextual_viability.life_stage_fit,
    );
    check_score(
        &mut issues,
        "contextualViability.marketTiming",
        input.contextual_viability.market_timing,
    );

    if let Some(reasoning) = &input.energy_filter.reasoning {
        if reasoning.len() > MAX_REASONING_LEN {
            issues.push(ValidationIssue {
                field: "energyFilter.reasoning".to_string(),
                message: format!("Reasoning must be less than {} characters", MAX_REASONING_LEN),
            });
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        ContextualViability, EnergyFilter, EnergyFilterResponse, FounderReadiness,
        IdeaCategory, IdeaCharacteristics,
    };
    use pretty_assertions::assert_eq;

    fn valid_full_input() -> FullEvaluationInput {
        FullEvaluationInput {
            idea_name: "Test".to_string(),
            description: "A test idea".to_string(),
            category: IdeaCategory::SaasTool,
            founder_readiness: FounderReadiness {
                skill_match: 8.0,
                time_availability: 8.0,
                financial_buffer: 8.0,
            },
            idea_characteristics: IdeaCharacteristics {
                quickness: 8.0,
                profitability: 8.0,
                validation_ease: 8.0,
                market_demand: 8.0,
            },
            contextual_viability: ContextualViability {
                life_stage_fit: 8.0,
                market_timing: 8.0,
            },
            energy_filter: EnergyFilter {
                response: EnergyFilterResponse::Yes,
                reasoning: None,
            },
        }
    }

    #[test]
    fn test_clamp_score_passes_in_range_values_through() {
        assert_eq!(clamp_score(0.0, "f"), 0.0);
        assert_eq!(clamp_score(7.5, "f"), 7.5);
        assert_eq!(clamp_score(10.0, "f"), 10.0);
    }

    #[test]
    fn test_clamp_score_clamps_out_of_range() {
        assert_eq!(clamp_score(-1.0, "f"), 0.0);
        assert_eq!(clamp_score(11.0, "f"), 10.0);
        assert_eq!(clamp_score(f64::NAN, "f"), 0.0);
    }

    #[test]
    fn test_valid_full_input_has_no_issues() {
        let issues = validate_full_input(&valid_full_input());
        assert!(issues.is_empty(), "expected no issues, got {:?}", issues);
    }

    #[test]
    fn test_missing_name_is_flagged() {
        let mut input = valid_full_input();
        input.idea_name = "  ".to_string();

        let issues = validate_full_input(&input);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "ideaName");
    }

    #[test]
    fn test_out_of_range_scores_are_flagged_per_field() {
        let mut input = valid_full_input();
        input.founder_readiness.skill_match = 12.0;
        input.idea_characteristics.market_demand = -3.0;

        let issues = validate_full_input(&input);
        let fields: Vec<&str> = issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["founderReadiness.skillMatch", "ideaCharacteristics.marketDemand"]
        );
    }

    #[test]
    fn test_overlong_reasoning_is_flagged() {
        let mut input = valid_full_input();
        input.energy_filter.reasoning = Some("x".repeat(501));

        let issues = validate_full_input(&input);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "energyFilter.reasoning");
    }

    #[test]
    fn test_basic_input_validation() {
        let input = BasicQpvInput {
            idea_name: String::new(),
            description: String::new(),
            quickness: 5.0,
            profitability: 15.0,
            validation_ease: 5.0,
        };

        let issues = validate_basic_input(&input);
        let fields: Vec<&str> = issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(fields, vec!["ideaName", "profitability"]);
    }
}
