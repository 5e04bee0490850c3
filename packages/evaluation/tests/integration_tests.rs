// ABOUTME: Integration tests for the evaluation package public API
// ABOUTME: End-to-end scoring scenarios, cross-module invariants, and envelope round-trips

use chrono::Utc;
use pulse_evaluation::{
    all_categories, calculate_potential_score, failure_mode_data,
    generate_improvement_suggestions, generate_pivot_suggestion, score_basic, score_full,
    BasicQpvInput, ContextualViability, EnergyFilter, EnergyFilterResponse, EnergyFilterStatus,
    EvaluationEnvelope, FounderReadiness, FullEvaluationInput, GapSeverity, IdeaCategory,
    IdeaCharacteristics, Interpretation,
};

// ============================================================================
// Fixtures
// ============================================================================

fn saas_all_eights() -> FullEvaluationInput {
    FullEvaluationInput {
        idea_name: "Test".to_string(),
        description: "A SaaS idea for testing".to_string(),
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

fn uniform_input(category: IdeaCategory, score: f64) -> FullEvaluationInput {
    let mut input = saas_all_eights();
    input.category = category;
    input.founder_readiness = FounderReadiness {
        skill_match: score,
        time_availability: score,
        financial_buffer: score,
    };
    input.idea_characteristics = IdeaCharacteristics {
        quickness: score,
        profitability: score,
        validation_ease: score,
        market_demand: score,
    };
    input.contextual_viability = ContextualViability {
        life_stage_fit: score,
        market_timing: score,
    };
    input
}

// ============================================================================
// End-to-end scenario
// ============================================================================

#[test]
fn test_saas_all_eights_scenario() {
    let input = saas_all_eights();
    let result = score_full(&input);

    assert_eq!(result.layers.founder_readiness.raw, 8.0);
    assert_eq!(result.layers.idea_characteristics.raw, 8.0);
    assert_eq!(result.overall_score, 7.1);
    assert_eq!(result.interpretation, Interpretation::Strong);
    assert_eq!(result.energy_filter_status, EnergyFilterStatus::Pass);

    assert!(result
        .strengths
        .iter()
        .any(|s| s.contains("Strong skill match")));
    assert!(result
        .strengths
        .iter()
        .any(|s| s.contains("hours/week available")));

    // One obstacle per common failure in the saas-tool entry
    assert_eq!(
        result.obstacles.len(),
        failure_mode_data(IdeaCategory::SaasTool).common_failures.len()
    );

    assert!(result.idea_id.starts_with("test-"));
}

// ============================================================================
// Cross-module invariants
// ============================================================================

#[test]
fn test_weighted_layer_sum_matches_overall_for_every_category() {
    for category in all_categories() {
        for score in [0.0, 2.5, 5.0, 7.5, 10.0] {
            let result = score_full(&uniform_input(category, score));

            let sum = result.layers.founder_readiness.weighted
                + result.layers.idea_characteristics.weighted
                + result.layers.historical_patterns.weighted
                + result.layers.contextual_viability.weighted;
            assert!(
                (result.overall_score - sum).abs() < 0.005,
                "category {} score {}: overall {} vs sum {}",
                category,
                score,
                result.overall_score,
                sum
            );
        }
    }
}

#[test]
fn test_insight_caps_hold_for_extreme_inputs() {
    for score in [0.0, 10.0] {
        let input = uniform_input(IdeaCategory::ContentCreator, score);
        let result = score_full(&input);
        let suggestions = generate_improvement_suggestions(&input, &result);

        assert!(result.strengths.len() <= 5);
        assert!(result.gaps.len() <= 5);
        assert!(suggestions.len() <= 5);
    }
}

#[test]
fn test_no_warning_or_minor_gap_precedes_a_critical() {
    let input = uniform_input(IdeaCategory::Marketplace, 1.0);
    let result = score_full(&input);

    let first_non_critical = result
        .gaps
        .iter()
        .position(|g| g.severity != GapSeverity::Critical);
    if let Some(position) = first_non_critical {
        assert!(result.gaps[position..]
            .iter()
            .all(|g| g.severity != GapSeverity::Critical));
    }
}

#[test]
fn test_basic_and_full_tiers_agree_on_buckets() {
    let basic = score_basic(&BasicQpvInput {
        idea_name: "Bucket".to_string(),
        description: String::new(),
        quickness: 6.0,
        profitability: 6.0,
        validation_ease: 6.0,
    });
    assert_eq!(basic.score, 6.0);
    assert_eq!(basic.interpretation, Interpretation::Strong);
    assert_eq!(basic.interpretation, Interpretation::for_score(basic.score));
}

#[test]
fn test_pivot_and_potential_score_for_weak_idea() {
    let input = uniform_input(IdeaCategory::MobileApp, 2.0);
    let result = score_full(&input);
    assert!(result.overall_score < 5.0);

    let pivot = generate_pivot_suggestion(&input, &result);
    assert!(pivot.is_some());

    let suggestions = generate_improvement_suggestions(&input, &result);
    let potential = calculate_potential_score(result.overall_score, &suggestions);
    assert!(potential >= result.overall_score);
    assert!(potential <= 10.0);
}

// ============================================================================
// Envelope round-trip
// ============================================================================

#[test]
fn test_envelope_json_round_trip() {
    let input = saas_all_eights();
    let result = score_full(&input);
    let suggestions = generate_improvement_suggestions(&input, &result);

    let envelope = EvaluationEnvelope {
        version: "2.0".to_string(),
        exported_at: Utc::now(),
        input,
        result,
        suggestions,
    };

    let json = serde_json::to_string(&envelope).unwrap();
    let parsed: EvaluationEnvelope = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.version, "2.0");
    assert_eq!(parsed.result.overall_score, envelope.result.overall_score);
    assert_eq!(parsed.input.category, IdeaCategory::SaasTool);
    assert_eq!(
        parsed.result.layers.historical_patterns.percentage,
        envelope.result.layers.historical_patterns.percentage
    );
}
