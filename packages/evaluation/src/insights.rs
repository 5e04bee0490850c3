// ABOUTME: Rule-based insight generation from evaluation scores
// ABOUTME: Derives strengths, gaps, category obstacles, and pivot suggestions from thresholds

use crate::failure_modes::failure_mode_data;
use crate::types::{
    FullEvaluationInput, FullEvaluationResult, Gap, GapSeverity, IdeaCategory, LayerScores,
    Obstacle,
};

const MAX_STRENGTHS: usize = 5;
const MAX_GAPS: usize = 5;

/// Generate strengths from threshold checks, at most 5.
///
/// The check order is part of the contract: it decides which strengths
/// survive truncation when more than five conditions match.
pub fn generate_strengths(input: &FullEvaluationInput, layers: &LayerScores) -> Vec<String> {
    let mut strengths = Vec::new();

    // Founder readiness
    if input.founder_readiness.skill_match >= 8.0 {
        strengths.push("Strong skill match — you can start building immediately".to_string());
    }
    if input.founder_readiness.time_availability >= 8.0 {
        strengths.push(format!(
            "{}+ hours/week available — sufficient for launch phase",
            input.founder_readiness.time_availability * 2.0
        ));
    }
    if input.founder_readiness.financial_buffer >= 7.0 {
        strengths.push("Solid financial buffer — can weather slow initial traction".to_string());
    }

    // Idea characteristics
    if input.idea_characteristics.quickness >= 8.0 {
        strengths.push("High quickness — can ship MVP in days, not weeks".to_string());
    }
    if input.idea_characteristics.validation_ease >= 8.0 {
        strengths.push("Easy validation — can test demand within 48 hours".to_string());
    }
    if input.idea_characteristics.market_demand >= 7.0 {
        strengths.push("Proven market demand — competitors validate the space".to_string());
    }

    // Context
    if input.contextual_viability.market_timing >= 8.0 {
        strengths.push("Excellent market timing — ride current trends".to_string());
    }
    if input.contextual_viability.life_stage_fit >= 8.0 {
        strengths.push("Great life stage fit — no major conflicts".to_string());
    }

    // Layer-level
    if layers.founder_readiness.percentage >= 70.0 {
        strengths.push("Overall founder readiness is strong".to_string());
    }
    if layers.historical_patterns.percentage >= 50.0 {
        strengths.push("Category has better-than-average success rates".to_string());
    }

    strengths.truncate(MAX_STRENGTHS);
    strengths
}

/// Generate gaps (risk findings), stable-sorted by severity, at most 5.
pub fn generate_gaps(input: &FullEvaluationInput, layers: &LayerScores) -> Vec<Gap> {
    let mut gaps = Vec::new();

    // Critical gaps
    if input.founder_readiness.financial_buffer <= 3.0 {
        gaps.push(Gap {
            severity: GapSeverity::Critical,
            description: "No financial buffer".to_string(),
            mitigation: "Ideas with 90+ day revenue cycles are high risk without runway".to_string(),
            action: "Set validation milestone at $100 MRR within 30 days or pivot".to_string(),
        });
    }
    if input.founder_readiness.time_availability <= 3.0 {
        gaps.push(Gap {
            severity: GapSeverity::Critical,
            description: "Insufficient time availability".to_string(),
            mitigation: "Less than 10 hrs/week makes consistent progress difficult".to_string(),
            action: "Block dedicated time or consider simpler idea scope".to_string(),
        });
    }

    // Warning gaps
    if input.founder_readiness.skill_match <= 5.0 {
        gaps.push(Gap {
            severity: GapSeverity::Warning,
            description: "Skill gap in required areas".to_string(),
            mitigation: "Missing skills slow down execution and increase failure risk".to_string(),
            action: "Add \"learn core skill\" to Week 1 plan or find co-founder".to_string(),
        });
    }
    if input.idea_characteristics.market_demand <= 4.0 {
        gaps.push(Gap {
            severity: GapSeverity::Warning,
            description: "Unproven market demand".to_string(),
            mitigation: "Inventing new categories has high failure rate".to_string(),
            action: "Find 3 competitors or adjacent products before building".to_string(),
        });
    }
    if input.contextual_viability.life_stage_fit <= 4.0 {
        gaps.push(Gap {
            severity: GapSeverity::Warning,
            description: "Life stage conflicts detected".to_string(),
            mitigation: "Major life events compete for attention and energy".to_string(),
            action: "Consider timing — delay launch or reduce scope".to_string(),
        });
    }

    // Minor gaps
    if input.idea_characteristics.profitability <= 6.0 {
        gaps.push(Gap {
            severity: GapSeverity::Minor,
            description: "Moderate profitability ceiling".to_string(),
            mitigation: "May require high volume or upsells to reach target revenue".to_string(),
            action: "Plan pricing strategy and expansion path early".to_string(),
        });
    }

    if layers.historical_patterns.percentage < 40.0 {
        gaps.push(Gap {
            severity: GapSeverity::Warning,
            description: "Category has high historical failure rate".to_string(),
            mitigation: "Similar ideas often fail — study why".to_string(),
            action: "Review failure modes and implement mitigations before building".to_string(),
        });
    }

    // Stable sort keeps within-tier insertion order
    gaps.sort_by_key(|gap| gap.severity);
    gaps.truncate(MAX_GAPS);
    gaps
}

/// One obstacle per common failure in the category's table entry.
/// No filtering and no cap.
pub fn generate_obstacles(category: IdeaCategory) -> Vec<Obstacle> {
    let failure_data = failure_mode_data(category);

    failure_data
        .common_failures
        .iter()
        .map(|failure| Obstacle {
            name: failure.name.clone(),
            failure_rate: failure.percentage,
            description: format!(
                "{}% of {} ideas fail due to this",
                failure.percentage,
                category.display_name()
            ),
            mitigation: failure.mitigation.clone(),
            action: format!("Address before Week 2: {}", failure.mitigation),
        })
        .collect()
}

/// Pivot suggestion for low-scoring ideas. Returns `None` at overall
/// score 5 or above; otherwise the first matching heuristic wins.
pub fn generate_pivot_suggestion(
    input: &FullEvaluationInput,
    result: &FullEvaluationResult,
) -> Option<String> {
    if result.overall_score >= 5.0 {
        return None;
    }

    // Category pivot when historical patterns are poor and the idea is
    // not already service-shaped
    if result.layers.historical_patterns.percentage < 30.0 {
        let service_like = matches!(
            input.category,
            IdeaCategory::Consulting | IdeaCategory::AgencyService | IdeaCategory::ProductizedService
        );
        if !service_like {
            return Some(
                "Consider repositioning as a service first (consulting/agency) to validate demand before building product."
                    .to_string(),
            );
        }
    }

    // Scope reduction when quickness is low
    if input.idea_characteristics.quickness < 4.0 {
        return Some(
            "Your idea may be too complex. What's the simplest version that still solves the core problem?"
                .to_string(),
        );
    }

    // Audience pivot when validation is hard
    if input.idea_characteristics.validation_ease < 4.0 {
        return Some(
            "Consider targeting a more accessible audience. Who would be easiest to reach and sell to?"
                .to_string(),
        );
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::score_full;
    use crate::types::{
        ContextualViability, EnergyFilter, EnergyFilterResponse, FounderReadiness,
        IdeaCharacteristics,
    };
    use pretty_assertions::assert_eq;

    fn input_with_scores(category: IdeaCategory, score: f64) -> FullEvaluationInput {
        FullEvaluationInput {
            idea_name: "Test".to_string(),
            description: String::new(),
            category,
            founder_readiness: FounderReadiness {
                skill_match: score,
                time_availability: score,
                financial_buffer: score,
            },
            idea_characteristics: IdeaCharacteristics {
                quickness: score,
                profitability: score,
                validation_ease: score,
                market_demand: score,
            },
            contextual_viability: ContextualViability {
                life_stage_fit: score,
                market_timing: score,
            },
            energy_filter: EnergyFilter {
                response: EnergyFilterResponse::Yes,
                reasoning: None,
            },
        }
    }

    #[test]
    fn test_strengths_truncate_in_check_order() {
        let input = input_with_scores(IdeaCategory::Consulting, 9.0);
        let result = score_full(&input);

        let strengths = generate_strengths(&input, &result.layers);
        assert_eq!(strengths.len(), 5);
        assert_eq!(strengths[0], "Strong skill match — you can start building immediately");
        assert_eq!(strengths[1], "18+ hours/week available — sufficient for launch phase");
        assert_eq!(strengths[2], "Solid financial buffer — can weather slow initial traction");
        assert_eq!(strengths[3], "High quickness — can ship MVP in days, not weeks");
        assert_eq!(strengths[4], "Easy validation — can test demand within 48 hours");
    }

    #[test]
    fn test_no_strengths_for_weak_input() {
        let input = input_with_scores(IdeaCategory::Newsletter, 2.0);
        let result = score_full(&input);

        let strengths = generate_strengths(&input, &result.layers);
        assert!(strengths.is_empty());
    }

    #[test]
    fn test_gaps_sorted_by_severity() {
        // Low everything in a high-failure category trips all tiers
        let input = input_with_scores(IdeaCategory::ContentCreator, 2.0);
        let result = score_full(&input);

        let gaps = generate_gaps(&input, &result.layers);
        assert_eq!(gaps.len(), 5);

        let mut last = GapSeverity::Critical;
        for gap in &gaps {
            assert!(gap.severity >= last, "gap out of severity order: {:?}", gap);
            last = gap.severity;
        }
        assert_eq!(gaps[0].severity, GapSeverity::Critical);
        assert_eq!(gaps[0].description, "No financial buffer");
        assert_eq!(gaps[1].description, "Insufficient time availability");
    }

    #[test]
    fn test_gap_action_keeps_literal_milestone() {
        let input = input_with_scores(IdeaCategory::SaasTool, 2.0);
        let result = score_full(&input);

        let gaps = generate_gaps(&input, &result.layers);
        assert!(gaps.iter().any(|g| g.action.contains("$100 MRR within 30 days")));
    }

    #[test]
    fn test_stable_sort_keeps_insertion_order_within_tier() {
        // marketDemand and lifeStageFit both produce warnings; the
        // historical-failure warning is appended after the minor gap and
        // must still land before it without jumping earlier warnings.
        let mut input = input_with_scores(IdeaCategory::ContentCreator, 8.0);
        input.idea_characteristics.market_demand = 3.0;
        input.contextual_viability.life_stage_fit = 3.0;
        input.idea_characteristics.profitability = 5.0;

        let result = score_full(&input);
        let gaps = generate_gaps(&input, &result.layers);

        let descriptions: Vec<&str> = gaps.iter().map(|g| g.description.as_str()).collect();
        assert_eq!(
            descriptions,
            vec![
                "Unproven market demand",
                "Life stage conflicts detected",
                "Category has high historical failure rate",
                "Moderate profitability ceiling",
            ]
        );
    }

    #[test]
    fn test_obstacles_cover_every_common_failure() {
        let obstacles = generate_obstacles(IdeaCategory::Marketplace);

        assert_eq!(obstacles.len(), 3);
        assert_eq!(obstacles[0].name, "Chicken-and-egg problem");
        assert_eq!(obstacles[0].failure_rate, 50.0);
        assert_eq!(obstacles[0].description, "50% of Marketplace ideas fail due to this");
        assert_eq!(
            obstacles[0].action,
            "Address before Week 2: Subsidize one side, constrain geography"
        );
    }

    #[test]
    fn test_pivot_suggestion_absent_for_decent_scores() {
        let input = input_with_scores(IdeaCategory::SaasTool, 8.0);
        let result = score_full(&input);

        assert_eq!(generate_pivot_suggestion(&input, &result), None);
    }

    #[test]
    fn test_pivot_suggests_service_for_bad_category() {
        // content-creator: abandonment 85 → historical raw 1.5 → 15%
        let input = input_with_scores(IdeaCategory::ContentCreator, 3.0);
        let result = score_full(&input);

        let pivot = generate_pivot_suggestion(&input, &result);
        assert!(pivot.unwrap().contains("repositioning as a service"));
    }

    #[test]
    fn test_pivot_skips_service_suggestion_for_service_categories() {
        // agency-service is already service-shaped; quickness heuristic
        // fires instead
        let input = input_with_scores(IdeaCategory::AgencyService, 2.0);
        let result = score_full(&input);
        assert!(result.layers.historical_patterns.percentage >= 30.0);

        let pivot = generate_pivot_suggestion(&input, &result).unwrap();
        assert!(pivot.contains("simplest version"));
    }
}
