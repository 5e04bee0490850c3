// ABOUTME: Improvement suggestion engine for evaluated ideas
// ABOUTME: Layer-gated threshold checks producing prioritized, score-gain-ranked recommendations

use crate::types::{
    EnergyFilterStatus, FullEvaluationInput, FullEvaluationResult, ImprovementSuggestion,
    LayerScores, SuggestionPriority,
};

const MAX_SUGGESTIONS: usize = 5;

/// Generate at most 5 improvement suggestions, ordered by priority and
/// then by descending potential score gain within each tier.
pub fn generate_improvement_suggestions(
    input: &FullEvaluationInput,
    result: &FullEvaluationResult,
) -> Vec<ImprovementSuggestion> {
    let mut suggestions = Vec::new();

    // Layer 1: founder readiness
    if result.layers.founder_readiness.percentage < 70.0 {
        if input.founder_readiness.skill_match < 6.0 {
            suggestions.push(ImprovementSuggestion {
                priority: SuggestionPriority::High,
                category: "Founder Readiness".to_string(),
                title: "Address Skill Gap".to_string(),
                description: format!(
                    "Your skill match score of {}/10 is limiting your readiness.",
                    input.founder_readiness.skill_match
                ),
                impact: "Could improve overall score by 0.5-1.0 points".to_string(),
                action: "Consider: (1) Take a focused 2-week crash course, (2) Find a technical co-founder, or (3) Use no-code tools to bridge the gap".to_string(),
                potential_score_gain: 0.8,
            });
        }

        if input.founder_readiness.time_availability < 5.0 {
            suggestions.push(ImprovementSuggestion {
                priority: SuggestionPriority::High,
                category: "Founder Readiness".to_string(),
                title: "Increase Time Commitment".to_string(),
                description: format!(
                    "Only {} hours/week may not be enough for consistent progress.",
                    input.founder_readiness.time_availability * 2.0
                ),
                impact: "Could improve overall score by 0.3-0.6 points".to_string(),
                action: "Block 2-hour daily slots, delegate other responsibilities, or consider a simpler MVP scope".to_string(),
                potential_score_gain: 0.5,
            });
        }

        if input.founder_readiness.financial_buffer < 5.0 {
            suggestions.push(ImprovementSuggestion {
                priority: SuggestionPriority::Medium,
                category: "Founder Readiness".to_string(),
                title: "Build Financial Runway".to_string(),
                description: "Limited financial buffer increases pressure and risk of premature abandonment.".to_string(),
                impact: "Could improve overall score by 0.2-0.4 points".to_string(),
                action: "Set a validation milestone (e.g., $100 MRR in 30 days) before going all-in, or keep day job while validating".to_string(),
                potential_score_gain: 0.3,
            });
        }
    }

    // Layer 2: idea characteristics
    if result.layers.idea_characteristics.percentage < 70.0 {
        if input.idea_characteristics.quickness < 6.0 {
            suggestions.push(ImprovementSuggestion {
                priority: SuggestionPriority::High,
                category: "Idea Characteristics".to_string(),
                title: "Simplify Your MVP".to_string(),
                description: format!(
                    "Quickness score of {}/10 suggests scope is too large.",
                    input.idea_characteristics.quickness
                ),
                impact: "Could improve overall score by 0.6-1.0 points (highest weight layer)".to_string(),
                action: "Cut features to ship in 48 hours: What's the ONE thing that proves demand? Build only that.".to_string(),
                potential_score_gain: 0.9,
            });
        }

        if input.idea_characteristics.validation_ease < 6.0 {
            suggestions.push(ImprovementSuggestion {
                priority: SuggestionPriority::High,
                category: "Idea Characteristics".to_string(),
                title: "Design for Faster Validation".to_string(),
                description: "Slow validation means longer time to learn if the idea works.".to_string(),
                impact: "Could improve overall score by 0.4-0.6 points".to_string(),
                action: "Pre-sell before building: Create a landing page with \"Buy Now\" button, run $50 in ads, measure clicks".to_string(),
                potential_score_gain: 0.5,
            });
        }

        if input.idea_characteristics.market_demand < 5.0 {
            suggestions.push(ImprovementSuggestion {
                priority: SuggestionPriority::Medium,
                category: "Idea Characteristics".to_string(),
                title: "Validate Market Demand".to_string(),
                description: "Unproven market demand is a major risk factor.".to_string(),
                impact: "Could improve overall score by 0.2-0.3 points".to_string(),
                action: "Find 3 competitors or adjacent products. If none exist, you may be inventing a category (high risk).".to_string(),
                potential_score_gain: 0.25,
            });
        }

        if input.idea_characteristics.profitability < 6.0 {
            suggestions.push(ImprovementSuggestion {
                priority: SuggestionPriority::Medium,
                category: "Idea Characteristics".to_string(),
                title: "Improve Revenue Model".to_string(),
                description: format!(
                    "Profitability score of {}/10 suggests monetization challenges.",
                    input.idea_characteristics.profitability
                ),
                impact: "Could improve overall score by 0.3-0.5 points".to_string(),
                action: "Consider: (1) Higher price point with more value, (2) Recurring revenue model, (3) Upsell path to enterprise".to_string(),
                potential_score_gain: 0.4,
            });
        }
    }

    // Layer 3: historical patterns
    if result.layers.historical_patterns.percentage < 50.0 {
        let display_name = input.category.display_name();
        suggestions.push(ImprovementSuggestion {
            priority: SuggestionPriority::Medium,
            category: "Historical Patterns".to_string(),
            title: format!("Study {} Failures", display_name),
            description: format!("{} ideas have high historical failure rates.", display_name),
            impact: "Understanding failure modes can prevent common mistakes".to_string(),
            action: "Review the top 3 failure modes for your category and implement mitigations BEFORE building".to_string(),
            potential_score_gain: 0.3,
        });
    }

    // Layer 4: contextual viability
    if result.layers.contextual_viability.percentage < 60.0 {
        if input.contextual_viability.life_stage_fit < 5.0 {
            suggestions.push(ImprovementSuggestion {
                priority: SuggestionPriority::Low,
                category: "Contextual Viability".to_string(),
                title: "Address Life Stage Conflicts".to_string(),
                description: "Major life events competing for attention increase failure risk.".to_string(),
                impact: "Could improve overall score by 0.1-0.2 points".to_string(),
                action: "Consider delaying launch by 3-6 months, or reduce scope to \"maintenance mode\" level of effort".to_string(),
                potential_score_gain: 0.15,
            });
        }

        if input.contextual_viability.market_timing < 5.0 {
            suggestions.push(ImprovementSuggestion {
                priority: SuggestionPriority::Low,
                category: "Contextual Viability".to_string(),
                title: "Reconsider Market Timing".to_string(),
                description: "Poor market timing can doom even great ideas.".to_string(),
                impact: "Could improve overall score by 0.1-0.2 points".to_string(),
                action: "Research: Is the market growing? Are there recent funding rounds in this space? Any regulatory tailwinds?".to_string(),
                potential_score_gain: 0.15,
            });
        }
    }

    // Energy filter
    if result.energy_filter_status == EnergyFilterStatus::Revise {
        suggestions.push(ImprovementSuggestion {
            priority: SuggestionPriority::High,
            category: "Energy Filter".to_string(),
            title: "Refine Your Idea Scope".to_string(),
            description: "You're uncertain about maintaining this at $500/month - that's a red flag.".to_string(),
            impact: "Critical for long-term sustainability".to_string(),
            action: "Ask: What would need to change for you to be proud of this? Adjust scope, audience, or business model accordingly.".to_string(),
            potential_score_gain: 0.0,
        });
    }

    // "Close but missing" quick win for ideas in the 5-7 band
    if result.overall_score >= 5.0 && result.overall_score < 7.0 {
        let (layer_name, percentage) = lowest_layer(&result.layers);
        suggestions.insert(0, ImprovementSuggestion {
            priority: SuggestionPriority::High,
            category: "Quick Win".to_string(),
            title: format!("Your idea is close! Focus on {}", layer_name),
            description: format!(
                "At {}/10, you're in the \"moderate\" zone. A few targeted improvements could push you to \"strong\" (7+).",
                result.overall_score
            ),
            impact: format!(
                "Improving {} from {}% could add 0.5-1.0 points",
                layer_name, percentage
            ),
            action: format!(
                "Your lowest-scoring layer is {} at {}%. Focus your energy here first.",
                layer_name, percentage
            ),
            potential_score_gain: 1.0,
        });
    }

    // Stable sort: priority tier first, larger gains first within a tier
    suggestions.sort_by(|a, b| {
        a.priority
            .cmp(&b.priority)
            .then_with(|| b.potential_score_gain.total_cmp(&a.potential_score_gain))
    });
    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

/// Lowest-percentage layer by display name. Ties keep the earlier layer
/// in the fixed founder/idea/historical/contextual order.
fn lowest_layer(layers: &LayerScores) -> (&'static str, f64) {
    let entries = [
        ("Founder Readiness", layers.founder_readiness.percentage),
        ("Idea Characteristics", layers.idea_characteristics.percentage),
        ("Historical Patterns", layers.historical_patterns.percentage),
        ("Contextual Viability", layers.contextual_viability.percentage),
    ];

    let mut lowest = entries[0];
    for entry in &entries[1..] {
        if entry.1 < lowest.1 {
            lowest = *entry;
        }
    }
    lowest
}

/// Project the score if all suggestions were implemented: total gain
/// with a 0.7 diminishing-returns factor, capped at 10.
pub fn calculate_potential_score(current_score: f64, suggestions: &[ImprovementSuggestion]) -> f64 {
    let total_gain: f64 = suggestions.iter().map(|s| s.potential_score_gain).sum();
    let adjusted_gain = (total_gain * 0.7).min(10.0 - current_score);
    (current_score + adjusted_gain).min(10.0)
}
