// ABOUTME: Basic QPV and multi-layer Pulse 2.0 scoring engines
// ABOUTME: Weighted-sum formulas, layer score calculation, and evaluation assembly

use chrono::Utc;
use tracing::debug;

use crate::failure_modes::failure_mode_data;
use crate::insights;
use crate::types::{
    BasicQpvInput, BasicQpvResult, ContextualViability, FounderReadiness, FullEvaluationInput,
    FullEvaluationResult, IdeaCategory, IdeaCharacteristics, Interpretation, LayerScore,
    LayerScores,
};
use crate::validation::clamp_score;

/// Layer weights for the full evaluation. Must sum to 1.0.
pub const FOUNDER_READINESS_WEIGHT: f64 = 0.30;
pub const IDEA_CHARACTERISTICS_WEIGHT: f64 = 0.40;
pub const HISTORICAL_PATTERNS_WEIGHT: f64 = 0.20;
pub const CONTEXTUAL_VIABILITY_WEIGHT: f64 = 0.10;

// Sub-weights within the idea characteristics layer, in units of
// "percent of total score". They sum to the layer's 40% weight.
const QUICKNESS_WEIGHT: f64 = 0.15;
const PROFITABILITY_WEIGHT: f64 = 0.10;
const VALIDATION_EASE_WEIGHT: f64 = 0.10;
const MARKET_DEMAND_WEIGHT: f64 = 0.05;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn layer_score(raw: f64, weight: f64) -> LayerScore {
    LayerScore {
        raw: round2(raw),
        weighted: round2(raw * weight),
        percentage: round1(raw / 10.0 * 100.0),
    }
}

/// Calculate the basic (free tier) QPV score.
///
/// Formula: `quickness × 0.4 + profitability × 0.3 + validationEase × 0.3`,
/// rounded to two decimals. The failure teaser always reads the generic
/// `other` entry: tier 1 has no category field.
pub fn score_basic(input: &BasicQpvInput) -> BasicQpvResult {
    debug!("Scoring basic QPV for idea {:?}", input.idea_name);

    let quickness = clamp_score(input.quickness, "quickness");
    let profitability = clamp_score(input.profitability, "profitability");
    let validation_ease = clamp_score(input.validation_ease, "validationEase");

    let score = round2(quickness * 0.4 + profitability * 0.3 + validation_ease * 0.3);
    let interpretation = Interpretation::for_score(score);

    let failure_data = failure_mode_data(IdeaCategory::Other);
    let failure_teaser = format!(
        "But {}% of similar ideas fail. Want to see why?",
        failure_data.abandonment_rate
    );

    BasicQpvResult {
        score,
        interpretation,
        failure_teaser,
    }
}

/// Layer 1: founder readiness (30% weight). Unweighted average of the
/// three inputs, each implicitly 1/3 of the layer.
fn calculate_founder_readiness(readiness: &FounderReadiness) -> LayerScore {
    let raw = (readiness.skill_match + readiness.time_availability + readiness.financial_buffer) / 3.0;
    layer_score(raw, FOUNDER_READINESS_WEIGHT)
}

/// Layer 2: idea characteristics (40% weight). The weighted
/// sub-combination is divided by the layer weight to renormalize back
/// onto a 0-10 raw scale before the layer weight is reapplied; the
/// two-step form is kept for rounding parity with downstream consumers.
fn calculate_idea_characteristics(characteristics: &IdeaCharacteristics) -> LayerScore {
    let raw = (characteristics.quickness * QUICKNESS_WEIGHT
        + characteristics.profitability * PROFITABILITY_WEIGHT
        + characteristics.validation_ease * VALIDATION_EASE_WEIGHT
        + characteristics.market_demand * MARKET_DEMAND_WEIGHT)
        / IDEA_CHARACTERISTICS_WEIGHT;
    layer_score(raw, IDEA_CHARACTERISTICS_WEIGHT)
}

/// Layer 3: historical patterns (20% weight). Derived from the
/// failure-mode table, not from user input. Completion is weighted 3x
/// more heavily than sustainability within the layer.
fn calculate_historical_patterns(category: IdeaCategory) -> LayerScore {
    let failure_data = failure_mode_data(category);

    let completion_score = 10.0 - failure_data.abandonment_rate / 10.0;
    let sustainability_score = failure_data.sustainability_rate / 10.0;

    let raw = completion_score * 0.75 + sustainability_score * 0.25;
    layer_score(raw, HISTORICAL_PATTERNS_WEIGHT)
}

/// Layer 4: contextual viability (10% weight). Unweighted average of
/// life stage fit and market timing.
fn calculate_contextual_viability(viability: &ContextualViability) -> LayerScore {
    let raw = (viability.life_stage_fit + viability.market_timing) / 2.0;
    layer_score(raw, CONTEXTUAL_VIABILITY_WEIGHT)
}

/// Clamped copy of the input so the scorers and insight rules see the
/// same normalized values. The reference relied on upstream validation;
/// clamping here keeps every scoring function total on raw input.
fn normalized(input: &FullEvaluationInput) -> FullEvaluationInput {
    let mut input = input.clone();

    input.founder_readiness.skill_match =
        clamp_score(input.founder_readiness.skill_match, "founderReadiness.skillMatch");
    input.founder_readiness.time_availability = clamp_score(
        input.founder_readiness.time_availability,
        "founderReadiness.timeAvailability",
    );
    input.founder_readiness.financial_buffer = clamp_score(
        input.founder_readiness.financial_buffer,
        "founderReadiness.financialBuffer",
    );

    input.idea_characteristics.quickness =
        clamp_score(input.idea_characteristics.quickness, "ideaCharacteristics.quickness");
    input.idea_characteristics.profitability = clamp_score(
        input.idea_characteristics.profitability,
        "ideaCharacteristics.profitability",
    );
    input.idea_characteristics.validation_ease = clamp_score(
        input.idea_characteristics.validation_ease,
        "ideaCharacteristics.validationEase",
    );
    input.idea_characteristics.market_demand = clamp_score(
        input.idea_characteristics.market_demand,
        "ideaCharacteristics.marketDemand",
    );

    input.contextual_viability.life_stage_fit =
        clamp_score(input.contextual_viability.life_stage_fit, "contextualViability.lifeStageFit");
    input.contextual_viability.market_timing =
        clamp_score(input.contextual_viability.market_timing, "contextualViability.marketTiming");

    input
}

/// Calculate the full Pulse 2.0 evaluation: four weighted layers,
/// interpretation, insights, and the energy filter gate.
pub fn score_full(input: &FullEvaluationInput) -> FullEvaluationResult {
    debug!(
        "Scoring full evaluation for idea {:?} in category {}",
        input.idea_name, input.category
    );

    let input = normalized(input);

    let layers = LayerScores {
        founder_readiness: calculate_founder_readiness(&input.founder_readiness),
        idea_characteristics: calculate_idea_characteristics(&input.idea_characteristics),
        historical_patterns: calculate_historical_patterns(input.category),
        contextual_viability: calculate_contextual_viability(&input.contextual_viability),
    };

    let overall_score = round2(
        layers.founder_readiness.weighted
            + layers.idea_characteristics.weighted
            + layers.historical_patterns.weighted
            + layers.contextual_viability.weighted,
    );
    let interpretation = Interpretation::for_score(overall_score);

    let strengths = insights::generate_strengths(&input, &layers);
    let gaps = insights::generate_gaps(&input, &layers);
    let obstacles = insights::generate_obstacles(input.category);

    let energy_filter_status = input.energy_filter.response.status();
    let energy_filter_reasoning = input
        .energy_filter
        .reasoning
        .as_deref()
        .filter(|reasoning| !reasoning.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| energy_filter_status.default_reasoning().to_string());

    FullEvaluationResult {
        overall_score,
        interpretation,
        layers,
        strengths,
        gaps,
        obstacles,
        energy_filter_status,
        energy_filter_reasoning,
        evaluated_at: Utc::now(),
        idea_id: generate_idea_id(&input.idea_name),
    }
}

/// Generate a slug-plus-timestamp idea id. Collision avoidance is
/// practical, not cryptographic.
fn generate_idea_id(idea_name: &str) -> String {
    let slug: String = idea_name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .take(20)
        .collect();
    let timestamp = to_base36(Utc::now().timestamp_millis().max(0) as u64);
    format!("{}-{}", slug, timestamp)
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}
