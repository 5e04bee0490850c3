// ABOUTME: Type definitions for the Pulse evaluation engine
// ABOUTME: Defines idea categories, tier inputs/results, layer scores, and insight types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Idea category used as the lookup key into the failure-mode table.
///
/// The kebab-case slugs are the wire contract with callers and must stay
/// stable. Unknown slugs resolve to [`IdeaCategory::Other`] via
/// [`IdeaCategory::from_slug`] instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdeaCategory {
    AiWrapper,
    SaasTool,
    MicroSaas,
    NotionTemplate,
    DigitalProduct,
    Newsletter,
    ContentCreator,
    Community,
    Marketplace,
    InfoProduct,
    AgencyService,
    Consulting,
    ProductizedService,
    Ecommerce,
    MobileApp,
    ChromeExtension,
    Other,
}

impl IdeaCategory {
    /// All categories in table order.
    pub const ALL: [IdeaCategory; 17] = [
        IdeaCategory::AiWrapper,
        IdeaCategory::SaasTool,
        IdeaCategory::MicroSaas,
        IdeaCategory::NotionTemplate,
        IdeaCategory::DigitalProduct,
        IdeaCategory::Newsletter,
        IdeaCategory::ContentCreator,
        IdeaCategory::Community,
        IdeaCategory::Marketplace,
        IdeaCategory::InfoProduct,
        IdeaCategory::AgencyService,
        IdeaCategory::Consulting,
        IdeaCategory::ProductizedService,
        IdeaCategory::Ecommerce,
        IdeaCategory::MobileApp,
        IdeaCategory::ChromeExtension,
        IdeaCategory::Other,
    ];

    /// Parse a category slug, falling back to `Other` for anything unknown.
    ///
    /// This is the single conversion point for untrusted category strings;
    /// callers should never match on raw slugs themselves.
    pub fn from_slug(slug: &str) -> Self {
        match slug {
            "ai-wrapper" => IdeaCategory::AiWrapper,
            "saas-tool" => IdeaCategory::SaasTool,
            "micro-saas" => IdeaCategory::MicroSaas,
            "notion-template" => IdeaCategory::NotionTemplate,
            "digital-product" => IdeaCategory::DigitalProduct,
            "newsletter" => IdeaCategory::Newsletter,
            "content-creator" => IdeaCategory::ContentCreator,
            "community" => IdeaCategory::Community,
            "marketplace" => IdeaCategory::Marketplace,
            "info-product" => IdeaCategory::InfoProduct,
            "agency-service" => IdeaCategory::AgencyService,
            "consulting" => IdeaCategory::Consulting,
            "productized-service" => IdeaCategory::ProductizedService,
            "ecommerce" => IdeaCategory::Ecommerce,
            "mobile-app" => IdeaCategory::MobileApp,
            "chrome-extension" => IdeaCategory::ChromeExtension,
            _ => IdeaCategory::Other,
        }
    }

    /// Wire slug for this category.
    pub fn slug(&self) -> &'static str {
        match self {
            IdeaCategory::AiWrapper => "ai-wrapper",
            IdeaCategory::SaasTool => "saas-tool",
            IdeaCategory::MicroSaas => "micro-saas",
            IdeaCategory::NotionTemplate => "notion-template",
            IdeaCategory::DigitalProduct => "digital-product",
            IdeaCategory::Newsletter => "newsletter",
            IdeaCategory::ContentCreator => "content-creator",
            IdeaCategory::Community => "community",
            IdeaCategory::Marketplace => "marketplace",
            IdeaCategory::InfoProduct => "info-product",
            IdeaCategory::AgencyService => "agency-service",
            IdeaCategory::Consulting => "consulting",
            IdeaCategory::ProductizedService => "productized-service",
            IdeaCategory::Ecommerce => "ecommerce",
            IdeaCategory::MobileApp => "mobile-app",
            IdeaCategory::ChromeExtension => "chrome-extension",
            IdeaCategory::Other => "other",
        }
    }

    /// Human-readable display name used in reports and exports.
    pub fn display_name(&self) -> &'static str {
        match self {
            IdeaCategory::AiWrapper => "AI Wrapper/Tool",
            IdeaCategory::SaasTool => "SaaS Tool",
            IdeaCategory::MicroSaas => "Micro-SaaS",
            IdeaCategory::NotionTemplate => "Notion Template",
            IdeaCategory::DigitalProduct => "Digital Product",
            IdeaCategory::Newsletter => "Newsletter",
            IdeaCategory::ContentCreator => "Content Creator",
            IdeaCategory::Community => "Community",
            IdeaCategory::Marketplace => "Marketplace",
            IdeaCategory::InfoProduct => "Info Product/Course",
            IdeaCategory::AgencyService => "Agency/Service",
            IdeaCategory::Consulting => "Consulting",
            IdeaCategory::ProductizedService => "Productized Service",
            IdeaCategory::Ecommerce => "E-commerce",
            IdeaCategory::MobileApp => "Mobile App",
            IdeaCategory::ChromeExtension => "Chrome Extension",
            IdeaCategory::Other => "Other",
        }
    }
}

impl std::fmt::Display for IdeaCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// Score interpretation bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interpretation {
    /// 8.0-10.0: Launch this now
    Exceptional,
    /// 6.0-7.9: Prioritize within 1-2 weeks
    Strong,
    /// 4.0-5.9: Validate further before committing
    Moderate,
    /// 0.0-3.9: Reconsider or pivot significantly
    Weak,
}

impl Interpretation {
    /// Bucket a 0-10 score. Boundaries are inclusive at the lower bound,
    /// so exactly 8.0 is `Exceptional` and 7.99 is `Strong`.
    pub fn for_score(score: f64) -> Self {
        if score >= 8.0 {
            Interpretation::Exceptional
        } else if score >= 6.0 {
            Interpretation::Strong
        } else if score >= 4.0 {
            Interpretation::Moderate
        } else {
            Interpretation::Weak
        }
    }

    /// Human-readable interpretation text for reports.
    pub fn text(&self) -> &'static str {
        match self {
            Interpretation::Exceptional => "Exceptional — launch this now",
            Interpretation::Strong => "Strong — prioritize within 1-2 weeks",
            Interpretation::Moderate => "Moderate — validate further before committing",
            Interpretation::Weak => "Weak — reconsider or pivot significantly",
        }
    }
}

/// Basic (free tier) QPV calculator input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicQpvInput {
    pub idea_name: String,
    pub description: String,
    pub quickness: f64,       // 0-10: How fast can you ship?
    pub profitability: f64,   // 0-10: Revenue potential vs effort
    pub validation_ease: f64, // 0-10: How quickly can you validate demand?
}

/// Basic QPV result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicQpvResult {
    /// Weighted score, 0-10, two-decimal precision.
    pub score: f64,
    pub interpretation: Interpretation,
    /// Upgrade teaser formatted from the generic failure-mode entry.
    pub failure_teaser: String,
}

/// Layer 1: founder readiness inputs (30% weight).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FounderReadiness {
    pub skill_match: f64,       // 0-10: Do you have the skills NOW?
    pub time_availability: f64, // 0-10: Hours per week available
    pub financial_buffer: f64,  // 0-10: Runway/emergency fund
}

/// Layer 2: idea characteristics inputs (40% weight).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaCharacteristics {
    pub quickness: f64,       // 0-10: Time to ship (15% of total)
    pub profitability: f64,   // 0-10: Revenue potential (10% of total)
    pub validation_ease: f64, // 0-10: Speed to validate (10% of total)
    pub market_demand: f64,   // 0-10: Proven demand exists? (5% of total)
}

/// Layer 4: contextual viability inputs (10% weight).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextualViability {
    pub life_stage_fit: f64, // 0-10: Conflicts with major life events?
    pub market_timing: f64,  // 0-10: Right time for THIS idea?
}

/// Energy filter response (qualitative gate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyFilterResponse {
    Yes,
    No,
    Maybe,
}

/// Energy filter outcome, derived 1:1 from the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyFilterStatus {
    Pass,
    Fail,
    Revise,
}

impl EnergyFilterResponse {
    pub fn status(&self) -> EnergyFilterStatus {
        match self {
            EnergyFilterResponse::Yes => EnergyFilterStatus::Pass,
            EnergyFilterResponse::No => EnergyFilterStatus::Fail,
            EnergyFilterResponse::Maybe => EnergyFilterStatus::Revise,
        }
    }
}

impl EnergyFilterStatus {
    /// Canned reasoning used when the caller supplied none.
    pub fn default_reasoning(&self) -> &'static str {
        match self {
            EnergyFilterStatus::Pass => "You would be proud to maintain this at $500/month",
            EnergyFilterStatus::Fail => {
                "This idea is misaligned with your values — not worth maintaining even if profitable"
            }
            EnergyFilterStatus::Revise => {
                "The scope, audience, or business model needs adjustment before committing"
            }
        }
    }
}

/// Energy filter input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyFilter {
    pub response: EnergyFilterResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
}

/// Complete multi-layer evaluation input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullEvaluationInput {
    pub idea_name: String,
    pub description: String,
    pub category: IdeaCategory,
    pub founder_readiness: FounderReadiness,
    pub idea_characteristics: IdeaCharacteristics,
    pub contextual_viability: ContextualViability,
    pub energy_filter: EnergyFilter,
}

/// One layer's score breakdown.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerScore {
    /// 0-10 scale, two decimals.
    pub raw: f64,
    /// Raw score after applying the layer weight, two decimals.
    pub weighted: f64,
    /// `raw / 10 × 100`, one decimal.
    pub percentage: f64,
}

/// The four layer scores of a full evaluation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerScores {
    pub founder_readiness: LayerScore,
    pub idea_characteristics: LayerScore,
    pub historical_patterns: LayerScore,
    pub contextual_viability: LayerScore,
}

/// Gap severity. Declaration order doubles as sort order: critical first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GapSeverity {
    Critical,
    Warning,
    Minor,
}

/// Risk finding derived from evaluation scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gap {
    #[serde(rename = "type")]
    pub severity: GapSeverity,
    pub description: String,
    pub mitigation: String,
    pub action: String,
}

/// Category-specific failure mode surfaced as an obstacle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Obstacle {
    pub name: String,
    /// Percentage of ideas in the category that fail this way.
    pub failure_rate: f64,
    pub description: String,
    pub mitigation: String,
    pub action: String,
}

/// Full Pulse 2.0 evaluation result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullEvaluationResult {
    /// Sum of the four weighted layer scores, 0-10, two decimals.
    pub overall_score: f64,
    pub interpretation: Interpretation,
    pub layers: LayerScores,
    /// Top strengths, at most 5, in fixed check order.
    pub strengths: Vec<String>,
    /// Top gaps, at most 5, severity-sorted.
    pub gaps: Vec<Gap>,
    /// One obstacle per common failure in the category.
    pub obstacles: Vec<Obstacle>,
    pub energy_filter_status: EnergyFilterStatus,
    pub energy_filter_reasoning: String,
    pub evaluated_at: DateTime<Utc>,
    /// Slug-plus-timestamp identifier, not security sensitive.
    pub idea_id: String,
}

/// Improvement suggestion priority. Declaration order doubles as sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionPriority {
    High,
    Medium,
    Low,
}

/// Actionable recommendation to improve an idea's score.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovementSuggestion {
    pub priority: SuggestionPriority,
    pub category: String,
    pub title: String,
    pub description: String,
    pub impact: String,
    pub action: String,
    /// Estimated additive points if implemented.
    pub potential_score_gain: f64,
}

/// One named failure pattern within a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonFailure {
    pub name: String,
    pub percentage: f64,
    pub mitigation: String,
}

/// Historical abandonment/sustainability data for one category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureModeEntry {
    pub category: IdeaCategory,
    /// Percent of ideas in the category abandoned, 0-100.
    pub abandonment_rate: f64,
    /// Percent still active after the reference period, 0-100.
    pub sustainability_rate: f64,
    pub common_failures: Vec<CommonFailure>,
}

/// Versioned envelope for persisting or exporting a complete evaluation.
///
/// Replaces the loose JSON blob the surrounding application used to store:
/// the version tag makes future schema evolution checkable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationEnvelope {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    pub input: FullEvaluationInput,
    pub result: FullEvaluationResult,
    pub suggestions: Vec<ImprovementSuggestion>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_category_slug_round_trip() {
        for category in IdeaCategory::ALL {
            assert_eq!(IdeaCategory::from_slug(category.slug()), category);
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.slug()));
        }
    }

    #[test]
    fn test_unknown_slug_falls_back_to_other() {
        assert_eq!(IdeaCategory::from_slug("nonexistent-category"), IdeaCategory::Other);
        assert_eq!(IdeaCategory::from_slug(""), IdeaCategory::Other);
        assert_eq!(IdeaCategory::from_slug("SaaS-Tool"), IdeaCategory::Other);
    }

    #[test]
    fn test_interpretation_bucket_boundaries() {
        assert_eq!(Interpretation::for_score(10.0), Interpretation::Exceptional);
        assert_eq!(Interpretation::for_score(8.0), Interpretation::Exceptional);
        assert_eq!(Interpretation::for_score(7.99), Interpretation::Strong);
        assert_eq!(Interpretation::for_score(6.0), Interpretation::Strong);
        assert_eq!(Interpretation::for_score(5.99), Interpretation::Moderate);
        assert_eq!(Interpretation::for_score(4.0), Interpretation::Moderate);
        assert_eq!(Interpretation::for_score(3.99), Interpretation::Weak);
        assert_eq!(Interpretation::for_score(0.0), Interpretation::Weak);
    }

    #[test]
    fn test_energy_filter_mapping_is_exhaustive() {
        assert_eq!(EnergyFilterResponse::Yes.status(), EnergyFilterStatus::Pass);
        assert_eq!(EnergyFilterResponse::No.status(), EnergyFilterStatus::Fail);
        assert_eq!(EnergyFilterResponse::Maybe.status(), EnergyFilterStatus::Revise);
    }

    #[test]
    fn test_gap_serializes_severity_as_type() {
        let gap = Gap {
            severity: GapSeverity::Critical,
            description: "No financial buffer".to_string(),
            mitigation: "m".to_string(),
            action: "a".to_string(),
        };

        let json = serde_json::to_value(&gap).unwrap();
        assert_eq!(json["type"], "critical");
        assert!(json.get("severity").is_none());
    }

    #[test]
    fn test_severity_and_priority_ordering() {
        assert!(GapSeverity::Critical < GapSeverity::Warning);
        assert!(GapSeverity::Warning < GapSeverity::Minor);
        assert!(SuggestionPriority::High < SuggestionPriority::Medium);
        assert!(SuggestionPriority::Medium < SuggestionPriority::Low);
    }

    #[test]
    fn test_input_uses_camel_case_wire_names() {
        let input = FullEvaluationInput {
            idea_name: "Test".to_string(),
            description: String::new(),
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
        };

        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["ideaName"], "Test");
        assert_eq!(json["category"], "saas-tool");
        assert_eq!(json["founderReadiness"]["skillMatch"], 8.0);
        assert_eq!(json["ideaCharacteristics"]["validationEase"], 8.0);
        assert_eq!(json["contextualViability"]["lifeStageFit"], 8.0);
        assert_eq!(json["energyFilter"]["response"], "yes");
    }
}
