// ABOUTME: Export service for evaluation reports in multiple formats
// ABOUTME: Supports Markdown, JSON envelope, batch CSV, and PDF-description export

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use pulse_evaluation::{
    EnergyFilterStatus, EvaluationEnvelope, FullEvaluationInput, FullEvaluationResult,
    GapSeverity, ImprovementSuggestion, Result, SuggestionPriority,
};

/// Envelope schema version written by the JSON exporter.
pub const ENVELOPE_VERSION: &str = "2.0";

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Markdown,
    Json,
    Csv,
    Pdf,
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Markdown => write!(f, "markdown"),
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Pdf => write!(f, "pdf"),
        }
    }
}

/// Export result with content and metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportResult {
    pub format: ExportFormat,
    pub content: String,
    pub file_name: String,
    pub mime_type: String,
    pub size_bytes: usize,
}

/// Export options for customizing output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportOptions {
    pub format: ExportFormat,
    /// Include the raw input echo section in report formats.
    pub include_input_echo: bool,
    pub title: Option<String>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Markdown,
            include_input_echo: true,
            title: None,
        }
    }
}

/// Structured description of a report for a PDF-rendering collaborator.
/// Rendering itself is out of scope; this is the contract it consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfDescription {
    pub title: String,
    pub subtitle: String,
    pub sections: Vec<PdfSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfSection {
    pub heading: String,
    pub body: String,
}

/// Idea fields recoverable from a CSV import row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CsvIdeaDraft {
    pub idea_name: String,
    pub description: Option<String>,
}

/// Evaluation report export service
pub struct ExportService;

impl ExportService {
    pub fn new() -> Self {
        Self
    }

    /// Export a single evaluation in the requested format.
    pub fn export_evaluation(
        &self,
        input: &FullEvaluationInput,
        result: &FullEvaluationResult,
        suggestions: Option<&[ImprovementSuggestion]>,
        options: &ExportOptions,
    ) -> Result<ExportResult> {
        info!("Exporting evaluation {} in {} format", result.idea_id, options.format);

        let content = match options.format {
            ExportFormat::Markdown => self.markdown_report(input, result, suggestions, options),
            ExportFormat::Json => self.json_envelope(input, result, suggestions)?,
            ExportFormat::Csv => self.csv_export(&[(input.clone(), result.clone())]),
            ExportFormat::Pdf => {
                let description = self.pdf_description(input, result, suggestions);
                serde_json::to_string_pretty(&description)?
            }
        };

        let file_name = self.generate_filename(input, options.format);
        let mime_type = self.mime_type(options.format).to_string();
        let size_bytes = content.len();

        Ok(ExportResult {
            format: options.format,
            content,
            file_name,
            mime_type,
            size_bytes,
        })
    }

    /// Render the Markdown report. Section order and field formatting
    /// are part of the output contract with existing consumers.
    pub fn markdown_report(
        &self,
        input: &FullEvaluationInput,
        result: &FullEvaluationResult,
        suggestions: Option<&[ImprovementSuggestion]>,
        options: &ExportOptions,
    ) -> String {
        let mut lines: Vec<String> = Vec::new();

        // Header
        let title = options.title.as_deref().unwrap_or("Pulse Evaluation Report");
        lines.push(format!("# {}", title));
        lines.push(String::new());
        lines.push(format!("**Idea:** {}", input.idea_name));
        lines.push(format!("**Category:** {}", input.category.display_name()));
        lines.push(format!("**Evaluated:** {}", result.evaluated_at.format("%Y-%m-%d")));
        lines.push(format!("**ID:** {}", result.idea_id));
        lines.push(String::new());

        // Overall score
        lines.push(format!("## Overall Score: {}/10", result.overall_score));
        lines.push(String::new());
        lines.push(format!("**Interpretation:** {}", result.interpretation.text()));
        lines.push(String::new());

        // Description
        if !input.description.is_empty() {
            lines.push("### Description".to_string());
            lines.push(String::new());
            lines.push(input.description.clone());
            lines.push(String::new());
        }

        // Layer breakdown
        lines.push("## Layer Breakdown".to_string());
        lines.push(String::new());
        lines.push("| Layer | Score | Weight | Contribution |".to_string());
        lines.push("|-------|-------|--------|--------------|".to_string());
        lines.push(format!(
            "| Founder Readiness | {}% | 30% | {:.2} |",
            result.layers.founder_readiness.percentage, result.layers.founder_readiness.weighted
        ));
        lines.push(format!(
            "| Idea Characteristics | {}% | 40% | {:.2} |",
            result.layers.idea_characteristics.percentage,
            result.layers.idea_characteristics.weighted
        ));
        lines.push(format!(
            "| Historical Patterns | {}% | 20% | {:.2} |",
            result.layers.historical_patterns.percentage,
            result.layers.historical_patterns.weighted
        ));
        lines.push(format!(
            "| Contextual Viability | {}% | 10% | {:.2} |",
            result.layers.contextual_viability.percentage,
            result.layers.contextual_viability.weighted
        ));
        lines.push(String::new());

        // Energy filter
        lines.push("## Energy Filter".to_string());
        lines.push(String::new());
        lines.push(format!("**Status:** {}", status_label(result.energy_filter_status)));
        lines.push(String::new());
        lines.push(format!("> {}", result.energy_filter_reasoning));
        lines.push(String::new());

        // Strengths
        if !result.strengths.is_empty() {
            lines.push("## Strengths".to_string());
            lines.push(String::new());
            for strength in &result.strengths {
                lines.push(format!("- ✅ {}", strength));
            }
            lines.push(String::new());
        }

        // Gaps
        if !result.gaps.is_empty() {
            lines.push("## Gaps to Address".to_string());
            lines.push(String::new());
            for gap in &result.gaps {
                let icon = match gap.severity {
                    GapSeverity::Critical => "🔴",
                    GapSeverity::Warning => "🟠",
                    GapSeverity::Minor => "🟡",
                };
                lines.push(format!("### {} {}", icon, gap.description));
                lines.push(String::new());
                lines.push(format!("**Risk:** {}", gap.mitigation));
                lines.push(String::new());
                lines.push(format!("**Action:** {}", gap.action));
                lines.push(String::new());
            }
        }

        // Obstacles
        if !result.obstacles.is_empty() {
            lines.push("## Category-Specific Obstacles".to_string());
            lines.push(String::new());
            lines.push(format!(
                "These are the top failure modes for {} ideas:",
                input.category.display_name()
            ));
            lines.push(String::new());
            for obstacle in &result.obstacles {
                lines.push(format!(
                    "### {} ({}% failure rate)",
                    obstacle.name, obstacle.failure_rate
                ));
                lines.push(String::new());
                lines.push(format!("**Mitigation:** {}", obstacle.mitigation));
                lines.push(String::new());
            }
        }

        // Improvement suggestions
        if let Some(suggestions) = suggestions.filter(|s| !s.is_empty()) {
            lines.push("## Improvement Suggestions".to_string());
            lines.push(String::new());
            for (i, suggestion) in suggestions.iter().enumerate() {
                let icon = match suggestion.priority {
                    SuggestionPriority::High => "🔥",
                    SuggestionPriority::Medium => "⚡",
                    SuggestionPriority::Low => "💡",
                };
                lines.push(format!("### {}. {} {}", i + 1, icon, suggestion.title));
                lines.push(String::new());
                lines.push(format!("**Category:** {}", suggestion.category));
                lines.push(String::new());
                lines.push(suggestion.description.clone());
                lines.push(String::new());
                lines.push(format!("**Impact:** {}", suggestion.impact));
                lines.push(String::new());
                lines.push(format!("**Action:** {}", suggestion.action));
                lines.push(String::new());
            }
        }

        // Input echo
        if options.include_input_echo {
            lines.push("## Input Details".to_string());
            lines.push(String::new());
            lines.push("### Founder Readiness".to_string());
            lines.push(String::new());
            lines.push(format!("- Skill Match: {}/10", input.founder_readiness.skill_match));
            lines.push(format!(
                "- Time Availability: {}/10",
                input.founder_readiness.time_availability
            ));
            lines.push(format!(
                "- Financial Buffer: {}/10",
                input.founder_readiness.financial_buffer
            ));
            lines.push(String::new());
            lines.push("### Idea Characteristics".to_string());
            lines.push(String::new());
            lines.push(format!("- Quickness: {}/10", input.idea_characteristics.quickness));
            lines.push(format!("- Profitability: {}/10", input.idea_characteristics.profitability));
            lines.push(format!(
                "- Validation Ease: {}/10",
                input.idea_characteristics.validation_ease
            ));
            lines.push(format!(
                "- Market Demand: {}/10",
                input.idea_characteristics.market_demand
            ));
            lines.push(String::new());
            lines.push("### Contextual Viability".to_string());
            lines.push(String::new());
            lines.push(format!(
                "- Life Stage Fit: {}/10",
                input.contextual_viability.life_stage_fit
            ));
            lines.push(format!(
                "- Market Timing: {}/10",
                input.contextual_viability.market_timing
            ));
            lines.push(String::new());
        }

        // Footer
        lines.push("---".to_string());
        lines.push(String::new());
        lines.push("*Generated by Pulse — A Tangent Forge Product*".to_string());
        lines.push("*https://pulse.tangentforge.com*".to_string());

        lines.join("\n")
    }

    /// Serialize the versioned evaluation envelope.
    pub fn json_envelope(
        &self,
        input: &FullEvaluationInput,
        result: &FullEvaluationResult,
        suggestions: Option<&[ImprovementSuggestion]>,
    ) -> Result<String> {
        let envelope = EvaluationEnvelope {
            version: ENVELOPE_VERSION.to_string(),
            exported_at: Utc::now(),
            input: input.clone(),
            result: result.clone(),
            suggestions: suggestions.map(<[_]>::to_vec).unwrap_or_default(),
        };
        Ok(serde_json::to_string_pretty(&envelope)?)
    }

    /// Batch CSV export: one row per evaluated idea.
    pub fn csv_export(&self, ideas: &[(FullEvaluationInput, FullEvaluationResult)]) -> String {
        let headers = [
            "Idea Name",
            "Category",
            "Overall Score",
            "Interpretation",
            "Founder Readiness %",
            "Idea Characteristics %",
            "Historical Patterns %",
            "Contextual Viability %",
            "Energy Filter",
            "Skill Match",
            "Time Availability",
            "Financial Buffer",
            "Quickness",
            "Profitability",
            "Validation Ease",
            "Market Demand",
            "Life Stage Fit",
            "Market Timing",
            "Evaluated At",
        ];

        let mut lines = vec![headers.join(",")];
        for (input, result) in ideas {
            let row = [
                format!("\"{}\"", input.idea_name.replace('"', "\"\"")),
                input.category.display_name().to_string(),
                result.overall_score.to_string(),
                interpretation_slug(result).to_string(),
                result.layers.founder_readiness.percentage.to_string(),
                result.layers.idea_characteristics.percentage.to_string(),
                result.layers.historical_patterns.percentage.to_string(),
                result.layers.contextual_viability.percentage.to_string(),
                status_slug(result.energy_filter_status).to_string(),
                input.founder_readiness.skill_match.to_string(),
                input.founder_readiness.time_availability.to_string(),
                input.founder_readiness.financial_buffer.to_string(),
                input.idea_characteristics.quickness.to_string(),
                input.idea_characteristics.profitability.to_string(),
                input.idea_characteristics.validation_ease.to_string(),
                input.idea_characteristics.market_demand.to_string(),
                input.contextual_viability.life_stage_fit.to_string(),
                input.contextual_viability.market_timing.to_string(),
                result.evaluated_at.to_rfc3339(),
            ];
            lines.push(row.join(","));
        }

        lines.join("\n")
    }

    /// Best-effort CSV import: recovers idea name and description columns.
    pub fn parse_csv_import(&self, csv: &str) -> Vec<CsvIdeaDraft> {
        let mut lines = csv.trim().lines();
        let headers: Vec<String> = match lines.next() {
            Some(header_line) => header_line
                .split(',')
                .map(|h| h.trim().to_lowercase())
                .collect(),
            None => return Vec::new(),
        };

        let mut drafts = Vec::new();
        for line in lines {
            let values: Vec<String> = line
                .split(',')
                .map(|v| v.trim().trim_matches('"').to_string())
                .collect();

            let mut draft = CsvIdeaDraft::default();
            for (i, header) in headers.iter().enumerate() {
                let Some(value) = values.get(i) else { continue };
                match header.as_str() {
                    "idea name" => draft.idea_name = value.clone(),
                    "description" => draft.description = Some(value.clone()),
                    _ => {}
                }
            }

            if !draft.idea_name.is_empty() {
                drafts.push(draft);
            }
        }

        drafts
    }

    /// Build the structured PDF description for the rendering collaborator.
    pub fn pdf_description(
        &self,
        input: &FullEvaluationInput,
        result: &FullEvaluationResult,
        suggestions: Option<&[ImprovementSuggestion]>,
    ) -> PdfDescription {
        let mut sections = Vec::new();

        sections.push(PdfSection {
            heading: format!("Overall Score: {}/10", result.overall_score),
            body: result.interpretation.text().to_string(),
        });

        sections.push(PdfSection {
            heading: "Layer Breakdown".to_string(),
            body: format!(
                "Founder Readiness {}% (contribution {:.2}), Idea Characteristics {}% (contribution {:.2}), Historical Patterns {}% (contribution {:.2}), Contextual Viability {}% (contribution {:.2})",
                result.layers.founder_readiness.percentage,
                result.layers.founder_readiness.weighted,
                result.layers.idea_characteristics.percentage,
                result.layers.idea_characteristics.weighted,
                result.layers.historical_patterns.percentage,
                result.layers.historical_patterns.weighted,
                result.layers.contextual_viability.percentage,
                result.layers.contextual_viability.weighted,
            ),
        });

        sections.push(PdfSection {
            heading: format!("Energy Filter: {}", status_label(result.energy_filter_status)),
            body: result.energy_filter_reasoning.clone(),
        });

        if !result.strengths.is_empty() {
            sections.push(PdfSection {
                heading: "Strengths".to_string(),
                body: result.strengths.join("\n"),
            });
        }

        if !result.gaps.is_empty() {
            sections.push(PdfSection {
                heading: "Gaps to Address".to_string(),
                body: result
                    .gaps
                    .iter()
                    .map(|g| format!("{} — {} (Action: {})", g.description, g.mitigation, g.action))
                    .collect::<Vec<_>>()
                    .join("\n"),
            });
        }

        if !result.obstacles.is_empty() {
            sections.push(PdfSection {
                heading: "Category-Specific Obstacles".to_string(),
                body: result
                    .obstacles
                    .iter()
                    .map(|o| format!("{} ({}% failure rate): {}", o.name, o.failure_rate, o.mitigation))
                    .collect::<Vec<_>>()
                    .join("\n"),
            });
        }

        if let Some(suggestions) = suggestions.filter(|s| !s.is_empty()) {
            sections.push(PdfSection {
                heading: "Improvement Suggestions".to_string(),
                body: suggestions
                    .iter()
                    .map(|s| format!("{}: {} (Action: {})", s.title, s.description, s.action))
                    .collect::<Vec<_>>()
                    .join("\n"),
            });
        }

        PdfDescription {
            title: format!("Pulse Evaluation Report: {}", input.idea_name),
            subtitle: format!(
                "{} — evaluated {}",
                input.category.display_name(),
                result.evaluated_at.format("%Y-%m-%d")
            ),
            sections,
        }
    }

    fn generate_filename(&self, input: &FullEvaluationInput, format: ExportFormat) -> String {
        let slug: String = input
            .idea_name
            .to_lowercase()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
            .take(40)
            .collect();
        let date = Utc::now().format("%Y-%m-%d");
        format!("{}-evaluation-{}.{}", slug, date, self.file_extension(format))
    }

    fn file_extension(&self, format: ExportFormat) -> &'static str {
        match format {
            ExportFormat::Markdown => "md",
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Pdf => "pdf.json",
        }
    }

    fn mime_type(&self, format: ExportFormat) -> &'static str {
        match format {
            ExportFormat::Markdown => "text/markdown",
            ExportFormat::Json | ExportFormat::Pdf => "application/json",
            ExportFormat::Csv => "text/csv",
        }
    }
}

impl Default for ExportService {
    fn default() -> Self {
        Self::new()
    }
}

fn status_label(status: EnergyFilterStatus) -> &'static str {
    match status {
        EnergyFilterStatus::Pass => "PASS",
        EnergyFilterStatus::Fail => "FAIL",
        EnergyFilterStatus::Revise => "REVISE",
    }
}

fn status_slug(status: EnergyFilterStatus) -> &'static str {
    match status {
        EnergyFilterStatus::Pass => "pass",
        EnergyFilterStatus::Fail => "fail",
        EnergyFilterStatus::Revise => "revise",
    }
}

fn interpretation_slug(result: &FullEvaluationResult) -> &'static str {
    use pulse_evaluation::Interpretation;
    match result.interpretation {
        Interpretation::Exceptional => "exceptional",
        Interpretation::Strong => "strong",
        Interpretation::Moderate => "moderate",
        Interpretation::Weak => "weak",
    }
}
