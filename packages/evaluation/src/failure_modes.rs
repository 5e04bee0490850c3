// ABOUTME: Static failure-mode reference table keyed by idea category
// ABOUTME: Historical abandonment/sustainability rates and common failure patterns with mitigations

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::types::{CommonFailure, FailureModeEntry, IdeaCategory};

fn entry(
    category: IdeaCategory,
    abandonment_rate: f64,
    sustainability_rate: f64,
    failures: [(&str, f64, &str); 3],
) -> FailureModeEntry {
    FailureModeEntry {
        category,
        abandonment_rate,
        sustainability_rate,
        common_failures: failures
            .into_iter()
            .map(|(name, percentage, mitigation)| CommonFailure {
                name: name.to_string(),
                percentage,
                mitigation: mitigation.to_string(),
            })
            .collect(),
    }
}

lazy_static! {
    /// Read-only, process-wide table with exactly one entry per category.
    /// Loaded once, never mutated; no mutation API is exposed.
    static ref FAILURE_MODE_TABLE: HashMap<IdeaCategory, FailureModeEntry> = {
        let mut table = HashMap::new();

        table.insert(
            IdeaCategory::AiWrapper,
            entry(IdeaCategory::AiWrapper, 78.0, 22.0, [
                ("API dependency risk", 45.0, "Build unique value layer on top of API"),
                ("Race to bottom pricing", 35.0, "Focus on specific niche, not general tool"),
                ("Feature parity with ChatGPT", 20.0, "Solve workflow problem, not just wrap API"),
            ]),
        );
        table.insert(
            IdeaCategory::SaasTool,
            entry(IdeaCategory::SaasTool, 65.0, 35.0, [
                ("Scope creep before PMF", 40.0, "Ship MVP in 2 weeks, iterate based on feedback"),
                ("Underestimating support burden", 30.0, "Build self-serve docs from day 1"),
                ("Churn from poor onboarding", 30.0, "Optimize first 5 minutes of user experience"),
            ]),
        );
        table.insert(
            IdeaCategory::MicroSaas,
            entry(IdeaCategory::MicroSaas, 55.0, 45.0, [
                ("Market too small", 35.0, "Validate $10k MRR ceiling before building"),
                ("Solo founder burnout", 35.0, "Automate everything, limit support hours"),
                ("Platform dependency", 30.0, "Diversify integrations early"),
            ]),
        );
        table.insert(
            IdeaCategory::NotionTemplate,
            entry(IdeaCategory::NotionTemplate, 70.0, 30.0, [
                ("Low perceived value", 45.0, "Bundle with video training or community"),
                ("Easy to replicate", 35.0, "Build personal brand around template"),
                ("One-time purchase ceiling", 20.0, "Create template ecosystem with updates"),
            ]),
        );
        table.insert(
            IdeaCategory::DigitalProduct,
            entry(IdeaCategory::DigitalProduct, 60.0, 40.0, [
                ("No distribution channel", 40.0, "Build audience before product"),
                ("Refund rate too high", 30.0, "Set clear expectations, offer preview"),
                ("Support overhead", 30.0, "Create comprehensive FAQ and docs"),
            ]),
        );
        table.insert(
            IdeaCategory::Newsletter,
            entry(IdeaCategory::Newsletter, 80.0, 20.0, [
                ("Consistency burnout", 50.0, "Batch write 4 weeks ahead"),
                ("Slow subscriber growth", 30.0, "Cross-promote, guest posts, paid ads"),
                ("Monetization challenges", 20.0, "Plan revenue model before 1k subs"),
            ]),
        );
        table.insert(
            IdeaCategory::ContentCreator,
            entry(IdeaCategory::ContentCreator, 85.0, 15.0, [
                ("Algorithm dependency", 40.0, "Build email list from day 1"),
                ("Content treadmill burnout", 40.0, "Repurpose content across platforms"),
                ("Delayed monetization", 20.0, "Offer paid product at 1k followers"),
            ]),
        );
        table.insert(
            IdeaCategory::Community,
            entry(IdeaCategory::Community, 75.0, 25.0, [
                ("Cold start problem", 40.0, "Seed with 50 engaged founding members"),
                ("Moderation burden", 35.0, "Establish clear rules, empower moderators"),
                ("Value proposition unclear", 25.0, "Define unique benefit vs free alternatives"),
            ]),
        );
        table.insert(
            IdeaCategory::Marketplace,
            entry(IdeaCategory::Marketplace, 82.0, 18.0, [
                ("Chicken-and-egg problem", 50.0, "Subsidize one side, constrain geography"),
                ("Disintermediation", 30.0, "Provide value beyond matching"),
                ("Unit economics", 20.0, "Validate take rate before scaling"),
            ]),
        );
        table.insert(
            IdeaCategory::InfoProduct,
            entry(IdeaCategory::InfoProduct, 65.0, 35.0, [
                ("No unique insight", 40.0, "Share proprietary framework or data"),
                ("Completion rate issues", 35.0, "Design for quick wins, not comprehensiveness"),
                ("Refund abuse", 25.0, "Drip content, offer payment plans"),
            ]),
        );
        table.insert(
            IdeaCategory::AgencyService,
            entry(IdeaCategory::AgencyService, 50.0, 50.0, [
                ("Founder as bottleneck", 45.0, "Document processes, hire early"),
                ("Scope creep", 35.0, "Fixed scope packages, change order process"),
                ("Client concentration", 20.0, "No client > 30% of revenue"),
            ]),
        );
        table.insert(
            IdeaCategory::Consulting,
            entry(IdeaCategory::Consulting, 45.0, 55.0, [
                ("Feast or famine cycles", 45.0, "Always be marketing, even when busy"),
                ("Underpricing", 35.0, "Value-based pricing, raise rates 20%"),
                ("No leverage", 20.0, "Productize knowledge into courses/tools"),
            ]),
        );
        table.insert(
            IdeaCategory::ProductizedService,
            entry(IdeaCategory::ProductizedService, 55.0, 45.0, [
                ("Delivery inconsistency", 40.0, "SOPs for everything, QA checklist"),
                ("Hiring challenges", 35.0, "Build talent pipeline before scaling"),
                ("Margin compression", 25.0, "Automate intake and delivery"),
            ]),
        );
        table.insert(
            IdeaCategory::Ecommerce,
            entry(IdeaCategory::Ecommerce, 70.0, 30.0, [
                ("Customer acquisition cost", 40.0, "Build organic channel before paid"),
                ("Inventory/fulfillment", 35.0, "Start with dropship or print-on-demand"),
                ("Competition on price", 25.0, "Differentiate on brand, not price"),
            ]),
        );
        table.insert(
            IdeaCategory::MobileApp,
            entry(IdeaCategory::MobileApp, 80.0, 20.0, [
                ("App store discovery", 40.0, "Build audience before app launch"),
                ("Development complexity", 35.0, "Start with web app, validate first"),
                ("Retention cliff", 25.0, "Focus on Day 1 and Day 7 retention"),
            ]),
        );
        table.insert(
            IdeaCategory::ChromeExtension,
            entry(IdeaCategory::ChromeExtension, 65.0, 35.0, [
                ("Chrome Web Store changes", 40.0, "Build direct distribution channel"),
                ("Monetization friction", 35.0, "Freemium with clear upgrade path"),
                ("Feature absorbed by browser", 25.0, "Solve workflow, not feature gap"),
            ]),
        );
        table.insert(
            IdeaCategory::Other,
            entry(IdeaCategory::Other, 68.0, 32.0, [
                ("Unclear value proposition", 40.0, "Define specific problem and audience"),
                ("Execution complexity", 35.0, "Start with simplest possible version"),
                ("Market timing", 25.0, "Validate demand before building"),
            ]),
        );

        table
    };
}

/// Look up the failure-mode entry for a category.
///
/// Total function: every enum variant has an entry, and a missing one
/// still resolves to the `Other` entry so downstream scoring stays
/// infallible.
pub fn failure_mode_data(category: IdeaCategory) -> &'static FailureModeEntry {
    FAILURE_MODE_TABLE
        .get(&category)
        .unwrap_or_else(|| &FAILURE_MODE_TABLE[&IdeaCategory::Other])
}

/// All categories present in the table, in enum declaration order.
pub fn all_categories() -> Vec<IdeaCategory> {
    IdeaCategory::ALL.to_vec()
}
