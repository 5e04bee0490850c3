// ABOUTME: Pulse evaluation library - multi-layer business idea scoring
// ABOUTME: Provides QPV scoring, failure-mode lookups, insight generation, and improvement suggestions

pub mod error;
pub mod failure_modes;
pub mod improvements;
pub mod insights;
pub mod scoring;
pub mod types;
pub mod validation;

pub use error::{EvaluationError, Result};
pub use failure_modes::{all_categories, failure_mode_data};
pub use improvements::{calculate_potential_score, generate_improvement_suggestions};
pub use insights::{generate_gaps, generate_obstacles, generate_pivot_suggestion, generate_strengths};
pub use scoring::{score_basic, score_full};
pub use types::*;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::{EvaluationError, Result};
    pub use crate::failure_modes::failure_mode_data;
    pub use crate::scoring::{score_basic, score_full};
    pub use crate::types::{
        BasicQpvInput, BasicQpvResult, EvaluationEnvelope, FullEvaluationInput,
        FullEvaluationResult, IdeaCategory, ImprovementSuggestion, Interpretation,
    };
}
