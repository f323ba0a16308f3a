//! Engine-wide configuration, resolving the open design questions of §9.

use chrono::NaiveDate;

/// Tunables that resolve this spec's open design questions rather than
/// hard-coding a single interpretation. Construct with [`EngineConfig::new`]
/// and adjust via the builder methods; defaults match the spec's own
/// recommendations.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Threshold below which a quantity compares equal to zero (§3).
    pub epsilon: f64,

    /// Lead times strictly greater than this are treated as
    /// `DegenerateLeadTime` and replaced (open question 1). The spec's own
    /// text recommends 365.
    pub degenerate_lead_time_threshold_days: u32,

    /// Substitute lead time used whenever a lead time is degenerate
    /// (non-numeric, negative, or over threshold).
    pub degenerate_lead_time_default_days: u32,

    /// Upper clamp applied to the horizon's own `L_max` computation (§4.3),
    /// kept as a defensive second guard after per-item cleaning.
    pub horizon_lead_time_cap_days: u32,

    /// Explicit "as of" date for splitting planned releases into expedites
    /// vs. future purchases (open question 2). `None` defaults to
    /// wall-clock today at the point the Action Extractor runs.
    pub as_of_date: Option<NaiveDate>,

    /// Whether the Requirements Propagator (C7) may fan items at the same
    /// BOM level out across threads (§5). Always sequential across levels.
    pub enable_level_parallelism: bool,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self {
            epsilon: 1e-9,
            degenerate_lead_time_threshold_days: 365,
            degenerate_lead_time_default_days: 5,
            horizon_lead_time_cap_days: 1000,
            as_of_date: None,
            enable_level_parallelism: true,
        }
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_degenerate_lead_time_threshold_days(mut self, days: u32) -> Self {
        self.degenerate_lead_time_threshold_days = days;
        self
    }

    pub fn with_degenerate_lead_time_default_days(mut self, days: u32) -> Self {
        self.degenerate_lead_time_default_days = days;
        self
    }

    pub fn with_as_of_date(mut self, date: NaiveDate) -> Self {
        self.as_of_date = Some(date);
        self
    }

    pub fn with_level_parallelism(mut self, enabled: bool) -> Self {
        self.enable_level_parallelism = enabled;
        self
    }

    /// Resolves open question 2: explicit `as_of_date` if set, otherwise
    /// wall-clock today.
    pub fn resolved_as_of_date(&self) -> NaiveDate {
        self.as_of_date.unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
