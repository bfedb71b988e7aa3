use crate::models::summary::{Insight, InsightKind, WindowSummary};

/// One threshold rule over a window summary.
///
/// Rules are data, not control flow: the thresholds are presentation
/// policy, so keeping them in a table makes them easy to test and tune
/// without touching the evaluation logic.
pub struct InsightRule {
    /// Stable identifier (for tests and tuning)
    pub name: &'static str,

    /// Achievement or recommendation
    pub kind: InsightKind,

    applies: fn(&WindowSummary) -> bool,
    message: fn(&WindowSummary) -> String,
}

/// Evaluates a rule table against a window summary.
pub struct InsightService {
    rules: Vec<InsightRule>,
}

impl InsightService {
    /// Build a service from an explicit rule table.
    pub fn new(rules: Vec<InsightRule>) -> Self {
        Self { rules }
    }

    /// The rule set applied to 7-day windows.
    #[must_use]
    pub fn weekly() -> Self {
        Self::new(vec![
            InsightRule {
                name: "week-consistency",
                kind: InsightKind::Achievement,
                applies: |s| s.days_tracked >= 5,
                message: |s| {
                    format!(
                        "Great consistency! Tracked {} days this week",
                        s.days_tracked
                    )
                },
            },
            InsightRule {
                name: "week-exercise-volume",
                kind: InsightKind::Achievement,
                applies: |s| s.total_exercise > 1000,
                message: |s| {
                    format!(
                        "Excellent exercise routine! Burned {} calories",
                        s.total_exercise
                    )
                },
            },
            InsightRule {
                name: "week-protein-intake",
                kind: InsightKind::Achievement,
                applies: |s| s.avg_protein > 100.0,
                message: |s| {
                    format!(
                        "Good protein intake! Averaged {}g per day",
                        s.avg_protein.round()
                    )
                },
            },
            InsightRule {
                name: "week-track-more",
                kind: InsightKind::Recommendation,
                applies: |s| s.days_tracked < 5,
                message: |_| "Try to track more days for better insights".to_string(),
            },
            InsightRule {
                name: "week-low-calories",
                kind: InsightKind::Recommendation,
                applies: |s| s.avg_calories < 1500.0,
                message: |_| "Consider increasing calorie intake for better nutrition".to_string(),
            },
            InsightRule {
                name: "week-low-exercise",
                kind: InsightKind::Recommendation,
                applies: |s| s.total_exercise < 500,
                message: |_| "Add more physical activity to your routine".to_string(),
            },
        ])
    }

    /// The rule set applied to month windows.
    #[must_use]
    pub fn monthly() -> Self {
        Self::new(vec![
            InsightRule {
                name: "month-consistency",
                kind: InsightKind::Achievement,
                applies: |s| s.days_tracked >= 20,
                message: |s| {
                    format!(
                        "Excellent consistency! Tracked {} days this month",
                        s.days_tracked
                    )
                },
            },
            InsightRule {
                name: "month-exercise-volume",
                kind: InsightKind::Achievement,
                applies: |s| s.total_exercise > 5000,
                message: |s| {
                    format!(
                        "Outstanding exercise routine! Burned {} calories",
                        s.total_exercise
                    )
                },
            },
            InsightRule {
                name: "month-protein-intake",
                kind: InsightKind::Achievement,
                applies: |s| s.avg_protein > 100.0,
                message: |s| {
                    format!(
                        "Great protein intake! Averaged {}g per day",
                        s.avg_protein.round()
                    )
                },
            },
            InsightRule {
                name: "month-tracking-ratio-high",
                kind: InsightKind::Achievement,
                applies: |s| s.tracking_ratio >= 80.0,
                message: |s| {
                    format!(
                        "Amazing tracking consistency! {}% of days tracked",
                        s.tracking_ratio.round()
                    )
                },
            },
            InsightRule {
                name: "month-track-more",
                kind: InsightKind::Recommendation,
                applies: |s| s.days_tracked < 15,
                message: |_| "Try to track more days for better monthly insights".to_string(),
            },
            InsightRule {
                name: "month-low-calories",
                kind: InsightKind::Recommendation,
                applies: |s| s.avg_calories < 1500.0,
                message: |_| "Consider increasing calorie intake for better nutrition".to_string(),
            },
            InsightRule {
                name: "month-low-exercise",
                kind: InsightKind::Recommendation,
                applies: |s| s.total_exercise < 2000,
                message: |_| "Add more physical activity to your routine".to_string(),
            },
            InsightRule {
                name: "month-tracking-ratio-low",
                kind: InsightKind::Recommendation,
                applies: |s| s.tracking_ratio < 60.0,
                message: |_| "Improve tracking consistency for better data insights".to_string(),
            },
        ])
    }

    /// Apply every rule to the summary, returning matches in table order.
    #[must_use]
    pub fn evaluate(&self, summary: &WindowSummary) -> Vec<Insight> {
        self.rules
            .iter()
            .filter(|rule| (rule.applies)(summary))
            .map(|rule| Insight {
                kind: rule.kind,
                message: (rule.message)(summary),
            })
            .collect()
    }

    /// Names of the rules in this table, in evaluation order.
    #[must_use]
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name).collect()
    }
}
