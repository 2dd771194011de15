//! The nine raw metric columns every scoring dataset must provide.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A required raw metric column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    DailyScreenTimeMin,
    SocialMediaTimeMin,
    NegativeInteractionsCount,
    PositiveInteractionsCount,
    SleepHours,
    PhysicalActivityMin,
    AnxietyLevel,
    StressLevel,
    MoodLevel,
}

impl Metric {
    /// All required metrics in canonical column order.
    pub const ALL: [Metric; 9] = [
        Metric::DailyScreenTimeMin,
        Metric::SocialMediaTimeMin,
        Metric::NegativeInteractionsCount,
        Metric::PositiveInteractionsCount,
        Metric::SleepHours,
        Metric::PhysicalActivityMin,
        Metric::AnxietyLevel,
        Metric::StressLevel,
        Metric::MoodLevel,
    ];

    /// Returns the exact column name expected in the dataset.
    pub fn column_name(&self) -> &'static str {
        match self {
            Metric::DailyScreenTimeMin => "daily_screen_time_min",
            Metric::SocialMediaTimeMin => "social_media_time_min",
            Metric::NegativeInteractionsCount => "negative_interactions_count",
            Metric::PositiveInteractionsCount => "positive_interactions_count",
            Metric::SleepHours => "sleep_hours",
            Metric::PhysicalActivityMin => "physical_activity_min",
            Metric::AnxietyLevel => "anxiety_level",
            Metric::StressLevel => "stress_level",
            Metric::MoodLevel => "mood_level",
        }
    }

    /// Looks up a metric by its column name.
    pub fn from_column_name(name: &str) -> Option<Metric> {
        Self::ALL.iter().copied().find(|m| m.column_name() == name)
    }

    /// Position in [`Metric::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}
