use serde::{Deserialize, Serialize};

/// Importance level of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Convert priority to a display tag
    pub fn to_tag(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }

    /// Short badge shown next to a task title
    pub fn badge(&self) -> &'static str {
        match self {
            Self::Low => "[low]",
            Self::Medium => "[med]",
            Self::High => "[HIGH]",
        }
    }

    /// Cycle to the next priority (Low -> Medium -> High -> Low)
    pub fn next(&self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium => Self::High,
            Self::High => Self::Low,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::Medium
    }
}

/// Which calendar view is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Day,
    Week,
    Month,
}

impl ViewMode {
    /// Cycle to the next view (Day -> Week -> Month -> Day)
    pub fn next(&self) -> Self {
        match self {
            Self::Day => Self::Week,
            Self::Week => Self::Month,
            Self::Month => Self::Day,
        }
    }

    /// Display name for the view
    pub fn name(&self) -> &'static str {
        match self {
            Self::Day => "Day",
            Self::Week => "Week",
            Self::Month => "Month",
        }
    }
}

impl Default for ViewMode {
    fn default() -> Self {
        Self::Month
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTask,
    EditingTask, // Editing an existing task through the same form
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_to_tag() {
        assert_eq!(Priority::Low.to_tag(), "LOW");
        assert_eq!(Priority::Medium.to_tag(), "MEDIUM");
        assert_eq!(Priority::High.to_tag(), "HIGH");
    }

    #[test]
    fn test_priority_cycle() {
        assert_eq!(Priority::Low.next(), Priority::Medium);
        assert_eq!(Priority::Medium.next(), Priority::High);
        assert_eq!(Priority::High.next(), Priority::Low);
    }

    #[test]
    fn test_view_mode_cycle() {
        assert_eq!(ViewMode::Day.next(), ViewMode::Week);
        assert_eq!(ViewMode::Week.next(), ViewMode::Month);
        assert_eq!(ViewMode::Month.next(), ViewMode::Day);
    }

    #[test]
    fn test_view_mode_name() {
        assert_eq!(ViewMode::Day.name(), "Day");
        assert_eq!(ViewMode::Week.name(), "Week");
        assert_eq!(ViewMode::Month.name(), "Month");
    }
}
