//! Plan output types

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Whether a day got a topic of its own or revisits one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Primary,
    Practice,
}

/// One day's activity, as sent to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayActivity {
    pub activity: String,
    pub duration: String,
    pub topic: String,
    pub niche: String,
    pub objective: String,
    /// At most five entries
    pub materials_needed: Vec<String>,
    pub difficulty: String,
    pub age_appropriate: String,
    pub kind: ActivityKind,
    pub topic_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledDay {
    pub day: String,
    pub activity: DayActivity,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekPlan {
    pub label: String,
    /// Topics dedicated to this week (before reuse)
    pub topic_count: usize,
    /// In calendar order; empty when there was nothing to schedule
    pub days: Vec<ScheduledDay>,
}

impl WeekPlan {
    pub fn day(&self, label: &str) -> Option<&DayActivity> {
        self.days
            .iter()
            .find(|d| d.day == label)
            .map(|d| &d.activity)
    }
}

/// Four weeks of day activities.
///
/// Serializes as `{week: {day: DayActivity}}`, keeping calendar order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyPlan {
    pub weeks: Vec<WeekPlan>,
}

impl WeeklyPlan {
    pub fn filled_days(&self) -> usize {
        self.weeks.iter().map(|w| w.days.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.filled_days() == 0
    }
}

impl Serialize for WeeklyPlan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.weeks.len()))?;
        for week in &self.weeks {
            map.serialize_entry(&week.label, &DayMap(&week.days))?;
        }
        map.end()
    }
}

struct DayMap<'a>(&'a [ScheduledDay]);

impl Serialize for DayMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for day in self.0 {
            map.serialize_entry(&day.day, &day.activity)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(topic: &str) -> DayActivity {
        DayActivity {
            activity: format!("Explore {}", topic),
            duration: "30 min".to_string(),
            topic: topic.to_string(),
            niche: "AI".to_string(),
            objective: "Learn".to_string(),
            materials_needed: vec!["Paper".to_string()],
            difficulty: "Beginner".to_string(),
            age_appropriate: "5-7".to_string(),
            kind: ActivityKind::Primary,
            topic_id: "1".to_string(),
            explanation: None,
        }
    }

    #[test]
    fn test_serializes_in_calendar_order() {
        let plan = WeeklyPlan {
            weeks: vec![
                WeekPlan {
                    label: "week2".to_string(),
                    topic_count: 1,
                    days: vec![
                        ScheduledDay {
                            day: "Tuesday".to_string(),
                            activity: activity("Robots"),
                        },
                        ScheduledDay {
                            day: "Monday".to_string(),
                            activity: activity("Planets"),
                        },
                    ],
                },
                WeekPlan {
                    label: "week1".to_string(),
                    topic_count: 0,
                    days: Vec::new(),
                },
            ],
        };

        let json = serde_json::to_string(&plan).unwrap();
        let week2 = json.find("\"week2\"").unwrap();
        let week1 = json.find("\"week1\"").unwrap();
        let tuesday = json.find("\"Tuesday\"").unwrap();
        let monday = json.find("\"Monday\"").unwrap();
        assert!(week2 < week1);
        assert!(tuesday < monday);
        assert!(json.contains("\"week1\":{}"));
        assert!(json.contains("\"kind\":\"primary\""));
        assert!(!json.contains("explanation"));
    }
}
