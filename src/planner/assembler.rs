//! Spreading matched topics over the calendar
//!
//! Topics are split into contiguous runs, one per week; the first
//! `M mod weeks` weeks get one extra. Inside a week, topic `d` goes on day `d`.
//! Days left over are filled by reuse:
//!
//! - more matched topics than days in a week (`M > 7`): take
//!   `matched[(week * 7 + day) mod M]` as another primary activity;
//! - otherwise: revisit this week's topics (`week_topics[day mod k]`, or
//!   `matched[0]` when the week got none) as a practice activity.

use crate::catalog::{ChildProfile, Topic};
use crate::config::CalendarConfig;
use tracing::debug;

use super::activity::{practice_activity, primary_activity};
use super::types::{ScheduledDay, WeekPlan, WeeklyPlan};

/// Number of topics each week receives, in week order
pub fn week_topic_counts(matched: usize, weeks: usize) -> Vec<usize> {
    if weeks == 0 {
        return Vec::new();
    }
    let base = matched / weeks;
    let remainder = matched % weeks;
    (0..weeks)
        .map(|i| if i < remainder { base + 1 } else { base })
        .collect()
}

pub fn assemble_plan(
    matched: &[Topic],
    profile: &ChildProfile,
    calendar: &CalendarConfig,
) -> WeeklyPlan {
    let days_per_week = calendar.days.len();
    let total = matched.len();
    let counts = week_topic_counts(total, calendar.weeks.len());

    let mut offset = 0;
    let mut weeks = Vec::with_capacity(calendar.weeks.len());

    for (week_idx, (label, &count)) in calendar.weeks.iter().zip(&counts).enumerate() {
        let week_topics = &matched[offset..offset + count];
        offset += count;

        if count > days_per_week {
            debug!(
                "{}: {} topics for {} days, {} left unscheduled",
                label,
                count,
                days_per_week,
                count - days_per_week
            );
        }

        let days = if total == 0 {
            Vec::new()
        } else {
            calendar
                .days
                .iter()
                .enumerate()
                .map(|(day_idx, day)| ScheduledDay {
                    day: day.clone(),
                    activity: if day_idx < count {
                        primary_activity(&week_topics[day_idx], profile)
                    } else if total > days_per_week {
                        let supplementary = &matched[(week_idx * days_per_week + day_idx) % total];
                        primary_activity(supplementary, profile)
                    } else {
                        let reused = if count > 0 {
                            &week_topics[day_idx % count]
                        } else {
                            &matched[0]
                        };
                        practice_activity(reused, profile)
                    },
                })
                .collect()
        };

        weeks.push(WeekPlan {
            label: label.clone(),
            topic_count: count,
            days,
        });
    }

    debug!(
        "Assembled {} weeks, {} days filled from {} topics",
        weeks.len(),
        weeks.iter().map(|w| w.days.len()).sum::<usize>(),
        total
    );

    WeeklyPlan { weeks }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::types::ActivityKind;

    fn topics(n: usize) -> Vec<Topic> {
        (0..n)
            .map(|i| Topic {
                id: i.to_string(),
                niche: "AI".to_string(),
                topic: format!("Topic {}", i),
                age_spec: "7".to_string(),
                objective: None,
                explanation: None,
                estimated_time: None,
                activity_1: Some(format!("Activity for topic {}", i)),
                activity_2: None,
                hashtags: None,
            })
            .collect()
    }

    fn assemble(n: usize) -> WeeklyPlan {
        assemble_plan(
            &topics(n),
            &ChildProfile::new(7, ["AI"]),
            &CalendarConfig::default(),
        )
    }

    fn day<'a>(plan: &'a WeeklyPlan, week: usize, day: usize) -> &'a crate::planner::DayActivity {
        &plan.weeks[week].days[day].activity
    }

    #[test]
    fn test_partition_counts() {
        assert_eq!(week_topic_counts(0, 4), vec![0, 0, 0, 0]);
        assert_eq!(week_topic_counts(3, 4), vec![1, 1, 1, 0]);
        assert_eq!(week_topic_counts(4, 4), vec![1, 1, 1, 1]);
        assert_eq!(week_topic_counts(9, 4), vec![3, 2, 2, 2]);
        assert_eq!(week_topic_counts(11, 4), vec![3, 3, 3, 2]);
    }

    #[test]
    fn test_partition_invariant() {
        for m in 0..40 {
            let counts = week_topic_counts(m, 4);
            assert_eq!(counts.iter().sum::<usize>(), m);
            let base = m / 4;
            for (i, c) in counts.iter().enumerate() {
                let expected = if i < m % 4 { base + 1 } else { base };
                assert_eq!(*c, expected);
            }
        }
    }

    #[test]
    fn test_no_topics_gives_empty_weeks() {
        let plan = assemble(0);
        let labels: Vec<_> = plan.weeks.iter().map(|w| w.label.as_str()).collect();
        assert_eq!(labels, vec!["week1", "week2", "week3", "week4"]);
        assert!(plan.weeks.iter().all(|w| w.days.is_empty()));

        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"week1": {}, "week2": {}, "week3": {}, "week4": {}})
        );
    }

    #[test]
    fn test_every_slot_filled_when_topics_exist() {
        for m in 1..=16 {
            let plan = assemble(m);
            assert_eq!(plan.weeks.len(), 4);
            for week in &plan.weeks {
                let days: Vec<_> = week.days.iter().map(|d| d.day.as_str()).collect();
                assert_eq!(
                    days,
                    vec!["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"]
                );
            }
            assert_eq!(plan.filled_days(), 28);
        }
    }

    #[test]
    fn test_four_topics_one_per_week_then_practice() {
        let plan = assemble(4);
        for week in 0..4 {
            let first = day(&plan, week, 0);
            assert_eq!(first.topic, format!("Topic {}", week));
            assert_eq!(first.kind, ActivityKind::Primary);
            for d in 1..7 {
                let practice = day(&plan, week, d);
                assert_eq!(practice.topic, format!("Topic {}", week));
                assert_eq!(practice.kind, ActivityKind::Practice);
                assert!(practice.activity.starts_with("Practice and apply"));
            }
        }
    }

    #[test]
    fn test_week_without_topics_reuses_first_match() {
        // 3 topics: week4 gets none
        let plan = assemble(3);
        assert_eq!(plan.weeks[3].topic_count, 0);
        for d in 0..7 {
            let practice = day(&plan, 3, d);
            assert_eq!(practice.topic, "Topic 0");
            assert_eq!(practice.kind, ActivityKind::Practice);
        }
    }

    #[test]
    fn test_practice_cycles_within_week() {
        // 6 topics: counts [2, 2, 1, 1]; week1 holds topics 0 and 1
        let plan = assemble(6);
        assert_eq!(day(&plan, 0, 0).topic, "Topic 0");
        assert_eq!(day(&plan, 0, 1).topic, "Topic 1");
        // day 2 -> week_topics[2 % 2], day 3 -> week_topics[3 % 2]
        assert_eq!(day(&plan, 0, 2).topic, "Topic 0");
        assert_eq!(day(&plan, 0, 3).topic, "Topic 1");
        assert_eq!(day(&plan, 0, 2).kind, ActivityKind::Practice);
        assert_eq!(day(&plan, 1, 0).topic, "Topic 2");
    }

    #[test]
    fn test_nine_topics_use_cross_week_supplements() {
        // M = 9 > 7: leftover days pull matched[(week * 7 + day) % 9] as primary
        let plan = assemble(9);
        let counts: Vec<_> = plan.weeks.iter().map(|w| w.topic_count).collect();
        assert_eq!(counts, vec![3, 2, 2, 2]);

        assert_eq!(day(&plan, 0, 2).topic, "Topic 2");
        assert_eq!(day(&plan, 0, 3).topic, "Topic 3");
        assert_eq!(day(&plan, 0, 3).kind, ActivityKind::Primary);

        // week2 holds topics 3 and 4; day 2 -> (7 + 2) % 9 = 0
        assert_eq!(day(&plan, 1, 0).topic, "Topic 3");
        assert_eq!(day(&plan, 1, 2).topic, "Topic 0");
        // week4, day 6 -> (21 + 6) % 9 = 0
        assert_eq!(day(&plan, 3, 6).topic, "Topic 0");

        assert!(plan
            .weeks
            .iter()
            .flat_map(|w| &w.days)
            .all(|d| d.activity.kind == ActivityKind::Primary));
    }

    #[test]
    fn test_seven_topics_stay_on_practice_reuse() {
        // M = 7 is not above the day count, so reuse stays inside the week
        let plan = assemble(7);
        let counts: Vec<_> = plan.weeks.iter().map(|w| w.topic_count).collect();
        assert_eq!(counts, vec![2, 2, 2, 1]);
        assert_eq!(day(&plan, 0, 1).kind, ActivityKind::Primary);
        assert_eq!(day(&plan, 0, 2).kind, ActivityKind::Practice);
        assert_eq!(day(&plan, 0, 2).topic, "Topic 0");
        assert_eq!(day(&plan, 0, 3).topic, "Topic 1");
    }

    #[test]
    fn test_more_topics_than_days_in_a_week() {
        // 32 topics: 8 per week, only 7 fit
        let plan = assemble(32);
        assert_eq!(plan.weeks[0].topic_count, 8);
        assert_eq!(plan.weeks[0].days.len(), 7);
        assert_eq!(day(&plan, 0, 6).topic, "Topic 6");
        assert_eq!(day(&plan, 1, 0).topic, "Topic 8");
    }
}
