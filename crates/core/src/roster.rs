//! Admin roster filter/sort pipeline.
//!
//! The admin view fetches the full participant collection once per
//! page load and derives everything locally from that snapshot: a
//! filtered, sorted view plus two roster-wide stats. The pipeline is a
//! pure transformation and never mutates its input, so re-applying the
//! same criteria to the same snapshot always yields the same sequence.

use serde::Deserialize;

use crate::participant::Participant;
use crate::types::LicenseGrade;

/// License possession filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseFilter {
    /// No filtering on license possession.
    #[default]
    Any,
    /// Only participants with `has_license = true`.
    Licensed,
    /// Only participants with `has_license = false`.
    Unlicensed,
}

/// Sort direction over the creation timestamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    NewestFirst,
    OldestFirst,
}

/// Filter and sort criteria for the roster view.
///
/// Each criterion is independently optional; active criteria compose
/// with logical AND.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RosterCriteria {
    /// Case-insensitive substring match against name OR id.
    pub search: Option<String>,
    #[serde(default)]
    pub license: LicenseFilter,
    /// Exact grade match, or `None` for any.
    pub grade: Option<LicenseGrade>,
    /// Inclusive lower age bound.
    pub min_age: Option<i32>,
    /// Inclusive upper age bound.
    pub max_age: Option<i32>,
    #[serde(default)]
    pub order: SortOrder,
}

/// Roster-wide stats, always computed over the unfiltered snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct RosterStats {
    /// Total registered participants.
    pub total: usize,
    /// Participants with `has_license = true`.
    pub licensed: usize,
}

/// Compute roster stats over the full (unfiltered) snapshot.
pub fn stats(participants: &[Participant]) -> RosterStats {
    RosterStats {
        total: participants.len(),
        licensed: participants.iter().filter(|p| p.has_license).count(),
    }
}

/// Apply the criteria to a snapshot, producing a fresh ordered view.
///
/// Sorting is stable. Creation timestamps are assignment-ordered so
/// ties should not occur, but a stable sort guarantees the view never
/// flickers between renders even if they do.
pub fn filter_and_sort(participants: &[Participant], criteria: &RosterCriteria) -> Vec<Participant> {
    let needle = criteria
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    let mut view: Vec<Participant> = participants
        .iter()
        .filter(|p| matches(p, criteria, needle.as_deref()))
        .cloned()
        .collect();

    match criteria.order {
        SortOrder::NewestFirst => view.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOrder::OldestFirst => view.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
    }

    view
}

fn matches(p: &Participant, criteria: &RosterCriteria, needle: Option<&str>) -> bool {
    if let Some(needle) = needle {
        let id = p.id.to_string();
        if !p.name.to_lowercase().contains(needle) && !id.to_lowercase().contains(needle) {
            return false;
        }
    }

    match criteria.license {
        LicenseFilter::Any => {}
        LicenseFilter::Licensed => {
            if !p.has_license {
                return false;
            }
        }
        LicenseFilter::Unlicensed => {
            if p.has_license {
                return false;
            }
        }
    }

    if let Some(grade) = criteria.grade {
        if p.license_grade.as_deref() != Some(grade.as_str()) {
            return false;
        }
    }

    if let Some(min) = criteria.min_age {
        if p.age < min {
            return false;
        }
    }

    if let Some(max) = criteria.max_age {
        if p.age > max {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use uuid::Uuid;

    use super::*;

    fn participant(name: &str, age: i32, grade: Option<LicenseGrade>, minute: i64) -> Participant {
        Participant {
            id: Uuid::new_v4(),
            name: name.to_string(),
            age,
            has_license: grade.is_some(),
            license_grade: grade.map(|g| g.as_str().to_string()),
            checked_in: false,
            created_at: Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap()
                + Duration::minutes(minute),
        }
    }

    fn sample_roster() -> Vec<Participant> {
        vec![
            participant("田中太郎", 25, Some(LicenseGrade::Second), 0),
            participant("佐藤花子", 31, None, 1),
            participant("鈴木一郎", 45, Some(LicenseGrade::First), 2),
            participant("高橋次郎", 19, None, 3),
        ]
    }

    #[test]
    fn no_criteria_sorts_newest_first() {
        let roster = sample_roster();
        let view = filter_and_sort(&roster, &RosterCriteria::default());

        let names: Vec<_> = view.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["高橋次郎", "鈴木一郎", "佐藤花子", "田中太郎"]);
    }

    #[test]
    fn sort_toggle_reverses_order() {
        let roster = sample_roster()[..3].to_vec();

        let newest = filter_and_sort(&roster, &RosterCriteria::default());
        let oldest = filter_and_sort(
            &roster,
            &RosterCriteria {
                order: SortOrder::OldestFirst,
                ..Default::default()
            },
        );

        let reversed: Vec<_> = newest.into_iter().rev().collect();
        assert_eq!(oldest, reversed);
    }

    #[test]
    fn search_matches_name_case_insensitively() {
        let mut roster = sample_roster();
        roster.push(participant("John Smith", 40, None, 4));

        let view = filter_and_sort(
            &roster,
            &RosterCriteria {
                search: Some("john".to_string()),
                ..Default::default()
            },
        );

        assert_eq!(view.len(), 1);
        assert_eq!(view[0].name, "John Smith");
    }

    #[test]
    fn search_matches_id_substring() {
        let roster = sample_roster();
        let fragment = roster[2].id.to_string()[..8].to_uppercase();

        let view = filter_and_sort(
            &roster,
            &RosterCriteria {
                search: Some(fragment),
                ..Default::default()
            },
        );

        // UUID prefixes can collide across rows, but the target row
        // must always be present.
        assert!(view.iter().any(|p| p.id == roster[2].id));
    }

    #[test]
    fn licensed_only_filter() {
        let roster = sample_roster();
        let view = filter_and_sort(
            &roster,
            &RosterCriteria {
                license: LicenseFilter::Licensed,
                ..Default::default()
            },
        );

        assert_eq!(view.len(), 2);
        assert!(view.iter().all(|p| p.has_license));
    }

    #[test]
    fn unlicensed_only_filter() {
        let roster = sample_roster();
        let view = filter_and_sort(
            &roster,
            &RosterCriteria {
                license: LicenseFilter::Unlicensed,
                ..Default::default()
            },
        );

        assert_eq!(view.len(), 2);
        assert!(view.iter().all(|p| !p.has_license));
    }

    #[test]
    fn grade_filter_exact_match() {
        let roster = sample_roster();
        let view = filter_and_sort(
            &roster,
            &RosterCriteria {
                grade: Some(LicenseGrade::Second),
                ..Default::default()
            },
        );

        assert_eq!(view.len(), 1);
        assert_eq!(view[0].name, "田中太郎");
    }

    #[test]
    fn age_bounds_are_inclusive() {
        let roster = sample_roster();
        let view = filter_and_sort(
            &roster,
            &RosterCriteria {
                min_age: Some(25),
                max_age: Some(31),
                ..Default::default()
            },
        );

        let names: Vec<_> = view.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["佐藤花子", "田中太郎"]);
    }

    #[test]
    fn criteria_compose_with_and() {
        let roster = sample_roster();
        let view = filter_and_sort(
            &roster,
            &RosterCriteria {
                license: LicenseFilter::Licensed,
                min_age: Some(30),
                ..Default::default()
            },
        );

        assert_eq!(view.len(), 1);
        assert_eq!(view[0].name, "鈴木一郎");
    }

    #[test]
    fn pipeline_is_idempotent() {
        let roster = sample_roster();
        let criteria = RosterCriteria {
            search: Some("郎".to_string()),
            order: SortOrder::OldestFirst,
            ..Default::default()
        };

        let first = filter_and_sort(&roster, &criteria);
        let second = filter_and_sort(&roster, &criteria);

        assert_eq!(first, second);
    }

    #[test]
    fn input_snapshot_is_never_mutated() {
        let roster = sample_roster();
        let before = roster.clone();

        let _ = filter_and_sort(
            &roster,
            &RosterCriteria {
                order: SortOrder::OldestFirst,
                ..Default::default()
            },
        );

        assert_eq!(roster, before);
    }

    #[test]
    fn stats_ignore_filtering() {
        // 10 participants, 4 licensed; the licensed-only view shrinks
        // but the stats still describe the whole roster.
        let mut roster = Vec::new();
        for i in 0..10 {
            let grade = (i < 4).then_some(LicenseGrade::Third);
            roster.push(participant(&format!("参加者{i}"), 20 + i, grade, i.into()));
        }

        let view = filter_and_sort(
            &roster,
            &RosterCriteria {
                license: LicenseFilter::Licensed,
                ..Default::default()
            },
        );
        let stats = stats(&roster);

        assert_eq!(view.len(), 4);
        assert_eq!(stats, RosterStats { total: 10, licensed: 4 });
    }

    #[test]
    fn blank_search_is_ignored() {
        let roster = sample_roster();
        let view = filter_and_sort(
            &roster,
            &RosterCriteria {
                search: Some("   ".to_string()),
                ..Default::default()
            },
        );

        assert_eq!(view.len(), roster.len());
    }
}
