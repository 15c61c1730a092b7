//! Cross-user grouping views.
//!
//! Two aggregate views over the holiday and work-location records of a date
//! range: a by-date roster (who is off on each day) and a by-person tally
//! (per-employee holiday and remote-day counts, bucketed by organizational
//! group). Both views index records by user before scanning the directory,
//! keeping the work O(records) rather than O(users x records).

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap, HashSet};

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::models::{Employee, EmployeeRef, HolidayRecord, OrgGroup, WorkLocationRecord};

use super::calendar_math::{format_date, is_weekend, weekday_name};

/// Group id of the sentinel bucket for employees without a group.
pub const UNGROUPED_GROUP_ID: i64 = 0;

/// Display name of the sentinel bucket for employees without a group.
pub const UNGROUPED_GROUP_NAME: &str = "no group";

/// The employees off on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRoster {
    /// The day formatted for display (`DD.MM.YYYY`).
    pub display_date: String,
    /// English day-of-week name for display.
    pub weekday_name: String,
    /// The employees with a personal holiday on the day, in directory
    /// order.
    pub employees: Vec<EmployeeRef>,
}

/// One employee's holiday and remote-day tallies for the queried month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonAggregate {
    /// The employee the tallies belong to.
    pub employee: EmployeeRef,
    /// Canonical dates of the employee's personal holidays, ascending.
    pub holiday_dates: Vec<String>,
    /// Number of personal-holiday days.
    pub holiday_count: usize,
    /// Canonical dates of the employee's qualifying remote days, ascending.
    pub remote_dates: Vec<String>,
    /// Number of qualifying remote days.
    pub remote_days_count: usize,
}

/// The per-employee tallies of one organizational group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupAggregate {
    /// The group id, or [`UNGROUPED_GROUP_ID`] for the sentinel bucket.
    pub group_id: i64,
    /// The group display name.
    pub group_name: String,
    /// The qualifying employees of the group, in directory order.
    pub employees: Vec<PersonAggregate>,
}

/// The complete by-person view: groups plus summary counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonGrouping {
    /// Non-empty groups sorted alphabetically by name, with the ungrouped
    /// bucket always last.
    pub groups: Vec<GroupAggregate>,
    /// How many employees have at least one holiday day in the month.
    pub employees_with_holidays: usize,
    /// How many employees have at least one qualifying remote day in the
    /// month.
    pub employees_with_remote_work: usize,
}

/// Builds the by-date roster view from a range of holiday records.
///
/// Records are first indexed by user, then every directory user's records
/// are appended into a date-keyed map. Key order is insertion order (the
/// first date encountered while scanning users in directory order), not
/// necessarily chronological; callers needing chronological order must
/// sort the keys.
pub fn group_holidays_by_date(
    records: &[HolidayRecord],
    directory: &[Employee],
) -> IndexMap<String, DayRoster> {
    let mut records_by_user: HashMap<i64, Vec<NaiveDate>> = HashMap::new();
    for record in records {
        records_by_user
            .entry(record.user_id)
            .or_default()
            .push(record.date);
    }

    let mut by_date: IndexMap<String, DayRoster> = IndexMap::new();
    for employee in directory {
        let Some(dates) = records_by_user.get(&employee.id) else {
            continue;
        };
        for date in dates {
            let roster = by_date
                .entry(format_date(*date))
                .or_insert_with(|| DayRoster {
                    display_date: date.format("%d.%m.%Y").to_string(),
                    weekday_name: weekday_name(*date).to_string(),
                    employees: Vec::new(),
                });
            roster.employees.push(EmployeeRef::from(employee));
        }
    }
    by_date
}

/// Builds the by-person view for one month.
///
/// For each user: `holiday_dates` are the dates of their holiday records
/// (the caller pre-filters records to the month), and `remote_dates` are
/// the subset of `all_days_in_month` where the user explicitly declared
/// remote (`is_onsite == false`, distinct from "no declaration") and the
/// day is otherwise a working day, i.e. not a weekend, not a public
/// holiday, and not one of the user's personal holidays.
///
/// Users with neither holidays nor remote days are omitted. Qualifying
/// users are bucketed into their organizational group, or the sentinel
/// ungrouped bucket (id 0, name "no group"). Empty groups are dropped;
/// the rest are sorted alphabetically by name with the ungrouped bucket
/// last regardless of its name.
pub fn group_by_person(
    holidays: &[HolidayRecord],
    locations: &[WorkLocationRecord],
    public_holidays: &HashSet<NaiveDate>,
    directory: &[Employee],
    groups: &[OrgGroup],
    all_days_in_month: &[NaiveDate],
) -> PersonGrouping {
    let mut holidays_by_user: HashMap<i64, BTreeSet<NaiveDate>> = HashMap::new();
    for record in holidays {
        holidays_by_user
            .entry(record.user_id)
            .or_default()
            .insert(record.date);
    }

    let mut locations_by_user: HashMap<i64, HashMap<NaiveDate, bool>> = HashMap::new();
    for record in locations {
        locations_by_user
            .entry(record.user_id)
            .or_default()
            .insert(record.date, record.is_onsite);
    }

    let group_names: HashMap<i64, &str> = groups.iter().map(|g| (g.id, g.name.as_str())).collect();

    let mut buckets: HashMap<i64, Vec<PersonAggregate>> = HashMap::new();
    let mut employees_with_holidays = 0;
    let mut employees_with_remote_work = 0;

    for employee in directory {
        let holiday_set = holidays_by_user.get(&employee.id);
        let holiday_dates: Vec<String> = holiday_set
            .map(|dates| dates.iter().map(|d| format_date(*d)).collect())
            .unwrap_or_default();

        let user_locations = locations_by_user.get(&employee.id);
        let remote_dates: Vec<String> = all_days_in_month
            .iter()
            .filter(|&&day| {
                user_locations
                    .and_then(|map| map.get(&day))
                    .is_some_and(|is_onsite| !is_onsite)
                    && !is_weekend(day)
                    && !public_holidays.contains(&day)
                    && holiday_set.is_none_or(|dates| !dates.contains(&day))
            })
            .map(|d| format_date(*d))
            .collect();

        if holiday_dates.is_empty() && remote_dates.is_empty() {
            continue;
        }
        if !holiday_dates.is_empty() {
            employees_with_holidays += 1;
        }
        if !remote_dates.is_empty() {
            employees_with_remote_work += 1;
        }

        // An id the group directory does not know falls back to the
        // ungrouped bucket.
        let group_id = match employee.group_id {
            Some(id) if group_names.contains_key(&id) => id,
            _ => UNGROUPED_GROUP_ID,
        };
        buckets.entry(group_id).or_default().push(PersonAggregate {
            employee: EmployeeRef::from(employee),
            holiday_count: holiday_dates.len(),
            holiday_dates,
            remote_days_count: remote_dates.len(),
            remote_dates,
        });
    }

    let mut result: Vec<GroupAggregate> = buckets
        .into_iter()
        .map(|(group_id, employees)| GroupAggregate {
            group_id,
            group_name: if group_id == UNGROUPED_GROUP_ID {
                UNGROUPED_GROUP_NAME.to_string()
            } else {
                group_names
                    .get(&group_id)
                    .map(|name| name.to_string())
                    .unwrap_or_else(|| UNGROUPED_GROUP_NAME.to_string())
            },
            employees,
        })
        .collect();

    result.sort_by(|a, b| {
        match (
            a.group_id == UNGROUPED_GROUP_ID,
            b.group_id == UNGROUPED_GROUP_ID,
        ) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => a.group_name.cmp(&b.group_name),
        }
    });

    PersonGrouping {
        groups: result,
        employees_with_holidays,
        employees_with_remote_work,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::calendar_math::days_in_month;

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn employee(id: i64, name: &str, group_id: Option<i64>) -> Employee {
        Employee {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            group_id,
            is_admin: false,
        }
    }

    fn holiday(user_id: i64, date: &str) -> HolidayRecord {
        HolidayRecord::new(user_id, make_date(date))
    }

    fn remote(user_id: i64, date: &str) -> WorkLocationRecord {
        WorkLocationRecord {
            user_id,
            date: make_date(date),
            is_onsite: false,
        }
    }

    fn onsite(user_id: i64, date: &str) -> WorkLocationRecord {
        WorkLocationRecord {
            user_id,
            date: make_date(date),
            is_onsite: true,
        }
    }

    #[test]
    fn test_by_date_groups_employees_per_day() {
        let directory = vec![
            employee(1, "Alice Kovach", Some(10)),
            employee(2, "Ben Ortiz", Some(10)),
        ];
        let records = vec![
            holiday(1, "2024-06-03"),
            holiday(1, "2024-06-04"),
            holiday(2, "2024-06-03"),
        ];

        let by_date = group_holidays_by_date(&records, &directory);
        assert_eq!(by_date.len(), 2);

        let monday = &by_date["2024-06-03"];
        assert_eq!(monday.display_date, "03.06.2024");
        assert_eq!(monday.weekday_name, "Monday");
        assert_eq!(monday.employees.len(), 2);
        assert_eq!(monday.employees[0].name, "Alice Kovach");
        assert_eq!(monday.employees[1].name, "Ben Ortiz");

        assert_eq!(by_date["2024-06-04"].employees.len(), 1);
    }

    #[test]
    fn test_by_date_key_order_follows_directory_scan() {
        // Ben appears first in the directory, so his later date is the
        // first key even though Alice's date is chronologically earlier.
        let directory = vec![
            employee(2, "Ben Ortiz", None),
            employee(1, "Alice Kovach", None),
        ];
        let records = vec![holiday(1, "2024-06-03"), holiday(2, "2024-06-05")];

        let by_date = group_holidays_by_date(&records, &directory);
        let keys: Vec<&String> = by_date.keys().collect();
        assert_eq!(keys, vec!["2024-06-05", "2024-06-03"]);
    }

    #[test]
    fn test_by_date_ignores_records_without_directory_entry() {
        let directory = vec![employee(1, "Alice Kovach", None)];
        let records = vec![holiday(1, "2024-06-03"), holiday(99, "2024-06-03")];

        let by_date = group_holidays_by_date(&records, &directory);
        assert_eq!(by_date["2024-06-03"].employees.len(), 1);
    }

    #[test]
    fn test_by_person_tallies_and_summary_counters() {
        // User A has 3 holiday dates and 2 qualifying remote dates; user B
        // has neither and is omitted entirely.
        let directory = vec![
            employee(1, "Alice Kovach", Some(10)),
            employee(2, "Ben Ortiz", Some(10)),
        ];
        let groups = vec![OrgGroup {
            id: 10,
            name: "Engineering".to_string(),
        }];
        let holidays = vec![
            holiday(1, "2024-06-03"),
            holiday(1, "2024-06-04"),
            holiday(1, "2024-06-05"),
        ];
        let locations = vec![remote(1, "2024-06-06"), remote(1, "2024-06-07")];
        let days = days_in_month(2024, 6);

        let grouping = group_by_person(
            &holidays,
            &locations,
            &HashSet::new(),
            &directory,
            &groups,
            &days,
        );

        assert_eq!(grouping.groups.len(), 1);
        let group = &grouping.groups[0];
        assert_eq!(group.group_name, "Engineering");
        assert_eq!(group.employees.len(), 1);

        let alice = &group.employees[0];
        assert_eq!(alice.employee.id, 1);
        assert_eq!(alice.holiday_count, 3);
        assert_eq!(alice.remote_days_count, 2);
        assert_eq!(
            alice.remote_dates,
            vec!["2024-06-06".to_string(), "2024-06-07".to_string()]
        );

        assert_eq!(grouping.employees_with_holidays, 1);
        assert_eq!(grouping.employees_with_remote_work, 1);
    }

    #[test]
    fn test_remote_days_exclude_non_working_days() {
        let directory = vec![employee(1, "Alice Kovach", None)];
        let public: HashSet<NaiveDate> = [make_date("2024-06-06")].into_iter().collect();
        let holidays = vec![holiday(1, "2024-06-07")];
        let locations = vec![
            remote(1, "2024-06-06"), // public holiday, does not qualify
            remote(1, "2024-06-07"), // personal holiday, does not qualify
            remote(1, "2024-06-08"), // Saturday, does not qualify
            remote(1, "2024-06-10"), // Monday, qualifies
            onsite(1, "2024-06-11"), // onsite, not remote
        ];
        let days = days_in_month(2024, 6);

        let grouping = group_by_person(
            &holidays,
            &locations,
            &public,
            &directory,
            &[],
            &days,
        );

        let person = &grouping.groups[0].employees[0];
        assert_eq!(person.remote_dates, vec!["2024-06-10".to_string()]);
        assert_eq!(person.remote_days_count, 1);
        // The personal holiday still counts as a holiday
        assert_eq!(person.holiday_count, 1);
    }

    #[test]
    fn test_undeclared_days_are_not_remote() {
        // No location record at all is distinct from declared-remote
        let directory = vec![employee(1, "Alice Kovach", None)];
        let holidays = vec![holiday(1, "2024-06-03")];
        let days = days_in_month(2024, 6);

        let grouping =
            group_by_person(&holidays, &[], &HashSet::new(), &directory, &[], &days);
        let person = &grouping.groups[0].employees[0];
        assert!(person.remote_dates.is_empty());
        assert_eq!(grouping.employees_with_remote_work, 0);
    }

    #[test]
    fn test_groups_sorted_alphabetically_with_ungrouped_last() {
        let directory = vec![
            employee(1, "Alice Kovach", Some(20)),
            employee(2, "Ben Ortiz", Some(10)),
            employee(3, "Carol Wei", None),
        ];
        let groups = vec![
            OrgGroup {
                id: 10,
                name: "Support".to_string(),
            },
            OrgGroup {
                id: 20,
                name: "Engineering".to_string(),
            },
        ];
        let holidays = vec![
            holiday(1, "2024-06-03"),
            holiday(2, "2024-06-03"),
            holiday(3, "2024-06-03"),
        ];
        let days = days_in_month(2024, 6);

        let grouping = group_by_person(
            &holidays,
            &[],
            &HashSet::new(),
            &directory,
            &groups,
            &days,
        );

        let names: Vec<&str> = grouping
            .groups
            .iter()
            .map(|g| g.group_name.as_str())
            .collect();
        assert_eq!(names, vec!["Engineering", "Support", "no group"]);
        assert_eq!(grouping.groups[2].group_id, UNGROUPED_GROUP_ID);
    }

    #[test]
    fn test_empty_groups_are_dropped() {
        let directory = vec![
            employee(1, "Alice Kovach", Some(10)),
            employee(2, "Ben Ortiz", Some(20)),
        ];
        let groups = vec![
            OrgGroup {
                id: 10,
                name: "Engineering".to_string(),
            },
            OrgGroup {
                id: 20,
                name: "Design".to_string(),
            },
        ];
        let holidays = vec![holiday(1, "2024-06-03")];
        let days = days_in_month(2024, 6);

        let grouping = group_by_person(
            &holidays,
            &[],
            &HashSet::new(),
            &directory,
            &groups,
            &days,
        );

        assert_eq!(grouping.groups.len(), 1);
        assert_eq!(grouping.groups[0].group_name, "Engineering");
    }

    #[test]
    fn test_unknown_group_id_falls_back_to_ungrouped() {
        let directory = vec![employee(1, "Alice Kovach", Some(77))];
        let holidays = vec![holiday(1, "2024-06-03")];
        let days = days_in_month(2024, 6);

        let grouping =
            group_by_person(&holidays, &[], &HashSet::new(), &directory, &[], &days);
        assert_eq!(grouping.groups.len(), 1);
        assert_eq!(grouping.groups[0].group_id, UNGROUPED_GROUP_ID);
        assert_eq!(grouping.groups[0].group_name, UNGROUPED_GROUP_NAME);
    }

    #[test]
    fn test_holiday_dates_are_sorted_ascending() {
        let directory = vec![employee(1, "Alice Kovach", None)];
        let holidays = vec![
            holiday(1, "2024-06-10"),
            holiday(1, "2024-06-03"),
            holiday(1, "2024-06-05"),
        ];
        let days = days_in_month(2024, 6);

        let grouping =
            group_by_person(&holidays, &[], &HashSet::new(), &directory, &[], &days);
        let person = &grouping.groups[0].employees[0];
        assert_eq!(
            person.holiday_dates,
            vec![
                "2024-06-03".to_string(),
                "2024-06-05".to_string(),
                "2024-06-10".to_string(),
            ]
        );
    }
}
