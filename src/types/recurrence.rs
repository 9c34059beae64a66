/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};

use crate::ListOf;

/// A year-based pattern on a relative day, e.g. the last Friday of June.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/relativeyearlyrecurrence>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct RelativeYearlyRecurrence {
    pub days_of_week: DayOfWeek,
    pub day_of_week_index: DayOfWeekIndex,
    pub month: MonthNames,
}

/// A year-based pattern on a fixed date, e.g. 14 March.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/absoluteyearlyrecurrence>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct AbsoluteYearlyRecurrence {
    pub day_of_month: i32,
    pub month: MonthNames,
}

/// A month-based pattern on a relative day, e.g. the second Tuesday.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/relativemonthlyrecurrence>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct RelativeMonthlyRecurrence {
    /// The number of months between occurrences.
    pub interval: i32,
    pub days_of_week: DayOfWeek,
    pub day_of_week_index: DayOfWeekIndex,
}

/// A month-based pattern on a fixed day of the month.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/absolutemonthlyrecurrence>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct AbsoluteMonthlyRecurrence {
    pub interval: i32,
    pub day_of_month: i32,
}

/// A week-based pattern on one or more days of the week.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/weeklyrecurrence>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct WeeklyRecurrence {
    /// The number of weeks between occurrences.
    pub interval: i32,
    pub days_of_week: DaysOfWeek,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_day_of_week: Option<DayOfWeek>,
}

/// A pattern recurring every given number of days.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/dailyrecurrence>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct DailyRecurrence {
    pub interval: i32,
}

/// A task pattern recurring a number of intervals after the previous
/// occurrence was completed.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/dailyregeneration>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct RegeneratingPattern {
    pub interval: i32,
}

choice_group! {
    /// The pattern of a recurring calendar item.
    pub enum RecurrencePattern {
        RelativeYearlyRecurrence(RelativeYearlyRecurrence),
        AbsoluteYearlyRecurrence(AbsoluteYearlyRecurrence),
        RelativeMonthlyRecurrence(RelativeMonthlyRecurrence),
        AbsoluteMonthlyRecurrence(AbsoluteMonthlyRecurrence),
        WeeklyRecurrence(WeeklyRecurrence),
        DailyRecurrence(DailyRecurrence),
    }
}

choice_group! {
    /// The pattern of a recurring task, which may regenerate on completion.
    pub enum TaskRecurrencePattern {
        RelativeYearlyRecurrence(RelativeYearlyRecurrence),
        AbsoluteYearlyRecurrence(AbsoluteYearlyRecurrence),
        RelativeMonthlyRecurrence(RelativeMonthlyRecurrence),
        AbsoluteMonthlyRecurrence(AbsoluteMonthlyRecurrence),
        WeeklyRecurrence(WeeklyRecurrence),
        DailyRecurrence(DailyRecurrence),
        DailyRegeneration(RegeneratingPattern),
        WeeklyRegeneration(RegeneratingPattern),
        MonthlyRegeneration(RegeneratingPattern),
        YearlyRegeneration(RegeneratingPattern),
    }
}

/// A series with no end date.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/noendrecurrence>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct NoEndRecurrenceRange {
    /// The first date of the series as an `xs:date`, e.g. `2024-01-01` or
    /// `2024-01-01Z`.
    pub start_date: String,
}

/// A series ending on a given date.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/enddaterecurrence>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct EndDateRecurrenceRange {
    pub start_date: String,
    pub end_date: String,
}

/// A series ending after a number of occurrences.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/numberedrecurrence>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct NumberedRecurrenceRange {
    pub start_date: String,
    pub number_of_occurrences: i32,
}

choice_group! {
    /// The span of dates over which a series recurs.
    pub enum RecurrenceRange {
        NoEndRecurrence(NoEndRecurrenceRange),
        EndDateRecurrence(EndDateRecurrenceRange),
        NumberedRecurrence(NumberedRecurrenceRange),
    }
}

/// The wire shape of a recurrence: the pattern element directly followed by
/// the range element.
#[derive(Deserialize, Serialize)]
struct PatternAndRange<P> {
    #[serde(rename = "$value")]
    content: (P, RecurrenceRange),
}

/// The recurrence of a calendar item.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/recurrence-recurrencetype>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(
    from = "PatternAndRange<RecurrencePattern>",
    into = "PatternAndRange<RecurrencePattern>"
)]
pub struct Recurrence {
    pub pattern: RecurrencePattern,
    pub range: RecurrenceRange,
}

/// The recurrence of a task.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/recurrence-taskrecurrencetype>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(
    from = "PatternAndRange<TaskRecurrencePattern>",
    into = "PatternAndRange<TaskRecurrencePattern>"
)]
pub struct TaskRecurrence {
    pub pattern: TaskRecurrencePattern,
    pub range: RecurrenceRange,
}

impl From<PatternAndRange<RecurrencePattern>> for Recurrence {
    fn from(value: PatternAndRange<RecurrencePattern>) -> Self {
        let (pattern, range) = value.content;
        Self { pattern, range }
    }
}

impl From<Recurrence> for PatternAndRange<RecurrencePattern> {
    fn from(value: Recurrence) -> Self {
        Self {
            content: (value.pattern, value.range),
        }
    }
}

impl From<PatternAndRange<TaskRecurrencePattern>> for TaskRecurrence {
    fn from(value: PatternAndRange<TaskRecurrencePattern>) -> Self {
        let (pattern, range) = value.content;
        Self { pattern, range }
    }
}

impl From<TaskRecurrence> for PatternAndRange<TaskRecurrencePattern> {
    fn from(value: TaskRecurrence) -> Self {
        Self {
            content: (value.pattern, value.range),
        }
    }
}

enumeration! {
    /// A day of the week, or a class of days.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/daysofweek>
    pub enum DayOfWeek {
        Sunday = "Sunday",
        Monday = "Monday",
        Tuesday = "Tuesday",
        Wednesday = "Wednesday",
        Thursday = "Thursday",
        Friday = "Friday",
        Saturday = "Saturday",
        Day = "Day",
        Weekday = "Weekday",
        WeekendDay = "WeekendDay",
    }
}

/// A space-separated list of days of the week.
pub type DaysOfWeek = ListOf<DayOfWeek>;

enumeration! {
    /// Which week of the month a relative pattern falls in.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/dayofweekindex>
    pub enum DayOfWeekIndex {
        First = "First",
        Second = "Second",
        Third = "Third",
        Fourth = "Fourth",
        Last = "Last",
    }
}

enumeration! {
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/month>
    pub enum MonthNames {
        January = "January",
        February = "February",
        March = "March",
        April = "April",
        May = "May",
        June = "June",
        July = "July",
        August = "August",
        September = "September",
        October = "October",
        November = "November",
        December = "December",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_deserialized_content, assert_round_trip};

    #[test]
    fn weekly_recurrence() {
        let recurrence = Recurrence {
            pattern: RecurrencePattern::WeeklyRecurrence(WeeklyRecurrence {
                interval: 2,
                days_of_week: vec![DayOfWeek::Monday, DayOfWeek::Thursday].into(),
                first_day_of_week: None,
            }),
            range: RecurrenceRange::NumberedRecurrence(NumberedRecurrenceRange {
                start_date: "2024-01-01".into(),
                number_of_occurrences: 10,
            }),
        };

        let expected = r#"<Recurrence><WeeklyRecurrence><Interval>2</Interval><DaysOfWeek>Monday Thursday</DaysOfWeek></WeeklyRecurrence><NumberedRecurrence><StartDate>2024-01-01</StartDate><NumberOfOccurrences>10</NumberOfOccurrences></NumberedRecurrence></Recurrence>"#;

        assert_round_trip(recurrence, "Recurrence", expected);
    }

    #[test]
    fn relative_yearly_recurrence() {
        let xml = r#"<t:Recurrence><t:RelativeYearlyRecurrence><t:DaysOfWeek>Friday</t:DaysOfWeek><t:DayOfWeekIndex>Last</t:DayOfWeekIndex><t:Month>June</t:Month></t:RelativeYearlyRecurrence><t:NoEndRecurrence><t:StartDate>2024-06-28Z</t:StartDate></t:NoEndRecurrence></t:Recurrence>"#;

        assert_deserialized_content(
            xml,
            Recurrence {
                pattern: RecurrencePattern::RelativeYearlyRecurrence(RelativeYearlyRecurrence {
                    days_of_week: DayOfWeek::Friday,
                    day_of_week_index: DayOfWeekIndex::Last,
                    month: MonthNames::June,
                }),
                range: RecurrenceRange::NoEndRecurrence(NoEndRecurrenceRange {
                    start_date: "2024-06-28Z".into(),
                }),
            },
        );
    }

    #[test]
    fn task_regeneration() {
        let recurrence = TaskRecurrence {
            pattern: TaskRecurrencePattern::WeeklyRegeneration(RegeneratingPattern { interval: 1 }),
            range: RecurrenceRange::EndDateRecurrence(EndDateRecurrenceRange {
                start_date: "2024-02-01".into(),
                end_date: "2024-12-31".into(),
            }),
        };

        let expected = r#"<Recurrence><WeeklyRegeneration><Interval>1</Interval></WeeklyRegeneration><EndDateRecurrence><StartDate>2024-02-01</StartDate><EndDate>2024-12-31</EndDate></EndDateRecurrence></Recurrence>"#;

        assert_round_trip(recurrence, "Recurrence", expected);
    }
}
