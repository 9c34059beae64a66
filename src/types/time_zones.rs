/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};

use crate::{DayOfWeek, Error, RelativeYearlyRecurrence};

/// A time zone described by its offset from UTC and its daylight saving
/// rules.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/meetingtimezone>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct TimeZone {
    #[serde(rename = "@TimeZoneName", skip_serializing_if = "Option::is_none")]
    pub time_zone_name: Option<String>,

    /// The offset from UTC as an `xs:duration`, e.g. `-PT8H`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_offset: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard: Option<TimeChange>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub daylight: Option<TimeChange>,
}

choice_group! {
    /// When a time change takes effect.
    pub enum TimeChangePattern {
        RelativeYearlyRecurrence(RelativeYearlyRecurrence),

        /// A one-off change on the given `xs:date`.
        AbsoluteDate(String),
    }
}

/// A transition to or from daylight saving time.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/standard>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(try_from = "TimeChangeWire", into = "TimeChangeWire")]
pub struct TimeChange {
    pub time_zone_name: Option<String>,

    /// The offset from the base offset, as an `xs:duration`.
    pub offset: String,

    pub pattern: TimeChangePattern,

    /// The local time of the change, as an `xs:time`, e.g. `02:00:00`.
    pub time: String,
}

/// The wire shape of [`TimeChange`], where the pattern sits between two
/// named elements.
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
struct TimeChangeWire {
    #[serde(rename = "@TimeZoneName", skip_serializing_if = "Option::is_none")]
    time_zone_name: Option<String>,

    offset: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    relative_yearly_recurrence: Option<RelativeYearlyRecurrence>,

    #[serde(skip_serializing_if = "Option::is_none")]
    absolute_date: Option<String>,

    time: String,
}

impl TryFrom<TimeChangeWire> for TimeChange {
    type Error = Error;

    fn try_from(value: TimeChangeWire) -> Result<Self, Self::Error> {
        let pattern = match (value.relative_yearly_recurrence, value.absolute_date) {
            (Some(recurrence), None) => TimeChangePattern::RelativeYearlyRecurrence(recurrence),
            (None, Some(date)) => TimeChangePattern::AbsoluteDate(date),
            (None, None) => {
                return Err(Error::InvalidChoice {
                    type_name: "TimeChange",
                    reason: "expected one of RelativeYearlyRecurrence or AbsoluteDate",
                })
            }
            (Some(_), Some(_)) => {
                return Err(Error::InvalidChoice {
                    type_name: "TimeChange",
                    reason: "found both RelativeYearlyRecurrence and AbsoluteDate",
                })
            }
        };

        Ok(Self {
            time_zone_name: value.time_zone_name,
            offset: value.offset,
            pattern,
            time: value.time,
        })
    }
}

impl From<TimeChange> for TimeChangeWire {
    fn from(value: TimeChange) -> Self {
        let (relative_yearly_recurrence, absolute_date) = match value.pattern {
            TimeChangePattern::RelativeYearlyRecurrence(recurrence) => (Some(recurrence), None),
            TimeChangePattern::AbsoluteDate(date) => (None, Some(date)),
        };

        Self {
            time_zone_name: value.time_zone_name,
            offset: value.offset,
            relative_yearly_recurrence,
            absolute_date,
            time: value.time,
        }
    }
}

/// A time zone described by its periods and the transitions between them.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/timezonedefinition>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct TimeZoneDefinition {
    /// The Windows identifier of the time zone, e.g. `Pacific Standard Time`.
    #[serde(rename = "@Id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "@Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub periods: Option<NonEmptyArrayOfPeriods>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub transitions_groups: Option<ArrayOfTransitionsGroups>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub transitions: Option<Transitions>,
}

/// A list of time zone periods.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct NonEmptyArrayOfPeriods {
    #[serde(default)]
    pub period: Vec<Period>,
}

/// A span of time during which a time zone has a fixed offset from UTC.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/period>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Period {
    /// The offset from UTC, as an `xs:duration`.
    #[serde(rename = "@Bias")]
    pub bias: String,

    #[serde(rename = "@Name")]
    pub name: String,

    #[serde(rename = "@Id")]
    pub id: String,
}

/// A list of named groups of transitions.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ArrayOfTransitionsGroups {
    #[serde(default)]
    pub transitions_group: Vec<TransitionsGroup>,
}

/// A named group of transitions.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/transitionsgroup>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct TransitionsGroup {
    #[serde(rename = "@Id")]
    pub id: String,

    #[serde(rename = "$value", default)]
    pub transitions: Vec<Transition>,
}

/// The transitions in effect for a time zone definition.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/transitions>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Transitions {
    #[serde(rename = "$value", default)]
    pub inner: Vec<Transition>,
}

choice_group! {
    /// A change from one period or group to another.
    pub enum Transition {
        Transition(TransitionType),
        AbsoluteDateTransition(AbsoluteDateTransition),
        RecurringDayTransition(RecurringDayTransition),
        RecurringDateTransition(RecurringDateTransition),
    }
}

// The derive in `choice_group!` stops at `PartialEq`, but every alternative
// here is `Eq`.
impl Eq for Transition {}

impl Eq for TimeChangePattern {}

/// The period or group a transition leads to.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/to>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct TransitionTarget {
    #[serde(rename = "@Kind")]
    pub kind: TransitionTargetKind,

    #[serde(rename = "$text")]
    pub value: String,
}

/// An unconditional transition.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/transition>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct TransitionType {
    pub to: TransitionTarget,
}

/// A transition at a fixed point in time.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/absolutedatetransition>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct AbsoluteDateTransition {
    pub to: TransitionTarget,

    /// The instant of the transition. Servers write these without a UTC
    /// offset, so the literal is kept as is.
    pub date_time: String,
}

/// A yearly transition on a relative day, e.g. the first Sunday of November.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/recurringdaytransition>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct RecurringDayTransition {
    pub to: TransitionTarget,

    /// The local time of day of the transition, as an `xs:duration`.
    pub time_offset: String,

    /// The one-based month of the transition.
    pub month: i32,

    pub day_of_week: DayOfWeek,

    /// The week of the month, where `-1` is the last.
    pub occurrence: i32,
}

/// A yearly transition on a fixed date.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/recurringdatetransition>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct RecurringDateTransition {
    pub to: TransitionTarget,
    pub time_offset: String,
    pub month: i32,
    pub day: i32,
}

enumeration! {
    /// What a transition's target refers to.
    pub enum TransitionTargetKind {
        Period = "Period",
        Group = "Group",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        from_xml,
        test_utils::{assert_deserialized_content, assert_round_trip},
        DayOfWeekIndex, MonthNames,
    };

    #[test]
    fn legacy_time_zone() {
        let zone = TimeZone {
            time_zone_name: Some("Pacific Standard Time".into()),
            base_offset: Some("PT8H".into()),
            standard: Some(TimeChange {
                time_zone_name: None,
                offset: "PT0M".into(),
                pattern: TimeChangePattern::RelativeYearlyRecurrence(RelativeYearlyRecurrence {
                    days_of_week: DayOfWeek::Sunday,
                    day_of_week_index: DayOfWeekIndex::First,
                    month: MonthNames::November,
                }),
                time: "02:00:00".into(),
            }),
            daylight: None,
        };

        let expected = r#"<MeetingTimeZone TimeZoneName="Pacific Standard Time"><BaseOffset>PT8H</BaseOffset><Standard><Offset>PT0M</Offset><RelativeYearlyRecurrence><DaysOfWeek>Sunday</DaysOfWeek><DayOfWeekIndex>First</DayOfWeekIndex><Month>November</Month></RelativeYearlyRecurrence><Time>02:00:00</Time></Standard></MeetingTimeZone>"#;

        assert_round_trip(zone, "MeetingTimeZone", expected);
    }

    #[test]
    fn time_change_needs_exactly_one_pattern() {
        let neither = "<Standard><Offset>PT0M</Offset><Time>02:00:00</Time></Standard>";
        assert!(from_xml::<TimeChange>(neither).is_err());

        let both = "<Standard><Offset>PT0M</Offset><AbsoluteDate>2024-03-10</AbsoluteDate><RelativeYearlyRecurrence><DaysOfWeek>Sunday</DaysOfWeek><DayOfWeekIndex>Second</DayOfWeekIndex><Month>March</Month></RelativeYearlyRecurrence><Time>02:00:00</Time></Standard>";
        assert!(from_xml::<TimeChange>(both).is_err());

        let absolute = "<Standard><Offset>PT0M</Offset><AbsoluteDate>2024-03-10</AbsoluteDate><Time>02:00:00</Time></Standard>";
        assert_eq!(
            from_xml::<TimeChange>(absolute).unwrap().pattern,
            TimeChangePattern::AbsoluteDate("2024-03-10".into())
        );
    }

    #[test]
    fn time_zone_definition() {
        let xml = r#"<t:StartTimeZone Id="Pacific Standard Time" Name="(UTC-08:00) Pacific Time"><t:Periods><t:Period Bias="PT8H" Name="Standard" Id="trule:Microsoft/Registry/Pacific Standard Time/2007-Standard"/></t:Periods><t:TransitionsGroups><t:TransitionsGroup Id="0"><t:RecurringDayTransition><t:To Kind="Period">trule:Microsoft/Registry/Pacific Standard Time/2007-Standard</t:To><t:TimeOffset>PT2H</t:TimeOffset><t:Month>11</t:Month><t:DayOfWeek>Sunday</t:DayOfWeek><t:Occurrence>1</t:Occurrence></t:RecurringDayTransition></t:TransitionsGroup></t:TransitionsGroups><t:Transitions><t:Transition><t:To Kind="Group">0</t:To></t:Transition><t:AbsoluteDateTransition><t:To Kind="Group">1</t:To><t:DateTime>2007-01-01T00:00:00</t:DateTime></t:AbsoluteDateTransition></t:Transitions></t:StartTimeZone>"#;

        let standard = "trule:Microsoft/Registry/Pacific Standard Time/2007-Standard";

        let expected = TimeZoneDefinition {
            id: Some("Pacific Standard Time".into()),
            name: Some("(UTC-08:00) Pacific Time".into()),
            periods: Some(NonEmptyArrayOfPeriods {
                period: vec![Period {
                    bias: "PT8H".into(),
                    name: "Standard".into(),
                    id: standard.into(),
                }],
            }),
            transitions_groups: Some(ArrayOfTransitionsGroups {
                transitions_group: vec![TransitionsGroup {
                    id: "0".into(),
                    transitions: vec![Transition::RecurringDayTransition(
                        RecurringDayTransition {
                            to: TransitionTarget {
                                kind: TransitionTargetKind::Period,
                                value: standard.into(),
                            },
                            time_offset: "PT2H".into(),
                            month: 11,
                            day_of_week: DayOfWeek::Sunday,
                            occurrence: 1,
                        },
                    )],
                }],
            }),
            transitions: Some(Transitions {
                inner: vec![
                    Transition::Transition(TransitionType {
                        to: TransitionTarget {
                            kind: TransitionTargetKind::Group,
                            value: "0".into(),
                        },
                    }),
                    Transition::AbsoluteDateTransition(AbsoluteDateTransition {
                        to: TransitionTarget {
                            kind: TransitionTargetKind::Group,
                            value: "1".into(),
                        },
                        date_time: "2007-01-01T00:00:00".into(),
                    }),
                ],
            }),
        };

        assert_deserialized_content(xml, expected);
    }
}
