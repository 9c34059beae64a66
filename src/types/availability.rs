/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};

use crate::{DateTime, DayOfWeek, DaysOfWeek, LegacyFreeBusyType, ListOf};

/// A span of time with an explicit start and end.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/duration>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Duration {
    pub start_time: DateTime,
    pub end_time: DateTime,
}

/// The address of a mailbox whose availability is queried.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/email-emailaddresstype>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct AvailabilityAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub address: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_type: Option<String>,
}

/// A mailbox to include in an availability query.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/mailboxdata>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct MailboxData {
    pub email: AvailabilityAddress,

    pub attendee_type: MeetingAttendeeType,

    /// Whether times at which this attendee is busy are still suggested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_conflicts: Option<bool>,
}

/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/mailboxdataarray>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ArrayOfMailboxData {
    #[serde(default)]
    pub mailbox_data: Vec<MailboxData>,
}

/// The kind of free/busy information requested.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/freebusyviewoptions>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct FreeBusyViewOptions {
    pub time_window: Duration,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub merged_free_busy_interval_in_minutes: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_view: Option<FreeBusyViewType>,
}

/// The parameters of a request for meeting time suggestions.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/suggestionsviewoptions>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct SuggestionsViewOptions {
    /// The percentage of attendees who must be available for a time to be
    /// rated good.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub good_threshold: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_results_by_day: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_non_work_hour_results_by_day: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_duration_in_minutes: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_suggestion_quality: Option<SuggestionQuality>,

    pub detailed_suggestions_window: Duration,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_meeting_time: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_object_id: Option<String>,
}

/// The availability of one mailbox over a window of time.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/freebusyview>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct FreeBusyView {
    pub free_busy_view_type: FreeBusyViewType,

    /// One digit per interval, each the numeric form of a
    /// [`LegacyFreeBusyType`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merged_free_busy: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar_event_array: Option<ArrayOfCalendarEvents>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_hours: Option<WorkingHours>,
}

/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/calendareventarray>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ArrayOfCalendarEvents {
    #[serde(default)]
    pub calendar_event: Vec<CalendarEvent>,
}

/// A block of time on a calendar.
///
/// Start and end are expressed in the time zone of the request and carry no
/// offset, so they are kept as written.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/calendarevent>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct CalendarEvent {
    pub start_time: String,
    pub end_time: String,
    pub busy_type: LegacyFreeBusyType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar_event_details: Option<CalendarEventDetails>,
}

/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/calendareventdetails>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct CalendarEventDetails {
    #[serde(rename = "ID", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    pub is_meeting: bool,
    pub is_recurring: bool,
    pub is_exception: bool,
    pub is_reminder_set: bool,
    pub is_private: bool,
}

/// A mailbox owner's working hours.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/workinghours>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct WorkingHours {
    pub time_zone: SerializableTimeZone,
    pub working_period_array: ArrayOfWorkingPeriods,
}

/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/workingperiodarray>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ArrayOfWorkingPeriods {
    #[serde(default)]
    pub working_period: Vec<WorkingPeriod>,
}

/// The working hours shared by a set of weekdays, in minutes from midnight.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/workingperiod>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct WorkingPeriod {
    pub day_of_week: DaysOfWeek,
    pub start_time_in_minutes: i32,
    pub end_time_in_minutes: i32,
}

/// A time zone described by its offset from UTC and its transitions to and
/// from daylight saving time.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/timezone-availability>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct SerializableTimeZone {
    /// Minutes to add to local time to get UTC.
    pub bias: i32,
    pub standard_time: SerializableTimeZoneTime,
    pub daylight_time: SerializableTimeZoneTime,
}

/// A yearly transition into standard or daylight time.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/standardtime>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct SerializableTimeZoneTime {
    pub bias: i32,

    /// The local time of the transition, as `HH:MM:SS`.
    pub time: String,

    /// The week of the month, 5 standing for the last one.
    pub day_order: i16,

    pub month: i16,
    pub day_of_week: DayOfWeek,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
}

/// The suggested meeting times for one day.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/suggestiondayresult>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct SuggestionDayResult {
    pub date: String,
    pub day_quality: SuggestionQuality,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion_array: Option<ArrayOfSuggestions>,
}

/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/suggestionarray>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ArrayOfSuggestions {
    #[serde(default)]
    pub suggestion: Vec<Suggestion>,
}

/// A single suggested meeting time.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/suggestion>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Suggestion {
    pub meeting_time: String,
    pub is_work_time: bool,
    pub suggestion_quality: SuggestionQuality,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendee_conflict_data_array: Option<ArrayOfAttendeeConflictData>,
}

/// The conflicts of each attendee, in the order the attendees were given in
/// the request.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/attendeeconflictdataarray>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ArrayOfAttendeeConflictData {
    #[serde(rename = "$value", default)]
    pub inner: Vec<AttendeeConflictData>,
}

choice_group! {
    /// How a suggested time conflicts with one attendee's calendar.
    pub enum AttendeeConflictData {
        UnknownAttendeeConflictData(UnknownAttendeeConflictData),
        IndividualAttendeeConflictData(IndividualAttendeeConflictData),
        TooBigGroupAttendeeConflictData(TooBigGroupAttendeeConflictData),
        GroupAttendeeConflictData(GroupAttendeeConflictData),
    }
}

impl Eq for AttendeeConflictData {}

/// The attendee could not be resolved.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct UnknownAttendeeConflictData {}

/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/individualattendeeconflictdata>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct IndividualAttendeeConflictData {
    pub busy_type: LegacyFreeBusyType,
}

/// The attendee is a distribution list too large to expand.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct TooBigGroupAttendeeConflictData {}

/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/groupattendeeconflictdata>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct GroupAttendeeConflictData {
    pub number_of_members: i32,
    pub number_of_members_available: i32,
    pub number_of_members_with_conflict: i32,
    pub number_of_members_with_no_data: i32,
}

/// A mailbox's automatic reply settings.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/useroofsettings>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct UserOofSettings {
    pub oof_state: OofState,

    pub external_audience: ExternalAudience,

    /// When `oof_state` is [`OofState::Scheduled`], the window during which
    /// replies are sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<Duration>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_reply: Option<ReplyBody>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reply: Option<ReplyBody>,
}

/// The text of an automatic reply.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/replybody>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ReplyBody {
    #[serde(
        rename = "@xml:lang",
        alias = "@lang",
        skip_serializing_if = "Option::is_none"
    )]
    pub lang: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

enumeration! {
    /// A single kind of free/busy view.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/freebusyviewtype>
    pub enum FreeBusyViewFlag {
        None = "None",
        MergedOnly = "MergedOnly",
        FreeBusy = "FreeBusy",
        FreeBusyMerged = "FreeBusyMerged",
        Detailed = "Detailed",
        DetailedMerged = "DetailedMerged",
    }
}

/// The kinds of free/busy information present in, or requested for, a view.
pub type FreeBusyViewType = ListOf<FreeBusyViewFlag>;

enumeration! {
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/dayquality>
    pub enum SuggestionQuality {
        Excellent = "Excellent",
        Good = "Good",
        Fair = "Fair",
        Poor = "Poor",
    }
}

enumeration! {
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/attendeetype>
    pub enum MeetingAttendeeType {
        Organizer = "Organizer",
        Required = "Required",
        Optional = "Optional",
        Room = "Room",
        Resource = "Resource",
    }
}

enumeration! {
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/oofstate>
    pub enum OofState {
        Disabled = "Disabled",
        Enabled = "Enabled",
        Scheduled = "Scheduled",
    }
}

enumeration! {
    /// Which senders outside the organization receive automatic replies.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/externalaudience>
    pub enum ExternalAudience {
        None = "None",
        Known = "Known",
        All = "All",
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;
    use crate::test_utils::{assert_deserialized_content, assert_round_trip};

    #[test]
    fn free_busy_view_with_working_hours() {
        let xml = r#"<t:FreeBusyView><t:FreeBusyViewType>FreeBusy Detailed</t:FreeBusyViewType><t:CalendarEventArray><t:CalendarEvent><t:StartTime>2024-03-04T09:00:00</t:StartTime><t:EndTime>2024-03-04T10:00:00</t:EndTime><t:BusyType>Busy</t:BusyType><t:CalendarEventDetails><t:ID>0000</t:ID><t:Subject>Standup</t:Subject><t:IsMeeting>true</t:IsMeeting><t:IsRecurring>true</t:IsRecurring><t:IsException>false</t:IsException><t:IsReminderSet>true</t:IsReminderSet><t:IsPrivate>false</t:IsPrivate></t:CalendarEventDetails></t:CalendarEvent></t:CalendarEventArray><t:WorkingHours><t:TimeZone><t:Bias>-60</t:Bias><t:StandardTime><t:Bias>0</t:Bias><t:Time>03:00:00</t:Time><t:DayOrder>5</t:DayOrder><t:Month>10</t:Month><t:DayOfWeek>Sunday</t:DayOfWeek></t:StandardTime><t:DaylightTime><t:Bias>-60</t:Bias><t:Time>02:00:00</t:Time><t:DayOrder>5</t:DayOrder><t:Month>3</t:Month><t:DayOfWeek>Sunday</t:DayOfWeek></t:DaylightTime></t:TimeZone><t:WorkingPeriodArray><t:WorkingPeriod><t:DayOfWeek>Monday Tuesday Wednesday Thursday Friday</t:DayOfWeek><t:StartTimeInMinutes>480</t:StartTimeInMinutes><t:EndTimeInMinutes>1020</t:EndTimeInMinutes></t:WorkingPeriod></t:WorkingPeriodArray></t:WorkingHours></t:FreeBusyView>"#;

        let expected = FreeBusyView {
            free_busy_view_type: vec![FreeBusyViewFlag::FreeBusy, FreeBusyViewFlag::Detailed]
                .into(),
            merged_free_busy: None,
            calendar_event_array: Some(ArrayOfCalendarEvents {
                calendar_event: vec![CalendarEvent {
                    start_time: "2024-03-04T09:00:00".into(),
                    end_time: "2024-03-04T10:00:00".into(),
                    busy_type: LegacyFreeBusyType::Busy,
                    calendar_event_details: Some(CalendarEventDetails {
                        id: Some("0000".into()),
                        subject: Some("Standup".into()),
                        location: None,
                        is_meeting: true,
                        is_recurring: true,
                        is_exception: false,
                        is_reminder_set: true,
                        is_private: false,
                    }),
                }],
            }),
            working_hours: Some(WorkingHours {
                time_zone: SerializableTimeZone {
                    bias: -60,
                    standard_time: SerializableTimeZoneTime {
                        bias: 0,
                        time: "03:00:00".into(),
                        day_order: 5,
                        month: 10,
                        day_of_week: DayOfWeek::Sunday,
                        year: None,
                    },
                    daylight_time: SerializableTimeZoneTime {
                        bias: -60,
                        time: "02:00:00".into(),
                        day_order: 5,
                        month: 3,
                        day_of_week: DayOfWeek::Sunday,
                        year: None,
                    },
                },
                working_period_array: ArrayOfWorkingPeriods {
                    working_period: vec![WorkingPeriod {
                        day_of_week: vec![
                            DayOfWeek::Monday,
                            DayOfWeek::Tuesday,
                            DayOfWeek::Wednesday,
                            DayOfWeek::Thursday,
                            DayOfWeek::Friday,
                        ]
                        .into(),
                        start_time_in_minutes: 480,
                        end_time_in_minutes: 1020,
                    }],
                },
            }),
        };

        assert_deserialized_content(xml, expected);
    }

    #[test]
    fn suggestion_conflicts_keep_attendee_order() {
        let xml = r#"<SuggestionDayResult><Date>2024-03-05T00:00:00</Date><DayQuality>Good</DayQuality><SuggestionArray><Suggestion><MeetingTime>2024-03-05T14:00:00</MeetingTime><IsWorkTime>true</IsWorkTime><SuggestionQuality>Good</SuggestionQuality><AttendeeConflictDataArray><IndividualAttendeeConflictData><BusyType>Free</BusyType></IndividualAttendeeConflictData><UnknownAttendeeConflictData/><GroupAttendeeConflictData><NumberOfMembers>10</NumberOfMembers><NumberOfMembersAvailable>8</NumberOfMembersAvailable><NumberOfMembersWithConflict>1</NumberOfMembersWithConflict><NumberOfMembersWithNoData>1</NumberOfMembersWithNoData></GroupAttendeeConflictData></AttendeeConflictDataArray></Suggestion></SuggestionArray></SuggestionDayResult>"#;

        let expected = SuggestionDayResult {
            date: "2024-03-05T00:00:00".into(),
            day_quality: SuggestionQuality::Good,
            suggestion_array: Some(ArrayOfSuggestions {
                suggestion: vec![Suggestion {
                    meeting_time: "2024-03-05T14:00:00".into(),
                    is_work_time: true,
                    suggestion_quality: SuggestionQuality::Good,
                    attendee_conflict_data_array: Some(ArrayOfAttendeeConflictData {
                        inner: vec![
                            AttendeeConflictData::IndividualAttendeeConflictData(
                                IndividualAttendeeConflictData {
                                    busy_type: LegacyFreeBusyType::Free,
                                },
                            ),
                            AttendeeConflictData::UnknownAttendeeConflictData(
                                UnknownAttendeeConflictData {},
                            ),
                            AttendeeConflictData::GroupAttendeeConflictData(
                                GroupAttendeeConflictData {
                                    number_of_members: 10,
                                    number_of_members_available: 8,
                                    number_of_members_with_conflict: 1,
                                    number_of_members_with_no_data: 1,
                                },
                            ),
                        ],
                    }),
                }],
            }),
        };

        assert_deserialized_content(xml, expected);
    }

    #[test]
    fn scheduled_oof_settings() {
        let settings = UserOofSettings {
            oof_state: OofState::Scheduled,
            external_audience: ExternalAudience::Known,
            duration: Some(Duration {
                start_time: datetime!(2024-07-01 00:00 UTC).into(),
                end_time: datetime!(2024-07-15 00:00 UTC).into(),
            }),
            internal_reply: Some(ReplyBody {
                lang: None,
                message: Some("Back on the 15th.".into()),
            }),
            external_reply: None,
        };

        let expected = r#"<UserOofSettings><OofState>Scheduled</OofState><ExternalAudience>Known</ExternalAudience><Duration><StartTime>2024-07-01T00:00:00Z</StartTime><EndTime>2024-07-15T00:00:00Z</EndTime></Duration><InternalReply><Message>Back on the 15th.</Message></InternalReply></UserOofSettings>"#;

        assert_round_trip(settings, "UserOofSettings", expected);
    }

    #[test]
    fn reply_body_language() {
        let xml = r#"<t:ExternalReply xml:lang="en-US"><t:Message>Away</t:Message></t:ExternalReply>"#;

        assert_deserialized_content(
            xml,
            ReplyBody {
                lang: Some("en-US".into()),
                message: Some("Away".into()),
            },
        );
    }
}
