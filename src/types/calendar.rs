/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};

use crate::{
    DateTime, EmailAddress, ItemId, NonEmptyArrayOfAllItems, Recurrence, SingleRecipient,
    TimeZone, TimeZoneDefinition,
};

item_record! {
    /// An appointment or meeting on a calendar.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/calendaritem>
    pub struct CalendarItemType {
        /// The iCalendar UID of the item.
        #[serde(rename = "UID", skip_serializing_if = "Option::is_none")]
        pub uid: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub recurrence_id: Option<DateTime>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub date_time_stamp: Option<DateTime>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub start: Option<DateTime>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub end: Option<DateTime>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub original_start: Option<DateTime>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub is_all_day_event: Option<bool>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub legacy_free_busy_status: Option<LegacyFreeBusyType>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub location: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub when: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub is_meeting: Option<bool>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub is_cancelled: Option<bool>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub is_recurring: Option<bool>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub meeting_request_was_sent: Option<bool>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub is_response_requested: Option<bool>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub calendar_item_type: Option<CalendarItemTypeType>,

        /// The authenticated user's response to the meeting.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub my_response_type: Option<ResponseTypeType>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub organizer: Option<SingleRecipient>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub required_attendees: Option<NonEmptyArrayOfAttendees>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub optional_attendees: Option<NonEmptyArrayOfAttendees>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub resources: Option<NonEmptyArrayOfAttendees>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub conflicting_meeting_count: Option<i32>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub adjacent_meeting_count: Option<i32>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub conflicting_meetings: Option<NonEmptyArrayOfAllItems>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub adjacent_meetings: Option<NonEmptyArrayOfAllItems>,

        /// The length of the item as an `xs:duration`, e.g. `PT1H`.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub duration: Option<String>,

        /// A textual description of the item's time zone.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub time_zone: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub appointment_reply_time: Option<DateTime>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub appointment_sequence_number: Option<i32>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub appointment_state: Option<i32>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub recurrence: Option<Recurrence>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub first_occurrence: Option<OccurrenceInfo>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub last_occurrence: Option<OccurrenceInfo>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub modified_occurrences: Option<NonEmptyArrayOfOccurrenceInfo>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub deleted_occurrences: Option<NonEmptyArrayOfDeletedOccurrences>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub meeting_time_zone: Option<TimeZone>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub start_time_zone: Option<TimeZoneDefinition>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub end_time_zone: Option<TimeZoneDefinition>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub conference_type: Option<i32>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub allow_new_time_proposal: Option<bool>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub is_online_meeting: Option<bool>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub meeting_workspace_url: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub net_show_url: Option<String>,
    }
}

/// An attendee of a meeting, with their response.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/attendee>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Attendee {
    pub mailbox: EmailAddress,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_type: Option<ResponseTypeType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_response_time: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub proposed_start: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub proposed_end: Option<DateTime>,
}

/// A list of meeting attendees.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/requiredattendees>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct NonEmptyArrayOfAttendees {
    #[serde(default)]
    pub attendee: Vec<Attendee>,
}

/// A single occurrence of a recurring series.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/occurrence>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct OccurrenceInfo {
    pub item_id: ItemId,
    pub start: DateTime,
    pub end: DateTime,
    pub original_start: DateTime,
}

/// The occurrences of a series which have been modified.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct NonEmptyArrayOfOccurrenceInfo {
    #[serde(default)]
    pub occurrence: Vec<OccurrenceInfo>,
}

/// An occurrence which has been removed from a series.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/deletedoccurrence>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct DeletedOccurrenceInfo {
    pub start: DateTime,
}

/// The occurrences of a series which have been deleted.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct NonEmptyArrayOfDeletedOccurrences {
    #[serde(default)]
    pub deleted_occurrence: Vec<DeletedOccurrenceInfo>,
}

meeting_message_record! {
    /// A message relating to a meeting.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/meetingmessage>
    pub struct MeetingMessageType {}
}

meeting_message_record! {
    /// An invitation to a meeting.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/meetingrequest>
    pub struct MeetingRequestMessageType {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub meeting_request_type: Option<MeetingRequestTypeType>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub intended_free_busy_status: Option<LegacyFreeBusyType>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub start: Option<DateTime>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub end: Option<DateTime>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub original_start: Option<DateTime>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub is_all_day_event: Option<bool>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub legacy_free_busy_status: Option<LegacyFreeBusyType>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub location: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub when: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub is_meeting: Option<bool>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub is_cancelled: Option<bool>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub is_recurring: Option<bool>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub meeting_request_was_sent: Option<bool>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub calendar_item_type: Option<CalendarItemTypeType>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub my_response_type: Option<ResponseTypeType>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub organizer: Option<SingleRecipient>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub required_attendees: Option<NonEmptyArrayOfAttendees>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub optional_attendees: Option<NonEmptyArrayOfAttendees>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub resources: Option<NonEmptyArrayOfAttendees>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub conflicting_meeting_count: Option<i32>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub adjacent_meeting_count: Option<i32>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub conflicting_meetings: Option<NonEmptyArrayOfAllItems>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub adjacent_meetings: Option<NonEmptyArrayOfAllItems>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub duration: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub time_zone: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub appointment_reply_time: Option<DateTime>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub appointment_sequence_number: Option<i32>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub appointment_state: Option<i32>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub recurrence: Option<Recurrence>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub first_occurrence: Option<OccurrenceInfo>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub last_occurrence: Option<OccurrenceInfo>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub modified_occurrences: Option<NonEmptyArrayOfOccurrenceInfo>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub deleted_occurrences: Option<NonEmptyArrayOfDeletedOccurrences>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub meeting_time_zone: Option<TimeZone>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub start_time_zone: Option<TimeZoneDefinition>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub end_time_zone: Option<TimeZoneDefinition>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub conference_type: Option<i32>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub allow_new_time_proposal: Option<bool>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub is_online_meeting: Option<bool>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub meeting_workspace_url: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub net_show_url: Option<String>,
    }
}

meeting_message_record! {
    /// An attendee's response to a meeting request.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/meetingresponse>
    pub struct MeetingResponseMessageType {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub start: Option<DateTime>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub end: Option<DateTime>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub location: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub recurrence: Option<Recurrence>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub calendar_item_type: Option<CalendarItemTypeType>,

        /// The start time suggested by the attendee.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub proposed_start: Option<DateTime>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub proposed_end: Option<DateTime>,
    }
}

meeting_message_record! {
    /// A notice that a meeting has been cancelled.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/meetingcancellation>
    pub struct MeetingCancellationMessageType {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub start: Option<DateTime>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub end: Option<DateTime>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub location: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub recurrence: Option<Recurrence>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub calendar_item_type: Option<CalendarItemTypeType>,
    }
}

enumeration! {
    /// A response to a meeting.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/responsetype>
    pub enum ResponseTypeType {
        Unknown = "Unknown",
        Organizer = "Organizer",
        Tentative = "Tentative",
        Accept = "Accept",
        Decline = "Decline",
        NoResponseReceived = "NoResponseReceived",
    }
}

enumeration! {
    /// The free/busy status of a calendar item.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/legacyfreebusystatus>
    pub enum LegacyFreeBusyType {
        Free = "Free",
        Tentative = "Tentative",
        Busy = "Busy",
        Oof = "OOF",
        WorkingElsewhere = "WorkingElsewhere",
        NoData = "NoData",
    }
}

enumeration! {
    /// Whether a calendar item stands alone or is part of a series.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/calendaritemtype>
    pub enum CalendarItemTypeType {
        Single = "Single",
        Occurrence = "Occurrence",
        Exception = "Exception",
        RecurringMaster = "RecurringMaster",
    }
}

enumeration! {
    /// The kind of change a meeting request conveys.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/meetingrequesttype>
    pub enum MeetingRequestTypeType {
        None = "None",
        FullUpdate = "FullUpdate",
        InformationalUpdate = "InformationalUpdate",
        NewMeetingRequest = "NewMeetingRequest",
        Outdated = "Outdated",
        SilentUpdate = "SilentUpdate",
        PrincipalWantsCopy = "PrincipalWantsCopy",
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;
    use crate::{test_utils::assert_round_trip, Item};

    #[test]
    fn calendar_item_with_attendees() {
        let item = CalendarItemType {
            subject: Some("Planning".into()),
            start: Some(datetime!(2024-03-04 09:00 UTC).into()),
            end: Some(datetime!(2024-03-04 10:00 UTC).into()),
            legacy_free_busy_status: Some(LegacyFreeBusyType::Oof),
            location: Some("Room 1".into()),
            required_attendees: Some(NonEmptyArrayOfAttendees {
                attendee: vec![Attendee {
                    mailbox: EmailAddress {
                        email_address: Some("bob@example.org".into()),
                        ..Default::default()
                    },
                    response_type: Some(ResponseTypeType::NoResponseReceived),
                    ..Default::default()
                }],
            }),
            ..Default::default()
        };

        let expected = r#"<CalendarItem><Subject>Planning</Subject><Start>2024-03-04T09:00:00Z</Start><End>2024-03-04T10:00:00Z</End><LegacyFreeBusyStatus>OOF</LegacyFreeBusyStatus><Location>Room 1</Location><RequiredAttendees><Attendee><Mailbox><EmailAddress>bob@example.org</EmailAddress></Mailbox><ResponseType>NoResponseReceived</ResponseType></Attendee></RequiredAttendees></CalendarItem>"#;

        assert_round_trip(item, "CalendarItem", expected);
    }

    #[test]
    fn meeting_request_in_item_choice() {
        let request = Item::MeetingRequest(MeetingRequestMessageType {
            uid: Some("040000008200E000".into()),
            meeting_request_type: Some(MeetingRequestTypeType::NewMeetingRequest),
            is_meeting: Some(true),
            ..Default::default()
        });

        let expected = r#"<MeetingRequest><UID>040000008200E000</UID><MeetingRequestType>NewMeetingRequest</MeetingRequestType><IsMeeting>true</IsMeeting></MeetingRequest>"#;

        assert_round_trip(request, "MeetingRequest", expected);
    }
}
