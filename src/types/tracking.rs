/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};

use crate::{ArrayOfRecipients, ArrayOfStrings, DateTime, EmailAddress};

/// A message found by a message tracking search.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/messagetrackingsearchresult>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct FindMessageTrackingSearchResult {
    pub subject: String,

    pub sender: EmailAddress,

    /// The sender claimed by the message, when it differs from the actual
    /// sender.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purported_sender: Option<EmailAddress>,

    pub recipients: ArrayOfRecipients,

    pub submitted_time: DateTime,

    /// The identifier to pass when requesting the full report.
    pub message_tracking_report_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_hop_server: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_hop_server: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<ArrayOfTrackingProperties>,
}

/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/messagetrackingsearchresults>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ArrayOfFindMessageTrackingSearchResults {
    #[serde(rename = "MessageTrackingSearchResult", default)]
    pub results: Vec<FindMessageTrackingSearchResult>,
}

/// The delivery history of a tracked message.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/messagetrackingreport>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct MessageTrackingReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<EmailAddress>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub purported_sender: Option<EmailAddress>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub submit_time: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_recipients: Option<ArrayOfRecipients>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_tracking_events: Option<ArrayOfRecipientTrackingEvents>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<ArrayOfTrackingProperties>,
}

/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/recipienttrackingevents>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ArrayOfRecipientTrackingEvents {
    #[serde(default)]
    pub recipient_tracking_event: Vec<RecipientTrackingEvent>,
}

/// One step in the delivery of a message to a recipient.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/recipienttrackingevent>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct RecipientTrackingEvent {
    pub date: DateTime,

    pub recipient: EmailAddress,

    pub delivery_status: String,

    pub event_description: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_data: Option<ArrayOfStrings>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcc_recipient: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_recipient: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_path_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<ArrayOfTrackingProperties>,
}

/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/properties-arrayoftrackingpropertiestype>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ArrayOfTrackingProperties {
    #[serde(rename = "TrackingPropertyType", default)]
    pub properties: Vec<TrackingProperty>,
}

impl ArrayOfTrackingProperties {
    /// Returns the value of the first property named `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|property| property.name == name)
            .and_then(|property| property.value.as_deref())
    }
}

/// A name/value pair attached to tracking results.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/trackingpropertytype>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct TrackingProperty {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

enumeration! {
    /// The level of detail of a tracking report.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/reporttemplate>
    pub enum MessageTrackingReportTemplate {
        Summary = "Summary",
        RecipientPath = "RecipientPath",
    }
}

enumeration! {
    /// How far a tracking search reaches.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/scope>
    pub enum MessageTrackingScope {
        Organization = "Organization",
        Forest = "Forest",
        Site = "Site",
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;
    use crate::test_utils::{assert_deserialized_content, assert_round_trip};

    fn mailbox(address: &str) -> EmailAddress {
        EmailAddress {
            email_address: Some(address.into()),
            ..Default::default()
        }
    }

    #[test]
    fn search_results() {
        let xml = r#"<t:MessageTrackingSearchResults><t:MessageTrackingSearchResult><t:Subject>Quarterly numbers</t:Subject><t:Sender><t:EmailAddress>sam@example.com</t:EmailAddress></t:Sender><t:Recipients><t:Mailbox><t:EmailAddress>kim@example.com</t:EmailAddress></t:Mailbox><t:Mailbox><t:EmailAddress>lee@example.com</t:EmailAddress></t:Mailbox></t:Recipients><t:SubmittedTime>2024-04-02T10:15:00Z</t:SubmittedTime><t:MessageTrackingReportId>Message-Id=abc</t:MessageTrackingReportId><t:Properties><t:TrackingPropertyType><t:Name>Arbitration</t:Name><t:Value>false</t:Value></t:TrackingPropertyType></t:Properties></t:MessageTrackingSearchResult></t:MessageTrackingSearchResults>"#;

        let expected = ArrayOfFindMessageTrackingSearchResults {
            results: vec![FindMessageTrackingSearchResult {
                subject: "Quarterly numbers".into(),
                sender: mailbox("sam@example.com"),
                purported_sender: None,
                recipients: ArrayOfRecipients(vec![
                    mailbox("kim@example.com"),
                    mailbox("lee@example.com"),
                ]),
                submitted_time: datetime!(2024-04-02 10:15 UTC).into(),
                message_tracking_report_id: "Message-Id=abc".into(),
                previous_hop_server: None,
                first_hop_server: None,
                properties: Some(ArrayOfTrackingProperties {
                    properties: vec![TrackingProperty {
                        name: "Arbitration".into(),
                        value: Some("false".into()),
                    }],
                }),
            }],
        };

        assert_eq!(
            expected.results[0]
                .properties
                .as_ref()
                .and_then(|properties| properties.get("Arbitration")),
            Some("false")
        );

        assert_deserialized_content(xml, expected);
    }

    #[test]
    fn report_with_recipient_events() {
        let report = MessageTrackingReport {
            subject: Some("Quarterly numbers".into()),
            recipient_tracking_events: Some(ArrayOfRecipientTrackingEvents {
                recipient_tracking_event: vec![RecipientTrackingEvent {
                    date: datetime!(2024-04-02 10:15:02 UTC).into(),
                    recipient: mailbox("kim@example.com"),
                    delivery_status: "Delivered".into(),
                    event_description: "Deliver".into(),
                    server: Some("mx1.example.com".into()),
                    internal_id: Some(42),
                    ..Default::default()
                }],
            }),
            ..Default::default()
        };

        let expected = r#"<MessageTrackingReport><Subject>Quarterly numbers</Subject><RecipientTrackingEvents><RecipientTrackingEvent><Date>2024-04-02T10:15:02Z</Date><Recipient><EmailAddress>kim@example.com</EmailAddress></Recipient><DeliveryStatus>Delivered</DeliveryStatus><EventDescription>Deliver</EventDescription><Server>mx1.example.com</Server><InternalId>42</InternalId></RecipientTrackingEvent></RecipientTrackingEvents></MessageTrackingReport>"#;

        assert_round_trip(report, "MessageTrackingReport", expected);
    }
}
