/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};

use crate::{Duration, EmailAddress, ListOf, ReplyBody};

/// Information about a recipient which a client may want to surface before
/// sending a message.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/mailtips>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct MailTips {
    pub recipient_address: EmailAddress,

    /// The tips the server has not been able to compute yet.
    pub pending_mail_tips: MailTipTypes,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_of_office: Option<OutOfOfficeMailTip>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mailbox_full: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_mail_tip: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_member_count: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_member_count: Option<i32>,

    /// In bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_message_size: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_restricted: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_moderated: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalid_recipient: Option<bool>,
}

/// The automatic reply of a recipient who is away.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/outofoffice-mailtips>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct OutOfOfficeMailTip {
    pub reply_body: ReplyBody,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<Duration>,
}

/// The limits the server applies to mail tips requests.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/mailtipsconfiguration>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct MailTipsServiceConfiguration {
    pub mail_tips_enabled: bool,

    pub max_recipients_per_get_mail_tips_request: i32,

    pub max_message_size: i32,

    /// The number of recipients above which a message is considered to go to
    /// a large audience.
    pub large_audience_threshold: i32,

    pub show_external_recipient_count: bool,

    /// The domains considered internal to the organization.
    pub internal_domains: SmtpDomainList,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_tips_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub large_audience_cap: Option<i32>,
}

/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/internaldomains>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct SmtpDomainList {
    #[serde(default)]
    pub domain: Vec<SmtpDomain>,
}

/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/domain>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct SmtpDomain {
    #[serde(rename = "@Name")]
    pub name: String,

    #[serde(rename = "@IncludeSubdomains", skip_serializing_if = "Option::is_none")]
    pub include_subdomains: Option<bool>,
}

enumeration! {
    /// A kind of mail tip.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/mailtipsrequested>
    pub enum MailTipType {
        All = "All",
        OutOfOfficeMessage = "OutOfOfficeMessage",
        MailboxFullStatus = "MailboxFullStatus",
        CustomMailTip = "CustomMailTip",
        ExternalMemberCount = "ExternalMemberCount",
        TotalMemberCount = "TotalMemberCount",
        MaxMessageSize = "MaxMessageSize",
        DeliveryRestriction = "DeliveryRestriction",
        ModerationStatus = "ModerationStatus",
        InvalidRecipient = "InvalidRecipient",
        Scope = "Scope",
    }
}

/// A set of mail tip kinds, written as a whitespace-separated list.
pub type MailTipTypes = ListOf<MailTipType>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        test_utils::{assert_deserialized_content, assert_round_trip},
        Enumeration, Error,
    };

    #[test]
    fn recipient_out_of_office() {
        let xml = r#"<t:MailTips><t:RecipientAddress><t:Name>Alex</t:Name><t:EmailAddress>alex@example.com</t:EmailAddress><t:RoutingType>SMTP</t:RoutingType></t:RecipientAddress><t:PendingMailTips>MaxMessageSize ModerationStatus</t:PendingMailTips><t:OutOfOffice><t:ReplyBody><t:Message>On leave</t:Message></t:ReplyBody></t:OutOfOffice><t:MailboxFull>false</t:MailboxFull></t:MailTips>"#;

        let expected = MailTips {
            recipient_address: EmailAddress {
                name: Some("Alex".into()),
                email_address: Some("alex@example.com".into()),
                routing_type: Some("SMTP".into()),
                ..Default::default()
            },
            pending_mail_tips: vec![MailTipType::MaxMessageSize, MailTipType::ModerationStatus]
                .into(),
            out_of_office: Some(OutOfOfficeMailTip {
                reply_body: ReplyBody {
                    lang: None,
                    message: Some("On leave".into()),
                },
                duration: None,
            }),
            mailbox_full: Some(false),
            ..Default::default()
        };

        assert_deserialized_content(xml, expected);
    }

    #[test]
    fn pending_tips_reject_unknown_kinds() {
        assert_eq!(
            MailTipTypes::parse("All Scope").unwrap().to_value(),
            "All Scope"
        );

        match MailTipTypes::parse("All Weather") {
            Err(Error::UnrecognizedEnumerator { type_name, value }) => {
                assert_eq!(type_name, MailTipType::TYPE_NAME);
                assert_eq!(value, "Weather");
            }
            other => panic!("expected an unrecognized enumerator, got {other:?}"),
        }
    }

    #[test]
    fn service_configuration() {
        let config = MailTipsServiceConfiguration {
            mail_tips_enabled: true,
            max_recipients_per_get_mail_tips_request: 50,
            max_message_size: 10485760,
            large_audience_threshold: 25,
            show_external_recipient_count: false,
            internal_domains: SmtpDomainList {
                domain: vec![SmtpDomain {
                    name: "example.com".into(),
                    include_subdomains: Some(true),
                }],
            },
            policy_tips_enabled: None,
            large_audience_cap: None,
        };

        let expected = r#"<MailTipsConfiguration><MailTipsEnabled>true</MailTipsEnabled><MaxRecipientsPerGetMailTipsRequest>50</MaxRecipientsPerGetMailTipsRequest><MaxMessageSize>10485760</MaxMessageSize><LargeAudienceThreshold>25</LargeAudienceThreshold><ShowExternalRecipientCount>false</ShowExternalRecipientCount><InternalDomains><Domain Name="example.com" IncludeSubdomains="true"/></InternalDomains></MailTipsConfiguration>"#;

        assert_round_trip(config, "MailTipsConfiguration", expected);
    }
}
