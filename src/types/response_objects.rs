/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};

use crate::{Body, DateTime, ItemId};

response_object_record! {
    /// Accepts a meeting request.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/acceptitem>
    pub struct AcceptItem {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub proposed_start: Option<DateTime>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub proposed_end: Option<DateTime>,
    }
}

response_object_record! {
    /// Tentatively accepts a meeting request.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/tentativelyacceptitem>
    pub struct TentativelyAcceptItem {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub proposed_start: Option<DateTime>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub proposed_end: Option<DateTime>,
    }
}

response_object_record! {
    /// Declines a meeting request.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/declineitem>
    pub struct DeclineItem {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub proposed_start: Option<DateTime>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub proposed_end: Option<DateTime>,
    }
}

response_object_record! {
    /// A reply to the sender of an item.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/replytoitem>
    pub struct ReplyToItem {
        /// Content to prepend to the body of the original item.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub new_body_content: Option<Body>,
    }
}

response_object_record! {
    /// A reply to the sender and all recipients of an item.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/replyalltoitem>
    pub struct ReplyAllToItem {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub new_body_content: Option<Body>,
    }
}

response_object_record! {
    /// Forwards an item to new recipients.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/forwarditem>
    pub struct ForwardItem {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub new_body_content: Option<Body>,
    }
}

response_object_record! {
    /// Cancels a meeting, notifying its attendees.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/cancelcalendaritem>
    pub struct CancelCalendarItem {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub new_body_content: Option<Body>,
    }
}

response_object_record! {
    /// A reply to a post item.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/postreplyitem>
    pub struct PostReplyItem {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub new_body_content: Option<Body>,
    }
}

/// Removes a cancelled meeting from the organizer's or attendee's calendar.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/removeitem>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct RemoveItem {
    #[serde(rename = "@ObjectName", skip_serializing_if = "Option::is_none")]
    pub object_name: Option<String>,

    pub reference_item_id: ItemId,
}

/// Suppresses the read receipt requested by the sender of a message.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/suppressreadreceipt>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct SuppressReadReceipt {
    #[serde(rename = "@ObjectName", skip_serializing_if = "Option::is_none")]
    pub object_name: Option<String>,

    pub reference_item_id: ItemId,
}

/// Accepts an invitation to access another user's folder.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/acceptsharinginvitation>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct AcceptSharingInvitation {
    #[serde(rename = "@ObjectName", skip_serializing_if = "Option::is_none")]
    pub object_name: Option<String>,

    pub reference_item_id: ItemId,
}

choice_group! {
    /// A response which may be sent for an item.
    pub enum ResponseObject {
        AcceptItem(AcceptItem),
        TentativelyAcceptItem(TentativelyAcceptItem),
        DeclineItem(DeclineItem),
        ReplyToItem(ReplyToItem),
        ForwardItem(ForwardItem),
        ReplyAllToItem(ReplyAllToItem),
        CancelCalendarItem(CancelCalendarItem),
        RemoveItem(RemoveItem),
        SuppressReadReceipt(SuppressReadReceipt),
        PostReplyItem(PostReplyItem),
        AcceptSharingInvitation(AcceptSharingInvitation),
    }
}

/// The responses applicable to an item.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/responseobjects>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct ResponseObjects {
    #[serde(rename = "$value", default)]
    pub inner: Vec<ResponseObject>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{test_utils::assert_round_trip, MessageType};

    #[test]
    fn advertised_responses() {
        let message = MessageType {
            subject: Some("Team offsite".into()),
            response_objects: Some(ResponseObjects {
                inner: vec![
                    ResponseObject::ReplyToItem(ReplyToItem::default()),
                    ResponseObject::ForwardItem(ForwardItem::default()),
                    ResponseObject::SuppressReadReceipt(SuppressReadReceipt {
                        object_name: None,
                        reference_item_id: ItemId {
                            id: "AAMkMs".into(),
                            change_key: None,
                        },
                    }),
                ],
            }),
            ..Default::default()
        };

        let expected = r#"<Message><Subject>Team offsite</Subject><ResponseObjects><ReplyToItem/><ForwardItem/><SuppressReadReceipt><ReferenceItemId Id="AAMkMs"/></SuppressReadReceipt></ResponseObjects></Message>"#;

        assert_round_trip(message, "Message", expected);
    }

    #[test]
    fn reply_with_new_body() {
        let reply = ReplyAllToItem {
            object_name: Some("ReplyAllToItem".into()),
            reference_item_id: Some(ItemId {
                id: "AAMkRe".into(),
                change_key: Some("CQAAAB".into()),
            }),
            new_body_content: Some(Body {
                body_type: crate::BodyType::Text,
                is_truncated: None,
                content: Some("Sounds good.".into()),
            }),
            ..Default::default()
        };

        let expected = r#"<ReplyAllToItem ObjectName="ReplyAllToItem"><ReferenceItemId Id="AAMkRe" ChangeKey="CQAAAB"/><NewBodyContent BodyType="Text">Sounds good.</NewBodyContent></ReplyAllToItem>"#;

        assert_round_trip(reply, "ReplyAllToItem", expected);
    }
}
