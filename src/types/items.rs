/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};

use crate::{
    AcceptItem, AcceptSharingInvitation, ArrayOfStrings, Attachments, Body, CalendarItemType,
    CancelCalendarItem, ContactItemType, ConversationId, DateTime, DeclineItem,
    DistributionListType, ExtendedProperty, Flag, FolderId, ForwardItem,
    Importance, ItemId, MeetingCancellationMessageType, MeetingMessageType,
    MeetingRequestMessageType, MeetingResponseMessageType, PostReplyItem, RemoveItem,
    ReplyAllToItem, ReplyToItem, Sensitivity, SingleRecipient, SuppressReadReceipt, TaskType,
    TentativelyAcceptItem,
};

/// Read access to the fields every item carries, regardless of its concrete
/// type.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/item>
pub trait ItemFields {
    fn item_id(&self) -> Option<&ItemId>;
    fn parent_folder_id(&self) -> Option<&FolderId>;
    fn item_class(&self) -> Option<&str>;
    fn subject(&self) -> Option<&str>;
    fn sensitivity(&self) -> Option<Sensitivity>;
    fn body(&self) -> Option<&Body>;
    fn attachments(&self) -> Option<&Attachments>;
    fn date_time_received(&self) -> Option<&DateTime>;
    fn date_time_sent(&self) -> Option<&DateTime>;
    fn date_time_created(&self) -> Option<&DateTime>;
    fn size(&self) -> Option<i32>;
    fn categories(&self) -> Option<&ArrayOfStrings>;
    fn importance(&self) -> Option<Importance>;
    fn has_attachments(&self) -> Option<bool>;
    fn extended_properties(&self) -> &[ExtendedProperty];
    fn last_modified_time(&self) -> Option<&DateTime>;
    fn conversation_id(&self) -> Option<&ConversationId>;
    fn flag(&self) -> Option<&Flag>;
}

item_record! {
    /// A generic Exchange item.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/item>
    pub struct ItemType {}
}

message_record! {
    /// An email message.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/message-ex15websvcsotherref>
    pub struct MessageType {}
}

item_record! {
    /// An item posted to a public or mail folder.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/postitem>
    pub struct PostItemType {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub conversation_index: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub conversation_topic: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub from: Option<SingleRecipient>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub internet_message_id: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub is_read: Option<bool>,

        /// The time at which the item was posted.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub posted_time: Option<DateTime>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub references: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub sender: Option<SingleRecipient>,
    }
}

choice_group! {
    /// An Exchange item of any concrete type.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/items>
    pub enum Item {
        Item(ItemType),
        Message(MessageType),
        CalendarItem(CalendarItemType),
        Contact(ContactItemType),
        DistributionList(DistributionListType),
        MeetingMessage(MeetingMessageType),
        MeetingRequest(MeetingRequestMessageType),
        MeetingResponse(MeetingResponseMessageType),
        MeetingCancellation(MeetingCancellationMessageType),
        Task(TaskType),
        PostItem(PostItemType),
    }
}

impl Item {
    /// Gives access to the fields common to all items.
    pub fn fields(&self) -> &dyn ItemFields {
        match self {
            Item::Item(item) => item,
            Item::Message(message) => message,
            Item::CalendarItem(calendar_item) => calendar_item,
            Item::Contact(contact) => contact,
            Item::DistributionList(list) => list,
            Item::MeetingMessage(message) => message,
            Item::MeetingRequest(request) => request,
            Item::MeetingResponse(response) => response,
            Item::MeetingCancellation(cancellation) => cancellation,
            Item::Task(task) => task,
            Item::PostItem(post) => post,
        }
    }
}

choice_group! {
    /// Any item which may be created or returned, including response
    /// objects.
    pub enum AllItem {
        Item(ItemType),
        Message(MessageType),
        CalendarItem(CalendarItemType),
        Contact(ContactItemType),
        DistributionList(DistributionListType),
        MeetingMessage(MeetingMessageType),
        MeetingRequest(MeetingRequestMessageType),
        MeetingResponse(MeetingResponseMessageType),
        MeetingCancellation(MeetingCancellationMessageType),
        Task(TaskType),
        PostItem(PostItemType),
        ReplyToItem(ReplyToItem),
        ForwardItem(ForwardItem),
        ReplyAllToItem(ReplyAllToItem),
        AcceptItem(AcceptItem),
        TentativelyAcceptItem(TentativelyAcceptItem),
        DeclineItem(DeclineItem),
        CancelCalendarItem(CancelCalendarItem),
        RemoveItem(RemoveItem),
        SuppressReadReceipt(SuppressReadReceipt),
        PostReplyItem(PostReplyItem),
        AcceptSharingInvitation(AcceptSharingInvitation),
    }
}

impl From<Item> for AllItem {
    fn from(value: Item) -> Self {
        match value {
            Item::Item(item) => AllItem::Item(item),
            Item::Message(message) => AllItem::Message(message),
            Item::CalendarItem(calendar_item) => AllItem::CalendarItem(calendar_item),
            Item::Contact(contact) => AllItem::Contact(contact),
            Item::DistributionList(list) => AllItem::DistributionList(list),
            Item::MeetingMessage(message) => AllItem::MeetingMessage(message),
            Item::MeetingRequest(request) => AllItem::MeetingRequest(request),
            Item::MeetingResponse(response) => AllItem::MeetingResponse(response),
            Item::MeetingCancellation(cancellation) => AllItem::MeetingCancellation(cancellation),
            Item::Task(task) => AllItem::Task(task),
            Item::PostItem(post) => AllItem::PostItem(post),
        }
    }
}

/// A list of items, including response objects.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/items>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct NonEmptyArrayOfAllItems {
    #[serde(rename = "$value", default)]
    pub inner: Vec<AllItem>,
}

/// A list of items as stored in a mailbox.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct ArrayOfRealItems {
    #[serde(rename = "$value", default)]
    pub items: Vec<Item>,
}

impl FromIterator<Item> for ArrayOfRealItems {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        test_utils::{assert_deserialized_content, assert_round_trip, assert_serialized_content},
        ArrayOfRecipients, EmailAddress,
    };

    #[test]
    fn serialize_message() {
        let message = MessageType {
            subject: Some("Quarterly report".into()),
            importance: Some(Importance::Low),
            to_recipients: Some(ArrayOfRecipients(vec![EmailAddress {
                name: Some("Alice".into()),
                email_address: Some("alice@example.org".into()),
                ..Default::default()
            }])),
            is_read: Some(false),
            ..Default::default()
        };

        let expected = r#"<Message><Subject>Quarterly report</Subject><Importance>Low</Importance><ToRecipients><Mailbox><Name>Alice</Name><EmailAddress>alice@example.org</EmailAddress></Mailbox></ToRecipients><IsRead>false</IsRead></Message>"#;

        assert_round_trip(message, "Message", expected);
    }

    #[test]
    fn item_list_keeps_document_order_and_types() {
        let xml = r#"<t:Items xmlns:t="http://schemas.microsoft.com/exchange/services/2006/types"><t:Message><t:Subject>First</t:Subject></t:Message><t:Task><t:Subject>Second</t:Subject></t:Task><t:Message><t:Subject>Third</t:Subject></t:Message></t:Items>"#;

        let expected = ArrayOfRealItems {
            items: vec![
                Item::Message(MessageType {
                    subject: Some("First".into()),
                    ..Default::default()
                }),
                Item::Task(TaskType {
                    subject: Some("Second".into()),
                    ..Default::default()
                }),
                Item::Message(MessageType {
                    subject: Some("Third".into()),
                    ..Default::default()
                }),
            ],
        };

        assert_deserialized_content(xml, expected);
    }

    #[test]
    fn base_fields_through_trait() {
        let items: ArrayOfRealItems = [
            Item::Contact(ContactItemType {
                item_id: Some(ItemId {
                    id: "AAMkCo".into(),
                    change_key: None,
                }),
                subject: Some("Bob".into()),
                ..Default::default()
            }),
            Item::PostItem(PostItemType {
                subject: Some("Announcement".into()),
                size: Some(2048),
                ..Default::default()
            }),
        ]
        .into_iter()
        .collect();

        let subjects: Vec<_> = items
            .items
            .iter()
            .map(|item| item.fields().subject())
            .collect();
        assert_eq!(subjects, vec![Some("Bob"), Some("Announcement")]);

        assert_eq!(items.items[0].fields().item_id().map(|id| id.id.as_str()), Some("AAMkCo"));
        assert_eq!(items.items[1].fields().size(), Some(2048));
        assert!(items.items[1].fields().extended_properties().is_empty());
    }

    #[test]
    fn response_objects_mix_with_items() {
        let all = NonEmptyArrayOfAllItems {
            inner: vec![
                AllItem::from(Item::Message(MessageType {
                    subject: Some("Hi".into()),
                    ..Default::default()
                })),
                AllItem::ReplyToItem(ReplyToItem {
                    reference_item_id: Some(ItemId {
                        id: "AAMkRe".into(),
                        change_key: Some("CQAAAB".into()),
                    }),
                    ..Default::default()
                }),
            ],
        };

        assert_serialized_content(
            &all,
            "Items",
            r#"<Items><Message><Subject>Hi</Subject></Message><ReplyToItem><ReferenceItemId Id="AAMkRe" ChangeKey="CQAAAB"/></ReplyToItem></Items>"#,
        );
    }
}
