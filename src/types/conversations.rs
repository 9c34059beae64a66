/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};

use crate::{
    ArrayOfStrings, ConversationId, DateTime, DisposalType, Flag, FlagStatus, Importance,
    NonEmptyArrayOfAllItems, NonEmptyArrayOfBaseItemIds, TargetFolderId,
};

/// A summary of a conversation.
///
/// Most properties come in pairs: the plain one describes the conversation
/// within the folder it was requested from, and the `Global` one describes it
/// across the whole mailbox.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/conversation-ex15websvcsotherref>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ConversationType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<ConversationId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_topic: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_recipients: Option<ArrayOfStrings>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_unique_recipients: Option<ArrayOfStrings>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_unread_senders: Option<ArrayOfStrings>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_unique_unread_senders: Option<ArrayOfStrings>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_senders: Option<ArrayOfStrings>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_unique_senders: Option<ArrayOfStrings>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_delivery_time: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_last_delivery_time: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<ArrayOfStrings>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_categories: Option<ArrayOfStrings>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag_status: Option<FlagStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_flag_status: Option<FlagStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_attachments: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_has_attachments: Option<bool>,

    /// Whether any message is protected by Information Rights Management.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_irm: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_has_irm: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_count: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_message_count: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unread_count: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_unread_count: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_size: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_classes: Option<ArrayOfStrings>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_item_classes: Option<ArrayOfStrings>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub importance: Option<Importance>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_importance: Option<Importance>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_ids: Option<NonEmptyArrayOfBaseItemIds>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_item_ids: Option<NonEmptyArrayOfBaseItemIds>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_time: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_clutter: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_delivery_or_renew_time: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_last_delivery_or_renew_time: Option<DateTime>,
}

/// An action to apply to every item in a conversation.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/conversationaction>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ConversationAction {
    pub action: ConversationActionType,

    pub conversation_id: ConversationId,

    /// The folder containing the conversation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_folder_id: Option<TargetFolderId>,

    /// Only items delivered before this time are affected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_last_sync_time: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<ArrayOfStrings>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_always_delete: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_right_away: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_folder_id: Option<TargetFolderId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_type: Option<DisposalType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_read: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention_policy_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention_policy_tag_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag: Option<Flag>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub suppress_read_receipts: Option<bool>,
}

/// A single message in a conversation, with its position in the reply
/// tree.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/conversationnode>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ConversationNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internet_message_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_internet_message_id: Option<String>,

    /// The items making up the node, in document order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<NonEmptyArrayOfAllItems>,
}

/// The items of a conversation.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/conversation-conversationresponsetype>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ConversationResponse {
    pub conversation_id: ConversationId,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_state: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_nodes: Option<ArrayOfConversationNodes>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ArrayOfConversationNodes {
    #[serde(default)]
    pub conversation_node: Vec<ConversationNode>,
}

enumeration! {
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/action>
    pub enum ConversationActionType {
        AlwaysCategorize = "AlwaysCategorize",
        AlwaysDelete = "AlwaysDelete",
        AlwaysMove = "AlwaysMove",
        Delete = "Delete",
        Move = "Move",
        Copy = "Copy",
        SetReadState = "SetReadState",
        SetRetentionPolicy = "SetRetentionPolicy",
        Flag = "Flag",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        test_utils::{assert_deserialized_content, assert_round_trip},
        AllItem, BaseFolderId, BaseItemId, DistinguishedFolderId, DistinguishedFolderIdName, ItemId,
        MessageType,
    };

    #[test]
    fn local_and_global_counts() {
        let conversation = ConversationType {
            conversation_id: Some(ConversationId {
                id: "AAQkAD".into(),
                change_key: None,
            }),
            conversation_topic: Some("Budget".into()),
            unique_senders: Some(["Ivan"].into_iter().collect()),
            global_unique_senders: Some(["Ivan", "Judy"].into_iter().collect()),
            message_count: Some(1),
            global_message_count: Some(3),
            global_item_ids: Some(NonEmptyArrayOfBaseItemIds {
                inner: vec![BaseItemId::ItemId(ItemId {
                    id: "AAMkM1".into(),
                    change_key: None,
                })],
            }),
            ..Default::default()
        };

        let expected = r#"<Conversation><ConversationId Id="AAQkAD"/><ConversationTopic>Budget</ConversationTopic><UniqueSenders><String>Ivan</String></UniqueSenders><GlobalUniqueSenders><String>Ivan</String><String>Judy</String></GlobalUniqueSenders><MessageCount>1</MessageCount><GlobalMessageCount>3</GlobalMessageCount><GlobalItemIds><ItemId Id="AAMkM1"/></GlobalItemIds></Conversation>"#;

        assert_round_trip(conversation, "Conversation", expected);
    }

    #[test]
    fn conversation_nodes_keep_item_order() {
        let xml = r#"<t:Conversation><t:ConversationId Id="AAQkAD"/><t:SyncState>H4sI</t:SyncState><t:ConversationNodes><t:ConversationNode><t:InternetMessageId>&lt;a@example.org&gt;</t:InternetMessageId><t:Items><t:Message><t:Subject>Budget</t:Subject></t:Message><t:Message><t:Subject>RE: Budget</t:Subject></t:Message></t:Items></t:ConversationNode></t:ConversationNodes></t:Conversation>"#;

        let message = |subject: &str| {
            AllItem::Message(MessageType {
                subject: Some(subject.into()),
                ..Default::default()
            })
        };

        let expected = ConversationResponse {
            conversation_id: ConversationId {
                id: "AAQkAD".into(),
                change_key: None,
            },
            sync_state: Some("H4sI".into()),
            conversation_nodes: Some(ArrayOfConversationNodes {
                conversation_node: vec![ConversationNode {
                    internet_message_id: Some("<a@example.org>".into()),
                    parent_internet_message_id: None,
                    items: Some(NonEmptyArrayOfAllItems {
                        inner: vec![message("Budget"), message("RE: Budget")],
                    }),
                }],
            }),
        };

        assert_deserialized_content(xml, expected);
    }

    #[test]
    fn move_action() {
        let action = ConversationAction {
            action: ConversationActionType::Move,
            conversation_id: ConversationId {
                id: "AAQkAD".into(),
                change_key: None,
            },
            destination_folder_id: Some(TargetFolderId {
                folder_id: BaseFolderId::DistinguishedFolderId(DistinguishedFolderId {
                    id: DistinguishedFolderIdName::ArchiveInbox,
                    change_key: None,
                    mailbox: None,
                }),
            }),
            ..Default::default()
        };

        let expected = r#"<ConversationAction><Action>Move</Action><ConversationId Id="AAQkAD"/><DestinationFolderId><DistinguishedFolderId Id="archiveinbox"/></DestinationFolderId></ConversationAction>"#;

        assert_round_trip(action, "ConversationAction", expected);
    }
}
