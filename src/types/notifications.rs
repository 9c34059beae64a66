/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};

use crate::{DateTime, Error, FolderId, ItemId, NonEmptyArrayOfBaseFolderIds};

/// A batch of events for a subscription.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/notification-ex15websvcsotherref>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Notification {
    pub subscription_id: String,

    /// The watermark of the last event before this batch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_watermark: Option<String>,

    /// Whether further events are waiting on the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub more_events: Option<bool>,

    /// The events in the order they occurred.
    #[serde(rename = "$value", default)]
    pub events: Vec<NotificationEvent>,
}

choice_group! {
    /// A single event in a notification.
    pub enum NotificationEvent {
        CopiedEvent(MovedCopiedEvent),
        CreatedEvent(ObjectChangedEvent),
        DeletedEvent(ObjectChangedEvent),
        ModifiedEvent(ModifiedEvent),
        MovedEvent(MovedCopiedEvent),
        NewMailEvent(ObjectChangedEvent),
        StatusEvent(StatusEvent),
        FreeBusyChangedEvent(ObjectChangedEvent),
    }
}

impl Eq for NotificationEvent {}

impl NotificationEvent {
    /// The watermark of the event, which may be used to resume the
    /// subscription after it.
    pub fn watermark(&self) -> Option<&str> {
        match self {
            NotificationEvent::CopiedEvent(event) | NotificationEvent::MovedEvent(event) => {
                event.watermark.as_deref()
            }
            NotificationEvent::CreatedEvent(event)
            | NotificationEvent::DeletedEvent(event)
            | NotificationEvent::NewMailEvent(event)
            | NotificationEvent::FreeBusyChangedEvent(event) => event.watermark.as_deref(),
            NotificationEvent::ModifiedEvent(event) => event.watermark.as_deref(),
            NotificationEvent::StatusEvent(event) => event.watermark.as_deref(),
        }
    }
}

choice_group! {
    /// The entity an event is about.
    pub enum ChangedObjectId {
        FolderId(FolderId),
        ItemId(ItemId),
    }
}

impl Eq for ChangedObjectId {}

choice_group! {
    /// The former identity of a moved or copied entity.
    pub enum OldObjectId {
        OldFolderId(FolderId),
        OldItemId(ItemId),
    }
}

impl Eq for OldObjectId {}

/// An event reporting that an item or folder was created, deleted or
/// received.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/createdevent>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(try_from = "EventWire", into = "EventWire")]
pub struct ObjectChangedEvent {
    pub watermark: Option<String>,
    pub time_stamp: DateTime,
    pub changed: ChangedObjectId,
    pub parent_folder_id: FolderId,
}

/// An event reporting that an item or folder was modified.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/modifiedevent>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(try_from = "EventWire", into = "EventWire")]
pub struct ModifiedEvent {
    pub watermark: Option<String>,
    pub time_stamp: DateTime,
    pub changed: ChangedObjectId,
    pub parent_folder_id: FolderId,

    /// The number of unread items in a modified folder.
    pub unread_count: Option<i32>,
}

/// An event reporting that an item or folder was moved or copied.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/movedevent>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(try_from = "EventWire", into = "EventWire")]
pub struct MovedCopiedEvent {
    pub watermark: Option<String>,
    pub time_stamp: DateTime,
    pub changed: ChangedObjectId,
    pub parent_folder_id: FolderId,
    pub old: OldObjectId,
    pub old_parent_folder_id: FolderId,
}

/// A keep-alive event carrying no changes.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/statusevent>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct StatusEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watermark: Option<String>,
}

/// The wire shape shared by object events, in which the identifier choices
/// sit between named elements.
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
struct EventWire {
    #[serde(skip_serializing_if = "Option::is_none")]
    watermark: Option<String>,

    time_stamp: DateTime,

    #[serde(skip_serializing_if = "Option::is_none")]
    folder_id: Option<FolderId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    item_id: Option<ItemId>,

    parent_folder_id: FolderId,

    #[serde(skip_serializing_if = "Option::is_none")]
    old_folder_id: Option<FolderId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    old_item_id: Option<ItemId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    old_parent_folder_id: Option<FolderId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    unread_count: Option<i32>,
}

impl EventWire {
    fn new(
        watermark: Option<String>,
        time_stamp: DateTime,
        changed: ChangedObjectId,
        parent_folder_id: FolderId,
    ) -> Self {
        let (folder_id, item_id) = match changed {
            ChangedObjectId::FolderId(id) => (Some(id), None),
            ChangedObjectId::ItemId(id) => (None, Some(id)),
        };

        Self {
            watermark,
            time_stamp,
            folder_id,
            item_id,
            parent_folder_id,
            old_folder_id: None,
            old_item_id: None,
            old_parent_folder_id: None,
            unread_count: None,
        }
    }

    fn changed(&mut self, type_name: &'static str) -> Result<ChangedObjectId, Error> {
        match (self.folder_id.take(), self.item_id.take()) {
            (Some(id), None) => Ok(ChangedObjectId::FolderId(id)),
            (None, Some(id)) => Ok(ChangedObjectId::ItemId(id)),
            (None, None) => Err(Error::InvalidChoice {
                type_name,
                reason: "expected one of FolderId or ItemId",
            }),
            (Some(_), Some(_)) => Err(Error::InvalidChoice {
                type_name,
                reason: "found both FolderId and ItemId",
            }),
        }
    }

    /// Fails if the event names where the object was moved or copied from.
    fn reject_old_ids(&self, type_name: &'static str) -> Result<(), Error> {
        if self.old_folder_id.is_some()
            || self.old_item_id.is_some()
            || self.old_parent_folder_id.is_some()
        {
            return Err(Error::InvalidChoice {
                type_name,
                reason: "old identifiers only belong to moved and copied events",
            });
        }

        Ok(())
    }

    fn reject_unread_count(&self, type_name: &'static str) -> Result<(), Error> {
        if self.unread_count.is_some() {
            return Err(Error::InvalidChoice {
                type_name,
                reason: "UnreadCount only belongs to modified events",
            });
        }

        Ok(())
    }
}

impl TryFrom<EventWire> for ObjectChangedEvent {
    type Error = Error;

    fn try_from(mut value: EventWire) -> Result<Self, Self::Error> {
        value.reject_old_ids("ObjectChangedEvent")?;
        value.reject_unread_count("ObjectChangedEvent")?;
        let changed = value.changed("ObjectChangedEvent")?;

        Ok(Self {
            watermark: value.watermark,
            time_stamp: value.time_stamp,
            changed,
            parent_folder_id: value.parent_folder_id,
        })
    }
}

impl From<ObjectChangedEvent> for EventWire {
    fn from(value: ObjectChangedEvent) -> Self {
        EventWire::new(
            value.watermark,
            value.time_stamp,
            value.changed,
            value.parent_folder_id,
        )
    }
}

impl TryFrom<EventWire> for ModifiedEvent {
    type Error = Error;

    fn try_from(mut value: EventWire) -> Result<Self, Self::Error> {
        value.reject_old_ids("ModifiedEvent")?;
        let changed = value.changed("ModifiedEvent")?;

        Ok(Self {
            watermark: value.watermark,
            time_stamp: value.time_stamp,
            changed,
            parent_folder_id: value.parent_folder_id,
            unread_count: value.unread_count,
        })
    }
}

impl From<ModifiedEvent> for EventWire {
    fn from(value: ModifiedEvent) -> Self {
        let mut wire = EventWire::new(
            value.watermark,
            value.time_stamp,
            value.changed,
            value.parent_folder_id,
        );
        wire.unread_count = value.unread_count;

        wire
    }
}

impl TryFrom<EventWire> for MovedCopiedEvent {
    type Error = Error;

    fn try_from(mut value: EventWire) -> Result<Self, Self::Error> {
        value.reject_unread_count("MovedCopiedEvent")?;
        let changed = value.changed("MovedCopiedEvent")?;

        let old = match (value.old_folder_id, value.old_item_id) {
            (Some(id), None) => OldObjectId::OldFolderId(id),
            (None, Some(id)) => OldObjectId::OldItemId(id),
            (None, None) => {
                return Err(Error::InvalidChoice {
                    type_name: "MovedCopiedEvent",
                    reason: "expected one of OldFolderId or OldItemId",
                })
            }
            (Some(_), Some(_)) => {
                return Err(Error::InvalidChoice {
                    type_name: "MovedCopiedEvent",
                    reason: "found both OldFolderId and OldItemId",
                })
            }
        };

        let old_parent_folder_id = value.old_parent_folder_id.ok_or(Error::InvalidChoice {
            type_name: "MovedCopiedEvent",
            reason: "missing OldParentFolderId",
        })?;

        Ok(Self {
            watermark: value.watermark,
            time_stamp: value.time_stamp,
            changed,
            parent_folder_id: value.parent_folder_id,
            old,
            old_parent_folder_id,
        })
    }
}

impl From<MovedCopiedEvent> for EventWire {
    fn from(value: MovedCopiedEvent) -> Self {
        let mut wire = EventWire::new(
            value.watermark,
            value.time_stamp,
            value.changed,
            value.parent_folder_id,
        );

        match value.old {
            OldObjectId::OldFolderId(id) => wire.old_folder_id = Some(id),
            OldObjectId::OldItemId(id) => wire.old_item_id = Some(id),
        }
        wire.old_parent_folder_id = Some(value.old_parent_folder_id);

        wire
    }
}

/// The kinds of event a subscription can ask for.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct NonEmptyArrayOfNotificationEventTypes {
    #[serde(default)]
    pub event_type: Vec<NotificationEventType>,
}

impl FromIterator<NotificationEventType> for NonEmptyArrayOfNotificationEventTypes {
    fn from_iter<I: IntoIterator<Item = NotificationEventType>>(iter: I) -> Self {
        Self {
            event_type: iter.into_iter().collect(),
        }
    }
}

/// A request for a subscription which the client polls for events.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/pullsubscriptionrequest>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct PullSubscriptionRequest {
    #[serde(
        rename = "@SubscribeToAllFolders",
        skip_serializing_if = "Option::is_none"
    )]
    pub subscribe_to_all_folders: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_ids: Option<NonEmptyArrayOfBaseFolderIds>,

    pub event_types: NonEmptyArrayOfNotificationEventTypes,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub watermark: Option<String>,

    /// Minutes after which an unpolled subscription expires.
    pub timeout: i32,
}

/// A request for a subscription whose events the server posts to the
/// client.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/pushsubscriptionrequest>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct PushSubscriptionRequest {
    #[serde(
        rename = "@SubscribeToAllFolders",
        skip_serializing_if = "Option::is_none"
    )]
    pub subscribe_to_all_folders: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_ids: Option<NonEmptyArrayOfBaseFolderIds>,

    pub event_types: NonEmptyArrayOfNotificationEventTypes,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub watermark: Option<String>,

    /// Minutes between status events.
    pub status_frequency: i32,

    /// The endpoint notifications are posted to.
    #[serde(rename = "URL")]
    pub url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub caller_data: Option<String>,
}

/// A request for a subscription streamed over a long-lived connection.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/streamingsubscriptionrequest>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct StreamingSubscriptionRequest {
    #[serde(
        rename = "@SubscribeToAllFolders",
        skip_serializing_if = "Option::is_none"
    )]
    pub subscribe_to_all_folders: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_ids: Option<NonEmptyArrayOfBaseFolderIds>,

    pub event_types: NonEmptyArrayOfNotificationEventTypes,
}

enumeration! {
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/eventtype>
    pub enum NotificationEventType {
        CopiedEvent = "CopiedEvent",
        CreatedEvent = "CreatedEvent",
        DeletedEvent = "DeletedEvent",
        ModifiedEvent = "ModifiedEvent",
        MovedEvent = "MovedEvent",
        NewMailEvent = "NewMailEvent",
        FreeBusyChangedEvent = "FreeBusyChangedEvent",
    }
}
