/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

/// Declares a closed enumeration bound to an XSD simple type.
///
/// Each variant is paired with the literal it takes on the wire, which may
/// contain characters not allowed in Rust identifiers:
///
/// ```ignore
/// enumeration! {
///     pub enum RuleFieldURI {
///         RuleId = "RuleId",
///         ConditionSentToMe = "Condition:SentToMe",
///     }
/// }
/// ```
///
/// The generated enum implements [`Enumeration`], [`std::fmt::Display`],
/// [`std::str::FromStr`], [`strum::IntoEnumIterator`], and serde's
/// `Serialize`/`Deserialize`. Decoding a value which isn't one of the listed
/// literals fails. The first variant is the [`Default`], so that records with
/// a required enumerated field can still be created empty.
///
/// [`Enumeration`]: crate::Enumeration
macro_rules! enumeration {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(#[$first_meta:meta])*
            $first:ident = $first_value:tt,
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:tt,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            Debug,
            PartialEq,
            Eq,
            Hash,
            strum::Display,
            strum::EnumString,
            strum::IntoStaticStr,
            strum::EnumIter,
        )]
        $vis enum $name {
            $(#[$first_meta])*
            #[strum(serialize = $first_value)]
            $first,
            $(
                $(#[$variant_meta])*
                #[strum(serialize = $value)]
                $variant,
            )*
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$first
            }
        }

        impl $crate::Enumeration for $name {
            const TYPE_NAME: &'static str = stringify!($name);

            fn value(&self) -> &'static str {
                self.into()
            }

            fn from_value(value: &str) -> Result<Self, $crate::Error> {
                value.parse().map_err(|_| {
                    log::debug!(
                        "rejecting unknown {} value `{value}`",
                        stringify!($name)
                    );

                    $crate::Error::UnrecognizedEnumerator {
                        type_name: stringify!($name),
                        value: value.to_owned(),
                    }
                })
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str($crate::Enumeration::value(self))
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let value = String::deserialize(deserializer)?;
                <Self as $crate::Enumeration>::from_value(&value).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// Declares a schema choice group as an enum with one variant per
/// substitutable element.
///
/// Variants must be named exactly like the XML element they represent, as the
/// element name is the only thing identifying the concrete type on the wire.
/// The default value is the first alternative, itself empty.
macro_rules! choice_group {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(#[$first_meta:meta])*
            $first:ident($first_payload:ty),
            $(
                $(#[$variant_meta:meta])*
                $variant:ident($payload:ty),
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
        $vis enum $name {
            $(#[$first_meta])*
            $first($first_payload),
            $(
                $(#[$variant_meta])*
                $variant($payload),
            )*
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$first(Default::default())
            }
        }

        impl $crate::ChoiceGroup for $name {
            const GROUP_NAME: &'static str = stringify!($name);

            const ELEMENT_NAMES: &'static [&'static str] =
                &[stringify!($first), $(stringify!($variant)),*];

            fn element_name(&self) -> &'static str {
                match self {
                    Self::$first(_) => stringify!($first),
                    $(Self::$variant(_) => stringify!($variant),)*
                }
            }

            fn from_element_name(name: &str) -> Option<Self> {
                match name {
                    stringify!($first) => Some(Self::$first(Default::default())),
                    $(stringify!($variant) => Some(Self::$variant(Default::default())),)*
                    _ => None,
                }
            }
        }
    };
}

/// Declares a record extending `ItemType`.
///
/// The fields shared by every item are inserted ahead of the fields given in
/// the body, matching the order in which the schema extension lays them out,
/// and [`ItemFields`] is implemented for the resulting type.
///
/// [`ItemFields`]: crate::ItemFields
macro_rules! item_record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $($body:tt)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
        #[serde(rename_all = "PascalCase")]
        pub struct $name {
            /// The MIME content of the item.
            #[serde(skip_serializing_if = "Option::is_none")]
            pub mime_content: Option<$crate::MimeContent>,

            /// The item's Exchange identifier.
            ///
            /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/itemid>
            #[serde(skip_serializing_if = "Option::is_none")]
            pub item_id: Option<$crate::ItemId>,

            /// The identifier for the containing folder.
            ///
            /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/parentfolderid>
            #[serde(skip_serializing_if = "Option::is_none")]
            pub parent_folder_id: Option<$crate::FolderId>,

            /// The Exchange class value of the item.
            ///
            /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/itemclass>
            #[serde(skip_serializing_if = "Option::is_none")]
            pub item_class: Option<String>,

            /// The subject of the item.
            ///
            /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/subject>
            #[serde(skip_serializing_if = "Option::is_none")]
            pub subject: Option<String>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub sensitivity: Option<$crate::Sensitivity>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub body: Option<$crate::Body>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub attachments: Option<$crate::Attachments>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub date_time_received: Option<$crate::DateTime>,

            /// The size of the item in bytes.
            #[serde(skip_serializing_if = "Option::is_none")]
            pub size: Option<i32>,

            /// A list of categories describing an item.
            ///
            /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/categories-ex15websvcsotherref>
            #[serde(skip_serializing_if = "Option::is_none")]
            pub categories: Option<$crate::ArrayOfStrings>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub importance: Option<$crate::Importance>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub in_reply_to: Option<String>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub is_submitted: Option<bool>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub is_draft: Option<bool>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub is_from_me: Option<bool>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub is_resend: Option<bool>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub is_unmodified: Option<bool>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub internet_message_headers: Option<$crate::InternetMessageHeaders>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub date_time_sent: Option<$crate::DateTime>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub date_time_created: Option<$crate::DateTime>,

            /// The responses which may be sent for this item, such as
            /// replying to or accepting it.
            ///
            /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/responseobjects>
            #[serde(skip_serializing_if = "Option::is_none")]
            pub response_objects: Option<$crate::ResponseObjects>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub reminder_due_by: Option<$crate::DateTime>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub reminder_is_set: Option<bool>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub reminder_next_time: Option<$crate::DateTime>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub reminder_minutes_before_start: Option<i32>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub display_cc: Option<String>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub display_to: Option<String>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub has_attachments: Option<bool>,

            /// Extended MAPI properties of the item.
            #[serde(default)]
            pub extended_property: Vec<$crate::ExtendedProperty>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub culture: Option<String>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub effective_rights: Option<$crate::EffectiveRights>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub last_modified_name: Option<String>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub last_modified_time: Option<$crate::DateTime>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub is_associated: Option<bool>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub web_client_read_form_query_string: Option<String>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub web_client_edit_form_query_string: Option<String>,

            /// The identifier of the conversation this item belongs to.
            #[serde(skip_serializing_if = "Option::is_none")]
            pub conversation_id: Option<$crate::ConversationId>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub unique_body: Option<$crate::Body>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub flag: Option<$crate::Flag>,

            /// Base64-encoded store entry identifier.
            #[serde(skip_serializing_if = "Option::is_none")]
            pub store_entry_id: Option<String>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub instance_key: Option<String>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub normalized_body: Option<$crate::Body>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub policy_tag: Option<$crate::RetentionTag>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub archive_tag: Option<$crate::RetentionTag>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub retention_date: Option<$crate::DateTime>,

            /// A plain-text excerpt of the item's body.
            #[serde(skip_serializing_if = "Option::is_none")]
            pub preview: Option<String>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub is_clutter: Option<bool>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub block_status: Option<bool>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub has_blocked_images: Option<bool>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub text_body: Option<$crate::Body>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub icon_index: Option<$crate::IconIndex>,

            $($body)*
        }

        impl $crate::ItemFields for $name {
            fn item_id(&self) -> Option<&$crate::ItemId> {
                self.item_id.as_ref()
            }

            fn parent_folder_id(&self) -> Option<&$crate::FolderId> {
                self.parent_folder_id.as_ref()
            }

            fn item_class(&self) -> Option<&str> {
                self.item_class.as_deref()
            }

            fn subject(&self) -> Option<&str> {
                self.subject.as_deref()
            }

            fn sensitivity(&self) -> Option<$crate::Sensitivity> {
                self.sensitivity
            }

            fn body(&self) -> Option<&$crate::Body> {
                self.body.as_ref()
            }

            fn attachments(&self) -> Option<&$crate::Attachments> {
                self.attachments.as_ref()
            }

            fn date_time_received(&self) -> Option<&$crate::DateTime> {
                self.date_time_received.as_ref()
            }

            fn date_time_sent(&self) -> Option<&$crate::DateTime> {
                self.date_time_sent.as_ref()
            }

            fn date_time_created(&self) -> Option<&$crate::DateTime> {
                self.date_time_created.as_ref()
            }

            fn size(&self) -> Option<i32> {
                self.size
            }

            fn categories(&self) -> Option<&$crate::ArrayOfStrings> {
                self.categories.as_ref()
            }

            fn importance(&self) -> Option<$crate::Importance> {
                self.importance
            }

            fn has_attachments(&self) -> Option<bool> {
                self.has_attachments
            }

            fn extended_properties(&self) -> &[$crate::ExtendedProperty] {
                &self.extended_property
            }

            fn last_modified_time(&self) -> Option<&$crate::DateTime> {
                self.last_modified_time.as_ref()
            }

            fn conversation_id(&self) -> Option<&$crate::ConversationId> {
                self.conversation_id.as_ref()
            }

            fn flag(&self) -> Option<&$crate::Flag> {
                self.flag.as_ref()
            }
        }
    };
}

/// Declares a record extending `MessageType`, itself an extension of
/// `ItemType`.
macro_rules! message_record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $($body:tt)*
        }
    ) => {
        item_record! {
            $(#[$meta])*
            pub struct $name {
                /// The mailbox the message was sent from, if different from
                /// its author.
                ///
                /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/sender>
                #[serde(skip_serializing_if = "Option::is_none")]
                pub sender: Option<$crate::SingleRecipient>,

                #[serde(skip_serializing_if = "Option::is_none")]
                pub to_recipients: Option<$crate::ArrayOfRecipients>,

                #[serde(skip_serializing_if = "Option::is_none")]
                pub cc_recipients: Option<$crate::ArrayOfRecipients>,

                #[serde(skip_serializing_if = "Option::is_none")]
                pub bcc_recipients: Option<$crate::ArrayOfRecipients>,

                #[serde(skip_serializing_if = "Option::is_none")]
                pub is_read_receipt_requested: Option<bool>,

                #[serde(skip_serializing_if = "Option::is_none")]
                pub is_delivery_receipt_requested: Option<bool>,

                /// Base64-encoded conversation index.
                #[serde(skip_serializing_if = "Option::is_none")]
                pub conversation_index: Option<String>,

                #[serde(skip_serializing_if = "Option::is_none")]
                pub conversation_topic: Option<String>,

                #[serde(skip_serializing_if = "Option::is_none")]
                pub from: Option<$crate::SingleRecipient>,

                #[serde(skip_serializing_if = "Option::is_none")]
                pub internet_message_id: Option<String>,

                #[serde(skip_serializing_if = "Option::is_none")]
                pub is_read: Option<bool>,

                #[serde(skip_serializing_if = "Option::is_none")]
                pub is_response_requested: Option<bool>,

                #[serde(skip_serializing_if = "Option::is_none")]
                pub references: Option<String>,

                #[serde(skip_serializing_if = "Option::is_none")]
                pub reply_to: Option<$crate::ArrayOfRecipients>,

                #[serde(skip_serializing_if = "Option::is_none")]
                pub received_by: Option<$crate::SingleRecipient>,

                #[serde(skip_serializing_if = "Option::is_none")]
                pub received_representing: Option<$crate::SingleRecipient>,

                $($body)*
            }
        }
    };
}

/// Declares a record extending `MeetingMessageType`.
macro_rules! meeting_message_record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $($body:tt)*
        }
    ) => {
        message_record! {
            $(#[$meta])*
            pub struct $name {
                /// The calendar item this message relates to.
                #[serde(skip_serializing_if = "Option::is_none")]
                pub associated_calendar_item_id: Option<$crate::ItemId>,

                #[serde(skip_serializing_if = "Option::is_none")]
                pub is_delegated: Option<bool>,

                #[serde(skip_serializing_if = "Option::is_none")]
                pub is_out_of_date: Option<bool>,

                #[serde(skip_serializing_if = "Option::is_none")]
                pub has_been_processed: Option<bool>,

                #[serde(skip_serializing_if = "Option::is_none")]
                pub response_type: Option<$crate::ResponseTypeType>,

                /// The iCalendar UID shared by all messages about the same
                /// meeting.
                #[serde(rename = "UID", skip_serializing_if = "Option::is_none")]
                pub uid: Option<String>,

                #[serde(skip_serializing_if = "Option::is_none")]
                pub recurrence_id: Option<$crate::DateTime>,

                #[serde(skip_serializing_if = "Option::is_none")]
                pub date_time_stamp: Option<$crate::DateTime>,

                #[serde(skip_serializing_if = "Option::is_none")]
                pub is_organizer: Option<bool>,

                $($body)*
            }
        }
    };
}

/// Declares a response object, i.e. a `MessageType` extension carrying a
/// reference to the item being responded to.
macro_rules! response_object_record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $($body:tt)*
        }
    ) => {
        message_record! {
            $(#[$meta])*
            pub struct $name {
                /// The name of the response object, as advertised by the
                /// server in an item's `ResponseObjects`.
                #[serde(rename = "@ObjectName", skip_serializing_if = "Option::is_none")]
                pub object_name: Option<String>,

                #[serde(skip_serializing_if = "Option::is_none")]
                pub reference_item_id: Option<$crate::ItemId>,

                $($body)*
            }
        }
    };
}

/// Declares a record extending `BaseFolderType` and implements
/// [`FolderFields`] for it.
///
/// [`FolderFields`]: crate::FolderFields
macro_rules! folder_record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $($body:tt)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
        #[serde(rename_all = "PascalCase")]
        pub struct $name {
            #[serde(skip_serializing_if = "Option::is_none")]
            pub folder_id: Option<$crate::FolderId>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub parent_folder_id: Option<$crate::FolderId>,

            /// The Exchange class value of the folder, e.g. `IPF.Note`.
            #[serde(skip_serializing_if = "Option::is_none")]
            pub folder_class: Option<String>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub display_name: Option<String>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub total_count: Option<i32>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub child_folder_count: Option<i32>,

            #[serde(default)]
            pub extended_property: Vec<$crate::ExtendedProperty>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub managed_folder_information: Option<$crate::ManagedFolderInformation>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub effective_rights: Option<$crate::EffectiveRights>,

            /// The well-known name of the folder, if it has one.
            #[serde(skip_serializing_if = "Option::is_none")]
            pub distinguished_folder_id: Option<$crate::DistinguishedFolderIdName>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub policy_tag: Option<$crate::RetentionTag>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub archive_tag: Option<$crate::RetentionTag>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub replica_list: Option<$crate::ArrayOfStrings>,

            $($body)*
        }

        impl $crate::FolderFields for $name {
            fn folder_id(&self) -> Option<&$crate::FolderId> {
                self.folder_id.as_ref()
            }

            fn parent_folder_id(&self) -> Option<&$crate::FolderId> {
                self.parent_folder_id.as_ref()
            }

            fn folder_class(&self) -> Option<&str> {
                self.folder_class.as_deref()
            }

            fn display_name(&self) -> Option<&str> {
                self.display_name.as_deref()
            }

            fn total_count(&self) -> Option<i32> {
                self.total_count
            }

            fn child_folder_count(&self) -> Option<i32> {
                self.child_folder_count
            }

            fn extended_properties(&self) -> &[$crate::ExtendedProperty] {
                &self.extended_property
            }

            fn effective_rights(&self) -> Option<&$crate::EffectiveRights> {
                self.effective_rights.as_ref()
            }

            fn distinguished_folder_id(&self) -> Option<$crate::DistinguishedFolderIdName> {
                self.distinguished_folder_id
            }
        }
    };
}

/// Declares a record extending `BasePermissionType` and implements
/// [`BasePermissionFields`] for it.
///
/// [`BasePermissionFields`]: crate::BasePermissionFields
macro_rules! permission_record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $($body:tt)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
        #[serde(rename_all = "PascalCase")]
        pub struct $name {
            /// The user the permission is granted to.
            pub user_id: $crate::UserId,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub can_create_items: Option<bool>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub can_create_sub_folders: Option<bool>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub is_folder_owner: Option<bool>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub is_folder_visible: Option<bool>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub is_folder_contact: Option<bool>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub edit_items: Option<$crate::PermissionAction>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub delete_items: Option<$crate::PermissionAction>,

            $($body)*
        }

        impl $crate::BasePermissionFields for $name {
            fn user_id(&self) -> &$crate::UserId {
                &self.user_id
            }

            fn can_create_items(&self) -> Option<bool> {
                self.can_create_items
            }

            fn can_create_sub_folders(&self) -> Option<bool> {
                self.can_create_sub_folders
            }

            fn is_folder_owner(&self) -> Option<bool> {
                self.is_folder_owner
            }

            fn is_folder_visible(&self) -> Option<bool> {
                self.is_folder_visible
            }

            fn is_folder_contact(&self) -> Option<bool> {
                self.is_folder_contact
            }

            fn edit_items(&self) -> Option<$crate::PermissionAction> {
                self.edit_items
            }

            fn delete_items(&self) -> Option<$crate::PermissionAction> {
                self.delete_items
            }
        }
    };
}
