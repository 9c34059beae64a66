/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The unique identifier of an item.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/itemid>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub struct ItemId {
    #[serde(rename = "@Id")]
    pub id: String,

    #[serde(rename = "@ChangeKey", skip_serializing_if = "Option::is_none")]
    pub change_key: Option<String>,
}

/// The unique identifier of a folder.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/folderid>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub struct FolderId {
    #[serde(rename = "@Id")]
    pub id: String,

    #[serde(rename = "@ChangeKey", skip_serializing_if = "Option::is_none")]
    pub change_key: Option<String>,
}

/// An identifier for referencing a folder by name, e.g. "inbox" or
/// "junkemail".
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/distinguishedfolderid>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct DistinguishedFolderId {
    #[serde(rename = "@Id")]
    pub id: DistinguishedFolderIdName,

    #[serde(rename = "@ChangeKey", skip_serializing_if = "Option::is_none")]
    pub change_key: Option<String>,

    /// The mailbox holding the folder, when accessing a mailbox other than
    /// the authenticated user's.
    #[serde(rename = "Mailbox", skip_serializing_if = "Option::is_none")]
    pub mailbox: Option<EmailAddress>,
}

/// An identifier for a single occurrence of a recurring calendar item or
/// task.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/occurrenceitemid>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct OccurrenceItemId {
    #[serde(rename = "@RecurringMasterId")]
    pub recurring_master_id: String,

    #[serde(rename = "@ChangeKey", skip_serializing_if = "Option::is_none")]
    pub change_key: Option<String>,

    /// The one-based index of the occurrence within the series.
    #[serde(rename = "@InstanceIndex")]
    pub instance_index: i32,
}

/// An identifier for the recurring master of a series, given the identifier
/// of one of its occurrences.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/recurringmasteritemid>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct RecurringMasterItemId {
    #[serde(rename = "@OccurrenceId")]
    pub occurrence_id: String,

    #[serde(rename = "@ChangeKey", skip_serializing_if = "Option::is_none")]
    pub change_key: Option<String>,
}

/// An identifier for an attachment.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/attachmentid>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct AttachmentId {
    /// A unique identifier for the attachment.
    #[serde(rename = "@Id")]
    pub id: String,

    /// The unique identifier of the item to which it is attached.
    #[serde(rename = "@RootItemId", skip_serializing_if = "Option::is_none")]
    pub root_item_id: Option<String>,

    /// The change key of the item to which it is attached.
    #[serde(rename = "@RootItemChangeKey", skip_serializing_if = "Option::is_none")]
    pub root_item_change_key: Option<String>,
}

/// The identifier of a conversation.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/conversationid>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub struct ConversationId {
    #[serde(rename = "@Id")]
    pub id: String,

    #[serde(rename = "@ChangeKey", skip_serializing_if = "Option::is_none")]
    pub change_key: Option<String>,
}

choice_group! {
    /// An identifier for an Exchange folder.
    pub enum BaseFolderId {
        /// An identifier for an arbitrary folder.
        FolderId(FolderId),

        /// An identifier for a folder by well-known name.
        DistinguishedFolderId(DistinguishedFolderId),
    }
}

choice_group! {
    /// An identifier for an Exchange item.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/itemids>
    pub enum BaseItemId {
        ItemId(ItemId),
        OccurrenceItemId(OccurrenceItemId),
        RecurringMasterItemId(RecurringMasterItemId),
    }
}

/// A folder which is the target of an operation, e.g. the destination of a
/// move.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/tofolderid>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct TargetFolderId {
    #[serde(rename = "$value")]
    pub folder_id: BaseFolderId,
}

/// A list of folder identifiers.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/folderids>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct NonEmptyArrayOfBaseFolderIds {
    #[serde(rename = "$value", default)]
    pub inner: Vec<BaseFolderId>,
}

/// A list of item identifiers.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct NonEmptyArrayOfBaseItemIds {
    #[serde(rename = "$value", default)]
    pub inner: Vec<BaseItemId>,
}

/// An `xs:dateTime` value.
///
/// Values are written in RFC 3339 form, e.g. `2024-01-26T23:00:00Z`.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime(#[serde(with = "time::serde::rfc3339")] pub time::OffsetDateTime);

impl Default for DateTime {
    fn default() -> Self {
        Self(time::OffsetDateTime::UNIX_EPOCH)
    }
}

impl From<time::OffsetDateTime> for DateTime {
    fn from(value: time::OffsetDateTime) -> Self {
        Self(value)
    }
}

/// The body of an item.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/body>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Body {
    /// The content type of the body.
    #[serde(rename = "@BodyType")]
    pub body_type: BodyType,

    /// Whether the body has been truncated.
    #[serde(rename = "@IsTruncated", skip_serializing_if = "Option::is_none")]
    pub is_truncated: Option<bool>,

    /// The content of the body, absent when the server sends an empty
    /// element.
    #[serde(rename = "$text", default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// The content of an item, represented according to MIME (Multipurpose Internet
/// Mail Extensions).
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/mimecontent>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct MimeContent {
    /// The character set of the MIME content if it contains [RFC 2045]-encoded
    /// text.
    ///
    /// [RFC 2045]: https://datatracker.ietf.org/doc/html/rfc2045
    #[serde(rename = "@CharacterSet", skip_serializing_if = "Option::is_none")]
    pub character_set: Option<String>,

    /// The base64-encoded item content.
    #[serde(rename = "$text", default)]
    pub content: String,
}

/// A list of strings, each wrapped in a `String` element.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/string>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ArrayOfStrings {
    #[serde(rename = "String", default)]
    pub strings: Vec<String>,
}

impl Deref for ArrayOfStrings {
    type Target = Vec<String>;

    fn deref(&self) -> &Self::Target {
        &self.strings
    }
}

impl DerefMut for ArrayOfStrings {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.strings
    }
}

impl<S: Into<String>> FromIterator<S> for ArrayOfStrings {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            strings: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// A reference to a user or address which can send or receive mail.
///
/// This is the type of every `Mailbox` element, as well as a handful of
/// other address-bearing elements.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/mailbox>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct EmailAddress {
    /// The name of this mailbox's user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The email address for this mailbox. This can be [`None`] in some cases,
    /// e.g. if it designates an automated system account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,

    /// The protocol used in routing to this mailbox.
    ///
    /// Although the documentation says that `SMTP` and `EX` are the only
    /// possible values, `SYSTEM` also occurs in the wild, so this is a
    /// free-form string.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/routingtype-emailaddress>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_type: Option<String>,

    /// The type of sender/recipient represented by this mailbox.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mailbox_type: Option<MailboxType>,

    /// An identifier for a contact or list of contacts corresponding to this
    /// mailbox.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<ItemId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_display_name: Option<String>,
}

/// A single mailbox.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct SingleRecipient {
    pub mailbox: EmailAddress,
}

/// A list of mailboxes, each wrapped in a `Mailbox` element.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/torecipients>
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArrayOfRecipients(pub Vec<EmailAddress>);

impl Deref for ArrayOfRecipients {
    type Target = Vec<EmailAddress>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for ArrayOfRecipients {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// The wire shape of [`ArrayOfRecipients`].
///
/// `quick-xml`'s `serde` implementation requires the presence of an
/// intermediate type when dealing with lists of named elements.
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
struct MailboxSequence<T> {
    #[serde(default = "Vec::new")]
    mailbox: Vec<T>,
}

impl Serialize for ArrayOfRecipients {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        MailboxSequence {
            mailbox: self.0.iter().collect(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ArrayOfRecipients {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let seq = MailboxSequence::<EmailAddress>::deserialize(deserializer)?;

        Ok(Self(seq.mailbox))
    }
}

/// A list of addresses, each wrapped in an `Address` element.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/fromaddresses>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ArrayOfEmailAddresses {
    #[serde(default)]
    pub address: Vec<EmailAddress>,
}

/// A list of Internet Message Format headers.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct InternetMessageHeaders {
    #[serde(default)]
    pub internet_message_header: Vec<InternetMessageHeader>,
}

/// The headers of an Exchange item's MIME content.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/internetmessageheader>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct InternetMessageHeader {
    /// The name of the header.
    #[serde(rename = "@HeaderName")]
    pub header_name: String,

    /// The value of the header.
    #[serde(rename = "$text", default)]
    pub value: String,
}

/// The identifier for an extended MAPI property.
///
/// The full set of constraints on which attributes may or must be set together
/// are not expressed in the structure of this type. A property is fully
/// specified by a type and either a property set plus a name or ID, or a
/// property tag.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/extendedfielduri>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ExtendedFieldURI {
    /// A well-known identifier for a property set.
    #[serde(
        rename = "@DistinguishedPropertySetId",
        skip_serializing_if = "Option::is_none"
    )]
    pub distinguished_property_set_id: Option<DistinguishedPropertySet>,

    /// A GUID representing a property set.
    #[serde(rename = "@PropertySetId", skip_serializing_if = "Option::is_none")]
    pub property_set_id: Option<String>,

    /// Specifies a property by integer tag, usually in hexadecimal form.
    #[serde(rename = "@PropertyTag", skip_serializing_if = "Option::is_none")]
    pub property_tag: Option<String>,

    /// The name of a property within a specified property set.
    #[serde(rename = "@PropertyName", skip_serializing_if = "Option::is_none")]
    pub property_name: Option<String>,

    /// The dispatch ID of a property within a specified property set.
    #[serde(rename = "@PropertyId", skip_serializing_if = "Option::is_none")]
    pub property_id: Option<i32>,

    /// The value type of the desired property.
    // Required by the schema, but some servers omit it in responses.
    #[serde(rename = "@PropertyType", skip_serializing_if = "Option::is_none")]
    pub property_type: Option<PropertyType>,
}

/// An extended MAPI property of an Exchange item or folder.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/extendedproperty>
#[allow(non_snake_case)]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct ExtendedProperty {
    #[serde(rename = "ExtendedFieldURI")]
    pub extended_field_URI: ExtendedFieldURI,

    #[serde(rename = "$value")]
    pub value: ExtendedPropertyValue,
}

choice_group! {
    /// The value of an extended property, either single or multi-valued
    /// depending on its type.
    pub enum ExtendedPropertyValue {
        Value(String),
        Values(PropertyValues),
    }
}

/// The values of a multi-valued extended property.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/values>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PropertyValues {
    #[serde(default)]
    pub value: Vec<String>,
}

/// The flag information of the item.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/flag>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Flag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag_status: Option<FlagStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub complete_date: Option<DateTime>,
}

/// The rights the authenticated user holds on an item or folder.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/effectiverights>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct EffectiveRights {
    pub create_associated: bool,
    pub create_contents: bool,
    pub create_hierarchy: bool,
    pub delete: bool,
    pub modify: bool,
    pub read: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_private_items: Option<bool>,
}

/// A retention or archive policy tag applied to an item or folder.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/policytag>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct RetentionTag {
    /// Whether the tag was set on the entity itself rather than inherited
    /// from its parent folder.
    #[serde(rename = "@IsExplicit", skip_serializing_if = "Option::is_none")]
    pub is_explicit: Option<bool>,

    /// The GUID of the tag.
    #[serde(rename = "$text", default)]
    pub guid: String,
}

enumeration! {
    /// The content type of an item's body.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/body>
    pub enum BodyType {
        Best = "Best",
        Html = "HTML",
        Text = "Text",
    }
}

enumeration! {
    /// The priority level of an item.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/importance>
    pub enum Importance {
        Low = "Low",
        Normal = "Normal",
        High = "High",
    }
}

enumeration! {
    /// The sensitivity of the contents of an item.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/sensitivity>
    pub enum Sensitivity {
        Normal = "Normal",
        Personal = "Personal",
        Private = "Private",
        Confidential = "Confidential",
    }
}

enumeration! {
    /// The type of sender or recipient a mailbox represents.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/mailboxtype>
    pub enum MailboxType {
        Unknown = "Unknown",
        OneOff = "OneOff",
        Mailbox = "Mailbox",
        PublicDL = "PublicDL",
        PrivateDL = "PrivateDL",
        Contact = "Contact",
        PublicFolder = "PublicFolder",
        GroupMailbox = "GroupMailbox",
        ImplicitContact = "ImplicitContact",
        User = "User",
    }
}

enumeration! {
    /// The value of the flag status for an item.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/flagstatus>
    pub enum FlagStatus {
        NotFlagged = "NotFlagged",
        Flagged = "Flagged",
        Complete = "Complete",
    }
}

enumeration! {
    /// A well-known MAPI property set identifier.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/extendedfielduri#distinguishedpropertysetid-attribute>
    pub enum DistinguishedPropertySet {
        Meeting = "Meeting",
        Appointment = "Appointment",
        Common = "Common",
        PublicStrings = "PublicStrings",
        Address = "Address",
        InternetHeaders = "InternetHeaders",
        CalendarAssistant = "CalendarAssistant",
        UnifiedMessaging = "UnifiedMessaging",
        Task = "Task",
        Sharing = "Sharing",
    }
}

enumeration! {
    /// The type of the value of a MAPI property.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/extendedfielduri#propertytype-attribute>
    pub enum PropertyType {
        ApplicationTime = "ApplicationTime",
        ApplicationTimeArray = "ApplicationTimeArray",
        Binary = "Binary",
        BinaryArray = "BinaryArray",
        Boolean = "Boolean",
        Clsid = "CLSID",
        ClsidArray = "CLSIDArray",
        Currency = "Currency",
        CurrencyArray = "CurrencyArray",
        Double = "Double",
        DoubleArray = "DoubleArray",
        Error = "Error",
        Float = "Float",
        FloatArray = "FloatArray",
        Integer = "Integer",
        IntegerArray = "IntegerArray",
        Long = "Long",
        LongArray = "LongArray",
        Null = "Null",
        Object = "Object",
        ObjectArray = "ObjectArray",
        Short = "Short",
        ShortArray = "ShortArray",
        SystemTime = "SystemTime",
        SystemTimeArray = "SystemTimeArray",
        String = "String",
        StringArray = "StringArray",
    }
}

enumeration! {
    /// The well-known name of a folder.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/distinguishedfolderid#id-attribute>
    pub enum DistinguishedFolderIdName {
        Calendar = "calendar",
        Contacts = "contacts",
        DeletedItems = "deleteditems",
        Drafts = "drafts",
        Inbox = "inbox",
        Journal = "journal",
        Notes = "notes",
        Outbox = "outbox",
        SentItems = "sentitems",
        Tasks = "tasks",
        MsgFolderRoot = "msgfolderroot",
        PublicFoldersRoot = "publicfoldersroot",
        Root = "root",
        JunkEmail = "junkemail",
        SearchFolders = "searchfolders",
        VoiceMail = "voicemail",
        RecoverableItemsRoot = "recoverableitemsroot",
        RecoverableItemsDeletions = "recoverableitemsdeletions",
        RecoverableItemsVersions = "recoverableitemsversions",
        RecoverableItemsPurges = "recoverableitemspurges",
        ArchiveRoot = "archiveroot",
        ArchiveMsgFolderRoot = "archivemsgfolderroot",
        ArchiveDeletedItems = "archivedeleteditems",
        ArchiveInbox = "archiveinbox",
        ArchiveRecoverableItemsRoot = "archiverecoverableitemsroot",
        ArchiveRecoverableItemsDeletions = "archiverecoverableitemsdeletions",
        ArchiveRecoverableItemsVersions = "archiverecoverableitemsversions",
        ArchiveRecoverableItemsPurges = "archiverecoverableitemspurges",
        SyncIssues = "syncissues",
        Conflicts = "conflicts",
        LocalFailures = "localfailures",
        ServerFailures = "serverfailures",
        RecipientCache = "recipientcache",
        QuickContacts = "quickcontacts",
        ConversationHistory = "conversationhistory",
        AdminAuditLogs = "adminauditlogs",
        ToDoSearch = "todosearch",
        MyContacts = "mycontacts",
        Directory = "directory",
        ImContactList = "imcontactlist",
        PeopleConnect = "peopleconnect",
        Favorites = "favorites",
    }
}

enumeration! {
    /// The icon used to display an item in a list view.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/iconindex>
    pub enum IconIndex {
        Default = "Default",
        PostItem = "PostItem",
        MailRead = "MailRead",
        MailUnread = "MailUnread",
        MailReplied = "MailReplied",
        MailForwarded = "MailForwarded",
        MailEncrypted = "MailEncrypted",
        MailSmimeSigned = "MailSmimeSigned",
        MailEncryptedReplied = "MailEncryptedReplied",
        MailSmimeSignedReplied = "MailSmimeSignedReplied",
        MailEncryptedForwarded = "MailEncryptedForwarded",
        MailSmimeSignedForwarded = "MailSmimeSignedForwarded",
        MailEncryptedRead = "MailEncryptedRead",
        MailSmimeSignedRead = "MailSmimeSignedRead",
        MailIrm = "MailIrm",
        MailIrmForwarded = "MailIrmForwarded",
        MailIrmReplied = "MailIrmReplied",
        SmsSubmitted = "SmsSubmitted",
        SmsRoutedToDeliveryPoint = "SmsRoutedToDeliveryPoint",
        SmsRoutedToExternalMessagingSystem = "SmsRoutedToExternalMessagingSystem",
        SmsDelivered = "SmsDelivered",
        OutlookDefaultForContacts = "OutlookDefaultForContacts",
        AppointmentItem = "AppointmentItem",
        AppointmentRecur = "AppointmentRecur",
        AppointmentMeet = "AppointmentMeet",
        AppointmentMeetRecur = "AppointmentMeetRecur",
        AppointmentMeetNY = "AppointmentMeetNY",
        AppointmentMeetYes = "AppointmentMeetYes",
        AppointmentMeetNo = "AppointmentMeetNo",
        AppointmentMeetMaybe = "AppointmentMeetMaybe",
        AppointmentMeetCancel = "AppointmentMeetCancel",
        AppointmentMeetInfo = "AppointmentMeetInfo",
        TaskItem = "TaskItem",
        TaskRecur = "TaskRecur",
        TaskOwned = "TaskOwned",
        TaskDelegated = "TaskDelegated",
    }
}

enumeration! {
    /// The manner in which items or folders are deleted.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/deletetype>
    pub enum DisposalType {
        HardDelete = "HardDelete",
        SoftDelete = "SoftDelete",
        MoveToDeletedItems = "MoveToDeletedItems",
    }
}
