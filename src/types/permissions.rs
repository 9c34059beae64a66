/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};

/// Read access to the fields shared by folder and calendar permissions.
pub trait BasePermissionFields {
    fn user_id(&self) -> &UserId;
    fn can_create_items(&self) -> Option<bool>;
    fn can_create_sub_folders(&self) -> Option<bool>;
    fn is_folder_owner(&self) -> Option<bool>;
    fn is_folder_visible(&self) -> Option<bool>;
    fn is_folder_contact(&self) -> Option<bool>;
    fn edit_items(&self) -> Option<PermissionAction>;
    fn delete_items(&self) -> Option<PermissionAction>;
}

/// The user a permission or delegation applies to.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/userid>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct UserId {
    /// The security identifier of the user.
    #[serde(rename = "SID", skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_smtp_address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub distinguished_user: Option<DistinguishedUser>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_user_identity: Option<String>,
}

permission_record! {
    /// A user's access to a folder.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/permission>
    pub struct Permission {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub read_items: Option<PermissionReadAccess>,

        pub permission_level: PermissionLevel,
    }
}

permission_record! {
    /// A user's access to a calendar folder.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/calendarpermission>
    pub struct CalendarPermission {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub read_items: Option<CalendarPermissionReadAccess>,

        pub calendar_permission_level: CalendarPermissionLevel,
    }
}

/// The permissions on a folder.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/permissionset-permissionsettype>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PermissionSet {
    pub permissions: ArrayOfPermissions,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unknown_entries: Option<ArrayOfUnknownEntries>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ArrayOfPermissions {
    #[serde(default)]
    pub permission: Vec<Permission>,
}

/// The permissions on a calendar folder.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/permissionset-calendarpermissionsettype>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct CalendarPermissionSet {
    pub calendar_permissions: ArrayOfCalendarPermissions,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unknown_entries: Option<ArrayOfUnknownEntries>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ArrayOfCalendarPermissions {
    #[serde(default)]
    pub calendar_permission: Vec<CalendarPermission>,
}

/// Permission entries the server could not resolve to a user.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/unknownentries>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ArrayOfUnknownEntries {
    #[serde(default)]
    pub unknown_entry: Vec<String>,
}

/// The access granted to a delegate for each of the principal's default
/// folders.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/delegatepermissions>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct DelegatePermissions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar_folder_permission_level: Option<DelegateFolderPermissionLevel>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks_folder_permission_level: Option<DelegateFolderPermissionLevel>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inbox_folder_permission_level: Option<DelegateFolderPermissionLevel>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacts_folder_permission_level: Option<DelegateFolderPermissionLevel>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes_folder_permission_level: Option<DelegateFolderPermissionLevel>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub journal_folder_permission_level: Option<DelegateFolderPermissionLevel>,
}

/// A user acting on behalf of a mailbox owner.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/delegateuser>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct DelegateUser {
    pub user_id: UserId,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delegate_permissions: Option<DelegatePermissions>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub receive_copies_of_meeting_messages: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_private_items: Option<bool>,
}

enumeration! {
    /// Which items a user may edit or delete.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/edititems>
    pub enum PermissionAction {
        None = "None",
        Owned = "Owned",
        All = "All",
    }
}

enumeration! {
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/readitems>
    pub enum PermissionReadAccess {
        None = "None",
        FullDetails = "FullDetails",
    }
}

enumeration! {
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/readitems>
    pub enum CalendarPermissionReadAccess {
        None = "None",
        TimeOnly = "TimeOnly",
        TimeAndSubjectAndLocation = "TimeAndSubjectAndLocation",
        FullDetails = "FullDetails",
    }
}

enumeration! {
    /// A predefined bundle of folder permissions.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/permissionlevel>
    pub enum PermissionLevel {
        None = "None",
        Owner = "Owner",
        PublishingEditor = "PublishingEditor",
        Editor = "Editor",
        PublishingAuthor = "PublishingAuthor",
        Author = "Author",
        NoneditingAuthor = "NoneditingAuthor",
        Reviewer = "Reviewer",
        Contributor = "Contributor",
        Custom = "Custom",
    }
}

enumeration! {
    /// A predefined bundle of calendar folder permissions.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/calendarpermissionlevel>
    pub enum CalendarPermissionLevel {
        None = "None",
        Owner = "Owner",
        PublishingEditor = "PublishingEditor",
        Editor = "Editor",
        PublishingAuthor = "PublishingAuthor",
        Author = "Author",
        NoneditingAuthor = "NoneditingAuthor",
        Reviewer = "Reviewer",
        Contributor = "Contributor",
        FreeBusyTimeOnly = "FreeBusyTimeOnly",
        FreeBusyTimeAndSubjectAndLocation = "FreeBusyTimeAndSubjectAndLocation",
        Custom = "Custom",
    }
}

enumeration! {
    pub enum DelegateFolderPermissionLevel {
        None = "None",
        Editor = "Editor",
        Reviewer = "Reviewer",
        Author = "Author",
        Custom = "Custom",
    }
}

enumeration! {
    /// A pseudo-user standing for a class of users.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/distinguisheduser>
    pub enum DistinguishedUser {
        Default = "Default",
        Anonymous = "Anonymous",
    }
}

enumeration! {
    /// Who receives meeting requests sent to a principal with delegates.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/delivermeetingrequests>
    pub enum DeliverMeetingRequests {
        DelegatesOnly = "DelegatesOnly",
        DelegatesAndMe = "DelegatesAndMe",
        DelegatesAndSendInformationToMe = "DelegatesAndSendInformationToMe",
        NoForward = "NoForward",
    }
}
