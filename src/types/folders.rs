/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};

use crate::{
    CalendarPermissionReadAccess, CalendarPermissionSet, DistinguishedFolderIdName,
    EffectiveRights, ExtendedProperty, FolderId, NonEmptyArrayOfBaseFolderIds,
    PermissionReadAccess, PermissionSet, Restriction,
};

/// Read access to the fields every folder carries, regardless of its
/// concrete type.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/folder>
pub trait FolderFields {
    fn folder_id(&self) -> Option<&FolderId>;
    fn parent_folder_id(&self) -> Option<&FolderId>;
    fn folder_class(&self) -> Option<&str>;
    fn display_name(&self) -> Option<&str>;
    fn total_count(&self) -> Option<i32>;
    fn child_folder_count(&self) -> Option<i32>;
    fn extended_properties(&self) -> &[ExtendedProperty];
    fn effective_rights(&self) -> Option<&EffectiveRights>;
    fn distinguished_folder_id(&self) -> Option<DistinguishedFolderIdName>;
}

folder_record! {
    /// A generic mail folder.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/folder>
    pub struct FolderType {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub permission_set: Option<PermissionSet>,

        /// The number of unread items in the folder.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub unread_count: Option<i32>,
    }
}

folder_record! {
    /// A folder holding calendar items.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/calendarfolder>
    pub struct CalendarFolderType {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub sharing_effective_rights: Option<CalendarPermissionReadAccess>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub permission_set: Option<CalendarPermissionSet>,
    }
}

folder_record! {
    /// A folder holding contacts.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/contactsfolder>
    pub struct ContactsFolderType {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub sharing_effective_rights: Option<PermissionReadAccess>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub permission_set: Option<PermissionSet>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub source_id: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub account_name: Option<String>,
    }
}

folder_record! {
    /// A virtual folder whose contents are the result of a search.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/searchfolder>
    pub struct SearchFolderType {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub permission_set: Option<PermissionSet>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub unread_count: Option<i32>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub search_parameters: Option<SearchParameters>,
    }
}

folder_record! {
    /// A folder holding tasks.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/tasksfolder>
    pub struct TasksFolderType {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub permission_set: Option<PermissionSet>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub unread_count: Option<i32>,
    }
}

choice_group! {
    /// An Exchange folder of any concrete type.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/folders-ex15websvcsotherref>
    pub enum Folder {
        Folder(FolderType),
        CalendarFolder(CalendarFolderType),
        ContactsFolder(ContactsFolderType),
        SearchFolder(SearchFolderType),
        TasksFolder(TasksFolderType),
    }
}

impl Folder {
    /// Gives access to the fields common to all folders.
    pub fn fields(&self) -> &dyn FolderFields {
        match self {
            Folder::Folder(folder) => folder,
            Folder::CalendarFolder(folder) => folder,
            Folder::ContactsFolder(folder) => folder,
            Folder::SearchFolder(folder) => folder,
            Folder::TasksFolder(folder) => folder,
        }
    }
}

/// A list of folders.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct ArrayOfFolders {
    #[serde(rename = "$value", default)]
    pub inner: Vec<Folder>,
}

/// Information about a managed custom folder.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/managedfolderinformation>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ManagedFolderInformation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_delete: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_rename_or_move: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub must_display_comment: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_quota: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_managed_folders_root: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_folder_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_quota: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_size: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_page: Option<String>,
}

/// The query defining the contents of a search folder.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/searchparameters>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct SearchParameters {
    #[serde(rename = "@Traversal", skip_serializing_if = "Option::is_none")]
    pub traversal: Option<SearchFolderTraversal>,

    pub restriction: Restriction,

    /// The folders to search.
    pub base_folder_ids: NonEmptyArrayOfBaseFolderIds,
}

enumeration! {
    /// Whether a search folder includes subfolders of its base folders.
    pub enum SearchFolderTraversal {
        Shallow = "Shallow",
        Deep = "Deep",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        test_utils::{assert_deserialized_content, assert_round_trip},
        BaseFolderId, DistinguishedFolderId, Exists, Path, PathToUnindexedField, SearchExpression,
        UnindexedFieldURI,
    };

    #[test]
    fn folder_list_and_base_fields() {
        let xml = r#"<t:Folders><t:Folder><t:FolderId Id="AAMkIn" ChangeKey="AQAAAB"/><t:DisplayName>Inbox</t:DisplayName><t:TotalCount>12</t:TotalCount><t:ChildFolderCount>0</t:ChildFolderCount><t:UnreadCount>3</t:UnreadCount></t:Folder><t:CalendarFolder><t:DisplayName>Calendar</t:DisplayName><t:DistinguishedFolderId>calendar</t:DistinguishedFolderId></t:CalendarFolder></t:Folders>"#;

        let expected = ArrayOfFolders {
            inner: vec![
                Folder::Folder(FolderType {
                    folder_id: Some(FolderId {
                        id: "AAMkIn".into(),
                        change_key: Some("AQAAAB".into()),
                    }),
                    display_name: Some("Inbox".into()),
                    total_count: Some(12),
                    child_folder_count: Some(0),
                    unread_count: Some(3),
                    ..Default::default()
                }),
                Folder::CalendarFolder(CalendarFolderType {
                    display_name: Some("Calendar".into()),
                    distinguished_folder_id: Some(DistinguishedFolderIdName::Calendar),
                    ..Default::default()
                }),
            ],
        };

        let names: Vec<_> = expected
            .inner
            .iter()
            .map(|folder| folder.fields().display_name())
            .collect();
        assert_eq!(names, vec![Some("Inbox"), Some("Calendar")]);
        assert_eq!(
            expected.inner[1].fields().distinguished_folder_id(),
            Some(DistinguishedFolderIdName::Calendar)
        );

        assert_deserialized_content(xml, expected);
    }

    #[test]
    fn search_folder() {
        let folder = SearchFolderType {
            display_name: Some("Flagged".into()),
            search_parameters: Some(SearchParameters {
                traversal: Some(SearchFolderTraversal::Deep),
                restriction: Restriction {
                    expression: SearchExpression::Exists(Exists {
                        path: Path::FieldURI(PathToUnindexedField {
                            field_uri: UnindexedFieldURI::ItemFlag,
                        }),
                    }),
                },
                base_folder_ids: NonEmptyArrayOfBaseFolderIds {
                    inner: vec![BaseFolderId::DistinguishedFolderId(DistinguishedFolderId {
                        id: DistinguishedFolderIdName::Inbox,
                        change_key: None,
                        mailbox: None,
                    })],
                },
            }),
            ..Default::default()
        };

        let expected = r#"<SearchFolder><DisplayName>Flagged</DisplayName><SearchParameters Traversal="Deep"><Restriction><Exists><FieldURI FieldURI="item:Flag"/></Exists></Restriction><BaseFolderIds><DistinguishedFolderId Id="inbox"/></BaseFolderIds></SearchParameters></SearchFolder>"#;

        assert_round_trip(folder, "SearchFolder", expected);
    }
}
