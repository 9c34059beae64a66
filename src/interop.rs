/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Trait implementations for interoperability with the standard library.
//!
//! This module provides [`std::convert`] implementations wrapping records in
//! the choice groups and list types they most commonly appear in.

use crate::{
    ArrayOfRecipients, BaseFolderId, BaseItemId, DictionaryURI, DistinguishedFolderId,
    DistinguishedFolderIdName, EmailAddress, FolderId, ItemId, Path, PathToIndexedField,
    PathToUnindexedField, TargetFolderId, UnindexedFieldURI,
};

// Identifier traits.

impl From<FolderId> for BaseFolderId {
    /// Convert via the [`BaseFolderId::FolderId`] variant.
    fn from(value: FolderId) -> Self {
        Self::FolderId(value)
    }
}

impl From<DistinguishedFolderId> for BaseFolderId {
    /// Convert via the [`BaseFolderId::DistinguishedFolderId`] variant.
    fn from(value: DistinguishedFolderId) -> Self {
        Self::DistinguishedFolderId(value)
    }
}

impl From<DistinguishedFolderIdName> for BaseFolderId {
    /// Convert to a [`DistinguishedFolderId`] in the authenticated user's
    /// mailbox, without a change key.
    fn from(value: DistinguishedFolderIdName) -> Self {
        Self::DistinguishedFolderId(DistinguishedFolderId {
            id: value,
            change_key: None,
            mailbox: None,
        })
    }
}

impl From<BaseFolderId> for TargetFolderId {
    /// Convert via the [`TargetFolderId::folder_id`] member.
    fn from(value: BaseFolderId) -> Self {
        Self { folder_id: value }
    }
}

impl From<FolderId> for TargetFolderId {
    /// Convert via [`BaseFolderId::FolderId`].
    fn from(value: FolderId) -> Self {
        BaseFolderId::from(value).into()
    }
}

impl From<DistinguishedFolderIdName> for TargetFolderId {
    /// Convert via [`BaseFolderId::DistinguishedFolderId`].
    fn from(value: DistinguishedFolderIdName) -> Self {
        BaseFolderId::from(value).into()
    }
}

impl From<ItemId> for BaseItemId {
    /// Convert via the [`BaseItemId::ItemId`] variant.
    fn from(value: ItemId) -> Self {
        Self::ItemId(value)
    }
}

// Field path traits.

impl From<UnindexedFieldURI> for Path {
    /// Convert via the [`Path::FieldURI`] variant.
    fn from(value: UnindexedFieldURI) -> Self {
        Self::FieldURI(PathToUnindexedField { field_uri: value })
    }
}

impl From<PathToIndexedField> for Path {
    /// Convert via the [`Path::IndexedFieldURI`] variant.
    fn from(value: PathToIndexedField) -> Self {
        Self::IndexedFieldURI(value)
    }
}

impl<S: Into<String>> From<(DictionaryURI, S)> for Path {
    /// Convert a dictionary and a key within it to an indexed path.
    fn from((field_uri, field_index): (DictionaryURI, S)) -> Self {
        Self::IndexedFieldURI(PathToIndexedField {
            field_uri,
            field_index: field_index.into(),
        })
    }
}

// Recipient traits.

impl From<Vec<EmailAddress>> for ArrayOfRecipients {
    /// Convert via the tuple member.
    fn from(value: Vec<EmailAddress>) -> Self {
        Self(value)
    }
}

impl From<ArrayOfRecipients> for Vec<EmailAddress> {
    /// Convert via the tuple member.
    fn from(value: ArrayOfRecipients) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_serialized_content;

    #[test]
    fn folder_ids() {
        let target: TargetFolderId = DistinguishedFolderIdName::Inbox.into();
        assert_serialized_content(
            &target,
            "ToFolderId",
            r#"<ToFolderId><DistinguishedFolderId Id="inbox"/></ToFolderId>"#,
        );

        let id: BaseFolderId = FolderId {
            id: "AAMkF".into(),
            change_key: None,
        }
        .into();
        assert!(matches!(id, BaseFolderId::FolderId(ref folder) if folder.id == "AAMkF"));
    }

    #[test]
    fn paths() {
        let path: Path = UnindexedFieldURI::ItemSubject.into();
        assert_eq!(
            path,
            Path::FieldURI(PathToUnindexedField {
                field_uri: UnindexedFieldURI::ItemSubject,
            })
        );

        let path: Path = (DictionaryURI::ContactsEmailAddress, "EmailAddress1").into();
        assert_eq!(
            path,
            Path::IndexedFieldURI(PathToIndexedField {
                field_uri: DictionaryURI::ContactsEmailAddress,
                field_index: "EmailAddress1".into(),
            })
        );
    }

    #[test]
    fn recipients() {
        let recipients: ArrayOfRecipients = vec![EmailAddress {
            email_address: Some("kim@example.com".into()),
            ..Default::default()
        }]
        .into();

        assert_eq!(recipients.len(), 1);

        let addresses: Vec<EmailAddress> = recipients.into();
        assert_eq!(addresses[0].email_address.as_deref(), Some("kim@example.com"));
    }
}
