/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};

use crate::{
    BaseFolderId, BaseItemId, BodyType, DictionaryURI, ExceptionPropertyURI, ExtendedFieldURI,
    Folder, Item, UnindexedFieldURI,
};

/// A path to a property identified by a well-known string.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/fielduri>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct PathToUnindexedField {
    #[serde(rename = "@FieldURI")]
    pub field_uri: UnindexedFieldURI,
}

/// A path to a single member of a dictionary-valued property.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/indexedfielduri>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct PathToIndexedField {
    /// The well-known string identifier of the property.
    #[serde(rename = "@FieldURI")]
    pub field_uri: DictionaryURI,

    /// The member within the dictionary to access, e.g. `EmailAddress1` or
    /// `BusinessPhone`.
    #[serde(rename = "@FieldIndex")]
    pub field_index: String,
}

/// A path to a property named in an error response.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/exceptionfielduri>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct PathToExceptionField {
    #[serde(rename = "@FieldURI")]
    pub field_uri: ExceptionPropertyURI,
}

choice_group! {
    /// An identifier for a property on an Exchange entity.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/path>
    pub enum Path {
        FieldURI(PathToUnindexedField),
        IndexedFieldURI(PathToIndexedField),
        ExtendedFieldURI(ExtendedFieldURI),
        ExceptionFieldURI(PathToExceptionField),
    }
}

/// A list of property paths.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/additionalproperties>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct NonEmptyArrayOfPaths {
    #[serde(rename = "$value", default)]
    pub inner: Vec<Path>,
}

impl FromIterator<Path> for NonEmptyArrayOfPaths {
    fn from_iter<I: IntoIterator<Item = Path>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

enumeration! {
    /// The base set of properties to be returned in response to a request.
    /// Additional properties may be specified by the parent element.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/baseshape>
    pub enum BaseShape {
        /// Only the IDs of any items or folders returned.
        IdOnly = "IdOnly",

        /// The default set of properties for the relevant item or folder,
        /// which depends on its type.
        Default = "Default",

        /// All properties of an item or folder.
        AllProperties = "AllProperties",
    }
}

/// The item properties which should be included in a response.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/itemshape>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ItemResponseShape {
    /// The base set of properties to include, which may be extended by other
    /// fields.
    pub base_shape: BaseShape,

    /// Whether the MIME content of an item should be included.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_mime_content: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_type: Option<BodyType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_body_type: Option<BodyType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized_body_type: Option<BodyType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_html_content: Option<bool>,

    #[serde(
        rename = "ConvertHtmlCodePageToUTF8",
        skip_serializing_if = "Option::is_none"
    )]
    pub convert_html_code_page_to_utf8: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_image_url_template: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_external_images: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_blank_target_to_links: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_body_size: Option<i32>,

    /// A list of properties which should be included in addition to those
    /// implied by other fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<NonEmptyArrayOfPaths>,
}

/// The folder properties which should be included in a response.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/foldershape>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct FolderResponseShape {
    pub base_shape: BaseShape,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<NonEmptyArrayOfPaths>,
}

/// The attachment properties which should be included in a response.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/attachmentshape>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct AttachmentResponseShape {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_mime_content: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_type: Option<BodyType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_html_content: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<NonEmptyArrayOfPaths>,
}

/// The wire shape of a field update: a property path followed by an entity
/// carrying the new value of that property.
#[derive(Deserialize, Serialize)]
struct PathAndValue<T> {
    #[serde(rename = "$value")]
    content: (Path, T),
}

/// Sets the value of a single property on an item, creating it if needed.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/setitemfield>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(from = "PathAndValue<Item>", into = "PathAndValue<Item>")]
pub struct SetItemField {
    /// The property to set.
    pub path: Path,

    /// An item with only the property given by `path` populated.
    pub item: Item,
}

/// Appends to the value of a multi-valued item property, such as a list of
/// recipients.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/appendtoitemfield>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(from = "PathAndValue<Item>", into = "PathAndValue<Item>")]
pub struct AppendToItemField {
    pub path: Path,
    pub item: Item,
}

/// Removes a property from an item.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/deleteitemfield>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct DeleteItemField {
    #[serde(rename = "$value")]
    pub path: Path,
}

/// Sets the value of a single property on a folder.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/setfolderfield>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(from = "PathAndValue<Folder>", into = "PathAndValue<Folder>")]
pub struct SetFolderField {
    pub path: Path,
    pub folder: Folder,
}

/// Appends to the value of a multi-valued folder property.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/appendtofolderfield>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(from = "PathAndValue<Folder>", into = "PathAndValue<Folder>")]
pub struct AppendToFolderField {
    pub path: Path,
    pub folder: Folder,
}

/// Removes a property from a folder.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/deletefolderfield>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct DeleteFolderField {
    #[serde(rename = "$value")]
    pub path: Path,
}

macro_rules! impl_path_and_value {
    ($name:ident, $field:ident, $ty:ty) => {
        impl From<PathAndValue<$ty>> for $name {
            fn from(value: PathAndValue<$ty>) -> Self {
                let (path, $field) = value.content;
                Self { path, $field }
            }
        }

        impl From<$name> for PathAndValue<$ty> {
            fn from(value: $name) -> Self {
                Self {
                    content: (value.path, value.$field),
                }
            }
        }
    };
}

impl_path_and_value!(SetItemField, item, Item);
impl_path_and_value!(AppendToItemField, item, Item);
impl_path_and_value!(SetFolderField, folder, Folder);
impl_path_and_value!(AppendToFolderField, folder, Folder);

choice_group! {
    /// A single change to apply to an item.
    pub enum ItemChangeDescription {
        SetItemField(SetItemField),
        AppendToItemField(AppendToItemField),
        DeleteItemField(DeleteItemField),
    }
}

choice_group! {
    /// A single change to apply to a folder.
    pub enum FolderChangeDescription {
        SetFolderField(SetFolderField),
        AppendToFolderField(AppendToFolderField),
        DeleteFolderField(DeleteFolderField),
    }
}

/// The changes to apply to a single item.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/itemchange>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ItemChange {
    /// The item to update.
    #[serde(rename = "$value")]
    pub item_id: BaseItemId,

    /// The changes to apply, in order.
    pub updates: ItemUpdates,
}

/// A list of item changes.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/updates-item>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct ItemUpdates {
    #[serde(rename = "$value", default)]
    pub inner: Vec<ItemChangeDescription>,
}

/// The changes to apply to a single folder.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/folderchange>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct FolderChange {
    #[serde(rename = "$value")]
    pub folder_id: BaseFolderId,

    pub updates: FolderUpdates,
}

/// A list of folder changes.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/updates-folder>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct FolderUpdates {
    #[serde(rename = "$value", default)]
    pub inner: Vec<FolderChangeDescription>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        test_utils::{assert_deserialized_content, assert_round_trip, assert_serialized_content},
        FolderId, FolderType, ItemId, MessageType,
    };

    #[test]
    fn item_shape_with_additional_properties() {
        let shape = ItemResponseShape {
            base_shape: BaseShape::IdOnly,
            include_mime_content: Some(false),
            additional_properties: Some(
                [
                    Path::FieldURI(PathToUnindexedField {
                        field_uri: UnindexedFieldURI::ItemSubject,
                    }),
                    Path::IndexedFieldURI(PathToIndexedField {
                        field_uri: DictionaryURI::ContactsEmailAddress,
                        field_index: "EmailAddress1".into(),
                    }),
                ]
                .into_iter()
                .collect(),
            ),
            ..Default::default()
        };

        let expected = r#"<ItemShape><BaseShape>IdOnly</BaseShape><IncludeMimeContent>false</IncludeMimeContent><AdditionalProperties><FieldURI FieldURI="item:Subject"/><IndexedFieldURI FieldURI="contacts:EmailAddress" FieldIndex="EmailAddress1"/></AdditionalProperties></ItemShape>"#;

        assert_round_trip(shape, "ItemShape", expected);
    }

    #[test]
    fn set_item_field() {
        let change = ItemChange {
            item_id: BaseItemId::ItemId(ItemId {
                id: "AAMkAd".into(),
                change_key: Some("CQAAAB".into()),
            }),
            updates: ItemUpdates {
                inner: vec![
                    ItemChangeDescription::SetItemField(SetItemField {
                        path: Path::FieldURI(PathToUnindexedField {
                            field_uri: UnindexedFieldURI::MessageIsRead,
                        }),
                        item: Item::Message(MessageType {
                            is_read: Some(true),
                            ..Default::default()
                        }),
                    }),
                    ItemChangeDescription::DeleteItemField(DeleteItemField {
                        path: Path::FieldURI(PathToUnindexedField {
                            field_uri: UnindexedFieldURI::ItemCategories,
                        }),
                    }),
                ],
            },
        };

        let expected = r#"<ItemChange><ItemId Id="AAMkAd" ChangeKey="CQAAAB"/><Updates><SetItemField><FieldURI FieldURI="message:IsRead"/><Message><IsRead>true</IsRead></Message></SetItemField><DeleteItemField><FieldURI FieldURI="item:Categories"/></DeleteItemField></Updates></ItemChange>"#;

        assert_round_trip(change, "ItemChange", expected);
    }

    #[test]
    fn set_folder_field() {
        let field = SetFolderField {
            path: Path::FieldURI(PathToUnindexedField {
                field_uri: UnindexedFieldURI::FolderDisplayName,
            }),
            folder: Folder::Folder(FolderType {
                display_name: Some("Receipts".into()),
                ..Default::default()
            }),
        };

        assert_serialized_content(
            &field,
            "SetFolderField",
            r#"<SetFolderField><FieldURI FieldURI="folder:DisplayName"/><Folder><DisplayName>Receipts</DisplayName></Folder></SetFolderField>"#,
        );

        let change = r#"<t:FolderChange><t:FolderId Id="AAMkFo"/><t:Updates><t:SetFolderField><t:FieldURI FieldURI="folder:DisplayName"/><t:Folder><t:DisplayName>Receipts</t:DisplayName></t:Folder></t:SetFolderField></t:Updates></t:FolderChange>"#;

        assert_deserialized_content(
            change,
            FolderChange {
                folder_id: BaseFolderId::FolderId(FolderId {
                    id: "AAMkFo".into(),
                    change_key: None,
                }),
                updates: FolderUpdates {
                    inner: vec![FolderChangeDescription::SetFolderField(field)],
                },
            },
        );
    }
}
