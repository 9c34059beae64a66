/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};

use crate::{AttachmentId, DateTime, Item};

choice_group! {
    /// An attachment to an Exchange item.
    pub enum Attachment {
        /// An attachment containing an Exchange item.
        ///
        /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/itemattachment>
        ItemAttachment(ItemAttachment),

        /// An attachment containing a file.
        ///
        /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/fileattachment>
        FileAttachment(FileAttachment),
    }
}

impl Attachment {
    /// The name of the attachment, whichever kind it is.
    pub fn name(&self) -> Option<&str> {
        match self {
            Attachment::ItemAttachment(attachment) => attachment.name.as_deref(),
            Attachment::FileAttachment(attachment) => attachment.name.as_deref(),
        }
    }
}

/// The attachments of an item.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/attachments-ex15websvcsotherref>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Attachments {
    #[serde(rename = "$value", default)]
    pub inner: Vec<Attachment>,
}

/// An attachment containing an Exchange item.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ItemAttachment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_id: Option<AttachmentId>,

    /// The name of the attachment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The MIME type of the attachment's content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    /// An arbitrary identifier for the attachment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_original_url: Option<String>,

    /// The size of the attachment's content in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_time: Option<DateTime>,

    /// Whether the attachment appears inline in the item body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_inline: Option<bool>,

    /// The attached item.
    #[serde(rename = "$value", default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Box<Item>>,
}

/// An attachment containing a file.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct FileAttachment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_id: Option<AttachmentId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_original_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_time: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_inline: Option<bool>,

    /// Whether the file is the picture of a contact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_contact_photo: Option<bool>,

    /// The base64-encoded content of the file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        test_utils::{assert_deserialized_content, assert_round_trip},
        MessageType,
    };

    #[test]
    fn file_attachment() {
        let attachments = Attachments {
            inner: vec![Attachment::FileAttachment(FileAttachment {
                attachment_id: Some(AttachmentId {
                    id: "AAMkAt".into(),
                    root_item_id: None,
                    root_item_change_key: None,
                }),
                name: Some("notes.txt".into()),
                content_type: Some("text/plain".into()),
                size: Some(5),
                is_inline: Some(false),
                content: Some("aGVsbG8=".into()),
                ..Default::default()
            })],
        };

        let expected = r#"<Attachments><FileAttachment><AttachmentId Id="AAMkAt"/><Name>notes.txt</Name><ContentType>text/plain</ContentType><Size>5</Size><IsInline>false</IsInline><Content>aGVsbG8=</Content></FileAttachment></Attachments>"#;

        assert_round_trip(attachments, "Attachments", expected);
    }

    #[test]
    fn attached_message() {
        let xml = r#"<t:Attachments><t:ItemAttachment><t:Name>Forwarded</t:Name><t:Message><t:Subject>Original</t:Subject></t:Message></t:ItemAttachment><t:FileAttachment><t:Name>a.pdf</t:Name></t:FileAttachment></t:Attachments>"#;

        let expected = Attachments {
            inner: vec![
                Attachment::ItemAttachment(ItemAttachment {
                    name: Some("Forwarded".into()),
                    content: Some(Box::new(Item::Message(MessageType {
                        subject: Some("Original".into()),
                        ..Default::default()
                    }))),
                    ..Default::default()
                }),
                Attachment::FileAttachment(FileAttachment {
                    name: Some("a.pdf".into()),
                    ..Default::default()
                }),
            ],
        };

        let names: Vec<_> = expected.inner.iter().map(Attachment::name).collect();
        assert_eq!(names, vec![Some("Forwarded"), Some("a.pdf")]);

        assert_deserialized_content(xml, expected);
    }
}
