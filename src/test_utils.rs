/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{de::DeserializeOwned, Serialize};

use crate::{from_xml, to_xml_with_options, WriteOptions};

/// Assert the expected result of XML serialization.
///
/// The namespace declaration is left out so that expectations stay readable.
pub fn assert_serialized_content<T: Serialize>(
    data: &T,
    root_tag_name: &str,
    expected_xml_content: &str,
) {
    let options = WriteOptions {
        namespace: false,
        ..Default::default()
    };

    let actual_xml_content = to_xml_with_options(root_tag_name, data, &options).unwrap();

    assert_eq!(actual_xml_content, expected_xml_content);
}

/// Assert the expected result of XML deserialization.
pub fn assert_deserialized_content<T>(content: &str, expected: T)
where
    T: DeserializeOwned + PartialEq + std::fmt::Debug,
{
    let deserialized_data: T = from_xml(content).unwrap();
    assert_eq!(deserialized_data, expected);
}

/// Assert that `data` serializes to `expected_xml_content` and that the
/// result deserializes back to an equal value.
pub fn assert_round_trip<T>(data: T, root_tag_name: &str, expected_xml_content: &str)
where
    T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
{
    assert_serialized_content(&data, root_tag_name, expected_xml_content);
    assert_deserialized_content(expected_xml_content, data);
}
