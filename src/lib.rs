/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Data bindings for the Exchange Web Services types namespace
//! (`http://schemas.microsoft.com/exchange/services/2006/types`).
//!
//! Every record in this crate is a plain data holder which can be encoded to
//! and decoded from the XML wire format with [`to_xml`] and [`from_xml`].
//! Schema choice groups are represented as enums whose variants are named
//! after the XML elements they stand for, and closed vocabularies as enums
//! implementing [`Enumeration`].

use thiserror::Error;

#[macro_use]
mod macros;

mod codec;
mod enumeration;
mod factory;
mod interop;
mod types;

#[cfg(test)]
mod test_utils;

pub use codec::*;
pub use enumeration::*;
pub use factory::*;
pub use types::*;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to serialize structure as XML")]
    Serialize(#[from] quick_xml::SeError),

    #[error("failed to deserialize structure from XML")]
    Deserialize(#[from] serde_path_to_error::Error<quick_xml::DeError>),

    #[error("error manipulating XML data")]
    Xml(#[from] quick_xml::Error),

    #[error("`{value}` is not a recognized value of {type_name}")]
    UnrecognizedEnumerator {
        type_name: &'static str,
        value: String,
    },

    #[error("`{name}` is not an element of the {group} choice group")]
    UnknownElement { group: &'static str, name: String },

    #[error("invalid content for {type_name}: {reason}")]
    InvalidChoice {
        type_name: &'static str,
        reason: &'static str,
    },
}
