/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

/// The namespace of every element and type in this crate.
pub const TYPES_NS_URI: &str = "http://schemas.microsoft.com/exchange/services/2006/types";

mod attachments;
mod availability;
mod calendar;
mod common;
mod contacts;
mod conversations;
mod field_uris;
mod folders;
mod items;
mod mail_tips;
mod notifications;
mod paths;
mod permissions;
mod recurrence;
mod response_objects;
mod restrictions;
mod rules;
mod tasks;
mod time_zones;
mod tracking;

pub use attachments::*;
pub use availability::*;
pub use calendar::*;
pub use common::*;
pub use contacts::*;
pub use conversations::*;
pub use field_uris::*;
pub use folders::*;
pub use items::*;
pub use mail_tips::*;
pub use notifications::*;
pub use paths::*;
pub use permissions::*;
pub use recurrence::*;
pub use response_objects::*;
pub use restrictions::*;
pub use rules::*;
pub use tasks::*;
pub use time_zones::*;
pub use tracking::*;
