/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Creation of choice group members from their element names.

use crate::Error;

/// A schema choice group, i.e. a position in a document which may be filled
/// by one of several elements, each standing for a different type.
pub trait ChoiceGroup: Sized {
    /// The name of the group, used in error reporting.
    const GROUP_NAME: &'static str;

    /// The names of the elements which may stand in for the group, in schema
    /// order.
    const ELEMENT_NAMES: &'static [&'static str];

    /// The name of the element representing this alternative.
    fn element_name(&self) -> &'static str;

    /// Creates the empty alternative represented by the element `name`, if
    /// there is one.
    fn from_element_name(name: &str) -> Option<Self>;
}

/// Creates an empty member of the choice group `G` from an element name.
///
/// ```ignore
/// let item: Item = create("CalendarItem")?;
/// assert!(matches!(item, Item::CalendarItem(_)));
/// ```
pub fn create<G: ChoiceGroup>(name: &str) -> Result<G, Error> {
    G::from_element_name(name).ok_or_else(|| {
        log::debug!("no `{name}` element in the {} choice group", G::GROUP_NAME);

        Error::UnknownElement {
            group: G::GROUP_NAME,
            name: name.to_owned(),
        }
    })
}

/// Returns every choice group which the element `name` can stand in for.
pub fn groups_for(name: &str) -> Vec<Group> {
    Group::ALL
        .iter()
        .copied()
        .filter(|group| group.contains(name))
        .collect()
}

macro_rules! groups {
    ($($group:ident,)*) => {
        /// Every choice group declared in this crate.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum Group {
            $($group,)*
        }

        impl Group {
            pub const ALL: &'static [Group] = &[$(Group::$group,)*];

            /// The name of the group, which is also the name of its Rust type.
            pub fn name(self) -> &'static str {
                match self {
                    $(Group::$group => <crate::$group as ChoiceGroup>::GROUP_NAME,)*
                }
            }

            /// The names of the elements which may stand in for the group.
            pub fn element_names(self) -> &'static [&'static str] {
                match self {
                    $(Group::$group => <crate::$group as ChoiceGroup>::ELEMENT_NAMES,)*
                }
            }
        }
    };
}

groups! {
    BaseFolderId,
    BaseItemId,
    ExtendedPropertyValue,
    Item,
    AllItem,
    ResponseObject,
    Attachment,
    RecurrencePattern,
    TaskRecurrencePattern,
    RecurrenceRange,
    TimeChangePattern,
    Transition,
    Folder,
    SearchExpression,
    ComparisonOperand,
    Path,
    ItemChangeDescription,
    FolderChangeDescription,
    NotificationEvent,
    ChangedObjectId,
    OldObjectId,
    RuleOperation,
    AttendeeConflictData,
}

impl Group {
    /// Whether the element `name` can stand in for this group.
    pub fn contains(self, name: &str) -> bool {
        self.element_names().contains(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        AllItem, Attachment, CalendarItemType, Item, NotificationEvent, Path, SearchExpression,
    };

    #[test]
    fn create_empty_alternative() {
        let item: Item = create("CalendarItem").unwrap();
        assert_eq!(item, Item::CalendarItem(CalendarItemType::default()));
        assert_eq!(item.element_name(), "CalendarItem");

        let expression: SearchExpression = create("IsGreaterThan").unwrap();
        assert_eq!(expression.element_name(), "IsGreaterThan");
    }

    #[test]
    fn unknown_element_is_rejected() {
        match create::<Attachment>("Folder") {
            Err(Error::UnknownElement { group, name }) => {
                assert_eq!(group, "Attachment");
                assert_eq!(name, "Folder");
            }

            other => panic!("expected an unknown element error, got {other:?}"),
        }

        // Element names are case sensitive.
        assert!(create::<Item>("message").is_err());
    }

    #[test]
    fn every_element_name_creates_its_alternative() {
        fn check<G: ChoiceGroup + std::fmt::Debug>() {
            for name in G::ELEMENT_NAMES {
                let member: G = create(name).unwrap();
                assert_eq!(member.element_name(), *name);
            }
        }

        check::<Item>();
        check::<AllItem>();
        check::<Path>();
        check::<NotificationEvent>();
        check::<SearchExpression>();
    }

    #[test]
    fn group_table() {
        assert_eq!(Group::ALL.len(), 23);
        assert_eq!(Group::Transition.name(), "Transition");

        for group in Group::ALL {
            assert!(!group.element_names().is_empty(), "{group:?} has no members");
        }

        assert_eq!(groups_for("Message"), vec![Group::Item, Group::AllItem]);
        assert_eq!(groups_for("AcceptItem"), vec![Group::AllItem, Group::ResponseObject]);
        assert!(groups_for("FieldURI").contains(&Group::Path));
        assert!(groups_for("FieldURI").contains(&Group::ComparisonOperand));
        assert!(groups_for("Subject").is_empty());
    }
}
