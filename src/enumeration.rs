/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Error;

/// A closed vocabulary of string values, as declared by an XSD simple type
/// restricted to an enumeration.
pub trait Enumeration: Sized + Copy + 'static {
    /// The name of the type, used in error reporting.
    const TYPE_NAME: &'static str;

    /// The literal representing this value on the wire.
    fn value(&self) -> &'static str;

    /// Looks up the value represented by `value`.
    ///
    /// The comparison is exact, including case and punctuation. Any string
    /// which is not one of the declared literals results in
    /// [`Error::UnrecognizedEnumerator`].
    fn from_value(value: &str) -> Result<Self, Error>;
}

/// A whitespace-separated list of enumeration values, as declared by an XSD
/// `xs:list` over an enumerated simple type.
///
/// See for example <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/daysofweek>.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListOf<T>(pub Vec<T>);

impl<T> Default for ListOf<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> Deref for ListOf<T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for ListOf<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> From<Vec<T>> for ListOf<T> {
    fn from(value: Vec<T>) -> Self {
        Self(value)
    }
}

impl<T: Enumeration> ListOf<T> {
    /// Parses a whitespace-separated list, failing on the first member which
    /// isn't a recognized value.
    pub fn parse(value: &str) -> Result<Self, Error> {
        value
            .split_whitespace()
            .map(T::from_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Formats the list the way it appears on the wire.
    pub fn to_value(&self) -> String {
        self.0
            .iter()
            .map(T::value)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<T: Enumeration> Serialize for ListOf<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_value())
    }
}

impl<'de, T: Enumeration> Deserialize<'de> for ListOf<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::{DayOfWeek, DaysOfWeek, RuleFieldURI, UnindexedFieldURI};

    #[test]
    fn every_enumerator_survives_a_value_lookup() {
        for variant in RuleFieldURI::iter() {
            assert_eq!(RuleFieldURI::from_value(variant.value()).unwrap(), variant);
        }

        for variant in UnindexedFieldURI::iter() {
            assert_eq!(
                UnindexedFieldURI::from_value(variant.value()).unwrap(),
                variant
            );
        }
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(
            RuleFieldURI::from_value("Condition:SentToMe").unwrap(),
            RuleFieldURI::ConditionSentToMe
        );
        assert_eq!(
            RuleFieldURI::ConditionSentToMe.value(),
            "Condition:SentToMe"
        );

        for bad in ["condition:senttome", "Condition:SentToMe ", "SentToMe", ""] {
            match RuleFieldURI::from_value(bad) {
                Err(Error::UnrecognizedEnumerator { type_name, value }) => {
                    assert_eq!(type_name, "RuleFieldURI");
                    assert_eq!(value, bad);
                }

                other => panic!("expected an unrecognized value error, got {other:?}"),
            }
        }
    }

    #[test]
    fn list_values() {
        let days: DaysOfWeek = ListOf::parse("Monday  Wednesday\tFriday").unwrap();
        assert_eq!(
            days.0,
            vec![DayOfWeek::Monday, DayOfWeek::Wednesday, DayOfWeek::Friday]
        );
        assert_eq!(days.to_value(), "Monday Wednesday Friday");

        assert!(DaysOfWeek::parse("").unwrap().is_empty());
        assert!(DaysOfWeek::parse("Monday Someday").is_err());
    }
}
