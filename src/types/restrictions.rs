/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};

use crate::{ExtendedFieldURI, Path, PathToIndexedField, PathToUnindexedField};

/// A filter over items or folders.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/restriction>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Restriction {
    #[serde(rename = "$value")]
    pub expression: SearchExpression,
}

choice_group! {
    /// A predicate in a restriction, possibly combining other predicates.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/searchexpression>
    pub enum SearchExpression {
        Exists(Exists),
        Excludes(Excludes),
        IsEqualTo(TwoOperandExpression),
        IsNotEqualTo(TwoOperandExpression),
        IsGreaterThan(TwoOperandExpression),
        IsGreaterThanOrEqualTo(TwoOperandExpression),
        IsLessThan(TwoOperandExpression),
        IsLessThanOrEqualTo(TwoOperandExpression),
        Contains(Contains),
        Not(Not),
        And(MultipleOperandExpression),
        Or(MultipleOperandExpression),
    }
}

/// Matches entities on which a property is set.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/exists>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Exists {
    #[serde(rename = "$value")]
    pub path: Path,
}

/// Matches entities for which a bitwise AND of a property and a mask is
/// zero.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/excludes>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Excludes {
    #[serde(rename = "$value")]
    pub path: Path,

    pub bitmask: Bitmask,
}

/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/bitmask>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Bitmask {
    /// The mask, in decimal or hexadecimal form.
    #[serde(rename = "@Value")]
    pub value: String,
}

/// A comparison between a property and either a constant or another
/// property.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct TwoOperandExpression {
    #[serde(rename = "$value")]
    pub path: Path,

    #[serde(rename = "FieldURIOrConstant")]
    pub field_uri_or_constant: FieldURIOrConstant,
}

/// The right-hand side of a comparison.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/fielduriorconstant>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct FieldURIOrConstant {
    #[serde(rename = "$value")]
    pub operand: ComparisonOperand,
}

choice_group! {
    /// A value to compare a property against.
    pub enum ComparisonOperand {
        Constant(Constant),
        FieldURI(PathToUnindexedField),
        IndexedFieldURI(PathToIndexedField),
        ExtendedFieldURI(ExtendedFieldURI),
    }
}

/// A literal value in a restriction.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/constant>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Constant {
    #[serde(rename = "@Value")]
    pub value: String,
}

/// Matches string properties containing a constant.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/contains>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Contains {
    #[serde(rename = "@ContainmentMode", skip_serializing_if = "Option::is_none")]
    pub containment_mode: Option<ContainmentMode>,

    #[serde(
        rename = "@ContainmentComparison",
        skip_serializing_if = "Option::is_none"
    )]
    pub containment_comparison: Option<ContainmentComparison>,

    #[serde(rename = "$value")]
    pub path: Path,

    pub constant: Constant,
}

/// Negates a predicate.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/not>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Not {
    #[serde(rename = "$value")]
    pub expression: Box<SearchExpression>,
}

/// A conjunction or disjunction of predicates.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/and>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct MultipleOperandExpression {
    #[serde(rename = "$value", default)]
    pub expressions: Vec<SearchExpression>,
}

enumeration! {
    /// Which part of a string a `Contains` predicate matches.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/contains>
    pub enum ContainmentMode {
        FullString = "FullString",
        Prefixed = "Prefixed",
        Substring = "Substring",
        PrefixOnWords = "PrefixOnWords",
        ExactPhrase = "ExactPhrase",
    }
}

enumeration! {
    /// How strictly a `Contains` predicate compares characters.
    pub enum ContainmentComparison {
        Exact = "Exact",
        IgnoreCase = "IgnoreCase",
        IgnoreNonSpacingCharacters = "IgnoreNonSpacingCharacters",
        Loose = "Loose",
        IgnoreCaseAndNonSpacingCharacters = "IgnoreCaseAndNonSpacingCharacters",
        LooseAndIgnoreCase = "LooseAndIgnoreCase",
        LooseAndIgnoreNonSpace = "LooseAndIgnoreNonSpace",
        LooseAndIgnoreCaseAndIgnoreNonSpace = "LooseAndIgnoreCaseAndIgnoreNonSpace",
    }
}

enumeration! {
    /// Which folders a folder search visits.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/findfolder>
    pub enum FolderQueryTraversal {
        Shallow = "Shallow",
        Deep = "Deep",
        SoftDeleted = "SoftDeleted",
    }
}

enumeration! {
    /// Which items an item search visits.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/finditem>
    pub enum ItemQueryTraversal {
        Shallow = "Shallow",
        SoftDeleted = "SoftDeleted",
        Associated = "Associated",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{test_utils::assert_round_trip, UnindexedFieldURI};

    fn field(field_uri: UnindexedFieldURI) -> Path {
        Path::FieldURI(PathToUnindexedField { field_uri })
    }

    #[test]
    fn nested_expressions() {
        let restriction = Restriction {
            expression: SearchExpression::And(MultipleOperandExpression {
                expressions: vec![
                    SearchExpression::IsEqualTo(TwoOperandExpression {
                        path: field(UnindexedFieldURI::MessageIsRead),
                        field_uri_or_constant: FieldURIOrConstant {
                            operand: ComparisonOperand::Constant(Constant {
                                value: "false".into(),
                            }),
                        },
                    }),
                    SearchExpression::Not(Not {
                        expression: Box::new(SearchExpression::Contains(Contains {
                            containment_mode: Some(ContainmentMode::Substring),
                            containment_comparison: Some(ContainmentComparison::IgnoreCase),
                            path: field(UnindexedFieldURI::ItemSubject),
                            constant: Constant {
                                value: "newsletter".into(),
                            },
                        })),
                    }),
                ],
            }),
        };

        let expected = r#"<Restriction><And><IsEqualTo><FieldURI FieldURI="message:IsRead"/><FieldURIOrConstant><Constant Value="false"/></FieldURIOrConstant></IsEqualTo><Not><Contains ContainmentMode="Substring" ContainmentComparison="IgnoreCase"><FieldURI FieldURI="item:Subject"/><Constant Value="newsletter"/></Contains></Not></And></Restriction>"#;

        assert_round_trip(restriction, "Restriction", expected);
    }

    #[test]
    fn comparison_between_properties() {
        let restriction = Restriction {
            expression: SearchExpression::IsGreaterThan(TwoOperandExpression {
                path: field(UnindexedFieldURI::ItemDateTimeReceived),
                field_uri_or_constant: FieldURIOrConstant {
                    operand: ComparisonOperand::FieldURI(PathToUnindexedField {
                        field_uri: UnindexedFieldURI::ItemDateTimeSent,
                    }),
                },
            }),
        };

        let expected = r#"<Restriction><IsGreaterThan><FieldURI FieldURI="item:DateTimeReceived"/><FieldURIOrConstant><FieldURI FieldURI="item:DateTimeSent"/></FieldURIOrConstant></IsGreaterThan></Restriction>"#;

        assert_round_trip(restriction, "Restriction", expected);
    }
}
