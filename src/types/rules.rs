/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};

use crate::{
    ArrayOfEmailAddresses, ArrayOfStrings, DateTime, Importance, ItemId, Sensitivity,
    TargetFolderId,
};

/// An Inbox rule.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/rule-ruletype>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Rule {
    /// The server-assigned identifier. Absent when creating a rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,

    pub display_name: String,

    /// The order in which the rule runs, starting at 1.
    pub priority: i32,

    pub is_enabled: bool,

    /// Set by the server when the rule was created by a client it cannot
    /// represent faithfully.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_not_supported: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_in_error: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<RulePredicates>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exceptions: Option<RulePredicates>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<RuleActions>,
}

/// A list of Inbox rules.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/inboxrules>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ArrayOfRules {
    #[serde(default)]
    pub rule: Vec<Rule>,
}

/// The conditions under which a rule applies, or the exceptions to it.
///
/// Every populated predicate must hold for the set as a whole to match.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/conditions>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct RulePredicates {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<ArrayOfStrings>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_body_strings: Option<ArrayOfStrings>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_header_strings: Option<ArrayOfStrings>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_recipient_strings: Option<ArrayOfStrings>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_sender_strings: Option<ArrayOfStrings>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_subject_or_body_strings: Option<ArrayOfStrings>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_subject_strings: Option<ArrayOfStrings>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub flagged_for_action: Option<FlaggedForAction>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_addresses: Option<ArrayOfEmailAddresses>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_connected_accounts: Option<ArrayOfStrings>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_attachments: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub importance: Option<Importance>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_approval_request: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_automatic_forward: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_automatic_reply: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_encrypted: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_meeting_request: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_meeting_response: Option<bool>,

    /// Whether the message is a non-delivery report.
    #[serde(rename = "IsNDR", skip_serializing_if = "Option::is_none")]
    pub is_ndr: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_permission_controlled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_read_receipt: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_signed: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_voicemail: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_classes: Option<ArrayOfStrings>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_classifications: Option<ArrayOfStrings>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_sent_to_me: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sent_cc_me: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sent_only_to_me: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sent_to_addresses: Option<ArrayOfEmailAddresses>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sent_to_me: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sent_to_or_cc_me: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensitivity: Option<Sensitivity>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub within_date_range: Option<RulePredicateDateRange>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub within_size_range: Option<RulePredicateSizeRange>,
}

/// A window of time in which a message must have been received.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/withindaterange>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct RulePredicateDateRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date_time: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date_time: Option<DateTime>,
}

/// Bounds on the size of a message, in kilobytes.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/withinsizerange>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct RulePredicateSizeRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_size: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_size: Option<i32>,
}

/// What a rule does to the messages it matches.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/actions>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct RuleActions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assign_categories: Option<ArrayOfStrings>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_to_folder: Option<TargetFolderId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward_as_attachment_to_recipients: Option<ArrayOfEmailAddresses>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward_to_recipients: Option<ArrayOfEmailAddresses>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark_importance: Option<Importance>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark_as_read: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub move_to_folder: Option<TargetFolderId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub permanent_delete: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_to_recipients: Option<ArrayOfEmailAddresses>,

    #[serde(
        rename = "SendSMSAlertToRecipients",
        skip_serializing_if = "Option::is_none"
    )]
    pub send_sms_alert_to_recipients: Option<ArrayOfEmailAddresses>,

    /// A template message to reply with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_reply_with_message: Option<ItemId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_processing_rules: Option<bool>,
}

choice_group! {
    /// A change to the set of Inbox rules.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/operations>
    pub enum RuleOperation {
        CreateRuleOperation(CreateRuleOperation),
        SetRuleOperation(SetRuleOperation),
        DeleteRuleOperation(DeleteRuleOperation),
    }
}

/// A list of rule changes, applied in order.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct ArrayOfRuleOperations {
    #[serde(rename = "$value", default)]
    pub inner: Vec<RuleOperation>,
}

/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/createruleoperation>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct CreateRuleOperation {
    pub rule: Rule,
}

/// Replaces an existing rule, identified by the `RuleId` of `rule`.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/setruleoperation>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct SetRuleOperation {
    pub rule: Rule,
}

/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/deleteruleoperation>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteRuleOperation {
    pub rule_id: String,
}

/// The reasons a single rule operation was rejected.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/ruleoperationerror>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct RuleOperationError {
    /// The zero-based position of the failing operation in the request.
    pub operation_index: i32,

    pub validation_errors: ArrayOfRuleValidationErrors,
}

/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/ruleoperationerrors>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ArrayOfRuleOperationErrors {
    #[serde(default)]
    pub rule_operation_error: Vec<RuleOperationError>,
}

/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/validationerrors>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ArrayOfRuleValidationErrors {
    #[serde(rename = "Error", default)]
    pub errors: Vec<RuleValidationError>,
}

/// A problem with one property of a rule.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/error-rulevalidationerrortype>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct RuleValidationError {
    #[serde(rename = "FieldURI")]
    pub field_uri: RuleFieldURI,

    pub error_code: RuleValidationErrorCode,

    pub error_message: String,

    /// The offending value, as the server saw it.
    pub field_value: String,
}

enumeration! {
    /// A property of a rule, as named in validation errors.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/fielduri-rulevalidationerrortype>
    pub enum RuleFieldURI {
        RuleId = "RuleId",
        DisplayName = "DisplayName",
        Priority = "Priority",
        IsNotSupported = "IsNotSupported",
        Actions = "Actions",
        ConditionCategories = "Condition:Categories",
        ConditionContainsBodyStrings = "Condition:ContainsBodyStrings",
        ConditionContainsHeaderStrings = "Condition:ContainsHeaderStrings",
        ConditionContainsRecipientStrings = "Condition:ContainsRecipientStrings",
        ConditionContainsSenderStrings = "Condition:ContainsSenderStrings",
        ConditionContainsSubjectOrBodyStrings = "Condition:ContainsSubjectOrBodyStrings",
        ConditionContainsSubjectStrings = "Condition:ContainsSubjectStrings",
        ConditionFlaggedForAction = "Condition:FlaggedForAction",
        ConditionFromAddresses = "Condition:FromAddresses",
        ConditionFromConnectedAccounts = "Condition:FromConnectedAccounts",
        ConditionHasAttachments = "Condition:HasAttachments",
        ConditionImportance = "Condition:Importance",
        ConditionIsApprovalRequest = "Condition:IsApprovalRequest",
        ConditionIsAutomaticForward = "Condition:IsAutomaticForward",
        ConditionIsAutomaticReply = "Condition:IsAutomaticReply",
        ConditionIsEncrypted = "Condition:IsEncrypted",
        ConditionIsMeetingRequest = "Condition:IsMeetingRequest",
        ConditionIsMeetingResponse = "Condition:IsMeetingResponse",
        ConditionIsNDR = "Condition:IsNDR",
        ConditionIsPermissionControlled = "Condition:IsPermissionControlled",
        ConditionIsReadReceipt = "Condition:IsReadReceipt",
        ConditionIsSigned = "Condition:IsSigned",
        ConditionIsVoicemail = "Condition:IsVoicemail",
        ConditionItemClasses = "Condition:ItemClasses",
        ConditionMessageClassifications = "Condition:MessageClassifications",
        ConditionNotSentToMe = "Condition:NotSentToMe",
        ConditionSentCcMe = "Condition:SentCcMe",
        ConditionSentOnlyToMe = "Condition:SentOnlyToMe",
        ConditionSentToAddresses = "Condition:SentToAddresses",
        ConditionSentToMe = "Condition:SentToMe",
        ConditionSentToOrCcMe = "Condition:SentToOrCcMe",
        ConditionSensitivity = "Condition:Sensitivity",
        ConditionWithinDateRange = "Condition:WithinDateRange",
        ConditionWithinSizeRange = "Condition:WithinSizeRange",
        ExceptionCategories = "Exception:Categories",
        ExceptionContainsBodyStrings = "Exception:ContainsBodyStrings",
        ExceptionContainsHeaderStrings = "Exception:ContainsHeaderStrings",
        ExceptionContainsRecipientStrings = "Exception:ContainsRecipientStrings",
        ExceptionContainsSenderStrings = "Exception:ContainsSenderStrings",
        ExceptionContainsSubjectOrBodyStrings = "Exception:ContainsSubjectOrBodyStrings",
        ExceptionContainsSubjectStrings = "Exception:ContainsSubjectStrings",
        ExceptionFlaggedForAction = "Exception:FlaggedForAction",
        ExceptionFromAddresses = "Exception:FromAddresses",
        ExceptionFromConnectedAccounts = "Exception:FromConnectedAccounts",
        ExceptionHasAttachments = "Exception:HasAttachments",
        ExceptionImportance = "Exception:Importance",
        ExceptionIsApprovalRequest = "Exception:IsApprovalRequest",
        ExceptionIsAutomaticForward = "Exception:IsAutomaticForward",
        ExceptionIsAutomaticReply = "Exception:IsAutomaticReply",
        ExceptionIsEncrypted = "Exception:IsEncrypted",
        ExceptionIsMeetingRequest = "Exception:IsMeetingRequest",
        ExceptionIsMeetingResponse = "Exception:IsMeetingResponse",
        ExceptionIsNDR = "Exception:IsNDR",
        ExceptionIsPermissionControlled = "Exception:IsPermissionControlled",
        ExceptionIsReadReceipt = "Exception:IsReadReceipt",
        ExceptionIsSigned = "Exception:IsSigned",
        ExceptionIsVoicemail = "Exception:IsVoicemail",
        ExceptionItemClasses = "Exception:ItemClasses",
        ExceptionMessageClassifications = "Exception:MessageClassifications",
        ExceptionNotSentToMe = "Exception:NotSentToMe",
        ExceptionSentCcMe = "Exception:SentCcMe",
        ExceptionSentOnlyToMe = "Exception:SentOnlyToMe",
        ExceptionSentToAddresses = "Exception:SentToAddresses",
        ExceptionSentToMe = "Exception:SentToMe",
        ExceptionSentToOrCcMe = "Exception:SentToOrCcMe",
        ExceptionSensitivity = "Exception:Sensitivity",
        ExceptionWithinDateRange = "Exception:WithinDateRange",
        ExceptionWithinSizeRange = "Exception:WithinSizeRange",
        ActionAssignCategories = "Action:AssignCategories",
        ActionCopyToFolder = "Action:CopyToFolder",
        ActionDelete = "Action:Delete",
        ActionForwardAsAttachmentToRecipients = "Action:ForwardAsAttachmentToRecipients",
        ActionForwardToRecipients = "Action:ForwardToRecipients",
        ActionMarkImportance = "Action:MarkImportance",
        ActionMarkAsRead = "Action:MarkAsRead",
        ActionMoveToFolder = "Action:MoveToFolder",
        ActionPermanentDelete = "Action:PermanentDelete",
        ActionRedirectToRecipients = "Action:RedirectToRecipients",
        ActionSendSMSAlertToRecipients = "Action:SendSMSAlertToRecipients",
        ActionServerReplyWithMessage = "Action:ServerReplyWithMessage",
        ActionStopProcessingRules = "Action:StopProcessingRules",
        IsEnabled = "IsEnabled",
        IsInError = "IsInError",
        Conditions = "Conditions",
        Exceptions = "Exceptions",
    }
}

enumeration! {
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/errorcode-rulevalidationerrortype>
    pub enum RuleValidationErrorCode {
        ADOperationFailure = "ADOperationFailure",
        ConnectedAccountNotFound = "ConnectedAccountNotFound",
        CreateWithRuleId = "CreateWithRuleId",
        EmptyValueFound = "EmptyValueFound",
        DuplicatedPriority = "DuplicatedPriority",
        DuplicatedOperationOnTheSameRule = "DuplicatedOperationOnTheSameRule",
        FolderDoesNotExist = "FolderDoesNotExist",
        InvalidAddress = "InvalidAddress",
        InvalidDateRange = "InvalidDateRange",
        InvalidFolderId = "InvalidFolderId",
        InvalidSizeRange = "InvalidSizeRange",
        InvalidValue = "InvalidValue",
        MessageClassificationNotFound = "MessageClassificationNotFound",
        MissingAction = "MissingAction",
        MissingParameter = "MissingParameter",
        MissingRangeValue = "MissingRangeValue",
        NotSettable = "NotSettable",
        RecipientDoesNotExist = "RecipientDoesNotExist",
        RuleNotFound = "RuleNotFound",
        SizeLessThanZero = "SizeLessThanZero",
        StringValueTooBig = "StringValueTooBig",
        UnsupportedAddress = "UnsupportedAddress",
        UnexpectedError = "UnexpectedError",
        UnsupportedRule = "UnsupportedRule",
    }
}

enumeration! {
    /// The follow-up flag a message must carry.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/flaggedforaction>
    pub enum FlaggedForAction {
        Any = "Any",
        Call = "Call",
        DoNotForward = "DoNotForward",
        FollowUp = "FollowUp",
        Fyi = "FYI",
        Forward = "Forward",
        NoResponseNecessary = "NoResponseNecessary",
        Read = "Read",
        Reply = "Reply",
        ReplyToAll = "ReplyToAll",
        Review = "Review",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        test_utils::{assert_deserialized_content, assert_round_trip, assert_serialized_content},
        BaseFolderId, DistinguishedFolderId, DistinguishedFolderIdName, Enumeration,
    };

    #[test]
    fn move_rule() {
        let rule = Rule {
            display_name: "Newsletters".into(),
            priority: 1,
            is_enabled: true,
            conditions: Some(RulePredicates {
                contains_subject_strings: Some(["newsletter"].into_iter().collect()),
                is_ndr: Some(false),
                ..Default::default()
            }),
            actions: Some(RuleActions {
                move_to_folder: Some(TargetFolderId {
                    folder_id: BaseFolderId::DistinguishedFolderId(DistinguishedFolderId {
                        id: DistinguishedFolderIdName::Inbox,
                        change_key: None,
                        mailbox: None,
                    }),
                }),
                stop_processing_rules: Some(true),
                ..Default::default()
            }),
            ..Default::default()
        };

        let expected = r#"<Rule><DisplayName>Newsletters</DisplayName><Priority>1</Priority><IsEnabled>true</IsEnabled><Conditions><ContainsSubjectStrings><String>newsletter</String></ContainsSubjectStrings><IsNDR>false</IsNDR></Conditions><Actions><MoveToFolder><DistinguishedFolderId Id="inbox"/></MoveToFolder><StopProcessingRules>true</StopProcessingRules></Actions></Rule>"#;

        assert_round_trip(rule, "Rule", expected);
    }

    #[test]
    fn validation_error_field_uri() {
        assert_eq!(
            RuleFieldURI::from_value("Condition:SentToMe").unwrap(),
            RuleFieldURI::ConditionSentToMe
        );

        let xml = r#"<t:RuleOperationErrors><t:RuleOperationError><t:OperationIndex>0</t:OperationIndex><t:ValidationErrors><t:Error><t:FieldURI>Condition:SentToMe</t:FieldURI><t:ErrorCode>InvalidValue</t:ErrorCode><t:ErrorMessage>Bad value</t:ErrorMessage><t:FieldValue>maybe</t:FieldValue></t:Error></t:ValidationErrors></t:RuleOperationError></t:RuleOperationErrors>"#;

        let error = RuleValidationError {
            field_uri: RuleFieldURI::ConditionSentToMe,
            error_code: RuleValidationErrorCode::InvalidValue,
            error_message: "Bad value".into(),
            field_value: "maybe".into(),
        };

        assert_deserialized_content(
            xml,
            ArrayOfRuleOperationErrors {
                rule_operation_error: vec![RuleOperationError {
                    operation_index: 0,
                    validation_errors: ArrayOfRuleValidationErrors {
                        errors: vec![error.clone()],
                    },
                }],
            },
        );

        assert_serialized_content(
            &error,
            "Error",
            "<Error><FieldURI>Condition:SentToMe</FieldURI><ErrorCode>InvalidValue</ErrorCode><ErrorMessage>Bad value</ErrorMessage><FieldValue>maybe</FieldValue></Error>",
        );
    }

    #[test]
    fn operations_keep_order() {
        let xml = r#"<Operations><DeleteRuleOperation><RuleId>AQAAAAAA</RuleId></DeleteRuleOperation><CreateRuleOperation><Rule><DisplayName>Flag boss</DisplayName><Priority>2</Priority><IsEnabled>false</IsEnabled></Rule></CreateRuleOperation></Operations>"#;

        let expected = ArrayOfRuleOperations {
            inner: vec![
                RuleOperation::DeleteRuleOperation(DeleteRuleOperation {
                    rule_id: "AQAAAAAA".into(),
                }),
                RuleOperation::CreateRuleOperation(CreateRuleOperation {
                    rule: Rule {
                        display_name: "Flag boss".into(),
                        priority: 2,
                        is_enabled: false,
                        ..Default::default()
                    },
                }),
            ],
        };

        assert_deserialized_content(xml, expected);
    }
}
