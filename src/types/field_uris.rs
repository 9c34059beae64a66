/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Well-known identifiers for addressable properties.
//!
//! These are the values of the `FieldURI` attribute used to name a property
//! in shapes, restrictions, sort orders and update requests.

enumeration! {
    /// An identifier for a property which isn't indexed, such as an item's
    /// subject or a calendar item's start time.
    ///
    /// Variants are named after their literal, with the property class
    /// prefix folded in, so `calendar:Start` becomes `CalendarStart`.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/fielduri>
    pub enum UnindexedFieldURI {
        FolderFolderId = "folder:FolderId",
        FolderParentFolderId = "folder:ParentFolderId",
        FolderDisplayName = "folder:DisplayName",
        FolderUnreadCount = "folder:UnreadCount",
        FolderTotalCount = "folder:TotalCount",
        FolderChildFolderCount = "folder:ChildFolderCount",
        FolderFolderClass = "folder:FolderClass",
        FolderSearchParameters = "folder:SearchParameters",
        FolderManagedFolderInformation = "folder:ManagedFolderInformation",
        FolderPermissionSet = "folder:PermissionSet",
        FolderEffectiveRights = "folder:EffectiveRights",
        FolderSharingEffectiveRights = "folder:SharingEffectiveRights",
        FolderDistinguishedFolderId = "folder:DistinguishedFolderId",
        FolderPolicyTag = "folder:PolicyTag",
        FolderArchiveTag = "folder:ArchiveTag",
        FolderReplicaList = "folder:ReplicaList",
        ItemMimeContent = "item:MimeContent",
        ItemItemId = "item:ItemId",
        ItemParentFolderId = "item:ParentFolderId",
        ItemItemClass = "item:ItemClass",
        ItemSubject = "item:Subject",
        ItemSensitivity = "item:Sensitivity",
        ItemBody = "item:Body",
        ItemAttachments = "item:Attachments",
        ItemDateTimeReceived = "item:DateTimeReceived",
        ItemSize = "item:Size",
        ItemCategories = "item:Categories",
        ItemHasAttachments = "item:HasAttachments",
        ItemImportance = "item:Importance",
        ItemInReplyTo = "item:InReplyTo",
        ItemInternetMessageHeaders = "item:InternetMessageHeaders",
        ItemIsAssociated = "item:IsAssociated",
        ItemIsDraft = "item:IsDraft",
        ItemIsFromMe = "item:IsFromMe",
        ItemIsResend = "item:IsResend",
        ItemIsSubmitted = "item:IsSubmitted",
        ItemIsUnmodified = "item:IsUnmodified",
        ItemDateTimeSent = "item:DateTimeSent",
        ItemDateTimeCreated = "item:DateTimeCreated",
        ItemResponseObjects = "item:ResponseObjects",
        ItemReminderDueBy = "item:ReminderDueBy",
        ItemReminderIsSet = "item:ReminderIsSet",
        ItemReminderNextTime = "item:ReminderNextTime",
        ItemReminderMinutesBeforeStart = "item:ReminderMinutesBeforeStart",
        ItemDisplayTo = "item:DisplayTo",
        ItemDisplayCc = "item:DisplayCc",
        ItemCulture = "item:Culture",
        ItemEffectiveRights = "item:EffectiveRights",
        ItemLastModifiedName = "item:LastModifiedName",
        ItemLastModifiedTime = "item:LastModifiedTime",
        ItemConversationId = "item:ConversationId",
        ItemUniqueBody = "item:UniqueBody",
        ItemFlag = "item:Flag",
        ItemStoreEntryId = "item:StoreEntryId",
        ItemInstanceKey = "item:InstanceKey",
        ItemNormalizedBody = "item:NormalizedBody",
        ItemEntityExtractionResult = "item:EntityExtractionResult",
        ItemPolicyTag = "item:PolicyTag",
        ItemArchiveTag = "item:ArchiveTag",
        ItemRetentionDate = "item:RetentionDate",
        ItemPreview = "item:Preview",
        ItemNextPredictedAction = "item:NextPredictedAction",
        ItemGroupingAction = "item:GroupingAction",
        ItemPredictedActionReasons = "item:PredictedActionReasons",
        ItemIsClutter = "item:IsClutter",
        ItemRightsManagementLicenseData = "item:RightsManagementLicenseData",
        ItemBlockStatus = "item:BlockStatus",
        ItemHasBlockedImages = "item:HasBlockedImages",
        ItemWebClientReadFormQueryString = "item:WebClientReadFormQueryString",
        ItemWebClientEditFormQueryString = "item:WebClientEditFormQueryString",
        ItemTextBody = "item:TextBody",
        ItemIconIndex = "item:IconIndex",
        ItemMimeContentUTF8 = "item:MimeContentUTF8",
        MessageConversationIndex = "message:ConversationIndex",
        MessageConversationTopic = "message:ConversationTopic",
        MessageInternetMessageId = "message:InternetMessageId",
        MessageIsRead = "message:IsRead",
        MessageIsResponseRequested = "message:IsResponseRequested",
        MessageIsReadReceiptRequested = "message:IsReadReceiptRequested",
        MessageIsDeliveryReceiptRequested = "message:IsDeliveryReceiptRequested",
        MessageReceivedBy = "message:ReceivedBy",
        MessageReceivedRepresenting = "message:ReceivedRepresenting",
        MessageReferences = "message:References",
        MessageReplyTo = "message:ReplyTo",
        MessageFrom = "message:From",
        MessageSender = "message:Sender",
        MessageToRecipients = "message:ToRecipients",
        MessageCcRecipients = "message:CcRecipients",
        MessageBccRecipients = "message:BccRecipients",
        MessageApprovalRequestData = "message:ApprovalRequestData",
        MessageVotingInformation = "message:VotingInformation",
        MessageReminderMessageData = "message:ReminderMessageData",
        MeetingAssociatedCalendarItemId = "meeting:AssociatedCalendarItemId",
        MeetingIsDelegated = "meeting:IsDelegated",
        MeetingIsOutOfDate = "meeting:IsOutOfDate",
        MeetingHasBeenProcessed = "meeting:HasBeenProcessed",
        MeetingResponseType = "meeting:ResponseType",
        MeetingProposedStart = "meeting:ProposedStart",
        MeetingProposedEnd = "meeting:ProposedEnd",
        MeetingRequestMeetingRequestType = "meetingRequest:MeetingRequestType",
        MeetingRequestIntendedFreeBusyStatus = "meetingRequest:IntendedFreeBusyStatus",
        MeetingRequestChangeHighlights = "meetingRequest:ChangeHighlights",
        CalendarStart = "calendar:Start",
        CalendarEnd = "calendar:End",
        CalendarOriginalStart = "calendar:OriginalStart",
        CalendarStartWallClock = "calendar:StartWallClock",
        CalendarEndWallClock = "calendar:EndWallClock",
        CalendarStartTimeZoneId = "calendar:StartTimeZoneId",
        CalendarEndTimeZoneId = "calendar:EndTimeZoneId",
        CalendarIsAllDayEvent = "calendar:IsAllDayEvent",
        CalendarLegacyFreeBusyStatus = "calendar:LegacyFreeBusyStatus",
        CalendarLocation = "calendar:Location",
        CalendarEnhancedLocation = "calendar:EnhancedLocation",
        CalendarWhen = "calendar:When",
        CalendarIsMeeting = "calendar:IsMeeting",
        CalendarIsCancelled = "calendar:IsCancelled",
        CalendarIsRecurring = "calendar:IsRecurring",
        CalendarMeetingRequestWasSent = "calendar:MeetingRequestWasSent",
        CalendarIsResponseRequested = "calendar:IsResponseRequested",
        CalendarCalendarItemType = "calendar:CalendarItemType",
        CalendarMyResponseType = "calendar:MyResponseType",
        CalendarOrganizer = "calendar:Organizer",
        CalendarRequiredAttendees = "calendar:RequiredAttendees",
        CalendarOptionalAttendees = "calendar:OptionalAttendees",
        CalendarResources = "calendar:Resources",
        CalendarConflictingMeetingCount = "calendar:ConflictingMeetingCount",
        CalendarAdjacentMeetingCount = "calendar:AdjacentMeetingCount",
        CalendarConflictingMeetings = "calendar:ConflictingMeetings",
        CalendarAdjacentMeetings = "calendar:AdjacentMeetings",
        CalendarDuration = "calendar:Duration",
        CalendarTimeZone = "calendar:TimeZone",
        CalendarAppointmentReplyTime = "calendar:AppointmentReplyTime",
        CalendarAppointmentSequenceNumber = "calendar:AppointmentSequenceNumber",
        CalendarAppointmentState = "calendar:AppointmentState",
        CalendarRecurrence = "calendar:Recurrence",
        CalendarFirstOccurrence = "calendar:FirstOccurrence",
        CalendarLastOccurrence = "calendar:LastOccurrence",
        CalendarModifiedOccurrences = "calendar:ModifiedOccurrences",
        CalendarDeletedOccurrences = "calendar:DeletedOccurrences",
        CalendarMeetingTimeZone = "calendar:MeetingTimeZone",
        CalendarConferenceType = "calendar:ConferenceType",
        CalendarAllowNewTimeProposal = "calendar:AllowNewTimeProposal",
        CalendarIsOnlineMeeting = "calendar:IsOnlineMeeting",
        CalendarMeetingWorkspaceUrl = "calendar:MeetingWorkspaceUrl",
        CalendarNetShowUrl = "calendar:NetShowUrl",
        CalendarUID = "calendar:UID",
        CalendarRecurrenceId = "calendar:RecurrenceId",
        CalendarDateTimeStamp = "calendar:DateTimeStamp",
        CalendarStartTimeZone = "calendar:StartTimeZone",
        CalendarEndTimeZone = "calendar:EndTimeZone",
        CalendarJoinOnlineMeetingUrl = "calendar:JoinOnlineMeetingUrl",
        CalendarOnlineMeetingSettings = "calendar:OnlineMeetingSettings",
        CalendarIsOrganizer = "calendar:IsOrganizer",
        TaskActualWork = "task:ActualWork",
        TaskAssignedTime = "task:AssignedTime",
        TaskBillingInformation = "task:BillingInformation",
        TaskChangeCount = "task:ChangeCount",
        TaskCompanies = "task:Companies",
        TaskCompleteDate = "task:CompleteDate",
        TaskContacts = "task:Contacts",
        TaskDelegationState = "task:DelegationState",
        TaskDelegator = "task:Delegator",
        TaskDueDate = "task:DueDate",
        TaskIsAssignmentEditable = "task:IsAssignmentEditable",
        TaskIsComplete = "task:IsComplete",
        TaskIsRecurring = "task:IsRecurring",
        TaskIsTeamTask = "task:IsTeamTask",
        TaskMileage = "task:Mileage",
        TaskOwner = "task:Owner",
        TaskPercentComplete = "task:PercentComplete",
        TaskRecurrence = "task:Recurrence",
        TaskStartDate = "task:StartDate",
        TaskStatus = "task:Status",
        TaskStatusDescription = "task:StatusDescription",
        TaskTotalWork = "task:TotalWork",
        ContactsAlias = "contacts:Alias",
        ContactsAssistantName = "contacts:AssistantName",
        ContactsBirthday = "contacts:Birthday",
        ContactsBusinessHomePage = "contacts:BusinessHomePage",
        ContactsChildren = "contacts:Children",
        ContactsCompanies = "contacts:Companies",
        ContactsCompanyName = "contacts:CompanyName",
        ContactsCompleteName = "contacts:CompleteName",
        ContactsContactSource = "contacts:ContactSource",
        ContactsCulture = "contacts:Culture",
        ContactsDepartment = "contacts:Department",
        ContactsDisplayName = "contacts:DisplayName",
        ContactsDirectoryId = "contacts:DirectoryId",
        ContactsDirectReports = "contacts:DirectReports",
        ContactsEmailAddresses = "contacts:EmailAddresses",
        ContactsFileAs = "contacts:FileAs",
        ContactsFileAsMapping = "contacts:FileAsMapping",
        ContactsGeneration = "contacts:Generation",
        ContactsGivenName = "contacts:GivenName",
        ContactsImAddresses = "contacts:ImAddresses",
        ContactsInitials = "contacts:Initials",
        ContactsJobTitle = "contacts:JobTitle",
        ContactsManager = "contacts:Manager",
        ContactsManagerMailbox = "contacts:ManagerMailbox",
        ContactsMiddleName = "contacts:MiddleName",
        ContactsMileage = "contacts:Mileage",
        ContactsMSExchangeCertificate = "contacts:MSExchangeCertificate",
        ContactsNickname = "contacts:Nickname",
        ContactsNotes = "contacts:Notes",
        ContactsOfficeLocation = "contacts:OfficeLocation",
        ContactsPhoneNumbers = "contacts:PhoneNumbers",
        ContactsPhoneticFullName = "contacts:PhoneticFullName",
        ContactsPhoneticFirstName = "contacts:PhoneticFirstName",
        ContactsPhoneticLastName = "contacts:PhoneticLastName",
        ContactsPhoto = "contacts:Photo",
        ContactsPhysicalAddresses = "contacts:PhysicalAddresses",
        ContactsPostalAddressIndex = "contacts:PostalAddressIndex",
        ContactsProfession = "contacts:Profession",
        ContactsSpouseName = "contacts:SpouseName",
        ContactsSurname = "contacts:Surname",
        ContactsWeddingAnniversary = "contacts:WeddingAnniversary",
        ContactsUserSMIMECertificate = "contacts:UserSMIMECertificate",
        ContactsHasPicture = "contacts:HasPicture",
        DistributionListMembers = "distributionlist:Members",
        PostItemPostedTime = "postitem:PostedTime",
        ConversationConversationId = "conversation:ConversationId",
        ConversationConversationTopic = "conversation:ConversationTopic",
        ConversationUniqueRecipients = "conversation:UniqueRecipients",
        ConversationGlobalUniqueRecipients = "conversation:GlobalUniqueRecipients",
        ConversationUniqueUnreadSenders = "conversation:UniqueUnreadSenders",
        ConversationGlobalUniqueUnreadSenders = "conversation:GlobalUniqueUnreadSenders",
        ConversationUniqueSenders = "conversation:UniqueSenders",
        ConversationGlobalUniqueSenders = "conversation:GlobalUniqueSenders",
        ConversationLastDeliveryTime = "conversation:LastDeliveryTime",
        ConversationGlobalLastDeliveryTime = "conversation:GlobalLastDeliveryTime",
        ConversationCategories = "conversation:Categories",
        ConversationGlobalCategories = "conversation:GlobalCategories",
        ConversationFlagStatus = "conversation:FlagStatus",
        ConversationGlobalFlagStatus = "conversation:GlobalFlagStatus",
        ConversationHasAttachments = "conversation:HasAttachments",
        ConversationGlobalHasAttachments = "conversation:GlobalHasAttachments",
        ConversationHasIrm = "conversation:HasIrm",
        ConversationGlobalHasIrm = "conversation:GlobalHasIrm",
        ConversationMessageCount = "conversation:MessageCount",
        ConversationGlobalMessageCount = "conversation:GlobalMessageCount",
        ConversationUnreadCount = "conversation:UnreadCount",
        ConversationGlobalUnreadCount = "conversation:GlobalUnreadCount",
        ConversationSize = "conversation:Size",
        ConversationGlobalSize = "conversation:GlobalSize",
        ConversationItemClasses = "conversation:ItemClasses",
        ConversationGlobalItemClasses = "conversation:GlobalItemClasses",
        ConversationImportance = "conversation:Importance",
        ConversationGlobalImportance = "conversation:GlobalImportance",
        ConversationItemIds = "conversation:ItemIds",
        ConversationGlobalItemIds = "conversation:GlobalItemIds",
        ConversationLastModifiedTime = "conversation:LastModifiedTime",
        ConversationInstanceKey = "conversation:InstanceKey",
        ConversationPreview = "conversation:Preview",
        ConversationGlobalParentFolderId = "conversation:GlobalParentFolderId",
        ConversationNextPredictedAction = "conversation:NextPredictedAction",
        ConversationGroupingAction = "conversation:GroupingAction",
        ConversationIconIndex = "conversation:IconIndex",
        ConversationGlobalIconIndex = "conversation:GlobalIconIndex",
        ConversationDraftItemIds = "conversation:DraftItemIds",
        ConversationHasClutter = "conversation:HasClutter",
    }
}

enumeration! {
    /// An identifier for a dictionary-valued property, e.g. a contact's phone
    /// numbers, whose members are addressed by a separate index.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/indexedfielduri>
    pub enum DictionaryURI {
        MessageInternetMessageHeader = "message:InternetMessageHeader",
        ContactsImAddress = "contacts:ImAddress",
        ContactsPhysicalAddressStreet = "contacts:PhysicalAddress:Street",
        ContactsPhysicalAddressCity = "contacts:PhysicalAddress:City",
        ContactsPhysicalAddressState = "contacts:PhysicalAddress:State",
        ContactsPhysicalAddressCountryOrRegion = "contacts:PhysicalAddress:CountryOrRegion",
        ContactsPhysicalAddressPostalCode = "contacts:PhysicalAddress:PostalCode",
        ContactsPhoneNumber = "contacts:PhoneNumber",
        ContactsEmailAddress = "contacts:EmailAddress",
        DistributionListMembersMember = "distributionlist:Members:Member",
    }
}

enumeration! {
    /// An identifier for a property of an attachment, recurrence or time zone
    /// which may appear in an error response as the cause of a failure.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/exceptionfielduri>
    pub enum ExceptionPropertyURI {
        AttachmentName = "attachment:Name",
        AttachmentContentType = "attachment:ContentType",
        AttachmentContent = "attachment:Content",
        RecurrenceMonth = "recurrence:Month",
        RecurrenceDayOfWeekIndex = "recurrence:DayOfWeekIndex",
        RecurrenceDaysOfWeek = "recurrence:DaysOfWeek",
        RecurrenceDayOfMonth = "recurrence:DayOfMonth",
        RecurrenceInterval = "recurrence:Interval",
        RecurrenceNumberOfOccurrences = "recurrence:NumberOfOccurrences",
        TimeZoneOffset = "timezone:Offset",
    }
}

impl UnindexedFieldURI {
    /// The class of entity this property belongs to, i.e. the part of the
    /// literal before the first colon.
    pub fn property_class(&self) -> &'static str {
        let value = crate::Enumeration::value(self);
        value.split_once(':').map_or(value, |(class, _)| class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{from_xml, Enumeration, PathToUnindexedField};

    #[test]
    fn literals_follow_the_schema() {
        assert_eq!(UnindexedFieldURI::ItemSubject.value(), "item:Subject");
        assert_eq!(UnindexedFieldURI::CalendarStart.value(), "calendar:Start");
        assert_eq!(
            UnindexedFieldURI::MeetingRequestMeetingRequestType.value(),
            "meetingRequest:MeetingRequestType"
        );
        assert_eq!(
            UnindexedFieldURI::DistributionListMembers.value(),
            "distributionlist:Members"
        );
        assert_eq!(
            DictionaryURI::ContactsPhysicalAddressCity.value(),
            "contacts:PhysicalAddress:City"
        );
        assert_eq!(
            ExceptionPropertyURI::TimeZoneOffset.value(),
            "timezone:Offset"
        );
    }

    #[test]
    fn property_class() {
        assert_eq!(UnindexedFieldURI::TaskDueDate.property_class(), "task");
        assert_eq!(
            UnindexedFieldURI::ConversationGlobalItemIds.property_class(),
            "conversation"
        );
    }

    #[test]
    fn unknown_field_uri_fails_decode() {
        assert!(UnindexedFieldURI::from_value("item:Subjects").is_err());
        assert!(UnindexedFieldURI::from_value("Item:Subject").is_err());

        let path: PathToUnindexedField = from_xml(r#"<FieldURI FieldURI="task:DueDate"/>"#).unwrap();
        assert_eq!(path.field_uri, UnindexedFieldURI::TaskDueDate);

        assert!(from_xml::<PathToUnindexedField>(r#"<FieldURI FieldURI="task:Due"/>"#).is_err());
    }
}
