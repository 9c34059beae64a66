/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};

use crate::{ArrayOfStrings, DateTime, EmailAddress, MailboxType};

item_record! {
    /// A contact in a mailbox or address book.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/contact>
    pub struct ContactItemType {
        /// The name under which the contact is filed.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub file_as: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub file_as_mapping: Option<FileAsMapping>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub display_name: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub given_name: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub initials: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub middle_name: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub nickname: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub complete_name: Option<CompleteName>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub company_name: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub email_addresses: Option<EmailAddressDictionary>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub physical_addresses: Option<PhysicalAddressDictionary>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub phone_numbers: Option<PhoneNumberDictionary>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub assistant_name: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub birthday: Option<DateTime>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub business_home_page: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub children: Option<ArrayOfStrings>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub companies: Option<ArrayOfStrings>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub contact_source: Option<ContactSource>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub department: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub generation: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub im_addresses: Option<ImAddressDictionary>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub job_title: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub manager: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub mileage: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub office_location: Option<String>,

        /// Which of the physical addresses is the postal address.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub postal_address_index: Option<PhysicalAddressIndex>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub profession: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub spouse_name: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub surname: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub wedding_anniversary: Option<DateTime>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub has_picture: Option<bool>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub phonetic_full_name: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub phonetic_first_name: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub phonetic_last_name: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub alias: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub notes: Option<String>,

        /// The base64-encoded contact photo.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub photo: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub directory_id: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub manager_mailbox: Option<crate::SingleRecipient>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub direct_reports: Option<crate::ArrayOfRecipients>,
    }
}

/// The parts of a contact's full name.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/completename>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct CompleteName {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub initials: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub yomi_first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub yomi_last_name: Option<String>,
}

/// The email addresses of a contact, keyed by slot.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/emailaddresses>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct EmailAddressDictionary {
    #[serde(default)]
    pub entry: Vec<EmailAddressDictionaryEntry>,
}

impl EmailAddressDictionary {
    /// Looks up the address stored in the given slot.
    pub fn get(&self, key: EmailAddressKey) -> Option<&EmailAddressDictionaryEntry> {
        self.entry.iter().find(|entry| entry.key == key)
    }
}

/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/entry-emailaddress>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct EmailAddressDictionaryEntry {
    #[serde(rename = "@Key")]
    pub key: EmailAddressKey,

    #[serde(rename = "@Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "@RoutingType", skip_serializing_if = "Option::is_none")]
    pub routing_type: Option<String>,

    #[serde(rename = "@MailboxType", skip_serializing_if = "Option::is_none")]
    pub mailbox_type: Option<MailboxType>,

    #[serde(rename = "$text", default)]
    pub address: String,
}

/// The postal addresses of a contact, keyed by kind.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/physicaladdresses>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PhysicalAddressDictionary {
    #[serde(default)]
    pub entry: Vec<PhysicalAddressDictionaryEntry>,
}

impl PhysicalAddressDictionary {
    pub fn get(&self, key: PhysicalAddressKey) -> Option<&PhysicalAddressDictionaryEntry> {
        self.entry.iter().find(|entry| entry.key == key)
    }
}

/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/entry-physicaladdress>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PhysicalAddressDictionaryEntry {
    #[serde(rename = "@Key")]
    pub key: PhysicalAddressKey,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_or_region: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

/// The phone numbers of a contact, keyed by kind.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/phonenumbers>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PhoneNumberDictionary {
    #[serde(default)]
    pub entry: Vec<PhoneNumberDictionaryEntry>,
}

impl PhoneNumberDictionary {
    pub fn get(&self, key: PhoneNumberKey) -> Option<&str> {
        self.entry
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.number.as_str())
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct PhoneNumberDictionaryEntry {
    #[serde(rename = "@Key")]
    pub key: PhoneNumberKey,

    #[serde(rename = "$text", default)]
    pub number: String,
}

/// The instant messaging addresses of a contact.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/imaddresses>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ImAddressDictionary {
    #[serde(default)]
    pub entry: Vec<ImAddressDictionaryEntry>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ImAddressDictionaryEntry {
    #[serde(rename = "@Key")]
    pub key: ImAddressKey,

    #[serde(rename = "$text", default)]
    pub address: String,
}

item_record! {
    /// A distribution list of contacts and mailboxes.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/distributionlist>
    pub struct DistributionListType {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub display_name: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub file_as: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub contact_source: Option<ContactSource>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub members: Option<Members>,
    }
}

/// The members of a distribution list.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/members-ex15websvcsotherref>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Members {
    #[serde(default)]
    pub member: Vec<Member>,
}

/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/member-ex15websvcsotherref>
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Member {
    #[serde(rename = "@Key", skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mailbox: Option<EmailAddress>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MemberStatus>,
}

enumeration! {
    /// How the display name of a contact is composed.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/fileasmapping>
    pub enum FileAsMapping {
        None = "None",
        LastCommaFirst = "LastCommaFirst",
        FirstSpaceLast = "FirstSpaceLast",
        Company = "Company",
        LastCommaFirstCompany = "LastCommaFirstCompany",
        CompanyLastFirst = "CompanyLastFirst",
        LastFirst = "LastFirst",
        LastFirstCompany = "LastFirstCompany",
        CompanyLastCommaFirst = "CompanyLastCommaFirst",
        LastFirstSuffix = "LastFirstSuffix",
        LastSpaceFirstCompany = "LastSpaceFirstCompany",
        CompanyLastSpaceFirst = "CompanyLastSpaceFirst",
        LastSpaceFirst = "LastSpaceFirst",
        DisplayName = "DisplayName",
        FirstName = "FirstName",
        LastFirstMiddleSuffix = "LastFirstMiddleSuffix",
        LastName = "LastName",
        Empty = "Empty",
    }
}

enumeration! {
    pub enum EmailAddressKey {
        EmailAddress1 = "EmailAddress1",
        EmailAddress2 = "EmailAddress2",
        EmailAddress3 = "EmailAddress3",
    }
}

enumeration! {
    pub enum PhysicalAddressKey {
        Home = "Home",
        Business = "Business",
        Other = "Other",
    }
}

enumeration! {
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/entry-phonenumber>
    pub enum PhoneNumberKey {
        AssistantPhone = "AssistantPhone",
        BusinessFax = "BusinessFax",
        BusinessPhone = "BusinessPhone",
        BusinessPhone2 = "BusinessPhone2",
        Callback = "Callback",
        CarPhone = "CarPhone",
        CompanyMainPhone = "CompanyMainPhone",
        HomeFax = "HomeFax",
        HomePhone = "HomePhone",
        HomePhone2 = "HomePhone2",
        Isdn = "Isdn",
        MobilePhone = "MobilePhone",
        OtherFax = "OtherFax",
        OtherTelephone = "OtherTelephone",
        Pager = "Pager",
        PrimaryPhone = "PrimaryPhone",
        RadioPhone = "RadioPhone",
        Telex = "Telex",
        TtyTddPhone = "TtyTddPhone",
    }
}

enumeration! {
    pub enum ImAddressKey {
        ImAddress1 = "ImAddress1",
        ImAddress2 = "ImAddress2",
        ImAddress3 = "ImAddress3",
    }
}

enumeration! {
    /// Where a contact is stored.
    pub enum ContactSource {
        ActiveDirectory = "ActiveDirectory",
        Store = "Store",
    }
}

enumeration! {
    pub enum PhysicalAddressIndex {
        None = "None",
        Home = "Home",
        Business = "Business",
        Other = "Other",
    }
}

enumeration! {
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/status-member>
    pub enum MemberStatus {
        Unrecognized = "Unrecognized",
        Normal = "Normal",
        Demoted = "Demoted",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_deserialized_content, assert_round_trip};

    #[test]
    fn contact_dictionaries() {
        let contact = ContactItemType {
            display_name: Some("Carol Smith".into()),
            email_addresses: Some(EmailAddressDictionary {
                entry: vec![EmailAddressDictionaryEntry {
                    key: EmailAddressKey::EmailAddress1,
                    address: "carol@example.org".into(),
                    ..Default::default()
                }],
            }),
            physical_addresses: Some(PhysicalAddressDictionary {
                entry: vec![PhysicalAddressDictionaryEntry {
                    key: PhysicalAddressKey::Business,
                    city: Some("Springfield".into()),
                    ..Default::default()
                }],
            }),
            phone_numbers: Some(PhoneNumberDictionary {
                entry: vec![PhoneNumberDictionaryEntry {
                    key: PhoneNumberKey::MobilePhone,
                    number: "555-0100".into(),
                }],
            }),
            surname: Some("Smith".into()),
            ..Default::default()
        };

        let expected = r#"<Contact><DisplayName>Carol Smith</DisplayName><EmailAddresses><Entry Key="EmailAddress1">carol@example.org</Entry></EmailAddresses><PhysicalAddresses><Entry Key="Business"><City>Springfield</City></Entry></PhysicalAddresses><PhoneNumbers><Entry Key="MobilePhone">555-0100</Entry></PhoneNumbers><Surname>Smith</Surname></Contact>"#;

        let numbers = contact.phone_numbers.as_ref().unwrap();
        assert_eq!(numbers.get(PhoneNumberKey::MobilePhone), Some("555-0100"));
        assert_eq!(numbers.get(PhoneNumberKey::HomePhone), None);

        assert_round_trip(contact, "Contact", expected);
    }

    #[test]
    fn distribution_list_members() {
        let xml = r#"<t:DistributionList><t:DisplayName>Team</t:DisplayName><t:Members><t:Member Key="AAAA"><t:Mailbox><t:Name>Dan</t:Name><t:EmailAddress>dan@example.org</t:EmailAddress><t:MailboxType>Mailbox</t:MailboxType></t:Mailbox><t:Status>Normal</t:Status></t:Member></t:Members></t:DistributionList>"#;

        let expected = DistributionListType {
            display_name: Some("Team".into()),
            members: Some(Members {
                member: vec![Member {
                    key: Some("AAAA".into()),
                    mailbox: Some(EmailAddress {
                        name: Some("Dan".into()),
                        email_address: Some("dan@example.org".into()),
                        mailbox_type: Some(MailboxType::Mailbox),
                        ..Default::default()
                    }),
                    status: Some(MemberStatus::Normal),
                }],
            }),
            ..Default::default()
        };

        assert_deserialized_content(xml, expected);
    }
}
