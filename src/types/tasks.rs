/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use crate::{ArrayOfStrings, DateTime, TaskRecurrence};

item_record! {
    /// A task.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/task>
    pub struct TaskType {
        /// The actual amount of work spent on the task, in minutes.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub actual_work: Option<i32>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub assigned_time: Option<DateTime>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub billing_information: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub change_count: Option<i32>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub companies: Option<ArrayOfStrings>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub complete_date: Option<DateTime>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub contacts: Option<ArrayOfStrings>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub delegation_state: Option<TaskDelegateState>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub delegator: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub due_date: Option<DateTime>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub is_assignment_editable: Option<i32>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub is_complete: Option<bool>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub is_recurring: Option<bool>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub is_team_task: Option<bool>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub mileage: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub owner: Option<String>,

        /// How much of the task is done, from 0 to 100.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub percent_complete: Option<f64>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub recurrence: Option<TaskRecurrence>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub start_date: Option<DateTime>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub status: Option<TaskStatus>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub status_description: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub total_work: Option<i32>,
    }
}

enumeration! {
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/status>
    pub enum TaskStatus {
        NotStarted = "NotStarted",
        InProgress = "InProgress",
        Completed = "Completed",
        WaitingOnOthers = "WaitingOnOthers",
        Deferred = "Deferred",
    }
}

enumeration! {
    /// The state of a delegated task.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/delegationstate>
    pub enum TaskDelegateState {
        NoMatch = "NoMatch",
        OwnNew = "OwnNew",
        Owned = "Owned",
        Accepted = "Accepted",
        Declined = "Declined",
        Max = "Max",
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;
    use crate::{from_xml, test_utils::assert_round_trip, Item};

    #[test]
    fn only_populated_fields_are_written() {
        let task = TaskType {
            subject: Some("Buy milk".into()),
            due_date: Some(datetime!(2024-05-01 17:00 UTC).into()),
            ..Default::default()
        };

        let expected = "<Task><Subject>Buy milk</Subject><DueDate>2024-05-01T17:00:00Z</DueDate></Task>";

        assert_round_trip(task, "Task", expected);
    }

    #[test]
    fn task_status_and_progress() {
        let xml = r#"<t:Task xmlns:t="http://schemas.microsoft.com/exchange/services/2006/types"><t:Subject>Report</t:Subject><t:PercentComplete>50</t:PercentComplete><t:Status>InProgress</t:Status></t:Task>"#;

        match from_xml::<Item>(xml).unwrap() {
            Item::Task(task) => {
                assert_eq!(task.percent_complete, Some(50.0));
                assert_eq!(task.status, Some(TaskStatus::InProgress));
                assert_eq!(task.due_date, None);
            }

            other => panic!("expected a task, got {other:?}"),
        }
    }
}
