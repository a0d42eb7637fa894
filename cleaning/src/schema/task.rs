use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{entity::cleaning_task_lists as TaskList, error::ApiError};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateTaskListReq {
    pub template_list_id: i32,
    /// Calendar date as `YYYY-MM-DD`, or an RFC 3339 timestamp.
    pub date: String,
    #[serde(default)]
    pub staff_member_id: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TaskListInfo {
    pub id: i32,
    pub date: Date,
    pub manager_signature: Option<String>,
    pub staff_member_signature: Option<String>,
    pub staff_member_id: Option<i32>,
}

impl From<TaskList::Model> for TaskListInfo {
    fn from(list: TaskList::Model) -> Self {
        Self {
            id: list.id,
            date: list.date,
            manager_signature: list.manager_signature,
            staff_member_signature: list.staff_member_signature,
            staff_member_id: list.staff_member_id,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, FromQueryResult)]
pub struct CleaningTaskInfo {
    pub id: i32,
    pub description: String,
    pub completed: bool,
    pub cleaning_task_list_id: i32,
    pub area_id: i32,
    pub area_description: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TaskListView {
    #[serde(flatten)]
    pub list: TaskListInfo,
    pub tasks: Vec<CleaningTaskInfo>,
}

/// Raw body of a request adding a single task to a task list.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct AddTaskReq {
    #[serde(default)]
    pub template_id: Option<i32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub area_id: Option<i32>,
    #[serde(default)]
    pub area_description: Option<String>,
}

/// The three accepted ways of creating a task outside list materialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewCleaningTask {
    FromTemplate {
        template_id: i32,
    },
    WithExistingArea {
        description: String,
        area_id: i32,
    },
    WithNewArea {
        description: String,
        area_description: String,
    },
}

impl TryFrom<AddTaskReq> for NewCleaningTask {
    type Error = ApiError;

    fn try_from(req: AddTaskReq) -> Result<Self, Self::Error> {
        match req {
            AddTaskReq {
                template_id: Some(template_id),
                description: None,
                area_id: None,
                area_description: None,
            } => Ok(NewCleaningTask::FromTemplate { template_id }),
            AddTaskReq {
                template_id: None,
                description: Some(description),
                area_id: Some(area_id),
                area_description: None,
            } => Ok(NewCleaningTask::WithExistingArea {
                description,
                area_id,
            }),
            AddTaskReq {
                template_id: None,
                description: Some(description),
                area_id: None,
                area_description: Some(area_description),
            } => Ok(NewCleaningTask::WithNewArea {
                description,
                area_description,
            }),
            _ => Err(ApiError::InvalidRequest(
                "expected either template_id, description with area_id, or description with area_description".to_string(),
            )),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SignatureReq {
    pub signature: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AssignStaffMemberReq {
    pub staff_member_id: i32,
}
