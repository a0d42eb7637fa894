//! `SeaORM` entities of the cleaning module

pub mod areas;
pub mod cleaning_task_lists;
pub mod cleaning_task_template_lists;
pub mod cleaning_task_templates;
pub mod cleaning_tasks;
pub mod template_list_templates;
