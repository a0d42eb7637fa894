mod staff;
mod task;
mod template;

pub use staff::*;
pub use task::*;
pub use template::*;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct CreatedResp {
    pub id: i32,
}
