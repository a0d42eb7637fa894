use serde::{Deserialize, Serialize};

/// A member of staff as projected from the identity directory.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct StaffMember {
    pub first_name: String,
    pub last_name: String,
    pub payroll_number: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StaffMembersResp {
    pub staff_members: Vec<StaffMember>,
}
