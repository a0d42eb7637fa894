//! Staff members are not stored locally. They are read from the identity directory
//! each time they are listed.

use std::{collections::HashSet, time::Duration};

use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::{
    error::{ApiError, Error},
    schema::StaffMember,
};

const GIVEN_NAME: &str = "given_name";
const FAMILY_NAME: &str = "family_name";
const PAYROLL_NUMBER: &str = "custom:payrollNumber";
const MAX_DIRECTORY_PAGES: usize = 1000;

#[derive(Debug, Clone)]
pub enum StaffDirectory {
    /// Fixed roster, usually from configuration.
    Static(Vec<StaffMember>),
    Remote(RemoteDirectory),
}

#[derive(Debug, Clone)]
pub struct RemoteDirectory {
    client: Client,
    url: Url,
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ListUsersResp {
    #[serde(default)]
    users: Vec<DirectoryUser>,
    #[serde(default)]
    pagination_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DirectoryUser {
    #[serde(default)]
    attributes: Vec<UserAttribute>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct UserAttribute {
    name: String,
    #[serde(default)]
    value: String,
}

impl DirectoryUser {
    fn attribute(&self, name: &str) -> String {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.clone())
            .unwrap_or_default()
    }

    fn into_staff_member(self) -> StaffMember {
        StaffMember {
            first_name: self.attribute(GIVEN_NAME),
            last_name: self.attribute(FAMILY_NAME),
            payroll_number: self.attribute(PAYROLL_NUMBER),
        }
    }
}

impl RemoteDirectory {
    pub fn new(url: Url, token: Option<String>, timeout: Duration) -> crate::error::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url, token })
    }

    async fn list_users(&self) -> crate::error::Result<Vec<StaffMember>> {
        let mut members = Vec::new();
        let mut pagination_token: Option<String> = None;
        let mut seen_tokens = HashSet::new();
        for _ in 0..MAX_DIRECTORY_PAGES {
            let mut url = self.url.clone();
            if let Some(ref t) = pagination_token {
                url.query_pairs_mut().append_pair("pagination_token", t);
            }
            let mut req = self.client.get(url);
            if let Some(ref token) = self.token {
                req = req.bearer_auth(token);
            }
            let resp: ListUsersResp = req.send().await?.error_for_status()?.json().await?;
            members.extend(resp.users.into_iter().map(DirectoryUser::into_staff_member));
            match resp.pagination_token {
                Some(t) if !t.is_empty() => {
                    if !seen_tokens.insert(t.clone()) {
                        return Err(Error::Custom(format!(
                            "staff directory repeated pagination token {t}"
                        )));
                    }
                    pagination_token = Some(t);
                }
                _ => {
                    tracing::debug!("Fetched {} users from the staff directory", members.len());
                    return Ok(members);
                }
            }
        }
        Err(Error::Custom(format!(
            "staff directory returned more than {MAX_DIRECTORY_PAGES} pages"
        )))
    }
}

impl StaffDirectory {
    async fn fetch(&self) -> crate::error::Result<Vec<StaffMember>> {
        match self {
            StaffDirectory::Static(members) => Ok(members.clone()),
            StaffDirectory::Remote(remote) => remote.list_users().await,
        }
    }
}

/// Numeric payroll numbers first, in numeric order, then the rest lexicographically.
fn payroll_key(payroll_number: &str) -> (u8, u64, String) {
    match payroll_number.trim().parse::<u64>() {
        Ok(n) => (0, n, String::new()),
        Err(_) => (1, 0, payroll_number.to_string()),
    }
}

pub async fn list_staff_members(
    directory: &StaffDirectory,
) -> crate::error::Result<Vec<StaffMember>> {
    let mut members = directory.fetch().await?;
    if members.is_empty() {
        return Err(ApiError::NotFound("Staff members".to_string()).into());
    }
    members.sort_by_cached_key(|m| payroll_key(&m.payroll_number));
    Ok(members)
}
