use std::ops::RangeInclusive;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::editors::{Capacity, ReducePolicy};
use crate::error::{AppError, AppResult};

pub const MEMBER_CAPACITY_CHOICES: RangeInclusive<usize> = 1..=4;
pub const MAX_NAME_CHARS: usize = 50;

const SELECT_SIZE_GUIDANCE: &str = "Please select a group size first.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub roll_no: String,
    pub email: String,
    pub contact: String,
}

#[derive(Debug, Clone, Default)]
pub struct MemberForm {
    pub first_name: String,
    pub last_name: String,
    pub roll_no: String,
    pub email: String,
    pub contact: String,
}

impl MemberForm {
    pub fn validate(&self) -> AppResult<()> {
        if self.first_name.trim().is_empty() {
            return Err(AppError::Validation("First name is required.".to_string()));
        }
        if self.first_name.chars().count() > MAX_NAME_CHARS {
            return Err(AppError::Validation(format!(
                "First name must be at most {MAX_NAME_CHARS} characters."
            )));
        }
        if self.last_name.trim().is_empty() {
            return Err(AppError::Validation("Last name is required.".to_string()));
        }
        if self.last_name.chars().count() > MAX_NAME_CHARS {
            return Err(AppError::Validation(format!(
                "Last name must be at most {MAX_NAME_CHARS} characters."
            )));
        }
        if self.roll_no.trim().is_empty() {
            return Err(AppError::Validation("Roll number is required.".to_string()));
        }
        if !is_valid_email(&self.email) {
            return Err(AppError::Validation("Invalid email address.".to_string()));
        }
        if !contact_pattern().is_match(&self.contact) {
            return Err(AppError::Validation(
                "Contact number must be 7-15 digits, optionally starting with '+'".to_string(),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Clone)]
pub enum GroupEvent {
    CapacitySet { limit: usize },
    CapacityReduced { limit: usize, removed: Vec<Member> },
    MemberAdded(Member),
    MemberRemoved(Member),
    MemberUpdated(Member),
}

#[derive(Debug)]
pub struct GroupEditor {
    group_name: String,
    capacity: Capacity,
    members: Vec<Member>,
    add_form_open: bool,
    reduce_policy: ReducePolicy,
}

impl Default for GroupEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl GroupEditor {
    pub fn new() -> Self {
        Self::with_reduce_policy(ReducePolicy::Truncate)
    }

    pub fn with_reduce_policy(reduce_policy: ReducePolicy) -> Self {
        Self {
            group_name: String::new(),
            capacity: Capacity::new(MEMBER_CAPACITY_CHOICES),
            members: Vec::new(),
            add_form_open: false,
            reduce_policy,
        }
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn group_name(&self) -> &str {
        &self.group_name
    }

    pub fn set_group_name(&mut self, name: &str) {
        self.group_name = name.to_string();
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity.limit()
    }

    pub fn is_full(&self) -> bool {
        self.capacity.is_full(self.members.len())
    }

    pub fn add_form_open(&self) -> bool {
        self.add_form_open
    }

    pub fn toggle_add_form(&mut self) -> AppResult<bool> {
        if !self.add_form_open {
            let limit = self
                .capacity
                .require("Please choose the number of group members first.")?;
            if self.members.len() >= limit {
                return Err(AppError::CapacityReached { limit });
            }
        }

        self.add_form_open = !self.add_form_open;
        Ok(self.add_form_open)
    }

    pub fn set_capacity(&mut self, limit: usize) -> AppResult<GroupEvent> {
        let limit = self.capacity.set(limit)?;

        let event = if self.members.len() > limit && self.reduce_policy == ReducePolicy::Truncate {
            let removed = self.members.split_off(limit);
            tracing::debug!(limit, removed = removed.len(), "group truncated to new limit");
            GroupEvent::CapacityReduced { limit, removed }
        } else {
            GroupEvent::CapacitySet { limit }
        };

        if self.members.len() >= limit {
            self.add_form_open = false;
        }

        Ok(event)
    }

    pub fn add(&mut self, form: MemberForm) -> AppResult<GroupEvent> {
        let limit = match self.capacity.require(SELECT_SIZE_GUIDANCE) {
            Ok(limit) => limit,
            Err(error) => {
                self.add_form_open = false;
                return Err(error);
            }
        };

        if self.members.len() >= limit {
            self.add_form_open = false;
            return Err(AppError::CapacityReached { limit });
        }

        form.validate()?;

        if self.roll_no_taken(&form.roll_no, None) {
            return Err(AppError::Conflict(format!(
                "A member with roll number \"{}\" already exists.",
                form.roll_no
            )));
        }

        let member = Member {
            id: Uuid::new_v4(),
            first_name: form.first_name,
            last_name: form.last_name,
            roll_no: form.roll_no,
            email: form.email,
            contact: form.contact,
        };
        self.members.push(member.clone());

        if self.members.len() >= limit {
            self.add_form_open = false;
        }

        tracing::debug!(member = %member.id, "member added");
        Ok(GroupEvent::MemberAdded(member))
    }

    pub fn remove(&mut self, id: Uuid) -> Option<GroupEvent> {
        let position = self.members.iter().position(|member| member.id == id)?;
        let member = self.members.remove(position);
        tracing::debug!(member = %member.id, "member removed");
        Some(GroupEvent::MemberRemoved(member))
    }

    pub fn update(&mut self, id: Uuid, form: MemberForm) -> AppResult<GroupEvent> {
        form.validate()?;

        if self.roll_no_taken(&form.roll_no, Some(id)) {
            return Err(AppError::Conflict(format!(
                "Another member with roll number \"{}\" already exists.",
                form.roll_no
            )));
        }

        let member = self
            .members
            .iter_mut()
            .find(|member| member.id == id)
            .ok_or_else(|| AppError::NotFound(format!("member '{id}'")))?;

        member.first_name = form.first_name;
        member.last_name = form.last_name;
        member.roll_no = form.roll_no;
        member.email = form.email;
        member.contact = form.contact;

        Ok(GroupEvent::MemberUpdated(member.clone()))
    }

    fn roll_no_taken(&self, roll_no: &str, exclude: Option<Uuid>) -> bool {
        self.members.iter().any(|member| {
            exclude != Some(member.id) && member.roll_no.eq_ignore_ascii_case(roll_no)
        })
    }
}

fn contact_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\+?\d{7,15}$").expect("contact pattern should compile"))
}

fn is_valid_email(value: &str) -> bool {
    let mut parts = value.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };

    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !value.contains(char::is_whitespace)
}
