use std::fmt;

/// Default principal that receives the auditor roles.
pub const DEFAULT_MEMBER: &str = "tamnoonpoc@tamnoon.io";

/// Kind of IAM principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MemberType {
    #[default]
    User,
    ServiceAccount,
    Group,
}

impl MemberType {
    pub const ALL: [MemberType; 3] =
        [MemberType::User, MemberType::ServiceAccount, MemberType::Group];

    /// Prefix used in the `--member` argument.
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberType::User => "user",
            MemberType::ServiceAccount => "serviceAccount",
            MemberType::Group => "group",
        }
    }

    /// Accepts full names case-insensitively plus the single-letter shorthands.
    pub fn from_name(name: &str) -> Option<MemberType> {
        match name.trim().to_lowercase().as_str() {
            "" | "u" | "user" => Some(MemberType::User),
            "s" | "serviceaccount" | "service-account" => Some(MemberType::ServiceAccount),
            "g" | "group" => Some(MemberType::Group),
            _ => None,
        }
    }
}

impl fmt::Display for MemberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Principal that receives every binding in a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub email: String,
    pub member_type: MemberType,
}

impl Member {
    pub fn new(email: impl Into<String>, member_type: MemberType) -> Self {
        Self { email: email.into(), member_type }
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.member_type, self.email)
    }
}
