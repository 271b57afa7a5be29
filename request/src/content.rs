use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Part {
    pub text: String,
}

impl Content {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Some(Role::User),
            parts: vec![Part { text: text.into() }],
        }
    }

    /// System instructions carry no role on the wire.
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: vec![Part { text: text.into() }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_content_serializes_with_role() {
        let json = serde_json::to_value(Content::user("hi")).unwrap();
        assert_eq!(json["role"], "user");
        assert_eq!(json["parts"][0]["text"], "hi");
    }

    #[test]
    fn system_content_omits_role() {
        let json = serde_json::to_value(Content::system("be brief")).unwrap();
        assert!(json.get("role").is_none());
        assert_eq!(json["parts"][0]["text"], "be brief");
    }
}
