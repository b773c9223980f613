/// One unit of conversational content attributed to a role.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Content {
    /// The role the content is attributed to. The live API only accepts
    /// "user" turns from this client.
    pub role: String,
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Part {
    pub text: String,
}

/// System instruction content. Unlike a turn it carries no role on the wire.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SystemInstruction {
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user_text(text: &str) -> Self {
        Self {
            role: "user".to_string(),
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }
}

impl SystemInstruction {
    pub fn from_text(text: &str) -> Self {
        Self {
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }
}
