//! Content-specific error types.

/// Errors that can occur while creating or querying posts and replies.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    /// Mood tag is not part of the taxonomy
    #[error("Invalid mood: '{tag}'")]
    InvalidMood { tag: String },

    /// Text, transcript or doodle reference was empty
    #[error("Content must not be empty")]
    EmptyContent,

    /// Post does not exist or has expired
    #[error("Post not found: {id}")]
    PostNotFound { id: String },

    /// Reply does not exist or has expired
    #[error("Reply not found: {id}")]
    ReplyNotFound { id: String },

    /// Reply targets a post that is no longer visible
    #[error("Cannot reply to expired post: {id}")]
    ParentExpired { id: String },

    /// Circle is not part of the registry
    #[error("Circle not found: {id}")]
    CircleNotFound { id: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_error_display() {
        let error = ContentError::InvalidMood {
            tag: "Happy".to_string(),
        };
        assert!(error.to_string().contains("Invalid mood"));
        assert!(error.to_string().contains("Happy"));

        let error = ContentError::EmptyContent;
        assert!(error.to_string().contains("must not be empty"));

        let error = ContentError::PostNotFound {
            id: "abc".to_string(),
        };
        assert!(error.to_string().contains("Post not found"));
        assert!(error.to_string().contains("abc"));

        let error = ContentError::ParentExpired {
            id: "abc".to_string(),
        };
        assert!(error.to_string().contains("expired post"));

        let error = ContentError::CircleNotFound { id: 42 };
        assert!(error.to_string().contains("Circle not found"));
        assert!(error.to_string().contains("42"));
    }
}
