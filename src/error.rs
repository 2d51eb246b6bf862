use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnippetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid font descriptor '{descriptor}': {reason}")]
    InvalidDescriptor { descriptor: String, reason: String },
}

impl SnippetError {
    pub fn invalid_descriptor(descriptor: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDescriptor {
            descriptor: descriptor.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SnippetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_descriptor_message() {
        let err = SnippetError::invalid_descriptor("nanum", "missing ':' separator");
        assert_eq!(
            err.to_string(),
            "Invalid font descriptor 'nanum': missing ':' separator"
        );
    }

    #[test]
    fn test_io_error_converts() {
        fn open() -> Result<()> {
            let missing: std::io::Result<()> =
                Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
            missing?;
            Ok(())
        }
        assert!(matches!(open(), Err(SnippetError::Io(_))));
    }
}
