use std::borrow::Cow;

/// Errors that can occur during logger initialization.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Failure when configuring the rolling file appender (e.g., invalid path).
    #[error("Rolling file appender error: {source}")]
    Appender {
        #[from]
        source: tracing_appender::rolling::InitError,
    },

    /// A global tracing subscriber is already installed in this process.
    #[error("Tracing subscriber error: {source}")]
    Subscriber {
        #[from]
        source: tracing_subscriber::util::TryInitError,
    },

    #[error("Internal logger error ({context}): {message}")]
    Internal { message: Cow<'static, str>, context: Cow<'static, str> },

    #[error("Invalid logger configuration: {message}")]
    InvalidConfiguration { message: Cow<'static, str> },
}

impl LoggerError {
    pub(crate) fn invalid(message: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidConfiguration { message: message.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_configuration_message() {
        let err = LoggerError::invalid("max_files must be greater than zero");
        assert_eq!(err.to_string(), "Invalid logger configuration: max_files must be greater than zero");
    }

    #[test]
    fn internal_message_carries_context() {
        let err = LoggerError::Internal {
            message: "permission denied".into(),
            context: "Failed to create path: /var/log/pclass".into(),
        };
        assert_eq!(
            err.to_string(),
            "Internal logger error (Failed to create path: /var/log/pclass): permission denied"
        );
    }
}
