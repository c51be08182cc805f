use thiserror::Error;

pub type MonitorResult<T> = Result<T, MonitorException>;

/// Failures raised while turning a raw scheduler response into a status.
///
/// Both variants keep the offending response text for diagnostics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MonitorException {
    /// The scheduler returned nothing usable, usually a transient
    /// communication problem or a job already purged from the queue cache.
    #[error("Empty response received from job status check on the remote system: {reason}.")]
    EmptyResponse { reason: String, response: String },

    /// The response was not blank but did not match the expected format or job.
    #[error("Unable to obtain job status in the response from the scheduler: {reason}.")]
    ResponseParsing { reason: String, response: String },
}

impl MonitorException {
    pub fn empty_response(reason: impl Into<String>, response: &str) -> Self {
        Self::EmptyResponse {
            reason: reason.into(),
            response: response.to_owned(),
        }
    }

    pub fn response_parsing(reason: impl Into<String>, response: &str) -> Self {
        Self::ResponseParsing {
            reason: reason.into(),
            response: response.to_owned(),
        }
    }

    /// Whether polling again later may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::EmptyResponse { .. })
    }

    /// The raw scheduler response that caused the failure.
    pub fn response(&self) -> &str {
        match self {
            Self::EmptyResponse { response, .. } | Self::ResponseParsing { response, .. } => {
                response
            }
        }
    }
}

/// Rejects blank responses, returning the text unchanged otherwise.
pub fn ensure_not_blank(response: &str) -> MonitorResult<&str> {
    if response.trim().is_empty() {
        return Err(MonitorException::empty_response(
            "since the job was successfully placed into queue, this is likely caused by a \
             communication issue with the scheduler and retrying may clear it up",
            response,
        ));
    }
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_responses_are_retryable() {
        for response in ["", "   ", "\n\t\r\n"] {
            let err = ensure_not_blank(response).unwrap_err();
            assert!(err.is_retryable());
            assert_eq!(err.response(), response);
        }
        assert_eq!(ensure_not_blank(" 42 ").unwrap(), " 42 ");
    }

    #[test]
    fn parsing_errors_are_not_retryable() {
        let err = MonitorException::response_parsing("no status line", "garbage");
        assert!(!err.is_retryable());
        assert_eq!(err.response(), "garbage");
        assert!(err.to_string().contains("no status line"));
    }
}
