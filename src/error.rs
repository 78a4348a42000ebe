#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("TV is offline: {0}")]
    DeviceOffline(String),

    #[error("TV is not listening: {0}")]
    NotListening(String),

    #[error("Authentication rejected by TV: {message}")]
    Auth { message: String, status: u16 },

    #[error("API error: {message}")]
    Api {
        message: String,
        status: Option<u16>,
    },

    #[error("{0}")]
    InvalidInput(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// How a failure affects the reachability of the TV.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    /// Network or TLS failure, the TV cannot be reached at all.
    Unreachable,
    /// The TV answered but refused the connection or the session.
    Rejecting,
    /// A local failure that says nothing about the TV.
    Unaffected,
}

impl AppError {
    pub fn connectivity(&self) -> Connectivity {
        match self {
            AppError::DeviceOffline(_) => Connectivity::Unreachable,
            AppError::NotListening(_) | AppError::Auth { .. } => Connectivity::Rejecting,
            AppError::Http(e) if e.is_connect() || e.is_timeout() => Connectivity::Unreachable,
            _ => Connectivity::Unaffected,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Auth { .. } => 2,
            AppError::InvalidInput(_) => 3,
            AppError::DeviceOffline(_) | AppError::NotListening(_) => 4,
            _ => 1,
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::DeviceOffline(_) => "device_offline",
            AppError::NotListening(_) => "not_listening",
            AppError::Auth { .. } => "auth",
            AppError::Api { .. } => "api",
            AppError::InvalidInput(_) => "invalid_input",
            AppError::Http(_) => "http",
            AppError::Json(_) => "json",
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        let mut obj = serde_json::json!({
            "error": self.error_type(),
            "message": self.to_string(),
        });
        if let Some(status) = self.http_status() {
            obj["status"] = serde_json::json!(status);
        }
        obj
    }

    fn http_status(&self) -> Option<u16> {
        match self {
            AppError::Auth { status, .. } => Some(*status),
            AppError::Api { status, .. } => *status,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connectivity_classification() {
        assert_eq!(
            AppError::DeviceOffline("timeout".into()).connectivity(),
            Connectivity::Unreachable
        );
        assert_eq!(
            AppError::NotListening("refused".into()).connectivity(),
            Connectivity::Rejecting
        );
        assert_eq!(
            AppError::Auth {
                message: "401".into(),
                status: 401
            }
            .connectivity(),
            Connectivity::Rejecting
        );
        assert_eq!(
            AppError::InvalidInput("bad style".into()).connectivity(),
            Connectivity::Unaffected
        );
    }

    #[test]
    fn test_to_json_includes_status() {
        let err = AppError::Api {
            message: "500 Internal Server Error".into(),
            status: Some(500),
        };
        let json = err.to_json();
        assert_eq!(json["error"], "api");
        assert_eq!(json["status"], 500);

        let json = AppError::InvalidInput("nope".into()).to_json();
        assert_eq!(json["message"], "nope");
        assert!(json.get("status").is_none());
    }

    #[test]
    fn test_error_types() {
        let json_err = serde_json::from_str::<u8>("x").unwrap_err();
        assert_eq!(AppError::Json(json_err).error_type(), "json");
        assert_eq!(AppError::NotListening(String::new()).error_type(), "not_listening");
        assert_eq!(
            AppError::Auth {
                message: String::new(),
                status: 403
            }
            .error_type(),
            "auth"
        );
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(AppError::DeviceOffline(String::new()).exit_code(), 4);
        assert_eq!(AppError::InvalidInput(String::new()).exit_code(), 3);
        assert_eq!(
            AppError::Api {
                message: String::new(),
                status: None
            }
            .exit_code(),
            1
        );
    }
}
