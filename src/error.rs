use thiserror::Error;

use crate::model::ErrorBody;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum ApiError {
    /// fetch itself failed (offline, CORS, aborted...)
    #[error("Network error: {0}")]
    Transport(#[from] gloo_net::Error),

    #[error("Backend returned HTTP {status}")]
    Backend { status: u16, body: ErrorBody },

    #[error("Invalid response body: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ApiError {
    pub fn body(&self) -> Option<&ErrorBody> {
        match self {
            ApiError::Backend { body, .. } => Some(body),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_error_exposes_body() {
        let e = ApiError::Backend {
            status: 404,
            body: ErrorBody {
                detail: Some("Activity not found".into()),
                message: None,
            },
        };
        assert_eq!(e.to_string(), "Backend returned HTTP 404");
        assert_eq!(
            e.body().and_then(|b| b.detail.as_deref()),
            Some("Activity not found")
        );
    }

    #[test]
    fn parse_error_converts_with_question_mark() {
        fn parse() -> Result<serde_json::Value> {
            Ok(serde_json::from_str("{")?)
        }
        let e = parse().unwrap_err();
        assert!(matches!(e, ApiError::Parse(_)));
        assert!(e.body().is_none());
    }

    #[test]
    fn transport_error_keeps_gloo_source() {
        fn send() -> Result<()> {
            let sent: std::result::Result<(), gloo_net::Error> =
                Err(gloo_net::Error::GlooError("offline".into()));
            sent?;
            Ok(())
        }
        let e = send().unwrap_err();
        assert!(matches!(e, ApiError::Transport(gloo_net::Error::GlooError(_))));
        assert!(e.to_string().contains("offline"));
        assert!(std::error::Error::source(&e).is_some());
    }
}
