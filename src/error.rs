use thiserror::Error;

/// Failures on the browser side of the page. None of these reach the user;
/// they are logged and the affected operation becomes a no-op.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("element `{0}` is not present in this page")]
    MissingElement(&'static str),
    #[error("browser storage unavailable: {0}")]
    Storage(String),
    #[error("invalid page config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("{0} is not loaded")]
    MissingGlobal(&'static str),
    #[error("script call failed: {0}")]
    Interop(String),
}

/// Why a captcha answer was rejected. Both variants are handled the same way
/// by the form: alert, new challenge, cleared input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptchaError {
    #[error("answer `{0}` is not a number")]
    Unparseable(String),
    #[error("answer {given} does not match")]
    Mismatch { given: i64 },
}
