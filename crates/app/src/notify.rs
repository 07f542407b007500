use shared_types::{AppError, Notice};
use shared_ui::{ToastOptions, Toasts};

pub const LOGIN_FAILED_TITLE: &str = "Login Failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastTone {
    Success,
    Info,
    Error,
}

/// Title, description and tone of one toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastMessage {
    pub tone: ToastTone,
    pub title: String,
    pub description: String,
}

/// Toast for a completed session transition.
pub fn notice_message(notice: &Notice) -> ToastMessage {
    let tone = match notice {
        Notice::SignedIn(_) => ToastTone::Success,
        Notice::SignedOut => ToastTone::Info,
    };
    ToastMessage {
        tone,
        title: notice.title().to_string(),
        description: notice.description(),
    }
}

/// Destructive toast for a rejected or failed login.
pub fn login_failure_message(err: &AppError) -> ToastMessage {
    ToastMessage {
        tone: ToastTone::Error,
        title: LOGIN_FAILED_TITLE.to_string(),
        description: err.message.clone(),
    }
}

/// The one toast announcing how a login attempt ended.
pub fn login_outcome(outcome: &Result<Notice, AppError>) -> ToastMessage {
    match outcome {
        Ok(notice) => notice_message(notice),
        Err(err) => login_failure_message(err),
    }
}

pub fn show(toasts: Toasts, message: ToastMessage) {
    let options = ToastOptions::new().description(message.description);
    match message.tone {
        ToastTone::Success => toasts.success(message.title, options),
        ToastTone::Info => toasts.info(message.title, options),
        ToastTone::Error => toasts.error(message.title, options),
    }
}
