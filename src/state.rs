use std::rc::Rc;

use yew::prelude::*;

use crate::error::ApiError;
use crate::model::{remove_participant, Activity};

pub const LOADING_TEXT: &str = "Loading activities...";
pub const LOAD_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";
pub const SIGNUP_FAILED_TEXT: &str = "Failed to sign up. Please try again.";
pub const SIGNUP_DEFAULT_ERROR: &str = "An error occurred";
pub const UNREGISTER_DEFAULT_ERROR: &str = "Failed to unregister participant";
pub const UNREGISTER_TRANSPORT_ERROR: &str =
    "Failed to unregister participant. See console for details.";

// ---------- activity list ----------

#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    Loading,
    Loaded(Vec<Activity>),
    Failed,
}

impl ListState {
    /// Activities currently on screen; empty unless loaded.
    pub fn activities(&self) -> &[Activity] {
        match self {
            ListState::Loaded(a) => a,
            _ => &[],
        }
    }
}

pub enum ListAction {
    Loaded(Vec<Activity>),
    Failed,
    ParticipantRemoved { activity: String, email: String },
}

impl Reducible for ListState {
    type Action = ListAction;

    fn reduce(self: Rc<Self>, action: ListAction) -> Rc<Self> {
        match action {
            ListAction::Loaded(activities) => Rc::new(ListState::Loaded(activities)),
            ListAction::Failed => Rc::new(ListState::Failed),
            ListAction::ParticipantRemoved { activity, email } => {
                // A reload may have landed since the click; patch whatever is current.
                let ListState::Loaded(current) = &*self else {
                    return self;
                };
                let mut next = current.clone();
                if remove_participant(&mut next, &activity, &email) {
                    Rc::new(ListState::Loaded(next))
                } else {
                    self
                }
            }
        }
    }
}

// ---------- #message banner ----------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    pub fn class(self) -> &'static str {
        match self {
            BannerKind::Success => "success",
            BannerKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    pub text: String,
    pub kind: Option<BannerKind>,
    pub hidden: bool,
}

impl Default for Banner {
    fn default() -> Self {
        Self {
            text: String::new(),
            kind: None,
            hidden: true,
        }
    }
}

impl Banner {
    fn shown(text: impl Into<String>, kind: BannerKind) -> Self {
        Self {
            text: text.into(),
            kind: Some(kind),
            hidden: false,
        }
    }

    pub fn classes(&self) -> Classes {
        classes!(
            self.kind.map(BannerKind::class),
            self.hidden.then_some("hidden")
        )
    }
}

pub enum BannerAction {
    Show(Banner),
    Hide,
}

impl Reducible for Banner {
    type Action = BannerAction;

    fn reduce(self: Rc<Self>, action: BannerAction) -> Rc<Self> {
        match action {
            BannerAction::Show(b) => Rc::new(b),
            BannerAction::Hide if self.hidden => self,
            // Hides whatever is showing, even a newer message than the one
            // whose timer fired.
            BannerAction::Hide => Rc::new(Banner {
                hidden: true,
                ..(*self).clone()
            }),
        }
    }
}

// ---------- outcomes ----------

#[derive(Debug, Clone, PartialEq)]
pub struct SignupOutcome {
    pub banner: Banner,
    pub reset_form: bool,
    pub refetch: bool,
}

pub fn signup_outcome(result: &Result<String, ApiError>) -> SignupOutcome {
    match result {
        Ok(message) => SignupOutcome {
            banner: Banner::shown(message.clone(), BannerKind::Success),
            reset_form: true,
            refetch: true,
        },
        Err(e) => {
            let text = match e.body() {
                Some(body) => body
                    .detail
                    .clone()
                    .unwrap_or_else(|| SIGNUP_DEFAULT_ERROR.to_string()),
                None => SIGNUP_FAILED_TEXT.to_string(),
            };
            SignupOutcome {
                banner: Banner::shown(text, BannerKind::Error),
                reset_form: false,
                refetch: false,
            }
        }
    }
}

/// Alert text for a failed unregister.
pub fn unregister_failure_text(e: &ApiError) -> String {
    match e.body() {
        Some(body) => body
            .detail
            .clone()
            .or_else(|| body.message.clone())
            .unwrap_or_else(|| UNREGISTER_DEFAULT_ERROR.to_string()),
        None => UNREGISTER_TRANSPORT_ERROR.to_string(),
    }
}
