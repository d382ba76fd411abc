use std::rc::Rc;

use gloo_console::log;
use gloo_timers::future::TimeoutFuture;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;

// U+FEFF is not White_Space in Unicode, so `\s` alone lets a pasted BOM through.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$").expect("email pattern compiles")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum NewsletterError {
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Subscription failed. Please try again.")]
    Failed,
}

#[derive(Serialize)]
struct SubscriptionRequest<'a> {
    email: &'a str,
}

/// Simulated round trip; no request leaves the browser.
async fn subscribe(email: &str) -> Result<(), NewsletterError> {
    TimeoutFuture::new(config::SUBSCRIBE_DELAY_MS).await;
    let payload = serde_json::to_string(&SubscriptionRequest { email })
        .map_err(|_| NewsletterError::Failed)?;
    log!("Subscribed:", payload);
    Ok(())
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub email: String,
    pub is_submitting: bool,
    pub error: Option<String>,
}

pub enum FormAction {
    Input(String),
    Rejected(NewsletterError),
    Started,
    Subscribed,
    Failed(NewsletterError),
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            // The input is disabled mid-flight; ignore anything that slips through.
            FormAction::Input(_) | FormAction::Rejected(_) | FormAction::Started if self.is_submitting => {
                return self;
            }
            FormAction::Input(email) => next.email = email,
            FormAction::Rejected(err) => next.error = Some(err.to_string()),
            FormAction::Started => {
                next.is_submitting = true;
                next.error = None;
            }
            FormAction::Subscribed => {
                next.email.clear();
                next.is_submitting = false;
            }
            FormAction::Failed(err) => {
                next.error = Some(err.to_string());
                next.is_submitting = false;
            }
        }
        Rc::new(next)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum SubmitPlan {
    /// A submission is already in flight.
    Ignore,
    Reject(NewsletterError),
    Send(String),
}

pub fn plan_submit(state: &FormState) -> SubmitPlan {
    if state.is_submitting {
        SubmitPlan::Ignore
    } else if is_valid_email(&state.email) {
        SubmitPlan::Send(state.email.clone())
    } else {
        SubmitPlan::Reject(NewsletterError::InvalidEmail)
    }
}

/// Hands a finished submission to the form, unless it has unmounted meanwhile.
fn deliver_if_mounted(
    is_mounted: &dyn Fn() -> bool,
    outcome: Result<(), NewsletterError>,
    dispatch: impl FnOnce(FormAction),
) -> bool {
    if !is_mounted() {
        debug!("Newsletter form unmounted, dropping subscribe result");
        return false;
    }
    dispatch(match outcome {
        Ok(()) => FormAction::Subscribed,
        Err(err) => FormAction::Failed(err),
    });
    true
}

#[function_component(NewsletterSignup)]
pub fn newsletter_signup() -> Html {
    let form = use_reducer(FormState::default);
    let is_mounted = use_is_mounted();

    let oninput = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::Input(input.value()));
        })
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match plan_submit(&form) {
                SubmitPlan::Ignore => {}
                SubmitPlan::Reject(err) => form.dispatch(FormAction::Rejected(err)),
                SubmitPlan::Send(email) => {
                    form.dispatch(FormAction::Started);
                    let form = form.clone();
                    let is_mounted = is_mounted.clone();
                    spawn_local(async move {
                        let outcome = subscribe(&email).await;
                        deliver_if_mounted(&*is_mounted, outcome, |action| form.dispatch(action));
                    });
                }
            }
        })
    };

    html! {
        <div class="card newsletter">
            <h3>{"Newsletter"}</h3>
            <p>
                {"Get weekly security updates, case studies, and incident response tips delivered to your inbox."}
            </p>
            <form onsubmit={onsubmit} novalidate={true}>
                <input
                    type="email"
                    placeholder="Enter your email"
                    value={form.email.clone()}
                    oninput={oninput}
                    aria-label="Email for newsletter subscription"
                    disabled={form.is_submitting}
                />
                if let Some(error) = &form.error {
                    <p class="form-error" role="alert">{error}</p>
                }
                <button type="submit" disabled={form.is_submitting}>
                    { if form.is_submitting { "Subscribing..." } else { "Subscribe" } }
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: FormState, actions: Vec<FormAction>) -> FormState {
        let mut state = Rc::new(state);
        for action in actions {
            state = state.reduce(action);
        }
        (*state).clone()
    }

    fn with_email(email: &str) -> FormState {
        apply(FormState::default(), vec![FormAction::Input(email.to_string())])
    }

    /// Runs the submit handler's state transitions up to the simulated delay.
    fn submit(state: FormState) -> FormState {
        match plan_submit(&state) {
            SubmitPlan::Ignore => state,
            SubmitPlan::Reject(err) => apply(state, vec![FormAction::Rejected(err)]),
            SubmitPlan::Send(_) => apply(state, vec![FormAction::Started]),
        }
    }

    #[test]
    fn accepts_simple_addresses() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("a.b+c@sub.example.co"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in [
            "",
            "user",
            "user@",
            "@example.com",
            "user@example",
            "us er@example.com",
            "a@b@c.com",
            "user\u{feff}@example.com",
            "user@exa\u{feff}mple.com",
        ] {
            assert!(!is_valid_email(email), "{email:?} should be rejected");
        }
    }

    #[test]
    fn invalid_submit_keeps_input_and_sets_error() {
        let state = submit(with_email("not-an-email"));
        assert!(!state.is_submitting);
        assert_eq!(state.email, "not-an-email");
        assert_eq!(state.error.as_deref(), Some("Please enter a valid email address"));
    }

    #[test]
    fn valid_submit_clears_email_after_delay() {
        let state = submit(with_email("user@example.com"));
        assert!(state.is_submitting);
        assert_eq!(state.error, None);
        assert_eq!(state.email, "user@example.com");

        let state = apply(state, vec![FormAction::Subscribed]);
        assert!(!state.is_submitting);
        assert!(state.email.is_empty());
        assert_eq!(state.error, None);
    }

    #[test]
    fn valid_submit_clears_a_previous_error() {
        let state = submit(with_email("nope"));
        assert!(state.error.is_some());
        let state = apply(state, vec![FormAction::Input("user@example.com".to_string())]);
        let state = submit(state);
        assert!(state.is_submitting);
        assert_eq!(state.error, None);
    }

    #[test]
    fn repeated_submits_while_in_flight_do_nothing() {
        let in_flight = submit(with_email("user@example.com"));
        assert_eq!(plan_submit(&in_flight), SubmitPlan::Ignore);
        assert_eq!(submit(in_flight.clone()), in_flight);
        let poked = apply(
            in_flight.clone(),
            vec![
                FormAction::Started,
                FormAction::Input("other@example.com".to_string()),
                FormAction::Rejected(NewsletterError::InvalidEmail),
            ],
        );
        assert_eq!(poked, in_flight);
    }

    #[test]
    fn late_result_after_unmount_is_dropped() {
        let in_flight = submit(with_email("user@example.com"));
        let mut dispatched = Vec::new();
        for outcome in [Ok(()), Err(NewsletterError::Failed)] {
            let delivered = deliver_if_mounted(&|| false, outcome, |action| dispatched.push(action));
            assert!(!delivered);
        }
        assert!(dispatched.is_empty());
        assert!(in_flight.is_submitting);
    }

    #[test]
    fn result_reaches_a_mounted_form() {
        let mut state = submit(with_email("user@example.com"));
        assert!(deliver_if_mounted(&|| true, Ok(()), |action| {
            state = apply(state.clone(), vec![action]);
        }));
        assert!(!state.is_submitting);
        assert!(state.email.is_empty());
    }

    #[test]
    fn failure_keeps_email_and_reports() {
        let state = submit(with_email("user@example.com"));
        let state = apply(state, vec![FormAction::Failed(NewsletterError::Failed)]);
        assert!(!state.is_submitting);
        assert_eq!(state.email, "user@example.com");
        assert_eq!(state.error.as_deref(), Some("Subscription failed. Please try again."));
    }
}
