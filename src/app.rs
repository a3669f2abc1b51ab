use gloo::console::{error, log};
use gloo::timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlFormElement, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::api::ActivitiesApi;
use crate::config::Config;
use crate::error::ApiError;
use crate::model::Activity;
use crate::state::{
    signup_outcome, unregister_failure_text, Banner, BannerAction, ListAction, ListState,
    LOADING_TEXT, LOAD_FAILED_TEXT,
};

fn confirm(msg: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(msg).ok())
        .unwrap_or(false)
}

fn alert(msg: &str) {
    window().and_then(|w| w.alert_with_message(msg).ok());
}

#[function_component(App)]
pub fn app() -> Html {
    let config = use_state(Config::load);
    let api = ActivitiesApi::new(&config.api_base);

    let list = use_reducer(|| ListState::Loading);
    let banner = use_reducer(Banner::default);

    let form_ref = use_node_ref();
    let email_ref = use_node_ref();
    let activity_ref = use_node_ref();

    let fetch_activities = {
        let api = api.clone();
        let list = list.clone();

        Callback::from(move |_: ()| {
            let api = api.clone();
            let list = list.clone();

            spawn_local(async move {
                match api.fetch_activities().await {
                    Ok(activities) => {
                        log!(format!("Loaded {} activities", activities.len()));
                        list.dispatch(ListAction::Loaded(activities));
                    }
                    Err(e) => {
                        error!("Error fetching activities:", e.to_string());
                        list.dispatch(ListAction::Failed);
                    }
                }
            });
        })
    };

    // Load on mount
    {
        let fetch_activities = fetch_activities.clone();
        use_effect_with((), move |_| {
            fetch_activities.emit(());
            || ()
        });
    }

    let on_unregister = {
        let api = api.clone();
        let list = list.clone();

        Callback::from(move |(activity, email): (String, String)| {
            if !confirm(&format!("Unregister {email} from {activity}?")) {
                return;
            }
            let api = api.clone();
            let list = list.clone();

            spawn_local(async move {
                match api.unregister(&activity, &email).await {
                    Ok(()) => {
                        log!(format!("Unregistered {email} from {activity}"));
                        list.dispatch(ListAction::ParticipantRemoved { activity, email });
                    }
                    Err(e) => {
                        if !matches!(e, ApiError::Backend { .. }) {
                            error!("Error unregistering participant:", e.to_string());
                        }
                        alert(&unregister_failure_text(&e));
                    }
                }
            });
        })
    };

    let on_submit = {
        let api = api.clone();
        let banner = banner.clone();
        let fetch_activities = fetch_activities.clone();
        let form_ref = form_ref.clone();
        let email_ref = email_ref.clone();
        let activity_ref = activity_ref.clone();
        let timeout_ms = config.message_timeout_ms;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let email = email_ref
                .cast::<HtmlInputElement>()
                .map(|i| i.value())
                .unwrap_or_default();
            let activity = activity_ref
                .cast::<HtmlSelectElement>()
                .map(|s| s.value())
                .unwrap_or_default();

            let api = api.clone();
            let banner = banner.clone();
            let fetch_activities = fetch_activities.clone();
            let form_ref = form_ref.clone();

            spawn_local(async move {
                let result = api.signup(&activity, &email).await;
                if let Err(e) = &result {
                    if !matches!(e, ApiError::Backend { .. }) {
                        error!("Error signing up:", e.to_string());
                    }
                }

                let outcome = signup_outcome(&result);
                banner.dispatch(BannerAction::Show(outcome.banner));
                if outcome.reset_form {
                    if let Some(form) = form_ref.cast::<HtmlFormElement>() {
                        form.reset();
                    }
                }
                if outcome.refetch {
                    fetch_activities.emit(());
                }

                Timeout::new(timeout_ms, move || banner.dispatch(BannerAction::Hide)).forget();
            });
        })
    };

    let list_content = match &*list {
        ListState::Loading => html! { <p>{ LOADING_TEXT }</p> },
        ListState::Failed => html! { <p>{ LOAD_FAILED_TEXT }</p> },
        ListState::Loaded(activities) => html! {
            <>{ for activities.iter().map(|a| activity_card(a, &on_unregister)) }</>
        },
    };

    html! {
      <>
        <header>
          <h1>{ "Extracurricular Activities" }</h1>
          <h2>{ "Sign up for the activities you want to join" }</h2>
        </header>

        <main>
          <section id="activities-container">
            <h3>{ "Available Activities" }</h3>
            <div id="activities-list">{ list_content }</div>
          </section>

          <section id="signup-container">
            <h3>{ "Sign Up for an Activity" }</h3>
            <form id="signup-form" ref={form_ref} onsubmit={on_submit}>
              <div class="form-group">
                <label for="email">{ "Student Email:" }</label>
                <input
                  type="email"
                  id="email"
                  required=true
                  placeholder="your-email@example.com"
                  ref={email_ref}
                />
              </div>
              <div class="form-group">
                <label for="activity">{ "Select Activity:" }</label>
                <select id="activity" required=true ref={activity_ref}>
                  <option value="">{ "-- Select an activity --" }</option>
                  { for list.activities().iter().map(|a| html! {
                      <option key={a.name.clone()} value={a.name.clone()}>{ a.name.clone() }</option>
                  }) }
                </select>
              </div>
              <button type="submit">{ "Sign Up" }</button>
            </form>
            <div id="message" class={banner.classes()}>{ banner.text.clone() }</div>
          </section>
        </main>
      </>
    }
}

fn activity_card(activity: &Activity, on_unregister: &Callback<(String, String)>) -> Html {
    let participants = if activity.participants.is_empty() {
        html! { <p class="no-participants"><em>{ "No participants yet" }</em></p> }
    } else {
        html! {
          <ul class="participants-list">
            { for activity.participants.iter().map(|email| {
                let onclick = {
                    let on_unregister = on_unregister.clone();
                    let target = (activity.name.clone(), email.clone());
                    Callback::from(move |_: MouseEvent| on_unregister.emit(target.clone()))
                };
                html! {
                  <li class="participant-item">
                    <span class="participant-email">{ email.clone() }</span>
                    <button
                      type="button"
                      class="delete-participant"
                      aria-label={format!("Unregister {} from {}", email, activity.name)}
                      title="Unregister participant"
                      {onclick}
                    >
                      { "✖" }
                    </button>
                  </li>
                }
            }) }
          </ul>
        }
    };

    html! {
      <div class="activity-card" key={activity.name.clone()}>
        <h4>{ activity.name.clone() }</h4>
        <p>{ activity.description.clone() }</p>
        <p><strong>{ "Schedule:" }</strong>{ format!(" {}", activity.schedule) }</p>
        <p class="activity-availability">
          <strong>{ "Availability:" }</strong>{ format!(" {}", activity.availability_text()) }
        </p>
        <div class="participants">
          <h5>
            { "Participants (" }
            <span class="participants-count">{ activity.participants.len().to_string() }</span>
            { ")" }
          </h5>
          <div class="participants-content">{ participants }</div>
        </div>
      </div>
    }
}
