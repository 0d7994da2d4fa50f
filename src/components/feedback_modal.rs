//! Feedback Modal Component
//!
//! Name/topic/message form posted to the feedback endpoint. Success shows a
//! short confirmation, then resets and closes; failure alerts and keeps the input.

use leptos::prelude::*;
use leptos::task::spawn_local;
use gloo_timers::future::TimeoutFuture;

use crate::commands;
use crate::config::{FEEDBACK_CONFIRM_MS, FEEDBACK_ERROR};
use crate::context::use_app_context;
use crate::feedback::{FeedbackDraft, TOPICS};

fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

#[component]
pub fn FeedbackModal() -> impl IntoView {
    let ctx = use_app_context();

    let name = RwSignal::new(String::new());
    let topic = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let (confirmed, set_confirmed) = signal(false);
    let (submitting, set_submitting) = signal(false);

    let reset = move || {
        name.set(String::new());
        topic.set(String::new());
        message.set(String::new());
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let draft = FeedbackDraft {
            name: name.get_untracked(),
            topic: topic.get_untracked(),
            message: message.get_untracked(),
        };
        let payload = match draft.to_payload() {
            Ok(payload) => payload,
            Err(reason) => {
                alert(reason);
                return;
            }
        };

        set_submitting.set(true);
        spawn_local(async move {
            match commands::submit_feedback(&payload).await {
                Ok(()) => {
                    web_sys::console::log_1(&"[FEEDBACK] Submitted".into());
                    set_confirmed.set(true);
                    TimeoutFuture::new(FEEDBACK_CONFIRM_MS).await;
                    reset();
                    set_confirmed.set(false);
                    ctx.close_feedback();
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[FEEDBACK] Error submitting feedback: {}", e).into());
                    alert(FEEDBACK_ERROR);
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div
            id="feedback-modal"
            class=move || if ctx.feedback_open.get() { "modal show" } else { "modal" }
            role="dialog"
            aria-modal="true"
            aria-labelledby="feedback-title"
            on:click=move |_| ctx.close_feedback()
        >
            <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                <button
                    id="feedback-modal-close"
                    type="button"
                    class="modal-close"
                    aria-label="Close feedback form"
                    on:click=move |_| ctx.close_feedback()
                >
                    "\u{00D7}"
                </button>
                <h2 id="feedback-title">"Share your feedback"</h2>

                <Show
                    when=move || !confirmed.get()
                    fallback=|| view! {
                        <div id="feedback-confirmation" class="feedback-confirmation">
                            <p>"Thank you! Your feedback has been received."</p>
                        </div>
                    }
                >
                    <form id="feedback-form" class="feedback-form" on:submit=on_submit>
                        <label for="feedback-name">"Name (optional)"</label>
                        <input
                            id="feedback-name"
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />

                        <label for="feedback-topic">"Topic"</label>
                        <select
                            id="feedback-topic"
                            prop:value=move || topic.get()
                            on:change=move |ev| topic.set(event_target_value(&ev))
                        >
                            {TOPICS.iter().map(|(value, label)| view! {
                                <option value=*value>{*label}</option>
                            }).collect_view()}
                        </select>

                        <label for="feedback-message">"Message"</label>
                        <textarea
                            id="feedback-message"
                            rows="5"
                            prop:value=move || message.get()
                            on:input=move |ev| message.set(event_target_value(&ev))
                        ></textarea>

                        <button type="submit" class="submit-btn" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Sending..." } else { "Send feedback" }}
                        </button>
                    </form>
                </Show>
            </div>
        </div>
    }
}
