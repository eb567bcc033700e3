//! Delete Confirm Button Component
//!
//! Two-step delete for a skill row: the first click arms the button, the
//! second one deletes. An armed button falls back to idle after a few seconds.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long the confirmation stays up without a second click
const ARMED_TIMEOUT_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Idle,
    /// Armed by the n-th click; only that click's timeout may disarm it
    Armed(u32),
}

impl Step {
    fn expire(self, armed_by: u32) -> Self {
        match self {
            Step::Armed(n) if n == armed_by => Step::Idle,
            other => other,
        }
    }
}

/// # Arguments
/// * `button_class` - CSS class for the idle button
/// * `subject` - Skill name shown in the prompt
/// * `on_confirm` - Runs on the second click
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] subject: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (step, set_step) = signal(Step::Idle);
    let clicks = StoredValue::new(0u32);
    let prompt = format!("Delete \"{}\"?", subject);

    let arm = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        clicks.update_value(|n| *n = n.wrapping_add(1));
        let armed_by = clicks.get_value();
        set_step.set(Step::Armed(armed_by));
        spawn_local(async move {
            TimeoutFuture::new(ARMED_TIMEOUT_MS).await;
            set_step.try_update(|s| *s = s.expire(armed_by));
        });
    };
    let confirm = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        set_step.set(Step::Idle);
        on_confirm.run(());
    };
    let dismiss = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        set_step.set(Step::Idle);
    };

    move || match step.get() {
        Step::Idle => view! {
            <button class=button_class.clone() title="Delete" on:click=arm>
                "🗑️"
            </button>
        }
        .into_any(),
        Step::Armed(_) => view! {
            <span class="delete-confirm flex items-center gap-1">
                <span class="text-sm">{prompt.clone()}</span>
                <button class="px-2 py-1 bg-red-500 text-white rounded text-sm" on:click=confirm>
                    "✓"
                </button>
                <button class="px-2 py-1 bg-gray-300 rounded text-sm" on:click=dismiss>
                    "✗"
                </button>
            </span>
        }
        .into_any(),
    }
}
