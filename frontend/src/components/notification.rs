//! Transient upload outcome banner, anchored top-right.

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::types::NotificationState;
use crate::NOTIFICATION_HIDE_MS;

#[component]
pub fn NotificationBanner(
    /// Visibility and severity to render
    #[prop(into)]
    state: Signal<NotificationState>,
    /// Close button pressed
    #[prop(into)]
    on_close: Callback<()>,
    /// Display time elapsed
    #[prop(into)]
    on_expire: Callback<()>,
    #[prop(default = NOTIFICATION_HIDE_MS)]
    hide_after_ms: u32,
) -> impl IntoView {
    // Dropping the handle cancels the timer.
    let pending = store_value(None::<Timeout>);

    create_effect(move |_| {
        if state.get().open {
            let timeout = Timeout::new(hide_after_ms, move || on_expire.call(()));
            pending.set_value(Some(timeout));
        } else {
            pending.set_value(None);
        }
    });

    view! {
        <Show
            when=move || state.get().open
            fallback=|| view! { }
        >
            <div class="snackbar snackbar-top-right" role="alert">
                <div class=move || format!("alert {}", state.get().display_severity().css_class())>
                    <span class="alert-message">{move || state.get().message()}</span>
                    <button
                        class="alert-close"
                        aria-label="Close"
                        on:click=move |_| on_close.call(())
                    >
                        "×"
                    </button>
                </div>
            </div>
        </Show>
    }
}
