//! Login prompt shown when the import service needs credentials.

use leptos::ev::SubmitEvent;
use leptos::*;

use crate::services::LocalStorageCredentials;

#[component]
pub fn LoginModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    /// Called after the token has been stored
    #[prop(into)]
    on_login: Callback<()>,
) -> impl IntoView {
    let (login, set_login) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let credentials = LocalStorageCredentials::default();
        match credentials.store_login(&login.get_untracked(), &password.get_untracked()) {
            Ok(()) => {
                log::info!("🔑 Credentials stored for {}", login.get_untracked());
                set_error.set(None);
                set_password.set(String::new());
                on_login.call(());
            }
            Err(e) => {
                log::error!("❌ {}", e);
                set_error.set(Some(e.to_string()));
            }
        }
    };

    view! {
        <Show
            when=move || open.get()
            fallback=|| view! { }
        >
            <div class="modal-backdrop">
                <div class="modal" role="dialog" aria-modal="true">
                    <h2 class="modal-title">"Sign in"</h2>
                    <form on:submit=on_submit>
                        <label>
                            "Login"
                            <input
                                type="text"
                                autocomplete="username"
                                prop:value=login
                                on:input=move |ev| set_login.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Password"
                            <input
                                type="password"
                                autocomplete="current-password"
                                prop:value=password
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                            />
                        </label>

                        <Show
                            when=move || error.get().is_some()
                            fallback=|| view! { }
                        >
                            <div class="error-message">
                                {move || error.get().unwrap_or_default()}
                            </div>
                        </Show>

                        <div class="modal-actions">
                            <button type="button" on:click=move |_| on_close.call(())>
                                "Cancel"
                            </button>
                            <button type="submit" class="primary">"Log in"</button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
