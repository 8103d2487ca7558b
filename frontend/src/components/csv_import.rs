//! CSV import widget.
//!
//! Lets an admin pick one file, asks the import service for a pre-signed
//! URL and uploads the file directly to it.

use leptos::*;
use web_sys::{Event, File, HtmlInputElement};

use crate::components::{LoginModal, NotificationBanner};
use crate::services::{upload, BrowserTransport, LocalStorageCredentials};
use crate::state::{notification_memo, WidgetState};
use crate::ACCEPTED_FILE_TYPES;

#[component]
pub fn CsvFileImport(
    /// Destination-request endpoint
    #[prop(into)]
    url: String,
    /// Heading shown above the picker
    #[prop(into)]
    title: String,
) -> impl IntoView {
    let state = create_rw_signal(WidgetState::<File>::new());
    let url = store_value(url);

    let has_file = move || state.with(|s| s.has_file());
    let is_uploading = move || state.with(|s| s.is_uploading());

    let upload_file = move || {
        let url = url.get_value();
        spawn_local(async move {
            let transport = BrowserTransport;
            let credentials = LocalStorageCredentials::default();
            match upload(&state, &transport, &credentials, &url).await {
                Ok(outcome) => log::debug!("Upload finished: {:?}", outcome),
                Err(e) => log::error!("Unhandled upload error: {}", e),
            }
        });
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let selected = input.files().and_then(|files| files.get(0));
        state.update(|s| {
            if s.select_file(selected) {
                log::debug!("Selected {:?}", s.selected_file().map(|f| f.name()));
            }
        });
    };

    view! {
        <div class="csv-import">
            <div class="csv-import-header">
                <h6 class="csv-import-title">{title}</h6>
                <button
                    class="link-button"
                    on:click=move |_| state.update(|s| s.open_auth_prompt())
                >
                    "Sign in"
                </button>
            </div>

            <Show
                when=move || !has_file()
                fallback=move || view! {
                    <div class="csv-import-actions">
                        <span class="file-name">
                            {move || state.with(|s| s.selected_file().map(|f| f.name()).unwrap_or_default())}
                        </span>
                        <button
                            on:click=move |_| state.update(|s| s.remove_file())
                            disabled=is_uploading
                        >
                            "Remove file"
                        </button>
                        <button
                            class="primary"
                            on:click=move |_| upload_file()
                            disabled=is_uploading
                        >
                            {move || if is_uploading() { "Uploading..." } else { "Upload file" }}
                        </button>
                    </div>
                }
            >
                <input
                    type="file"
                    accept=ACCEPTED_FILE_TYPES
                    on:change=on_file_change
                />
            </Show>

            <NotificationBanner
                state=notification_memo(state)
                on_close=move |_| state.update(|s| s.toggle_notification())
                on_expire=move |_| state.update(|s| s.dismiss_notification())
            />
        </div>

        <LoginModal
            open=Signal::derive(move || state.with(|s| s.auth_prompt_open()))
            on_close=move |_| state.update(|s| s.close_auth_prompt())
            on_login=move |_| {
                state.update(|s| s.close_auth_prompt());
                upload_file();
            }
        />
    }
}
