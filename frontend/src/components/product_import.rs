//! Admin page for importing the product catalogue.

use leptos::*;
use leptos_meta::Title;

use crate::components::CsvFileImport;
use crate::IMPORT_API_URL;

#[component]
pub fn ProductImportPage() -> impl IntoView {
    view! {
        <Title text="Products import"/>
        <div class="container">
            <h1>"Products"</h1>
            <CsvFileImport url=IMPORT_API_URL title="Import Products CSV"/>
        </div>
    }
}
