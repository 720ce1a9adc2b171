//! Google Docs Read - View Components
//!
//! The form that collects the service-account credential the node uses to
//! read documents. One field; every keystroke is written through to the form
//! state and forwarded to the owner via the change watcher.

use crate::shared::components::ui::Textarea;
use crate::shared::i18n::{t, Locale};
use crate::shared::state::FormState;
use contracts::flow::google_docs_read::{self, GoogleDocsReadConfig, SERVICE_ACCOUNT_JSON};
use leptos::prelude::*;
use std::sync::Arc;

/// Credential field bound to the form state passed in explicitly
#[component]
pub fn ServiceAccountJsonField(
    form: RwSignal<FormState>,
    #[prop(into)] locale: Signal<Locale>,
) -> impl IntoView {
    let value = Signal::derive(move || form.with(|f| f.text(SERVICE_ACCOUNT_JSON).to_string()));
    let error = Signal::derive(move || {
        form.with(|f| f.error(SERVICE_ACCOUNT_JSON).map(|m| m.to_string()))
    });

    view! {
        <Textarea
            id="service_account_json"
            label=Signal::derive(move || t(locale.get(), "flow.serviceAccountJson"))
            placeholder=Signal::derive(move || t(locale.get(), "flow.serviceAccountJsonPlaceholder"))
            value=value
            on_input=Callback::new(move |text: String| {
                form.update(|f| f.set(SERVICE_ACCOUNT_JSON, text));
            })
            rows=6
            error=error
        />
    }
}

/// Configuration form for one Google Docs Read node.
///
/// Initializes the form state from the node's saved values on mount and runs
/// `on_change` with the full config after every edit. Persistence of the new
/// config is the caller's responsibility.
#[component]
pub fn GoogleDocsReadForm(
    values: GoogleDocsReadConfig,
    #[prop(into)] locale: Signal<Locale>,
    on_change: Callback<GoogleDocsReadConfig>,
) -> impl IntoView {
    let mut state = FormState::new(google_docs_read::schema(), values.to_values());
    state.watch(Arc::new(move |values| {
        on_change.run(GoogleDocsReadConfig::from_values(values));
    }));
    let form = RwSignal::new(state);

    view! {
        <div class="details-form" style="padding: 20px;">
            <h2 style="font-size: 20px; font-weight: bold; margin-bottom: 16px;">
                {move || t(locale.get(), "flow.googleDocsRead")}
            </h2>
            <div class="card" style="max-width: 560px;">
                <ServiceAccountJsonField form=form locale=locale />
            </div>
        </div>
    }
}
