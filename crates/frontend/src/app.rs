use crate::flow::google_docs_read::GoogleDocsReadForm;
use crate::shared::i18n::Locale;
use crate::shared::state::FlowNodeStore;
use contracts::flow::{FlowNodeId, GoogleDocsReadConfig};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // One open flow with a single Google Docs Read node. The store plays the
    // role of the editor's node configuration storage.
    let node_id = FlowNodeId::new_v4();
    let store = RwSignal::new(FlowNodeStore::new());
    let locale = RwSignal::new(Locale::En);

    // Saved values for the node being edited; read once, at mount
    let initial: GoogleDocsReadConfig = store.with_untracked(|s| {
        s.get_config(&node_id)
            .cloned()
            .and_then(|v| serde_json::from_value(v).ok())
            .unwrap_or_default()
    });

    let on_change = Callback::new(move |config: GoogleDocsReadConfig| {
        log::debug!("flow node {} config updated", node_id.as_string());
        match serde_json::to_value(&config) {
            Ok(value) => store.update(|s| s.set_config(node_id, value)),
            Err(e) => log::error!("failed to serialize node config: {}", e),
        }
    });

    view! {
        <div class="app">
            <div class="toolbar" style="display: flex; gap: 8px; padding: 8px 20px;">
                <button on:click=move |_| locale.set(Locale::En)>"EN"</button>
                <button on:click=move |_| locale.set(Locale::Ru)>"RU"</button>
            </div>
            <GoogleDocsReadForm values=initial locale=locale on_change=on_change />
        </div>
    }
}
