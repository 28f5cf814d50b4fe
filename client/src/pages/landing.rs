//! Landing page: creates a new canvas and opens its editor.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

#[component]
pub fn LandingPage() -> impl IntoView {
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_create = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_canvas().await {
                    Ok(doc) => {
                        log::info!("created canvas {}", doc.id);
                        navigate(&format!("/canvas/{}", doc.id), NavigateOptions::default());
                    }
                    Err(e) => {
                        log::error!("creating canvas failed: {e}");
                        error.set(Some(e));
                        busy.set(false);
                    }
                }
            });
        }
    };

    view! {
        <div class="landing-page">
            <h1>"Canvas Editor"</h1>
            <button class="btn btn--primary" disabled=move || busy.get() on:click=on_create>
                "Create New Canvas"
            </button>
            <Show when=move || error.get().is_some()>
                <p class="landing-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
