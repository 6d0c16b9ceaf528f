use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::DropZone;

pub mod api;
pub mod config;
pub mod drop_zone;
pub mod error;
pub mod form;
pub mod gallery;
pub mod logging;
pub mod paths;
pub mod sync;
pub mod targets;
pub mod types;
#[cfg(test)]
mod testing;

pub mod components {
    pub mod gallery;
    pub mod schedule_form;
}

use api::{pick_images, TauriStore};
use components::gallery::Gallery;
use components::schedule_form::ScheduleForm;
use form::{autosave, load_form, FormFields};
use gallery::GalleryState;
use paths::{normalize, PathConvention};
use sync::{add_paths, finish_removal, handle_drop_event, report};
use targets::initial_targets;
use types::ScheduleConfig;

#[component]
pub fn App() -> impl IntoView {
    let convention = PathConvention::detect();
    let store = TauriStore;

    let form = RwSignal::new(FormFields::default());
    // config as last loaded; supplies the fields the form does not edit
    let loaded_config = RwSignal::new(ScheduleConfig::default());
    let gallery = RwSignal::new(GalleryState::default());
    let zone = DropZone::new();
    let (loaded, set_loaded) = signal(false);

    // Load initial state
    Effect::new(move || {
        spawn_local(async move {
            let (fields, config) = load_form(&store).await;
            let targets = initial_targets(&config);
            form.set(fields);
            loaded_config.set(config);
            gallery.update(|g| g.render_all(&targets));
            set_loaded.set(true);
        });
    });

    Effect::new(move || {
        drop_zone::listen_host_drag_events(move |event| {
            spawn_local(async move {
                let result = handle_drop_event(&store, zone, gallery, event, convention).await;
                report("DropZone", result);
            });
        });
    });

    let save = Callback::new(move |_: ()| {
        // edits before the first load would overwrite the store with defaults
        if !loaded.get_untracked() {
            return;
        }
        let fields = form.get_untracked();
        let base = loaded_config.get_untracked();
        spawn_local(async move {
            report("Form", autosave(&store, &fields, &base, convention).await);
        });
    });

    let pick_default = Callback::new(move |_: ()| {
        spawn_local(async move {
            match pick_images(false).await {
                Ok(paths) => {
                    if let Some(path) = paths.first() {
                        form.update(|f| f.default_wallpaper = normalize(path));
                        save.run(());
                    }
                }
                Err(e) => crate::ui_error!("[Form] {}", e),
            }
        });
    });

    let add_files = move |_| {
        spawn_local(async move {
            match pick_images(true).await {
                Ok(paths) => report("Targets", add_paths(&store, gallery, paths, convention).await),
                Err(e) => crate::ui_error!("[Targets] {}", e),
            }
        });
    };

    let on_detached = Callback::new(move |key: String| {
        spawn_local(async move {
            report("Gallery", finish_removal(&store, gallery, &key, convention).await);
        });
    });

    view! {
        <main class="container">
            <ScheduleForm form=form on_edit=save on_pick_default=pick_default />
            <section
                class="drop-zone"
                class:hovering=move || zone.is_hovering()
                on:dragover=move |ev| zone.browser_drag_over(&ev)
                on:dragleave=move |ev| zone.browser_drag_leave(&ev)
                on:drop=move |ev| zone.browser_drop(&ev)
            >
                <div class="toolbar">
                    <button type="button" on:click=add_files>"Add images"</button>
                    <span class="hint">"Drop images or folders here. Double-click a thumbnail to remove it."</span>
                </div>
                <Gallery gallery=gallery convention=convention on_detached=on_detached />
            </section>
        </main>
    }
}
