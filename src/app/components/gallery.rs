use leptos::prelude::*;

use crate::app::api::convert_file_src;
use crate::app::config::EMPTY_GALLERY_TEXT;
use crate::app::gallery::{GalleryState, Phase};
use crate::app::paths::{file_name, to_store, PathConvention};

#[component]
pub fn Gallery(
    gallery: RwSignal<GalleryState>,
    convention: PathConvention,
    /// Called once per detached node with its key.
    on_detached: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="gallery">
            <Show
                when=move || gallery.with(|g| !g.is_empty())
                fallback=|| view! { <p class="gallery-empty">{EMPTY_GALLERY_TEXT}</p> }
            >
                <For
                    each=move || gallery.with(|g| g.keys())
                    key=|key| key.clone()
                    children=move |key: String| {
                        let src = convert_file_src(&to_store(&key, convention));
                        let title = file_name(&key).to_string();
                        let phase = {
                            let key = key.clone();
                            Memo::new(move |_| gallery.with(|g| g.phase_of(&key)))
                        };

                        // drop the fade-in class on the next frame so the transition runs
                        let key_for_reveal = key.clone();
                        request_animation_frame(move || {
                            gallery.update(|g| {
                                g.reveal(&key_for_reveal);
                            });
                        });

                        let key_for_dblclick = key.clone();
                        let key_for_transition = key.clone();
                        view! {
                            <figure
                                class="thumbnail"
                                class:fade-in=move || phase.get() == Some(Phase::Entering)
                                class:fade-out=move || phase.get() == Some(Phase::Leaving)
                                title=title.clone()
                                on:dblclick=move |_| {
                                    gallery.update(|g| {
                                        g.begin_remove(&key_for_dblclick);
                                    });
                                }
                                on:transitionend=move |_| {
                                    if phase.get_untracked() == Some(Phase::Leaving) {
                                        on_detached.run(key_for_transition.clone());
                                    }
                                }
                            >
                                <img src=src.clone() alt=title.clone() draggable="false" />
                                <figcaption>{title.clone()}</figcaption>
                            </figure>
                        }
                    }
                />
            </Show>
        </div>
    }
}
