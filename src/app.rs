//! The blog screen.

use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use crate::components::BlogPost;
use crate::post::BlogState;

/// Owns the post list and the shared font size. Each post is rendered
/// through [`BlogPost`], keyed by its id, and every "enlarge text"
/// notification coming back up grows the font size of all posts by one step.
#[component]
pub fn App() -> Element {
    let mut state = use_signal(BlogState::sample);
    let font_size = state.read().font_size;

    rsx! {
        div { id: "blog-posts-events-demo",
            div { style: "font-size: {font_size}em",
                for post in state.read().posts.clone() {
                    BlogPost {
                        key: "{post.id}",
                        post,
                        on_enlarge_text: move |_| {
                            state.write().enlarge_text();
                            info!(font_size = state.read().font_size, "enlarge-text");
                        },
                    }
                }
            }
        }
    }
}
