//! The reusable blog post card.

use dioxus::prelude::*;

use crate::post::Post;

/// Renders one post and lets the user ask for larger text. The component
/// never resizes anything itself: it only sends the "enlarge text"
/// notification upward through `on_enlarge_text`, with no payload.
#[component]
pub fn BlogPost(post: Post, on_enlarge_text: EventHandler<()>) -> Element {
    rsx! {
        div { class: "blog-post",
            h3 { "{post.title}" }
            button { onclick: move |_| on_enlarge_text.call(()), "Enlarge text" }
            div { dangerous_inner_html: "{post.content}" }
        }
    }
}
