//! A small blog-post list demo: a parent view renders posts through a
//! reusable child component, passing each post down as a prop and reacting
//! to the child's "enlarge text" notification by growing a shared font size.

mod app;
mod components;
mod post;

pub use app::App;
pub use components::BlogPost;
pub use post::{sample_posts, BlogState, Post, FONT_SIZE_STEP};
