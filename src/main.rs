use blog_posts_demo::App;
use dioxus::logger::tracing::Level;

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to initialize logger");
    dioxus::launch(App);
}
