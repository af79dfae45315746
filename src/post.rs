//! The post model and the state owned by the blog screen.

/// How much one "enlarge text" notification grows the shared font size, in em.
pub const FONT_SIZE_STEP: f64 = 0.1;

/// A single blog post. The `id` is unique within the sample set and doubles
/// as the stable list key when the posts are rendered.
#[derive(Clone, Debug, PartialEq)]
pub struct Post {
    pub id: u32,
    pub title: String,
    pub content: String,
}

/// Everything the blog screen owns: the post list and the font size (in em)
/// applied to every rendered post.
#[derive(Clone, Debug, PartialEq)]
pub struct BlogState {
    pub posts: Vec<Post>,
    pub font_size: f64,
}

impl BlogState {
    pub fn sample() -> Self {
        Self {
            posts: sample_posts(),
            font_size: 1.0,
        }
    }

    /// The single update entry point: a child asked for larger text, so grow
    /// the shared font size by one step. Posts are never touched.
    pub fn enlarge_text(&mut self) {
        self.font_size += FONT_SIZE_STEP;
    }
}

/// The hardcoded sample posts shown on startup.
pub fn sample_posts() -> Vec<Post> {
    const LOREM: &str = "Lorem ipsum dolor sit, amet consectetur adipisicing \
        elit. Asperiores eum aut vel doloribus officiis maiores consequatur \
        expedita minima laudantium ducimus molestiae error aspernatur aliquid, \
        ab deleniti dolore! Aspernatur, voluptatem labore.";

    vec![
        Post {
            id: 1,
            title: "HTML".to_string(),
            content: LOREM.to_string(),
        },
        Post {
            id: 2,
            title: "Blogging with Dioxus".to_string(),
            content: LOREM.to_string(),
        },
        Post {
            id: 3,
            title: "Why Dioxus is so fun".to_string(),
            content: LOREM.to_string(),
        },
    ]
}
