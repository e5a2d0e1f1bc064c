use dioxus::prelude::*;

use crate::catalog::{blog_posts, format_date, BlogPost, BLOG_IMAGE_FALLBACK};
use crate::widgets::FallbackImage;

#[component]
pub fn BlogPage() -> Element {
    let posts = blog_posts();
    rsx! {
        document::Title { "Blog | SID" }
        document::Meta { name: "description", content: "Notes on hardware, software and everything in between." }
        main { class: "listing-page",
            div { class: "container",
                h1 { class: "page-title", "Blog." }
                div { class: "card-grid",
                    for post in posts {
                        BlogPostCard { key: "{post.title}", post: post.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn BlogPostCard(post: BlogPost) -> Element {
    rsx! {
        a {
            href: post.url,
            target: "_blank",
            rel: "noopener noreferrer",
            class: "card blog-card",
            div { class: "card-media tall",
                FallbackImage {
                    src: post.image_url.to_string(),
                    fallback: BLOG_IMAGE_FALLBACK.to_string(),
                    alt: post.title.to_string(),
                    class: "card-image".to_string(),
                }
            }
            div { class: "card-body",
                p { class: "card-meta", "{format_date(post.date)} • {post.reading_time}" }
                h3 { class: "card-title", "{post.title}" }
                p { class: "card-text", "{post.excerpt}" }
            }
        }
    }
}
