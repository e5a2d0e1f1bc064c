use dioxus::prelude::*;

use crate::catalog::{projects, Project, ProjectCategory, PROJECT_IMAGE_FALLBACK};
use crate::widgets::FallbackImage;

const TABS: [ProjectCategory; 2] = [ProjectCategory::Software, ProjectCategory::Hardware];

#[component]
pub fn ProjectsPage() -> Element {
    let mut active = use_signal(|| ProjectCategory::Software);
    let current = active();
    rsx! {
        document::Title { "Projects | SID" }
        main { class: "listing-page",
            div { class: "container",
                h1 { class: "page-title", "Projects." }
                div { class: "tab-row", role: "tablist",
                    for category in TABS {
                        button {
                            key: "{category.label()}",
                            role: "tab",
                            class: if category == current { "tab-button is-active" } else { "tab-button" },
                            aria_selected: category == current,
                            onclick: move |_| active.set(category),
                            "{category.label()}"
                        }
                    }
                }
                div { class: "card-grid",
                    for project in projects(current) {
                        ProjectCard { key: "{project.title}", project: project.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project) -> Element {
    rsx! {
        a {
            href: project.url,
            target: "_blank",
            rel: "noopener noreferrer",
            class: "card project-card",
            div { class: "card-media",
                FallbackImage {
                    src: project.image_url.to_string(),
                    fallback: PROJECT_IMAGE_FALLBACK.to_string(),
                    alt: project.title.to_string(),
                    class: "card-image".to_string(),
                }
            }
            div { class: "card-body",
                h3 { class: "card-title", "{project.title}" }
                p { class: "card-text", "{project.description}" }
                div { class: "tag-row",
                    for tag in project.tags {
                        span { key: "{tag}", class: "tag", "{tag}" }
                    }
                }
            }
        }
    }
}
