use dioxus::prelude::*;

use crate::catalog::{
    certificates, education, featured_projects, skills, FEATURED_IMAGE_FALLBACK, PROFILE_IMAGE,
    PROFILE_IMAGE_FALLBACK,
};
use crate::date::current_year;
use crate::hooks::use_fade_in;
use crate::navigation::{NavigationRequest, Page, Section};
use crate::widgets::{FadeSection, FallbackImage};

#[component]
pub fn HomePage(on_navigate: EventHandler<NavigationRequest>) -> Element {
    rsx! {
        document::Title { "SID | Portfolio" }
        main { class: "home",
            Hero {}
            AboutSection {}
            EducationSection {}
            FeaturedWorkSection {}
            SkillsSection {}
            CertificatesSection {}
            GetInTouchSection { on_navigate }
        }
    }
}

#[component]
fn Hero() -> Element {
    rsx! {
        section { class: "hero",
            div { class: "hero-portrait",
                div { class: "hero-halo" }
                div { class: "hero-frame",
                    FallbackImage {
                        src: PROFILE_IMAGE.to_string(),
                        fallback: PROFILE_IMAGE_FALLBACK.to_string(),
                        alt: "Profile of SID".to_string(),
                        class: "hero-image".to_string(),
                    }
                }
            }
        }
    }
}

#[component]
fn AboutSection() -> Element {
    rsx! {
        FadeSection { id: Section::About.anchor_id().to_string(), class: "container about".to_string(),
            h1 { class: "about-title",
                "Hey, I'm "
                span { class: "accent-text", "Siddharth Shankar Mahapatra" }
                ". Here, you can check out what I'm working on. I try my best to create things with passion and heart."
            }
        }
    }
}

#[component]
fn EducationSection() -> Element {
    rsx! {
        FadeSection { id: Section::Education.anchor_id().to_string(), class: "band band-muted".to_string(),
            div { class: "container",
                h2 { class: "section-title", "Education" }
                p { class: "section-kicker", "WHAT I HAVE STUDIED SO FAR" }
                div { class: "timeline",
                    div { class: "timeline-rail" }
                    for entry in education() {
                        div { key: "{entry.degree}", class: "timeline-entry",
                            div { class: "timeline-marker" }
                            div { class: "card timeline-card",
                                span { class: "timeline-years", "{entry.years}" }
                                h3 { "{entry.degree}" }
                                h4 { "{entry.institution}" }
                                ul {
                                    for achievement in entry.achievements {
                                        li { key: "{achievement}", "{achievement}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FeaturedWorkSection() -> Element {
    rsx! {
        FadeSection { id: "featured-work".to_string(), class: "band band-dark".to_string(),
            div { class: "container",
                h2 { class: "section-title on-dark", "Featured Work" }
                div { class: "card-grid",
                    for project in featured_projects() {
                        a {
                            key: "{project.title}",
                            href: "#",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            class: "featured-card",
                            FallbackImage {
                                src: project.image_url.to_string(),
                                fallback: FEATURED_IMAGE_FALLBACK.to_string(),
                                alt: project.title.to_string(),
                                class: "featured-image".to_string(),
                            }
                            div { class: "featured-bar {project.accent}",
                                h3 { "{project.title}" }
                                p { "{project.description}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SkillsSection() -> Element {
    rsx! {
        FadeSection { id: Section::Skills.anchor_id().to_string(), class: "band".to_string(),
            div { class: "container centered",
                h2 { class: "section-title", "Skills" }
                div { class: "skill-cloud",
                    for skill in skills() {
                        div { key: "{skill}", class: "skill-badge", "{skill}" }
                    }
                }
            }
        }
    }
}

#[component]
fn CertificatesSection() -> Element {
    rsx! {
        FadeSection { id: Section::Certificates.anchor_id().to_string(), class: "band band-dark".to_string(),
            div { class: "container",
                h2 { class: "section-title on-dark", "Certificates" }
                div { class: "card-grid",
                    for certificate in certificates() {
                        a {
                            key: "{certificate.title}",
                            href: certificate.url,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            class: "certificate-card",
                            h3 { "{certificate.title}" }
                            p { class: "certificate-issuer", "{certificate.issuer}" }
                            p { class: "certificate-issued", "{certificate.issued}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn GetInTouchSection(on_navigate: EventHandler<NavigationRequest>) -> Element {
    rsx! {
        FadeSection { id: "get-in-touch".to_string(), class: "band band-muted".to_string(),
            div { class: "container centered",
                h2 { class: "section-title", "Get In Touch" }
                p { class: "section-lead", "Have a question or want to work together? Feel free to reach out!" }
                button {
                    class: "primary-button",
                    onclick: move |_| on_navigate.call(NavigationRequest::to(Page::Contact)),
                    "Say Hello"
                }
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    let fade = use_fade_in();
    let year = current_year();
    rsx! {
        footer {
            class: "site-footer {fade.class()}",
            onmounted: move |event| fade.on_mounted(event),
            div { class: "container centered",
                div { class: "social-links",
                    a {
                        href: "https://github.com",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        aria_label: "GitHub",
                        svg { class: "icon icon-large", view_box: "0 0 24 24", fill: "currentColor",
                            path { d: "M12 0c-6.626 0-12 5.373-12 12 0 5.302 3.438 9.8 8.207 11.387.599.111.793-.261.793-.577v-2.234c-3.338.726-4.033-1.416-4.033-1.416-.546-1.387-1.333-1.756-1.333-1.756-1.089-.745.083-.729.083-.729 1.205.084 1.839 1.237 1.839 1.237 1.07 1.834 2.807 1.304 3.492.997.107-.775.418-1.305.762-1.604-2.665-.305-5.467-1.334-5.467-5.931 0-1.311.469-2.381 1.236-3.221-.124-.303-.535-1.524.117-3.176 0 0 1.008-.322 3.301 1.23.957-.266 1.983-.399 3.003-.404 1.02.005 2.047.138 3.006.404 2.291-1.552 3.297-1.23 3.297-1.23.653 1.653.242 2.874.118 3.176.77.84 1.235 1.911 1.235 3.221 0 4.609-2.807 5.624-5.479 5.921.43.372.823 1.102.823 2.222v3.293c0 .319.192.694.801.576 4.765-1.589 8.199-6.086 8.199-11.386 0-6.627-5.373-12-12-12z" }
                        }
                    }
                    a {
                        href: "https://linkedin.com",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        aria_label: "LinkedIn",
                        svg { class: "icon icon-large", view_box: "0 0 24 24", fill: "currentColor",
                            path { d: "M19 0h-14c-2.761 0-5 2.239-5 5v14c0 2.761 2.239 5 5 5h14c2.762 0 5-2.239 5-5v-14c0-2.761-2.238-5-5-5zm-11 19h-3v-11h3v11zm-1.5-12.268c-.966 0-1.75-.79-1.75-1.764s.784-1.764 1.75-1.764 1.75.79 1.75 1.764-.783 1.764-1.75 1.764zm13.5 12.268h-3v-5.604c0-3.368-4-3.113-4 0v5.604h-3v-11h3v1.765c1.396-2.586 7-2.777 7 2.476v6.759z" }
                        }
                    }
                }
                p { "© {year} SID. All Rights Reserved." }
            }
        }
    }
}
