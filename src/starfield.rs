use dioxus::prelude::*;
use rand::Rng;
use std::ops::Range;

pub const NIGHT_SKY_PALETTE: [&str; 5] = ["#280F36", "#632B6C", "#BE6590", "#FFC1A0", "#FE9C7F"];

#[derive(Clone, Debug, PartialEq)]
pub struct StarDescriptor {
    pub top_percent: f64,
    pub left_percent: f64,
    pub duration_seconds: f64,
    pub visual_class: &'static str,
    pub color: Option<&'static str>,
}

#[derive(Clone, Debug)]
pub struct StarVariant {
    pub class: &'static str,
    pub top: Range<f64>,
    pub duration: Range<f64>,
}

#[derive(Clone, Debug)]
pub struct StarCategory {
    pub iterations: usize,
    pub variants: &'static [StarVariant],
    /// Emit only on even iterations.
    pub even_only: bool,
    pub palette: Option<&'static [&'static str]>,
}

impl StarCategory {
    pub fn emitted(&self) -> usize {
        let iterations = if self.even_only {
            self.iterations.div_ceil(2)
        } else {
            self.iterations
        };
        iterations * self.variants.len()
    }
}

const fn variant(class: &'static str, top: Range<f64>, duration: Range<f64>) -> StarVariant {
    StarVariant {
        class,
        top,
        duration,
    }
}

pub const LEFT_RANGE: Range<f64> = 0.0..100.0;

pub const CATEGORIES: [StarCategory; 6] = [
    StarCategory {
        iterations: 50,
        variants: &[
            variant("star-1 blink", 0.0..40.0, 2.0..5.0),
            variant("star-2 blink", 20.0..70.0, 4.0..8.0),
        ],
        even_only: false,
        palette: None,
    },
    StarCategory {
        iterations: 20,
        variants: &[
            variant("star-0", 0.0..50.0, 1.0..2.5),
            variant("star-1", 0.0..50.0, 2.5..4.0),
            variant("star-2 blink", 0.0..50.0, 4.0..5.0),
        ],
        even_only: false,
        palette: None,
    },
    StarCategory {
        iterations: 10,
        variants: &[
            variant("star-0", 40.0..75.0, 1.0..3.0),
            variant("star-1", 40.0..75.0, 2.0..4.0),
        ],
        even_only: false,
        palette: None,
    },
    StarCategory {
        iterations: 30,
        variants: &[
            variant("star-0", 0.0..100.0, 1.0..2.0),
            variant("star-1 blink", 0.0..100.0, 2.0..5.0),
            variant("star-2", 0.0..100.0, 1.0..4.0),
            variant("star-4 blink", 0.0..70.0, 5.0..7.0),
        ],
        even_only: false,
        palette: None,
    },
    StarCategory {
        iterations: 15,
        variants: &[variant("star-4 blink", 0.0..100.0, 5.0..7.0)],
        even_only: false,
        palette: None,
    },
    StarCategory {
        iterations: 5,
        variants: &[variant("star-5", 0.0..50.0, 5.0..7.0)],
        even_only: true,
        palette: Some(&NIGHT_SKY_PALETTE),
    },
];

pub fn generate_category<R: Rng + ?Sized>(rng: &mut R, category: &StarCategory) -> Vec<StarDescriptor> {
    let mut stars = Vec::with_capacity(category.emitted());
    for iteration in 0..category.iterations {
        if category.even_only && iteration % 2 != 0 {
            continue;
        }
        for variant in category.variants {
            let top_percent = rng.random_range(variant.top.clone());
            let left_percent = rng.random_range(LEFT_RANGE);
            let duration_seconds = rng.random_range(variant.duration.clone());
            let color = category
                .palette
                .filter(|palette| !palette.is_empty())
                .map(|palette| palette[rng.random_range(0..palette.len())]);
            stars.push(StarDescriptor {
                top_percent,
                left_percent,
                duration_seconds,
                visual_class: variant.class,
                color,
            });
        }
    }
    stars
}

/// Lays out the whole night sky, category by category.
pub fn generate_night_sky<R: Rng + ?Sized>(rng: &mut R) -> Vec<StarDescriptor> {
    let total = CATEGORIES.iter().map(StarCategory::emitted).sum();
    let mut stars = Vec::with_capacity(total);
    for category in &CATEGORIES {
        stars.extend(generate_category(rng, category));
    }
    stars
}

/// Seed for a fresh layout on every mount.
pub fn entropy_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        let high = (js_sys::Math::random() * u32::MAX as f64) as u64;
        let low = js_sys::Date::now() as u64;
        (high << 32) ^ low
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or_default()
    }
}

fn star_style(star: &StarDescriptor) -> String {
    let mut style = format!(
        "top: {:.3}vh; left: {:.3}vw; animation-duration: {:.3}s;",
        star.top_percent, star.left_percent, star.duration_seconds
    );
    if let Some(color) = star.color {
        style.push_str(&format!(" background-color: {color};"));
    }
    style
}

#[component]
pub fn NightSkyBackground() -> Element {
    let stars = use_hook(|| {
        use rand::SeedableRng;
        let mut rng = rand::rngs::SmallRng::seed_from_u64(entropy_seed());
        let stars = generate_night_sky(&mut rng);
        tracing::debug!(count = stars.len(), "night sky generated");
        stars
    });

    rsx! {
        div { class: "sky", aria_hidden: "true",
            div { class: "mountains",
                div { class: "mountain-1" }
                div { class: "mountain-2" }
                div { class: "land-1" }
                div { class: "land-2" }
                div { class: "land-3" }
            }
            div { class: "mountains-base" }
            div { class: "light-base" }
            div { class: "stars",
                for (index, star) in stars.iter().enumerate() {
                    div {
                        key: "{index}",
                        class: "star {star.visual_class}",
                        style: star_style(star),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn category_counts_are_fixed() {
        let mut rng = SmallRng::seed_from_u64(7);
        let counts: Vec<usize> = CATEGORIES
            .iter()
            .map(|category| generate_category(&mut rng, category).len())
            .collect();
        assert_eq!(counts, vec![100, 60, 20, 120, 15, 3]);
        assert_eq!(generate_night_sky(&mut rng).len(), 318);
    }

    #[test]
    fn coordinates_stay_in_category_ranges() {
        for seed in 0..20 {
            let mut rng = SmallRng::seed_from_u64(seed);
            for category in &CATEGORIES {
                let stars = generate_category(&mut rng, category);
                for (index, star) in stars.iter().enumerate() {
                    let variant = &category.variants[index % category.variants.len()];
                    assert_eq!(star.visual_class, variant.class);
                    assert!(variant.top.contains(&star.top_percent));
                    assert!(LEFT_RANGE.contains(&star.left_percent));
                    assert!(variant.duration.contains(&star.duration_seconds));
                }
            }
        }
    }

    #[test]
    fn only_the_last_category_is_colored() {
        let mut rng = SmallRng::seed_from_u64(3);
        let stars = generate_night_sky(&mut rng);
        let (colored, plain): (Vec<_>, Vec<_>) = stars.iter().partition(|star| star.color.is_some());
        assert_eq!(colored.len(), 3);
        assert!(plain.iter().all(|star| star.visual_class != "star-5"));
        assert!(colored
            .iter()
            .all(|star| star.visual_class == "star-5"
                && NIGHT_SKY_PALETTE.contains(&star.color.unwrap_or_default())));
    }

    #[test]
    fn same_seed_same_layout() {
        let first = generate_night_sky(&mut SmallRng::seed_from_u64(42));
        let second = generate_night_sky(&mut SmallRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn style_includes_color_only_when_present() {
        let star = StarDescriptor {
            top_percent: 10.0,
            left_percent: 20.5,
            duration_seconds: 3.0,
            visual_class: "star-5",
            color: Some("#280F36"),
        };
        assert_eq!(
            star_style(&star),
            "top: 10.000vh; left: 20.500vw; animation-duration: 3.000s; background-color: #280F36;"
        );
        let plain = StarDescriptor { color: None, ..star };
        assert!(!star_style(&plain).contains("background-color"));
    }
}
