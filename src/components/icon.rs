//! Icon Component
//!
//! Fixed set of line icons rendered as inline SVG.

use leptos::prelude::*;

const CIRCLE_R10: &str = "M22 12a10 10 0 1 1-20 0a10 10 0 1 1 20 0";
const CIRCLE_R4: &str = "M16 12a4 4 0 1 1-8 0a4 4 0 1 1 8 0";

/// Every icon the dashboard can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Leaf,
    Sun,
    SunDim,
    Moon,
    Droplets,
    Wind,
    ClipboardList,
    CheckCircle,
    Circle,
}

impl Glyph {
    /// Theme toggle shows where the click leads: sun while dark, moon while light
    pub fn theme_toggle(is_dark: bool) -> Self {
        if is_dark {
            Glyph::SunDim
        } else {
            Glyph::Moon
        }
    }

    pub fn task_status(completed: bool) -> Self {
        if completed {
            Glyph::CheckCircle
        } else {
            Glyph::Circle
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Glyph::Leaf => "leaf",
            Glyph::Sun => "sun",
            Glyph::SunDim => "sun-dim",
            Glyph::Moon => "moon",
            Glyph::Droplets => "droplets",
            Glyph::Wind => "wind",
            Glyph::ClipboardList => "clipboard-list",
            Glyph::CheckCircle => "check-circle",
            Glyph::Circle => "circle",
        }
    }

    /// SVG path data on a 24x24 grid
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Glyph::Leaf => &[
                "M11 20A7 7 0 0 1 9.8 6.1C15.5 5 17 4.48 19 2c1 2 2 4.18 2 8 0 5.5-4.78 10-10 10Z",
                "M2 21c0-3 1.85-5.36 5.08-6C9.5 14.52 12 13 13 12",
            ],
            Glyph::Sun => &[
                CIRCLE_R4,
                "M12 2v2",
                "M12 20v2",
                "m4.93 4.93 1.41 1.41",
                "m17.66 17.66 1.41 1.41",
                "M2 12h2",
                "M20 12h2",
                "m6.34 17.66-1.41 1.41",
                "m19.07 4.93-1.41 1.41",
            ],
            Glyph::SunDim => &[
                CIRCLE_R4,
                "M12 4h.01",
                "M20 12h.01",
                "M12 20h.01",
                "M4 12h.01",
                "M17.657 6.343h.01",
                "M17.657 17.657h.01",
                "M6.343 17.657h.01",
                "M6.343 6.343h.01",
            ],
            Glyph::Moon => &["M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"],
            Glyph::Droplets => &[
                "M7 16.3c2.2 0 4-1.83 4-4.05 0-1.16-.57-2.26-1.71-3.19S7.29 6.75 7 5.3c-.29 1.45-1.14 2.84-2.29 3.76S3 11.1 3 12.25c0 2.22 1.8 4.05 4 4.05z",
                "M12.56 6.6A10.97 10.97 0 0 0 14 3.02c.5 2.5 2 4.9 4 6.5s3 3.5 3 5.5a6.98 6.98 0 0 1-11.91 4.97",
            ],
            Glyph::Wind => &[
                "M17.7 7.7a2.5 2.5 0 1 1 1.8 4.3H2",
                "M9.6 4.6A2 2 0 1 1 11 8H2",
                "M12.6 19.4A2 2 0 1 0 14 16H2",
            ],
            Glyph::ClipboardList => &[
                "M9 2h6a1 1 0 0 1 1 1v2a1 1 0 0 1-1 1H9a1 1 0 0 1-1-1V3a1 1 0 0 1 1-1Z",
                "M16 4h2a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2h2",
                "M12 11h4",
                "M12 16h4",
                "M8 11h.01",
                "M8 16h.01",
            ],
            Glyph::CheckCircle => &[CIRCLE_R10, "m9 12 2 2 4-4"],
            Glyph::Circle => &[CIRCLE_R10],
        }
    }
}

/// Inline SVG icon
#[component]
pub fn Icon(
    glyph: Glyph,
    #[prop(default = 24)] size: u32,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let class = if class.is_empty() {
        format!("lucide lucide-{}", glyph.name())
    } else {
        format!("lucide lucide-{} {}", glyph.name(), class)
    };

    let size = size.to_string();

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            class=class
            width=size.clone()
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {glyph.paths().iter().map(|d| view! { <path d=*d></path> }).collect_view()}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggle_glyph() {
        assert_eq!(Glyph::theme_toggle(true), Glyph::SunDim);
        assert_eq!(Glyph::theme_toggle(false), Glyph::Moon);
    }

    #[test]
    fn test_task_status_glyph() {
        assert_eq!(Glyph::task_status(true), Glyph::CheckCircle);
        assert_eq!(Glyph::task_status(false), Glyph::Circle);
    }

    #[test]
    fn test_every_glyph_has_paths() {
        let all = [
            Glyph::Leaf,
            Glyph::Sun,
            Glyph::SunDim,
            Glyph::Moon,
            Glyph::Droplets,
            Glyph::Wind,
            Glyph::ClipboardList,
            Glyph::CheckCircle,
            Glyph::Circle,
        ];
        for glyph in all {
            assert!(!glyph.paths().is_empty(), "{:?} has no paths", glyph);
            assert!(!glyph.name().is_empty());
        }
    }
}
