use dioxus::prelude::*;

/// Glyph named by the first `fa-*` token of a Font Awesome class list.
pub fn glyph_name(class: &str) -> &str {
    class
        .split_whitespace()
        .find_map(|token| token.strip_prefix("fa-"))
        .unwrap_or("")
}

/// Inline SVG stand-in for a Font Awesome icon. The class list is kept on the
/// element so stylesheets targeting `fa-*` modifiers still apply.
#[component]
pub fn Icon(class: String) -> Element {
    let svg_content = match glyph_name(&class) {
        "step-backward" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "currentColor",
                polygon { points: "19 20 9 12 19 4 19 20" }
                line {
                    x1: "5",
                    y1: "19",
                    x2: "5",
                    y2: "5",
                    stroke: "currentColor",
                    stroke_width: "2",
                }
            }
        },
        "step-forward" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "currentColor",
                polygon { points: "5 4 15 12 5 20 5 4" }
                line {
                    x1: "19",
                    y1: "5",
                    x2: "19",
                    y2: "19",
                    stroke: "currentColor",
                    stroke_width: "2",
                }
            }
        },
        "play" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "currentColor",
                polygon { points: "5 3 19 12 5 21 5 3" }
            }
        },
        "pause" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "currentColor",
                rect {
                    x: "6",
                    y: "4",
                    width: "4",
                    height: "16",
                }
                rect {
                    x: "14",
                    y: "4",
                    width: "4",
                    height: "16",
                }
            }
        },
        "th-list" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                path { d: "M8 6h13" }
                path { d: "M8 12h13" }
                path { d: "M8 18h13" }
                path { d: "M3 6h.01" }
                path { d: "M3 12h.01" }
                path { d: "M3 18h.01" }
            }
        },
        "random" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                polyline { points: "16 3 21 3 21 8" }
                line {
                    x1: "4",
                    y1: "20",
                    x2: "21",
                    y2: "3",
                }
                polyline { points: "21 16 21 21 16 21" }
                line {
                    x1: "15",
                    y1: "15",
                    x2: "21",
                    y2: "21",
                }
                line {
                    x1: "4",
                    y1: "4",
                    x2: "9",
                    y2: "9",
                }
            }
        },
        "volume-up" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                polygon { points: "11 5 6 9 2 9 2 15 6 15 11 19 11 5" }
                path { d: "M15.54 8.46a5 5 0 0 1 0 7.07" }
                path { d: "M19.07 4.93a10 10 0 0 1 0 14.14" }
            }
        },
        "volume-off" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                polygon { points: "11 5 6 9 2 9 2 15 6 15 11 19 11 5" }
                line {
                    x1: "23",
                    y1: "9",
                    x2: "17",
                    y2: "15",
                }
                line {
                    x1: "17",
                    y1: "9",
                    x2: "23",
                    y2: "15",
                }
            }
        },
        "heart" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: if class.contains("is-favorite") { "currentColor" } else { "none" },
                stroke: "currentColor",
                stroke_width: "2",
                path { d: "M20.84 4.61a5.5 5.5 0 0 0-7.78 0L12 5.67l-1.06-1.06a5.5 5.5 0 0 0-7.78 7.78l1.06 1.06L12 21.23l7.78-7.78 1.06-1.06a5.5 5.5 0 0 0 0-7.78z" }
            }
        },
        "share" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                circle { cx: "18", cy: "5", r: "3" }
                circle { cx: "6", cy: "12", r: "3" }
                circle { cx: "18", cy: "19", r: "3" }
                line {
                    x1: "8.59",
                    y1: "13.51",
                    x2: "15.42",
                    y2: "17.49",
                }
                line {
                    x1: "15.41",
                    y1: "6.51",
                    x2: "8.59",
                    y2: "10.49",
                }
            }
        },
        _ => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                circle { cx: "12", cy: "12", r: "10" }
            }
        },
    };

    svg_content
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_comes_from_first_fa_token() {
        assert_eq!(glyph_name("fa fa-volume-off"), "volume-off");
        assert_eq!(glyph_name("fa fa-heart is-favorite"), "heart");
        assert_eq!(glyph_name("fa fa-random randomSelected"), "random");
        assert_eq!(glyph_name("fa"), "");
    }
}
