// Theme variables hold space-separated channels ("18 18 18"), so alpha must
// use the slash form; `rgba(var(--x), a)` is dropped by the browser.
const STYLES: &str = include_str!("../styles.css");

#[test]
fn theme_colors_use_slash_alpha() {
    for (n, line) in STYLES.lines().enumerate() {
        assert!(
            !line.contains("rgba(var("),
            "styles.css:{} mixes comma alpha with channel vars: {}",
            n + 1,
            line.trim()
        );
    }
}

#[test]
fn theme_variables_are_space_separated() {
    for line in STYLES.lines().map(str::trim) {
        if line.starts_with("--background:") || line.starts_with("--foreground:") || line.starts_with("--primary:") {
            assert!(!line.contains(','), "{line}");
        }
    }
}

#[test]
fn cards_rows_and_footer_have_themed_borders() {
    for selector in [".card {", ".row {", ".fact {", ".callout {", ".footer {"] {
        let rule = STYLES
            .lines()
            .find(|l| l.starts_with(selector))
            .unwrap_or_else(|| panic!("{selector} rule missing"));
        assert!(rule.contains("solid rgb(var(--foreground) / "), "{rule}");
    }
}
