use crate::icons::Icon;

/// Page color variant. Not persisted; every load starts dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }

    // The toggle shows where a click takes you.
    pub fn toggle_icon(self) -> Icon {
        match self {
            Theme::Dark => Icon::Sun,
            Theme::Light => Icon::Moon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toggle_n(start: Theme, n: usize) -> Theme {
        (0..n).fold(start, |t, _| t.toggled())
    }

    #[test]
    fn default_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(Theme::default().css_class(), "dark");
    }

    #[test]
    fn even_toggles_restore_odd_toggles_flip() {
        for start in [Theme::Dark, Theme::Light] {
            for n in 0..7 {
                let end = toggle_n(start, n);
                if n % 2 == 0 {
                    assert_eq!(end, start, "{n} toggles from {start:?}");
                } else {
                    assert_eq!(end, start.toggled(), "{n} toggles from {start:?}");
                }
            }
        }
    }

    #[test]
    fn toggle_icon_tracks_theme() {
        assert_eq!(Theme::Dark.toggle_icon(), Icon::Sun);
        assert_eq!(Theme::Light.toggle_icon(), Icon::Moon);
    }
}
