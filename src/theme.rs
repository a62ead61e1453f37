use eframe::egui::{Color32, Visuals};

use crate::store::{KeyValueStore, StorageError};

const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// Colours for one theme. Alpha is applied per draw call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: Color32,
    pub node: Color32,
    pub connection: Color32,
    pub star: Color32,
    pub star_opacity: f32,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// The gallery is dark unless light was explicitly chosen.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    pub fn load(store: &dyn KeyValueStore) -> Self {
        Self::from_stored(store.get(THEME_KEY).as_deref())
    }

    pub fn save(self, store: &mut dyn KeyValueStore) -> Result<(), StorageError> {
        store.set(THEME_KEY, self.as_str())
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Self::Dark => Palette {
                background: Color32::from_rgb(7, 13, 20),
                node: Color32::WHITE,
                connection: Color32::from_rgb(200, 200, 200),
                star: Color32::WHITE,
                star_opacity: 1.0,
            },
            Self::Light => Palette {
                background: Color32::from_rgb(232, 241, 248),
                node: Color32::BLACK,
                connection: Color32::from_rgb(15, 15, 15),
                star: Color32::from_rgb(100, 120, 140),
                star_opacity: 0.6,
            },
        }
    }

    pub fn visuals(self) -> Visuals {
        match self {
            Self::Dark => Visuals::dark(),
            Self::Light => Visuals::light(),
        }
    }

    /// Icon for the toggle button: the sun switches to light, the moon back to dark.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Dark => "☀",
            Self::Light => "🌙",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn unknown_or_missing_preference_is_dark() {
        assert_eq!(Theme::from_stored(None), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("sepia")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
    }

    #[test]
    fn toggle_persists_round_trip() {
        let mut store = MemoryStore::default();
        assert_eq!(Theme::load(&store), Theme::Dark);

        let next = Theme::load(&store).toggled();
        next.save(&mut store).expect("memory write");
        assert_eq!(Theme::load(&store), Theme::Light);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));

        Theme::Light.toggled().save(&mut store).expect("memory write");
        assert_eq!(Theme::load(&store), Theme::Dark);
    }

    #[test]
    fn light_palette_dims_stars() {
        assert!(Theme::Light.palette().star_opacity < Theme::Dark.palette().star_opacity);
        assert_ne!(Theme::Light.palette().background, Theme::Dark.palette().background);
    }
}
