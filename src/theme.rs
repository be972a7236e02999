use leptos::logging::{log, warn};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Mode::Light => Mode::Dark,
            Mode::Dark => Mode::Light,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseModeError {
    pub value: String,
}

impl fmt::Display for ParseModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown theme mode {:?}", self.value)
    }
}

impl std::error::Error for ParseModeError {}

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Mode::Light),
            "dark" => Ok(Mode::Dark),
            other => Err(ParseModeError {
                value: other.to_string(),
            }),
        }
    }
}

/// Where the theme store reads its startup signals from and where it pushes
/// every committed mode.
pub trait ThemeEnv {
    fn saved_mode(&self) -> Option<String>;
    fn prefers_dark(&self) -> bool;
    fn persist(&self, mode: Mode);
    fn apply(&self, mode: Mode);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeSource {
    Saved,
    System,
    Fallback,
}

pub fn resolve_initial_mode(env: &impl ThemeEnv) -> (Mode, ModeSource) {
    if let Some(saved) = env.saved_mode() {
        match saved.parse::<Mode>() {
            Ok(mode) => return (mode, ModeSource::Saved),
            Err(e) => warn!("ignoring saved theme: {e}"),
        }
    }
    if env.prefers_dark() {
        (Mode::Dark, ModeSource::System)
    } else {
        (Mode::Light, ModeSource::Fallback)
    }
}

#[derive(Debug)]
pub struct ThemeStore<E> {
    mode: Mode,
    env: E,
}

impl<E: ThemeEnv> ThemeStore<E> {
    pub fn initialize(env: E) -> Self {
        let (mode, source) = resolve_initial_mode(&env);
        log!("theme resolved to {mode} ({source:?})");
        // Mirror onto the document root without writing the preference back.
        env.apply(mode);
        Self { mode, env }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn toggle(&mut self) -> Mode {
        self.mode = self.mode.toggled();
        self.commit();
        self.mode
    }

    pub fn set(&mut self, mode: Mode) -> Mode {
        self.mode = mode;
        self.commit();
        self.mode
    }

    fn commit(&self) {
        self.env.persist(self.mode);
        self.env.apply(self.mode);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Recorded {
        persisted: Vec<Mode>,
        applied: Vec<Mode>,
    }

    #[derive(Clone, Default)]
    struct MemoryEnv {
        saved: Option<String>,
        dark: bool,
        log: Rc<RefCell<Recorded>>,
    }

    impl MemoryEnv {
        fn new(saved: Option<&str>, dark: bool) -> Self {
            Self {
                saved: saved.map(str::to_string),
                dark,
                log: Rc::default(),
            }
        }
    }

    impl ThemeEnv for MemoryEnv {
        fn saved_mode(&self) -> Option<String> {
            self.saved.clone()
        }

        fn prefers_dark(&self) -> bool {
            self.dark
        }

        fn persist(&self, mode: Mode) {
            self.log.borrow_mut().persisted.push(mode);
        }

        fn apply(&self, mode: Mode) {
            self.log.borrow_mut().applied.push(mode);
        }
    }

    #[test]
    fn saved_preference_beats_system_preference() {
        let store = ThemeStore::initialize(MemoryEnv::new(Some("dark"), false));
        assert_eq!(store.mode(), Mode::Dark);

        let store = ThemeStore::initialize(MemoryEnv::new(Some("light"), true));
        assert_eq!(store.mode(), Mode::Light);
    }

    #[test]
    fn falls_back_to_system_then_light() {
        let store = ThemeStore::initialize(MemoryEnv::new(None, true));
        assert_eq!(store.mode(), Mode::Dark);

        let store = ThemeStore::initialize(MemoryEnv::new(None, false));
        assert_eq!(store.mode(), Mode::Light);
    }

    #[test]
    fn unparsable_saved_value_is_ignored() {
        let env = MemoryEnv::new(Some("Dark"), true);
        assert_eq!(resolve_initial_mode(&env), (Mode::Dark, ModeSource::System));

        let env = MemoryEnv::new(Some("sepia"), false);
        assert_eq!(resolve_initial_mode(&env), (Mode::Light, ModeSource::Fallback));
    }

    #[test]
    fn initialize_applies_without_persisting() {
        let env = MemoryEnv::new(None, true);
        let log = env.log.clone();
        ThemeStore::initialize(env);
        assert_eq!(log.borrow().applied, vec![Mode::Dark]);
        assert!(log.borrow().persisted.is_empty());
    }

    #[test]
    fn toggle_twice_restores_mode_and_commits_each_time() {
        let env = MemoryEnv::new(Some("light"), false);
        let log = env.log.clone();
        let mut store = ThemeStore::initialize(env);

        assert_eq!(store.toggle(), Mode::Dark);
        assert_eq!(store.toggle(), Mode::Light);
        assert_eq!(log.borrow().persisted, vec![Mode::Dark, Mode::Light]);
        assert_eq!(
            log.borrow().applied,
            vec![Mode::Light, Mode::Dark, Mode::Light]
        );
    }

    #[test]
    fn set_persists_even_when_unchanged() {
        let env = MemoryEnv::new(Some("dark"), false);
        let log = env.log.clone();
        let mut store = ThemeStore::initialize(env);

        assert_eq!(store.set(Mode::Dark), Mode::Dark);
        assert_eq!(store.set(Mode::Light), Mode::Light);
        assert_eq!(log.borrow().persisted, vec![Mode::Dark, Mode::Light]);
    }

    #[test]
    fn mode_strings_are_exact() {
        assert_eq!("light".parse::<Mode>(), Ok(Mode::Light));
        assert_eq!("dark".parse::<Mode>(), Ok(Mode::Dark));
        assert!("DARK".parse::<Mode>().is_err());
        assert!("".parse::<Mode>().is_err());
        assert_eq!(Mode::Dark.to_string(), "dark");
    }
}
