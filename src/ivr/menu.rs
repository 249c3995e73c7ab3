//! The menu tree as an explicit state machine: two levels, two languages,
//! and a uniform invalid branch that repeats the current level.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Es,
}

impl Language {
    /// Lenient by design: the provider echoes `lang` back from the URLs we
    /// hand it, so anything unexpected falls back to English rather than
    /// failing the call.
    pub fn from_param(param: Option<&str>) -> Language {
        match param {
            Some("es") => Language::Es,
            _ => Language::En,
        }
    }

    pub fn menu_template(self) -> &'static str {
        match self {
            Language::En => "level2-en.xml",
            Language::Es => "level2-es.xml",
        }
    }
}

/// Outcome of the level 1 keypress (language selection).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level1Outcome {
    Advance(Language),
    Repeat,
}

pub fn route_level1(digits: &str) -> Level1Outcome {
    match digits {
        "1" => Level1Outcome::Advance(Language::En),
        "2" => Level1Outcome::Advance(Language::Es),
        _ => Level1Outcome::Repeat,
    }
}

impl Level1Outcome {
    pub fn template(self) -> &'static str {
        match self {
            Level1Outcome::Advance(Language::En) => "level1-action-en.xml",
            Level1Outcome::Advance(Language::Es) => "level1-action-es.xml",
            Level1Outcome::Repeat => "level1-action-invalid.xml",
        }
    }
}

/// Outcome of the level 2 keypress (action selection). Every variant
/// carries the language so the invalid branch repeats the menu without
/// resetting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level2Outcome {
    PlayAudio(Language),
    Connect(Language),
    Repeat(Language),
}

pub fn route_level2(digits: &str, lang: Language) -> Level2Outcome {
    match digits {
        "1" => Level2Outcome::PlayAudio(lang),
        "2" => Level2Outcome::Connect(lang),
        _ => Level2Outcome::Repeat(lang),
    }
}

impl Level2Outcome {
    pub fn template(self) -> &'static str {
        match self {
            Level2Outcome::PlayAudio(Language::En) => "level2-action-audio-en.xml",
            Level2Outcome::PlayAudio(Language::Es) => "level2-action-audio-es.xml",
            Level2Outcome::Connect(Language::En) => "level2-action-dial-en.xml",
            Level2Outcome::Connect(Language::Es) => "level2-action-dial-es.xml",
            Level2Outcome::Repeat(Language::En) => "level2-action-invalid-en.xml",
            Level2Outcome::Repeat(Language::Es) => "level2-action-invalid-es.xml",
        }
    }
}
