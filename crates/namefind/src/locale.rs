//! User-facing strings keyed by locale

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Supported display languages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    English,
    Spanish,
}

/// One locale's string table
#[derive(Debug)]
pub struct Messages {
    pub title: &'static str,
    pub placeholder: &'static str,
    pub help_text: &'static str,
    pub exact_match: &'static str,
    pub results_found: &'static str,
    pub not_found: &'static str,
    pub similar_found: &'static str,
    pub does_not_exist: &'static str,
    pub variations_found: &'static str,
    pub history: &'static str,
    pub history_empty: &'static str,
    pub history_cleared: &'static str,
    pub exported: &'static str,
    pub nothing_to_export: &'static str,
    pub language_set: &'static str,
    pub commands: &'static str,
}

static ENGLISH: Messages = Messages {
    title: "Provider Name Lookup",
    placeholder: "Type a name here...",
    help_text: "Enter the exact name (case-sensitive, no extra spaces)",
    exact_match: "Exact Match Found",
    results_found: "results found",
    not_found: "No Exact Match, but Similar Names Found:",
    similar_found: "similar names found",
    does_not_exist: "Name Does Not Exist in the database.",
    variations_found: "Unique Variations Found:",
    history: "Search History",
    history_empty: "No searches yet.",
    history_cleared: "Search history cleared.",
    exported: "Results exported to",
    nothing_to_export: "Nothing to export yet, run a search first.",
    language_set: "Language set to English.",
    commands: "Commands: :history  :clear  :lang <en|es>  :export <file.csv>  :help  :quit",
};

static SPANISH: Messages = Messages {
    title: "Búsqueda de Nombres de Proveedores",
    placeholder: "Escriba un nombre aquí...",
    help_text: "Ingrese el nombre exacto (distingue mayúsculas y espacios)",
    exact_match: "Coincidencia Exacta Encontrada",
    results_found: "resultados encontrados",
    not_found: "No hay coincidencia exacta, pero encontramos nombres similares:",
    similar_found: "nombres similares encontrados",
    does_not_exist: "El nombre no existe en la base de datos.",
    variations_found: "Variaciones Únicas Encontradas:",
    history: "Historial de Búsqueda",
    history_empty: "Todavía no hay búsquedas.",
    history_cleared: "Historial de búsqueda borrado.",
    exported: "Resultados exportados a",
    nothing_to_export: "Nada que exportar todavía, realice una búsqueda primero.",
    language_set: "Idioma cambiado a Español.",
    commands: "Comandos: :history  :clear  :lang <en|es>  :export <archivo.csv>  :help  :quit",
};

impl Locale {
    pub fn messages(self) -> &'static Messages {
        match self {
            Locale::English => &ENGLISH,
            Locale::Spanish => &SPANISH,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Spanish => "es",
        }
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::English),
            "es" | "spanish" | "español" | "espanol" => Ok(Locale::Spanish),
            other => Err(Error::Config(format!(
                "unsupported language '{}', expected en or es",
                other
            ))),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::English);
        assert_eq!(" English ".parse::<Locale>().unwrap(), Locale::English);
        assert_eq!("ES".parse::<Locale>().unwrap(), Locale::Spanish);
        assert_eq!("Español".parse::<Locale>().unwrap(), Locale::Spanish);
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn test_messages_differ() {
        assert_ne!(
            Locale::English.messages().exact_match,
            Locale::Spanish.messages().exact_match
        );
    }

    #[test]
    fn test_display_round_trips() {
        for locale in [Locale::English, Locale::Spanish] {
            assert_eq!(locale.to_string().parse::<Locale>().unwrap(), locale);
        }
    }
}
