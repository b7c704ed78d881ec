use crate::error::ValidationError;
use std::fmt;
use std::str::FromStr;

/// Day of the week a harvest entry was collected on.
///
/// Stored and displayed with its Spanish label (`"Lunes"`, `"Martes"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, sqlx::Type)]
pub enum Weekday {
    #[default]
    #[sqlx(rename = "Lunes")]
    Monday,
    #[sqlx(rename = "Martes")]
    Tuesday,
    #[sqlx(rename = "Miércoles")]
    Wednesday,
    #[sqlx(rename = "Jueves")]
    Thursday,
    #[sqlx(rename = "Viernes")]
    Friday,
    #[sqlx(rename = "Sábado")]
    Saturday,
    #[sqlx(rename = "Domingo")]
    Sunday,
}

impl Weekday {
    /// Display order, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Weekday::Monday => "Lunes",
            Weekday::Tuesday => "Martes",
            Weekday::Wednesday => "Miércoles",
            Weekday::Thursday => "Jueves",
            Weekday::Friday => "Viernes",
            Weekday::Saturday => "Sábado",
            Weekday::Sunday => "Domingo",
        }
    }

    /// Parses a submitted day, falling back to Monday when the field is blank.
    pub fn parse_or_default(raw: &str) -> Result<Self, ValidationError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Weekday::default());
        }
        raw.parse()
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Weekday {
    type Err = ValidationError;

    /// Accepts Spanish labels (with or without accents) and English names, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let day = match s.trim().to_lowercase().as_str() {
            "lunes" | "monday" => Weekday::Monday,
            "martes" | "tuesday" => Weekday::Tuesday,
            "miércoles" | "miercoles" | "wednesday" => Weekday::Wednesday,
            "jueves" | "thursday" => Weekday::Thursday,
            "viernes" | "friday" => Weekday::Friday,
            "sábado" | "sabado" | "saturday" => Weekday::Saturday,
            "domingo" | "sunday" => Weekday::Sunday,
            _ => return Err(ValidationError::UnknownDay(s.to_string())),
        };
        Ok(day)
    }
}
