//! i18n - Internationalization Module
//!
//! Provides simple translation functions using HashMap-based lookups.

use std::collections::HashMap;
use std::sync::OnceLock;

use gpui::SharedString;
use serde::{Deserialize, Serialize};

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// English (US)
    #[default]
    #[serde(rename = "en-US")]
    EnUS,
    /// Spanish (Spain)
    #[serde(rename = "es-ES")]
    EsES,
}

impl Locale {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EnUS => "English",
            Locale::EsES => "Español",
        }
    }

    /// The other supported locale
    pub fn toggled(self) -> Self {
        match self {
            Locale::EnUS => Locale::EsES,
            Locale::EsES => Locale::EnUS,
        }
    }

    /// Map a language tag such as `es-MX` or `en` onto a supported locale
    pub fn from_tag(tag: &str) -> Self {
        let lang = tag.split(['-', '_']).next().unwrap_or_default();
        if lang.eq_ignore_ascii_case("es") {
            Locale::EsES
        } else {
            Locale::EnUS
        }
    }

    /// Detect the locale from the operating system
    pub fn detect() -> Self {
        Self::from_tag(&locale_config::Locale::current().to_string())
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();

/// Initialize translations (key -> (en, es))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // App
    map.insert("app-title", ("DealDesk", "DealDesk"));
    map.insert("app-subtitle", ("Transaction workspace", "Espacio de operaciones"));

    // Sections
    map.insert("section-deals", ("Transactions", "Operaciones"));
    map.insert("section-documents", ("Documents", "Documentos"));
    map.insert("section-parties", ("Parties", "Partes"));
    map.insert("section-commission", ("Commission split", "Reparto de comisión"));

    // Deal columns
    map.insert("col-address", ("Address", "Dirección"));
    map.insert("col-type", ("Type", "Tipo"));
    map.insert("col-status", ("Status", "Estado"));
    map.insert("col-price", ("Price", "Precio"));
    map.insert("col-closing-date", ("Closing date", "Fecha de cierre"));
    map.insert("col-agent", ("Agent", "Agente"));

    // Document columns
    map.insert("col-document", ("Document", "Documento"));
    map.insert("col-category", ("Category", "Categoría"));
    map.insert("col-uploaded", ("Uploaded", "Subido"));
    map.insert("col-size", ("Size (KB)", "Tamaño (KB)"));

    // Party columns
    map.insert("col-name", ("Name", "Nombre"));
    map.insert("col-role", ("Role", "Rol"));
    map.insert("col-email", ("Email", "Correo"));
    map.insert("col-phone", ("Phone", "Teléfono"));

    // Commission columns
    map.insert("col-recipient", ("Recipient", "Beneficiario"));
    map.insert("col-percent", ("Percent", "Porcentaje"));
    map.insert("col-amount", ("Amount", "Importe"));

    // Table
    map.insert("table-no-data", ("No data", "Sin datos"));
    map.insert("table-sorted-by", ("Sorted by", "Ordenado por"));
    map.insert("table-asc", ("ascending", "ascendente"));
    map.insert("table-desc", ("descending", "descendente"));
    map.insert("table-clear-selection", ("Clear Selection", "Borrar selección"));
    map.insert("table-selection-cleared", ("Selection cleared", "Selección borrada"));
    map.insert("table-rows-selected", ("{count} row(s) selected", "{count} fila(s) seleccionada(s)"));
    map.insert("table-new-entry", ("Add a new entry...", "Añadir una entrada..."));
    map.insert("table-total", ("Total", "Total"));

    // Notices
    map.insert("notice-title", ("Notices", "Avisos"));
    map.insert("notice-clear", ("Clear", "Borrar"));
    map.insert("notice-row-deleted", ("Row deleted", "Fila eliminada"));
    map.insert("notice-invalid-number", ("Invalid number", "Número no válido"));

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> SharedString {
    if let Some(&(en, es)) = translations().get(key) {
        match locale {
            Locale::EnUS => SharedString::from(en),
            Locale::EsES => SharedString::from(es),
        }
    } else {
        // Fallback: return the key itself
        SharedString::from(key.to_string())
    }
}
