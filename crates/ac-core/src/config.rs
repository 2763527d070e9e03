use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::ascii::AsciiChar;
use crate::class::CharClass;
use crate::table::Column;

/// Configuration du rendu de la table ASCII.
///
/// Sérialisable en TOML. Chaque champ a une valeur par défaut saine.
/// Les bornes `first`/`last` sont écrites sous forme de code point (0..=127).
///
/// # Example
/// ```
/// use ac_core::{AsciiChar, TableConfig};
/// let config = TableConfig::default();
/// assert_eq!(config.first, AsciiChar::Null);
/// assert_eq!(config.last, AsciiChar::Delete);
/// assert!(config.header);
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct TableConfig {
    /// Colonnes affichées, dans l'ordre.
    pub columns: Vec<Column>,
    /// Premier caractère de la plage (inclus).
    pub first: AsciiChar,
    /// Dernier caractère de la plage (inclus).
    pub last: AsciiChar,
    /// Filtre optionnel par classe.
    pub class: Option<CharClass>,
    /// Afficher la ligne d'en-tête.
    pub header: bool,
    /// Séparateur entre colonnes.
    pub separator: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            columns: Column::DEFAULT_ORDER.to_vec(),
            first: AsciiChar::Null,
            last: AsciiChar::Delete,
            class: None,
            header: true,
            separator: " | ".to_string(),
        }
    }
}

impl TableConfig {
    /// Remet la config dans un état cohérent après désérialisation.
    ///
    /// Bornes inversées → échangées. Liste de colonnes vide → colonnes par défaut.
    pub fn normalize(&mut self) {
        if self.first > self.last {
            log::warn!(
                "Plage inversée ({:?} > {:?}), bornes échangées",
                self.first,
                self.last
            );
            std::mem::swap(&mut self.first, &mut self.last);
        }
        if self.columns.is_empty() {
            self.columns = Column::DEFAULT_ORDER.to_vec();
        }
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    table: Option<TableSection>,
}

/// Table section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
struct TableSection {
    columns: Option<Vec<Column>>,
    first: Option<AsciiChar>,
    last: Option<AsciiChar>,
    class: Option<CharClass>,
    header: Option<bool>,
    separator: Option<String>,
}

/// Parse un document TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the document is not valid TOML, a code point is
/// above 127, or a column/class name is unknown.
///
/// # Example
/// ```
/// use ac_core::{AsciiChar, CharClass};
/// use ac_core::config::parse_config;
/// let config = parse_config("[table]\nfirst = 65\nlast = 90\nclass = \"uppercase\"\n").unwrap();
/// assert_eq!(config.first, AsciiChar::CapitalA);
/// assert_eq!(config.class, Some(CharClass::Uppercase));
/// ```
pub fn parse_config(content: &str) -> Result<TableConfig> {
    let file: ConfigFile = toml::from_str(content).context("Erreur de parsing TOML")?;

    let mut config = TableConfig::default();

    if let Some(t) = file.table {
        if let Some(v) = t.columns {
            config.columns = v;
        }
        if let Some(v) = t.first {
            config.first = v;
        }
        if let Some(v) = t.last {
            config.last = v;
        }
        if let Some(v) = t.class {
            config.class = Some(v);
        }
        if let Some(v) = t.header {
            config.header = v;
        }
        if let Some(v) = t.separator {
            config.separator = v;
        }
    }

    config.normalize();
    Ok(config)
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use ac_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("asciichar.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<TableConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    let config =
        parse_config(&content).with_context(|| format!("Config invalide : {}", path.display()))?;
    log::debug!("Config chargée depuis {}", path.display());
    Ok(config)
}
