use serde::{Deserialize, Serialize};

use crate::ascii::AsciiChar;
use crate::class::CharClass;
use crate::config::TableConfig;

/// Colonne affichable dans la table ASCII.
///
/// # Example
/// ```
/// use ac_core::{AsciiChar, Column};
/// assert_eq!(Column::Hexadecimal.cell(AsciiChar::LeftSquareBracket), "5B");
/// assert_eq!(Column::Char.cell(AsciiChar::Escape), "ESC");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    /// Caractère littéral, ou mnémonique s'il n'est pas graphique.
    Char,
    Decimal,
    Hexadecimal,
    Octal,
    Binary,
    HtmlEntity,
    Escaped,
    /// Mnémonique de contrôle (vide pour les caractères graphiques).
    Mnemonic,
}

impl Column {
    /// Ordre par défaut des colonnes.
    pub const DEFAULT_ORDER: [Column; 8] = [
        Column::Char,
        Column::Decimal,
        Column::Hexadecimal,
        Column::Octal,
        Column::Binary,
        Column::HtmlEntity,
        Column::Escaped,
        Column::Mnemonic,
    ];

    /// Header text.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Char => "Char",
            Self::Decimal => "Dec",
            Self::Hexadecimal => "Hex",
            Self::Octal => "Oct",
            Self::Binary => "Bin",
            Self::HtmlEntity => "HTML",
            Self::Escaped => "Esc",
            Self::Mnemonic => "Mnem",
        }
    }

    /// Contenu de la cellule pour `ch`.
    #[must_use]
    pub fn cell(self, ch: AsciiChar) -> String {
        match self {
            Self::Char if ch.is_graphic() => ch.unicode(),
            Self::Char | Self::Mnemonic => ch.control_description().to_owned(),
            Self::Decimal => ch.decimal().to_string(),
            Self::Hexadecimal => ch.hexadecimal(),
            Self::Octal => ch.octal(),
            Self::Binary => ch.binary(),
            Self::HtmlEntity => ch.html_entity(),
            Self::Escaped => ch.escaped(),
        }
    }
}

/// Caractères retenus par la config : plage `first..=last`, filtrée par classe.
pub fn selected(config: &TableConfig) -> impl Iterator<Item = AsciiChar> + '_ {
    AsciiChar::range(config.first, config.last)
        .filter(move |&ch| config.class.is_none_or(|class| class.matches(ch)))
}

/// Rend la table ASCII en texte, une ligne par caractère retenu.
///
/// Chaque colonne est alignée à gauche sur sa cellule la plus large.
///
/// # Example
/// ```
/// use ac_core::{AsciiChar, CharClass, Column, TableConfig};
/// use ac_core::table::render_table;
///
/// let config = TableConfig {
///     columns: vec![Column::Char, Column::Hexadecimal],
///     first: AsciiChar::Digit0,
///     last: AsciiChar::Digit2,
///     header: false,
///     ..TableConfig::default()
/// };
/// assert_eq!(render_table(&config), "0 | 30\n1 | 31\n2 | 32\n");
/// ```
#[must_use]
pub fn render_table(config: &TableConfig) -> String {
    let columns: &[Column] = if config.columns.is_empty() {
        &Column::DEFAULT_ORDER
    } else {
        &config.columns
    };

    let mut rows: Vec<Vec<String>> = Vec::new();
    if config.header {
        rows.push(columns.iter().map(|c| c.title().to_owned()).collect());
    }
    rows.extend(selected(config).map(|ch| columns.iter().map(|c| c.cell(ch)).collect()));

    let mut widths = vec![0usize; columns.len()];
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{cell:<w$}"))
            .collect();
        out.push_str(cells.join(&config.separator).trim_end());
        out.push('\n');
    }
    out
}

/// Fiche détaillée d'un caractère : une ligne `nom: valeur` par représentation.
///
/// # Example
/// ```
/// use ac_core::AsciiChar;
/// use ac_core::table::describe;
/// let text = describe(AsciiChar::LeftSquareBracket);
/// assert!(text.contains("hexadecimal: 5B"));
/// assert!(text.contains("octal: 133"));
/// ```
#[must_use]
pub fn describe(ch: AsciiChar) -> String {
    let mut lines = vec![
        format!("name: {ch:?}"),
        format!("decimal: {}", ch.decimal()),
        format!("hexadecimal: {}", ch.hexadecimal()),
        format!("octal: {}", ch.octal()),
        format!("binary: {}", ch.binary()),
        format!("html: {}", ch.html_entity()),
        format!("escaped: {}", ch.escaped()),
    ];
    if !ch.control_description().is_empty() {
        lines.push(format!("mnemonic: {}", ch.control_description()));
    }
    let classes: Vec<&str> = CharClass::ALL
        .into_iter()
        .filter(|class| class.matches(ch))
        .map(CharClass::name)
        .collect();
    lines.push(format!("classes: {}", classes.join(", ")));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
