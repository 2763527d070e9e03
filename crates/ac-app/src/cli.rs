use std::path::PathBuf;

use ac_core::{AsciiChar, CharClass};
use clap::Parser;

/// asciichar : table ASCII et conversions d'un caractère.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Code point à décrire (entier, 0..=127).
    #[arg(long, allow_negative_numbers = true, conflicts_with = "character")]
    pub code: Option<i64>,

    /// Caractère à décrire (chaîne d'un seul caractère ASCII).
    #[arg(long = "char")]
    pub character: Option<String>,

    /// Afficher la table (défaut si aucun caractère n'est demandé).
    #[arg(long, default_value_t = false)]
    pub table: bool,

    /// Filtrer la table par classe : digit, letter, whitespace, control, ...
    #[arg(long)]
    pub class: Option<String>,

    /// Fichier de configuration TOML.
    #[arg(short, long, default_value = "asciichar.toml")]
    pub config: PathBuf,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Resolve the `--code`/`--char` lookup, if one was requested.
    ///
    /// # Errors
    /// Returns an error naming the input when it is not an ASCII character.
    pub fn lookup(&self) -> anyhow::Result<Option<AsciiChar>> {
        if let Some(code) = self.code {
            return AsciiChar::from_int(code)
                .map(Some)
                .ok_or_else(|| anyhow::anyhow!("Code hors plage ASCII (0..=127) : {code}"));
        }
        if let Some(ref s) = self.character {
            return AsciiChar::from_single_str(s)
                .map(Some)
                .ok_or_else(|| anyhow::anyhow!("Pas un caractère ASCII unique : {s:?}"));
        }
        Ok(None)
    }

    /// Parse `--class`, if given.
    ///
    /// # Errors
    /// Returns an error if the class name is unknown.
    pub fn class_filter(&self) -> anyhow::Result<Option<CharClass>> {
        let Some(ref name) = self.class else {
            return Ok(None);
        };
        CharClass::from_name(name).map(Some).ok_or_else(|| {
            let known: Vec<&str> = CharClass::ALL.into_iter().map(CharClass::name).collect();
            anyhow::anyhow!("Classe inconnue : {name}. Classes : {}", known.join(", "))
        })
    }
}
