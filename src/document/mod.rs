//! Modèle de document INI ligne à ligne
//!
//! Le document conserve chaque ligne telle quelle (commentaires, clés
//! inconnues, espaces, fins de ligne `\r\n`). Les opérations d'édition ne
//! réordonnent jamais deux lignes conservées.

pub mod section;

use std::fmt;

pub use section::*;

/// En-tête par défaut utilisé quand aucun INI n'existe encore
pub const DEFAULT_HEADER: &str = "[General]\n\
MameStart=\"cmo 1 baud=9600_parity=N_data=8_stop=1\", \"cmo 2 baud=9600_parity=N_data=8_stop=1\", cmw 1 S6, cmw 2 S6\n\
MameStop=cmw 1 E, cmw 2 E, cmc 1, cmc 2\n\
StateChange=\n\
OnRotate=\n\
OnPause=\n\
\n\
[KeyStates]\n\
RefreshTime=\n\
\n";

/// Ligne brute du document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub raw: String,
}

impl Line {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Contenu sans espaces ni `\r` aux extrémités
    pub fn trimmed(&self) -> &str {
        self.raw.trim()
    }
}

/// Document INI sous forme de suite ordonnée de lignes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDocument {
    lines: Vec<Line>,

    /// Le document d'origine utilise des fins de ligne `\r\n`
    crlf: bool,
}

impl LineDocument {
    /// Découpe un texte brut en lignes (séparateur `\n`)
    pub fn parse(text: &str) -> Self {
        let lines: Vec<Line> = text.split('\n').map(Line::new).collect();
        let crlf = lines.first().map_or(false, |l| l.raw.ends_with('\r'));
        Self { lines, crlf }
    }

    /// Reconstruit le texte brut
    pub fn to_text(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.raw.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(|l| l.raw.is_empty())
    }

    /// Liste ordonnée des sections
    pub fn sections(&self) -> Vec<Section> {
        scan_sections(&self.lines)
    }

    /// Cherche une section par nom (insensible à la casse)
    pub fn find_section(&self, name: &str) -> Option<Span> {
        self.sections()
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
            .map(Span::from)
    }

    /// Texte du contenu d'une section (sans l'en-tête)
    pub fn section_text(&self, name: &str) -> Option<String> {
        self.find_section(name).map(|span| self.span_text(span))
    }

    /// Texte d'une étendue de lignes
    pub fn span_text(&self, span: Span) -> String {
        self.lines[span.start..span.end]
            .iter()
            .map(|l| l.raw.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Index de la première ligne dont le contenu commence par `prefix`
    pub fn find_line_with_prefix(&self, prefix: &str) -> Option<usize> {
        self.lines
            .iter()
            .position(|l| starts_with_ignore_case(l.trimmed(), prefix))
    }

    /// Index de la première affectation `key = ...`
    pub fn find_key_line(&self, key: &str) -> Option<usize> {
        self.lines.iter().position(|l| is_key_line(l.trimmed(), key))
    }

    /// Réécrit la première ligne commençant par `prefix`
    pub fn replace_line_with_prefix(&mut self, prefix: &str, new_line: &str) -> bool {
        match self.find_line_with_prefix(prefix) {
            Some(index) => {
                self.set_line(index, new_line);
                true
            }
            None => false,
        }
    }

    /// Réécrit la première affectation de `key`, sans toucher aux clés plus longues
    pub fn replace_key_line(&mut self, key: &str, new_line: &str) -> bool {
        match self.find_key_line(key) {
            Some(index) => {
                self.set_line(index, new_line);
                true
            }
            None => false,
        }
    }

    /// Insère une ligne juste après l'en-tête d'une section.
    ///
    /// Si la section n'existe pas, elle est créée en fin de document puis la
    /// ligne est insérée sous son en-tête.
    pub fn insert_after_header(&mut self, section_name: &str, new_line: &str) {
        let header = match self.find_section(section_name).map(|s| s.header) {
            Some(header) => header,
            None => self.append_section(section_name),
        };
        let line = self.terminated(new_line);
        self.lines.insert(header + 1, line);
    }

    /// Supprime toutes les lignes satisfaisant le prédicat, en une passe
    pub fn remove_matching<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&Line) -> bool,
    {
        let before = self.lines.len();
        self.lines.retain(|line| !predicate(line));
        before - self.lines.len()
    }

    /// Supprime les lignes d'une seule section satisfaisant le prédicat
    pub fn remove_matching_in<F>(&mut self, section_name: &str, mut predicate: F) -> usize
    where
        F: FnMut(&Line) -> bool,
    {
        let span = match self.find_section(section_name) {
            Some(span) => span,
            None => return 0,
        };

        let before = self.lines.len();
        let mut index = 0;
        self.lines.retain(|line| {
            let keep = !(span.contains(index) && predicate(line));
            index += 1;
            keep
        });
        before - self.lines.len()
    }

    /// Ajoute un en-tête de section en fin de document et retourne son index
    fn append_section(&mut self, name: &str) -> usize {
        let header = self.terminated(&format!("[{}]", name));
        // Garder la fin de fichier vide après la nouvelle section
        let index = match self.lines.last() {
            Some(last) if last.raw.is_empty() => self.lines.len() - 1,
            _ => self.lines.len(),
        };
        self.lines.insert(index, header);
        index
    }

    fn set_line(&mut self, index: usize, new_line: &str) {
        let keep_cr = self.lines[index].raw.ends_with('\r');
        self.lines[index].raw = if keep_cr {
            format!("{}\r", new_line)
        } else {
            new_line.to_string()
        };
    }

    fn terminated(&self, raw: &str) -> Line {
        if self.crlf {
            Line::new(format!("{}\r", raw))
        } else {
            Line::new(raw)
        }
    }
}

impl Default for LineDocument {
    fn default() -> Self {
        Self::parse(DEFAULT_HEADER)
    }
}

impl fmt::Display for LineDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

/// Prépare le texte d'une session : en-tête par défaut si rien n'existe,
/// ou préfixé si la section `[General]` manque.
pub fn with_default_header(existing: Option<&str>) -> String {
    match existing {
        None => DEFAULT_HEADER.to_string(),
        Some(text) if LineDocument::parse(text).find_section("General").is_none() => {
            format!("{}{}", DEFAULT_HEADER, text)
        }
        Some(text) => text.to_string(),
    }
}

/// Comparaison de préfixe insensible à la casse (ASCII)
pub fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.len() >= prefix.len()
        && text.is_char_boundary(prefix.len())
        && text[..prefix.len()].eq_ignore_ascii_case(prefix)
}

/// `key` suivi d'espaces optionnels puis `=`
pub fn is_key_line(trimmed: &str, key: &str) -> bool {
    starts_with_ignore_case(trimmed, key) && trimmed[key.len()..].trim_start().starts_with('=')
}
