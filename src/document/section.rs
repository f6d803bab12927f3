//! Découpage en sections `[Nom]` d'un document INI

use super::Line;

/// Section nommée d'un document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Nom entre crochets, sans les crochets
    pub name: String,

    /// Index de la ligne d'en-tête
    pub header: usize,

    /// Première ligne du contenu (juste après l'en-tête)
    pub start: usize,

    /// Fin du contenu (exclusive)
    pub end: usize,
}

/// Étendue d'une section dans le document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Index de l'en-tête
    pub header: usize,

    /// Première ligne du contenu
    pub start: usize,

    /// Fin du contenu (exclusive)
    pub end: usize,
}

impl Span {
    /// Vérifie si un index de ligne appartient au contenu de la section
    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }

    /// Nombre de lignes de contenu
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Section sans contenu
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl From<&Section> for Span {
    fn from(section: &Section) -> Self {
        Self {
            header: section.header,
            start: section.start,
            end: section.end,
        }
    }
}

/// Extrait le nom d'une ligne d'en-tête `[Nom]`
pub fn header_name(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.len() >= 2 && trimmed.starts_with('[') && trimmed.ends_with(']') {
        Some(trimmed[1..trimmed.len() - 1].trim())
    } else {
        None
    }
}

/// Calcule la liste ordonnée des sections d'un ensemble de lignes
pub fn scan_sections(lines: &[Line]) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        if let Some(name) = header_name(&line.raw) {
            if let Some(previous) = sections.last_mut() {
                previous.end = index;
            }
            sections.push(Section {
                name: name.to_string(),
                header: index,
                start: index + 1,
                end: lines.len(),
            });
        }
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<Line> {
        text.split('\n').map(Line::new).collect()
    }

    #[test]
    fn test_header_name() {
        assert_eq!(header_name("[General]"), Some("General"));
        assert_eq!(header_name("  [ Output ]  "), Some("Output"));
        assert_eq!(header_name("P1_Clip = cmw 1 XX"), None);
        assert_eq!(header_name("["), None);
    }

    #[test]
    fn test_sections_never_overlap() {
        let doc = lines("; preamble\n[General]\nA=1\n\n[Output]\nP1_Clip =\n");
        let sections = scan_sections(&doc);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].name, "General");
        assert_eq!((sections[0].start, sections[0].end), (2, 4));
        assert_eq!(sections[1].name, "Output");
        assert_eq!((sections[1].start, sections[1].end), (5, 7));
        // Le préambule n'appartient à aucune section
        assert!(sections.iter().all(|s| !Span::from(s).contains(0)));
    }

    #[test]
    fn test_document_without_headers_has_no_sections() {
        let doc = lines("A=1\nB=2");
        assert!(scan_sections(&doc).is_empty());
    }
}
