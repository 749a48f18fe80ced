//! # Corpus de Demonstração
//!
//! Palavras com separação silábica e tônica de referência, escolhidas para
//! exercitar cada regra do segmentador e do localizador da tônica. Usado pela
//! demonstração da CLI, pela interface web e pelos testes do harness.
//!
//! ## Fenômenos Cobertos
//! - Consoantes dobradas (`rr`, `ss`)
//! - Dígrafos (`ch`, `lh`, `nh`, `gu`, `qu`)
//! - Encontros consonantais inseparáveis e codas longas
//! - Hiato com acento forte e ditongos decrescentes acentuados
//! - Palavras compostas com hífen

use crate::dictionary::RawEntry;

/// Uma palavra anotada com a separação e a tônica (contada do fim).
pub struct ReferenceWord {
    pub word: &'static str,
    pub syllables: &'static [&'static str],
    pub tonic: usize,
    /// Fenômeno que a palavra ilustra.
    pub phenomenon: &'static str,
}

impl ReferenceWord {
    pub fn to_entry(&self) -> RawEntry {
        RawEntry::new(self.word, self.syllables, self.tonic as i64)
    }
}

/// Retorna o corpus completo de demonstração.
pub fn reference_words() -> Vec<ReferenceWord> {
    vec![
        // ===== CONSOANTES DOBRADAS =====
        ReferenceWord { word: "carro", syllables: &["car", "ro"], tonic: 2, phenomenon: "rr" },
        ReferenceWord { word: "guitarra", syllables: &["gui", "tar", "ra"], tonic: 2, phenomenon: "rr" },
        ReferenceWord { word: "pêssego", syllables: &["pês", "se", "go"], tonic: 3, phenomenon: "ss" },
        ReferenceWord { word: "pássaro", syllables: &["pás", "sa", "ro"], tonic: 3, phenomenon: "ss" },
        ReferenceWord { word: "passarinho", syllables: &["pas", "sa", "ri", "nho"], tonic: 2, phenomenon: "ss" },
        // ===== DÍGRAFOS =====
        ReferenceWord { word: "chuva", syllables: &["chu", "va"], tonic: 2, phenomenon: "ch" },
        ReferenceWord { word: "palha", syllables: &["pa", "lha"], tonic: 2, phenomenon: "lh" },
        ReferenceWord { word: "mulher", syllables: &["mu", "lher"], tonic: 1, phenomenon: "lh" },
        ReferenceWord { word: "ninho", syllables: &["ni", "nho"], tonic: 2, phenomenon: "nh" },
        ReferenceWord { word: "queijo", syllables: &["quei", "jo"], tonic: 2, phenomenon: "qu" },
        // ===== ENCONTROS CONSONANTAIS =====
        ReferenceWord { word: "atleta", syllables: &["a", "tle", "ta"], tonic: 2, phenomenon: "encontro" },
        ReferenceWord { word: "plano", syllables: &["pla", "no"], tonic: 2, phenomenon: "encontro" },
        ReferenceWord { word: "sublime", syllables: &["su", "bli", "me"], tonic: 2, phenomenon: "encontro" },
        ReferenceWord { word: "perspectiva", syllables: &["pers", "pec", "ti", "va"], tonic: 2, phenomenon: "coda longa" },
        ReferenceWord { word: "transporte", syllables: &["trans", "por", "te"], tonic: 2, phenomenon: "coda longa" },
        ReferenceWord { word: "monstro", syllables: &["mons", "tro"], tonic: 2, phenomenon: "coda longa" },
        ReferenceWord { word: "apto", syllables: &["ap", "to"], tonic: 2, phenomenon: "coda" },
        ReferenceWord { word: "psicólogo", syllables: &["psi", "có", "lo", "go"], tonic: 3, phenomenon: "ataque complexo" },
        ReferenceWord { word: "computador", syllables: &["com", "pu", "ta", "dor"], tonic: 1, phenomenon: "coda" },
        // ===== TÔNICA =====
        ReferenceWord { word: "devagar", syllables: &["de", "va", "gar"], tonic: 1, phenomenon: "sufixo r" },
        ReferenceWord { word: "feliz", syllables: &["fe", "liz"], tonic: 1, phenomenon: "sufixo z" },
        ReferenceWord { word: "animal", syllables: &["a", "ni", "mal"], tonic: 1, phenomenon: "sufixo l" },
        ReferenceWord { word: "café", syllables: &["ca", "fé"], tonic: 1, phenomenon: "acento agudo" },
        ReferenceWord { word: "lápis", syllables: &["lá", "pis"], tonic: 2, phenomenon: "acento agudo" },
        ReferenceWord { word: "relógio", syllables: &["re", "ló", "gio"], tonic: 2, phenomenon: "acento agudo" },
        ReferenceWord { word: "também", syllables: &["tam", "bém"], tonic: 1, phenomenon: "acento agudo" },
        ReferenceWord { word: "coração", syllables: &["co", "ra", "ção"], tonic: 1, phenomenon: "til" },
        ReferenceWord { word: "casa", syllables: &["ca", "sa"], tonic: 2, phenomenon: "paroxítona padrão" },
        // ===== HIATO E COMPOSTOS =====
        ReferenceWord { word: "saúde", syllables: &["sa", "ú", "de"], tonic: 2, phenomenon: "hiato" },
        ReferenceWord { word: "céu", syllables: &["céu"], tonic: 1, phenomenon: "ditongo decrescente" },
        ReferenceWord { word: "herói", syllables: &["he", "rói"], tonic: 1, phenomenon: "ditongo decrescente" },
        ReferenceWord { word: "papéis", syllables: &["pa", "péis"], tonic: 1, phenomenon: "ditongo decrescente" },
        ReferenceWord { word: "chapéu", syllables: &["cha", "péu"], tonic: 1, phenomenon: "ditongo decrescente" },
        ReferenceWord { word: "guarda-chuva", syllables: &["guar", "da", "chu", "va"], tonic: 2, phenomenon: "hífen" },
    ]
}

/// O corpus no formato de entrada do harness.
pub fn reference_dictionary() -> Vec<RawEntry> {
    reference_words().iter().map(ReferenceWord::to_entry).collect()
}

/// Apenas as palavras, para exemplos na interface.
pub fn demo_words() -> Vec<&'static str> {
    reference_words().iter().map(|w| w.word).collect()
}
