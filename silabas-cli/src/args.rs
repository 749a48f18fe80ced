//! Definição dos argumentos da linha de comando

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use silabas_core::HiatusPolicy;

#[derive(Parser, Debug)]
#[command(name = "silabas")]
#[command(about = "Separação silábica e sílaba tônica do Português")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Separa uma palavra e localiza a sílaba tônica
    Analyze {
        /// Palavra a analisar
        word: String,

        /// Mostra apenas a tônica
        #[arg(long, conflicts_with = "syllable")]
        tonic: bool,

        /// Mostra apenas as sílabas
        #[arg(long)]
        syllable: bool,

        /// Relatório completo (sílaba tônica e classificação)
        #[arg(long, conflicts_with = "json")]
        full: bool,

        /// Saída em JSON, com o rastro da máquina de estados
        #[arg(long)]
        json: bool,

        /// Política de hiato
        #[arg(long, default_value = "strong_accent")]
        hiatus: HiatusPolicy,
    },

    /// Compara as predições com um dicionário de referência
    Compare {
        /// Dicionário JSON ([{word, syllables, tonic}])
        dictionary: PathBuf,

        /// Arquivo do relatório textual
        #[arg(short, long, default_value = "report.txt")]
        report: PathBuf,

        /// Arquivo com as palavras erradas, uma por linha
        #[arg(short, long, default_value = "incorrect_words.txt")]
        incorrect: PathBuf,

        /// Configuração JSON ({workers, hiatus})
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Tamanho do pool de workers (sobrepõe a configuração)
        #[arg(short, long)]
        workers: Option<usize>,

        /// Política de hiato (sobrepõe a configuração)
        #[arg(long)]
        hiatus: Option<HiatusPolicy>,

        /// Comando externo que separa a palavra recebida como último argumento
        #[arg(short, long)]
        external: Option<String>,

        /// Grava também o resumo completo em JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Valida o corpus de demonstração embutido
    Demo {
        /// Política de hiato
        #[arg(long, default_value = "strong_accent")]
        hiatus: HiatusPolicy,
    },
}
