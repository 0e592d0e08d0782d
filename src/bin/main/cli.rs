use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use wrapped_core::slides::Personalization;

/// Year-in-review slides for a chat history, in the terminal.
///
/// Click the right half of the screen to go forward and the left half to go
/// back. Press q to quit.
#[derive(Debug, Parser)]
#[command(name = "wrapped", version)]
pub struct Cli {
    /// Statistics document produced by the preparation step
    #[arg(default_value = "data.json")]
    pub stats: PathBuf,

    /// Year shown on the intro and summary slides
    #[arg(long, default_value = Personalization::DEFAULT.year)]
    pub year: String,

    /// Name the letter is addressed to
    #[arg(long, default_value = Personalization::DEFAULT.recipient)]
    pub recipient: String,

    /// Name the letter is signed with
    #[arg(long, default_value = Personalization::DEFAULT.signature)]
    pub signature: String,

    /// Plain-text letter body; paragraphs separated by blank lines
    #[arg(long, value_name = "FILE")]
    pub letter: Option<PathBuf>,

    /// Write logs to this file (the terminal itself is taken by the slides)
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Draw slides without background decoration
    #[arg(long)]
    pub plain: bool,

    /// More log output; repeat for more
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn read_letter(&self) -> Result<Option<String>> {
        let Some(path) = self.letter.as_ref() else {
            return Ok(None);
        };
        let body = fs::read_to_string(path)
            .with_context(|| format!("cannot read letter {}", path.display()))?;
        Ok(Some(body.trim().to_owned()))
    }

    pub fn personalization<'a>(&'a self, letter: Option<&'a str>) -> Personalization<'a> {
        Personalization {
            year: &self.year,
            recipient: &self.recipient,
            signature: &self.signature,
            letter: letter.unwrap_or(Personalization::DEFAULT.letter),
        }
    }
}
