// render-letter: typeset an administrative letter from its JSON fields

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use letter_renderer_rust::{
    default_output_name, render_with, write_letter, LetterContent, RecordingSurface,
    RendererConfig,
};

/// CLI Arguments
#[derive(Parser, Debug)]
#[command(author, version, about = "Render an administrative letter to PDF")]
struct Args {
    /// Letter fields as JSON (senderService, receiverService, date, letterNumber, subject, importance, body)
    input: PathBuf,

    /// Output file (defaults to courrier_{timestamp}.pdf in the output directory)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Print the drawing operations as JSON instead of writing a PDF
    #[arg(long)]
    dump_layout: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = RendererConfig::from_env();

    let json = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let content = LetterContent::from_json(&json)
        .with_context(|| format!("invalid letter in {}", args.input.display()))?;

    if args.dump_layout {
        let rendered = render_with(RecordingSurface::new(), &content, &config)?;
        println!("{}", String::from_utf8_lossy(&rendered.bytes));
        return Ok(());
    }

    let path = args
        .out
        .unwrap_or_else(|| config.output_dir.join(default_output_name()));
    let rendered = write_letter(&content, &config, &path)
        .with_context(|| format!("failed to render letter {}", content.letter_number))?;

    info!("{} page(s) written to {}", rendered.page_count, path.display());
    println!("{}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["render-letter", "letter.json"]).unwrap();
        assert_eq!(args.input, PathBuf::from("letter.json"));
        assert!(args.out.is_none());
        assert!(!args.dump_layout);
    }

    #[test]
    fn test_args_out_and_dump_layout() {
        let args = Args::try_parse_from([
            "render-letter",
            "letter.json",
            "-o",
            "/tmp/courrier.pdf",
            "--dump-layout",
        ])
        .unwrap();
        assert_eq!(args.out, Some(PathBuf::from("/tmp/courrier.pdf")));
        assert!(args.dump_layout);

        let args = Args::try_parse_from(["render-letter", "--out", "a.pdf", "letter.json"]).unwrap();
        assert_eq!(args.out, Some(PathBuf::from("a.pdf")));
    }

    #[test]
    fn test_args_require_input() {
        assert!(Args::try_parse_from(["render-letter"]).is_err());
        assert!(Args::try_parse_from(["render-letter", "a.json", "b.json"]).is_err());
    }

    #[test]
    fn test_args_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
