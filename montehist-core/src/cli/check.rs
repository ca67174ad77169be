use crate::cli::input::read_input;
use crate::config::ReportConfig;
use crate::sections::{SectionData, SectionError};
use clap::Args;
use miette::Report;
use std::path::PathBuf;

#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {
    /// Input file (stdin when omitted or `-`)
    pub input: Option<PathBuf>,

    /// Path to a montehist.toml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print errors without diagnostics formatting
    #[arg(short, long, default_value = "false")]
    pub plain: bool,
}

/// Parses the input and prints what was found. Exits with status 1 on a
/// parse failure.
pub fn check(args: CheckArgs) -> anyhow::Result<()> {
    let cfg = match &args.config {
        Some(path) => ReportConfig::from_file(path)?,
        None => ReportConfig::default(),
    };

    match read_input(args.input.as_deref(), cfg.parse) {
        Ok(sections) => {
            print!("{}", render_check(&sections));
            Ok(())
        }
        Err(err) => {
            print_section_error(err, args.plain);
            std::process::exit(1);
        }
    }
}

pub fn render_check(sections: &[SectionData]) -> String {
    let values: usize = sections.iter().map(|s| s.values.len()).sum();

    let mut out = String::new();
    out.push_str("✔ Input parsed successfully\n");
    out.push_str(&format!("✔ {} sections\n", sections.len()));
    out.push_str(&format!("✔ {} values\n", values));
    for section in sections {
        out.push_str(&format!(
            "  - {}: {} values\n",
            section.label,
            section.values.len()
        ));
    }
    out
}

pub fn print_section_error(err: SectionError, plain: bool) {
    let hint = section_error_hint(&err);
    if plain {
        eprintln!("{}", err);
    } else {
        eprintln!();
        eprintln!("{:?}", Report::new(err));
    }
    if let Some(hint) = hint {
        eprintln!();
        eprintln!("{}", hint);
    }
}

pub fn section_error_hint(err: &SectionError) -> Option<&'static str> {
    match err {
        SectionError::MissingHeader { .. } => Some(
            "Input must start with a section header.\n\
             \n\
             Example:\n\
             \n\
             # Without leverage\n\
             1.52\n\
             0.87",
        ),

        SectionError::MalformedValue { .. } => Some(
            "Every line after a header must be a positive decimal number.\n\
             \n\
             Lines starting with `#` open a new section. Set\n\
             `allow_non_positive = true` under [parse] to accept zero and\n\
             negative values.",
        ),

        //---------------------------------------------------------------------
        // Everything else: no hint
        //---------------------------------------------------------------------
        _ => None,
    }
}
