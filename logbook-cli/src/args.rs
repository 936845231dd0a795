use std::path::PathBuf;

use clap::Parser;

use crate::error::CliError;

/// Render a log table with expandable cells.
#[derive(Debug, Parser)]
#[command(name = "logbook", version, about)]
pub struct Args {
    /// JSON file holding an array of log entries.
    pub entries: PathBuf,

    /// Settings file (defaults to settings.json in the config directory).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Table width in columns, overriding the settings.
    #[arg(short, long)]
    pub width: Option<u16>,

    /// Expand every collapsible cell before clicking.
    #[arg(long)]
    pub expand_all: bool,

    /// Click the element with this id (repeatable).
    #[arg(long = "toggle", value_name = "ELEMENT_ID")]
    pub toggles: Vec<String>,

    /// Click at a table position (repeatable).
    #[arg(long = "click", value_name = "X,Y", value_parser = parse_click)]
    pub clicks: Vec<(u16, u16)>,
}

pub fn parse_click(s: &str) -> Result<(u16, u16), CliError> {
    let invalid = || CliError::InvalidClick(s.to_string());
    let (x, y) = s.split_once(',').ok_or_else(invalid)?;
    let x = x.trim().parse().map_err(|_| invalid())?;
    let y = y.trim().parse().map_err(|_| invalid())?;
    Ok((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_click() {
        assert_eq!(parse_click("3,4").unwrap(), (3, 4));
        assert_eq!(parse_click(" 10 , 0 ").unwrap(), (10, 0));
    }

    #[test]
    fn test_parse_click_rejects_garbage() {
        for input in ["", "3", "3;4", "a,1", "1,-2", "1,2,3"] {
            assert!(
                matches!(parse_click(input), Err(CliError::InvalidClick(_))),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_args() {
        let args = Args::try_parse_from([
            "logbook",
            "entries.json",
            "-w",
            "80",
            "--click",
            "1,2",
            "--toggle",
            "row1-text-plus",
            "--click",
            "5,0",
        ])
        .unwrap();
        assert_eq!(args.entries, PathBuf::from("entries.json"));
        assert_eq!(args.width, Some(80));
        assert_eq!(args.clicks, vec![(1, 2), (5, 0)]);
        assert_eq!(args.toggles, vec!["row1-text-plus".to_string()]);
        assert!(!args.expand_all);
    }
}
