use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "scrubdeck",
    about = "Play an audio file with a draggable scrubber and volume control",
    disable_help_subcommand = true
)]
pub struct CliArgs {
    /// Override the configuration file path
    #[arg(long = "config")]
    pub config: Option<PathBuf>,

    /// Start playing as soon as the file is loaded
    #[arg(long = "autoplay")]
    pub autoplay: bool,

    /// Initial volume (0.0-1.0)
    #[arg(long = "volume", value_parser = parse_volume)]
    pub volume: Option<f32>,

    /// Audio file to play
    pub input: PathBuf,
}

fn parse_volume(value: &str) -> Result<f32, String> {
    let parsed = value
        .parse::<f32>()
        .map_err(|_| format!("'{value}' is not a valid number"))?;
    if !(0.0..=1.0).contains(&parsed) {
        return Err("volume must be between 0.0 and 1.0".into());
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags_and_input() {
        let args = CliArgs::try_parse_from(["scrubdeck", "--autoplay", "--volume", "0.4", "song.flac"]).unwrap();
        assert!(args.autoplay);
        assert_eq!(args.volume, Some(0.4));
        assert_eq!(args.input, PathBuf::from("song.flac"));
    }

    #[test]
    fn rejects_out_of_range_volume() {
        assert!(CliArgs::try_parse_from(["scrubdeck", "--volume", "1.5", "a.mp3"]).is_err());
        assert!(parse_volume("loud").is_err());
    }
}
