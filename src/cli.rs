use std::path::PathBuf;

use clap::Parser;
use fuel_deck::EdgeBehavior;
use fuel_deck::constants::{RENDER_HEIGHT, RENDER_WIDTH};

#[derive(Debug, Parser)]
#[command(name = "fuel-deck", version, about = "Present the aviation extra fuel prediction report")]
pub struct Args {
    /// Directory holding the chart images referenced by the slides
    #[arg(long, value_name = "DIR", default_value = "assets")]
    pub assets: PathBuf,

    /// Slide to open on (1-based)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub start: Option<i64>,

    /// Stop at the first/last slide instead of wrapping around
    #[arg(long)]
    pub bounded: bool,

    /// Advance to the next slide after this many seconds
    #[arg(long, value_name = "SECONDS", value_parser = parse_seconds)]
    pub autoplay: Option<f32>,

    #[arg(long)]
    pub fullscreen: bool,

    #[arg(long, default_value_t = RENDER_WIDTH / 2)]
    pub width: i32,

    #[arg(long, default_value_t = RENDER_HEIGHT / 2)]
    pub height: i32,

    /// Print the slide sequence and exit
    #[arg(long)]
    pub list: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn edge_behavior(&self) -> EdgeBehavior {
        if self.bounded {
            EdgeBehavior::Stop
        } else {
            EdgeBehavior::Wrap
        }
    }

    /// Zero-based start index, if one was requested.
    pub fn start_index(&self) -> Option<i64> {
        self.start.map(|n| n - 1)
    }
}

fn parse_seconds(value: &str) -> Result<f32, String> {
    let seconds: f32 = value
        .parse()
        .map_err(|e| format!("not a number of seconds: {e}"))?;
    if seconds.is_finite() && seconds > 0.0 {
        Ok(seconds)
    } else {
        Err("autoplay interval must be a positive number of seconds".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["fuel-deck"]).unwrap();
        assert_eq!(args.assets, PathBuf::from("assets"));
        assert_eq!(args.edge_behavior(), EdgeBehavior::Wrap);
        assert_eq!(args.start_index(), None);
        assert_eq!(args.autoplay, None);
        assert_eq!((args.width, args.height), (960, 540));
    }

    #[test]
    fn start_is_one_based() {
        let args = Args::try_parse_from(["fuel-deck", "--start", "3"]).unwrap();
        assert_eq!(args.start_index(), Some(2));
        let args = Args::try_parse_from(["fuel-deck", "--start", "0"]).unwrap();
        assert_eq!(args.start_index(), Some(-1));
    }

    #[test]
    fn bounded_selects_stop_edges() {
        let args = Args::try_parse_from(["fuel-deck", "--bounded"]).unwrap();
        assert_eq!(args.edge_behavior(), EdgeBehavior::Stop);
    }

    #[test]
    fn autoplay_must_be_positive() {
        let args = Args::try_parse_from(["fuel-deck", "--autoplay", "4.5"]).unwrap();
        assert_eq!(args.autoplay, Some(4.5));
        assert!(Args::try_parse_from(["fuel-deck", "--autoplay", "0"]).is_err());
        assert!(Args::try_parse_from(["fuel-deck", "--autoplay", "soon"]).is_err());
    }
}
