#![forbid(unsafe_code)]

//! Command-line arguments.

use std::fmt;
use std::time::Duration;

use arcstep_render::{Color, ColorParseError};
use arcstep_widgets::StepStyle;

/// Usage text printed for `--help` and on argument errors.
pub const USAGE: &str = "\
usage: arcstep-harness [options]

  --taps N          taps to deliver (default 5)
  --interval-ms N   delay between ticks in milliseconds (default 50)
  --size WxH        surface size (default 480x800)
  --fore #RRGGBB    arc color
  --back #RRGGBB    background color
  --bars            print node fill bars after the run
  --json            print JSON lines instead of text
  -h, --help        show this help

Log filtering follows the ARCSTEP_LOG environment variable (default: info).";

/// Parsed harness arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    /// Taps to deliver, one animation each.
    pub taps: usize,
    /// Delay between driver ticks.
    pub interval: Duration,
    /// Surface width.
    pub width: f32,
    /// Surface height.
    pub height: f32,
    /// Arc color override.
    pub fore: Option<Color>,
    /// Background color override.
    pub back: Option<Color>,
    /// Print fill bars after the run.
    pub bars: bool,
    /// Emit JSON lines.
    pub json: bool,
    /// Print usage and exit.
    pub help: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            taps: 5,
            interval: StepStyle::default().interval,
            width: 480.0,
            height: 800.0,
            fore: None,
            back: None,
            bars: false,
            json: false,
            help: false,
        }
    }
}

impl Args {
    /// Parse arguments, excluding the program name.
    pub fn parse<I, S>(args: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parsed = Self::default();
        let mut iter = args.into_iter().map(Into::into);
        while let Some(flag) = iter.next() {
            match flag.as_str() {
                "--taps" => parsed.taps = number(&mut iter, "--taps")?,
                "--interval-ms" => {
                    parsed.interval = Duration::from_millis(number(&mut iter, "--interval-ms")?);
                }
                "--size" => {
                    let value = value(&mut iter, "--size")?;
                    let (w, h) = value
                        .split_once('x')
                        .and_then(|(w, h)| Some((w.parse::<f32>().ok()?, h.parse::<f32>().ok()?)))
                        .filter(|(w, h)| *w > 0.0 && *h > 0.0)
                        .ok_or_else(|| ArgsError::BadValue {
                            flag: "--size",
                            value: value.clone(),
                        })?;
                    parsed.width = w;
                    parsed.height = h;
                }
                "--fore" => parsed.fore = Some(Color::from_hex(&value(&mut iter, "--fore")?)?),
                "--back" => parsed.back = Some(Color::from_hex(&value(&mut iter, "--back")?)?),
                "--bars" => parsed.bars = true,
                "--json" => parsed.json = true,
                "-h" | "--help" => parsed.help = true,
                _ => return Err(ArgsError::Unknown(flag)),
            }
        }
        Ok(parsed)
    }

    /// View style with any color and interval overrides applied.
    pub fn style(&self) -> StepStyle {
        let mut style = StepStyle::default().interval(self.interval);
        if let Some(fore) = self.fore {
            style = style.fore(fore);
        }
        if let Some(back) = self.back {
            style = style.back(back);
        }
        style
    }
}

fn value(iter: &mut impl Iterator<Item = String>, flag: &'static str) -> Result<String, ArgsError> {
    iter.next().ok_or(ArgsError::MissingValue(flag))
}

fn number<T: std::str::FromStr>(
    iter: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<T, ArgsError> {
    let value = value(iter, flag)?;
    match value.parse() {
        Ok(n) => Ok(n),
        Err(_) => Err(ArgsError::BadValue { flag, value }),
    }
}

/// Error from [`Args::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgsError {
    /// Flag not recognized.
    Unknown(String),
    /// Flag given without its value.
    MissingValue(&'static str),
    /// Value could not be parsed.
    BadValue { flag: &'static str, value: String },
    /// Color value could not be parsed.
    BadColor(ColorParseError),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::Unknown(flag) => write!(f, "unknown argument: {flag}"),
            ArgsError::MissingValue(flag) => write!(f, "{flag} needs a value"),
            ArgsError::BadValue { flag, value } => write!(f, "invalid value for {flag}: {value}"),
            ArgsError::BadColor(e) => write!(f, "invalid color: {e}"),
        }
    }
}

impl std::error::Error for ArgsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArgsError::BadColor(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ColorParseError> for ArgsError {
    fn from(e: ColorParseError) -> Self {
        ArgsError::BadColor(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_flags() {
        let args = Args::parse(Vec::<String>::new()).unwrap();
        assert_eq!(args, Args::default());
        assert_eq!(args.interval, Duration::from_millis(50));
    }

    #[test]
    fn parses_every_flag() {
        let args = Args::parse([
            "--taps", "7", "--interval-ms", "5", "--size", "300x600", "--fore", "#112233",
            "--back", "#445566", "--bars", "--json",
        ])
        .unwrap();
        assert_eq!(args.taps, 7);
        assert_eq!(args.interval, Duration::from_millis(5));
        assert_eq!((args.width, args.height), (300.0, 600.0));
        assert_eq!(args.fore, Some(Color::rgb(0x11, 0x22, 0x33)));
        assert_eq!(args.back, Some(Color::rgb(0x44, 0x55, 0x66)));
        assert!(args.bars && args.json);

        let style = args.style();
        assert_eq!(style.fore, Color::rgb(0x11, 0x22, 0x33));
        assert_eq!(style.interval, Duration::from_millis(5));
    }

    #[test]
    fn reports_errors() {
        assert_eq!(
            Args::parse(["--wat"]),
            Err(ArgsError::Unknown("--wat".into()))
        );
        assert_eq!(Args::parse(["--taps"]), Err(ArgsError::MissingValue("--taps")));
        assert_eq!(
            Args::parse(["--taps", "x"]),
            Err(ArgsError::BadValue {
                flag: "--taps",
                value: "x".into()
            })
        );
        assert_eq!(
            Args::parse(["--size", "0x10"]),
            Err(ArgsError::BadValue {
                flag: "--size",
                value: "0x10".into()
            })
        );
        assert_eq!(
            Args::parse(["--fore", "red"]),
            Err(ArgsError::BadColor(ColorParseError::MissingHash))
        );
    }
}
