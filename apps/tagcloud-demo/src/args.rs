//! Command-line parsing for the demo host.

use tagcloud_ui::{DuplicateWeightPolicy, Point};

#[derive(Debug, Clone, PartialEq)]
pub enum DemoError {
    Usage(&'static str),
    MissingValue(&'static str),
    UnknownFlag(String),
    InvalidNumber { flag: &'static str, value: String },
    InvalidTag(String),
}

impl std::fmt::Display for DemoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DemoError::Usage(msg) => write!(f, "{msg}"),
            DemoError::MissingValue(flag) => write!(f, "{flag} expects a value"),
            DemoError::UnknownFlag(flag) => write!(f, "unknown option {flag}; see --help"),
            DemoError::InvalidNumber { flag, value } => {
                write!(f, "{flag}: {value:?} is not a finite number")
            }
            DemoError::InvalidTag(raw) => {
                write!(f, "{raw:?} is not a tag; expected <identifier>=<weight>")
            }
        }
    }
}

impl std::error::Error for DemoError {}

pub fn usage() -> &'static str {
    "usage:\n\
  tagcloud-demo [options] <identifier>=<weight>...\n\
\n\
options:\n\
  --width <px>          container width (default 480)\n\
  --height <px>         container height (default 320)\n\
  --padding <px>        gap between tags and rows (default 10)\n\
  --hint <text>         area hint shown while exactly one tag is present\n\
  --select <id>         click the tag with this identifier (repeatable)\n\
  --click <x>,<y>       click whatever tag is under the point (repeatable)\n\
  --key-by-identifier   keep tags that share a weight instead of overwriting\n"
}

#[derive(Debug, Clone, PartialEq)]
pub enum Click {
    Tag(String),
    At(Point),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub width: f32,
    pub height: f32,
    pub padding: f32,
    pub hint: Option<String>,
    pub clicks: Vec<Click>,
    pub duplicate_weights: DuplicateWeightPolicy,
    pub tags: Vec<(String, f32)>,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 320.0,
            padding: 10.0,
            hint: None,
            clicks: Vec::new(),
            duplicate_weights: DuplicateWeightPolicy::Overwrite,
            tags: Vec::new(),
        }
    }
}

fn parse_number(flag: &'static str, value: Option<&String>) -> Result<f32, DemoError> {
    let Some(value) = value else {
        return Err(DemoError::MissingValue(flag));
    };
    match value.parse::<f32>() {
        Ok(number) if number.is_finite() => Ok(number),
        _ => Err(DemoError::InvalidNumber {
            flag,
            value: value.clone(),
        }),
    }
}

fn parse_point(value: Option<&String>) -> Result<Point, DemoError> {
    let Some(value) = value else {
        return Err(DemoError::MissingValue("--click"));
    };
    let invalid = || DemoError::InvalidNumber {
        flag: "--click",
        value: value.clone(),
    };
    let (x, y) = value.split_once(',').ok_or_else(invalid)?;
    let x = x.trim().parse::<f32>().map_err(|_| invalid())?;
    let y = y.trim().parse::<f32>().map_err(|_| invalid())?;
    Ok(Point::new(x, y))
}

fn parse_tag(raw: &str) -> Result<(String, f32), DemoError> {
    let (identifier, weight) = raw
        .rsplit_once('=')
        .ok_or_else(|| DemoError::InvalidTag(raw.to_owned()))?;
    if identifier.is_empty() {
        return Err(DemoError::InvalidTag(raw.to_owned()));
    }
    let weight = weight
        .parse::<f32>()
        .map_err(|_| DemoError::InvalidTag(raw.to_owned()))?;
    Ok((identifier.to_owned(), weight))
}

pub fn parse_args(argv: &[String]) -> Result<Args, DemoError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--help" | "-h" => return Err(DemoError::Usage(usage())),
            "--width" => args.width = parse_number("--width", it.next())?,
            "--height" => args.height = parse_number("--height", it.next())?,
            "--padding" => args.padding = parse_number("--padding", it.next())?,
            "--hint" => {
                let Some(hint) = it.next() else {
                    return Err(DemoError::MissingValue("--hint"));
                };
                args.hint = Some(hint.clone());
            }
            "--select" => {
                let Some(identifier) = it.next() else {
                    return Err(DemoError::MissingValue("--select"));
                };
                args.clicks.push(Click::Tag(identifier.clone()));
            }
            "--click" => args.clicks.push(Click::At(parse_point(it.next())?)),
            "--key-by-identifier" => {
                args.duplicate_weights = DuplicateWeightPolicy::KeyByIdentifier;
            }
            other if other.starts_with("--") => {
                return Err(DemoError::UnknownFlag(other.to_owned()));
            }
            other => args.tags.push(parse_tag(other)?),
        }
    }

    if args.tags.is_empty() && args.hint.is_none() {
        return Err(DemoError::Usage(usage()));
    }
    Ok(args)
}
