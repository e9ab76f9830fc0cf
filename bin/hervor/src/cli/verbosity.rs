// Fixed verbosity levels for dependency crates to reduce log noise
const HYPER_DIRECTIVE: &str = "hyper=warn";
const REQWEST_DIRECTIVE: &str = "reqwest=warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn directive(&self) -> String {
        let directive = match self {
            Verbosity::Error => "error",
            Verbosity::Warn => "warn",
            Verbosity::Info => "info",
            Verbosity::Debug => "debug",
            Verbosity::Trace => "trace",
        };
        format!("{directive},{HYPER_DIRECTIVE},{REQWEST_DIRECTIVE}")
    }
}

pub fn verbosity_parser(s: &str) -> Result<Verbosity, String> {
    let level = s.parse::<u8>().map_err(|err| err.to_string())?;

    if !(1..=5).contains(&level) {
        return Err(format!("verbosity must be between 1 and 5, got {level}"));
    }

    Ok(match level {
        1 => Verbosity::Error,
        2 => Verbosity::Warn,
        3 => Verbosity::Info,
        4 => Verbosity::Debug,
        5 => Verbosity::Trace,
        _ => unreachable!(),
    })
}
