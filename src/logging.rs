use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

/// Log level picked from `-v` / `-q`, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    fn to_level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    fn to_filter(self) -> String {
        format!("test_toggle={}", self.to_level())
    }
}

/// Installs the global subscriber. `RUST_LOG` wins over the flags.
///
/// Output always goes to stderr so `lookup --print` keeps stdout to itself.
pub fn init(verbosity: Verbosity) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.to_filter()));

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_file(verbosity >= Verbosity::Debug)
        .with_line_number(verbosity >= Verbosity::Debug)
        .with_writer(std::io::stderr)
        .compact();

    match verbosity {
        Verbosity::Quiet | Verbosity::Normal => subscriber.without_time().init(),
        _ => subscriber.init(),
    }
}
