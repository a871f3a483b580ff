use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use tyname_solver::NamingStrategy;

/// CLI arguments for the tyname binary.
#[derive(Parser, Debug)]
#[command(
    name = "tyname",
    version,
    about = "Render schema type names for Java-style type references"
)]
pub struct CliArgs {
    /// JSON array of type definitions registered on top of the built-ins.
    #[arg(long = "types", value_name = "FILE")]
    pub types: Option<PathBuf>,

    /// JSON naming configuration (strategy, registry entries, depth limit).
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Generic notation; overrides the strategy from `--config`.
    #[arg(short = 'n', long, value_enum, ignore_case = true)]
    pub notation: Option<Notation>,

    /// Which name to print for each type.
    #[arg(short = 'm', long, value_enum, ignore_case = true, default_value_t = Mode::Property)]
    pub mode: Mode,

    /// Type references, e.g. `java.util.List<com.acme.Widget>` or `int[]`.
    #[arg(value_name = "TYPE", required = true)]
    pub references: Vec<String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Notation {
    /// `Box<Widget>`, arguments separated by `, `.
    Angle,
    /// `Box«Widget»`, arguments separated by `,`.
    Guillemets,
}

impl Notation {
    pub fn strategy(self) -> NamingStrategy {
        match self {
            Notation::Angle => NamingStrategy::default(),
            Notation::Guillemets => NamingStrategy::guillemets(),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Mode {
    /// Name as the type of a model property.
    Property,
    /// Name as the return type of an operation.
    Response,
    /// Flat qualified name.
    Qualified,
    /// Allowable values of an enum, as JSON (`null` for other types).
    Values,
}
