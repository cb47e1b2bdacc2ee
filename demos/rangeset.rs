use clap::{Parser, Subcommand, ValueEnum};

use rangeset_rs::range_set::RangeSet;
use rangeset_rs::table::TruthTable;

#[derive(Debug, Parser)]
#[command(author, version, about = "Set algebra over interval notation, e.g. \"(-Infinity,1][5,9)\"")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Logging verbosity.
    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Union of all sets, folded from the left.
    Union {
        #[arg(required = true)]
        sets: Vec<RangeSet>,
    },
    /// Intersection of all sets, folded from the left.
    Intersection {
        #[arg(required = true)]
        sets: Vec<RangeSet>,
    },
    /// Points of A that are not in B.
    Difference { a: RangeSet, b: RangeSet },
    /// Points in exactly one of A and B.
    Xor { a: RangeSet, b: RangeSet },
    /// Points not in A.
    Complement { a: RangeSet },
    /// Apply a custom truth table, given as four bits for
    /// (out,out), (out,in), (in,out), (in,in), e.g. "0110" for xor.
    Table {
        #[arg(value_parser = parse_table)]
        table: TruthTable,
        a: RangeSet,
        b: RangeSet,
    },
    /// Report validity and intervals of each set.
    Check {
        #[arg(required = true)]
        sets: Vec<RangeSet>,
    },
    /// Compare two sets.
    Compare { a: RangeSet, b: RangeSet },
}

#[derive(Debug, Copy, Clone, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for simplelog::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => simplelog::LevelFilter::Off,
            LogLevel::Error => simplelog::LevelFilter::Error,
            LogLevel::Warn => simplelog::LevelFilter::Warn,
            LogLevel::Info => simplelog::LevelFilter::Info,
            LogLevel::Debug => simplelog::LevelFilter::Debug,
            LogLevel::Trace => simplelog::LevelFilter::Trace,
        }
    }
}

fn parse_table(s: &str) -> Result<TruthTable, String> {
    let bits: Vec<bool> = s
        .chars()
        .map(|c| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            _ => Err(format!("expected '0' or '1', found '{}'", c)),
        })
        .collect::<Result<_, _>>()?;
    match bits[..] {
        [ff, ft, tf, tt] => Ok(TruthTable::new([[ff, ft], [tf, tt]])),
        _ => Err(format!("expected exactly 4 bits, found {}", bits.len())),
    }
}

fn fold(sets: &[RangeSet], table: TruthTable) -> RangeSet {
    match sets {
        [] => RangeSet::empty(),
        [first] => first.clone(),
        [first, rest @ ..] => first.operate(table, rest),
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        args.log_level.into(),
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    log::debug!("args = {:?}", args);

    match args.command {
        Command::Union { sets } => println!("{}", fold(&sets, TruthTable::UNION)),
        Command::Intersection { sets } => println!("{}", fold(&sets, TruthTable::INTERSECTION)),
        Command::Difference { a, b } => println!("{}", &a - &b),
        Command::Xor { a, b } => println!("{}", &a ^ &b),
        Command::Complement { a } => println!("{}", !&a),
        Command::Table { table, a, b } => println!("{}", a.operate(table, [&b])),
        Command::Check { sets } => {
            for set in sets.iter() {
                match set.validate() {
                    Ok(()) => println!("{}: valid, {} range(s)", set, set.num_ranges()),
                    Err(violation) => println!("{}: invalid ({})", set, violation),
                }
                for interval in set.intervals() {
                    println!("  - {}", interval);
                }
            }
        }
        Command::Compare { a, b } => {
            println!("same:             {}", a.is_same(&b));
            println!("A subset of B:    {}", a.is_subset_of(&b));
            println!("A proper subset:  {}", a.is_proper_subset_of(&b));
            println!("B subset of A:    {}", b.is_subset_of(&a));
            println!("B proper subset:  {}", b.is_proper_subset_of(&a));
            println!("disjoint:         {}", a.intersection(&b).is_empty());
        }
    }

    Ok(())
}
