use clap::Parser;
use console::{style, Term};
use std::fmt::{self, Display};
use std::io;
use std::path::PathBuf;

use charset::{CharacterSet, SetAlgebra};
use codec::EncodeError;

mod alphabet;
mod charset;
mod codec;

/// Set algebra over character sets drawn from a fixed 64-symbol alphabet.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// First operand: literal text, or @PATH to encode the contents of a file
    #[clap(value_parser, value_name = "SET1")]
    set1: String,

    /// Second operand: literal text, or @PATH to encode the contents of a file
    #[clap(value_parser, value_name = "SET2")]
    set2: String,
}

/// How an operand's raw bytes are sourced.
#[derive(Debug, PartialEq, Eq)]
enum Operand {
    Literal(String),
    File(PathBuf),
}

impl Operand {
    /// Classify a raw argument: a leading '@' marks a file path, anything
    /// else is literal text.
    fn classify(raw: &str) -> Self {
        match raw.strip_prefix('@') {
            Some(path) => Operand::File(PathBuf::from(path)),
            None => Operand::Literal(raw.to_owned()),
        }
    }

    fn encode(&self) -> Result<CharacterSet, EncodeError> {
        match self {
            Operand::Literal(text) => Ok(codec::encode(text.as_bytes())),
            Operand::File(path) => codec::encode_file(path),
        }
    }
}

impl Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Literal(text) => write!(f, "string '{}'", text),
            Operand::File(path) => write!(f, "file '{}'", path.display()),
        }
    }
}

/// Write the full operation report for the two encoded operands.
fn report(
    term: &Term,
    first: &Operand,
    second: &Operand,
    set1: CharacterSet,
    set2: CharacterSet,
) -> io::Result<()> {
    term.write_line(&format!("set1: encoding the {}", first))?;
    term.write_line(&format!("set2: encoding the {}", second))?;
    term.write_line("")?;

    term.write_line(&format!("{:<28}{:#018x}", "set1:", set1))?;
    term.write_line(&format!("{:<28}{:#018x}", "set2:", set2))?;
    term.write_line("")?;

    let pairs = [
        ("intersection:", set1.intersect(set2)),
        ("union:", set1.union(set2)),
        ("complement of set1:", set1.complement()),
        ("complement of set2:", set2.complement()),
        ("difference (set1 - set2):", set1.difference(set2)),
        ("symmetric difference:", set1.symmetric_difference(set2)),
    ];
    for (label, result) in pairs {
        term.write_line(&format!("{:<28}{:#018x}", label, result))?;
    }
    term.write_line("")?;

    term.write_line(&format!(
        "{:<28}{}",
        "cardinality of set1:",
        set1.cardinality()
    ))?;
    term.write_line(&format!(
        "{:<28}{}",
        "cardinality of set2:",
        set2.cardinality()
    ))?;
    term.write_line("")?;

    term.write_line(&format!(
        "{:<28}'{}'",
        "members of set1:",
        codec::decode(set1)
    ))?;
    term.write_line(&format!(
        "{:<28}'{}'",
        "members of set2:",
        codec::decode(set2)
    ))
}

fn fail(err: &EncodeError) -> ! {
    let term = Term::stderr();
    let _ = term.write_line(&format!("{} {}", style("error:").red().bold(), err));
    std::process::exit(1);
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // Help and version requests are not usage errors.
            let code = match err.kind() {
                clap::ErrorKind::DisplayHelp | clap::ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    let first = Operand::classify(&args.set1);
    let second = Operand::classify(&args.set2);

    // Encode both operands up front, so an unreadable file never leaves a
    // half-written report behind.
    let set1 = first.encode().unwrap_or_else(|err| fail(&err));
    let set2 = second.encode().unwrap_or_else(|err| fail(&err));

    let term = Term::stdout();
    report(&term, &first, &second, set1, set2).unwrap();
}
