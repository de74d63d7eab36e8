//! MIPS machine-code assembler/disassembler CLI.
//!
//! This binary provides a single entry point for both translation directions. It performs:
//! 1. **Decode:** 32-bit machine words (hex or binary) to assembly text.
//! 2. **Encode:** assembly lines to machine words.
//! 3. **Interactive loop:** reads one line at a time and picks the direction
//!    by sniffing whether the line parses as a machine word.

use clap::{Parser, Subcommand};
use prettytable::{Table, row};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use mips_codec::{CatalogError, CodecError, Instruction, InstructionCodec, OperationCatalog, Word};

/// Horizontal rule framing each interactive block.
const RULE: &str = "=======";

#[derive(Parser, Debug)]
#[command(
    name = "masm",
    author,
    version,
    about = "MIPS machine-code assembler and disassembler",
    long_about = "Translate between 32-bit MIPS machine words and assembly text.\n\nWith no subcommand, masm reads lines interactively: a line that parses as a\nmachine word (hex or 32-bit binary) is decoded, anything else is encoded as\nassembly.\n\nExamples:\n  masm decode 0x012a4020\n  masm encode 'addi $a0, $s3, -77'\n  masm --codes custom_codes.json decode 0x012a4020\n  masm"
)]
struct Cli {
    /// Operation-code table (JSON) replacing the built-in MIPS set.
    #[arg(long, value_name = "FILE", global = true)]
    codes: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode machine words (hex or 32-bit binary) into assembly text.
    Decode {
        /// Words to decode, e.g. 0x012a4020.
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Encode assembly lines into machine words. Quote each line.
    Encode {
        /// Lines to encode, e.g. 'addi $a0, $s3, -77'.
        #[arg(required = true)]
        lines: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let catalog = match load_catalog(cli.codes.as_ref()) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Error loading operation codes: {e}");
            process::exit(1);
        }
    };
    let codec = InstructionCodec::new(catalog);

    match cli.command {
        Some(Commands::Decode { words }) => cmd_translate(&codec, &words, InstructionCodec::decode),
        Some(Commands::Encode { lines }) => cmd_translate(&codec, &lines, InstructionCodec::encode),
        None => repl(&codec),
    }
}

/// Loads the operation catalog: the `--codes` file when given, else the
/// table bundled into the library.
fn load_catalog(path: Option<&PathBuf>) -> Result<OperationCatalog, CatalogError> {
    match path {
        Some(path) => OperationCatalog::from_path(path),
        None => OperationCatalog::bundled(),
    }
}

/// Translates every input in one direction, printing a block per result.
///
/// Exits the process with code 1 on the first failure.
fn cmd_translate(
    codec: &InstructionCodec,
    inputs: &[String],
    translate: fn(&InstructionCodec, &str) -> Result<Instruction, CodecError>,
) {
    for input in inputs {
        match translate(codec, input) {
            Ok(instruction) => print_instruction(&instruction),
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        }
    }
}

/// Reads lines and translates each, sniffing the direction per line.
///
/// `exit` or end of input quits; a failed line is reported and the loop
/// continues.
fn repl(codec: &InstructionCodec) {
    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        println!("{RULE}");
        print!("Machine Code: ");
        io::stdout().flush().ok();

        line.clear();
        match stdin.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error reading input: {e}");
                break;
            }
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "exit" {
            break;
        }

        match translate_sniffed(codec, input) {
            Ok(instruction) => {
                print_instruction(&instruction);
                println!("{RULE}\n");
            }
            Err(e) => eprintln!("Error: {e}"),
        }
    }
}

/// Picks the translation direction: machine words decode, assembly encodes.
///
/// A line of pure hex digits is always taken as a word, so mnemonics that
/// happen to be valid hex (`add`) need the explicit `encode` subcommand.
fn translate_sniffed(codec: &InstructionCodec, input: &str) -> Result<Instruction, CodecError> {
    if Word::parse(input).is_ok() {
        codec.decode(input)
    } else {
        codec.encode(input)
    }
}

/// Prints one instruction block: the binary form, the per-field table, and
/// the canonical hex and text forms.
fn print_instruction(instruction: &Instruction) {
    println!("Binary: {}", instruction.binary());

    let mut table = Table::new();
    table.set_titles(row!["SECTION", "DECIMAL", "BINARY", "DECODED"]);
    for field in instruction.fields() {
        table.add_row(row![field.name(), field.value(), field.bits(), field.symbol()]);
    }
    table.printstd();

    println!("Hex: {}", instruction.hex());
    println!("Decoded: {}", instruction.text());
}
