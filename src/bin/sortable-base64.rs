/*
 * Copyright (C) 2024 taylor.fish <contact@taylor.fish>
 *
 * This file is part of sortable-base64.
 *
 * sortable-base64 is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published
 * by the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * sortable-base64 is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with sortable-base64. If not, see <https://www.gnu.org/licenses/>.
 */

use std::fmt::{Debug, Display};
use std::fs::File;
use std::io::{stdin, stdout, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process::exit;

use clap::Parser;
use sortable_base64::{encode, try_decode_bytes};

#[macro_use]
mod error_exit {
    use super::{exit, Display};

    macro_rules! error_exit {
        ($($args:tt)*) => {
            crate::error_exit::__run(format_args!($($args)*));
        };
    }

    #[doc(hidden)]
    pub fn __run(args: impl Display) -> ! {
        eprintln!("error: {}", args);
        if cfg!(feature = "cli-panic") {
            panic!("error: {}", args);
        } else {
            exit(1);
        }
    }
}

fn expect<T, E: Debug>(result: Result<T, E>, msg: impl Display) -> T {
    result.unwrap_or_else(|e| {
        eprintln!("error: {}", msg);
        if cfg!(feature = "cli-panic") {
            panic!("error: {}: {:?}", msg, e);
        } else {
            exit(1);
        }
    })
}

/// Encodes or decodes sortable base64 data from FILE and writes the result
/// to standard output.
///
/// Encoded output sorts in the same order as the input bytes.
#[derive(Parser)]
#[command(name = "sortable-base64", version)]
struct Args {
    /// Decode data instead of encoding
    #[arg(short, long)]
    decode: bool,

    /// When encoding, end the output with a newline
    #[arg(short, long, conflicts_with = "decode")]
    newline: bool,

    /// Input file; standard input is read if missing or "-"
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
}

fn read_input(path: Option<&Path>) -> Vec<u8> {
    let mut input = Vec::new();
    let result = match path {
        Some(path) => File::open(path)
            .unwrap_or_else(|e| {
                error_exit!("could not open file '{}': {}", path.display(), e);
            })
            .read_to_end(&mut input),
        None => stdin().lock().read_to_end(&mut input),
    };
    expect(result, "could not read input");
    input
}

fn write_output(data: &[u8]) {
    let mut writer = BufWriter::new(stdout().lock());
    expect(writer.write_all(data), "could not write to standard output");
    expect(writer.flush(), "could not write to standard output");
}

fn encode_input(input: &[u8], newline: bool) {
    let mut code = encode(input);
    if newline {
        code.push('\n');
    }
    write_output(code.as_bytes());
}

fn decode_input(input: &[u8]) {
    // Tolerate the trailing newline most tools leave behind.
    let end = input
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(0, |i| i + 1);
    let bytes = try_decode_bytes(&input[..end]).unwrap_or_else(|e| {
        error_exit!("input is not valid sortable base64: {}", e);
    });
    write_output(&bytes);
}

fn main() {
    let args = Args::parse();
    let path = args.file.as_deref().filter(|p| *p != Path::new("-"));
    let input = read_input(path);
    if args.decode {
        decode_input(&input);
    } else {
        encode_input(&input, args.newline);
    }
}
