//! Interactive console input/output

use slidesplit_common::{Result, SplitterError};
use std::io::{BufRead, Write};
use std::num::IntErrorKind;

/// Smallest slide count accepted at the prompt
pub const MIN_SLIDES: u32 = 1;

/// Largest slide count accepted at the prompt
pub const MAX_SLIDES: u32 = 50;

/// Read a multi-line document until end of input.
///
/// Lines are joined with `\n`; the final line terminator is dropped.
pub fn read_document<R: BufRead>(reader: R) -> Result<String> {
    let lines = reader.lines().collect::<std::io::Result<Vec<String>>>()?;
    Ok(lines.join("\n"))
}

/// Prompt until a slide count between 1 and 50 is entered.
///
/// Fails if input ends before a valid count is read.
pub fn read_slide_count<R: BufRead, W: Write>(mut reader: R, mut writer: W) -> Result<u32> {
    let mut line = String::new();

    loop {
        write!(writer, "\nHow many slides would you like ({}-{})? ", MIN_SLIDES, MAX_SLIDES)?;
        writer.flush()?;

        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(SplitterError::invalid_input(
                "input ended before a slide count was entered",
            ));
        }

        // Integers too large for i64 are still integers, just out of range
        let not_a_number = match line.trim().parse::<i64>() {
            Ok(n) if (MIN_SLIDES as i64..=MAX_SLIDES as i64).contains(&n) => return Ok(n as u32),
            Ok(_) => false,
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => false,
                _ => true,
            },
        };

        if not_a_number {
            writeln!(writer, "Please enter a valid number.")?;
        } else {
            writeln!(
                writer,
                "Please enter a number between {} and {}.",
                MIN_SLIDES, MAX_SLIDES
            )?;
        }
    }
}

/// Print each section under a 1-based `=== Slide N ===` label
pub fn print_slides<W: Write>(mut writer: W, slides: &[String]) -> Result<()> {
    writeln!(writer, "\nHere are your slides:\n")?;
    for (i, slide) in slides.iter().enumerate() {
        writeln!(writer, "=== Slide {} ===", i + 1)?;
        writeln!(writer, "{}", slide)?;
        writeln!(writer)?;
    }
    Ok(())
}
