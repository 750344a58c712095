use std::io::{self, BufRead, Write};

/// Asks the operator for the arrival procedure when the document has none.
/// Anything but a "y..." answer followed by a non-blank code means no STAR.
pub fn ask_star_ident<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<Option<String>> {
    write!(output, "The flight plan has no STAR code. Does this route have a STAR? (y/n): ")?;
    output.flush()?;
    let answer = read_answer(input)?;
    if !answer.to_lowercase().starts_with('y') {
        return Ok(None);
    }

    write!(output, "Enter the STAR code: ")?;
    output.flush()?;
    let code = read_answer(input)?;
    Ok(if code.is_empty() { None } else { Some(code) })
}

fn read_answer<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut buf = String::new();
    input.read_line(&mut buf)?;
    Ok(buf.trim().to_string())
}
