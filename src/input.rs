use crate::InputError;
use std::io::{BufRead, Write};

pub const CELL_COUNT_QUESTION: &str = "How many cells would you like to have in the first generation?";
pub const RATE_QUESTION: &str = "How many generations do you want to have per second?";

/// Asks `question` and reads one integer answer from the next input line.
pub fn read_integer<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> Result<i64, InputError> {
    write!(output, "\n\n\n{}\n>>> ", question)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(InputError::UnexpectedEof);
    }
    let answer = line.trim();
    answer
        .parse::<i64>()
        .map_err(|_| InputError::NotAnInteger(answer.to_string()))
}

#[cfg(test)]
mod tests {
    use super::read_integer;
    use crate::InputError;
    use std::io::Cursor;

    fn ask(answer: &str) -> (Result<i64, InputError>, String) {
        let mut input = Cursor::new(answer.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = read_integer(&mut input, &mut output, "How many?");
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_reads_integer() {
        let (result, printed) = ask("  42 \n");
        assert_eq!(result.unwrap(), 42);
        assert!(printed.contains("How many?\n>>> "));
    }

    #[test]
    fn test_negative_is_parsed() {
        assert_eq!(ask("-3\n").0.unwrap(), -3);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(ask("ten\n").0, Err(InputError::NotAnInteger(s)) if s == "ten"));
        assert!(matches!(ask("1.5\n").0, Err(InputError::NotAnInteger(_))));
        assert!(matches!(ask("\n").0, Err(InputError::NotAnInteger(_))));
    }

    #[test]
    fn test_eof() {
        assert!(matches!(ask("").0, Err(InputError::UnexpectedEof)));
    }
}
