/// Integer that prints with `'` between groups of three digits.
pub struct NiceInt(i128);

impl From<u64> for NiceInt {
    fn from(value: u64) -> Self {
        Self(value as i128)
    }
}

impl From<usize> for NiceInt {
    fn from(value: usize) -> Self {
        Self(value as i128)
    }
}

impl std::fmt::Display for NiceInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let digits = self.0.unsigned_abs().to_string();
        if self.0 < 0 {
            write!(f, "-")?;
        }
        let head = match digits.len() % 3 {
            0 => 3,
            r => r,
        };
        write!(f, "{}", &digits[..head])?;
        for group in digits.as_bytes()[head..].chunks(3) {
            // digits are ASCII
            write!(f, "'{}", std::str::from_utf8(group).unwrap_or_default())?;
        }
        Ok(())
    }
}
