use crate::error::ColorFormatError;

/// Parse a color in hashed hexadecimal format.
///
/// This function recognizes three, six, and eight digit formats, with the
/// latter including the alpha channel in front. Colors without alpha are
/// opaque.
pub fn parse_argb(s: &str) -> Result<u32, ColorFormatError> {
    let digits = s.strip_prefix('#').ok_or(ColorFormatError::UnknownFormat)?;
    if !digits.is_ascii() {
        return Err(ColorFormatError::UnexpectedCharacters);
    }

    let width = match digits.len() {
        3 => 1,
        6 | 8 => 2,
        _ => return Err(ColorFormatError::UnexpectedCharacters),
    };
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorFormatError::MalformedHex);
    }

    let mut argb: u32 = if digits.len() == 8 { 0 } else { 0xff };
    for index in 0..digits.len() / width {
        let t = digits
            .get(width * index..width * (index + 1))
            .ok_or(ColorFormatError::UnexpectedCharacters)?;
        let n = u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)?;
        let n = if width == 1 { 16 * n + n } else { n };
        argb = (argb << 8) | n as u32;
    }

    Ok(argb)
}

/// Format the color in hashed hexadecimal format.
///
/// Opaque colors use six hexadecimal digits, all others eight.
pub fn format_argb(argb: u32) -> String {
    if argb >> 24 == 0xff {
        format!("#{:06x}", argb & 0x00ff_ffff)
    } else {
        format!("#{:08x}", argb)
    }
}

#[cfg(test)]
mod test {
    use super::{format_argb, parse_argb};
    use crate::error::ColorFormatError;

    #[test]
    fn test_parse() {
        assert_eq!(parse_argb("#6200ee"), Ok(0xff62_00ee));
        assert_eq!(parse_argb("#abc"), Ok(0xffaa_bbcc));
        assert_eq!(parse_argb("#80ff0000"), Ok(0x80ff_0000));
        assert_eq!(parse_argb("6200ee"), Err(ColorFormatError::UnknownFormat));
        assert_eq!(parse_argb("#62"), Err(ColorFormatError::UnexpectedCharacters));
        assert_eq!(parse_argb("#6200eg"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse_argb("#+fffff"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse_argb("#+ff"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse_argb("#💩0"), Err(ColorFormatError::UnexpectedCharacters));
    }

    #[test]
    fn test_format() {
        assert_eq!(format_argb(0xff62_00ee), "#6200ee");
        assert_eq!(format_argb(0x1f00_0000), "#1f000000");
    }
}
